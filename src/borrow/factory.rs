use crate::borrow::domain::BorrowService;
use crate::borrow::domain::service::BorrowServiceImpl;
use crate::core::domain::Configuration;
use crate::duedate::factory::create_due_date_service;
use crate::gateway::GatewayProviderVia;
use crate::gateway::factory::{create_holiday_feed, create_time_source};

pub(crate) async fn create_borrow_service(config: &Configuration,
                                          via: GatewayProviderVia) -> Box<dyn BorrowService> {
    let time_source = create_time_source(via).await;
    let holiday_feed = create_holiday_feed(via).await;
    let due_date_service = create_due_date_service(config);
    Box::new(BorrowServiceImpl::new(config, time_source, holiday_feed, due_date_service))
}
