use crate::core::domain::Configuration;
use crate::duedate::domain::DueDateService;
use crate::duedate::domain::service::DueDateCalculator;

pub(crate) fn create_due_date_service(config: &Configuration) -> Box<dyn DueDateService> {
    Box::new(DueDateCalculator::new(config))
}
