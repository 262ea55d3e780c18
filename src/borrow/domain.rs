use async_trait::async_trait;
use crate::borrow::dto::LoanDto;
use crate::core::library::{CirculationResult, LoanCategory};
use crate::duedate::domain::model::DueDateResult;

pub mod service;

#[async_trait]
pub(crate) trait BorrowService: Sync + Send {
    async fn issue(&self, patron_id: &str, book_id: &str,
                   category: LoanCategory) -> CirculationResult<LoanDto>;
    async fn preview_due_date(&self, category: LoanCategory) -> CirculationResult<DueDateResult>;
}
