use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::borrow::domain::BorrowService;
use crate::borrow::dto::LoanDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::LoanCategory;

pub(crate) struct IssueBookCommand {
    borrow_service: Box<dyn BorrowService>,
}

impl IssueBookCommand {
    pub(crate) fn new(borrow_service: Box<dyn BorrowService>) -> Self {
        Self {
            borrow_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueBookCommandRequest {
    patron_id: String,
    book_id: String,
    category: String,
}

impl IssueBookCommandRequest {
    pub fn new(patron_id: &str, book_id: &str, category: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
            category: category.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct IssueBookCommandResponse {
    loan: LoanDto,
}

impl IssueBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand {
    async fn execute(&self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        self.borrow_service.issue(req.patron_id.as_str(), req.book_id.as_str(),
                                  LoanCategory::from(req.category))
            .await.map_err(CommandError::from).map(IssueBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use chrono::NaiveDate;
    use crate::borrow::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
    use crate::borrow::factory::create_borrow_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayProviderVia;

    lazy_static! {
        static ref ISSUE_CMD: AsyncOnce<IssueBookCommand> = AsyncOnce::new(async {
                let svc = create_borrow_service(&Configuration::new("test"), GatewayProviderVia::Fixture).await;
                IssueBookCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_issue_book() {
        let issue_cmd: &IssueBookCommand = ISSUE_CMD.get().await.clone();

        let res = issue_cmd.execute(IssueBookCommandRequest::new(
            "patron1", "book1", "Reference")).await.expect("should issue book");
        assert_eq!("patron1", res.loan.patron_id.as_str());
        assert_eq!("book1", res.loan.book_id.as_str());
        // fixture clock is Wednesday 2026-01-07, so a 3-day loan is pushed
        // over the weekend to Monday
        assert_eq!(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
                       .and_hms_opt(17, 0, 0).unwrap(), res.loan.due_at);
    }

    #[tokio::test]
    async fn test_should_fail_issue_book_for_unknown_category() {
        let issue_cmd: &IssueBookCommand = ISSUE_CMD.get().await.clone();

        let res = issue_cmd.execute(IssueBookCommandRequest::new(
            "patron1", "book1", "Mystery")).await;
        assert!(matches!(res, Err(CommandError::Configuration { message: _, reason_code: _ })));
    }
}
