use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::borrow::domain::BorrowService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LoanCategory;
use crate::duedate::domain::model::DueDateResult;

pub(crate) struct PreviewDueDateCommand {
    borrow_service: Box<dyn BorrowService>,
}

impl PreviewDueDateCommand {
    pub(crate) fn new(borrow_service: Box<dyn BorrowService>) -> Self {
        Self {
            borrow_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PreviewDueDateCommandRequest {
    category: String,
}

impl PreviewDueDateCommandRequest {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PreviewDueDateCommandResponse {
    due_date: DueDateResult,
}

impl PreviewDueDateCommandResponse {
    pub fn new(due_date: DueDateResult) -> Self {
        Self {
            due_date,
        }
    }
}

#[async_trait]
impl Command<PreviewDueDateCommandRequest, PreviewDueDateCommandResponse> for PreviewDueDateCommand {
    async fn execute(&self, req: PreviewDueDateCommandRequest) -> Result<PreviewDueDateCommandResponse, CommandError> {
        self.borrow_service.preview_due_date(LoanCategory::from(req.category))
            .await.map_err(CommandError::from).map(PreviewDueDateCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use chrono::NaiveDate;
    use crate::borrow::command::preview_due_date_cmd::{PreviewDueDateCommand, PreviewDueDateCommandRequest};
    use crate::borrow::factory::create_borrow_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayProviderVia;

    lazy_static! {
        static ref PREVIEW_CMD: AsyncOnce<PreviewDueDateCommand> = AsyncOnce::new(async {
                let svc = create_borrow_service(&Configuration::new("test"), GatewayProviderVia::Fixture).await;
                PreviewDueDateCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_preview_due_date() {
        let preview_cmd: &PreviewDueDateCommand = PREVIEW_CMD.get().await.clone();

        let res = preview_cmd.execute(PreviewDueDateCommandRequest::new("Fiction"))
            .await.expect("should preview due date");
        assert_eq!(7, res.due_date.base_days);
        assert_eq!(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap()
                       .and_hms_opt(17, 0, 0).unwrap(), res.due_date.due_at);
    }
}
