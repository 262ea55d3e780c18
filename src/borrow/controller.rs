use axum::{
    extract::State,
    response::Json,
};
use serde_json::Value;
use crate::borrow::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest, IssueBookCommandResponse};
use crate::borrow::command::preview_due_date_cmd::{PreviewDueDateCommand, PreviewDueDateCommandRequest, PreviewDueDateCommandResponse};
use crate::borrow::domain::BorrowService;
use crate::borrow::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

async fn build_service(state: AppState) -> Box<dyn BorrowService> {
    factory::create_borrow_service(&state.config, state.via).await
}

pub(crate) async fn issue_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<IssueBookCommandResponse>, ServerError> {
    let req: IssueBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = IssueBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn preview_due_date(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<PreviewDueDateCommandResponse>, ServerError> {
    let req: PreviewDueDateCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = PreviewDueDateCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
