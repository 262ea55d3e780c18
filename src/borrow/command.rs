pub mod issue_book_cmd;
pub mod preview_due_date_cmd;
