use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::library::{LoanCategory, LoanStatus};
use crate::duedate::domain::model::{DueDateResult, ReferenceInstant};
use crate::utils::date::serializer;

// LoanDto abstracts one issued book. Persisting it is the caller's concern;
// the borrow service only materializes it with a validated due date.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct LoanDto {
    pub loan_id: String,
    pub version: i64,
    pub branch_id: String,
    pub book_id: String,
    pub patron_id: String,
    pub category: LoanCategory,
    pub loan_status: LoanStatus,
    #[serde(with = "serializer")]
    pub borrowed_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    pub returned_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl LoanDto {
    pub fn from_issue(branch_id: &str, book_id: &str, patron_id: &str,
                      category: LoanCategory, now: &ReferenceInstant,
                      due_date: &DueDateResult) -> Self {
        Self {
            loan_id: Uuid::new_v4().to_string(),
            version: 0,
            branch_id: branch_id.to_string(),
            book_id: book_id.to_string(),
            patron_id: patron_id.to_string(),
            category,
            loan_status: LoanStatus::Issued,
            borrowed_at: now.0,
            due_at: due_date.due_at,
            returned_at: None,
            created_at: now.0,
            updated_at: now.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::borrow::dto::LoanDto;
    use crate::core::library::{LoanCategory, LoanStatus};
    use crate::duedate::domain::model::{DueDateResult, ReferenceInstant};

    #[tokio::test]
    async fn test_should_build_loan() {
        let now = ReferenceInstant::new(NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()
            .and_hms_opt(9, 0, 0).unwrap());
        let due_date = DueDateResult {
            due_at: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap().and_hms_opt(17, 0, 0).unwrap(),
            base_days: 3,
            weekend_days_added: 2,
            holiday_days_added: 0,
        };
        let loan = LoanDto::from_issue("branch1", "book1", "patron1",
                                       LoanCategory::Reference, &now, &due_date);
        assert_eq!("book1", loan.book_id.as_str());
        assert_eq!("patron1", loan.patron_id.as_str());
        assert_eq!(LoanStatus::Issued, loan.loan_status);
        assert_eq!(due_date.due_at, loan.due_at);
    }
}
