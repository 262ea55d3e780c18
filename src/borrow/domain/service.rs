use async_trait::async_trait;
use crate::borrow::domain::BorrowService;
use crate::borrow::dto::LoanDto;
use crate::core::domain::Configuration;
use crate::core::library::{CirculationError, CirculationResult, LoanCategory};
use crate::duedate::domain::DueDateService;
use crate::duedate::domain::model::{DueDateResult, ReferenceInstant};
use crate::gateway::calendar::HolidayFeed;
use crate::gateway::clock::TimeSource;

pub(crate) struct BorrowServiceImpl {
    branch_id: String,
    calendar_id: String,
    time_source: Box<dyn TimeSource>,
    holiday_feed: Box<dyn HolidayFeed>,
    due_date_service: Box<dyn DueDateService>,
}

impl BorrowServiceImpl {
    pub(crate) fn new(config: &Configuration, time_source: Box<dyn TimeSource>,
                      holiday_feed: Box<dyn HolidayFeed>,
                      due_date_service: Box<dyn DueDateService>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            calendar_id: config.calendar_id.to_string(),
            time_source,
            holiday_feed,
            due_date_service,
        }
    }

    // The fetches are the fallible, retryable part of the transaction; the
    // computation that follows takes them as already-resolved arguments.
    async fn compute_due_date(&self, category: LoanCategory) -> CirculationResult<(ReferenceInstant, DueDateResult)> {
        let now = self.time_source.fetch_current_instant().await?;
        let holidays = self.holiday_feed.fetch_holidays(self.calendar_id.as_str()).await?;
        let due_date = self.due_date_service.compute(category, now, &holidays)?;
        Ok((now, due_date))
    }
}

#[async_trait]
impl BorrowService for BorrowServiceImpl {
    async fn issue(&self, patron_id: &str, book_id: &str,
                   category: LoanCategory) -> CirculationResult<LoanDto> {
        if patron_id.is_empty() || book_id.is_empty() {
            return Err(CirculationError::validation(
                "patron id and book id are required to issue a book", Some("400".to_string())));
        }
        let (now, due_date) = self.compute_due_date(category).await?;
        let loan = LoanDto::from_issue(self.branch_id.as_str(), book_id, patron_id,
                                       category, &now, &due_date);
        tracing::info!(loan_id = loan.loan_id.as_str(), category = %category,
            due_at = %loan.due_at, "issued book");
        Ok(loan)
    }

    async fn preview_due_date(&self, category: LoanCategory) -> CirculationResult<DueDateResult> {
        let (_, due_date) = self.compute_due_date(category).await?;
        Ok(due_date)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::borrow::domain::BorrowService;
    use crate::borrow::domain::service::BorrowServiceImpl;
    use crate::core::domain::Configuration;
    use crate::core::library::{CirculationError, LoanCategory, LoanStatus};
    use crate::duedate::domain::model::{HolidayWindow, ReferenceInstant};
    use crate::duedate::factory::create_due_date_service;
    use crate::gateway::calendar::fixture::FixtureHolidayFeed;
    use crate::gateway::clock::fixture::FixedTimeSource;

    fn build_service(windows: Vec<HolidayWindow>) -> BorrowServiceImpl {
        let config = Configuration::new("test");
        let now = ReferenceInstant::new(NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()
            .and_hms_opt(9, 0, 0).unwrap());
        BorrowServiceImpl::new(&config,
                               Box::new(FixedTimeSource::new(now)),
                               Box::new(FixtureHolidayFeed::new(windows)),
                               create_due_date_service(&config))
    }

    #[tokio::test]
    async fn test_should_issue_with_weekend_pushed_due_date() {
        let svc = build_service(vec![]);
        let loan = svc.issue("patron1", "book1", LoanCategory::Reference)
            .await.expect("should issue");
        assert_eq!("patron1", loan.patron_id.as_str());
        assert_eq!("book1", loan.book_id.as_str());
        assert_eq!(LoanStatus::Issued, loan.loan_status);
        assert_eq!(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
                       .and_hms_opt(17, 0, 0).unwrap(), loan.due_at);
    }

    #[tokio::test]
    async fn test_should_issue_with_holiday_extended_due_date() {
        let window = HolidayWindow::single_day("festival",
                                               NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
        let svc = build_service(vec![window]);
        let loan = svc.issue("patron1", "book1", LoanCategory::Reference)
            .await.expect("should issue");
        assert_eq!(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()
                       .and_hms_opt(17, 0, 0).unwrap(), loan.due_at);
    }

    #[tokio::test]
    async fn test_should_reject_blank_ids() {
        let svc = build_service(vec![]);
        let res = svc.issue("", "book1", LoanCategory::Fiction).await;
        assert!(matches!(res, Err(CirculationError::Validation { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_reject_unknown_category() {
        let svc = build_service(vec![]);
        let res = svc.issue("patron1", "book1", LoanCategory::Unknown).await;
        assert!(matches!(res, Err(CirculationError::Configuration { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_preview_due_date() {
        let svc = build_service(vec![]);
        let res = svc.preview_due_date(LoanCategory::Fiction).await.expect("should preview");
        assert_eq!(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap()
                       .and_hms_opt(17, 0, 0).unwrap(), res.due_at);
        assert_eq!(7, res.base_days);
    }
}
