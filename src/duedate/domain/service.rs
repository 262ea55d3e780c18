use chrono::{Datelike, Duration, NaiveDate, Weekday};
use crate::core::domain::Configuration;
use crate::core::library::{CirculationError, CirculationResult, LoanCategory};
use crate::duedate::domain::DueDateService;
use crate::duedate::domain::model::{DueDateResult, HolidayWindow, ReferenceInstant};

// DueDateCalculator is the single authority for due dates. The base duration
// comes from the category configuration, a due date landing on a closed
// weekend day is pushed forward to the next business day (never pulled back,
// which would shorten the loan), and consecutive holiday days starting at the
// adjusted date extend the loan once, additively. The shifted final date is
// deliberately not re-checked against weekends or holidays; the residual
// inaccuracy matches the long-standing circulation policy.
pub(crate) struct DueDateCalculator {
    config: Configuration,
}

impl DueDateCalculator {
    pub(crate) fn new(config: &Configuration) -> Self {
        Self {
            config: config.clone(),
        }
    }

    // Scans forward from the weekend-adjusted date and counts consecutive
    // holiday days. Weekend days are skipped without counting; the scan stops
    // at the first day that is neither. The iteration cap turns malformed
    // calendar data into an error instead of an unbounded loop.
    fn count_holiday_days(&self, from: NaiveDate, holidays: &[HolidayWindow]) -> CirculationResult<i64> {
        let mut candidate = from;
        let mut holiday_days: i64 = 0;
        let mut scanned: u32 = 0;
        loop {
            if scanned >= self.config.max_holiday_scan_days {
                return Err(CirculationError::holiday_data(
                    format!("holiday scan exceeded {} days starting {}",
                            self.config.max_holiday_scan_days, from).as_str(),
                    Some("422".to_string())));
            }
            scanned += 1;
            if is_weekend(candidate) {
                candidate += Duration::days(1);
                continue;
            }
            if holidays.iter().any(|window| window.contains(candidate)) {
                holiday_days += 1;
                candidate += Duration::days(1);
                continue;
            }
            return Ok(holiday_days);
        }
    }
}

impl DueDateService for DueDateCalculator {
    fn compute(&self, category: LoanCategory, now: ReferenceInstant,
               holidays: &[HolidayWindow]) -> CirculationResult<DueDateResult> {
        // the category table is the single source of the "unknown category
        // fails" rule
        let base_days = self.config.loan_days_for(category)?;
        // calendar-day addition on the date, not 24h multiples
        let base = now.date() + Duration::days(base_days);
        let weekend_days = match base.weekday() {
            Weekday::Sat => 2,
            Weekday::Sun => 1,
            _ => 0,
        };
        let adjusted = base + Duration::days(weekend_days);
        let holiday_days = self.count_holiday_days(adjusted, holidays)?;
        let final_date = adjusted + Duration::days(holiday_days);
        let due_at = final_date.and_hms_opt(self.config.due_hour, 0, 0)
            .ok_or_else(|| CirculationError::configuration(
                format!("due hour {} is not a valid hour of day", self.config.due_hour).as_str(),
                Some("400".to_string())))?;
        Ok(DueDateResult {
            due_at,
            base_days,
            weekend_days_added: weekend_days,
            holiday_days_added: holiday_days,
        })
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
