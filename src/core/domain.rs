use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::core::library::{CirculationError, CirculationResult, LoanCategory};

// Configuration abstracts config options for the circulation system, including
// the per-category loan durations that every borrow transaction must resolve.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub calendar_id: String,
    // hour-of-day the due timestamp is fixed to, end of business
    pub due_hour: u32,
    // cap on the holiday scan so malformed calendar data cannot loop forever
    pub max_holiday_scan_days: u32,
    pub loan_days: HashMap<LoanCategory, i64>,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            calendar_id: "national".to_string(),
            due_hour: 17,
            max_holiday_scan_days: 366,
            loan_days: HashMap::from([
                (LoanCategory::Fiction, 7),
                (LoanCategory::NonFiction, 7),
                (LoanCategory::Reference, 3),
                (LoanCategory::Periodical, 3),
            ]),
        }
    }

    // Unknown or unconfigured categories fail here instead of defaulting.
    pub fn loan_days_for(&self, category: LoanCategory) -> CirculationResult<i64> {
        match self.loan_days.get(&category) {
            Some(days) => Ok(*days),
            None => Err(CirculationError::configuration(
                format!("no loan duration configured for category {}", category).as_str(),
                Some("400".to_string()))),
        }
    }
}
