use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum CirculationError {
    // A loan category has no configured duration. Never defaulted silently;
    // the calling transaction must surface this to the operator.
    Configuration {
        message: String,
        reason_code: Option<String>,
    },
    // The holiday scan exceeded its iteration cap, which indicates malformed
    // calendar data. The calling transaction should refuse to issue the book
    // rather than proceed with an unvalidated due date.
    HolidayData {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    // This is a retry-able error raised when an upstream time or calendar
    // provider could not serve the request; the caller decides whether to
    // retry the fetch or abort the transaction.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CirculationError {
    pub fn configuration(message: &str, reason_code: Option<String>) -> CirculationError {
        CirculationError::Configuration { message: message.to_string(), reason_code }
    }

    pub fn holiday_data(message: &str, reason_code: Option<String>) -> CirculationError {
        CirculationError::HolidayData { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> CirculationError {
        CirculationError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> CirculationError {
        CirculationError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CirculationError {
        CirculationError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> CirculationError {
        CirculationError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> CirculationError {
        CirculationError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CirculationError::Configuration { .. } => { false }
            CirculationError::HolidayData { .. } => { false }
            CirculationError::NotFound { .. } => { false }
            CirculationError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            CirculationError::Validation { .. } => { false }
            CirculationError::Serialization { .. } => { false }
            CirculationError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for CirculationError {
    fn from(err: std::io::Error) -> Self {
        CirculationError::runtime(
            format!("serde io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for CirculationError {
    fn from(err: serde_json::Error) -> Self {
        CirculationError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for CirculationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CirculationError::Configuration { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CirculationError::HolidayData { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CirculationError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CirculationError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            CirculationError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CirculationError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CirculationError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for circulation services.
pub type CirculationResult<T> = Result<T, CirculationError>;

// LoanCategory drives the base loan duration of a borrow transaction. Unknown
// carries no configured duration on purpose, so an unrecognized category fails
// the transaction instead of guessing a duration.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum LoanCategory {
    Fiction,
    NonFiction,
    Reference,
    Periodical,
    Unknown,
}

impl From<String> for LoanCategory {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Fiction" => LoanCategory::Fiction,
            "NonFiction" => LoanCategory::NonFiction,
            "Reference" => LoanCategory::Reference,
            "Periodical" => LoanCategory::Periodical,
            _ => LoanCategory::Unknown,
        }
    }
}

impl Display for LoanCategory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanCategory::Fiction => write!(f, "Fiction"),
            LoanCategory::NonFiction => write!(f, "NonFiction"),
            LoanCategory::Reference => write!(f, "Reference"),
            LoanCategory::Periodical => write!(f, "Periodical"),
            LoanCategory::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum LoanStatus {
    Issued,
    Returned,
}

impl From<String> for LoanStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Issued" => LoanStatus::Issued,
            "Returned" => LoanStatus::Returned,
            _ => LoanStatus::Issued,
        }
    }
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanStatus::Issued => write!(f, "Issued"),
            LoanStatus::Returned => write!(f, "Returned"),
        }
    }
}
