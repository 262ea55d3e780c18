use async_trait::async_trait;
use crate::core::library::CirculationError;

#[derive(Debug)]
pub enum CommandError {
    Configuration {
        message: String,
        reason_code: Option<String>,
    },
    HolidayData {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Other {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CirculationError> for CommandError {
    fn from(other: CirculationError) -> Self {
        match other {
            CirculationError::Configuration { message, reason_code } => {
                CommandError::Configuration { message, reason_code }
            }
            CirculationError::HolidayData { message, reason_code } => {
                CommandError::HolidayData { message, reason_code }
            }
            CirculationError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CirculationError::CurrentlyUnavailable { message, reason_code, retryable } => {
                CommandError::Runtime { message, reason_code, retryable }
            }
            CirculationError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            CirculationError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            CirculationError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: true }
            }
        }
    }
}
