use async_trait::async_trait;
use crate::core::library::CirculationResult;
use crate::duedate::domain::model::ReferenceInstant;

pub mod fixture;
pub mod system;

// TimeSource supplies the authoritative "current time" for a borrow
// transaction so a client clock can never influence the loan period. The
// fetch is fallible and retryable; the due-date calculation itself is not.
#[async_trait]
pub(crate) trait TimeSource: Sync + Send {
    async fn fetch_current_instant(&self) -> CirculationResult<ReferenceInstant>;
}
