use async_trait::async_trait;
use chrono::Utc;
use crate::core::library::CirculationResult;
use crate::duedate::domain::model::ReferenceInstant;
use crate::gateway::clock::TimeSource;

// SystemTimeSource reads the host clock. Deployments that cannot trust the
// host clock wire their own adapter against the remote time API instead.
pub(crate) struct SystemTimeSource {}

impl SystemTimeSource {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl TimeSource for SystemTimeSource {
    async fn fetch_current_instant(&self) -> CirculationResult<ReferenceInstant> {
        Ok(ReferenceInstant::new(Utc::now().naive_utc()))
    }
}
