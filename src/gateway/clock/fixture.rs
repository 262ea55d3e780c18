use async_trait::async_trait;
use crate::core::library::CirculationResult;
use crate::duedate::domain::model::ReferenceInstant;
use crate::gateway::clock::TimeSource;

// FixedTimeSource always answers with the same instant, which keeps borrow
// transactions deterministic in local dev and tests.
pub(crate) struct FixedTimeSource {
    instant: ReferenceInstant,
}

impl FixedTimeSource {
    pub(crate) fn new(instant: ReferenceInstant) -> Self {
        Self {
            instant,
        }
    }
}

#[async_trait]
impl TimeSource for FixedTimeSource {
    async fn fetch_current_instant(&self) -> CirculationResult<ReferenceInstant> {
        Ok(self.instant)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::duedate::domain::model::ReferenceInstant;
    use crate::gateway::clock::TimeSource;
    use crate::gateway::clock::fixture::FixedTimeSource;

    #[tokio::test]
    async fn test_should_fetch_fixed_instant() {
        let at = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let source = FixedTimeSource::new(ReferenceInstant::new(at));
        let instant = source.fetch_current_instant().await.expect("should fetch");
        assert_eq!(at, instant.0);
    }
}
