use async_trait::async_trait;
use crate::core::library::CirculationResult;
use crate::duedate::domain::model::HolidayWindow;
use crate::gateway::calendar::HolidayFeed;

// FixtureHolidayFeed serves exactly the windows it was built with, for any
// calendar id. Used by tests and local dev wiring.
pub(crate) struct FixtureHolidayFeed {
    windows: Vec<HolidayWindow>,
}

impl FixtureHolidayFeed {
    pub(crate) fn new(windows: Vec<HolidayWindow>) -> Self {
        Self {
            windows,
        }
    }
}

#[async_trait]
impl HolidayFeed for FixtureHolidayFeed {
    async fn fetch_holidays(&self, _calendar_id: &str) -> CirculationResult<Vec<HolidayWindow>> {
        Ok(self.windows.clone())
    }
}
