use async_trait::async_trait;
use crate::core::library::CirculationResult;
use crate::duedate::domain::model::HolidayWindow;

pub mod bundled;
pub mod fixture;

// HolidayFeed serves the holiday windows overlapping the plausible due-date
// range for a calendar. The feed may return a partial or empty set; the
// due-date calculation treats whatever it receives as read-only truth.
#[async_trait]
pub(crate) trait HolidayFeed: Sync + Send {
    async fn fetch_holidays(&self, calendar_id: &str) -> CirculationResult<Vec<HolidayWindow>>;
}
