use chrono::{NaiveDate, Utc};
use crate::duedate::domain::model::ReferenceInstant;
use crate::gateway::GatewayProviderVia;
use crate::gateway::calendar::HolidayFeed;
use crate::gateway::calendar::bundled::BundledHolidayFeed;
use crate::gateway::calendar::fixture::FixtureHolidayFeed;
use crate::gateway::clock::TimeSource;
use crate::gateway::clock::fixture::FixedTimeSource;
use crate::gateway::clock::system::SystemTimeSource;

pub(crate) async fn create_time_source(via: GatewayProviderVia) -> Box<dyn TimeSource> {
    match via {
        GatewayProviderVia::System => {
            Box::new(SystemTimeSource::new())
        }
        GatewayProviderVia::Fixture => {
            // a Wednesday morning, so fixture loans exercise the weekend push
            let fixed = NaiveDate::from_ymd_opt(2026, 1, 7)
                .and_then(|date| date.and_hms_opt(9, 0, 0))
                .unwrap_or_else(|| Utc::now().naive_utc());
            Box::new(FixedTimeSource::new(ReferenceInstant::new(fixed)))
        }
    }
}

pub(crate) async fn create_holiday_feed(via: GatewayProviderVia) -> Box<dyn HolidayFeed> {
    match via {
        GatewayProviderVia::System => {
            Box::new(BundledHolidayFeed::new())
        }
        GatewayProviderVia::Fixture => {
            Box::new(FixtureHolidayFeed::new(vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::GatewayProviderVia;
    use crate::gateway::factory::{create_holiday_feed, create_time_source};

    #[tokio::test]
    async fn test_should_create_time_sources() {
        let system = create_time_source(GatewayProviderVia::System).await;
        let _ = system.fetch_current_instant().await.expect("should fetch");
        let fixture = create_time_source(GatewayProviderVia::Fixture).await;
        let first = fixture.fetch_current_instant().await.expect("should fetch");
        let second = fixture.fetch_current_instant().await.expect("should fetch");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_should_create_holiday_feeds() {
        let system = create_holiday_feed(GatewayProviderVia::System).await;
        let windows = system.fetch_holidays("national").await.expect("should fetch");
        assert!(!windows.is_empty());
        let fixture = create_holiday_feed(GatewayProviderVia::Fixture).await;
        let windows = fixture.fetch_holidays("national").await.expect("should fetch");
        assert!(windows.is_empty());
    }
}
