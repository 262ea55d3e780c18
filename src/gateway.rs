use serde::{Deserialize, Serialize};

pub mod calendar;
pub mod clock;
pub mod factory;

// Selects the provider wiring for the external time and calendar services.
// Fixture providers are deterministic and used for local dev and tests.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum GatewayProviderVia {
    System,
    Fixture,
}
