pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::scenario::ScenarioConfig;
pub use crate::core::{
    package::TravelPackage,
    report::{ReportEngine, ReportSettings},
};
pub use domain::model::{Activity, Destination, DestinationId};
pub use domain::passenger::{FareClass, GoldPassenger, Passenger, PremiumPassenger, StandardPassenger};
pub use domain::ports::Traveler;
pub use utils::error::{Result, TravelError};
