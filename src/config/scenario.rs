use crate::core::package::TravelPackage;
use crate::core::report::{ReportSettings, DEFAULT_CURRENCY_SYMBOL};
use crate::domain::model::{Activity, Destination};
use crate::domain::passenger::{GoldPassenger, Passenger, PremiumPassenger, StandardPassenger};
use crate::utils::error::Result;
use crate::utils::validation::{validate_known_value, validate_required_field, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const DREAM_VACATION: &str = include_str!("../../scenarios/dream_vacation.toml");

/// Declarative description of a travel package and how to report on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub package: PackageConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub destinations: Vec<DestinationConfig>,
    #[serde(default)]
    pub passengers: Vec<PassengerConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    pub name: String,
    pub passenger_capacity: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub currency_symbol: Option<String>,
    pub detail_passenger: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    pub name: String,
    #[serde(default)]
    pub activities: Vec<ActivityConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cost: Decimal,
    pub capacity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "lowercase")]
pub enum PassengerConfig {
    Standard {
        name: String,
        number: u32,
        balance: Decimal,
    },
    Gold {
        name: String,
        number: u32,
        balance: Decimal,
    },
    Premium {
        name: String,
        number: u32,
    },
}

impl PassengerConfig {
    pub fn number(&self) -> u32 {
        match self {
            PassengerConfig::Standard { number, .. }
            | PassengerConfig::Gold { number, .. }
            | PassengerConfig::Premium { number, .. } => *number,
        }
    }

    fn to_passenger(&self) -> Passenger {
        match self {
            PassengerConfig::Standard {
                name,
                number,
                balance,
            } => StandardPassenger::new(name.clone(), *number, *balance).into(),
            PassengerConfig::Gold {
                name,
                number,
                balance,
            } => GoldPassenger::new(name.clone(), *number, *balance).into(),
            PassengerConfig::Premium { name, number } => {
                PremiumPassenger::new(name.clone(), *number).into()
            }
        }
    }
}

impl ScenarioConfig {
    /// The built-in Dream Vacation package.
    pub fn dream_vacation() -> Result<Self> {
        Self::from_toml_str(DREAM_VACATION)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn with_currency_symbol(mut self, symbol: Option<String>) -> Self {
        if let Some(symbol) = symbol {
            tracing::info!("Currency symbol overridden to: {}", symbol);
            self.report.currency_symbol = Some(symbol);
        }
        self
    }

    pub fn with_detail_passenger(mut self, number: Option<u32>) -> Self {
        if let Some(number) = number {
            tracing::info!("Detail passenger overridden to: {}", number);
            self.report.detail_passenger = Some(number);
        }
        self
    }

    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            currency_symbol: self
                .report
                .currency_symbol
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
        }
    }

    pub fn detail_passenger(&self) -> Result<u32> {
        validate_required_field("report.detail_passenger", &self.report.detail_passenger).copied()
    }

    /// Builds the package. Activities point back at the destination they are listed under.
    pub fn build(&self) -> TravelPackage {
        let mut package =
            TravelPackage::new(self.package.name.clone(), self.package.passenger_capacity);

        for destination_config in &self.destinations {
            let mut destination = Destination::new(destination_config.name.clone());
            for activity in &destination_config.activities {
                let activity = Activity::new(
                    activity.name.clone(),
                    activity.description.clone(),
                    activity.cost,
                    activity.capacity,
                    &destination,
                );
                destination.add_activity(activity);
            }
            package.add_destination(destination);
        }

        for passenger in &self.passengers {
            package.add_passenger(passenger.to_passenger());
        }

        tracing::debug!(
            destinations = package.itinerary().len(),
            passengers = package.passengers().len(),
            "Built travel package from scenario"
        );
        package
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        let detail = self.detail_passenger()?;
        let numbers: Vec<u32> = self.passengers.iter().map(PassengerConfig::number).collect();
        validate_known_value("report.detail_passenger", &detail, &numbers)?;

        Ok(())
    }
}
