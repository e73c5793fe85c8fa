use crate::core::package::TravelPackage;
use crate::domain::passenger::Passenger;
use crate::utils::error::Result;
use std::io::Write;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub currency_symbol: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// Runs the console report: itinerary, passenger list, one passenger's
/// details, then available activities, separated by blank lines.
pub struct ReportEngine<'a> {
    package: &'a TravelPackage,
    settings: ReportSettings,
}

impl<'a> ReportEngine<'a> {
    pub fn new(package: &'a TravelPackage, settings: ReportSettings) -> Self {
        Self { package, settings }
    }

    pub fn run<W: Write>(&self, out: &mut W, detail: &Passenger) -> Result<()> {
        tracing::info!(package = %self.package.name(), "Generating travel package report");

        self.package.write_itinerary(out, &self.settings)?;
        writeln!(out)?;
        self.package.write_passenger_list(out)?;
        writeln!(out)?;
        self.package
            .write_passenger_details(out, detail, &self.settings)?;
        writeln!(out)?;
        self.package.write_available_activities(out)?;

        out.flush()?;
        tracing::info!("Report complete");
        Ok(())
    }
}
