pub mod scenario;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "travel-package")]
#[command(about = "Prints the itinerary, roster and capacity report for a travel package")]
pub struct CliConfig {
    /// Currency symbol used in cost and balance lines
    #[arg(long)]
    pub currency_symbol: Option<String>,

    /// Passenger number to show in the details section
    #[arg(long)]
    pub detail: Option<u32>,

    /// Print the effective scenario as TOML and exit
    #[arg(long)]
    pub dump_scenario: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
