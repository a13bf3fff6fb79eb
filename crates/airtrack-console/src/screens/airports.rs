//! Airport catalog screen

use std::error::Error;

use clap::Args;

use airtrack_core::errors::AirtrackError;
use airtrack_core::network::airports;

#[derive(Debug, Args)]
pub struct AirportsArgs {
    /// Show a single airport by code instead of the whole catalog
    pub code: Option<String>,
}

pub fn execute(args: AirportsArgs) -> Result<(), Box<dyn Error>> {
    if let Some(code) = args.code {
        let airport = airports::find(&code).ok_or_else(|| AirtrackError::UnknownAirport {
            code: code.trim().to_string(),
        })?;
        println!(
            "{}  {}, {}  ({})",
            airport.code, airport.city, airport.country, airport.name
        );
        return Ok(());
    }

    println!(
        "{:<6} {:<16} {:<14} {}",
        "CODE", "CITY", "COUNTRY", "AIRPORT"
    );
    for airport in &airports::AIRPORTS {
        println!(
            "{:<6} {:<16} {:<14} {}",
            airport.code, airport.city, airport.country, airport.name
        );
    }

    Ok(())
}
