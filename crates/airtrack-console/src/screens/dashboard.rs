//! Dashboard screen: live aggregates over the session's store

use std::error::Error;

use clap::Args;

use airtrack_core::queries::stats;

use crate::repl::Session;
use crate::screens::OutputFormat;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Output format for the headline stats
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn execute(session: &mut Session, args: DashboardArgs) -> Result<(), Box<dyn Error>> {
    let stats_block = stats::dashboard_stats(&session.store);

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&stats_block)?);
        return Ok(());
    }

    println!("Flights:    {}", stats_block.total_flights);
    println!("Passengers: {}", stats_block.total_passengers);
    println!("Bookings:   {}", stats_block.total_bookings);
    println!("Revenue:    KSH {}", stats_block.total_revenue);

    let recent = stats::recent_flights(&session.store, 4);
    if !recent.is_empty() {
        println!();
        println!("Recent flights:");
        for flight in recent {
            println!(
                "  {:<8} {} to {} ({})",
                flight.flight_number,
                flight.departure,
                flight.arrival,
                flight.status
            );
        }
    }

    let top = stats::top_destinations(&session.store, 4);
    if !top.is_empty() {
        println!();
        println!("Top destinations:");
        for stat in top {
            let plural = if stat.flights == 1 { "flight" } else { "flights" };
            println!("  {:<16} {} {}", stat.city, stat.flights, plural);
        }
    }

    Ok(())
}
