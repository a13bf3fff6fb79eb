//! Reports screen: the fixed monthly analytics snapshot

use std::error::Error;

use airtrack_core::queries::reports;

pub fn execute() -> Result<(), Box<dyn Error>> {
    println!("Key metrics (last month):");
    for metric in &reports::KEY_METRICS {
        println!(
            "  {:<16} {:>10}  {:>7}",
            metric.title, metric.value, metric.change
        );
    }

    println!();
    println!("Top destinations:");
    println!(
        "  {:<14} {:<22} {:>7} {:>12} {:>8}",
        "CITY", "COUNTRY", "FLIGHTS", "REVENUE", "GROWTH"
    );
    for dest in &reports::TOP_DESTINATIONS {
        println!(
            "  {:<14} {:<22} {:>7} {:>12} {:>7}%",
            dest.city, dest.country, dest.flights, dest.revenue, dest.growth_pct
        );
    }

    println!();
    println!("Daily bookings (peak {}):", reports::peak_daily_bookings());
    for day in &reports::DAILY_BOOKINGS {
        println!("  {:<7} {:>3} bookings  KSH {:>10}", day.date, day.bookings, day.revenue);
    }

    println!();
    println!("Monthly revenue vs target:");
    for month in &reports::MONTHLY_REVENUE {
        let mark = if month.on_target() { "met" } else { "missed" };
        println!(
            "  {:<4} KSH {:>11} / {:>11}  target {}",
            month.month, month.revenue, month.target, mark
        );
    }

    println!();
    println!("Fleet utilization:");
    for fleet in &reports::FLEET_UTILIZATION {
        println!(
            "  {:<11} {:>3}%  {:>3} flights",
            fleet.aircraft, fleet.utilization_pct, fleet.flights
        );
    }

    Ok(())
}
