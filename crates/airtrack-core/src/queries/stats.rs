//! Live dashboard aggregates computed from the store
//!
//! Unlike the fixed analytics snapshot in `reports`, everything here
//! recomputes on each call and reflects the session's actual data.

use serde::Serialize;

use crate::model::{BookingStatus, Flight};
use crate::network::airports;
use crate::ops::Store;

/// Headline counts for the dashboard cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_flights: usize,
    pub total_passengers: usize,
    pub total_bookings: usize,
    /// Sum of prices on non-cancelled bookings, in KSH
    pub total_revenue: u64,
}

/// Compute the headline counts
///
/// Revenue counts confirmed and pending bookings; cancelled ones keep
/// their record but contribute nothing.
pub fn dashboard_stats(store: &Store) -> DashboardStats {
    let total_revenue = store
        .bookings()
        .iter()
        .filter(|booking| booking.status != BookingStatus::Cancelled)
        .map(|booking| booking.price)
        .sum();

    DashboardStats {
        total_flights: store.flights().len(),
        total_passengers: store.passengers().len(),
        total_bookings: store.bookings().len(),
        total_revenue,
    }
}

/// The most recently added flights, up to `limit`
///
/// The store is newest-first already, so this is a prefix slice.
pub fn recent_flights(store: &Store, limit: usize) -> &[Flight] {
    let end = limit.min(store.flights().len());
    &store.flights()[..end]
}

/// One destination row for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationStat {
    pub city: String,
    pub flights: usize,
}

/// Destinations ranked by number of scheduled flights, up to `limit`
///
/// Ties break alphabetically by city so the ranking is deterministic.
pub fn top_destinations(store: &Store, limit: usize) -> Vec<DestinationStat> {
    let mut counts: Vec<DestinationStat> = Vec::new();
    for flight in store.flights() {
        let city = airports::city_part(&flight.arrival);
        match counts.iter_mut().find(|stat| stat.city == city) {
            Some(stat) => stat.flights += 1,
            None => counts.push(DestinationStat {
                city: city.to_string(),
                flights: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.flights.cmp(&a.flights).then_with(|| a.city.cmp(&b.city)));
    counts.truncate(limit);
    counts
}
