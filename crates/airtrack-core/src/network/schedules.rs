//! Scheduled departure times per route

use super::airports::code_part;

/// Fallback departure times for routes without a published schedule
pub const DEFAULT_TIMES: [&str; 3] = ["06:00", "12:00", "18:00"];

/// Published departure times, keyed by "DEP-ARR" airport codes
const SCHEDULES: [(&str, &[&str]); 15] = [
    // Domestic Kenya
    ("NBO-MBA", &["06:00", "09:30", "13:00", "16:30", "19:00"]),
    ("NBO-KIS", &["07:00", "11:00", "15:00", "18:00"]),
    ("NBO-EDL", &["08:00", "12:00", "16:00"]),
    // Regional East Africa
    ("NBO-DAR", &["08:30", "14:00", "18:30"]),
    ("NBO-EBB", &["09:00", "15:00"]),
    ("NBO-ADD", &["07:00", "13:00", "19:00"]),
    // Middle East
    ("NBO-DXB", &["02:30", "14:30", "23:45"]),
    ("NBO-DOH", &["03:00", "15:00"]),
    // Europe, mostly night departures
    ("NBO-LHR", &["23:45"]),
    ("NBO-CDG", &["21:15", "23:30"]),
    ("NBO-AMS", &["22:00"]),
    // Asia
    ("NBO-BOM", &["02:00", "14:00"]),
    ("NBO-BKK", &["23:30"]),
    // Southern Africa
    ("NBO-JNB", &["06:00", "10:30", "16:20", "20:00"]),
    ("NBO-CPT", &["11:00", "17:30"]),
];

/// Departure times for a route
///
/// Accepts airport descriptors or bare codes. Falls back to the
/// reverse direction when the route itself is unpublished, then to
/// `DEFAULT_TIMES`.
pub fn departure_times(departure: &str, arrival: &str) -> &'static [&'static str] {
    let dep = code_part(departure);
    let arr = code_part(arrival);
    let route = format!("{}-{}", dep, arr);
    let reverse = format!("{}-{}", arr, dep);

    SCHEDULES
        .iter()
        .find(|(key, _)| *key == route)
        .or_else(|| SCHEDULES.iter().find(|(key, _)| *key == reverse))
        .map(|(_, times)| *times)
        .unwrap_or(&DEFAULT_TIMES)
}
