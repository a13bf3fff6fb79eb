//! Fixed analytics snapshot for the reports screen
//!
//! Reports show a point-in-time analytics extract: last month's key
//! metrics, destination performance, a week of daily bookings, six
//! months of revenue against target, and fleet utilization. The
//! snapshot is compiled in and does not track the session's store;
//! live session data belongs to `stats`.

/// One headline metric card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMetric {
    pub title: &'static str,
    pub value: &'static str,
    /// Month-over-month change, preformatted, e.g. "+12.5%"
    pub change: &'static str,
}

/// Headline metrics for the reporting period
pub const KEY_METRICS: [KeyMetric; 4] = [
    KeyMetric { title: "Total Revenue", value: "KSH 285M", change: "+12.5%" },
    KeyMetric { title: "Monthly Flights", value: "1,247", change: "+8.2%" },
    KeyMetric { title: "Passengers", value: "89,432", change: "+15.3%" },
    KeyMetric { title: "Load Factor", value: "87.5%", change: "+3.1%" },
];

/// Destination performance over the reporting period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationReport {
    pub city: &'static str,
    pub country: &'static str,
    pub flights: u32,
    /// Revenue in KSH
    pub revenue: u64,
    /// Growth percentage, negative for decline
    pub growth_pct: i32,
}

/// Top destinations by flight volume
pub const TOP_DESTINATIONS: [DestinationReport; 5] = [
    DestinationReport { city: "Dubai", country: "United Arab Emirates", flights: 35, revenue: 8_500_000, growth_pct: 12 },
    DestinationReport { city: "London", country: "United Kingdom", flights: 28, revenue: 12_800_000, growth_pct: 8 },
    DestinationReport { city: "Johannesburg", country: "South Africa", flights: 32, revenue: 6_200_000, growth_pct: 15 },
    DestinationReport { city: "Amsterdam", country: "Netherlands", flights: 24, revenue: 9_800_000, growth_pct: 5 },
    DestinationReport { city: "Mumbai", country: "India", flights: 20, revenue: 5_400_000, growth_pct: -2 },
];

/// One day of booking volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyBookings {
    pub date: &'static str,
    pub bookings: u32,
    /// Revenue in KSH
    pub revenue: u64,
}

/// A week of daily booking volume
pub const DAILY_BOOKINGS: [DailyBookings; 7] = [
    DailyBookings { date: "Jan 10", bookings: 35, revenue: 8_500_000 },
    DailyBookings { date: "Jan 11", bookings: 42, revenue: 9_200_000 },
    DailyBookings { date: "Jan 12", bookings: 28, revenue: 6_800_000 },
    DailyBookings { date: "Jan 13", bookings: 51, revenue: 11_800_000 },
    DailyBookings { date: "Jan 14", bookings: 37, revenue: 8_900_000 },
    DailyBookings { date: "Jan 15", bookings: 45, revenue: 10_200_000 },
    DailyBookings { date: "Jan 16", bookings: 39, revenue: 9_400_000 },
];

/// One month of revenue against target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyRevenue {
    pub month: &'static str,
    /// Actual revenue in KSH
    pub revenue: u64,
    /// Target revenue in KSH
    pub target: u64,
}

impl MonthlyRevenue {
    /// True when the month beat its target
    pub fn on_target(&self) -> bool {
        self.revenue >= self.target
    }
}

/// Six months of revenue against target
pub const MONTHLY_REVENUE: [MonthlyRevenue; 6] = [
    MonthlyRevenue { month: "Aug", revenue: 180_000_000, target: 170_000_000 },
    MonthlyRevenue { month: "Sep", revenue: 195_000_000, target: 185_000_000 },
    MonthlyRevenue { month: "Oct", revenue: 172_000_000, target: 180_000_000 },
    MonthlyRevenue { month: "Nov", revenue: 208_000_000, target: 200_000_000 },
    MonthlyRevenue { month: "Dec", revenue: 235_000_000, target: 220_000_000 },
    MonthlyRevenue { month: "Jan", revenue: 285_000_000, target: 260_000_000 },
];

/// Utilization of one aircraft type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetUtilization {
    pub aircraft: &'static str,
    pub utilization_pct: u32,
    pub flights: u32,
}

/// Utilization across the fleet
pub const FLEET_UTILIZATION: [FleetUtilization; 4] = [
    FleetUtilization { aircraft: "A380-800", utilization_pct: 85, flights: 156 },
    FleetUtilization { aircraft: "Boeing 777", utilization_pct: 92, flights: 184 },
    FleetUtilization { aircraft: "A350-900", utilization_pct: 78, flights: 142 },
    FleetUtilization { aircraft: "Boeing 787", utilization_pct: 88, flights: 167 },
];

/// Busiest day of the week, used to scale the daily bookings chart
pub fn peak_daily_bookings() -> u32 {
    DAILY_BOOKINGS
        .iter()
        .map(|day| day.bookings)
        .max()
        .unwrap_or(0)
}

/// Highest monthly revenue, used to scale the revenue chart
pub fn peak_monthly_revenue() -> u64 {
    MONTHLY_REVENUE
        .iter()
        .map(|month| month.revenue)
        .max()
        .unwrap_or(0)
}
