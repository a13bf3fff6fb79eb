//! Airports served by the network

/// One airport in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Airport {
    /// IATA code, e.g. "NBO"
    pub code: &'static str,
    /// City served
    pub city: &'static str,
    /// Country
    pub country: &'static str,
    /// Full airport name
    pub name: &'static str,
}

impl Airport {
    /// Descriptor used in flight records, e.g. "Nairobi (NBO)"
    pub fn descriptor(&self) -> String {
        format!("{} ({})", self.city, self.code)
    }
}

/// Every airport the network serves, grouped by region
pub const AIRPORTS: [Airport; 32] = [
    // Kenya
    Airport { code: "NBO", city: "Nairobi", country: "Kenya", name: "Jomo Kenyatta International Airport" },
    Airport { code: "MBA", city: "Mombasa", country: "Kenya", name: "Moi International Airport" },
    Airport { code: "KIS", city: "Kisumu", country: "Kenya", name: "Kisumu Airport" },
    Airport { code: "EDL", city: "Eldoret", country: "Kenya", name: "Eldoret Airport" },
    Airport { code: "MYD", city: "Malindi", country: "Kenya", name: "Malindi Airport" },
    Airport { code: "UAS", city: "Samburu", country: "Kenya", name: "Samburu Airport" },
    // East Africa
    Airport { code: "DAR", city: "Dar es Salaam", country: "Tanzania", name: "Julius Nyerere International Airport" },
    Airport { code: "JRO", city: "Kilimanjaro", country: "Tanzania", name: "Kilimanjaro International Airport" },
    Airport { code: "EBB", city: "Entebbe", country: "Uganda", name: "Entebbe International Airport" },
    Airport { code: "KGL", city: "Kigali", country: "Rwanda", name: "Kigali International Airport" },
    Airport { code: "ADD", city: "Addis Ababa", country: "Ethiopia", name: "Bole International Airport" },
    // Middle East
    Airport { code: "DXB", city: "Dubai", country: "UAE", name: "Dubai International Airport" },
    Airport { code: "DOH", city: "Doha", country: "Qatar", name: "Hamad International Airport" },
    Airport { code: "AUH", city: "Abu Dhabi", country: "UAE", name: "Abu Dhabi International Airport" },
    // Europe
    Airport { code: "LHR", city: "London", country: "UK", name: "Heathrow Airport" },
    Airport { code: "CDG", city: "Paris", country: "France", name: "Charles de Gaulle Airport" },
    Airport { code: "AMS", city: "Amsterdam", country: "Netherlands", name: "Schiphol Airport" },
    Airport { code: "FRA", city: "Frankfurt", country: "Germany", name: "Frankfurt Airport" },
    Airport { code: "ZUR", city: "Zurich", country: "Switzerland", name: "Zurich Airport" },
    // Asia
    Airport { code: "BOM", city: "Mumbai", country: "India", name: "Chhatrapati Shivaji International Airport" },
    Airport { code: "DEL", city: "Delhi", country: "India", name: "Indira Gandhi International Airport" },
    Airport { code: "BKK", city: "Bangkok", country: "Thailand", name: "Suvarnabhumi Airport" },
    Airport { code: "SIN", city: "Singapore", country: "Singapore", name: "Changi Airport" },
    Airport { code: "HKG", city: "Hong Kong", country: "Hong Kong", name: "Hong Kong International Airport" },
    // Africa
    Airport { code: "JNB", city: "Johannesburg", country: "South Africa", name: "OR Tambo International Airport" },
    Airport { code: "CPT", city: "Cape Town", country: "South Africa", name: "Cape Town International Airport" },
    Airport { code: "CAI", city: "Cairo", country: "Egypt", name: "Cairo International Airport" },
    Airport { code: "LOS", city: "Lagos", country: "Nigeria", name: "Murtala Muhammed International Airport" },
    Airport { code: "CAS", city: "Casablanca", country: "Morocco", name: "Mohammed V International Airport" },
    // Americas
    Airport { code: "JFK", city: "New York", country: "USA", name: "John F. Kennedy International Airport" },
    Airport { code: "LAX", city: "Los Angeles", country: "USA", name: "Los Angeles International Airport" },
    Airport { code: "YYZ", city: "Toronto", country: "Canada", name: "Pearson International Airport" },
];

/// Look up an airport by IATA code, case-insensitive
pub fn find(code: &str) -> Option<&'static Airport> {
    AIRPORTS
        .iter()
        .find(|airport| airport.code.eq_ignore_ascii_case(code.trim()))
}

/// City portion of a descriptor: "Nairobi (NBO)" -> "Nairobi"
///
/// A string without the " (code)" suffix is returned whole.
pub fn city_part(descriptor: &str) -> &str {
    match descriptor.split_once(" (") {
        Some((city, _)) => city,
        None => descriptor,
    }
}

/// Code portion of a descriptor: "Nairobi (NBO)" -> "NBO"
///
/// A string without the " (code)" suffix is returned whole, so a bare
/// code passes through unchanged.
pub fn code_part(descriptor: &str) -> &str {
    descriptor
        .split_once(" (")
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(code, _)| code)
        .unwrap_or(descriptor)
}
