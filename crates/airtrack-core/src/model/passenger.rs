use airtrack_core_types::PassengerId;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A passenger profile
///
/// `total_flights` counts bookings made under this passenger's name and
/// is maintained by the booking lifecycle, never edited directly.
/// `frequent_flyer_number` is generated at creation (see `codes`) and
/// treated as unique within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    /// Unique identifier for this passenger
    pub id: PassengerId,

    /// Full name, the denormalized key bookings match against
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Nationality
    pub nationality: String,

    /// Passport number
    pub passport_number: String,

    /// Date of birth
    pub date_of_birth: NaiveDate,

    /// Lifetime flight count (maintained by booking add/delete)
    pub total_flights: u32,

    /// Date the passenger joined the loyalty program
    pub member_since: NaiveDate,

    /// Generated frequent flyer number, e.g. "KQ001234567"
    pub frequent_flyer_number: String,
}

impl Passenger {
    /// Age in whole years on the given date
    ///
    /// Subtracts a year when the birthday has not yet occurred, floors
    /// at zero for a date of birth in the future.
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        let mut years = date.year() - self.date_of_birth.year();
        let birthday_passed = (date.month(), date.day())
            >= (self.date_of_birth.month(), self.date_of_birth.day());
        if !birthday_passed {
            years -= 1;
        }
        years.max(0) as u32
    }

    /// Uppercase initials from the name, e.g. "James Mwangi" -> "JM"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

/// Partial update for a passenger
///
/// `None` fields are left untouched by
/// `ops::passenger_ops::update_passenger`. Only identity fields are
/// present: `total_flights`, `member_since`, and the frequent flyer
/// number are fixed outside the update path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassengerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    pub passport_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_passenger() -> Passenger {
        Passenger {
            id: PassengerId::from_string("p-1".to_string()),
            name: "James Mwangi".to_string(),
            email: "james.mwangi@email.com".to_string(),
            phone: "+254 712 345 678".to_string(),
            nationality: "Kenyan".to_string(),
            passport_number: "A1234567".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
            total_flights: 12,
            member_since: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            frequent_flyer_number: "KQ001234567".to_string(),
        }
    }

    #[test]
    fn test_age_after_birthday() {
        let passenger = sample_passenger();
        let on = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(passenger.age_on(on), 39);
    }

    #[test]
    fn test_age_before_birthday() {
        let passenger = sample_passenger();
        let on = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        assert_eq!(passenger.age_on(on), 38);
    }

    #[test]
    fn test_age_on_birthday() {
        let passenger = sample_passenger();
        let on = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(passenger.age_on(on), 39);
    }

    #[test]
    fn test_age_floors_at_zero_for_future_birth_date() {
        let mut passenger = sample_passenger();
        passenger.date_of_birth = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let on = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(passenger.age_on(on), 0);
    }

    #[test]
    fn test_initials() {
        let passenger = sample_passenger();
        assert_eq!(passenger.initials(), "JM");
    }

    #[test]
    fn test_initials_single_name() {
        let mut passenger = sample_passenger();
        passenger.name = "Cher".to_string();
        assert_eq!(passenger.initials(), "C");
    }

    #[test]
    fn test_update_default_is_all_none() {
        let update = PassengerUpdate::default();
        assert!(update.name.is_none());
        assert!(update.date_of_birth.is_none());
    }
}
