use airtrack_core_types::PassengerId;

use super::store::Store;
use crate::model::{Passenger, PassengerUpdate};

/// Add a passenger to the store
///
/// Inserts at the front of the passenger collection (newest first).
/// Names are not checked for uniqueness; two passengers sharing a name
/// both receive counter updates from bookings under that name.
pub fn add_passenger(store: &mut Store, passenger: Passenger) {
    tracing::debug!(passenger_id = passenger.id.as_str(), "adding passenger");
    store.insert_passenger(passenger);
}

/// Merge the provided fields into the passenger with the matching id
///
/// Fields left as `None` keep their current value. `total_flights`,
/// `member_since`, and the frequent flyer number are not updatable
/// here. Renaming a passenger does not rewrite `passenger_name` on
/// existing bookings; those keep the old name and stop matching. If no
/// passenger matches the id this is a silent no-op.
pub fn update_passenger(store: &mut Store, id: &PassengerId, update: PassengerUpdate) {
    let Some(passenger) = store.get_passenger_mut(id) else {
        tracing::debug!(passenger_id = id.as_str(), "update targets unknown passenger, skipping");
        return;
    };

    if let Some(name) = update.name {
        passenger.name = name;
    }
    if let Some(email) = update.email {
        passenger.email = email;
    }
    if let Some(phone) = update.phone {
        passenger.phone = phone;
    }
    if let Some(nationality) = update.nationality {
        passenger.nationality = nationality;
    }
    if let Some(passport_number) = update.passport_number {
        passenger.passport_number = passport_number;
    }
    if let Some(date_of_birth) = update.date_of_birth {
        passenger.date_of_birth = date_of_birth;
    }
}

/// Remove the passenger with the matching id
///
/// If no passenger matches this is a silent no-op. Bookings under the
/// passenger's name are not cascaded; they keep their snapshot and
/// dangle until deleted themselves.
pub fn delete_passenger(store: &mut Store, id: &PassengerId) {
    store.passengers.retain(|passenger| &passenger.id != id);
}
