//! Generated codes: booking references, frequent flyer numbers, seats
//!
//! References and frequent flyer numbers come from a session-scoped
//! `CodeSequence` seeded from the wall clock. The sequence is strictly
//! monotonic, so two codes requested in the same millisecond never
//! collide. Seat numbers are random within the cabin layout for the
//! class.

use chrono::Utc;
use rand::Rng;

use crate::model::SeatClass;

/// Session-scoped generator for booking references and frequent flyer numbers
#[derive(Debug, Clone)]
pub struct CodeSequence {
    next: u64,
}

impl CodeSequence {
    /// Create a sequence seeded from the current wall clock
    pub fn new() -> Self {
        Self {
            next: Utc::now().timestamp_millis().unsigned_abs(),
        }
    }

    /// Create a sequence with a fixed seed (deterministic in tests)
    pub fn from_seed(seed: u64) -> Self {
        Self { next: seed }
    }

    fn advance(&mut self) -> u64 {
        let value = self.next;
        self.next = self.next.wrapping_add(1);
        value
    }

    /// Next booking reference, "KQ" plus six digits, e.g. "KQ001234"
    pub fn booking_reference(&mut self) -> String {
        format!("KQ{:06}", self.advance() % 1_000_000)
    }

    /// Next frequent flyer number, "KQ" plus nine digits, e.g. "KQ000123456"
    pub fn frequent_flyer_number(&mut self) -> String {
        format!("KQ{:09}", self.advance() % 1_000_000)
    }
}

impl Default for CodeSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Random seat assignment within the cabin rows for the class
///
/// First: rows 1-3 letters A-B, Business: rows 4-12 letters A-D,
/// Economy: rows 13-45 letters A-F.
pub fn seat_number(class: SeatClass) -> String {
    let (min_row, max_row, letters): (u32, u32, &[char]) = match class {
        SeatClass::First => (1, 3, &['A', 'B']),
        SeatClass::Business => (4, 12, &['A', 'B', 'C', 'D']),
        SeatClass::Economy => (13, 45, &['A', 'B', 'C', 'D', 'E', 'F']),
    };

    let mut rng = rand::thread_rng();
    let row = rng.gen_range(min_row..=max_row);
    let letter = letters[rng.gen_range(0..letters.len())];
    format!("{}{}", row, letter)
}
