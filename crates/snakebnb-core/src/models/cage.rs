//! Cage model definition and suitability rules.

use serde::{Deserialize, Serialize};

use super::{Booking, Snake};

/// A rentable unit with physical attributes and embedded booking windows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cage {
    /// Unique identifier for the cage
    pub id: u64,

    /// Host account that registered the cage
    pub owner_id: u64,

    /// Name of the cage
    pub name: String,

    /// Floor area in square meters
    pub square_meters: f64,

    /// Whether the cage floor is carpeted
    pub is_carpeted: bool,

    /// Whether the cage has snake toys
    pub has_toys: bool,

    /// Whether venomous snakes are allowed
    pub allow_dangerous: bool,

    /// Price per night
    pub price: f64,

    /// Embedded booking windows in stored order (lazy-loaded by default)
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl Cage {
    /// Whether this cage can host the given snake.
    ///
    /// A cage suits a snake when its floor area is at least a quarter of the
    /// snake's length and, for venomous snakes, dangerous snakes are allowed.
    pub fn suits(&self, snake: &Snake) -> bool {
        self.square_meters >= snake.min_cage_size() && (!snake.is_venomous || self.allow_dangerous)
    }
}
