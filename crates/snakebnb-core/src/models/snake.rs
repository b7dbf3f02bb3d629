//! Snake model definition.

use serde::{Deserialize, Serialize};

/// A guest's snake. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snake {
    /// Unique identifier for the snake
    pub id: u64,

    /// Owner of the snake
    pub owner_id: u64,

    /// Name of the snake
    pub name: String,

    /// Length in meters
    pub length_m: f64,

    /// Species name
    pub species: String,

    /// Whether the snake is venomous
    pub is_venomous: bool,
}

impl Snake {
    /// Minimum cage floor area (square meters) this snake requires.
    pub fn min_cage_size(&self) -> f64 {
        self.length_m / 4.0
    }
}
