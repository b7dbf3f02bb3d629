//! Derived view types returned by queries.

use serde::{Deserialize, Serialize};

use super::{Booking, Cage};

/// A cage that can host a given snake over a requested range, together with
/// the first open window covering that range.
///
/// Returning the window alongside the cage lets the committer operate on the
/// exact selection the matcher made instead of re-scanning the cage's
/// windows against the same predicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CageMatch {
    /// The qualifying cage (windows eagerly loaded)
    pub cage: Cage,

    /// The first open window covering the requested range, in stored order
    pub window: Booking,
}

/// A guest-side view of a committed booking, joined with cage details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingSummary {
    /// Cage the stay is booked in
    pub cage_id: u64,

    /// Name of the cage
    pub cage_name: String,

    /// Price per night of the cage
    pub price: f64,

    /// The committed window
    pub booking: Booking,
}
