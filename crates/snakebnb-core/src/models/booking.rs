//! Booking window model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

/// A cage-owned time window, either open or committed to a guest.
///
/// Invariant: `check_out > check_in`, enforced both at construction time and
/// by a database CHECK constraint. A window is open while the guest ids are
/// unset; once booked it carries both guest ids and a booked-at timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    /// Unique identifier for the window
    pub id: u64,

    /// Cage this window belongs to
    pub cage_id: u64,

    /// First night of the window
    pub check_in: Date,

    /// Check-out date, strictly after `check_in`
    pub check_out: Date,

    /// Guest account once booked
    pub guest_owner_id: Option<u64>,

    /// Guest snake once booked
    pub guest_snake_id: Option<u64>,

    /// Timestamp when the window was booked (UTC)
    pub booked_at: Option<Timestamp>,
}

impl Booking {
    /// Whether this window has been committed to a guest.
    pub fn is_booked(&self) -> bool {
        self.guest_snake_id.is_some()
    }

    /// Whether this window fully covers the requested date range.
    pub fn covers(&self, check_in: Date, check_out: Date) -> bool {
        self.check_in <= check_in && self.check_out >= check_out
    }

    /// Duration of the window in nights.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).get_days().into()
    }
}
