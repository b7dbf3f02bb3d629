//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Booking, Cage, Owner, Snake};

/// Wrapper type for displaying the result of create operations.
///
/// Formats a success line with the resource type and ID followed by the
/// full details of the created resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Owner> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created account with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Snake> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added snake with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Cage> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registered cage with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying a committed booking with its context.
pub struct BookResult {
    pub cage_name: String,
    pub snake_name: String,
    pub price: f64,
    pub booking: Booking,
}

impl fmt::Display for BookResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Successfully booked **{}** for **{}** from {} to {} at {}/night",
            self.cage_name,
            self.snake_name,
            self.booking.check_in,
            self.booking.check_out,
            self.price
        )
    }
}
