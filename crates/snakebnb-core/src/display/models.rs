//! Display implementations for domain models.
//!
//! All output is markdown so the terminal renderer can style it; the same
//! strings read fine as plain text with `--no-color`.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Booking, BookingSummary, Cage, Owner, Snake};

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Email: {}", self.email)?;
        writeln!(f, "- Registered: {}", LocalDateTime(&self.registered_at))?;
        Ok(())
    }
}

impl fmt::Display for Snake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "**{}** is a {} that is {}m long and is {}venomous.",
            self.name,
            self.species,
            self.length_m,
            if self.is_venomous { "" } else { "NOT " }
        )
    }
}

impl fmt::Display for Cage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Size: {} square meters", self.square_meters)?;
        writeln!(f, "- Carpeted: {}", yes_no(self.is_carpeted))?;
        writeln!(f, "- Has toys: {}", yes_no(self.has_toys))?;
        writeln!(f, "- Allows venomous snakes: {}", yes_no(self.allow_dangerous))?;
        writeln!(f, "- Price: {}/night", self.price)?;

        if !self.bookings.is_empty() {
            writeln!(f)?;
            for booking in &self.bookings {
                write!(f, "{}", booking)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Window: {}, {} days, booked? {}",
            self.check_in,
            self.nights(),
            if self.is_booked() { "YES" } else { "NO" }
        )
    }
}

impl fmt::Display for BookingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Cage **{}** from {} for {} days at {}/night",
            self.cage_name,
            self.booking.check_in,
            self.booking.nights(),
            self.price
        )
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
