//! Parameter structures for Snake BnB operations.
//!
//! These types carry validated-at-the-edge user input into the core
//! operations. They are free of CLI framework concerns so the same
//! structures can back any interface.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{BnbError, Result};

/// Parameters for registering a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Display name for the account
    pub name: String,
    /// Email address; uniqueness is enforced case-insensitively
    pub email: String,
}

impl CreateAccount {
    /// Email normalized the way it is stored and queried.
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }

    /// Validates the account fields before any query is issued.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BnbError::invalid_input("name", "name must not be empty"));
        }
        let email = self.normalized_email();
        if email.is_empty() || !email.contains('@') {
            return Err(BnbError::invalid_input(
                "email",
                "email must contain an '@'",
            ));
        }
        Ok(())
    }
}

/// Wrapper for operations addressed by an entity ID.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Id {
    pub id: u64,
}

/// Parameters for adding a snake to a guest account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSnake {
    /// Owning account
    pub owner_id: u64,
    /// Name of the snake
    pub name: String,
    /// Length in meters, must be positive
    pub length_m: f64,
    /// Species name
    pub species: String,
    /// Whether the snake is venomous
    pub is_venomous: bool,
}

impl AddSnake {
    /// Validates the snake fields before any query is issued.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BnbError::invalid_input("name", "name must not be empty"));
        }
        if !self.length_m.is_finite() || self.length_m <= 0.0 {
            return Err(BnbError::invalid_input(
                "length_m",
                "length must be a positive number of meters",
            ));
        }
        Ok(())
    }
}

/// Parameters for registering a cage under a host account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCage {
    /// Owning account
    pub owner_id: u64,
    /// Name of the cage
    pub name: String,
    /// Floor area in square meters, must be positive
    pub square_meters: f64,
    /// Whether the floor is carpeted
    pub is_carpeted: bool,
    /// Whether the cage has snake toys
    pub has_toys: bool,
    /// Whether venomous snakes are allowed
    pub allow_dangerous: bool,
    /// Price per night, must be positive
    pub price: f64,
}

impl RegisterCage {
    /// Validates the cage fields before any query is issued.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BnbError::invalid_input("name", "name must not be empty"));
        }
        if !self.square_meters.is_finite() || self.square_meters <= 0.0 {
            return Err(BnbError::invalid_input(
                "square_meters",
                "square meters must be a positive number",
            ));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(BnbError::invalid_input(
                "price",
                "price must be a positive number",
            ));
        }
        Ok(())
    }
}

/// Parameters for appending an open availability window to a cage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AddAvailability {
    /// Acting host account; the cage must belong to it
    pub owner_id: u64,
    /// Cage to extend
    pub cage_id: u64,
    /// First available night
    pub start: Date,
    /// Length of the block in days, at least one
    pub days: i64,
}

impl AddAvailability {
    /// Validates the window shape before any query is issued.
    pub fn validate(&self) -> Result<()> {
        if self.days < 1 {
            return Err(BnbError::invalid_input(
                "days",
                "availability must span at least one day",
            ));
        }
        Ok(())
    }
}

/// Parameters for searching cages available over a date range for a snake.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AvailabilitySearch {
    /// Requested check-in date
    pub check_in: Date,
    /// Requested check-out date, strictly after check-in
    pub check_out: Date,
    /// Snake the cage must suit
    pub snake_id: u64,
}

impl AvailabilitySearch {
    /// Rejects inverted or empty ranges before any query is issued.
    pub fn validate(&self) -> Result<()> {
        if self.check_out <= self.check_in {
            return Err(BnbError::invalid_input(
                "check_out",
                "check-out date must be after check-in date",
            ));
        }
        Ok(())
    }
}

/// Parameters for committing a booking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BookCage {
    /// Guest account making the booking
    pub owner_id: u64,
    /// Guest snake the cage will host
    pub snake_id: u64,
    /// Cage chosen from the availability search
    pub cage_id: u64,
    /// Requested check-in date
    pub check_in: Date,
    /// Requested check-out date, strictly after check-in
    pub check_out: Date,
}

impl BookCage {
    /// Rejects inverted or empty ranges before any query is issued.
    pub fn validate(&self) -> Result<()> {
        if self.check_out <= self.check_in {
            return Err(BnbError::invalid_input(
                "check_out",
                "check-out date must be after check-in date",
            ));
        }
        Ok(())
    }
}
