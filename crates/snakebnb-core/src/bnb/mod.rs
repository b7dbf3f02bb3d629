//! High-level API for accounts, snakes, cages, and bookings.
//!
//! This module provides the main [`Bnb`] interface for interacting with the
//! Snake BnB system. It sits between the console layer and the database and
//! implements the business rules for every operation.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Console layer  │    │   Operations    │    │    Database     │
//! │ (snakebnb-cli)  │───▶│ (account_ops,   │───▶│   (via db/)     │
//! │                 │    │  booking_ops…)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface      Business Logic         Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Bnb`] instances with configuration
//! - [`account_ops`]: Account registration and lookup
//! - [`snake_ops`]: Guest snake registration and listing
//! - [`cage_ops`]: Host cage registration, listing, and availability
//! - [`booking_ops`]: The availability matcher and the booking committer
//!
//! All operations validate their parameters before touching the store and
//! run the blocking database work on a dedicated thread.

use std::path::PathBuf;

pub mod account_ops;
pub mod booking_ops;
pub mod builder;
pub mod cage_ops;
pub mod snake_ops;

#[cfg(test)]
mod tests;

pub use builder::BnbBuilder;

/// Main interface for Snake BnB operations.
pub struct Bnb {
    pub(crate) db_path: PathBuf,
}

impl Bnb {
    /// Creates a new instance with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
