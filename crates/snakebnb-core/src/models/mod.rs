//! Data models for owners, snakes, cages, and booking windows.
//!
//! This module contains the core domain models of the Snake BnB system.
//! Display implementations live in [`crate::display::models`] to keep data
//! structures separate from presentation logic.
//!
//! # Ownership
//!
//! A [`Cage`] exclusively owns its embedded [`Booking`] windows; windows have
//! no lifecycle of their own. [`Owner`] rows are referenced by `owner_id`
//! foreign keys on snakes and cages rather than id lists.

pub mod booking;
pub mod cage;
pub mod owner;
pub mod snake;
pub mod summary;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use booking::Booking;
pub use cage::Cage;
pub use owner::Owner;
pub use snake::Snake;
pub use summary::{BookingSummary, CageMatch};
