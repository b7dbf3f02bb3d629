//! Core library for the Snake BnB booking application.
//!
//! This crate provides the business logic for a console-driven booking
//! system: hosts register cages and availability windows, guests register
//! snakes and book cages for date ranges. It covers database operations,
//! domain models, the availability matcher, the booking committer, and
//! error handling.
//!
//! # Quick Start
//!
//! ```rust
//! use snakebnb_core::{BnbBuilder, params::CreateAccount};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let bnb = BnbBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let owner = bnb
//!     .create_account(&CreateAccount {
//!         name: "Anna".to_string(),
//!         email: "anna@example.com".to_string(),
//!     })
//!     .await?;
//! println!("Registered: {}", owner);
//! # Ok(())
//! # }
//! ```

pub mod bnb;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use bnb::{Bnb, BnbBuilder};
pub use db::Database;
pub use display::{
    BookResult, BookingSummaries, Cages, CreateResult, LocalDateTime, Matches, OperationStatus,
    Snakes,
};
pub use error::{BnbError, Result};
pub use models::{Booking, BookingSummary, Cage, CageMatch, Owner, Snake};
pub use params::{
    AddAvailability, AddSnake, AvailabilitySearch, BookCage, CreateAccount, Id, RegisterCage,
};
