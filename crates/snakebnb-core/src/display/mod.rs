//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]),
//! while this module adds collection newtypes and operation-result wrappers
//! so the same data can be formatted differently depending on context
//! (selection lists vs. individual items, creation results vs. booking
//! confirmations) with consistent markdown output.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Cages, Snakes, Matches,
//!   BookingSummaries)
//! - [`results`]: Operation result types (CreateResult, BookResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{BookingSummaries, Cages, Matches, Snakes};
pub use datetime::LocalDateTime;
pub use results::{BookResult, CreateResult};
pub use status::OperationStatus;
