//! Owner (account) model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A registered account. The same owner may act as host, guest, or both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    /// Unique identifier for the owner
    pub id: u64,

    /// Display name
    pub name: String,

    /// Email address, unique across all owners, stored lowercase
    pub email: String,

    /// Timestamp when the account was registered (UTC)
    pub registered_at: Timestamp,
}
