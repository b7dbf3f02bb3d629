//! Error types for the Snake BnB library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all Snake BnB operations.
#[derive(Error, Debug)]
pub enum BnbError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// An account already exists for the given email
    #[error("The email {email} is already registered")]
    EmailTaken { email: String },
    /// Owner not found for the given ID
    #[error("Owner with ID {id} not found")]
    OwnerNotFound { id: u64 },
    /// Snake not found for the given ID
    #[error("Snake with ID {id} not found")]
    SnakeNotFound { id: u64 },
    /// Cage not found for the given ID (or not owned by the acting account)
    #[error("Cage with ID {id} not found")]
    CageNotFound { id: u64 },
    /// The selected cage no longer has an open window covering the range
    #[error("Cage {cage_id} is no longer available for the requested dates")]
    WindowUnavailable { cage_id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> BnbError {
        BnbError::Database {
            message: self.message,
            source,
        }
    }
}

impl BnbError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::database(message).with_source(source)
    }

    /// Creates an input validation error for a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for errors the console loop should report and recover from,
    /// rather than abort the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BnbError::EmailTaken { .. }
                | BnbError::OwnerNotFound { .. }
                | BnbError::SnakeNotFound { .. }
                | BnbError::CageNotFound { .. }
                | BnbError::WindowUnavailable { .. }
                | BnbError::InvalidInput { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BnbError::database(message).with_source(e))
    }
}

/// Result type alias for Snake BnB operations
pub type Result<T> = std::result::Result<T, BnbError>;
