//! Database operations and SQLite management for the Snake BnB store.
//!
//! This module provides low-level database operations for owners, snakes,
//! cages, and booking windows. It handles SQLite connections, schema
//! management, and the query interfaces the higher-level [`crate::bnb`]
//! operations are built on.

use std::path::Path;

use jiff::{civil::Date, Timestamp};
use rusqlite::{types::Type, Connection};

use crate::error::{DatabaseResultExt, Result};

pub mod booking_queries;
pub mod cage_queries;
pub mod migrations;
pub mod owner_queries;
pub mod snake_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Parses an ISO date stored as TEXT, reporting the column index on failure.
pub(crate) fn date_from_sql(idx: usize, value: String) -> rusqlite::Result<Date> {
    value
        .parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Parses a timestamp stored as TEXT, reporting the column index on failure.
pub(crate) fn timestamp_from_sql(idx: usize, value: String) -> rusqlite::Result<Timestamp> {
    value
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
