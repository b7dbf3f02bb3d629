//! Database schema initialization and migrations.

use crate::error::{BnbError, DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Early databases tracked only the guest ids; check for booked_at
        let has_booked_at_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('bookings') WHERE name = 'booked_at'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_booked_at_column {
            self.connection
                .execute("ALTER TABLE bookings ADD COLUMN booked_at TEXT", [])
                .map_err(|e| {
                    BnbError::database_error("Failed to add booked_at column to bookings table", e)
                })?;
        }

        Ok(())
    }
}
