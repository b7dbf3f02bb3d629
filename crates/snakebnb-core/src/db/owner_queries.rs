//! Owner (account) CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use super::timestamp_from_sql;
use crate::{
    error::{BnbError, DatabaseResultExt, Result},
    models::Owner,
};

const INSERT_OWNER_SQL: &str =
    "INSERT INTO owners (name, email, registered_at) VALUES (?1, ?2, ?3)";
const SELECT_OWNER_SQL: &str = "SELECT id, name, email, registered_at FROM owners WHERE id = ?1";
const SELECT_OWNER_BY_EMAIL_SQL: &str =
    "SELECT id, name, email, registered_at FROM owners WHERE email = ?1";
const CHECK_EMAIL_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM owners WHERE email = ?1)";
const CHECK_OWNER_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM owners WHERE id = ?1)";

/// Maps an owner row in `SELECT_OWNER_SQL` column order.
fn owner_from_row(row: &Row<'_>) -> rusqlite::Result<Owner> {
    Ok(Owner {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        email: row.get(2)?,
        registered_at: timestamp_from_sql(3, row.get::<_, String>(3)?)?,
    })
}

/// Checks whether an owner row exists, usable inside a transaction.
pub(crate) fn owner_exists(conn: &Connection, id: u64) -> Result<bool> {
    conn.query_row(CHECK_OWNER_EXISTS_SQL, params![id as i64], |row| row.get(0))
        .db_context("Failed to check owner existence")
}

impl super::Database {
    /// Creates a new account with a unique email.
    ///
    /// The email must already be normalized to lowercase by the caller.
    /// Uniqueness is enforced both by an application-level check (for a
    /// friendly error) and by the UNIQUE index on the column, which closes
    /// the gap atomically; either path reports [`BnbError::EmailTaken`].
    pub fn create_owner(&mut self, name: &str, email: &str) -> Result<Owner> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let taken: bool = tx
            .query_row(CHECK_EMAIL_EXISTS_SQL, params![email], |row| row.get(0))
            .db_context("Failed to check email uniqueness")?;
        if taken {
            return Err(BnbError::EmailTaken {
                email: email.to_string(),
            });
        }

        let now = Timestamp::now();
        tx.execute(INSERT_OWNER_SQL, params![name, email, now.to_string()])
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == ErrorCode::ConstraintViolation =>
                {
                    BnbError::EmailTaken {
                        email: email.to_string(),
                    }
                }
                e => BnbError::database_error("Failed to insert owner", e),
            })?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Owner {
            id,
            name: name.into(),
            email: email.into(),
            registered_at: now,
        })
    }

    /// Retrieves an owner by its ID.
    pub fn get_owner(&self, id: u64) -> Result<Option<Owner>> {
        self.connection
            .query_row(SELECT_OWNER_SQL, params![id as i64], owner_from_row)
            .optional()
            .db_context("Failed to query owner")
    }

    /// Finds an owner by exact email match. The email must already be
    /// normalized to lowercase by the caller.
    pub fn find_owner_by_email(&self, email: &str) -> Result<Option<Owner>> {
        self.connection
            .query_row(SELECT_OWNER_BY_EMAIL_SQL, params![email], owner_from_row)
            .optional()
            .db_context("Failed to query owner by email")
    }
}
