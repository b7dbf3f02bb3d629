//! Cage CRUD operations and queries.

use rusqlite::{params, Connection, OptionalExtension, Row};

use super::owner_queries::owner_exists;
use crate::{
    error::{BnbError, DatabaseResultExt, Result},
    models::Cage,
    params::RegisterCage,
};

const INSERT_CAGE_SQL: &str = "INSERT INTO cages (owner_id, name, square_meters, is_carpeted, has_toys, allow_dangerous, price) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const CAGE_COLUMNS: &str =
    "id, owner_id, name, square_meters, is_carpeted, has_toys, allow_dangerous, price";

/// Maps a cage row in `CAGE_COLUMNS` order. Windows are loaded separately.
pub(crate) fn cage_from_row(row: &Row<'_>) -> rusqlite::Result<Cage> {
    Ok(Cage {
        id: row.get::<_, i64>(0)? as u64,
        owner_id: row.get::<_, i64>(1)? as u64,
        name: row.get(2)?,
        square_meters: row.get(3)?,
        is_carpeted: row.get(4)?,
        has_toys: row.get(5)?,
        allow_dangerous: row.get(6)?,
        price: row.get(7)?,
        bookings: Vec::new(),
    })
}

/// Retrieves a cage by ID without its windows, usable inside a transaction.
pub(crate) fn select_cage(conn: &Connection, id: u64) -> Result<Option<Cage>> {
    conn.query_row(
        &format!("SELECT {CAGE_COLUMNS} FROM cages WHERE id = ?1"),
        params![id as i64],
        cage_from_row,
    )
    .optional()
    .db_context("Failed to query cage")
}

impl super::Database {
    /// Creates a new cage under the given owner.
    pub fn register_cage(&mut self, params: &RegisterCage) -> Result<Cage> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !owner_exists(&tx, params.owner_id)? {
            return Err(BnbError::OwnerNotFound {
                id: params.owner_id,
            });
        }

        tx.execute(
            INSERT_CAGE_SQL,
            params![
                params.owner_id as i64,
                params.name,
                params.square_meters,
                params.is_carpeted,
                params.has_toys,
                params.allow_dangerous,
                params.price,
            ],
        )
        .map_err(|e| BnbError::database_error("Failed to insert cage", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Cage {
            id,
            owner_id: params.owner_id,
            name: params.name.clone(),
            square_meters: params.square_meters,
            is_carpeted: params.is_carpeted,
            has_toys: params.has_toys,
            allow_dangerous: params.allow_dangerous,
            price: params.price,
            bookings: Vec::new(),
        })
    }

    /// Retrieves a cage by its ID with windows eagerly loaded.
    pub fn get_cage(&self, id: u64) -> Result<Option<Cage>> {
        let mut cage = select_cage(&self.connection, id)?;

        if let Some(ref mut cage) = cage {
            cage.bookings = self.bookings_for_cage(cage.id)?;
        }

        Ok(cage)
    }

    /// Lists the cages registered under an owner, oldest first, with windows
    /// eagerly loaded in stored order.
    pub fn cages_for_owner(&self, owner_id: u64) -> Result<Vec<Cage>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {CAGE_COLUMNS} FROM cages WHERE owner_id = ?1 ORDER BY id"
            ))
            .db_context("Failed to prepare query")?;

        let mut cages: Vec<Cage> = stmt
            .query_map(params![owner_id as i64], cage_from_row)
            .db_context("Failed to query cages")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch cages")?;

        for cage in &mut cages {
            cage.bookings = self.bookings_for_cage(cage.id)?;
        }

        Ok(cages)
    }
}
