//! Snake CRUD operations and queries.

use rusqlite::{params, Connection, OptionalExtension, Row};

use super::owner_queries::owner_exists;
use crate::{
    error::{BnbError, DatabaseResultExt, Result},
    models::Snake,
    params::AddSnake,
};

const INSERT_SNAKE_SQL: &str =
    "INSERT INTO snakes (owner_id, name, length_m, species, is_venomous) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_SNAKE_SQL: &str =
    "SELECT id, owner_id, name, length_m, species, is_venomous FROM snakes WHERE id = ?1";
const SELECT_SNAKES_FOR_OWNER_SQL: &str =
    "SELECT id, owner_id, name, length_m, species, is_venomous FROM snakes WHERE owner_id = ?1 ORDER BY id";

/// Maps a snake row in `SELECT_SNAKE_SQL` column order.
fn snake_from_row(row: &Row<'_>) -> rusqlite::Result<Snake> {
    Ok(Snake {
        id: row.get::<_, i64>(0)? as u64,
        owner_id: row.get::<_, i64>(1)? as u64,
        name: row.get(2)?,
        length_m: row.get(3)?,
        species: row.get(4)?,
        is_venomous: row.get(5)?,
    })
}

/// Retrieves a snake by ID, usable inside a transaction.
pub(crate) fn select_snake(conn: &Connection, id: u64) -> Result<Option<Snake>> {
    conn.query_row(SELECT_SNAKE_SQL, params![id as i64], snake_from_row)
        .optional()
        .db_context("Failed to query snake")
}

impl super::Database {
    /// Creates a new snake under the given owner.
    pub fn add_snake(&mut self, params: &AddSnake) -> Result<Snake> {
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
            INSERT_SNAKE_SQL,
            params![
                params.owner_id as i64,
                params.name,
                params.length_m,
                params.species,
                params.is_venomous,
            ],
        )
        .map_err(|e| BnbError::database_error("Failed to insert snake", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Snake {
            id,
            owner_id: params.owner_id,
            name: params.name.clone(),
            length_m: params.length_m,
            species: params.species.clone(),
            is_venomous: params.is_venomous,
        })
    }

    /// Retrieves a snake by its ID.
    pub fn get_snake(&self, id: u64) -> Result<Option<Snake>> {
        select_snake(&self.connection, id)
    }

    /// Lists the snakes registered under an owner, oldest first.
    pub fn snakes_for_owner(&self, owner_id: u64) -> Result<Vec<Snake>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SNAKES_FOR_OWNER_SQL)
            .db_context("Failed to prepare query")?;

        let snakes = stmt
            .query_map(params![owner_id as i64], snake_from_row)
            .db_context("Failed to query snakes")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch snakes")?;

        Ok(snakes)
    }
}
