//! Booking window queries: availability, matching, and the commit path.

use jiff::{civil::Date, Span, Timestamp};
use rusqlite::{params, OptionalExtension, Row, TransactionBehavior};

use super::{cage_queries, date_from_sql, snake_queries, timestamp_from_sql};
use crate::{
    error::{BnbError, DatabaseResultExt, Result},
    models::{Booking, BookingSummary, CageMatch, Snake},
    params::{AddAvailability, BookCage},
};

const INSERT_WINDOW_SQL: &str =
    "INSERT INTO bookings (cage_id, check_in, check_out) VALUES (?1, ?2, ?3)";
const BOOKING_COLUMNS: &str =
    "id, cage_id, check_in, check_out, guest_owner_id, guest_snake_id, booked_at";
const SELECT_CAGE_OWNER_SQL: &str = "SELECT owner_id FROM cages WHERE id = ?1";

// First open window fully covering the requested range, in stored order.
const SELECT_OPEN_WINDOW_SQL: &str = "SELECT id FROM bookings WHERE cage_id = ?1 AND check_in <= ?2 AND check_out >= ?3 AND guest_snake_id IS NULL ORDER BY check_in, id LIMIT 1";

// The guard on guest_snake_id keeps the reserve a no-op if the window was
// consumed between selection and update.
const RESERVE_WINDOW_SQL: &str = "UPDATE bookings SET guest_owner_id = ?1, guest_snake_id = ?2, booked_at = ?3 WHERE id = ?4 AND guest_snake_id IS NULL";

// Cages that can physically host the snake and have at least one open
// window covering the range. Price ascending, then size descending.
const MATCH_CAGES_SQL: &str = "SELECT DISTINCT c.id, c.owner_id, c.name, c.square_meters, c.is_carpeted, c.has_toys, c.allow_dangerous, c.price \
     FROM cages c JOIN bookings b ON b.cage_id = c.id \
     WHERE c.square_meters >= ?1 \
       AND b.check_in <= ?2 AND b.check_out >= ?3 \
       AND b.guest_snake_id IS NULL \
       AND (?4 = 0 OR c.allow_dangerous = 1) \
     ORDER BY c.price ASC, c.square_meters DESC";

const GUEST_BOOKINGS_SQL: &str = "SELECT b.id, b.cage_id, b.check_in, b.check_out, b.guest_owner_id, b.guest_snake_id, b.booked_at, c.name, c.price \
     FROM bookings b JOIN cages c ON c.id = b.cage_id \
     WHERE b.guest_owner_id = ?1 \
     ORDER BY b.check_in, b.id";

/// Maps a booking row in `BOOKING_COLUMNS` order.
fn booking_from_row(row: &Row<'_>) -> rusqlite::Result<Booking> {
    Ok(Booking {
        id: row.get::<_, i64>(0)? as u64,
        cage_id: row.get::<_, i64>(1)? as u64,
        check_in: date_from_sql(2, row.get::<_, String>(2)?)?,
        check_out: date_from_sql(3, row.get::<_, String>(3)?)?,
        guest_owner_id: row.get::<_, Option<i64>>(4)?.map(|id| id as u64),
        guest_snake_id: row.get::<_, Option<i64>>(5)?.map(|id| id as u64),
        booked_at: row
            .get::<_, Option<String>>(6)?
            .map(|ts| timestamp_from_sql(6, ts))
            .transpose()?,
    })
}

impl super::Database {
    /// Lists a cage's windows in stored order.
    pub fn bookings_for_cage(&self, cage_id: u64) -> Result<Vec<Booking>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {BOOKING_COLUMNS} FROM bookings WHERE cage_id = ?1 ORDER BY check_in, id"
            ))
            .db_context("Failed to prepare query")?;

        let bookings = stmt
            .query_map(params![cage_id as i64], booking_from_row)
            .db_context("Failed to query bookings")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch bookings")?;

        Ok(bookings)
    }

    /// Appends an open availability window to a cage owned by the acting
    /// account. The window spans `days` nights starting at `start`.
    pub fn add_availability(&mut self, params: &AddAvailability) -> Result<Booking> {
        let check_in = params.start;
        let check_out = check_in
            .checked_add(Span::new().days(params.days))
            .map_err(|_| {
                BnbError::invalid_input("days", "availability window extends out of range")
            })?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let cage_owner: Option<i64> = tx
            .query_row(SELECT_CAGE_OWNER_SQL, params![params.cage_id as i64], |row| {
                row.get(0)
            })
            .optional()
            .db_context("Failed to query cage owner")?;

        // A cage owned by someone else is indistinguishable from a missing one
        if cage_owner != Some(params.owner_id as i64) {
            return Err(BnbError::CageNotFound { id: params.cage_id });
        }

        tx.execute(
            INSERT_WINDOW_SQL,
            params![
                params.cage_id as i64,
                check_in.to_string(),
                check_out.to_string()
            ],
        )
        .map_err(|e| BnbError::database_error("Failed to insert availability window", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Booking {
            id,
            cage_id: params.cage_id,
            check_in,
            check_out,
            guest_owner_id: None,
            guest_snake_id: None,
            booked_at: None,
        })
    }

    /// Finds cages that can host the snake over the requested range.
    ///
    /// Each match carries the first open covering window in stored order, so
    /// the commit path never has to re-derive the selection with a second,
    /// possibly divergent scan.
    pub fn available_cages(
        &self,
        check_in: Date,
        check_out: Date,
        snake: &Snake,
    ) -> Result<Vec<CageMatch>> {
        let mut stmt = self
            .connection
            .prepare(MATCH_CAGES_SQL)
            .db_context("Failed to prepare query")?;

        let cages = stmt
            .query_map(
                params![
                    snake.min_cage_size(),
                    check_in.to_string(),
                    check_out.to_string(),
                    snake.is_venomous,
                ],
                cage_queries::cage_from_row,
            )
            .db_context("Failed to query available cages")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch available cages")?;

        let mut matches = Vec::with_capacity(cages.len());
        for mut cage in cages {
            let window_id: Option<i64> = self
                .connection
                .query_row(
                    SELECT_OPEN_WINDOW_SQL,
                    params![cage.id as i64, check_in.to_string(), check_out.to_string()],
                    |row| row.get(0),
                )
                .optional()
                .db_context("Failed to query open window")?;

            // The join guarantees one exists; skip defensively if it raced away
            let Some(window_id) = window_id else { continue };

            cage.bookings = self.bookings_for_cage(cage.id)?;
            let window = cage
                .bookings
                .iter()
                .find(|b| b.id == window_id as u64)
                .cloned()
                .ok_or_else(|| BnbError::Configuration {
                    message: format!("window {window_id} missing from cage {}", cage.id),
                })?;

            matches.push(CageMatch { cage, window });
        }

        Ok(matches)
    }

    /// Commits a booking: selects the first open window covering the range
    /// and stamps the guest ids and booked-at time onto it.
    ///
    /// The whole read-modify-write runs in one immediate transaction, so a
    /// concurrent process cannot consume the window between selection and
    /// update. If no open covering window remains the operation fails with
    /// [`BnbError::WindowUnavailable`] instead of booking nothing.
    pub fn book_cage(&mut self, params: &BookCage) -> Result<Booking> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let snake = snake_queries::select_snake(&tx, params.snake_id)?.ok_or(
            BnbError::SnakeNotFound {
                id: params.snake_id,
            },
        )?;
        let cage = cage_queries::select_cage(&tx, params.cage_id)?.ok_or(
            BnbError::CageNotFound {
                id: params.cage_id,
            },
        )?;

        // Re-validate what the matcher promised; the cage may have come from
        // a stale selection list.
        if !cage.suits(&snake) {
            return Err(BnbError::invalid_input(
                "cage_id",
                "cage does not suit the selected snake",
            ));
        }

        let window_id: Option<i64> = tx
            .query_row(
                SELECT_OPEN_WINDOW_SQL,
                params![
                    params.cage_id as i64,
                    params.check_in.to_string(),
                    params.check_out.to_string()
                ],
                |row| row.get(0),
            )
            .optional()
            .db_context("Failed to query open window")?;

        let Some(window_id) = window_id else {
            return Err(BnbError::WindowUnavailable {
                cage_id: params.cage_id,
            });
        };

        let booked_at = Timestamp::now();
        let reserved = tx
            .execute(
                RESERVE_WINDOW_SQL,
                params![
                    params.owner_id as i64,
                    params.snake_id as i64,
                    booked_at.to_string(),
                    window_id,
                ],
            )
            .db_context("Failed to reserve window")?;

        if reserved == 0 {
            return Err(BnbError::WindowUnavailable {
                cage_id: params.cage_id,
            });
        }

        let booking = tx
            .query_row(
                &format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?1"),
                params![window_id],
                booking_from_row,
            )
            .db_context("Failed to query booked window")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(booking)
    }

    /// Lists a guest's committed bookings across all cages, joined with the
    /// cage name and nightly price.
    pub fn bookings_for_guest(&self, owner_id: u64) -> Result<Vec<BookingSummary>> {
        let mut stmt = self
            .connection
            .prepare(GUEST_BOOKINGS_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map(params![owner_id as i64], |row| {
                let booking = booking_from_row(row)?;
                Ok(BookingSummary {
                    cage_id: booking.cage_id,
                    cage_name: row.get(7)?,
                    price: row.get(8)?,
                    booking,
                })
            })
            .db_context("Failed to query guest bookings")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch guest bookings")?;

        Ok(summaries)
    }
}
