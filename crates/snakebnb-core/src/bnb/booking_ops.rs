//! Availability matching and booking commit operations.

use tokio::task;

use super::Bnb;
use crate::{
    db::Database,
    error::{BnbError, Result},
    models::{Booking, BookingSummary, CageMatch},
    params::{AvailabilitySearch, BookCage, Id},
};

impl Bnb {
    /// Finds cages available for the requested range and snake, sorted by
    /// price ascending and square meters descending.
    ///
    /// Inverted ranges are rejected before any query is issued. Each match
    /// includes the open window the committer would consume.
    pub async fn available_cages(&self, params: &AvailabilitySearch) -> Result<Vec<CageMatch>> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = *params;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let snake = db
                .get_snake(params.snake_id)?
                .ok_or(BnbError::SnakeNotFound {
                    id: params.snake_id,
                })?;
            db.available_cages(params.check_in, params.check_out, &snake)
        })
        .await
        .map_err(|e| BnbError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Commits a booking on the first open window covering the range.
    ///
    /// Fails with [`BnbError::WindowUnavailable`] when the selection is no
    /// longer available, e.g. another guest consumed the window after the
    /// availability search.
    pub async fn book_cage(&self, params: &BookCage) -> Result<Booking> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = *params;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.book_cage(&params)
        })
        .await
        .map_err(|e| BnbError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists a guest's committed bookings with cage details.
    pub async fn bookings_for_guest(&self, params: &Id) -> Result<Vec<BookingSummary>> {
        let db_path = self.db_path.clone();
        let owner_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.bookings_for_guest(owner_id)
        })
        .await
        .map_err(|e| BnbError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
