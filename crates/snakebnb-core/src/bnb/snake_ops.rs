//! Snake operations for the Bnb interface.

use tokio::task;

use super::Bnb;
use crate::{
    db::Database,
    error::{BnbError, Result},
    models::Snake,
    params::{AddSnake, Id},
};

impl Bnb {
    /// Registers a snake under a guest account.
    pub async fn add_snake(&self, params: &AddSnake) -> Result<Snake> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_snake(&params)
        })
        .await
        .map_err(|e| BnbError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists the snakes registered under an account.
    pub async fn snakes_for_owner(&self, params: &Id) -> Result<Vec<Snake>> {
        let db_path = self.db_path.clone();
        let owner_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.snakes_for_owner(owner_id)
        })
        .await
        .map_err(|e| BnbError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
