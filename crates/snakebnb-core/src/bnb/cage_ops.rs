//! Cage and availability operations for the Bnb interface.

use tokio::task;

use super::Bnb;
use crate::{
    db::Database,
    error::{BnbError, Result},
    models::Cage,
    params::{AddAvailability, Id, RegisterCage},
};

impl Bnb {
    /// Registers a cage under a host account.
    pub async fn register_cage(&self, params: &RegisterCage) -> Result<Cage> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.register_cage(&params)
        })
        .await
        .map_err(|e| BnbError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists the cages registered under an account, with their windows.
    pub async fn cages_for_owner(&self, params: &Id) -> Result<Vec<Cage>> {
        let db_path = self.db_path.clone();
        let owner_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.cages_for_owner(owner_id)
        })
        .await
        .map_err(|e| BnbError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Appends an open availability window to one of the host's cages and
    /// returns the cage with its updated window list.
    pub async fn add_availability(&self, params: &AddAvailability) -> Result<Cage> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = *params;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let window = db.add_availability(&params)?;
            db.get_cage(window.cage_id)?
                .ok_or(BnbError::CageNotFound { id: params.cage_id })
        })
        .await
        .map_err(|e| BnbError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
