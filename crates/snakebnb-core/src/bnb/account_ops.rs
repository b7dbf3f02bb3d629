//! Account operations for the Bnb interface.

use tokio::task;

use super::Bnb;
use crate::{
    db::Database,
    error::{BnbError, Result},
    models::Owner,
    params::{CreateAccount, Id},
};

impl Bnb {
    /// Registers a new account with a unique, case-normalized email.
    pub async fn create_account(&self, params: &CreateAccount) -> Result<Owner> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let name = params.name.trim().to_string();
        let email = params.normalized_email();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_owner(&name, &email)
        })
        .await
        .map_err(|e| BnbError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Finds an account by email. The lookup is case-insensitive; the email
    /// is normalized to lowercase before querying.
    pub async fn find_account_by_email(&self, email: &str) -> Result<Option<Owner>> {
        let db_path = self.db_path.clone();
        let email = email.trim().to_lowercase();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.find_owner_by_email(&email)
        })
        .await
        .map_err(|e| BnbError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves an account by its ID.
    pub async fn get_account(&self, params: &Id) -> Result<Option<Owner>> {
        let db_path = self.db_path.clone();
        let owner_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_owner(owner_id)
        })
        .await
        .map_err(|e| BnbError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
