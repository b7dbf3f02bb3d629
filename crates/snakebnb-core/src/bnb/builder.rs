//! Builder for creating and configuring Bnb instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Bnb;
use crate::{
    db::Database,
    error::{BnbError, Result},
};

/// Builder for creating and configuring [`Bnb`] instances.
#[derive(Debug, Clone)]
pub struct BnbBuilder {
    database_path: Option<PathBuf>,
}

impl BnbBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/snakebnb/snakebnb.db` or
    /// `~/.local/share/snakebnb/snakebnb.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured instance, creating the database and applying
    /// the schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `BnbError::FileSystem` if the database path is invalid
    /// Returns `BnbError::Database` if database initialization fails
    pub async fn build(self) -> Result<Bnb> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BnbError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), BnbError>(())
        })
        .await
        .map_err(|e| BnbError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Bnb::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("snakebnb")
            .place_data_file("snakebnb.db")
            .map_err(|e| BnbError::XdgDirectory(e.to_string()))
    }
}

impl Default for BnbBuilder {
    fn default() -> Self {
        Self::new()
    }
}
