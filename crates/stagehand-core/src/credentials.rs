//! Nexus credentials loaded from the CI secure file.
//!
//! Azure Pipelines downloads the secure file and exports its path in
//! `CREDENTIALS_SECUREFILEPATH`. The file is a JSON object with `username`
//! and `password` keys. Credentials are loaded once per run and never
//! written back.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use stagehand_util::errors::{StagehandError, StagehandResult};

/// Environment variable naming the credentials file.
pub const CREDENTIALS_PATH_VAR: &str = "CREDENTIALS_SECUREFILEPATH";

/// Basic-auth credentials for the Nexus staging API.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Load credentials from a JSON file at `path`.
    pub fn from_path(path: &Path) -> StagehandResult<Credentials> {
        let content = std::fs::read_to_string(path).map_err(|e| StagehandError::Credentials {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        let creds: Credentials =
            serde_json::from_str(&content).map_err(|e| StagehandError::Credentials {
                message: format!("malformed credentials file {}: {e}", path.display()),
            })?;
        Ok(creds)
    }

    /// Load credentials from the file named by [`CREDENTIALS_PATH_VAR`].
    ///
    /// A missing variable is a usage error, reported before any file is
    /// touched.
    pub fn from_env() -> StagehandResult<Credentials> {
        let path = std::env::var(CREDENTIALS_PATH_VAR).map_err(|_| StagehandError::Usage {
            message: format!("{CREDENTIALS_PATH_VAR} is not set"),
        })?;
        tracing::debug!(%path, "loading credentials");
        Self::from_path(Path::new(&path))
    }
}

// Keep the password out of logs and error chains.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}
