//! HTTP client construction for the staging API.

use std::time::Duration;

use reqwest::Client;

use stagehand_util::errors::{StagehandError, StagehandResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Build the shared reqwest client for one release run.
///
/// Certificate verification is disabled on this client.
pub fn build_client() -> StagehandResult<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent("stagehand/0.2")
        .danger_accept_invalid_certs(true)
        .build()
        .map_err(|e| {
            StagehandError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}
