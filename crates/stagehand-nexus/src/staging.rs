//! Starting a staging session: the `promoteRequest` exchange.
//!
//! Starting a staging repository is one POST to the profile's `start`
//! resource with a small XML body; the response carries the id of the
//! freshly created repository in a `stagedRepositoryId` element. Exactly
//! one session is started per run and every upload goes into it.

use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;

use stagehand_core::credentials::Credentials;
use stagehand_util::errors::{StagehandError, StagehandResult};

use crate::auth;
use crate::endpoint::NexusEndpoint;

/// Build the XML body that opens a staging repository.
pub fn promote_request_body(description: &str) -> String {
    let escaped = quick_xml::escape::escape(description);
    format!("<promoteRequest><data><description>{escaped}</description></data></promoteRequest>")
}

/// Extract the first `stagedRepositoryId` element's text from a staging
/// API response body.
pub fn extract_staged_repository_id(xml: &str) -> StagehandResult<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut in_id = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                in_id = e.name().as_ref() == b"stagedRepositoryId";
            }
            Ok(Event::Text(ref e)) if in_id => {
                let id = e.unescape().unwrap_or_default().to_string();
                if !id.is_empty() {
                    return Ok(id);
                }
            }
            Ok(Event::End(_)) => {
                in_id = false;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(StagehandError::Remote {
                    message: format!("Failed to parse staging response: {e}"),
                }
                .into());
            }
            _ => {}
        }
    }

    Err(StagehandError::Remote {
        message: "staging response has no stagedRepositoryId element".to_string(),
    }
    .into())
}

/// Open a staging repository under `profile_id` and return its id.
pub async fn start_staging(
    client: &Client,
    endpoint: &NexusEndpoint,
    credentials: &Credentials,
    profile_id: &str,
    description: &str,
) -> StagehandResult<String> {
    let url = endpoint.start_url(profile_id);
    tracing::debug!(%url, "starting staging repository");

    let mut req = client
        .post(&url)
        .header(reqwest::header::CONTENT_TYPE, "application/xml")
        .body(promote_request_body(description));
    req = auth::apply_auth(req, credentials);

    let resp = req.send().await.map_err(|e| StagehandError::Network {
        message: format!("Request to {url} failed: {e}"),
    })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(StagehandError::Remote {
            message: format!("HTTP {status} starting staging repository at {url}"),
        }
        .into());
    }

    let body = resp.text().await.map_err(|e| StagehandError::Network {
        message: format!("Failed to read response from {url}: {e}"),
    })?;

    let repository_id = extract_staged_repository_id(&body)?;
    tracing::debug!(%repository_id, "staging repository open");
    Ok(repository_id)
}
