//! Request authentication against the staging API.

use reqwest::RequestBuilder;

use stagehand_core::credentials::Credentials;

/// Apply basic-auth credentials to a staging API request.
pub fn apply_auth(request: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
    request.basic_auth(&credentials.username, Some(&credentials.password))
}
