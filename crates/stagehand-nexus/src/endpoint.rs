//! Nexus staging endpoint: URL layout for the staging REST API.

use stagehand_core::project::GROUP_PREFIX;

/// Sonatype OSS staging service base URL.
pub const OSS_SONATYPE_URL: &str = "https://oss.sonatype.org/service/local";

/// A Nexus instance's staging REST service.
#[derive(Debug, Clone)]
pub struct NexusEndpoint {
    pub base_url: String,
}

impl NexusEndpoint {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The default Sonatype OSS endpoint.
    pub fn sonatype_oss() -> Self {
        Self::new(OSS_SONATYPE_URL)
    }

    /// URL that starts a staging repository under the given profile.
    pub fn start_url(&self, profile_id: &str) -> String {
        format!("{}/staging/profiles/{profile_id}/start", self.base_url)
    }

    /// URL a file is deployed to within an open staging repository.
    ///
    /// `group_path` is the project's group path below `com/microsoft`,
    /// slash-separated, as produced by
    /// [`stagehand_core::project::Project::group_path`].
    pub fn deploy_url(
        &self,
        repository_id: &str,
        group_path: &str,
        version: &str,
        filename: &str,
    ) -> String {
        format!(
            "{}/staging/deployByRepositoryId/{repository_id}/{GROUP_PREFIX}/{group_path}/{version}/{filename}",
            self.base_url
        )
    }
}

impl Default for NexusEndpoint {
    fn default() -> Self {
        Self::sonatype_oss()
    }
}
