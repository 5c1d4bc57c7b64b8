//! The publish pipeline: one staging session, then one upload per artifact.
//!
//! Strictly sequential: credentials and the artifact directory are
//! validated before any network call, exactly one staging repository is
//! opened, and the first failed upload aborts the rest of the batch.

use miette::Result;

use stagehand_core::artifacts::{self, deploy_name};
use stagehand_core::credentials::Credentials;
use stagehand_core::project::Project;
use stagehand_nexus::endpoint::NexusEndpoint;
use stagehand_nexus::{client, deploy, staging};
use stagehand_util::errors::StagehandError;
use stagehand_util::progress::{spinner, status, status_warn};

pub async fn exec(project: Project, version: &str, nexus_url: &str, verbose: bool) -> Result<()> {
    let credentials = Credentials::from_env()?;
    let dir = artifacts::staging_dir()?;
    let files = artifacts::list_artifacts(&dir)?;

    if verbose {
        status("Publishing", &format!("{} artifacts from {}", files.len(), dir.display()));
    }
    if files.is_empty() {
        status_warn("Warning", &format!("no artifact files in {}", dir.display()));
    }

    let client = client::build_client()?;
    let endpoint = NexusEndpoint::new(nexus_url);

    let sp = spinner(&format!("Starting staging repository for {project} {version}..."));
    let started = staging::start_staging(
        &client,
        &endpoint,
        &credentials,
        project.staging_profile_id(),
        project.name(),
    )
    .await;
    // Stop the spinner before any error report is printed.
    sp.finish_and_clear();
    let repository_id = started?;
    status("Staging", &format!("repository {repository_id} ({project} {version})"));

    for file in &files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| StagehandError::Generic {
                message: format!("unreadable file name: {}", file.display()),
            })?;
        let remote = deploy_name(&name, project, version);
        let url = endpoint.deploy_url(&repository_id, project.group_path(), version, &remote);

        if verbose {
            status("Uploading", &format!("{remote} -> {url}"));
        } else {
            status("Uploading", &remote);
        }
        deploy::upload_file(&client, &credentials, &url, file).await?;
    }

    status(
        "Staged",
        &format!("{} artifacts to repository {repository_id}", files.len()),
    );
    Ok(())
}
