//! Locating the artifact staging directory and naming uploads.
//!
//! The CI agent exposes the directory of built artifacts through one of two
//! environment variables depending on pipeline flavor; both are accepted
//! here. Gradle writes the project descriptor as `pom-default.xml`, which
//! Maven repositories expect as `<artifact>-<version>.pom`, so that one
//! file (and its signature sidecars) is renamed on upload.

use std::path::{Path, PathBuf};

use stagehand_util::errors::{StagehandError, StagehandResult};

use crate::project::Project;

/// Environment variables that may name the artifact directory, in
/// precedence order.
pub const STAGING_DIR_VARS: [&str; 2] =
    ["BUILD_ARTIFACTSTAGINGDIRECTORY", "SYSTEM_ARTIFACTSDIRECTORY"];

/// Gradle's default POM filename, renamed on upload.
const DEFAULT_POM: &str = "pom-default.xml";

/// Resolve the artifact staging directory from the environment.
pub fn staging_dir() -> StagehandResult<PathBuf> {
    for var in STAGING_DIR_VARS {
        if let Ok(value) = std::env::var(var) {
            let dir = PathBuf::from(value);
            if !dir.is_dir() {
                return Err(StagehandError::Usage {
                    message: format!("{var} is not a directory: {}", dir.display()),
                }
                .into());
            }
            tracing::debug!(var, dir = %dir.display(), "resolved artifact directory");
            return Ok(dir);
        }
    }
    Err(StagehandError::Usage {
        message: format!(
            "artifact directory not set (expected {} or {})",
            STAGING_DIR_VARS[0], STAGING_DIR_VARS[1]
        ),
    }
    .into())
}

/// List the regular files in `dir`, sorted by file name.
///
/// Non-recursive: subdirectories and other non-file entries are skipped.
/// Sorting keeps the upload order stable across platforms.
pub fn list_artifacts(dir: &Path) -> StagehandResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(StagehandError::Io)?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(StagehandError::Io)?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(files)
}

/// The filename an artifact is uploaded under.
///
/// `pom-default.xml` becomes `<project>-<version>.pom`; anything appended
/// to the default name (such as a `.asc` signature) is carried over, so
/// `pom-default.xml.asc` becomes `<project>-<version>.pom.asc`. All other
/// names are unchanged.
pub fn deploy_name(file_name: &str, project: Project, version: &str) -> String {
    match file_name.strip_prefix(DEFAULT_POM) {
        Some(suffix) => format!("{}-{version}.pom{suffix}", project.name()),
        None => file_name.to_string(),
    }
}
