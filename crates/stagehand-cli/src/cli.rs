//! CLI argument definitions for stagehand.
//!
//! Uses `clap` derive macros. The tool takes exactly two positional
//! arguments, matching how the release pipeline invokes it:
//! `stagehand <project> <version>`.

use clap::Parser;

use stagehand_core::project::Project;
use stagehand_nexus::endpoint::OSS_SONATYPE_URL;

#[derive(Parser, Debug)]
#[command(
    name = "stagehand",
    about = "Upload Maven release artifacts to a Sonatype staging repository",
    long_about = "stagehand opens a staging repository under the project's Sonatype staging \
                  profile and uploads every artifact from the CI staging directory into it. \
                  Promotion of the staged repository is left to external tooling."
)]
pub struct Cli {
    /// Project to stage: adal, msal, common, or common4j
    pub project: Project,

    /// Release version, e.g. 1.2.3
    pub version: String,

    /// Base URL of the Nexus staging service
    #[arg(long, default_value = OSS_SONATYPE_URL)]
    pub nexus_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
