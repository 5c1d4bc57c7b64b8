//! The static table of publishable projects.
//!
//! Each project maps its short name to the Sonatype staging profile that
//! accepts it and to its Maven group path below `com/microsoft`. The table
//! is fixed at compile time; adding a project means adding a variant here.

use std::fmt;
use std::str::FromStr;

use stagehand_util::errors::StagehandError;

/// Maven group path prefix shared by every publishable project.
pub const GROUP_PREFIX: &str = "com/microsoft";

/// A project that may be staged to Sonatype OSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Project {
    Adal,
    Msal,
    Common,
    Common4j,
}

impl Project {
    /// Every known project, in help-listing order.
    pub const ALL: [Project; 4] = [
        Project::Adal,
        Project::Msal,
        Project::Common,
        Project::Common4j,
    ];

    /// The short name used on the command line and in the POM rename.
    pub fn name(self) -> &'static str {
        match self {
            Project::Adal => "adal",
            Project::Msal => "msal",
            Project::Common => "common",
            Project::Common4j => "common4j",
        }
    }

    /// The Sonatype staging profile id that accepts this project's group.
    pub fn staging_profile_id(self) -> &'static str {
        match self {
            Project::Adal => "38f4f6ab9c09e2",
            Project::Msal => "5a29b17135cf02",
            Project::Common | Project::Common4j => "1d8a6d5e4f7b31",
        }
    }

    /// Maven group path below [`GROUP_PREFIX`], slash-separated.
    pub fn group_path(self) -> &'static str {
        match self {
            Project::Adal => "aad/adal",
            Project::Msal => "identity/client/msal",
            Project::Common => "identity/common",
            Project::Common4j => "identity/common4j",
        }
    }

    /// Look up a project by its short name.
    pub fn from_name(name: &str) -> Option<Project> {
        Project::ALL.iter().copied().find(|p| p.name() == name)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Project {
    type Err = StagehandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Project::from_name(s).ok_or_else(|| {
            let known: Vec<&str> = Project::ALL.iter().map(|p| p.name()).collect();
            StagehandError::Usage {
                message: format!("unknown project '{s}' (expected one of: {})", known.join(", ")),
            }
        })
    }
}
