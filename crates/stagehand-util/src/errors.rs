use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all stagehand operations.
#[derive(Debug, Error, Diagnostic)]
pub enum StagehandError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid invocation: bad arguments or missing environment variables.
    #[error("Usage error: {message}")]
    #[diagnostic(help("Run with --help for usage"))]
    Usage { message: String },

    /// Credentials file is missing, unreadable, or malformed.
    #[error("Credentials error: {message}")]
    #[diagnostic(help(
        "CREDENTIALS_SECUREFILEPATH must point to a JSON file with \"username\" and \"password\" keys"
    ))]
    Credentials { message: String },

    /// Network request failed at the transport level.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The staging server answered with a non-success status or an
    /// unexpected response body.
    #[error("Nexus error: {message}")]
    Remote { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type StagehandResult<T> = miette::Result<T>;
