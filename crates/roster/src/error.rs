//! CLI error types with miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(roster::validation))]
    Validation { field: String, reason: String },

    #[error("Invalid input:\n{details}")]
    #[diagnostic(
        code(roster::invalid_input),
        help("Correct the listed fields and try again.")
    )]
    InvalidInput { details: String },

    #[error("Destructive operation requires confirmation")]
    #[diagnostic(
        code(roster::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes,

    // ── Resources ────────────────────────────────────────────────────
    #[error("User '{id}' not found")]
    #[diagnostic(code(roster::not_found), help("Run: roster list to see available ids"))]
    UserNotFound { id: String },

    // ── Operations ───────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(roster::operation_failed),
        help("Check that the users API is reachable (see --api-url) and retry.")
    )]
    Operation { message: String },

    // ── Configuration / IO ───────────────────────────────────────────
    #[error(transparent)]
    Config(#[from] roster_config::ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. }
            | Self::InvalidInput { .. }
            | Self::NonInteractiveRequiresYes => exit_code::USAGE,
            Self::UserNotFound { .. } => exit_code::NOT_FOUND,
            _ => exit_code::GENERAL,
        }
    }
}
