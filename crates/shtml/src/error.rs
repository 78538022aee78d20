//! CLI error types.

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid variable definition '{0}': expected NAME=VALUE")]
    Var(String),
}
