//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::errors::OrbitError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Orbit(#[from] OrbitError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Settings(_) => crate::exitcode::CONFIG,
            CliError::Orbit(e) => match e {
                OrbitError::MapNotFound(_) => crate::exitcode::NOINPUT,
                OrbitError::ReadError(_) => crate::exitcode::IOERR,
                OrbitError::EmptyMap
                | OrbitError::CycleDetected(_)
                | OrbitError::Unreachable { .. } => crate::exitcode::DATAERR,
                OrbitError::BodyNotFound(_) | OrbitError::NotInOrbit(_) => crate::exitcode::USAGE,
            },
        }
    }
}
