use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the session finished, whatever the user chose
    Success = 0,
    /// Application error (external tool failure, config error, console I/O error)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors.
///
/// Every variant here is fatal for the run. Soft user-input problems
/// (bad menu choice, empty selection) never become an error; the
/// interactive uninstaller handles them in place.
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("External step failed: {step}\nCommand: {command}\nDetails: {details}\n\n💡 Hint: Check that the Python interpreter exists and that pip works from it")]
    ExternalToolFailed {
        step: String,
        command: String,
        details: String,
    },

    #[error("Unexpected output from external step: {step}\nDetails: {details}\n\n💡 Hint: The installed pip or pipdeptree may be too old to produce JSON output")]
    MalformedToolOutput { step: String, details: String },

    #[error("Required tool is not available: {tool}\n\n💡 Hint: Install it with `pip install {tool}` or run without --no-install")]
    ToolUnavailable { tool: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid config file: {}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax", path.display())]
    ConfigError { path: PathBuf, details: String },
}
