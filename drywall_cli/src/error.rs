//! CLI errors and exit codes.
//!
//! Exit codes:
//! - 0: Every check passed
//! - 1: At least one check is NG, or a project item could not be calculated
//! - 2: The command itself failed (unreadable file, invalid job file, bad input)

use std::path::PathBuf;
use std::process::ExitCode;

use drywall_core::CalcError;
use thiserror::Error;

/// Exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    /// NG result or failed item
    ChecksFailed = 1,
    /// The command could not run
    Error = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl CliExitCode {
    /// Exit code for a verdict, honouring `--allow-fail`.
    pub fn for_verdict(passed: bool, allow_fail: bool) -> Self {
        if passed || allow_fail {
            CliExitCode::Success
        } else {
            CliExitCode::ChecksFailed
        }
    }

    /// Exit code for a project run. `--allow-fail` covers NG results only;
    /// an item that could not be calculated always fails the run.
    pub fn for_batch(passed: bool, errored: bool, allow_fail: bool) -> Self {
        if errored {
            CliExitCode::ChecksFailed
        } else {
            Self::for_verdict(passed, allow_fail)
        }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{} already exists; pass --force to overwrite", .0.display())]
    AlreadyExists(PathBuf),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable code, reusing the core codes for calculation errors
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Calc(e) => e.error_code(),
            CliError::Io { .. } => "IO_ERROR",
            CliError::Json(_) => "SERIALIZATION_ERROR",
            CliError::AlreadyExists(_) => "ALREADY_EXISTS",
        }
    }
}
