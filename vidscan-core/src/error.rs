// ============================================================================
// vidscan-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the vidscan core library
//
// Two layers of errors live here. `CoreError` covers conditions that stop a
// whole operation (bad configuration, an unwritable report). `ProbeError`
// describes why a single ffprobe invocation produced no duration; the scanner
// logs it and moves on to the next file.

use std::time::Duration;
use thiserror::Error;

/// Errors that abort a vidscan operation.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, std::io::Error),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Reasons a single duration probe can fail.
///
/// The scanner does not branch on the variant; it is kept for diagnostics.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error while waiting for ffprobe: {0}")]
    Wait(#[source] std::io::Error),

    #[error("ffprobe timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("ffprobe exited with {}: {stderr}", exit_label(.code))]
    Status { code: Option<i32>, stderr: String },

    #[error("could not parse ffprobe output: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("ffprobe output has no format.duration field")]
    MissingDuration,

    #[error("invalid duration value '{0}'")]
    InvalidDuration(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
