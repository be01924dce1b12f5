// vidscan-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for this crate's unit tests and when the "test-mocks" feature is
// enabled.

use crate::error::ProbeError;
use crate::external::DurationProbe;

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Mock implementation of DurationProbe.
///
/// Expectations are keyed by file name only, so tests can register results
/// before they know the temp directory a file ends up in.
#[derive(Default)]
pub struct MockDurationProbe {
    results: RefCell<HashMap<OsString, Result<f64, String>>>,
    received_calls: RefCell<Vec<PathBuf>>,
}

impl MockDurationProbe {
    pub fn new() -> Self {
        Default::default()
    }

    /// Makes probes of `file_name` succeed with `seconds`.
    pub fn expect_duration(&self, file_name: &str, seconds: f64) {
        self.results
            .borrow_mut()
            .insert(OsString::from(file_name), Ok(seconds));
    }

    /// Makes probes of `file_name` fail as a non-zero ffprobe exit would.
    pub fn expect_failure(&self, file_name: &str, stderr: &str) {
        self.results
            .borrow_mut()
            .insert(OsString::from(file_name), Err(stderr.to_string()));
    }

    /// Paths passed to `probe_duration`, in call order.
    pub fn get_received_calls(&self) -> Vec<PathBuf> {
        self.received_calls.borrow().clone()
    }
}

impl DurationProbe for MockDurationProbe {
    fn probe_duration(&self, path: &Path) -> Result<f64, ProbeError> {
        log::info!("MockDurationProbe::probe_duration called for: {}", path.display());
        self.received_calls.borrow_mut().push(path.to_path_buf());

        let expectation = path
            .file_name()
            .and_then(|name| self.results.borrow().get(name).cloned());

        match expectation {
            Some(Ok(seconds)) => Ok(seconds),
            Some(Err(stderr)) => Err(ProbeError::Status {
                code: Some(1),
                stderr,
            }),
            None => {
                log::error!("MockDurationProbe: No expectation set for path: {}", path.display());
                Err(ProbeError::Status {
                    code: Some(1),
                    stderr: format!("MockDurationProbe: no expectation for {}", path.display()),
                })
            }
        }
    }
}
