// ============================================================================
// vidscan-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe
//
// This module encapsulates everything that talks to the external media
// inspector. The scanner only sees the `DurationProbe` trait, so tests can
// substitute a mock and the real ffprobe stays out of unit tests.
//
// KEY COMPONENTS:
// - DurationProbe: trait implemented by anything that can time a media file
// - FfprobeExecutor: the production implementation (subprocess + JSON)
// - check_dependency: startup check that the probe binary can be launched

use crate::error::{CoreError, CoreResult, ProbeError};

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Runs ffprobe and decodes its JSON output
pub mod ffprobe_executor;

/// Scriptable stand-in for ffprobe, used by tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::FfprobeExecutor;

#[cfg(any(test, feature = "test-mocks"))]
pub use mocks::MockDurationProbe;

// ============================================================================
// PROBE ABSTRACTION
// ============================================================================

/// Something that can report the container duration of a media file.
///
/// Implementations return the duration in seconds (finite, non-negative) or
/// the reason the probe failed. They must not retry or cache: each call is an
/// independent probe.
///
/// # Examples
///
/// ```rust
/// use vidscan_core::external::DurationProbe;
/// use vidscan_core::ProbeError;
/// use std::path::Path;
///
/// struct FixedProbe(f64);
///
/// impl DurationProbe for FixedProbe {
///     fn probe_duration(&self, _path: &Path) -> Result<f64, ProbeError> {
///         Ok(self.0)
///     }
/// }
///
/// let probe = FixedProbe(12.5);
/// assert_eq!(probe.probe_duration(Path::new("clip.mp4")).unwrap(), 12.5);
/// ```
pub trait DurationProbe {
    fn probe_duration(&self, path: &Path) -> Result<f64, ProbeError>;
}

impl<T: DurationProbe + ?Sized> DurationProbe for &T {
    fn probe_duration(&self, path: &Path) -> Result<f64, ProbeError> {
        (**self).probe_duration(path)
    }
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that `program` can be started.
///
/// Runs `<program> -version` with output discarded. Only a failure to launch
/// counts; the exit status is ignored.
///
/// # Returns
///
/// * `Ok(())` - The program was started
/// * `Err(CoreError::DependencyNotFound)` - No such executable
/// * `Err(CoreError::CommandStart)` - It exists but could not be started
pub fn check_dependency(program: &Path) -> CoreResult<()> {
    let name = program.display().to_string();

    let result = Command::new(program)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Dependency '{name}' not found.");
            Err(CoreError::DependencyNotFound(name))
        }
        Err(e) => {
            log::debug!("Failed to start dependency check command '{name}': {e}");
            Err(CoreError::CommandStart(name, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dependency_missing() {
        let result = check_dependency(Path::new("vidscan-no-such-binary-4711"));
        assert!(matches!(result, Err(CoreError::DependencyNotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_check_dependency_present() {
        // Exit status is ignored, only the launch matters.
        assert!(check_dependency(Path::new("true")).is_ok());
        assert!(check_dependency(Path::new("false")).is_ok());
    }
}
