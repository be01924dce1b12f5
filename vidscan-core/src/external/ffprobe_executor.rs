//! FFprobe integration for container duration lookups.
//!
//! Each probe spawns `ffprobe -v error -show_entries format=duration -of json
//! <file>`, waits for it under a deadline and reads `format.duration` from the
//! JSON it prints. Stdout and stderr are drained on helper threads so a chatty
//! child can never block on a full pipe while we poll for its exit.

use crate::config::ScanConfig;
use crate::error::ProbeError;
use crate::external::DurationProbe;

use serde::Deserialize;
use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often the child is polled while waiting for it to exit.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Subset of ffprobe's JSON output that carries the duration.
#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    format: Option<ProbeFormat>,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    #[serde(default)]
    duration: Option<DurationField>,
}

/// ffprobe prints the duration as a string ("12.345000"); accept a bare
/// number as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DurationField {
    Text(String),
    Number(f64),
}

/// Probes durations by running ffprobe as a subprocess.
#[derive(Debug, Clone)]
pub struct FfprobeExecutor {
    program: PathBuf,
    timeout: Duration,
}

impl FfprobeExecutor {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Builds an executor from the probe settings of a scan configuration.
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.ffprobe_bin.clone(), config.probe_timeout)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn spawn(&self, input_path: &Path) -> Result<Child, ProbeError> {
        let args = ffprobe_args(input_path);
        log::debug!(
            "Running: {} {}",
            self.program.display(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ProbeError::Spawn {
                program: self.program.display().to_string(),
                source,
            })
    }

    /// Polls the child until it exits or the deadline passes. On timeout the
    /// child is killed and reaped before returning.
    fn wait_with_deadline(&self, child: &mut Child) -> Result<ExitStatus, ProbeError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) if Instant::now() >= deadline => {
                    if let Err(e) = child.kill() {
                        log::debug!("Failed to kill timed out ffprobe: {e}");
                    }
                    let _ = child.wait();
                    return Err(ProbeError::Timeout(self.timeout));
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    let _ = child.kill();
                    return Err(ProbeError::Wait(e));
                }
            }
        }
    }
}

impl DurationProbe for FfprobeExecutor {
    fn probe_duration(&self, input_path: &Path) -> Result<f64, ProbeError> {
        let mut child = self.spawn(input_path)?;

        let stdout_reader = child.stdout.take().map(drain);
        let stderr_reader = child.stderr.take().map(drain);

        // Reader threads of a killed child are left to finish on their own;
        // a grandchild may still hold the pipes open.
        let status = self.wait_with_deadline(&mut child)?;

        let stdout = collect(stdout_reader);
        let stderr = collect(stderr_reader);

        if !status.success() {
            return Err(ProbeError::Status {
                code: status.code(),
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        let duration = parse_duration_output(&stdout)?;
        log::debug!("Probed {}: {duration:.3}s", input_path.display());
        Ok(duration)
    }
}

/// Arguments for a duration-only probe of `input_path`.
pub(crate) fn ffprobe_args(input_path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-v",
        "error",
        "-show_entries",
        "format=duration",
        "-of",
        "json",
    ]
    .into_iter()
    .map(OsString::from)
    .collect();
    args.push(input_path.as_os_str().to_os_string());
    args
}

/// Extracts `format.duration` from ffprobe's JSON output.
pub(crate) fn parse_duration_output(stdout: &[u8]) -> Result<f64, ProbeError> {
    let output: ProbeOutput = serde_json::from_slice(stdout)?;

    let field = output
        .format
        .and_then(|format| format.duration)
        .ok_or(ProbeError::MissingDuration)?;

    let (raw, value) = match field {
        DurationField::Text(text) => {
            let value = text.trim().parse::<f64>().ok();
            (text, value)
        }
        DurationField::Number(number) => (number.to_string(), Some(number)),
    };

    match value {
        Some(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(seconds),
        _ => Err(ProbeError::InvalidDuration(raw)),
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Err(e) = pipe.read_to_end(&mut buf) {
            log::debug!("Error reading ffprobe output: {e}");
        }
        buf
    })
}

fn collect(reader: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    reader
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default()
}
