// vidscan-core/tests/ffprobe_executor_tests.rs
//
// Drives FfprobeExecutor against small shell scripts standing in for ffprobe.

#![cfg(unix)]

use vidscan_core::error::ProbeError;
use vidscan_core::external::{DurationProbe, FfprobeExecutor};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::{TempDir, tempdir};

// Writes an executable `fake-ffprobe` script with the given body
fn fake_ffprobe(dir: &TempDir, body: &str) -> PathBuf {
    let script = dir.path().join("fake-ffprobe");
    fs::write(&script, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
    script
}

fn probe_with(script: &Path, timeout: Duration) -> Result<f64, ProbeError> {
    FfprobeExecutor::new(script, timeout).probe_duration(Path::new("/videos/clip.mp4"))
}

#[test]
fn test_probe_success() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let script = fake_ffprobe(
        &dir,
        r#"echo '{ "format": { "duration": "1234.567000" } }'"#,
    );

    let duration = probe_with(&script, Duration::from_secs(10))?;
    assert_eq!(duration, 1234.567);
    Ok(())
}

#[test]
fn test_probe_passes_expected_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let args_file = dir.path().join("args.txt");
    let script = fake_ffprobe(
        &dir,
        &format!(
            "printf '%s\\n' \"$@\" > '{}'\necho '{{\"format\":{{\"duration\":\"1.0\"}}}}'",
            args_file.display()
        ),
    );

    probe_with(&script, Duration::from_secs(10))?;

    let recorded = fs::read_to_string(&args_file)?;
    let args: Vec<&str> = recorded.lines().collect();
    assert_eq!(
        args,
        vec![
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "json",
            "/videos/clip.mp4"
        ]
    );
    Ok(())
}

#[test]
fn test_probe_non_zero_exit() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let script = fake_ffprobe(
        &dir,
        "echo 'clip.mp4: Invalid data found when processing input' >&2\nexit 1",
    );

    match probe_with(&script, Duration::from_secs(10)) {
        Err(ProbeError::Status { code, stderr }) => {
            assert_eq!(code, Some(1));
            assert!(stderr.contains("Invalid data found"));
        }
        other => panic!("Unexpected result: {other:?}"),
    }
    Ok(())
}

#[test]
fn test_probe_malformed_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let script = fake_ffprobe(&dir, "echo 'duration=12.0'");

    let result = probe_with(&script, Duration::from_secs(10));
    assert!(matches!(result, Err(ProbeError::Parse(_))));
    Ok(())
}

#[test]
fn test_probe_missing_duration() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let script = fake_ffprobe(&dir, r#"echo '{ "format": {} }'"#);

    let result = probe_with(&script, Duration::from_secs(10));
    assert!(matches!(result, Err(ProbeError::MissingDuration)));
    Ok(())
}

#[test]
fn test_probe_timeout_kills_process() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    // exec so the kill reaches the sleeping process itself
    let script = fake_ffprobe(&dir, "exec sleep 30");

    let start = Instant::now();
    let result = probe_with(&script, Duration::from_millis(300));

    assert!(matches!(result, Err(ProbeError::Timeout(_))));
    assert!(start.elapsed() < Duration::from_secs(10));
    Ok(())
}

#[test]
fn test_probe_is_not_cached() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let counter = dir.path().join("count");
    let script = fake_ffprobe(
        &dir,
        &format!(
            "echo x >> '{}'\necho '{{\"format\":{{\"duration\":\"2.0\"}}}}'",
            counter.display()
        ),
    );

    let probe = FfprobeExecutor::new(&script, Duration::from_secs(10));
    probe.probe_duration(Path::new("same.mp4"))?;
    probe.probe_duration(Path::new("same.mp4"))?;

    assert_eq!(fs::read_to_string(&counter)?.lines().count(), 2);
    Ok(())
}
