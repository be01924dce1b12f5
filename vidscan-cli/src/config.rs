// vidscan-cli/src/config.rs
//
// Defines default configuration constants for the `vidscan` binary and the
// translation from parsed arguments to a core ScanConfig.

use crate::cli::Cli;

use std::time::Duration;
use vidscan_core::ScanConfig;

/// Directory scanned when no ROOT argument is given.
pub const DEFAULT_ROOT: &str = ".";

/// Prefix of log files written with --log-dir.
pub const LOG_FILE_PREFIX: &str = "vidscan_run";

/// Builds the core scan configuration from command-line arguments.
///
/// An empty extension list keeps the core defaults.
pub fn scan_config_from_args(args: &Cli) -> ScanConfig {
    let config = ScanConfig::new(args.root.clone())
        .with_probe_timeout(Duration::from_secs(args.timeout))
        .with_ffprobe_bin(args.ffprobe.clone());

    if args.extensions.is_empty() {
        config
    } else {
        config.with_extensions(&args.extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_carry_through() {
        let cli = Cli::try_parse_from(["vidscan", "/media"]).unwrap();
        let config = scan_config_from_args(&cli);
        assert_eq!(config.root, PathBuf::from("/media"));
        assert_eq!(config.extensions.len(), 8);
        assert_eq!(config.probe_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "vidscan", "/media", "--ext", "MP4,ts", "--timeout", "3", "--ffprobe", "/opt/ffprobe",
        ])
        .unwrap();
        let config = scan_config_from_args(&cli);
        assert_eq!(config.extensions, vec![".mp4", ".ts"]);
        assert_eq!(config.probe_timeout, Duration::from_secs(3));
        assert_eq!(config.ffprobe_bin, PathBuf::from("/opt/ffprobe"));
    }
}
