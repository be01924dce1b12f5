// vidscan-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use crate::config::DEFAULT_ROOT;

use clap::Parser;
use std::path::PathBuf;
use vidscan_core::config::{DEFAULT_FFPROBE_BIN, DEFAULT_PROBE_TIMEOUT_SECS};

// --- CLI Argument Definition ---

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vidscan: Video duration scanner",
    long_about = "Recursively finds video files under a directory, probes each one \
                  with ffprobe and prints per-file durations with totals."
)]
pub struct Cli {
    /// Directory to scan (searched recursively)
    #[arg(value_name = "ROOT", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Video extensions to look for, replacing the default list
    /// (repeatable or comma-separated, e.g. --ext mp4,mkv)
    #[arg(short = 'e', long = "ext", value_delimiter = ',', value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Seconds to wait for each ffprobe call before giving up on the file
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_PROBE_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// ffprobe executable to run.
    /// Can also be set via the VIDSCAN_FFPROBE environment variable.
    #[arg(long, value_name = "PATH", env = "VIDSCAN_FFPROBE", default_value = DEFAULT_FFPROBE_BIN)]
    pub ffprobe: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Optional: Directory to also write a timestamped log file into
    #[arg(long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Parses the process arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
