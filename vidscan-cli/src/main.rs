// vidscan-cli/src/main.rs
//
// Entry point for the `vidscan` binary.
//
// Responsibilities:
// - Parsing user-provided arguments.
// - Setting up logging to stderr, and to a file when --log-dir is given.
// - Running the scan and mapping its outcome to a process exit code.

use vidscan_cli::config::LOG_FILE_PREFIX;
use vidscan_cli::error::CliResult;
use vidscan_cli::logging::{get_timestamp, init_console_logging, init_file_logging};
use vidscan_cli::{Cli, parse_cli, run_scan};
use vidscan_core::ScanOutcome;

use log::LevelFilter;
use std::process;

fn setup_logging(args: &Cli) -> CliResult<()> {
    let log_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    match &args.log_dir {
        Some(log_dir) => {
            let log_path = log_dir.join(format!("{LOG_FILE_PREFIX}_{}.log", get_timestamp()));
            init_file_logging(&log_path, log_level)
        }
        None => init_console_logging(log_level),
    }
}

fn main() {
    let args = parse_cli();

    if let Err(e) = setup_logging(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    match run_scan(&args) {
        Ok(ScanOutcome::Completed(_)) => {}
        Ok(ScanOutcome::RootMissing) => process::exit(1),
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    }
}
