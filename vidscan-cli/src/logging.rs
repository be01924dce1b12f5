// ============================================================================
// vidscan-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and optional file logging
//
// Logs (debug detail, probe failures) go to stderr so the report on stdout
// stays clean. Without --log-dir the console logger is env_logger, which also
// honors RUST_LOG. With --log-dir, log4rs writes the same records to stderr
// and to a timestamped file.
//
// USAGE:
// - default: Info level
// - --verbose: Debug level (ffprobe command lines, discovery detail)
// - RUST_LOG=trace: overrides the console filter when env_logger is active

use crate::error::{CliErrorContext, CliResult};

use console::style;
use log::{Level, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::io::Write;
use std::path::Path;

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// Used to give each run's log file a unique name.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Fixed-width, colored label for a log level.
fn level_label(level: Level) -> String {
    let label = match level {
        Level::Error => style("ERROR").red().bold(),
        Level::Warn => style("WARN ").yellow(),
        Level::Info => style("INFO ").green(),
        Level::Debug => style("DEBUG").blue(),
        Level::Trace => style("TRACE").magenta(),
    };
    label.for_stderr().to_string()
}

/// Initializes env_logger on stderr at `level`.
pub fn init_console_logging(level: LevelFilter) -> CliResult<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}",
                buf.timestamp_seconds(),
                level_label(record.level()),
                record.args()
            )
        })
        .try_init()
        .cli_context("Failed to initialize console logging")?;

    log::debug!("Logger initialized with level: {level}");
    Ok(())
}

/// Initializes log4rs with a stderr appender and a file appender at `log_file`.
pub fn init_file_logging(log_file: &Path, level: LevelFilter) -> CliResult<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)
            .cli_with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l:<5})} {m}{n}")))
        .build();

    // File appender with clean format for log files
    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {m}{n}",
        )))
        .build(log_file)
        .cli_with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(level),
        )
        .cli_context("Invalid logging configuration")?;

    log4rs::init_config(config).cli_context("Failed to initialize file logging")?;

    log::debug!("Logging to {}", log_file.display());
    Ok(())
}
