//! Command implementations for the CLI.

/// Module containing the implementation of the scan run.
/// Walks the root, probes each video and prints the report.
pub mod scan;
