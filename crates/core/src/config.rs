//! Configuration system for the interpreter.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Output options:** Character versus decimal rendering of the `.`
//!    operator.
//! 2. **Trace options:** Optional collection of tape snapshots for
//!    post-run reporting.
//!
//! Configuration is supplied by the CLI layer or deserialized; use
//! `Config::default()` for the canonical behavior (character output, no
//! tape history).

use serde::Deserialize;

/// Root configuration for one program run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output rendering options.
    pub output: OutputConfig,
    /// Tracing and history-collection options.
    pub trace: TraceConfig,
}

/// Output rendering options for the `.` operator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Render emitted cells as their decimal value instead of as characters.
    pub numeric: bool,
}

/// Tracing options.
///
/// History collection must never alter engine semantics; it only affects
/// what is available to the reporting layer after the run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Record a full snapshot of the tape after every dispatched
    /// instruction. Expensive; intended for debugging short programs.
    pub record_tape_history: bool,
}
