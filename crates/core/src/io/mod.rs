//! Input source and output sink capabilities.
//!
//! This module defines the traits the engine uses at its I/O seams. It
//! provides:
//! 1. **Capabilities:** `InputSource` for the `,` operator and `OutputSink`
//!    for the `.` operator.
//! 2. **Console implementations:** Unbuffered stdin/stdout plumbing with
//!    strict program-order emission.
//! 3. **In-memory implementations:** Queue-backed input and a recording
//!    sink for tests and for debug rendering, where live output is
//!    suppressed.
//!
//! The engine is strictly single-threaded; the only suspension point is
//! `InputSource::read_byte`, which blocks until one byte is available or
//! the channel is exhausted.

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use crate::common::ExecError;

/// Source of input bytes for the `,` operator.
///
/// One byte per invocation; no buffering contract beyond that. A closed
/// channel is a fatal condition for the run, not a silent zero.
pub trait InputSource {
    /// Blocks for one byte of input.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::InputExhausted`] if the channel has closed.
    fn read_byte(&mut self) -> Result<u8, ExecError>;
}

/// Destination for units emitted by the `.` operator.
///
/// Each unit is already rendered (character or decimal) by the engine; the
/// sink must make it externally visible immediately. Ordering relative to
/// subsequent input requests must be preserved so interleaved output/input
/// protocols behave deterministically.
pub trait OutputSink {
    /// Emits one rendered output unit.
    fn emit(&mut self, unit: &str);
}

/// Console input: pulls single bytes from stdin.
#[derive(Debug, Default)]
pub struct StdInput;

impl InputSource for StdInput {
    fn read_byte(&mut self) -> Result<u8, ExecError> {
        let mut buf = [0u8; 1];
        io::stdin()
            .read_exact(&mut buf)
            .map_err(|_| ExecError::InputExhausted)?;
        Ok(buf[0])
    }
}

/// Console output: writes each unit to stdout and flushes immediately.
///
/// Flushing per unit keeps emission synchronous with the instruction that
/// produced it, which interleaved output/input protocols rely on.
#[derive(Debug, Default)]
pub struct StdOutput;

impl OutputSink for StdOutput {
    fn emit(&mut self, unit: &str) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(unit.as_bytes());
        let _ = stdout.flush();
    }
}

/// Queue-backed input for tests and scripted runs.
#[derive(Debug, Default)]
pub struct QueuedInput {
    bytes: VecDeque<u8>,
}

impl QueuedInput {
    /// Creates a queued input preloaded with the given bytes.
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
        }
    }
}

impl InputSource for QueuedInput {
    fn read_byte(&mut self) -> Result<u8, ExecError> {
        self.bytes.pop_front().ok_or(ExecError::InputExhausted)
    }
}

/// Recording sink that accumulates emitted units in memory.
///
/// Used by tests and by debug mode, where live output would corrupt the
/// step rendering and is instead printed once the run finishes.
#[derive(Debug, Default)]
pub struct RecordedOutput {
    buffer: String,
}

impl RecordedOutput {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything emitted so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl OutputSink for RecordedOutput {
    fn emit(&mut self, unit: &str) {
        self.buffer.push_str(unit);
    }
}
