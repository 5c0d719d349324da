//! Fatal run condition definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Error Representation:** All conditions that abort a program run.
//! 2. **Error Handling:** Integration with standard Rust error traits for
//!    system-level reporting via `thiserror`.
//!
//! Every variant is unrecoverable for the current run: the engine halts
//! immediately and surfaces the condition to the caller. The engine never
//! clamps the tape index, never treats an unmatched `]` as a no-op, and
//! never retries an instruction.

use thiserror::Error;

/// Conditions that terminate a program run.
///
/// These cover the tape's hard left boundary, malformed loop structure,
/// and exhaustion of the external input channel.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// Attempt to move left of tape index 0.
    ///
    /// The tape is semi-infinite to the right and hard-bounded at 0 to the
    /// left; a `<` at index 0 is a fatal condition, not a silent wrap.
    #[error("attempt to move left of tape cell 0")]
    Bounds,

    /// A `]` with no corresponding open loop, or program end with open loops.
    ///
    /// The associated value is the program-counter position where the
    /// imbalance was detected.
    #[error("unbalanced loop bracket at instruction {pc}")]
    UnbalancedLoop {
        /// Position in the symbol sequence where the imbalance was detected.
        pc: usize,
    },

    /// The input channel closed while `,` was awaiting a byte.
    #[error("input exhausted while awaiting a byte")]
    InputExhausted,
}
