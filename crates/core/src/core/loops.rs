//! Loop stack and skip-mode bookkeeping.
//!
//! This is the control-flow heart of the machine. A naive interpreter skips
//! a false-guarded loop by counting unmatched brackets with a flat counter;
//! that design cannot tell "the bracket that closes *this* skipped loop"
//! from "a bracket belonging to a nested loop" once skip and non-skip paths
//! interleave, and it mis-skips on nested loops and adjacent-bracket
//! patterns such as `[]`. The design here keeps an explicit stack of open
//! `[` positions in *both* execution modes and stamps skip mode with the
//! stack depth at entry; the `]` whose pop returns the stack to that depth
//! is, by construction, the one that closes the skipped loop.
//!
//! Invariant: the stack length equals the static nesting depth at the
//! program counter, for any well-formed program.

use tracing::debug;

use crate::common::ExecError;

/// Control-flow state of the dispatch loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipState {
    /// Instructions execute normally.
    Normal,
    /// A loop body is being bypassed because its guard was 0 on entry.
    ///
    /// `entry_depth` is the loop-stack depth recorded *before* the guarding
    /// `[` was pushed; the `]` whose pop restores this depth ends the skip.
    Skipping {
        /// Loop-stack depth at the moment skip mode was entered.
        entry_depth: usize,
    },
}

/// Outcome of dispatching a `]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseAction {
    /// Fall through to the next instruction (loop exited or skip continues).
    Continue,
    /// Re-enter the loop: set the program counter to the matching `[`.
    JumpBack(usize),
}

/// Stack of open-loop start positions plus the skip state machine.
///
/// Pushed on every `[` encountered, in both normal and skip mode; popped on
/// every `]` that closes that entry.
#[derive(Debug, Clone)]
pub struct LoopStack {
    starts: Vec<usize>,
    state: SkipState,
}

impl Default for LoopStack {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopStack {
    /// Creates an empty loop stack in the normal state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            starts: Vec::new(),
            state: SkipState::Normal,
        }
    }

    /// Returns true while a false-guarded loop body is being bypassed.
    #[must_use]
    pub const fn is_skipping(&self) -> bool {
        matches!(self.state, SkipState::Skipping { .. })
    }

    /// Returns the current skip state.
    #[must_use]
    pub const fn state(&self) -> SkipState {
        self.state
    }

    /// Returns the current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.starts.len()
    }

    /// Returns the open-loop start positions, outermost first.
    #[must_use]
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// Dispatches a `[` at `pc`.
    ///
    /// The position is pushed in both modes so that a nested loop's closing
    /// bracket is never mistaken for the outer one's. When executing
    /// normally with a zero guard cell, the depth *before* the push is
    /// stamped as the skip-entry depth and skip mode begins.
    pub fn open(&mut self, pc: usize, cell_is_zero: bool) {
        if self.state == SkipState::Normal && cell_is_zero {
            let entry_depth = self.starts.len();
            self.state = SkipState::Skipping { entry_depth };
            debug!(pc, entry_depth, "loop guard false, entering skip mode");
        }
        self.starts.push(pc);
    }

    /// Dispatches a `]` at `pc`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::UnbalancedLoop`] if no loop is open.
    pub fn close(&mut self, pc: usize, cell_is_zero: bool) -> Result<CloseAction, ExecError> {
        match self.state {
            SkipState::Skipping { entry_depth } => {
                if self.starts.pop().is_none() {
                    return Err(ExecError::UnbalancedLoop { pc });
                }
                if self.starts.len() == entry_depth {
                    // This bracket closes the loop being skipped; any
                    // deeper pop belongs to a nested loop.
                    self.state = SkipState::Normal;
                    debug!(pc, "skip mode ended");
                }
                Ok(CloseAction::Continue)
            }
            SkipState::Normal => {
                let Some(&target) = self.starts.last() else {
                    return Err(ExecError::UnbalancedLoop { pc });
                };
                if cell_is_zero {
                    let _ = self.starts.pop();
                    Ok(CloseAction::Continue)
                } else {
                    // Guard still true: leave the entry in place and
                    // re-enter the body from the matching `[`.
                    Ok(CloseAction::JumpBack(target))
                }
            }
        }
    }

    /// Checks loop balance at program exhaustion.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::UnbalancedLoop`] if any loop is still open when
    /// the program counter runs off the end of the symbol sequence.
    pub fn finish(&self, pc: usize) -> Result<(), ExecError> {
        if self.starts.is_empty() {
            Ok(())
        } else {
            Err(ExecError::UnbalancedLoop { pc })
        }
    }
}
