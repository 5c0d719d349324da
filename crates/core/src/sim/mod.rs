//! Program loading and the immutable symbol sequence.
//!
//! The loader runs once per program: it reduces raw source text to the
//! ordered sequence of recognized symbols, discarding everything else as
//! commentary. The result is consumed read-only by the execution engine.

/// Source text reduction and file loading.
pub mod loader;

use crate::isa::Op;

/// An immutable, fully decoded program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    ops: Vec<Op>,
}

impl Program {
    /// Wraps an already-decoded operation sequence.
    #[must_use]
    pub const fn new(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    /// Returns the operation at `pc`, if in range.
    #[must_use]
    pub fn get(&self, pc: usize) -> Option<Op> {
        self.ops.get(pc).copied()
    }

    /// Returns the full operation sequence.
    #[must_use]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Returns the number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if the program contains no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
