//! Tape memory model.
//!
//! The tape is the machine's only memory: an ordered sequence of unsigned
//! 8-bit cells, indexed from 0, growable only to the right. It starts as a
//! single zero cell. Moving right past the high-water mark appends a fresh
//! zero cell; moving left of cell 0 is a fatal condition, never a clamp or
//! a wrap. Cell arithmetic is modulo 256.

use crate::common::ExecError;

/// Linear, rightward-growable 8-bit cell memory.
///
/// Owned exclusively by the [`crate::core::Engine`] for one program run.
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<u8>,
    index: usize,
    high_water: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Creates a tape with one zero-valued cell at index 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![0],
            index: 0,
            high_water: 0,
        }
    }

    /// Moves the active index one cell to the right.
    ///
    /// Extends storage with a zero cell when the new index exceeds the
    /// previous high-water mark; never fabricates cells otherwise.
    pub fn move_right(&mut self) {
        self.index += 1;
        if self.index > self.high_water {
            self.cells.push(0);
            self.high_water = self.index;
        }
    }

    /// Moves the active index one cell to the left.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Bounds`] if the index is already 0. The tape is
    /// not mutated in that case.
    pub fn move_left(&mut self) -> Result<(), ExecError> {
        if self.index == 0 {
            return Err(ExecError::Bounds);
        }
        self.index -= 1;
        Ok(())
    }

    /// Increments the current cell, wrapping past 255 to 0.
    pub fn increment(&mut self) {
        self.cells[self.index] = self.cells[self.index].wrapping_add(1);
    }

    /// Decrements the current cell, wrapping past 0 to 255.
    pub fn decrement(&mut self) {
        self.cells[self.index] = self.cells[self.index].wrapping_sub(1);
    }

    /// Returns the current cell's value.
    #[must_use]
    pub fn read(&self) -> u8 {
        self.cells[self.index]
    }

    /// Sets the current cell to the supplied byte. Used by the `,` operator.
    pub fn write(&mut self, value: u8) {
        self.cells[self.index] = value;
    }

    /// Returns the active cell index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the highest index the tape has ever reached.
    #[must_use]
    pub const fn high_water(&self) -> usize {
        self.high_water
    }

    /// Returns all cells allocated so far, in index order.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}
