//! Instruction set definition and decoding.
//!
//! The machine recognizes nine symbols: the eight canonical Brainfuck
//! operators plus a non-standard timing toggle (`` ` ``) that starts or
//! stops a wall-clock sample without touching tape or control flow.
//! Everything else in a source text is commentary and is discarded by the
//! loader.

use std::fmt;

/// The timing toggle symbol. Not part of the canonical language.
pub const TIMING_TOGGLE: char = '`';

/// One machine operation.
///
/// Decoded from the nine recognized source symbols. The discriminants carry
/// no operands; loop targets are resolved dynamically by the engine's loop
/// stack rather than pre-computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// `>` — move the tape index one cell to the right, growing the tape.
    MoveRight,
    /// `<` — move the tape index one cell to the left; fatal at cell 0.
    MoveLeft,
    /// `+` — increment the current cell, wrapping modulo 256.
    Increment,
    /// `-` — decrement the current cell, wrapping modulo 256.
    Decrement,
    /// `.` — emit the current cell to the output sink.
    Output,
    /// `,` — block for one byte of input and store it in the current cell.
    Input,
    /// `[` — open a loop; skip its body if the current cell is 0.
    LoopOpen,
    /// `]` — close a loop; jump back if the current cell is non-zero.
    LoopClose,
    /// `` ` `` — start or stop a timing sample. No tape or control effect.
    TimingToggle,
}

impl Op {
    /// Decodes a source character into an operation.
    ///
    /// # Arguments
    ///
    /// * `symbol` - A character from the source text.
    ///
    /// # Returns
    ///
    /// The decoded operation, or `None` if the character is commentary.
    #[must_use]
    pub const fn decode(symbol: char) -> Option<Self> {
        match symbol {
            '>' => Some(Self::MoveRight),
            '<' => Some(Self::MoveLeft),
            '+' => Some(Self::Increment),
            '-' => Some(Self::Decrement),
            '.' => Some(Self::Output),
            ',' => Some(Self::Input),
            '[' => Some(Self::LoopOpen),
            ']' => Some(Self::LoopClose),
            TIMING_TOGGLE => Some(Self::TimingToggle),
            _ => None,
        }
    }

    /// Returns the source symbol for this operation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::MoveRight => '>',
            Self::MoveLeft => '<',
            Self::Increment => '+',
            Self::Decrement => '-',
            Self::Output => '.',
            Self::Input => ',',
            Self::LoopOpen => '[',
            Self::LoopClose => ']',
            Self::TimingToggle => TIMING_TOGGLE,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
