//! Machine core: tape memory, loop stack, and the execution engine.
//!
//! This module contains the state the engine owns for the lifetime of one
//! program run. It coordinates the following:
//! 1. **Tape:** Linear, rightward-growable 8-bit cell memory.
//! 2. **Loop control:** The depth-stamped loop stack and skip state machine.
//! 3. **Dispatch:** The instruction loop that advances the program counter
//!    until the program is exhausted or a fatal condition is hit.

/// Instruction dispatch and control-flow state machine.
pub mod engine;
/// Loop stack and skip-mode bookkeeping.
pub mod loops;
/// Tape memory model.
pub mod tape;

pub use engine::Engine;
pub use loops::{LoopStack, SkipState};
pub use tape::Tape;
