//! Brainfuck machine simulator library.
//!
//! This crate implements an instrumented interpreter for the Brainfuck
//! esoteric language with the following:
//! 1. **Core:** Tape memory, loop stack, and the instruction dispatch engine.
//! 2. **ISA:** The eight canonical operators plus a non-standard timing toggle.
//! 3. **I/O:** Pluggable byte-level input sources and output sinks.
//! 4. **Simulation:** Program loading, configuration, and statistics collection.
//! 5. **Timing:** Wall-clock sampling between paired timing toggles.

/// Common types and error definitions.
pub mod common;
/// Interpreter configuration (defaults, output and trace options).
pub mod config;
/// Machine core (tape, loop stack, execution engine).
pub mod core;
/// Input source and output sink capabilities.
pub mod io;
/// Instruction set (the nine recognized symbols and their decoding).
pub mod isa;
/// Program loading from source text.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;
/// Wall-clock timing sampler driven by the timing toggle.
pub mod timing;

/// Root configuration type; use `Config::default()` or deserialize.
pub use crate::config::Config;
/// Main engine type; owns the tape and loop stack for one program run.
pub use crate::core::Engine;
/// Immutable symbol sequence produced by the loader.
pub use crate::sim::Program;
