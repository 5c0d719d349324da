//! Instruction dispatch and control-flow state machine.
//!
//! The engine owns the tape and the loop stack for the lifetime of one
//! program run. It coordinates the following:
//! 1. **Dispatch:** Takes the symbol at the program counter, dispatches it,
//!    advances the counter by one, until the program is exhausted.
//! 2. **Skip mode:** While a false-guarded loop body is bypassed, only `[`
//!    and `]` have any effect; everything else is a no-op.
//! 3. **Instrumentation:** The timing toggle is handled before the skip
//!    check and returns immediately, so it can never desynchronize bracket
//!    matching; every dispatched instruction is counted.
//!
//! Execution is strictly single-threaded and sequential. The only
//! suspension point is the input operator, which blocks awaiting one byte.

use tracing::trace;

use crate::common::ExecError;
use crate::config::Config;
use crate::core::loops::{CloseAction, LoopStack};
use crate::core::tape::Tape;
use crate::io::{InputSource, OutputSink};
use crate::isa::Op;
use crate::sim::Program;
use crate::stats::RunStats;
use crate::timing::{TimingSample, TimingSampler};

/// The execution engine for one program run.
///
/// Not reentrant and not shared: one program, one tape, one loop stack.
/// Construct a fresh engine per run.
#[derive(Debug)]
pub struct Engine {
    program: Program,
    config: Config,
    /// Index into the symbol sequence.
    pc: usize,
    tape: Tape,
    loops: LoopStack,
    sampler: TimingSampler,
    /// Run counters.
    pub stats: RunStats,
    /// Append-only record of everything emitted by `.`.
    output_record: String,
    /// Tape snapshot after every instruction, when history is enabled.
    tape_history: Vec<Vec<u8>>,
}

impl Engine {
    /// Creates an engine for the given program.
    ///
    /// # Arguments
    ///
    /// * `program` - The immutable symbol sequence to execute.
    /// * `config` - Output rendering and trace options.
    #[must_use]
    pub fn new(program: Program, config: Config) -> Self {
        Self {
            program,
            config,
            pc: 0,
            tape: Tape::new(),
            loops: LoopStack::new(),
            sampler: TimingSampler::new(),
            stats: RunStats::default(),
            output_record: String::new(),
            tape_history: Vec::new(),
        }
    }

    /// Returns true once the program counter has passed the last symbol.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Runs the program to completion.
    ///
    /// # Arguments
    ///
    /// * `input` - Source for `,` bytes.
    /// * `output` - Sink for `.` emissions.
    ///
    /// # Errors
    ///
    /// Returns the fatal condition that halted the run: a left-bound
    /// violation, an unbalanced loop (including loops still open at program
    /// end), or input exhaustion. The engine does not resume after an error.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        output: &mut dyn OutputSink,
    ) -> Result<(), ExecError> {
        while !self.is_finished() {
            self.step(input, output)?;
        }
        self.loops.finish(self.pc)
    }

    /// Dispatches the instruction at the program counter and advances it.
    ///
    /// Does nothing if the program is already finished. Exposed separately
    /// from [`Engine::run`] so the debug renderer can interleave state dumps
    /// between instructions.
    ///
    /// # Errors
    ///
    /// Returns the fatal condition that halted the run; see [`Engine::run`].
    pub fn step(
        &mut self,
        input: &mut dyn InputSource,
        output: &mut dyn OutputSink,
    ) -> Result<(), ExecError> {
        let Some(op) = self.program.get(self.pc) else {
            return Ok(());
        };
        trace!(pc = self.pc, op = %op, skipping = self.loops.is_skipping(), "dispatch");

        match op {
            // The toggle is non-standard, so it gets priority: handled
            // before the skip check and done immediately.
            Op::TimingToggle => self.sampler.toggle(),
            Op::LoopOpen => self.loops.open(self.pc, self.tape.read() == 0),
            Op::LoopClose => match self.loops.close(self.pc, self.tape.read() == 0)? {
                // Dispatch advances past the target below, so execution
                // resumes at the instruction after the matching `[`.
                CloseAction::JumpBack(target) => self.pc = target,
                CloseAction::Continue => {}
            },
            _ if self.loops.is_skipping() => {}
            Op::MoveRight => self.tape.move_right(),
            Op::MoveLeft => self.tape.move_left()?,
            Op::Increment => self.tape.increment(),
            Op::Decrement => self.tape.decrement(),
            Op::Output => {
                let unit = self.render(self.tape.read());
                output.emit(&unit);
                self.output_record.push_str(&unit);
            }
            Op::Input => {
                let byte = input.read_byte()?;
                self.tape.write(byte);
            }
        }

        self.stats.instructions += 1;
        self.sampler.tick();
        if self.config.trace.record_tape_history {
            self.tape_history.push(self.tape.cells().to_vec());
        }
        self.pc += 1;
        Ok(())
    }

    /// Renders a cell for emission per the output configuration.
    fn render(&self, cell: u8) -> String {
        if self.config.output.numeric {
            cell.to_string()
        } else {
            char::from(cell).to_string()
        }
    }

    /// Returns the current program counter.
    #[must_use]
    pub const fn pc(&self) -> usize {
        self.pc
    }

    /// Returns the program being executed.
    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Returns the tape state.
    #[must_use]
    pub const fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the loop stack and skip state.
    #[must_use]
    pub const fn loops(&self) -> &LoopStack {
        &self.loops
    }

    /// Returns everything emitted by `.` so far.
    #[must_use]
    pub fn output_record(&self) -> &str {
        &self.output_record
    }

    /// Returns the timing samples recorded so far.
    #[must_use]
    pub fn timing_samples(&self) -> Vec<TimingSample> {
        self.sampler.samples()
    }

    /// Returns the per-instruction tape snapshots, empty unless
    /// `record_tape_history` was enabled.
    #[must_use]
    pub fn tape_history(&self) -> &[Vec<u8>] {
        &self.tape_history
    }
}
