//! Run statistics collection and reporting.
//!
//! This module tracks metrics for one program run. It provides:
//! 1. **Counters:** Total instructions dispatched and host elapsed time.
//! 2. **Reporting:** The post-run report covering tape state, instruction
//!    totals, and timing samples, printed in a fixed-width banner format.

use std::time::Instant;

use crate::core::Tape;
use crate::timing::TimingSample;

/// Statistics for one program run.
#[derive(Clone, Debug)]
pub struct RunStats {
    start_time: Instant,
    /// Total instructions dispatched, including skipped instructions and
    /// timing toggles.
    pub instructions: u64,
}

impl Default for RunStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions: 0,
        }
    }
}

impl RunStats {
    /// Prints the full post-run report to stdout.
    ///
    /// Covers host time and instruction totals, the final tape state cell
    /// by cell, and every timing sample with its tick count.
    ///
    /// # Arguments
    ///
    /// * `tape` - Final tape state.
    /// * `samples` - Timing samples recorded during the run.
    pub fn print_report(&self, tape: &Tape, samples: &[TimingSample]) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        println!("\n==========================================================");
        println!("BRAINFUCK MACHINE RUN STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("instructions             {}", self.instructions);
        println!("tape_high_water          {}", tape.high_water());
        println!("tape_index               {}", tape.index());
        println!("----------------------------------------------------------");
        println!("TAPE");
        for (i, &cell) in tape.cells().iter().enumerate() {
            println!("  {i}[{cell}]:{}", printable(cell));
        }
        if !samples.is_empty() {
            println!("----------------------------------------------------------");
            println!("TIMINGS");
            for (i, sample) in samples.iter().enumerate() {
                println!("  {i}[{}]:{:?}", sample.ticks, sample.elapsed);
            }
        }
        println!("==========================================================");
    }
}

/// Renders a cell for the tape dump; control bytes print as a placeholder.
fn printable(cell: u8) -> char {
    let c = char::from(cell);
    if c.is_control() { '·' } else { c }
}
