//! Source text reduction and file loading.
//!
//! Anything that is not one of the nine recognized symbols is commentary:
//! whitespace, prose, punctuation, all of it is dropped without complaint.
//! Structural validation (bracket balance) is *not* done here; the engine
//! reports unbalanced loops dynamically, at the instruction where the
//! imbalance is observable.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::isa::Op;
use crate::sim::Program;

/// Reduces raw source text to a program.
///
/// # Arguments
///
/// * `source` - Raw source text, commentary included.
///
/// # Returns
///
/// The ordered sequence of recognized symbols.
#[must_use]
pub fn parse_source(source: &str) -> Program {
    let ops: Vec<Op> = source.chars().filter_map(Op::decode).collect();
    debug!(
        symbols = ops.len(),
        discarded = source.chars().count() - ops.len(),
        "source reduced"
    );
    Program::new(ops)
}

/// Loads and reduces a program from a source file.
///
/// # Arguments
///
/// * `path` - Path to the source file.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be read.
pub fn load_file(path: &Path) -> io::Result<Program> {
    let source = fs::read_to_string(path)?;
    Ok(parse_source(&source))
}
