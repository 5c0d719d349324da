//! Engine Dispatch, I/O Ordering, and Fatal Conditions.
//!
//! Verifies instruction semantics end to end through the public API:
//! output rendering, input consumption order, halting behavior, and the
//! final-state snapshot.

use bfsim_core::common::ExecError;
use bfsim_core::config::Config;
use bfsim_core::core::Engine;
use bfsim_core::io::{QueuedInput, RecordedOutput};
use bfsim_core::sim::loader::parse_source;
use pretty_assertions::assert_eq;

fn run_with_input(source: &str, input: &[u8]) -> (Engine, String, Result<(), ExecError>) {
    let mut engine = Engine::new(parse_source(source), Config::default());
    let mut input = QueuedInput::new(input);
    let mut output = RecordedOutput::new();
    let result = engine.run(&mut input, &mut output);
    let emitted = output.as_str().to_owned();
    (engine, emitted, result)
}

// ══════════════════════════════════════════════════════════
// 1. Output ordering
// ══════════════════════════════════════════════════════════

#[test]
fn echo_program_preserves_input_order() {
    let (_, emitted, result) = run_with_input(",.,.", b"ok");
    assert_eq!(result, Ok(()));
    assert_eq!(emitted, "ok");
}

#[test]
fn output_record_matches_sink() {
    let (engine, emitted, result) = run_with_input(",.,.,.", b"abc");
    assert_eq!(result, Ok(()));
    assert_eq!(engine.output_record(), emitted);
}

#[test]
fn hello_style_arithmetic_emits_characters() {
    // 72 = 8 * 9, the classic 'H'.
    let (_, emitted, result) = run_with_input("++++++++[->+++++++++<]>.", &[]);
    assert_eq!(result, Ok(()));
    assert_eq!(emitted, "H");
}

// ══════════════════════════════════════════════════════════
// 2. Numeric rendering
// ══════════════════════════════════════════════════════════

#[test]
fn numeric_mode_emits_decimal_codes() {
    let mut config = Config::default();
    config.output.numeric = true;
    let mut engine = Engine::new(parse_source("++++++++++."), config);
    let mut input = QueuedInput::default();
    let mut output = RecordedOutput::new();
    assert_eq!(engine.run(&mut input, &mut output), Ok(()));
    assert_eq!(output.as_str(), "10");
}

// ══════════════════════════════════════════════════════════
// 3. Fatal conditions halt immediately
// ══════════════════════════════════════════════════════════

#[test]
fn bounds_violation_halts_without_further_mutation() {
    let (engine, emitted, result) = run_with_input("+<+.", &[]);
    assert_eq!(result, Err(ExecError::Bounds));
    assert_eq!(engine.tape().cells(), &[1]);
    assert_eq!(emitted, "");
}

#[test]
fn input_exhaustion_halts_the_run() {
    let (engine, _, result) = run_with_input(",+,", b"a");
    assert_eq!(result, Err(ExecError::InputExhausted));
    // The first byte landed and was incremented before the failure.
    assert_eq!(engine.tape().read(), b'a' + 1);
}

// ══════════════════════════════════════════════════════════
// 4. Final-state snapshot
// ══════════════════════════════════════════════════════════

#[test]
fn snapshot_reports_high_water_and_counts() {
    let (engine, _, result) = run_with_input(">>><<<", &[]);
    assert_eq!(result, Ok(()));
    assert_eq!(engine.tape().high_water(), 3);
    assert_eq!(engine.tape().index(), 0);
    assert_eq!(engine.stats.instructions, 6);
    assert!(engine.is_finished());
}

#[test]
fn empty_program_finishes_cleanly() {
    let (engine, emitted, result) = run_with_input("just a comment", &[]);
    assert_eq!(result, Ok(()));
    assert_eq!(emitted, "");
    assert_eq!(engine.stats.instructions, 0);
}
