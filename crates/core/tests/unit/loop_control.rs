//! Loop Nesting, Skip Mode, and Bracket Pathologies.
//!
//! Exercises the depth-stamped skip design against the patterns that break
//! flat-counter interpreters: nested loops under a false guard, adjacent
//! brackets, and unbalanced programs.

use bfsim_core::common::ExecError;
use bfsim_core::config::Config;
use bfsim_core::core::Engine;
use bfsim_core::io::{QueuedInput, RecordedOutput};
use bfsim_core::sim::loader::parse_source;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn run(source: &str) -> (Engine, Result<(), ExecError>) {
    let mut engine = Engine::new(parse_source(source), Config::default());
    let mut input = QueuedInput::default();
    let mut output = RecordedOutput::new();
    let result = engine.run(&mut input, &mut output);
    (engine, result)
}

// ══════════════════════════════════════════════════════════
// 1. False-guarded loops skip their whole body
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::flat("[+]")]
#[case::nested("[[+]+]")]
#[case::doubly_nested("[[[-]+]>]")]
#[case::adjacent_empty("[][]")]
#[case::empty_inside("[[]]")]
fn zero_guard_runs_body_zero_times(#[case] source: &str) {
    let (engine, result) = run(source);
    assert_eq!(result, Ok(()));
    assert_eq!(engine.tape().cells(), &[0]);
    assert_eq!(engine.tape().index(), 0);
    assert_eq!(engine.loops().depth(), 0);
}

// ══════════════════════════════════════════════════════════
// 2. Live loops iterate until the guard drains
// ══════════════════════════════════════════════════════════

#[test]
fn transfer_loop_moves_five_across() {
    let (engine, result) = run("+++++[->+<]");
    assert_eq!(result, Ok(()));
    assert_eq!(engine.tape().cells(), &[0, 5]);
}

#[test]
fn nested_live_loop_multiplies() {
    // 3 * 4 into cell 2: the inner loop runs inside each outer iteration.
    let (engine, result) = run("+++[->++++[->+<]<]");
    assert_eq!(result, Ok(()));
    assert_eq!(engine.tape().cells(), &[0, 0, 12]);
}

#[test]
fn drain_then_reuse_cell() {
    let (engine, result) = run("+++[-]+");
    assert_eq!(result, Ok(()));
    assert_eq!(engine.tape().cells(), &[1]);
    assert_eq!(engine.loops().depth(), 0);
}

#[test]
fn skipped_inner_loop_inside_live_outer_loop() {
    // The outer loop runs twice; the inner `[<]` guard is always 0 at
    // entry (the `>` lands on a fresh cell), so it must be skipped cleanly
    // each iteration without disturbing the outer bracket matching.
    let (engine, result) = run("++[->[<]<]");
    assert_eq!(result, Ok(()));
    assert_eq!(engine.loops().depth(), 0);
    assert_eq!(engine.tape().cells(), &[0, 0]);
}

// ══════════════════════════════════════════════════════════
// 3. Malformed programs
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::bare_close("]", 0)]
#[case::close_after_exit("+[-]]", 4)]
#[case::nested_extra_close("[[]]]", 4)]
fn stray_close_bracket_reports_position(#[case] source: &str, #[case] pc: usize) {
    let (_, result) = run(source);
    assert_eq!(result, Err(ExecError::UnbalancedLoop { pc }));
}

#[rstest]
#[case::bare_open("[", 1)]
#[case::live_open("+[", 2)]
#[case::nested_open("+[+[-]", 6)]
fn open_loop_at_program_end_reports_position(#[case] source: &str, #[case] pc: usize) {
    let (_, result) = run(source);
    assert_eq!(result, Err(ExecError::UnbalancedLoop { pc }));
}
