//! Timing Sampler Pairing and Tick Attribution.
//!
//! Verifies the non-standard `` ` `` instruction: toggle pairing, per-sample
//! tick counting (the opening toggle counts, the closing one does not), and
//! the rule that toggles never perturb tape or control flow.

use bfsim_core::common::ExecError;
use bfsim_core::config::Config;
use bfsim_core::core::Engine;
use bfsim_core::io::{QueuedInput, RecordedOutput};
use bfsim_core::sim::loader::parse_source;
use bfsim_core::timing::TimingSampler;
use pretty_assertions::assert_eq;

fn run(source: &str) -> (Engine, Result<(), ExecError>) {
    let mut engine = Engine::new(parse_source(source), Config::default());
    let mut input = QueuedInput::default();
    let mut output = RecordedOutput::new();
    let result = engine.run(&mut input, &mut output);
    (engine, result)
}

// ══════════════════════════════════════════════════════════
// 1. Sampler unit behavior
// ══════════════════════════════════════════════════════════

#[test]
fn toggles_alternate_open_and_close() {
    let mut sampler = TimingSampler::new();
    sampler.toggle();
    assert!(sampler.is_running());
    sampler.toggle();
    assert!(!sampler.is_running());
    sampler.toggle();
    assert!(sampler.is_running());
    assert_eq!(sampler.samples().len(), 2);
}

#[test]
fn running_sample_reports_elapsed_so_far() {
    let mut sampler = TimingSampler::new();
    sampler.toggle();
    let samples = sampler.samples();
    assert_eq!(samples.len(), 1);
    // Never closed; elapsed is whatever has accumulated, ticks whatever
    // was attributed.
    assert_eq!(samples[0].ticks, 0);
}

// ══════════════════════════════════════════════════════════
// 2. Tick attribution through the engine
// ══════════════════════════════════════════════════════════

#[test]
fn opening_toggle_counts_closing_toggle_does_not() {
    let (engine, result) = run("`+++`");
    assert_eq!(result, Ok(()));
    let samples = engine.timing_samples();
    assert_eq!(samples.len(), 1);
    // Opening toggle + three increments; the closing toggle stops the
    // sample before the post-dispatch tick.
    assert_eq!(samples[0].ticks, 4);
}

#[test]
fn skipped_instructions_are_ticked() {
    let (engine, result) = run("`[++++]`");
    assert_eq!(result, Ok(()));
    let samples = engine.timing_samples();
    // toggle, `[`, four skipped `+`, `]` = 7 dispatches while open.
    assert_eq!(samples[0].ticks, 7);
}

#[test]
fn instructions_outside_samples_are_not_ticked() {
    let (engine, result) = run("++`+`++");
    assert_eq!(result, Ok(()));
    let samples = engine.timing_samples();
    assert_eq!(samples.len(), 1);
    // Only the opening toggle and the single enclosed increment.
    assert_eq!(samples[0].ticks, 2);
    assert_eq!(engine.stats.instructions, 7);
}

#[test]
fn multiple_samples_accumulate_independently() {
    let (engine, result) = run("`+`+`++`");
    assert_eq!(result, Ok(()));
    let samples = engine.timing_samples();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].ticks, 2);
    assert_eq!(samples[1].ticks, 3);
}

// ══════════════════════════════════════════════════════════
// 3. Toggles are transparent to machine semantics
// ══════════════════════════════════════════════════════════

#[test]
fn toggles_do_not_touch_tape_or_brackets() {
    let (engine, result) = run("+`[-`]`");
    assert_eq!(result, Ok(()));
    assert_eq!(engine.tape().cells(), &[0]);
    assert_eq!(engine.loops().depth(), 0);
    // Three toggles: two samples, the second still running at exit.
    assert_eq!(engine.timing_samples().len(), 2);
}
