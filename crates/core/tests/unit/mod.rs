//! Unit test modules, mirroring the `src/` layout.

/// Engine dispatch, I/O ordering, and fatal conditions.
pub mod engine_semantics;
/// Loop nesting, skip mode, and bracket pathologies.
pub mod loop_control;
/// Timing sampler pairing and tick attribution.
pub mod timing_sampler;
