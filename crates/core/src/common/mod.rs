//! Common types shared across the simulator.
//!
//! This module re-exports the error definitions used throughout the crate.

/// Fatal run conditions and their reporting.
pub mod error;

pub use error::ExecError;
