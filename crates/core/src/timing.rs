//! Wall-clock timing sampler driven by the timing toggle.
//!
//! The `` ` `` instruction is not part of the canonical language. Each
//! toggle either opens a new sample (starting a timer with a zeroed tick
//! counter) or closes the most recently opened still-running one. While a
//! sample is open, every dispatched instruction ticks it exactly once —
//! including the opening toggle itself and instructions dispatched in skip
//! mode. The closing toggle clears the running flag before the
//! post-dispatch tick, so it is not counted. Toggles never affect the tape,
//! the program counter, or bracket matching.

use std::time::{Duration, Instant};

/// One completed or still-running timing interval.
#[derive(Clone, Copy, Debug)]
pub struct TimingSample {
    /// Wall-clock time between the opening and closing toggles. For a
    /// sample still running at program end, time elapsed so far.
    pub elapsed: Duration,
    /// Number of instructions dispatched while the sample was open.
    pub ticks: u64,
}

#[derive(Debug, Clone)]
struct Sample {
    started: Instant,
    stopped: Option<Duration>,
    ticks: u64,
}

/// Ordered collection of timing samples.
#[derive(Debug, Clone, Default)]
pub struct TimingSampler {
    samples: Vec<Sample>,
}

impl TimingSampler {
    /// Creates a sampler with no samples.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Processes one timing-toggle instruction.
    ///
    /// Opens a new sample if none is running, otherwise stops the most
    /// recently opened one.
    pub fn toggle(&mut self) {
        match self.samples.last_mut() {
            Some(sample) if sample.stopped.is_none() => {
                sample.stopped = Some(sample.started.elapsed());
            }
            _ => self.samples.push(Sample {
                started: Instant::now(),
                stopped: None,
                ticks: 0,
            }),
        }
    }

    /// Returns true while a sample is open.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.samples
            .last()
            .is_some_and(|sample| sample.stopped.is_none())
    }

    /// Attributes one dispatched instruction to the open sample, if any.
    pub fn tick(&mut self) {
        if let Some(sample) = self.samples.last_mut() {
            if sample.stopped.is_none() {
                sample.ticks += 1;
            }
        }
    }

    /// Returns all samples recorded so far, in toggle order.
    #[must_use]
    pub fn samples(&self) -> Vec<TimingSample> {
        self.samples
            .iter()
            .map(|sample| TimingSample {
                elapsed: sample
                    .stopped
                    .unwrap_or_else(|| sample.started.elapsed()),
                ticks: sample.ticks,
            })
            .collect()
    }
}
