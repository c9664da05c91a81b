//! Naive wall-clock benchmark runner.
//!
//! Deliberately unsophisticated: one `Instant` around a single sort call, no
//! warm-up, no outlier trimming, plain mean over the repetitions. The point
//! is to reproduce the classic textbook measurement, not to compete with
//! criterion.

use std::time::{Duration, Instant};

use crate::{patterns, Sort};

/// One measurement record, one per (size, presortedness) combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub size: usize,
    pub presortedness: f64,
    pub avg_time: Duration,
}

#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// First input size, inclusive.
    pub start: usize,
    /// Last input size, inclusive.
    pub stop: usize,
    /// Linear spacing between sizes.
    pub step: usize,
    pub presortedness_levels: Vec<f64>,
    /// Repetitions averaged into each record.
    pub reps: u32,
}

impl BenchConfig {
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        (self.start..=self.stop).step_by(self.step)
    }
}

/// Runs the benchmark for one sort and returns the records in generation
/// order: sizes ascending, levels in the configured order.
pub fn run<S: Sort>(config: &BenchConfig) -> Vec<Measurement> {
    let mut results = Vec::new();

    for size in config.sizes() {
        for &presortedness in &config.presortedness_levels {
            let mut total = Duration::ZERO;

            for _ in 0..config.reps {
                // Fresh input per repetition, sorted via a copy, so no
                // repetition ever sees a previously mutated array.
                let input = patterns::presorted(size, presortedness);
                let mut data = input.clone();

                let start = Instant::now();
                S::sort(&mut data);
                total += start.elapsed();
            }

            results.push(Measurement {
                size,
                presortedness,
                avg_time: total / config.reps,
            });
        }
    }

    results
}
