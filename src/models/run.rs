//! Simulation run (solution) model.
//!
//! A run is the complete output of one simulator over one workload: one
//! [`RunResult`] per descriptor, in dispatch order. Each run owns its
//! results; nothing is shared with the input or with other runs.

use serde::{Deserialize, Serialize};

use super::{Algorithm, ProcessDescriptor, Time, TimeMetrics};

/// The outcome for a single process within one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Process id (copied from the descriptor).
    pub process_id: String,
    /// Arrival time of the process.
    pub arrival_time: Time,
    /// Burst time of the process.
    pub burst_time: Time,
    /// Priority of the process.
    pub priority: i32,
    /// Time the process was dispatched.
    pub start_time: Time,
    /// Time the process finished.
    pub completion_time: Time,
    /// `start_time - arrival_time`.
    pub waiting_time: Time,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Time,
}

impl RunResult {
    /// Builds the result of dispatching `process` at `start_time`.
    ///
    /// The process runs to completion: `completion = start + burst`.
    /// Arithmetic saturates at the `Time` bounds, so extreme permissive
    /// inputs clamp instead of overflowing.
    pub fn dispatched(process: &ProcessDescriptor, start_time: Time) -> Self {
        let completion_time = start_time.saturating_add(process.burst_time);
        Self {
            process_id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            start_time,
            completion_time,
            waiting_time: start_time.saturating_sub(process.arrival_time),
            turnaround_time: completion_time.saturating_sub(process.arrival_time),
        }
    }

    /// Waiting and turnaround time as a pair.
    #[inline]
    pub fn metrics(&self) -> TimeMetrics {
        TimeMetrics::new(self.waiting_time, self.turnaround_time)
    }
}

/// A complete simulation run for one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Algorithm that produced this run.
    pub algorithm: Algorithm,
    /// Per-process results in dispatch order.
    pub results: Vec<RunResult>,
}

impl SimulationRun {
    /// Creates an empty run.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            results: Vec::new(),
        }
    }

    /// Creates an empty run with room for `capacity` results.
    pub fn with_capacity(algorithm: Algorithm, capacity: usize) -> Self {
        Self {
            algorithm,
            results: Vec::with_capacity(capacity),
        }
    }

    /// Appends a result.
    pub fn push(&mut self, result: RunResult) {
        self.results.push(result);
    }

    /// Finds the first result for the given process id.
    pub fn result_for(&self, process_id: &str) -> Option<&RunResult> {
        self.results.iter().find(|r| r.process_id == process_id)
    }

    /// Process ids in dispatch order.
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.process_id.as_str()).collect()
    }

    /// Makespan: latest completion time across all results (0 if empty).
    pub fn makespan(&self) -> Time {
        self.results
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Mean waiting time (0.0 if empty).
    pub fn average_waiting_time(&self) -> f64 {
        self.mean_of(|r| r.waiting_time)
    }

    /// Mean turnaround time (0.0 if empty).
    pub fn average_turnaround_time(&self) -> f64 {
        self.mean_of(|r| r.turnaround_time)
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the run has no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    fn mean_of(&self, f: impl Fn(&RunResult) -> Time) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        // Summed as f64: large i64 values would overflow an integer total.
        let total: f64 = self.results.iter().map(|r| f(r) as f64).sum();
        total / self.results.len() as f64
    }
}
