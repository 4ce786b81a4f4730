//! First-Come-First-Served simulator.
//!
//! # Algorithm
//!
//! 1. Walk the arrival-ordered processes once.
//! 2. If the CPU is idle before the next arrival, jump the clock to it.
//! 3. Run the process to completion and advance the clock.
//!
//! # Complexity
//! O(n) after the O(n log n) arrival sort.

use crate::models::{Algorithm, ProcessDescriptor, RunResult, SimulationRun, Time};

/// Non-preemptive FCFS simulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates the simulator.
    pub fn new() -> Self {
        Self
    }

    /// Simulates FCFS over processes already sorted by arrival time.
    pub fn simulate(&self, arrival_ordered: &[&ProcessDescriptor]) -> SimulationRun {
        let mut run = SimulationRun::with_capacity(Algorithm::Fcfs, arrival_ordered.len());
        let mut current_time: Time = 0;

        for process in arrival_ordered {
            if current_time < process.arrival_time {
                tracing::trace!(
                    from = current_time,
                    to = process.arrival_time,
                    "fcfs idle until arrival"
                );
                current_time = process.arrival_time;
            }

            let result = RunResult::dispatched(process, current_time);
            tracing::debug!(
                algorithm = %Algorithm::Fcfs,
                process = %result.process_id,
                start = result.start_time,
                completion = result.completion_time,
                "dispatched"
            );
            current_time = result.completion_time;
            run.push(result);
        }

        run
    }
}
