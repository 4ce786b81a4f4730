//! Run quality metrics (KPIs).
//!
//! Computes workload-level performance indicators from a completed
//! simulation run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Waiting | Mean of start - arrival |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Max Waiting | Largest single wait |
//! | Idle Time | Gaps between dispatches (from t=0) |
//! | CPU Utilization | (makespan - idle) / makespan, clamped to 0..=1 |
//! | Throughput | Completed processes per time unit |

use serde::{Deserialize, Serialize};

use crate::models::{Algorithm, SimulationRun, Time};

/// Run performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunKpi {
    /// Latest completion time.
    pub makespan: Time,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Largest waiting time of any process.
    pub max_waiting_time: Time,
    /// Time the CPU sat idle before or between dispatches.
    pub idle_time: Time,
    /// Busy fraction of the makespan, clamped to `0.0..=1.0`.
    ///
    /// Permissive runs with non-positive bursts can report more idle time
    /// than makespan; the value then clamps to 0.0.
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl RunKpi {
    /// Computes KPIs from a run.
    pub fn calculate(run: &SimulationRun) -> Self {
        let makespan = run.makespan();
        let mut idle_time: Time = 0;
        let mut clock: Time = 0;
        let mut max_waiting_time: Time = 0;

        for result in &run.results {
            if result.start_time > clock {
                idle_time = idle_time.saturating_add(result.start_time - clock);
            }
            clock = clock.max(result.start_time).max(result.completion_time);
            max_waiting_time = max_waiting_time.max(result.waiting_time);
        }

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                (makespan.saturating_sub(idle_time) as f64 / makespan as f64).clamp(0.0, 1.0),
                run.len() as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            average_waiting_time: run.average_waiting_time(),
            average_turnaround_time: run.average_turnaround_time(),
            max_waiting_time,
            idle_time,
            cpu_utilization,
            throughput,
        }
    }
}

/// KPIs of one algorithm over the current workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSummary {
    /// Algorithm the KPIs belong to.
    pub algorithm: Algorithm,
    /// Run indicators.
    pub kpi: RunKpi,
}

impl AlgorithmSummary {
    /// Summarizes a run.
    pub fn of(run: &SimulationRun) -> Self {
        Self {
            algorithm: run.algorithm,
            kpi: RunKpi::calculate(run),
        }
    }
}
