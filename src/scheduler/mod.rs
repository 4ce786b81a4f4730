//! Non-preemptive CPU scheduling simulators and run KPIs.
//!
//! # Algorithms
//!
//! | Algorithm | Simulator | Selection |
//! |-----------|-----------|-----------|
//! | FCFS | [`FcfsScheduler`] | arrival order |
//! | SJF | [`SelectiveScheduler`] + `ShortestBurst` | smallest burst among ready |
//! | Priority | [`SelectiveScheduler`] + `LowestPriority` | smallest priority value among ready |
//!
//! Every simulator reads the workload through its stable arrival-order
//! view, starts the clock at 0, and returns a freshly owned
//! [`SimulationRun`]. The input is never mutated.

mod fcfs;
mod kpi;
mod selective;

pub use fcfs::FcfsScheduler;
pub use kpi::{AlgorithmSummary, RunKpi};
pub use selective::SelectiveScheduler;

use crate::config::IdleAdvance;
use crate::dispatching::rules::{LowestPriority, ShortestBurst};
use crate::models::{Algorithm, SimulationRun};
use crate::registry::Workload;

/// Runs any of the three algorithms over a workload.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Algorithm;
/// use u_cpusched::registry::Workload;
/// use u_cpusched::scheduler::Simulator;
///
/// let mut workload = Workload::new();
/// workload.add_process("P1", 0, 10, 3).unwrap();
/// workload.add_process("P2", 1, 2, 2).unwrap();
///
/// let run = Simulator::new().run(Algorithm::Fcfs, &workload);
/// assert_eq!(run.result_for("P2").unwrap().waiting_time, 9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    idle_advance: IdleAdvance,
}

impl Simulator {
    /// Creates a simulator with the default idle policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the idle clock policy used by SJF and Priority.
    pub fn with_idle_advance(mut self, idle_advance: IdleAdvance) -> Self {
        self.idle_advance = idle_advance;
        self
    }

    /// Simulates one algorithm over the workload.
    pub fn run(&self, algorithm: Algorithm, workload: &Workload) -> SimulationRun {
        let ordered = workload.arrival_order();
        match algorithm {
            Algorithm::Fcfs => FcfsScheduler::new().simulate(&ordered),
            Algorithm::Sjf => SelectiveScheduler::new(Algorithm::Sjf, ShortestBurst)
                .with_idle_advance(self.idle_advance)
                .simulate(&ordered),
            Algorithm::Priority => SelectiveScheduler::new(Algorithm::Priority, LowestPriority)
                .with_idle_advance(self.idle_advance)
                .simulate(&ordered),
        }
    }

    /// Simulates all three algorithms, each independently, in comparison order.
    pub fn run_all(&self, workload: &Workload) -> [SimulationRun; 3] {
        Algorithm::ALL.map(|algorithm| self.run(algorithm, workload))
    }
}
