//! Engine facade.
//!
//! [`SchedulingEngine`] bundles a workload with its configuration and
//! exposes the whole programmatic surface. A front end (command loop,
//! chart renderer) holds one engine value and passes it to each handler;
//! there is no global instance.

use crate::compare::{Comparator, ProcessComparison};
use crate::config::EngineConfig;
use crate::error::SchedResult;
use crate::models::{
    Algorithm, BestAlgorithms, MetricsRecord, ProcessDescriptor, SimulationRun, Time,
};
use crate::registry::Workload;
use crate::scheduler::{AlgorithmSummary, Simulator};

/// Workload plus configuration, with every query the comparator offers.
///
/// # Example
///
/// ```
/// use u_cpusched::engine::SchedulingEngine;
/// use u_cpusched::models::Algorithm;
///
/// let mut engine = SchedulingEngine::new();
/// engine.add_process("P1", 0, 10, 3).unwrap();
/// engine.add_process("P2", 1, 2, 2).unwrap();
/// engine.add_process("P3", 2, 1, 1).unwrap();
///
/// let metrics = engine.metrics("P3").unwrap();
/// assert_eq!(metrics.get(Algorithm::Fcfs).waiting_time, 10);
///
/// let best = engine.find_best("P3").unwrap();
/// assert_eq!(best.turnaround.value, 9);
/// assert!(engine.find_best("missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchedulingEngine {
    workload: Workload,
    config: EngineConfig,
}

impl SchedulingEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            workload: Workload::with_validation(config.validation),
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registered workload.
    pub fn workload(&self) -> &Workload {
        &self.workload
    }

    /// Registers a process.
    ///
    /// # Errors
    /// `InvalidProcess` in strict validation mode.
    pub fn add_process(
        &mut self,
        id: impl Into<String>,
        arrival_time: Time,
        burst_time: Time,
        priority: i32,
    ) -> SchedResult<()> {
        self.workload.add_process(id, arrival_time, burst_time, priority)
    }

    /// Registers a descriptor.
    pub fn add(&mut self, process: ProcessDescriptor) -> SchedResult<()> {
        self.workload.add(process)
    }

    /// Simulates one algorithm over the current workload.
    pub fn run(&self, algorithm: Algorithm) -> SimulationRun {
        self.simulator().run(algorithm, &self.workload)
    }

    /// Metrics for a process under every algorithm (`None` if unknown).
    pub fn metrics(&self, process_id: &str) -> Option<MetricsRecord> {
        self.comparator().metrics(process_id)
    }

    /// Best algorithms for a process.
    ///
    /// # Errors
    /// `NotFound` when the process is not registered.
    pub fn find_best(&self, process_id: &str) -> SchedResult<BestAlgorithms> {
        self.comparator().find_best(process_id)
    }

    /// Comparison rows for every registered process.
    pub fn compare_all(&self) -> Vec<ProcessComparison> {
        self.comparator().compare_all()
    }

    /// Per-algorithm KPIs for the workload.
    pub fn summaries(&self) -> Vec<AlgorithmSummary> {
        self.comparator().summaries()
    }

    fn simulator(&self) -> Simulator {
        Simulator::new().with_idle_advance(self.config.idle_advance)
    }

    fn comparator(&self) -> Comparator<'_> {
        Comparator::new(&self.workload).with_simulator(self.simulator())
    }
}
