//! Cross-algorithm metrics comparison.
//!
//! Every query re-runs all three simulators over the current workload;
//! nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::error::{SchedError, SchedResult};
use crate::models::{BestAlgorithms, MetricsRecord, SimulationRun};
use crate::registry::Workload;
use crate::scheduler::{AlgorithmSummary, Simulator};

/// One row of a per-process comparison (what a chart renders).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessComparison {
    /// Process id.
    pub process_id: String,
    /// Metrics under each algorithm.
    pub metrics: MetricsRecord,
    /// Best algorithms for this process.
    pub best: BestAlgorithms,
}

/// Compares FCFS, SJF and Priority for processes of a workload.
///
/// # Example
///
/// ```
/// use u_cpusched::compare::Comparator;
/// use u_cpusched::models::Algorithm;
/// use u_cpusched::registry::Workload;
///
/// let mut workload = Workload::new();
/// workload.add_process("P1", 0, 10, 3).unwrap();
/// workload.add_process("P2", 1, 2, 2).unwrap();
/// workload.add_process("P3", 2, 1, 1).unwrap();
///
/// let best = Comparator::new(&workload).find_best("P3").unwrap();
/// assert_eq!(best.waiting.algorithm, Algorithm::Sjf);
/// assert_eq!(best.waiting.value, 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Comparator<'a> {
    workload: &'a Workload,
    simulator: Simulator,
}

impl<'a> Comparator<'a> {
    /// Creates a comparator with the default simulator.
    pub fn new(workload: &'a Workload) -> Self {
        Self {
            workload,
            simulator: Simulator::new(),
        }
    }

    /// Uses the given simulator configuration.
    pub fn with_simulator(mut self, simulator: Simulator) -> Self {
        self.simulator = simulator;
        self
    }

    /// Metrics for `process_id` under every algorithm.
    ///
    /// Returns `None` when the id is not registered. With duplicate ids the
    /// first match in each run is used.
    pub fn metrics(&self, process_id: &str) -> Option<MetricsRecord> {
        tracing::debug!(process = process_id, "computing metrics");
        let runs = self.simulator.run_all(self.workload);
        metrics_from_runs(&runs, process_id)
    }

    /// Best algorithm by waiting time and by turnaround time.
    ///
    /// Ties resolve in the order FCFS, SJF, Priority.
    ///
    /// # Errors
    /// [`SchedError::NotFound`] when there are no metrics for `process_id`.
    pub fn find_best(&self, process_id: &str) -> SchedResult<BestAlgorithms> {
        let record = self
            .metrics(process_id)
            .ok_or_else(|| SchedError::NotFound(process_id.to_string()))?;
        Ok(record.best())
    }

    /// Comparison rows for every registered process, in registry order.
    ///
    /// Duplicate ids produce one row each, all resolving to the first match.
    pub fn compare_all(&self) -> Vec<ProcessComparison> {
        let runs = self.simulator.run_all(self.workload);
        self.workload
            .iter()
            .filter_map(|process| {
                let metrics = metrics_from_runs(&runs, &process.id)?;
                Some(ProcessComparison {
                    process_id: process.id.clone(),
                    best: metrics.best(),
                    metrics,
                })
            })
            .collect()
    }

    /// Workload-level KPIs per algorithm, in comparison order.
    pub fn summaries(&self) -> Vec<AlgorithmSummary> {
        self.simulator
            .run_all(self.workload)
            .iter()
            .map(AlgorithmSummary::of)
            .collect()
    }
}

/// Extracts a metrics record from runs given in comparison order.
///
/// Returns `None` unless every run contains `process_id`.
pub fn metrics_from_runs(runs: &[SimulationRun; 3], process_id: &str) -> Option<MetricsRecord> {
    let [fcfs, sjf, priority] = runs;
    Some(MetricsRecord {
        fcfs: fcfs.result_for(process_id)?.metrics(),
        sjf: sjf.result_for(process_id)?.metrics(),
        priority: priority.result_for(process_id)?.metrics(),
    })
}
