//! Per-process metrics across algorithms.
//!
//! [`MetricsRecord`] holds exactly one [`TimeMetrics`] per algorithm, so a
//! record can never be partially filled. "No data for this process" is an
//! absent record (`Option::None`), never an empty one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Time;
use crate::error::SchedError;

/// Scheduling algorithm tag.
///
/// Ordering follows the fixed comparison order `FCFS < SJF < Priority`,
/// which is also the tie-break order when picking a best algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Lowest priority value first (non-preemptive).
    #[serde(rename = "Priority")]
    Priority,
}

impl Algorithm {
    /// All algorithms in comparison order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Priority];

    /// Display name (`FCFS`, `SJF`, `Priority`).
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "Priority",
        }
    }

    /// Long-form description.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come-First-Served",
            Algorithm::Sjf => "Shortest-Job-First (non-preemptive)",
            Algorithm::Priority => "Priority (non-preemptive, lower value first)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SchedError::UnknownAlgorithm(trimmed.to_string()))
    }
}

/// Waiting and turnaround time of one process under one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeMetrics {
    /// Time spent eligible but not running.
    pub waiting_time: Time,
    /// Time from arrival to completion.
    pub turnaround_time: Time,
}

impl TimeMetrics {
    /// Creates a metrics pair.
    pub fn new(waiting_time: Time, turnaround_time: Time) -> Self {
        Self {
            waiting_time,
            turnaround_time,
        }
    }
}

/// Metrics for one process under every algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// FCFS metrics.
    pub fcfs: TimeMetrics,
    /// SJF metrics.
    pub sjf: TimeMetrics,
    /// Priority metrics.
    pub priority: TimeMetrics,
}

impl MetricsRecord {
    /// Metrics for the given algorithm.
    pub fn get(&self, algorithm: Algorithm) -> TimeMetrics {
        match algorithm {
            Algorithm::Fcfs => self.fcfs,
            Algorithm::Sjf => self.sjf,
            Algorithm::Priority => self.priority,
        }
    }

    /// Iterates `(algorithm, metrics)` in comparison order.
    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, TimeMetrics)> + '_ {
        Algorithm::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    /// Picks the best algorithm for waiting and for turnaround time.
    ///
    /// Each criterion is minimized independently. Ties resolve to the
    /// earliest algorithm in [`Algorithm::ALL`].
    pub fn best(&self) -> BestAlgorithms {
        BestAlgorithms {
            waiting: self.min_by(|m| m.waiting_time),
            turnaround: self.min_by(|m| m.turnaround_time),
        }
    }

    fn min_by(&self, key: impl Fn(&TimeMetrics) -> Time) -> BestChoice {
        let mut best = BestChoice::new(Algorithm::Fcfs, key(&self.fcfs));
        for (algorithm, metrics) in self.iter().skip(1) {
            let value = key(&metrics);
            // Strict comparison keeps the earlier algorithm on ties.
            if value < best.value {
                best = BestChoice::new(algorithm, value);
            }
        }
        best
    }
}

/// The winning algorithm for one criterion and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestChoice {
    /// Winning algorithm.
    pub algorithm: Algorithm,
    /// Its waiting or turnaround time.
    pub value: Time,
}

impl BestChoice {
    /// Creates a choice.
    pub fn new(algorithm: Algorithm, value: Time) -> Self {
        Self { algorithm, value }
    }
}

/// Best algorithms for a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestAlgorithms {
    /// Minimum waiting time.
    pub waiting: BestChoice,
    /// Minimum turnaround time.
    pub turnaround: BestChoice,
}
