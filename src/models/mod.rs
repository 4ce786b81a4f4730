//! CPU scheduling domain models.
//!
//! Provides the input descriptors, per-run outputs and the cross-algorithm
//! metric types shared by the simulators and the comparator.
//!
//! # Lifecycle
//!
//! | Type | Created | Mutated |
//! |------|---------|---------|
//! | `ProcessDescriptor` | once, on registration | never |
//! | `SimulationRun` / `RunResult` | fresh per simulator call | never after return |
//! | `MetricsRecord` | per query | never |

mod metrics;
mod process;
mod run;

pub use metrics::{Algorithm, BestAlgorithms, BestChoice, MetricsRecord, TimeMetrics};
pub use process::ProcessDescriptor;
pub use run::{RunResult, SimulationRun};

/// Simulated time, in abstract integer units.
pub type Time = i64;
