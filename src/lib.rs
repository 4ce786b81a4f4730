//! Non-preemptive CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates First-Come-First-Served, Shortest-Job-First and Priority
//! scheduling over a fixed workload and compares, per process, which
//! policy yields the lowest waiting and turnaround time. Nothing is
//! executed for real: the crate computes what the times *would be*.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessDescriptor`, `RunResult`,
//!   `SimulationRun`, `Algorithm`, `MetricsRecord`, `BestAlgorithms`
//! - **`registry`**: Insertion-ordered workload with optional validation
//! - **`dispatching`**: Selection rules (SJF, Priority, FIFO) and the ready queue
//! - **`scheduler`**: FCFS and selective simulators, run KPIs
//! - **`compare`**: Per-process metrics and best-algorithm selection
//! - **`engine`**: Workload + configuration facade
//! - **`config`**, **`error`**, **`validation`**, **`generator`**: Ambient support
//!
//! # Quick Start
//!
//! ```
//! use u_cpusched::engine::SchedulingEngine;
//! use u_cpusched::models::Algorithm;
//!
//! let mut engine = SchedulingEngine::new();
//! engine.add_process("P1", 0, 10, 3).unwrap();
//! engine.add_process("P2", 1, 2, 2).unwrap();
//! engine.add_process("P3", 2, 1, 1).unwrap();
//!
//! for row in engine.compare_all() {
//!     for (algorithm, m) in row.metrics.iter() {
//!         assert!(m.turnaround_time >= m.waiting_time, "{algorithm}");
//!     }
//! }
//! ```
//!
//! # Logging
//!
//! Dispatch decisions and registry events are emitted through `tracing`;
//! install any subscriber to see them.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod compare;
pub mod config;
pub mod dispatching;
pub mod engine;
pub mod error;
pub mod generator;
pub mod models;
pub mod registry;
pub mod scheduler;
pub mod validation;

pub use error::{SchedError, SchedResult};
