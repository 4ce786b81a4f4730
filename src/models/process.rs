//! Process descriptor model.
//!
//! A process descriptor is the immutable input to every simulator: an id,
//! the time it becomes eligible to run, how long it needs the CPU, and a
//! priority value.

use serde::{Deserialize, Serialize};

use super::Time;

/// A process to be scheduled.
///
/// # Conventions
/// - Lower `priority` values are more important.
/// - Ids are not required to be unique; lookups resolve to the first
///   descriptor in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Caller-supplied identifier.
    pub id: String,
    /// Time unit at which the process becomes eligible.
    pub arrival_time: Time,
    /// Total CPU time required.
    pub burst_time: Time,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
}

impl ProcessDescriptor {
    /// Creates a descriptor arriving at 0 with zero burst and priority 0.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            arrival_time: 0,
            burst_time: 0,
            priority: 0,
        }
    }

    /// Creates a fully specified descriptor.
    pub fn of(id: impl Into<String>, arrival_time: Time, burst_time: Time, priority: i32) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: Time) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst_time: Time) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: Time) -> bool {
        self.arrival_time <= time
    }
}
