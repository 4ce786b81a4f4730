//! Random workload generation.
//!
//! Produces reproducible demonstration workloads from any [`rand::Rng`].
//! Ids are `P1..Pn` in generation order; the default ranges always yield
//! descriptors that pass strict validation.

use rand::Rng;

use crate::models::{ProcessDescriptor, Time};

/// Uniform random workload generator.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_cpusched::generator::WorkloadGenerator;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let processes = WorkloadGenerator::new(4).generate(&mut rng);
/// assert_eq!(processes.len(), 4);
/// assert_eq!(processes[0].id, "P1");
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    arrival: (Time, Time),
    burst: (Time, Time),
    priority: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    ///
    /// Defaults: arrival 0..=20, burst 1..=10, priority 0..=5.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: (0, 20),
            burst: (1, 10),
            priority: (0, 5),
        }
    }

    /// Sets the inclusive arrival-time range.
    pub fn with_arrival_range(mut self, min: Time, max: Time) -> Self {
        self.arrival = (min.min(max), min.max(max));
        self
    }

    /// Sets the inclusive burst-time range.
    pub fn with_burst_range(mut self, min: Time, max: Time) -> Self {
        self.burst = (min.min(max), min.max(max));
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority = (min.min(max), min.max(max));
        self
    }

    /// Number of processes per workload.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Generates one workload.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessDescriptor> {
        (1..=self.count)
            .map(|n| {
                ProcessDescriptor::of(
                    format!("P{n}"),
                    rng.random_range(self.arrival.0..=self.arrival.1),
                    rng.random_range(self.burst.0..=self.burst.1),
                    rng.random_range(self.priority.0..=self.priority.1),
                )
            })
            .collect()
    }
}
