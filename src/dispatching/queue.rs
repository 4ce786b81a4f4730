//! Ready queue for the selective simulators.

use super::SelectionRule;
use crate::models::{ProcessDescriptor, Time};

/// Pending processes in arrival order.
///
/// Because the pending list stays sorted by arrival, the processes ready at
/// time `t` always form a prefix of it.
///
/// # Tie-break
/// Among ready processes with equal rule scores, the one earliest in
/// arrival order (equal arrivals: earliest registered) is chosen.
#[derive(Debug, Clone)]
pub struct ReadyQueue<'a> {
    pending: Vec<&'a ProcessDescriptor>,
}

impl<'a> ReadyQueue<'a> {
    /// Creates a queue from processes sorted by arrival time.
    pub fn new(arrival_ordered: Vec<&'a ProcessDescriptor>) -> Self {
        debug_assert!(arrival_ordered
            .windows(2)
            .all(|w| w[0].arrival_time <= w[1].arrival_time));
        Self {
            pending: arrival_ordered,
        }
    }

    /// Processes that have arrived by `now`, in arrival order.
    pub fn ready(&self, now: Time) -> &[&'a ProcessDescriptor] {
        let end = self.pending.partition_point(|p| p.has_arrived(now));
        &self.pending[..end]
    }

    /// Arrival time of the earliest pending process.
    pub fn next_arrival(&self) -> Option<Time> {
        self.pending.first().map(|p| p.arrival_time)
    }

    /// Removes and returns the best ready process at `now`.
    ///
    /// Returns `None` when nothing has arrived yet.
    pub fn take_best(
        &mut self,
        rule: &dyn SelectionRule,
        now: Time,
    ) -> Option<&'a ProcessDescriptor> {
        // `min_by_key` keeps the first of equal minima.
        let (index, _) = self
            .ready(now)
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| rule.evaluate(p))?;
        Some(self.pending.remove(index))
    }

    /// Number of pending processes.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether every process has been taken.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
