//! Built-in selection rules.
//!
//! - **Burst-based**: `ShortestBurst` (SJF)
//! - **Priority-based**: `LowestPriority`
//! - **Arrival-based**: `EarliestArrival` (FIFO)
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::ProcessDescriptor;

/// Shortest burst time first.
///
/// Minimizes mean waiting time among non-preemptive policies when all
/// processes are ready at once.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessDescriptor) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Lowest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct LowestPriority;

impl SelectionRule for LowestPriority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn evaluate(&self, process: &ProcessDescriptor) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Lowest Priority Value"
    }
}

/// Earliest arrival first.
///
/// Driving the selective loop with this rule reproduces FCFS.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &ProcessDescriptor) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Algorithm;

    #[test]
    fn test_shortest_burst() {
        let short = ProcessDescriptor::of("short", 0, 2, 9);
        let long = ProcessDescriptor::of("long", 0, 10, 1);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_lowest_priority() {
        let urgent = ProcessDescriptor::of("urgent", 0, 10, 1);
        let relaxed = ProcessDescriptor::of("relaxed", 0, 2, 5);
        assert!(LowestPriority.evaluate(&urgent) < LowestPriority.evaluate(&relaxed));
        assert_eq!(LowestPriority.evaluate(&ProcessDescriptor::of("n", 0, 1, -3)), -3);
    }

    #[test]
    fn test_earliest_arrival() {
        let early = ProcessDescriptor::of("early", 1, 10, 5);
        let late = ProcessDescriptor::of("late", 4, 1, 1);
        assert!(EarliestArrival.evaluate(&early) < EarliestArrival.evaluate(&late));
    }

    #[test]
    fn test_names() {
        assert_eq!(ShortestBurst.name(), "SJF");
        assert_eq!(ShortestBurst.name(), Algorithm::Sjf.name());
        assert_eq!(LowestPriority.name(), Algorithm::Priority.name());
        assert_eq!(LowestPriority.description(), "Lowest Priority Value");
        assert_eq!(EarliestArrival.description(), "First In First Out");
    }
}
