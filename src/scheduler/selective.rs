//! Non-preemptive selective simulator (SJF, Priority).
//!
//! # Algorithm
//!
//! 1. Collect the ready set: pending processes with `arrival <= now`.
//! 2. If empty, advance the clock according to [`IdleAdvance`].
//! 3. Otherwise dispatch the ready process with the lowest rule score
//!    (ties: earliest arrival-order position) and run it to completion.
//! 4. Repeat until no process is pending.
//!
//! # Complexity
//! O(n²) selections; idle handling is O(1) per gap with
//! `IdleAdvance::JumpToArrival` and O(gap) with `IdleAdvance::Tick`.

use crate::config::IdleAdvance;
use crate::dispatching::{ReadyQueue, SelectionRule};
use crate::models::{Algorithm, ProcessDescriptor, RunResult, SimulationRun, Time};

/// Rule-driven non-preemptive simulator.
///
/// # Example
///
/// ```
/// use u_cpusched::dispatching::rules::ShortestBurst;
/// use u_cpusched::models::{Algorithm, ProcessDescriptor};
/// use u_cpusched::scheduler::SelectiveScheduler;
///
/// let p1 = ProcessDescriptor::of("P1", 0, 10, 3);
/// let p2 = ProcessDescriptor::of("P2", 1, 2, 2);
/// let p3 = ProcessDescriptor::of("P3", 2, 1, 1);
///
/// let sjf = SelectiveScheduler::new(Algorithm::Sjf, ShortestBurst);
/// let run = sjf.simulate(&[&p1, &p2, &p3]);
/// assert_eq!(run.dispatch_order(), vec!["P1", "P3", "P2"]);
/// ```
#[derive(Debug, Clone)]
pub struct SelectiveScheduler<R: SelectionRule> {
    algorithm: Algorithm,
    rule: R,
    idle_advance: IdleAdvance,
}

impl<R: SelectionRule> SelectiveScheduler<R> {
    /// Creates a simulator that tags its runs with `algorithm`.
    pub fn new(algorithm: Algorithm, rule: R) -> Self {
        Self {
            algorithm,
            rule,
            idle_advance: IdleAdvance::default(),
        }
    }

    /// Sets the idle clock policy.
    pub fn with_idle_advance(mut self, idle_advance: IdleAdvance) -> Self {
        self.idle_advance = idle_advance;
        self
    }

    /// Simulates over processes already sorted by arrival time.
    pub fn simulate(&self, arrival_ordered: &[&ProcessDescriptor]) -> SimulationRun {
        let mut run = SimulationRun::with_capacity(self.algorithm, arrival_ordered.len());
        let mut queue = ReadyQueue::new(arrival_ordered.to_vec());
        let mut current_time: Time = 0;

        while !queue.is_empty() {
            let Some(process) = queue.take_best(&self.rule, current_time) else {
                current_time = self.advance_idle(current_time, queue.next_arrival());
                continue;
            };

            let result = RunResult::dispatched(process, current_time);
            tracing::debug!(
                algorithm = %self.algorithm,
                rule = self.rule.name(),
                process = %result.process_id,
                start = result.start_time,
                completion = result.completion_time,
                "dispatched"
            );
            current_time = result.completion_time;
            run.push(result);
        }

        run
    }

    fn advance_idle(&self, current_time: Time, next_arrival: Option<Time>) -> Time {
        let next = match self.idle_advance {
            IdleAdvance::JumpToArrival => {
                next_arrival.unwrap_or_else(|| current_time.saturating_add(1))
            }
            IdleAdvance::Tick => current_time.saturating_add(1),
        };
        tracing::trace!(
            algorithm = %self.algorithm,
            from = current_time,
            to = next,
            "idle"
        );
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::{EarliestArrival, LowestPriority, ShortestBurst};
    use crate::scheduler::FcfsScheduler;

    fn scenario() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::of("P1", 0, 10, 3),
            ProcessDescriptor::of("P2", 1, 2, 2),
            ProcessDescriptor::of("P3", 2, 1, 1),
        ]
    }

    #[test]
    fn test_sjf_picks_shortest_ready() {
        let procs = scenario();
        let refs: Vec<&ProcessDescriptor> = procs.iter().collect();
        let run = SelectiveScheduler::new(Algorithm::Sjf, ShortestBurst).simulate(&refs);

        assert_eq!(run.dispatch_order(), vec!["P1", "P3", "P2"]);
        let r3 = run.result_for("P3").unwrap();
        assert_eq!((r3.waiting_time, r3.completion_time, r3.turnaround_time), (8, 11, 9));
        let r2 = run.result_for("P2").unwrap();
        assert_eq!((r2.waiting_time, r2.completion_time, r2.turnaround_time), (10, 13, 12));
    }

    #[test]
    fn test_priority_picks_lowest_value() {
        let a = ProcessDescriptor::of("A", 0, 1, 0);
        let b = ProcessDescriptor::of("B", 0, 1, 5);
        let c = ProcessDescriptor::of("C", 0, 9, 2);
        let run = SelectiveScheduler::new(Algorithm::Priority, LowestPriority)
            .simulate(&[&a, &b, &c]);

        assert_eq!(run.algorithm, Algorithm::Priority);
        assert_eq!(run.dispatch_order(), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_equal_burst_keeps_arrival_order() {
        let x = ProcessDescriptor::of("X", 0, 4, 0);
        let y = ProcessDescriptor::of("Y", 1, 2, 0);
        let z = ProcessDescriptor::of("Z", 2, 2, 0);
        let run = SelectiveScheduler::new(Algorithm::Sjf, ShortestBurst).simulate(&[&x, &y, &z]);
        assert_eq!(run.dispatch_order(), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_idle_gap_jumps_to_next_arrival() {
        let a = ProcessDescriptor::of("A", 3, 2, 0);
        let b = ProcessDescriptor::of("B", 20, 1, 0);
        let run = SelectiveScheduler::new(Algorithm::Sjf, ShortestBurst).simulate(&[&a, &b]);

        let ra = run.result_for("A").unwrap();
        assert_eq!((ra.start_time, ra.waiting_time), (3, 0));
        let rb = run.result_for("B").unwrap();
        assert_eq!((rb.start_time, rb.completion_time), (20, 21));
    }

    #[test]
    fn test_tick_matches_jump() {
        let procs = vec![
            ProcessDescriptor::of("A", 4, 3, 2),
            ProcessDescriptor::of("B", 4, 1, 1),
            ProcessDescriptor::of("C", 15, 2, 0),
            ProcessDescriptor::of("D", 16, 1, 3),
        ];
        let refs: Vec<&ProcessDescriptor> = procs.iter().collect();

        fn both<R: SelectionRule + Clone>(
            scheduler: SelectiveScheduler<R>,
            refs: &[&ProcessDescriptor],
        ) -> (SimulationRun, SimulationRun) {
            let jump = scheduler.clone().simulate(refs);
            let tick = scheduler.with_idle_advance(IdleAdvance::Tick).simulate(refs);
            (jump, tick)
        }

        let (jump, tick) = both(SelectiveScheduler::new(Algorithm::Sjf, ShortestBurst), &refs);
        assert_eq!(jump, tick);
        assert_eq!(jump.result_for("A").unwrap().start_time, 5);

        let (jump, tick) = both(
            SelectiveScheduler::new(Algorithm::Priority, LowestPriority),
            &refs,
        );
        assert_eq!(jump, tick);
    }

    #[test]
    fn test_earliest_arrival_reproduces_fcfs() {
        let procs = vec![
            ProcessDescriptor::of("A", 0, 5, 3),
            ProcessDescriptor::of("B", 0, 1, 1),
            ProcessDescriptor::of("C", 9, 2, 0),
            ProcessDescriptor::of("D", 6, 4, 2),
        ];
        let mut refs: Vec<&ProcessDescriptor> = procs.iter().collect();
        refs.sort_by_key(|p| p.arrival_time);

        let fifo = SelectiveScheduler::new(Algorithm::Fcfs, EarliestArrival).simulate(&refs);
        let fcfs = FcfsScheduler::new().simulate(&refs);
        assert_eq!(fifo, fcfs);
    }

    #[test]
    fn test_empty_input() {
        let run = SelectiveScheduler::new(Algorithm::Priority, LowestPriority).simulate(&[]);
        assert!(run.is_empty());
        assert_eq!(run.makespan(), 0);
    }
}
