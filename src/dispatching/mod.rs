//! Selection rules and the ready queue for non-preemptive dispatching.
//!
//! A [`SelectionRule`] scores each ready process; the [`ReadyQueue`] hands
//! out the lowest-scoring one, breaking ties by arrival-order position.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, ReadyQueue};
//! use u_cpusched::models::ProcessDescriptor;
//!
//! let long = ProcessDescriptor::of("long", 0, 8, 1);
//! let short = ProcessDescriptor::of("short", 0, 2, 1);
//! let mut queue = ReadyQueue::new(vec![&long, &short]);
//!
//! let next = queue.take_best(&rules::ShortestBurst, 0).unwrap();
//! assert_eq!(next.id, "short");
//! ```

mod queue;
pub mod rules;

pub use queue::ReadyQueue;

use crate::models::ProcessDescriptor;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A criterion for choosing the next process among those ready.
///
/// # Score Convention
/// **Lower score = dispatched first.** Equal scores are resolved by the
/// ready queue, never by the rule.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a ready process.
    fn evaluate(&self, process: &ProcessDescriptor) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
