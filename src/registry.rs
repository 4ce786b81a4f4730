//! Workload registry.
//!
//! Holds the ordered set of process descriptors every simulator consumes.
//! Insertion order is significant: it is the tie-break baseline for all
//! three algorithms.

use serde::{Deserialize, Serialize};

use crate::config::ValidationMode;
use crate::error::{SchedError, SchedResult};
use crate::models::{ProcessDescriptor, Time};
use crate::validation::{self, validate_process};

/// An append-only, insertion-ordered collection of process descriptors.
///
/// Descriptors are never mutated or removed once added. Ids are not
/// checked for uniqueness; [`Workload::find`] returns the first match.
///
/// Deserialization replays every descriptor through [`Workload::add`]
/// under the recorded validation mode, so a strict workload loaded from
/// JSON holds only valid descriptors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "WorkloadRepr")]
pub struct Workload {
    processes: Vec<ProcessDescriptor>,
    validation: ValidationMode,
}

/// Serialized shape of a [`Workload`], before validation.
#[derive(Deserialize)]
struct WorkloadRepr {
    #[serde(default)]
    processes: Vec<ProcessDescriptor>,
    #[serde(default)]
    validation: ValidationMode,
}

impl TryFrom<WorkloadRepr> for Workload {
    type Error = SchedError;

    fn try_from(repr: WorkloadRepr) -> SchedResult<Self> {
        let mut workload = Self::with_validation(repr.validation);
        for process in repr.processes {
            workload.add(process)?;
        }
        Ok(workload)
    }
}

impl Workload {
    /// Creates an empty strict-mode workload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty workload with the given validation mode.
    pub fn with_validation(validation: ValidationMode) -> Self {
        Self {
            processes: Vec::new(),
            validation,
        }
    }

    /// Builds a strict-mode workload from descriptors, stopping at the first invalid one.
    pub fn from_processes(
        processes: impl IntoIterator<Item = ProcessDescriptor>,
    ) -> SchedResult<Self> {
        let mut workload = Self::new();
        for process in processes {
            workload.add(process)?;
        }
        Ok(workload)
    }

    /// Validation mode applied by [`Workload::add`].
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Appends a descriptor.
    ///
    /// In [`ValidationMode::Strict`] a descriptor with a non-positive burst,
    /// a negative arrival, an empty id, or a completion time past
    /// `Time::MAX` is rejected with [`SchedError::InvalidProcess`].
    /// In [`ValidationMode::Permissive`] it is accepted unchanged.
    pub fn add(&mut self, process: ProcessDescriptor) -> SchedResult<()> {
        if let Err(errors) = validate_process(&process) {
            let reason = validation::describe(&errors);
            match self.validation {
                ValidationMode::Strict => {
                    tracing::debug!(process = %process.id, %reason, "rejected process");
                    return Err(SchedError::InvalidProcess {
                        id: process.id,
                        reason,
                    });
                }
                ValidationMode::Permissive => {
                    tracing::warn!(process = %process.id, %reason, "accepting invalid process");
                }
            }
        }

        tracing::debug!(
            process = %process.id,
            arrival = process.arrival_time,
            burst = process.burst_time,
            priority = process.priority,
            "registered process"
        );
        self.processes.push(process);
        Ok(())
    }

    /// Appends a descriptor built from its fields.
    pub fn add_process(
        &mut self,
        id: impl Into<String>,
        arrival_time: Time,
        burst_time: Time,
        priority: i32,
    ) -> SchedResult<()> {
        self.add(ProcessDescriptor::of(id, arrival_time, burst_time, priority))
    }

    /// All descriptors in insertion order.
    pub fn processes(&self) -> &[ProcessDescriptor] {
        &self.processes
    }

    /// Iterates descriptors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProcessDescriptor> {
        self.processes.iter()
    }

    /// Finds the first descriptor with the given id.
    pub fn find(&self, id: &str) -> Option<&ProcessDescriptor> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Whether any descriptor has the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Descriptors sorted by arrival time.
    ///
    /// The sort is stable: equal arrivals keep insertion order.
    pub fn arrival_order(&self) -> Vec<&ProcessDescriptor> {
        let mut ordered: Vec<&ProcessDescriptor> = self.processes.iter().collect();
        ordered.sort_by_key(|p| p.arrival_time);
        ordered
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the workload is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Workload {
    type Item = &'a ProcessDescriptor;
    type IntoIter = std::slice::Iter<'a, ProcessDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order() {
        let mut w = Workload::new();
        w.add_process("B", 5, 1, 0).unwrap();
        w.add_process("A", 0, 1, 0).unwrap();

        let ids: Vec<&str> = w.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn test_arrival_order_is_stable() {
        let mut w = Workload::new();
        w.add_process("late", 4, 1, 0).unwrap();
        w.add_process("first", 1, 1, 0).unwrap();
        w.add_process("second", 1, 1, 0).unwrap();
        w.add_process("zero", 0, 1, 0).unwrap();

        let ids: Vec<&str> = w.arrival_order().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["zero", "first", "second", "late"]);
    }

    #[test]
    fn test_strict_rejects_invalid() {
        let mut w = Workload::new();
        let err = w.add_process("P1", 0, 0, 1).unwrap_err();
        assert!(matches!(err, SchedError::InvalidProcess { ref id, .. } if id == "P1"));

        let err = w.add_process("P2", -1, 3, 1).unwrap_err();
        assert!(matches!(err, SchedError::InvalidProcess { .. }));
        assert!(w.is_empty());
    }

    #[test]
    fn test_permissive_accepts_invalid() {
        let mut w = Workload::with_validation(ValidationMode::Permissive);
        w.add_process("P1", 0, 0, 1).unwrap();
        w.add_process("P2", -1, -3, 1).unwrap();
        assert_eq!(w.len(), 2);
        assert_eq!(w.validation(), ValidationMode::Permissive);
    }

    #[test]
    fn test_strict_rejects_completion_overflow() {
        let mut w = Workload::new();
        let err = w.add_process("late", Time::MAX - 1, 5, 0).unwrap_err();
        assert!(matches!(
            err,
            SchedError::InvalidProcess { ref reason, .. } if reason.contains("overflows")
        ));

        let err = w.add_process("huge", 1, Time::MAX, 0).unwrap_err();
        assert!(matches!(err, SchedError::InvalidProcess { .. }));
        assert!(w.is_empty());

        // Completion landing exactly on Time::MAX still fits.
        w.add_process("edge", Time::MAX - 5, 5, 0).unwrap();
        w.add_process("long", 0, Time::MAX, 0).unwrap();
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn test_permissive_overflow_does_not_panic() {
        let mut w = Workload::with_validation(ValidationMode::Permissive);
        w.add_process("late", Time::MAX - 1, 5, 0).unwrap();
        w.add_process("early", Time::MIN, Time::MAX, 0).unwrap();

        let runs = crate::scheduler::Simulator::new().run_all(&w);
        for run in &runs {
            assert_eq!(run.len(), 2);
            assert_eq!(run.makespan(), Time::MAX);
        }
    }

    #[test]
    fn test_deserialize_strict_rejects_invalid() {
        let json = r#"{
            "processes": [{"id": "bad", "arrival_time": -4, "burst_time": -7, "priority": 0}],
            "validation": "strict"
        }"#;
        assert!(serde_json::from_str::<Workload>(json).is_err());

        // Mode defaults to strict when omitted.
        let json = r#"{"processes":[{"id":"bad","arrival_time":0,"burst_time":0,"priority":0}]}"#;
        assert!(serde_json::from_str::<Workload>(json).is_err());
    }

    #[test]
    fn test_deserialize_replays_in_order() {
        let json = r#"{
            "processes": [{"id": "bad", "arrival_time": -4, "burst_time": -7, "priority": 0}],
            "validation": "permissive"
        }"#;
        let w: Workload = serde_json::from_str(json).unwrap();
        assert_eq!(w.validation(), ValidationMode::Permissive);
        assert_eq!(w.len(), 1);

        let mut original = Workload::new();
        original.add_process("B", 3, 2, 1).unwrap();
        original.add_process("A", 0, 4, 2).unwrap();
        let restored: Workload =
            serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();
        let ids: Vec<&str> = restored.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(restored.validation(), ValidationMode::Strict);
    }

    #[test]
    fn test_duplicates_resolve_to_first() {
        let mut w = Workload::new();
        w.add_process("P1", 0, 4, 1).unwrap();
        w.add_process("P1", 9, 2, 1).unwrap();

        assert_eq!(w.len(), 2);
        assert_eq!(w.find("P1").unwrap().burst_time, 4);
        assert!(w.contains("P1"));
        assert!(!w.contains("P2"));
    }

    #[test]
    fn test_from_processes() {
        let w = Workload::from_processes(vec![
            ProcessDescriptor::of("P1", 0, 1, 0),
            ProcessDescriptor::of("P2", 0, 2, 0),
        ])
        .unwrap();
        assert_eq!(w.len(), 2);

        let err = Workload::from_processes(vec![ProcessDescriptor::of("bad", 0, 0, 0)]);
        assert!(err.is_err());
    }
}
