//! Engine configuration.
//!
//! Controls how strictly the registry validates incoming descriptors and
//! how the selective simulators advance the clock while no process has
//! arrived yet. Every field has a default, and deserialization fills any
//! missing field from [`EngineConfig::default`].

use serde::{Deserialize, Serialize};

/// How the registry treats descriptors that fail validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Reject non-positive bursts and negative arrivals with `InvalidProcess`.
    #[default]
    Strict,
    /// Accept every descriptor unchanged; invalid ones are only logged.
    Permissive,
}

/// Clock advance policy when the ready set is empty.
///
/// Both policies yield identical runs for integer time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdleAdvance {
    /// Jump straight to the next pending arrival.
    #[default]
    JumpToArrival,
    /// Advance one time unit per idle step.
    Tick,
}

/// Configuration for a [`SchedulingEngine`](crate::engine::SchedulingEngine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Registration-time validation.
    pub validation: ValidationMode,
    /// Idle clock policy for SJF and Priority.
    pub idle_advance: IdleAdvance,
}

impl EngineConfig {
    /// Creates the default configuration (strict, jump-to-arrival).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the validation mode.
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Sets the idle clock policy.
    pub fn with_idle_advance(mut self, idle_advance: IdleAdvance) -> Self {
        self.idle_advance = idle_advance;
        self
    }
}
