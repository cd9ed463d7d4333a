//! Run history tracking.
//!
//! A run is the sequence of states visited since the last reset. It always
//! starts at the initial state and its last element is the current state.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Errors raised when a serialized run violates the run invariants.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("Run has no states; it must start at {}", StateId::INITIAL)]
    EmptyPath,

    #[error("Run starts at {found} instead of {}", StateId::INITIAL)]
    WrongInitialState { found: StateId },
}

/// Ordered sequence of states visited during one coin session.
///
/// # Example
///
/// ```rust
/// use carwash::core::{Run, StateId};
///
/// let mut run = Run::new();
/// run.record(StateId::new(5));
/// run.record(StateId::new(10));
///
/// assert_eq!(run.current(), StateId::new(10));
/// assert_eq!(run.to_string(), "q0→q5→q10");
///
/// run.reset();
/// assert_eq!(run.path(), &[StateId::INITIAL]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RunRecord")]
pub struct Run {
    states: Vec<StateId>,
    started_at: DateTime<Utc>,
}

/// Unchecked wire form of a [`Run`].
#[derive(Deserialize)]
struct RunRecord {
    states: Vec<StateId>,
    started_at: DateTime<Utc>,
}

impl TryFrom<RunRecord> for Run {
    type Error = RunError;

    fn try_from(record: RunRecord) -> Result<Self, Self::Error> {
        match record.states.first() {
            None => Err(RunError::EmptyPath),
            Some(&first) if first != StateId::INITIAL => {
                Err(RunError::WrongInitialState { found: first })
            }
            Some(_) => Ok(Self {
                states: record.states,
                started_at: record.started_at,
            }),
        }
    }
}

impl Default for Run {
    fn default() -> Self {
        Self::new()
    }
}

impl Run {
    /// Create a run positioned at the initial state.
    pub fn new() -> Self {
        Self {
            states: vec![StateId::INITIAL],
            started_at: Utc::now(),
        }
    }

    /// Append the state just entered.
    pub fn record(&mut self, state: StateId) {
        self.states.push(state);
    }

    /// Clear the run back to the initial state.
    pub fn reset(&mut self) {
        self.states.clear();
        self.states.push(StateId::INITIAL);
        self.started_at = Utc::now();
    }

    /// The state the run currently sits in.
    pub fn current(&self) -> StateId {
        // `states` is never empty: construction, reset and deserialization
        // all guarantee it.
        self.states.last().copied().unwrap_or(StateId::INITIAL)
    }

    /// All states visited since the last reset, initial state first.
    pub fn path(&self) -> &[StateId] {
        &self.states
    }

    /// Time elapsed since the current run began.
    ///
    /// Returns `None` if the clock moved backwards.
    pub fn elapsed(&self) -> Option<Duration> {
        Utc::now().signed_duration_since(self.started_at).to_std().ok()
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut states = self.states.iter();
        if let Some(first) = states.next() {
            write!(f, "{first}")?;
        }
        for state in states {
            write!(f, "→{state}")?;
        }
        Ok(())
    }
}
