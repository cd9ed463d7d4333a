//! Automaton state identifiers and their classification.
//!
//! A state's numeric identity equals the value accumulated so far. Whether
//! that value is still open, accepted or rejected depends on the table the
//! state belongs to, so classification lives in [`StateKind`] and is
//! produced by the table rather than by the identifier itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single automaton state.
///
/// Rendered as `q<number>` everywhere a human reads it.
///
/// # Example
///
/// ```rust
/// use carwash::core::StateId;
///
/// let state = StateId::new(5);
/// assert_eq!(state.value(), 5);
/// assert_eq!(state.to_string(), "q5");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(u32);

impl StateId {
    /// The initial state of every run.
    pub const INITIAL: StateId = StateId(0);

    pub const fn new(value: u32) -> Self {
        StateId(value)
    }

    /// Numeric identity, which is also the accumulated coin value.
    pub const fn value(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for StateId {
    fn from(value: u32) -> Self {
        StateId(value)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Region of the state space a state falls into.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StateKind {
    /// Below the threshold; more coins are expected.
    Open,

    /// Exactly the threshold; a ticket is issued.
    Accepting,

    /// Above the threshold; the inserted total is refunded.
    Rejecting,
}

impl StateKind {
    /// Get the kind's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Open => "Open",
            Self::Accepting => "Accepting",
            Self::Rejecting => "Rejecting",
        }
    }

    /// Check if this kind ends a run.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Accepting | Self::Rejecting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_id_displays_with_q_prefix() {
        assert_eq!(StateId::new(0).to_string(), "q0");
        assert_eq!(StateId::new(21).to_string(), "q21");
    }

    #[test]
    fn initial_state_is_zero() {
        assert_eq!(StateId::INITIAL.value(), 0);
    }

    #[test]
    fn state_ids_order_by_value() {
        assert!(StateId::new(19) < StateId::new(20));
        assert!(StateId::new(21) > StateId::new(20));
    }

    #[test]
    fn kind_classifies_final() {
        assert!(!StateKind::Open.is_final());
        assert!(StateKind::Accepting.is_final());
        assert!(StateKind::Rejecting.is_final());
        assert_eq!(StateKind::Rejecting.name(), "Rejecting");
    }

    #[test]
    fn state_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&StateId::new(7)).unwrap();
        assert_eq!(json, "7");

        let back: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StateId::new(7));
    }
}
