//! Results of feeding a coin into the automaton.

use crate::core::{Coin, StateId, StateKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Proof of an exact payment, issued when the accepting state is entered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket identifier
    pub id: Uuid,
    /// Position of this ticket among those issued by the same machine, from 1
    pub serial: u64,
    /// When the ticket was generated
    pub issued_at: DateTime<Utc>,
}

impl Ticket {
    pub(crate) fn issue(serial: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            serial,
            issued_at: Utc::now(),
        }
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ticket generated, timestamp: {}", self.issued_at.to_rfc3339())
    }
}

/// Return of the whole inserted amount after an overpayment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refund {
    /// Amount handed back, the value of the rejecting state reached
    pub total: u32,
}

impl fmt::Display for Refund {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Full amount refunded, total: {}", self.total)
    }
}

/// Classification of the state entered by one insertion.
///
/// Callers must handle all three cases; only the terminal ones carry a
/// payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No outcome yet, insert another coin
    Continuing,

    /// Exact payment reached
    Ticket(Ticket),

    /// Threshold overshot
    Refund(Refund),
}

impl Outcome {
    /// Check if this outcome ended the run.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continuing)
    }

    /// Human-readable message for terminal outcomes.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Continuing => None,
            Self::Ticket(ticket) => Some(ticket.to_string()),
            Self::Refund(refund) => Some(refund.to_string()),
        }
    }
}

/// Observability record of a single insertion.
///
/// `path` is the run as it stood right after the transition, so for a
/// terminal insertion it still ends in the terminal state even though the
/// engine has already been reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insertion {
    /// The coin that was inserted
    pub coin: Coin,
    /// State before the transition
    pub from: StateId,
    /// State entered by the transition
    pub state: StateId,
    /// Region of the entered state
    pub kind: StateKind,
    /// Every state of the run so far, initial state first
    pub path: Vec<StateId>,
    /// Classification of the entered state
    pub outcome: Outcome,
}

impl Insertion {
    /// The path rendered as `q0→q5→…`.
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(StateId::to_string)
            .collect::<Vec<_>>()
            .join("→")
    }

    /// Serialize the record as a single JSON line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
