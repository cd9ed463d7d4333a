//! The car wash automaton.

use crate::core::{Coin, Run, StateId, StateKind};
use crate::engine::outcome::{Insertion, Outcome, Refund, Ticket};
use crate::table::TransitionTable;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Deterministic automaton that accepts coins until a terminal state.
///
/// The table is shared and never mutated; the run is owned exclusively by
/// this machine. Independent sessions need independent machines.
///
/// # Example
///
/// ```rust
/// use carwash::core::{Coin, StateId};
/// use carwash::engine::{CarWash, Outcome};
///
/// let mut machine = CarWash::standard();
///
/// for _ in 0..3 {
///     let step = machine.insert(Coin::Five);
///     assert_eq!(step.outcome, Outcome::Continuing);
/// }
///
/// let step = machine.insert(Coin::Five);
/// assert!(matches!(step.outcome, Outcome::Ticket(_)));
/// assert_eq!(machine.current_state(), StateId::INITIAL);
/// ```
#[derive(Clone, Debug)]
pub struct CarWash {
    table: Arc<TransitionTable>,
    run: Run,
    tickets_issued: u64,
}

impl CarWash {
    /// Create a machine in the initial state over `table`.
    pub fn new(table: Arc<TransitionTable>) -> Self {
        Self {
            table,
            run: Run::new(),
            tickets_issued: 0,
        }
    }

    /// Create a machine over the reference table.
    pub fn standard() -> Self {
        Self::new(Arc::new(TransitionTable::standard()))
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> StateId {
        self.run.current()
    }

    /// Get the current run (pure)
    pub fn history(&self) -> &Run {
        &self.run
    }

    /// Number of tickets issued since construction.
    pub fn tickets_issued(&self) -> u64 {
        self.tickets_issued
    }

    /// Feed one coin into the automaton.
    ///
    /// Looks up the next state, records it, and classifies it. When the new
    /// state is terminal the run is reset to the initial state before this
    /// returns; the returned record still holds the completed path.
    pub fn insert(&mut self, coin: Coin) -> Insertion {
        let from = self.run.current();
        let state = self.next_state(from, coin);
        self.run.record(state);

        let kind = self.table.classify(state);
        info!(
            coin = coin.value(),
            state = %state,
            path = %self.run,
            "coin inserted"
        );

        let outcome = match kind {
            StateKind::Open => Outcome::Continuing,
            StateKind::Accepting => {
                self.tickets_issued += 1;
                Outcome::Ticket(Ticket::issue(self.tickets_issued))
            }
            StateKind::Rejecting => Outcome::Refund(Refund {
                total: state.value(),
            }),
        };

        let insertion = Insertion {
            coin,
            from,
            state,
            kind,
            path: self.run.path().to_vec(),
            outcome,
        };

        if kind.is_final() {
            info!(
                state = %state,
                total = state.value(),
                path = %self.run,
                outcome = kind.name(),
                elapsed_ms = self.run.elapsed().map(|d| d.as_millis() as u64),
                "run finished"
            );
            self.run.reset();
        }

        insertion
    }

    fn next_state(&self, from: StateId, coin: Coin) -> StateId {
        match self.table.lookup(from, coin) {
            Ok(next) => {
                debug!(from = %from, coin = coin.value(), to = %next, "transition");
                next
            }
            // Runs only hold states produced by this table.
            Err(err) => {
                warn!(
                    error = %err,
                    "transition lookup failed, absorbing into rejecting state"
                );
                self.table.rejecting_state()
            }
        }
    }
}

impl Default for CarWash {
    fn default() -> Self {
        Self::standard()
    }
}
