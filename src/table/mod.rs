//! Immutable transition table of the car wash automaton.
//!
//! The transition function is stored as data: one row per source state,
//! one column per coin. Lookups are a pair of index operations and the whole
//! relation can be exported as a grid of strings for display.

pub mod builder;
pub mod error;

pub use builder::{TableBuilder, DEFAULT_ACCEPT_THRESHOLD, MAX_ACCEPT_THRESHOLD};
pub use error::{BuildError, TableError};

use crate::core::{Coin, StateId, StateKind};
use tracing::debug;

/// Label of the matrix corner cell, the transition function's symbol.
pub const DELTA: &str = "δ";

/// Rectangular grid of display strings, header row first.
pub type Matrix = Vec<Vec<String>>;

/// Total mapping from (state, coin) to the next state.
///
/// Every declared state has exactly one entry per coin, and both terminal
/// states map back into a terminal state for every coin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
    rows: Vec<[StateId; 3]>,
    accepting: StateId,
}

impl TransitionTable {
    /// Create a builder for a custom threshold.
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// The reference car wash table: threshold 20, rejecting state 21.
    ///
    /// # Example
    ///
    /// ```rust
    /// use carwash::core::{Coin, StateId};
    /// use carwash::table::TransitionTable;
    ///
    /// let table = TransitionTable::standard();
    /// assert_eq!(table.lookup(StateId::new(15), Coin::Five), Ok(StateId::new(20)));
    /// assert_eq!(table.lookup(StateId::new(19), Coin::Five), Ok(StateId::new(21)));
    /// ```
    pub fn standard() -> Self {
        Self::generate(DEFAULT_ACCEPT_THRESHOLD)
    }

    /// Open states advance by the coin's value, saturating at the rejecting
    /// state `threshold + 1`. Both terminal states absorb every coin.
    ///
    /// `threshold` is at most [`MAX_ACCEPT_THRESHOLD`], so no sum overflows.
    pub(crate) fn generate(threshold: u32) -> Self {
        let rejecting = threshold + 1;
        let mut rows: Vec<[StateId; 3]> = (0..threshold)
            .map(|source| {
                Coin::ALL.map(|coin| StateId::new((source + coin.value()).min(rejecting)))
            })
            .collect();
        rows.push([StateId::new(threshold); 3]);
        rows.push([StateId::new(rejecting); 3]);
        Self {
            rows,
            accepting: StateId::new(threshold),
        }
    }

    /// Next state for `state` on `symbol`.
    ///
    /// Fails with [`TableError::UndefinedTransition`] if `state` is not
    /// declared in this table.
    pub fn lookup(&self, state: StateId, symbol: Coin) -> Result<StateId, TableError> {
        self.rows
            .get(state.index())
            .map(|row| row[symbol.column()])
            .ok_or(TableError::UndefinedTransition { state, symbol })
    }

    /// Classify a state into its region.
    pub fn classify(&self, state: StateId) -> StateKind {
        match state.cmp(&self.accepting) {
            std::cmp::Ordering::Less => StateKind::Open,
            std::cmp::Ordering::Equal => StateKind::Accepting,
            std::cmp::Ordering::Greater => StateKind::Rejecting,
        }
    }

    /// The absorbing rejecting state, the highest declared state.
    pub fn rejecting_state(&self) -> StateId {
        StateId::new(self.rows.len() as u32 - 1)
    }

    /// Iterate over all declared states in declaration order.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.rows.len() as u32).map(StateId::new)
    }

    /// Iterate over every transition as `(source, coin, destination)`.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Coin, StateId)> + '_ {
        self.states().zip(self.rows.iter()).flat_map(|(source, row)| {
            Coin::ALL
                .into_iter()
                .map(move |coin| (source, coin, row[coin.column()]))
        })
    }

    /// Export the table as a grid of display strings.
    ///
    /// The header row holds [`DELTA`] followed by each coin's face value.
    /// Each following row holds the source state and then its destination
    /// for every coin, all rendered as `q<number>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use carwash::table::TransitionTable;
    ///
    /// let matrix = TransitionTable::standard().as_matrix();
    /// assert_eq!(matrix[0], vec!["δ", "1", "2", "5"]);
    /// assert_eq!(matrix[1], vec!["q0", "q1", "q2", "q5"]);
    /// assert_eq!(matrix.len(), 23);
    /// ```
    pub fn as_matrix(&self) -> Matrix {
        let header: Vec<String> = std::iter::once(DELTA.to_string())
            .chain(Coin::ALL.iter().map(Coin::to_string))
            .collect();

        let transitions: Vec<_> = self.transitions().collect();
        let rows = transitions.chunks(Coin::ALL.len()).map(|chunk| {
            let source = chunk.first().map(|(source, _, _)| source.to_string());
            source
                .into_iter()
                .chain(chunk.iter().map(|(_, _, destination)| destination.to_string()))
                .collect::<Vec<String>>()
        });

        debug!(states = self.rows.len(), "exported transition matrix");
        std::iter::once(header).chain(rows).collect()
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::standard()
    }
}
