//! Builder for constructing transition tables.

use crate::table::error::BuildError;
use crate::table::TransitionTable;

/// Accept threshold of the reference car wash: the price of one wash.
pub const DEFAULT_ACCEPT_THRESHOLD: u32 = 20;

/// Largest accept threshold a table can be built for. The table holds one
/// row per state, so this also bounds its size.
pub const MAX_ACCEPT_THRESHOLD: u32 = 10_000;

/// Builder for constructing a [`TransitionTable`] with a fluent API.
///
/// Source states below the threshold advance by the coin's face value. A
/// step that lands exactly on the threshold enters the accepting state and
/// a step past it enters the single rejecting state `threshold + 1`. Both
/// terminal states absorb every coin.
///
/// # Example
///
/// ```rust
/// use carwash::core::{Coin, StateId};
/// use carwash::table::TableBuilder;
///
/// let table = TableBuilder::new().accept_threshold(4).build().unwrap();
///
/// assert_eq!(table.rejecting_state(), StateId::new(5));
/// assert_eq!(table.lookup(StateId::new(2), Coin::Two), Ok(StateId::new(4)));
/// assert_eq!(table.lookup(StateId::new(2), Coin::Five), Ok(StateId::new(5)));
/// ```
#[derive(Clone, Debug)]
pub struct TableBuilder {
    accept_threshold: u32,
}

impl TableBuilder {
    /// Create a builder for the reference threshold.
    pub fn new() -> Self {
        Self {
            accept_threshold: DEFAULT_ACCEPT_THRESHOLD,
        }
    }

    /// Set the value that must be paid exactly to be accepted.
    pub fn accept_threshold(mut self, threshold: u32) -> Self {
        self.accept_threshold = threshold;
        self
    }

    /// Build the table.
    /// Returns an error if the threshold leaves no open states or exceeds
    /// [`MAX_ACCEPT_THRESHOLD`].
    pub fn build(self) -> Result<TransitionTable, BuildError> {
        let threshold = self.accept_threshold;
        if threshold == 0 {
            return Err(BuildError::ZeroThreshold);
        }
        if threshold > MAX_ACCEPT_THRESHOLD {
            return Err(BuildError::ThresholdTooLarge {
                threshold,
                max: MAX_ACCEPT_THRESHOLD,
            });
        }
        Ok(TransitionTable::generate(threshold))
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
