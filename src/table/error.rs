//! Transition table errors.

use crate::core::{Coin, StateId};
use thiserror::Error;

/// Errors that can occur when querying a transition table.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("No transition defined from state {state} on coin {symbol}")]
    UndefinedTransition { state: StateId, symbol: Coin },
}

/// Errors that can occur when building a transition table.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Accept threshold must be at least 1. Call .accept_threshold(n) with n > 0")]
    ZeroThreshold,

    #[error("Accept threshold {threshold} exceeds the maximum of {max}")]
    ThresholdTooLarge { threshold: u32, max: u32 },
}
