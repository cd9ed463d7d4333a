//! Core automaton types.
//!
//! This module contains the value types the rest of the crate is built on:
//! - Coins, the validated input alphabet
//! - State identifiers and their classification
//! - Run history for a single coin session
//!
//! Nothing in this module performs I/O.

mod history;
mod state;
mod symbol;

pub use history::{Run, RunError};
pub use state::{StateId, StateKind};
pub use symbol::{Coin, SymbolError};
