//! Automaton engine.
//!
//! The engine owns a run and a shared transition table and exposes a single
//! mutating operation, [`CarWash::insert`]. It performs no I/O; every
//! insertion returns an [`Insertion`] record that callers may print or log.

mod machine;
mod outcome;

pub use machine::CarWash;
pub use outcome::{Insertion, Outcome, Refund, Ticket};
