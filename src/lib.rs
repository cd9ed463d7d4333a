//! Carwash: a deterministic finite automaton for a coin-operated car wash
//!
//! Coins of face value 1, 2 or 5 are inserted one at a time. The automaton
//! state is the accumulated value; reaching the price of a wash exactly
//! issues a ticket, overshooting it refunds the inserted amount. Either
//! outcome resets the machine for the next customer.
//!
//! # Core Concepts
//!
//! - **Coin**: the validated input alphabet, the only entry point for raw input
//! - **Transition table**: an immutable, inspectable (state, coin) → state mapping
//! - **Engine**: owns the current run and classifies every insertion
//!
//! Console input and table rendering live in [`session`] and [`display`] and
//! only talk to the core through its public operations.
//!
//! # Example
//!
//! ```rust
//! use carwash::core::Coin;
//! use carwash::engine::{CarWash, Outcome, Refund};
//!
//! let mut machine = CarWash::standard();
//!
//! for value in [5i64, 5, 5, 2] {
//!     let coin = Coin::try_from(value).unwrap();
//!     assert_eq!(machine.insert(coin).outcome, Outcome::Continuing);
//! }
//!
//! let step = machine.insert(Coin::Five);
//! assert_eq!(step.outcome, Outcome::Refund(Refund { total: 21 }));
//! ```

pub mod core;
pub mod display;
pub mod engine;
pub mod session;
pub mod table;

// Re-export commonly used types
pub use crate::core::{Coin, Run, RunError, StateId, StateKind, SymbolError};
pub use engine::{CarWash, Insertion, Outcome, Refund, Ticket};
pub use table::{TableError, TransitionTable};
