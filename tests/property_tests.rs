//! Property-based tests for the transition table and the engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use carwash::core::{Coin, StateId, SymbolError};
use carwash::engine::{CarWash, Outcome, Refund};
use carwash::table::TransitionTable;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_coin()(variant in 0..3u8) -> Coin {
        match variant {
            0 => Coin::One,
            1 => Coin::Two,
            _ => Coin::Five,
        }
    }
}

prop_compose! {
    fn declared_state()(value in 0..=21u32) -> StateId {
        StateId::new(value)
    }
}

prop_compose! {
    fn open_state()(value in 0..20u32) -> StateId {
        StateId::new(value)
    }
}

/// Keep coins while the running total stays at or below `limit`.
fn bounded_prefix(coins: &[Coin], limit: u32) -> (Vec<Coin>, u32) {
    let mut total = 0;
    let mut prefix = Vec::new();
    for coin in coins {
        if total + coin.value() > limit {
            break;
        }
        total += coin.value();
        prefix.push(*coin);
    }
    (prefix, total)
}

prop_compose! {
    /// Coin sequences that sum to exactly the price of a wash.
    fn exact_payment()(coins in prop::collection::vec(arbitrary_coin(), 0..25)) -> Vec<Coin> {
        let (mut prefix, total) = bounded_prefix(&coins, 20);
        prefix.extend(std::iter::repeat(Coin::One).take((20 - total) as usize));
        prefix
    }
}

prop_compose! {
    /// Coin sequences whose last coin pushes the total past the price.
    fn overpayment()(
        coins in prop::collection::vec(arbitrary_coin(), 0..25),
        last in prop_oneof![Just(Coin::Two), Just(Coin::Five)],
    ) -> Vec<Coin> {
        let (mut prefix, total) = bounded_prefix(&coins, 19);
        let mut total = total;
        while total + last.value() <= 20 {
            prefix.push(Coin::One);
            total += 1;
        }
        prefix.push(last);
        prefix
    }
}

proptest! {
    #[test]
    fn lookup_is_total_and_bounded(state in declared_state(), coin in arbitrary_coin()) {
        let table = TransitionTable::standard();
        let next = table.lookup(state, coin);

        prop_assert!(next.is_ok());
        prop_assert!(next.unwrap() <= StateId::new(21));
    }

    #[test]
    fn terminal_states_absorb(coin in arbitrary_coin()) {
        let table = TransitionTable::standard();

        prop_assert_eq!(table.lookup(StateId::new(20), coin), Ok(StateId::new(20)));
        prop_assert_eq!(table.lookup(StateId::new(21), coin), Ok(StateId::new(21)));
    }

    #[test]
    fn open_states_strictly_increase(state in open_state(), coin in arbitrary_coin()) {
        let table = TransitionTable::standard();
        let next = table.lookup(state, coin).unwrap();

        prop_assert!(next > state);
    }

    #[test]
    fn lookup_is_deterministic(state in declared_state(), coin in arbitrary_coin()) {
        let table = TransitionTable::standard();
        prop_assert_eq!(table.lookup(state, coin), table.lookup(state, coin));
    }

    #[test]
    fn exact_payment_issues_ticket(coins in exact_payment()) {
        let mut machine = CarWash::standard();
        let (last, rest) = coins.split_last().unwrap();

        for coin in rest {
            prop_assert_eq!(machine.insert(*coin).outcome, Outcome::Continuing);
        }
        let step = machine.insert(*last);

        prop_assert!(matches!(step.outcome, Outcome::Ticket(_)));
        prop_assert_eq!(step.state, StateId::new(20));
        prop_assert_eq!(step.path.len(), coins.len() + 1);
    }

    #[test]
    fn overpayment_refunds_rejecting_state(coins in overpayment()) {
        let mut machine = CarWash::standard();
        let (last, rest) = coins.split_last().unwrap();

        for coin in rest {
            prop_assert_eq!(machine.insert(*coin).outcome, Outcome::Continuing);
        }
        let step = machine.insert(*last);

        prop_assert_eq!(step.outcome, Outcome::Refund(Refund { total: 21 }));
    }

    #[test]
    fn history_tracks_current_state(coins in prop::collection::vec(arbitrary_coin(), 1..40)) {
        let mut machine = CarWash::standard();

        for coin in coins {
            let step = machine.insert(coin);
            prop_assert_eq!(step.path.last().copied(), Some(step.state));
            prop_assert_eq!(step.path.first().copied(), Some(StateId::INITIAL));
            prop_assert_eq!(machine.history().current(), machine.current_state());

            if step.outcome.is_terminal() {
                prop_assert_eq!(machine.current_state(), StateId::INITIAL);
                prop_assert_eq!(machine.history().path(), &[StateId::INITIAL]);
            } else {
                prop_assert_eq!(machine.history().path(), step.path.as_slice());
            }
        }
    }

    #[test]
    fn coin_rejects_values_outside_alphabet(value in any::<i64>()) {
        prop_assume!(![1, 2, 5].contains(&value));
        prop_assert_eq!(Coin::try_from(value), Err(SymbolError::InvalidSymbol(value)));
    }

    #[test]
    fn coin_round_trips_face_value(coin in arbitrary_coin()) {
        let value = i64::from(coin.value());
        prop_assert_eq!(Coin::try_from(value), Ok(coin));
    }
}
