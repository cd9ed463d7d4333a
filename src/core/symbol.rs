//! The input alphabet: coin face values accepted by the machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when raw input is turned into a [`Coin`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SymbolError {
    #[error("coin face value {0} is not accepted")]
    InvalidSymbol(i64),
}

/// A single symbol of the automaton's input alphabet.
///
/// The only way to obtain a `Coin` from an integer is [`Coin::try_from`],
/// so every coin that reaches the engine is already valid.
///
/// # Example
///
/// ```rust
/// use carwash::core::{Coin, SymbolError};
///
/// let coin = Coin::try_from(5i64).unwrap();
/// assert_eq!(coin, Coin::Five);
/// assert_eq!(coin.value(), 5);
///
/// assert_eq!(Coin::try_from(3i64), Err(SymbolError::InvalidSymbol(3)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub enum Coin {
    One,
    Two,
    Five,
}

impl Coin {
    /// Every coin, in table column order.
    pub const ALL: [Coin; 3] = [Coin::One, Coin::Two, Coin::Five];

    /// Face value of the coin.
    pub const fn value(self) -> u32 {
        match self {
            Coin::One => 1,
            Coin::Two => 2,
            Coin::Five => 5,
        }
    }

    pub(crate) const fn column(self) -> usize {
        match self {
            Coin::One => 0,
            Coin::Two => 1,
            Coin::Five => 2,
        }
    }
}

impl TryFrom<i64> for Coin {
    type Error = SymbolError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Coin::One),
            2 => Ok(Coin::Two),
            5 => Ok(Coin::Five),
            other => Err(SymbolError::InvalidSymbol(other)),
        }
    }
}

impl From<Coin> for u32 {
    fn from(coin: Coin) -> Self {
        coin.value()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_values_round_trip() {
        for value in [1i64, 2, 5] {
            let coin = Coin::try_from(value).unwrap();
            assert_eq!(i64::from(coin.value()), value);
        }
    }

    #[test]
    fn rejects_values_outside_alphabet() {
        for value in [0i64, 3, 4, 6, 10, -1, -5] {
            assert_eq!(Coin::try_from(value), Err(SymbolError::InvalidSymbol(value)));
        }
    }

    #[test]
    fn error_names_offending_value() {
        let err = Coin::try_from(4i64).unwrap_err();
        assert_eq!(err.to_string(), "coin face value 4 is not accepted");
    }

    #[test]
    fn columns_follow_alphabet_order() {
        let columns: Vec<usize> = Coin::ALL.iter().map(|c| c.column()).collect();
        assert_eq!(columns, vec![0, 1, 2]);
    }

    #[test]
    fn deserialization_validates_face_value() {
        let coin: Coin = serde_json::from_str("2").unwrap();
        assert_eq!(coin, Coin::Two);
        assert_eq!(serde_json::to_string(&coin).unwrap(), "2");

        assert!(serde_json::from_str::<Coin>("3").is_err());
    }
}
