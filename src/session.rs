//! Console session around a [`CarWash`] machine.
//!
//! The console reads whitespace-separated tokens, turns each into a coin and
//! feeds it to the machine until a terminal outcome is reached. Malformed
//! tokens are discarded silently; integers outside the alphabet are reported
//! and the prompt is repeated.

use crate::core::{Coin, SymbolError};
use crate::display::TablePrinter;
use crate::engine::{CarWash, Insertion, Outcome};
use crate::table::TransitionTable;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// Prompt written before every token is read.
pub const PROMPT: &str = "Insert coin: ";

/// Errors raised while turning a console token into a coin.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    Malformed(String),

    #[error(transparent)]
    InvalidSymbol(#[from] SymbolError),
}

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// How a session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The machine reached a terminal state.
    Finished(Outcome),

    /// Input ran out before a terminal state was reached.
    InputClosed,
}

/// Parse a single console token into a coin.
///
/// # Example
///
/// ```rust
/// use carwash::core::{Coin, SymbolError};
/// use carwash::session::{parse_coin, InputError};
///
/// assert_eq!(parse_coin("5"), Ok(Coin::Five));
/// assert_eq!(
///     parse_coin("3"),
///     Err(InputError::InvalidSymbol(SymbolError::InvalidSymbol(3)))
/// );
/// assert_eq!(parse_coin("abc"), Err(InputError::Malformed("abc".into())));
/// ```
pub fn parse_coin(token: &str) -> Result<Coin, InputError> {
    let value: i64 = token
        .parse()
        .map_err(|_| InputError::Malformed(token.to_string()))?;
    Ok(Coin::try_from(value)?)
}

/// Interactive console over arbitrary input and output streams.
///
/// Tokens left over on a line after a session finishes are kept for the
/// next session.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Write the banner and the rendered transition table.
    pub fn print_table(&mut self, table: &TransitionTable) -> Result<(), SessionError> {
        let matrix = table.as_matrix();
        writeln!(self.output, "Transition table:")?;
        write!(self.output, "{}", TablePrinter::new(&matrix))?;
        Ok(())
    }

    /// Feed coins from the console into `machine` until one session ends.
    pub fn run_session(&mut self, machine: &mut CarWash) -> Result<SessionEnd, SessionError> {
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let Some(token) = self.next_token()? else {
                writeln!(self.output)?;
                return Ok(SessionEnd::InputClosed);
            };

            let coin = match parse_coin(&token) {
                Ok(coin) => coin,
                Err(InputError::Malformed(token)) => {
                    debug!(token = %token, "discarding malformed input");
                    continue;
                }
                Err(InputError::InvalidSymbol(err)) => {
                    warn!(error = %err, "coin rejected");
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            let insertion = machine.insert(coin);
            self.report(&insertion)?;

            if let Some(message) = insertion.outcome.message() {
                writeln!(self.output, "{message}")?;
                return Ok(SessionEnd::Finished(insertion.outcome));
            }
        }
    }

    /// Consume the console, returning its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn report(&mut self, insertion: &Insertion) -> Result<(), SessionError> {
        let state = insertion.state;
        writeln!(
            self.output,
            "Current automaton state: {state}, current total value: {}",
            state.value()
        )?;

        if insertion.outcome.is_terminal() {
            writeln!(self.output, "Final automaton state: {state}")?;
            writeln!(self.output, "Total value inserted: {}", state.value())?;
            writeln!(self.output, "State change path: {}", insertion.path_string())?;
        }
        Ok(())
    }

    fn next_token(&mut self) -> Result<Option<String>, SessionError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
