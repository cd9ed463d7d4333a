//! Bordered text rendering of a transition matrix.
//!
//! Every cell is right-aligned to the widest cell in the whole grid and a
//! horizontal rule is drawn above the first row and below every row.

use std::fmt;

const BORDER_KNOT: char = '+';
const BORDER_HORIZONTAL: char = '-';
const BORDER_VERTICAL: char = '|';

/// Renders a grid of strings as a bordered table.
///
/// # Example
///
/// ```rust
/// use carwash::display::TablePrinter;
///
/// let matrix = vec![
///     vec!["δ".to_string(), "1".to_string()],
///     vec!["q0".to_string(), "q1".to_string()],
/// ];
///
/// let rendered = TablePrinter::new(&matrix).to_string();
/// assert_eq!(
///     rendered,
///     "+--+--+\n| δ| 1|\n+--+--+\n|q0|q1|\n+--+--+\n"
/// );
/// ```
pub struct TablePrinter<'a> {
    rows: &'a [Vec<String>],
}

impl<'a> TablePrinter<'a> {
    pub fn new(rows: &'a [Vec<String>]) -> Self {
        Self { rows }
    }

    fn columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn cell_width(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .map(|cell| cell.chars().count())
            .max()
            .unwrap_or(0)
    }

    fn write_border(&self, f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
        let segment: String = std::iter::repeat(BORDER_HORIZONTAL)
            .take(width)
            .chain(std::iter::once(BORDER_KNOT))
            .collect();
        writeln!(f, "{BORDER_KNOT}{}", segment.repeat(self.columns()))
    }
}

impl fmt::Display for TablePrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return Ok(());
        }

        let width = self.cell_width();
        self.write_border(f, width)?;
        for row in self.rows {
            write!(f, "{BORDER_VERTICAL}")?;
            for cell in row {
                // Pad by characters, not bytes, so `δ` lines up.
                let padding = width - cell.chars().count();
                write!(f, "{}{cell}{BORDER_VERTICAL}", " ".repeat(padding))?;
            }
            writeln!(f)?;
            self.write_border(f, width)?;
        }
        Ok(())
    }
}
