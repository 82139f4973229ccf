//! Truth-table construction and rendering

use super::eval::evaluate;
use super::models::all_models;
use crate::formula::Formula;
use log::trace;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Configuration for rendering truth tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableConfig {
    /// Cell text for a true value
    pub true_symbol: Arc<str>,
    /// Cell text for a false value
    pub false_symbol: Arc<str>,
    /// Write the `|---|` row between header and body
    pub header_separator: bool,
}

impl Default for TruthTableConfig {
    fn default() -> Self {
        TruthTableConfig {
            true_symbol: Arc::from("T"),
            false_symbol: Arc::from("F"),
            header_separator: true,
        }
    }
}

impl TruthTableConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration rendering `1` and `0` instead of `T` and `F`
    pub fn binary() -> Self {
        TruthTableConfig {
            true_symbol: Arc::from("1"),
            false_symbol: Arc::from("0"),
            ..Self::default()
        }
    }

    fn symbol(&self, value: bool) -> &str {
        if value {
            &self.true_symbol
        } else {
            &self.false_symbol
        }
    }
}

/// A fully evaluated truth table
///
/// One column per variable of the formula, in sorted order, followed by the
/// formula's own column. Rows follow [`all_models`] order.
///
/// # Examples
///
/// ```
/// use propositions::{Formula, TruthTable};
///
/// # fn main() -> Result<(), propositions::FormulaParseError> {
/// let table = TruthTable::new(&Formula::parse("(p->q)")?);
/// assert_eq!(table.values(), [true, true, false, true]);
/// assert_eq!(
///     table.to_string(),
///     "| p | q | (p->q) |\n\
///      |---|---|--------|\n\
///      | F | F | T      |\n\
///      | F | T | T      |\n\
///      | T | F | F      |\n\
///      | T | T | T      |\n"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    header: Arc<str>,
    variables: Vec<Arc<str>>,
    rows: Vec<(Vec<bool>, bool)>,
}

impl TruthTable {
    /// Evaluate `formula` under every model of its variables
    pub fn new(formula: &Formula) -> Self {
        let variables: Vec<Arc<str>> = formula.variables().iter().cloned().collect();
        let rows: Vec<(Vec<bool>, bool)> = all_models(&variables)
            .map(|model| {
                let inputs = variables.iter().map(|v| model[v]).collect();
                (inputs, evaluate(formula, &model))
            })
            .collect();
        trace!("truth table for {}: {} rows", formula, rows.len());
        TruthTable {
            header: Arc::from(formula.as_str()),
            variables,
            rows,
        }
    }

    /// Variable columns, sorted
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// Rows as (variable values, formula value)
    pub fn rows(&self) -> &[(Vec<bool>, bool)] {
        &self.rows
    }

    /// The formula's column, top to bottom
    pub fn values(&self) -> Vec<bool> {
        self.rows.iter().map(|(_, value)| *value).collect()
    }

    /// Write the table to any `Write` implementation
    pub fn write_table<W: Write>(&self, writer: &mut W, config: &TruthTableConfig) -> io::Result<()> {
        let mut rendered = String::new();
        self.render(&mut rendered, config)
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "failed to format truth table"))?;
        writer.write_all(rendered.as_bytes())
    }

    fn render<F: fmt::Write>(&self, out: &mut F, config: &TruthTableConfig) -> fmt::Result {
        let headers: Vec<&str> = self
            .variables
            .iter()
            .map(|v| &**v)
            .chain(std::iter::once(&*self.header))
            .collect();
        let cell_width = config.true_symbol.len().max(config.false_symbol.len());
        let widths: Vec<usize> = headers
            .iter()
            .map(|header| header.len().max(cell_width).max(1))
            .collect();

        write_row(out, &headers, &widths)?;
        if config.header_separator {
            for width in &widths {
                write!(out, "|{}", "-".repeat(width + 2))?;
            }
            writeln!(out, "|")?;
        }
        for (inputs, value) in &self.rows {
            let cells: Vec<&str> = inputs
                .iter()
                .chain(std::iter::once(value))
                .map(|v| config.symbol(*v))
                .collect();
            write_row(out, &cells, &widths)?;
        }
        Ok(())
    }
}

fn write_row<F: fmt::Write>(out: &mut F, cells: &[&str], widths: &[usize]) -> fmt::Result {
    for (cell, width) in cells.iter().zip(widths) {
        write!(out, "| {:<width$} ", cell, width = *width)?;
    }
    writeln!(out, "|")
}

/// Display renders the table with the default configuration
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, &TruthTableConfig::default())
    }
}

/// Write the truth table of `formula` to `writer`
pub fn write_truth_table<W: Write>(
    formula: &Formula,
    config: &TruthTableConfig,
    writer: &mut W,
) -> io::Result<()> {
    TruthTable::new(formula).write_table(writer, config)
}

/// Print the truth table of `formula` to standard output
pub fn print_truth_table(formula: &Formula) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_truth_table(formula, &TruthTableConfig::default(), &mut handle)
}
