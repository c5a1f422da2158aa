//! Line-based planner input.
//!
//! ```text
//! 5            <- target length, non-negative
//! A,B          <- connector symbols, one character each
//! A,B,3,10     <- rails: start,end,length,price (one per line)
//! B,A,2,5
//! ```
//!
//! Fields are separated by commas; empty fields are skipped, so `A,,B` is the
//! same as `A,B`. Line endings may be `\n` or `\r\n`. Fields after the fourth
//! on a rail line are ignored. Blank lines at the end of the file are skipped;
//! a blank line between rails is invalid. Validation stops at the first bad
//! line, whose 1-based number is reported.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::alphabet::ConnectorAlphabet;
use crate::catalog::{Price, RailRecord};

/// Errors in the textual input.
///
/// The messages are the exact texts written to the output file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("File does not exist.")]
    Unreadable(#[source] io::Error),

    #[error("File is empty.")]
    Empty,

    #[error("Invalid input in line: {line}.")]
    InvalidLine { line: usize },
}

/// A fully validated planner instance.
#[derive(Clone, Debug)]
pub struct PlannerInput {
    pub target: usize,
    pub alphabet: ConnectorAlphabet,
    pub rails: Vec<RailRecord>,
}

impl PlannerInput {
    /// Read and parse the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let text = std::fs::read_to_string(path).map_err(InputError::Unreadable)?;
        Self::parse(&text)
    }

    /// Parse planner input from text.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut lines = text.lines();

        let first = lines.next().ok_or(InputError::Empty)?;
        let target = first
            .trim()
            .parse::<usize>()
            .map_err(|_| InputError::InvalidLine { line: 1 })?;

        let second = lines.next().ok_or(InputError::InvalidLine { line: 2 })?;
        let alphabet = parse_connectors(second).ok_or(InputError::InvalidLine { line: 2 })?;

        let rail_lines: Vec<&str> = lines.collect();
        let used = rail_lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .map_or(0, |last| last + 1);

        let mut rails = Vec::with_capacity(used);
        for (offset, line) in rail_lines[..used].iter().enumerate() {
            let number = offset + 3;
            let rail = parse_rail(line, &alphabet).ok_or(InputError::InvalidLine { line: number })?;
            rails.push(rail);
        }

        Ok(Self {
            target,
            alphabet,
            rails,
        })
    }
}

fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split([',', '\r']).filter(|field| !field.is_empty())
}

fn single_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

fn parse_connectors(line: &str) -> Option<ConnectorAlphabet> {
    let symbols = fields(line).map(single_char).collect::<Option<Vec<char>>>()?;
    ConnectorAlphabet::new(symbols).ok()
}

fn parse_rail(line: &str, alphabet: &ConnectorAlphabet) -> Option<RailRecord> {
    let mut fields = fields(line);
    let start = single_char(fields.next()?)?;
    let end = single_char(fields.next()?)?;
    let length = fields.next()?.parse::<usize>().ok().filter(|&l| l > 0)?;
    let price = fields.next()?.parse::<Price>().ok().filter(|&p| p > 0)?;
    if !alphabet.contains(start) || !alphabet.contains(end) {
        return None;
    }
    Some(RailRecord::new(start, end, length, price))
}
