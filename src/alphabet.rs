//! Ordered connector alphabet with dense indices.
//!
//! Every connector symbol gets a stable index in `0..len()`, assigned in
//! declaration order. The cost table uses these indices as its column
//! coordinates, so the mapping never changes once built.

use std::collections::HashMap;

use crate::error::{PlannerError, Result};

/// Bidirectional symbol <-> index map for connector symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectorAlphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl ConnectorAlphabet {
    /// Build an alphabet from symbols in declaration order.
    ///
    /// A symbol that appears more than once keeps the index of its first
    /// occurrence; later repeats are dropped.
    ///
    /// # Errors
    /// Returns [`PlannerError::EmptyAlphabet`] if no symbol is given.
    pub fn new<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut alphabet = Self {
            symbols: Vec::new(),
            index: HashMap::new(),
        };
        for symbol in symbols {
            if !alphabet.index.contains_key(&symbol) {
                alphabet.index.insert(symbol, alphabet.symbols.len());
                alphabet.symbols.push(symbol);
            }
        }
        if alphabet.symbols.is_empty() {
            return Err(PlannerError::EmptyAlphabet);
        }
        Ok(alphabet)
    }

    /// Dense index of `symbol`.
    ///
    /// # Errors
    /// Returns [`PlannerError::UnknownConnector`] if the symbol was never
    /// declared.
    pub fn index_of(&self, symbol: char) -> Result<usize> {
        self.index
            .get(&symbol)
            .copied()
            .ok_or(PlannerError::UnknownConnector { symbol })
    }

    /// Symbol stored at `index`, if any.
    #[inline]
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Number of distinct connectors, `C`.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for an alphabet built through [`ConnectorAlphabet::new`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in index order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}
