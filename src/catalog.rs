//! Rail segments and the validated catalog the cost table reads from.
//!
//! A [`RailRecord`] is the symbolic form handed over by the caller; a [`Rail`]
//! is the same segment with both connectors resolved to dense indices.
//! [`RailCatalog`] keeps rails in insertion order and an index from end
//! connector to the rails that end there, which is the only lookup the
//! recurrence needs.

use crate::alphabet::ConnectorAlphabet;
use crate::error::{PlannerError, Result};

/// Price of a rail or of a whole assembly.
pub type Price = u64;

/// A rail as described by the caller, with connector symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RailRecord {
    pub start: char,
    pub end: char,
    pub length: usize,
    pub price: Price,
}

impl RailRecord {
    pub fn new(start: char, end: char, length: usize, price: Price) -> Self {
        Self {
            start,
            end,
            length,
            price,
        }
    }
}

/// A rail resolved against a [`ConnectorAlphabet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rail {
    start: usize,
    end: usize,
    length: usize,
    price: Price,
}

impl Rail {
    /// Build a rail from connector indices.
    ///
    /// Connector indices are checked when the rail is pushed into a catalog,
    /// which knows the alphabet size.
    pub fn new(start: usize, end: usize, length: usize, price: Price) -> Self {
        Self {
            start,
            end,
            length,
            price,
        }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }
}

/// Flat, insertion-ordered rail collection grouped by end connector.
#[derive(Clone, Debug)]
pub struct RailCatalog {
    connectors: usize,
    rails: Vec<Rail>,
    /// by_end[k] = positions in `rails` of every rail whose end connector is k
    by_end: Vec<Vec<usize>>,
    max_length: usize,
}

impl RailCatalog {
    /// Empty catalog for an alphabet of `connectors` symbols.
    pub fn new(connectors: usize) -> Self {
        Self {
            connectors,
            rails: Vec::new(),
            by_end: vec![Vec::new(); connectors],
            max_length: 0,
        }
    }

    /// Resolve symbolic records against `alphabet`.
    ///
    /// # Errors
    /// - [`PlannerError::UnknownConnector`] if a record names an undeclared
    ///   symbol.
    /// - [`PlannerError::InvalidRail`] if a record has zero length or price.
    pub fn resolve(alphabet: &ConnectorAlphabet, records: &[RailRecord]) -> Result<Self> {
        let mut catalog = Self::new(alphabet.len());
        catalog.rails.reserve(records.len());
        for record in records {
            let start = alphabet.index_of(record.start)?;
            let end = alphabet.index_of(record.end)?;
            catalog.push(Rail::new(start, end, record.length, record.price))?;
        }
        Ok(catalog)
    }

    /// Admit one rail.
    ///
    /// # Errors
    /// - [`PlannerError::InvalidRail`] if length or price is zero.
    /// - [`PlannerError::ConnectorOutOfRange`] if either connector index is
    ///   not below [`connector_count`](Self::connector_count).
    pub fn push(&mut self, rail: Rail) -> Result<()> {
        let index = self.rails.len();
        // A zero-length rail would make a cell depend on itself.
        if rail.length == 0 || rail.price == 0 {
            return Err(PlannerError::InvalidRail {
                index,
                length: rail.length,
                price: rail.price,
            });
        }
        for connector in [rail.start, rail.end] {
            if connector >= self.connectors {
                return Err(PlannerError::ConnectorOutOfRange {
                    index,
                    connector,
                    connectors: self.connectors,
                });
            }
        }
        self.by_end[rail.end].push(index);
        self.max_length = self.max_length.max(rail.length);
        self.rails.push(rail);
        Ok(())
    }

    /// Number of connectors `C` the catalog was built for.
    #[inline]
    pub fn connector_count(&self) -> usize {
        self.connectors
    }

    /// Length of the longest rail, or 0 for an empty catalog.
    #[inline]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rails.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rails.is_empty()
    }

    /// Rails in insertion order.
    pub fn rails(&self) -> &[Rail] {
        &self.rails
    }

    /// Rails whose end connector is `connector`, in insertion order.
    ///
    /// # Panics
    /// Panics if `connector >= connector_count()`.
    pub fn ending_at(&self, connector: usize) -> impl Iterator<Item = &Rail> + '_ {
        self.by_end[connector].iter().map(move |&i| &self.rails[i])
    }
}
