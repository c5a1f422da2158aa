//! Minimum-cost table over (assembled length, open connector).
//!
//! Cell `(l, k)` holds the cheapest price of an assembly of exactly `l` units
//! whose last rail ends at connector `k`. Row 0 is all zeros: nothing has been
//! built yet, so any first rail may start from any connector.
//!
//! For `l > 0` a rail `r` ending at `k` contributes to `(l, k)` in one of two
//! ways:
//! - **direct**: `r.length == l`, the rail is the whole assembly;
//! - **extension**: `r.length < l` and `(l - r.length, r.start)` is reachable,
//!   the rail is appended to that cheaper prefix.
//!
//! A candidate whose sum does not fit in `u64` is [`Cell::Overflow`]. It still
//! counts as reachable but loses to every representable price, so an overflow
//! somewhere in the table never hides a cheaper assembly.
//!
//! Rows depend only on strictly shorter rows, so the table is filled in
//! increasing `l`. Cells of one row are independent of each other, which the
//! `parallel` feature exploits.

use crate::catalog::{Price, RailCatalog};
use crate::error::{PlannerError, Result};

/// One table cell.
///
/// Variants are declared cheapest first, so the derived ordering ranks any
/// price below `Overflow` and `Overflow` below `Unreachable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    /// Cheapest price of an assembly reaching this state.
    Cost(Price),
    /// Reachable, but every assembly here costs more than `u64::MAX`.
    Overflow,
    /// No assembly reaches this state.
    Unreachable,
}

impl Cell {
    /// The price, if reachable and representable.
    #[inline]
    pub fn price(self) -> Option<Price> {
        match self {
            Cell::Cost(price) => Some(price),
            Cell::Overflow | Cell::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_reachable(self) -> bool {
        self != Cell::Unreachable
    }

    /// Append a rail costing `price` to the assemblies of this cell.
    #[inline]
    pub(crate) fn extend(self, price: Price) -> Cell {
        match self {
            Cell::Cost(prefix) => prefix.checked_add(price).map_or(Cell::Overflow, Cell::Cost),
            other => other,
        }
    }
}

/// Cheapest way to reach `length` ending at `connector`.
///
/// `earlier(l, k)` must return the finished cell `(l, k)` for every `l` in
/// `length - catalog.max_length() .. length`.
pub(crate) fn cell_cost<F>(
    catalog: &RailCatalog,
    length: usize,
    connector: usize,
    earlier: F,
) -> Cell
where
    F: Fn(usize, usize) -> Cell,
{
    let mut best = Cell::Unreachable;
    for rail in catalog.ending_at(connector) {
        let candidate = if rail.length() == length {
            Cell::Cost(rail.price())
        } else if rail.length() < length {
            earlier(length - rail.length(), rail.start()).extend(rail.price())
        } else {
            continue;
        };
        best = best.min(candidate);
    }
    best
}

/// Fill `row` (row `length`, one cell per connector) from earlier rows.
#[cfg(feature = "parallel")]
pub(crate) fn fill_row<F>(row: &mut [Cell], catalog: &RailCatalog, length: usize, earlier: F)
where
    F: Fn(usize, usize) -> Cell + Sync,
{
    use rayon::prelude::*;

    row.par_iter_mut()
        .enumerate()
        .for_each(|(connector, cell)| {
            *cell = cell_cost(catalog, length, connector, &earlier);
        });
}

/// Fill `row` (row `length`, one cell per connector) from earlier rows.
#[cfg(not(feature = "parallel"))]
pub(crate) fn fill_row<F>(row: &mut [Cell], catalog: &RailCatalog, length: usize, earlier: F)
where
    F: Fn(usize, usize) -> Cell,
{
    for (connector, cell) in row.iter_mut().enumerate() {
        *cell = cell_cost(catalog, length, connector, &earlier);
    }
}

/// Cheapest cell of a row.
#[inline]
pub(crate) fn row_minimum(row: &[Cell]) -> Cell {
    row.iter().copied().min().unwrap_or(Cell::Unreachable)
}

/// Fully populated `(target + 1) x C` cost table, stored row-major.
#[derive(Clone, Debug)]
pub struct CostTable {
    target: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl CostTable {
    /// Build the table for lengths `0..=target`.
    ///
    /// Storage for every row is allocated before the first row is filled.
    ///
    /// Sums beyond `u64` are stored as [`Cell::Overflow`]; building never
    /// fails because of them.
    ///
    /// # Errors
    /// [`PlannerError::TableTooLarge`] if `(target + 1) * C` cells cannot be
    /// counted in `usize` or allocated.
    pub fn build(target: usize, catalog: &RailCatalog) -> Result<Self> {
        let width = catalog.connector_count();
        let too_large = PlannerError::TableTooLarge {
            target,
            connectors: width,
        };
        let size = target
            .checked_add(1)
            .and_then(|rows| rows.checked_mul(width))
            .ok_or_else(|| too_large.clone())?;

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("cost_table_build", target, connectors = width);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut cells: Vec<Cell> = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| too_large)?;
        cells.resize(size, Cell::Unreachable);
        cells[..width].fill(Cell::Cost(0));

        for length in 1..=target {
            let (done, rest) = cells.split_at_mut(length * width);
            let done: &[Cell] = done;
            fill_row(&mut rest[..width], catalog, length, |l, k| done[l * width + k]);
        }

        Ok(Self {
            target,
            width,
            cells,
        })
    }

    /// Largest length covered by the table.
    #[inline]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Number of columns `C`.
    #[inline]
    pub fn connector_count(&self) -> usize {
        self.width
    }

    /// Cell `(length, connector)`.
    ///
    /// # Panics
    /// Panics if `length > target()` or `connector >= connector_count()`.
    #[inline]
    pub fn cell(&self, length: usize, connector: usize) -> Cell {
        assert!(connector < self.width, "connector index out of range");
        self.row(length)[connector]
    }

    /// Row `length`, one cell per connector.
    ///
    /// # Panics
    /// Panics if `length > target()`.
    pub fn row(&self, length: usize) -> &[Cell] {
        assert!(length <= self.target, "length beyond table target");
        let start = length * self.width;
        &self.cells[start..start + self.width]
    }

    /// Cheapest cell at `length` over all connectors.
    ///
    /// # Panics
    /// Panics if `length > target()`.
    pub fn cheapest(&self, length: usize) -> Cell {
        row_minimum(self.row(length))
    }
}
