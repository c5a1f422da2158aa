//! Rail assembly as a layered DP with a sliding window of rows.
//!
//! Layer `l` is the cost-table row for assembled length `l`. A row only reads
//! rows `l - len` for rail lengths `len`, so the frontier keeps the last
//! `W = min(max rail length, target)` rows (at least one) and evicts older
//! ones. Memory is `O(W * C)` instead of `O(target * C)`, and the cells are
//! exactly those of [`CostTable`](crate::table::CostTable).

use std::collections::VecDeque;
use std::convert::Infallible;

use crate::catalog::RailCatalog;
use crate::table::{fill_row, row_minimum, Cell};
use crate::traits::LayeredProblem;

/// Rolling-window view of a rail catalog and target length.
#[derive(Clone, Copy, Debug)]
pub struct RollingProblem<'a> {
    catalog: &'a RailCatalog,
    target: usize,
    window: usize,
}

/// The last `window` rows, oldest first.
#[derive(Clone, Debug)]
pub struct RollingFrontier {
    /// Length of the newest row.
    layer: usize,
    rows: VecDeque<Vec<Cell>>,
    spare: Vec<Cell>,
}

impl RollingFrontier {
    /// Length of the newest row held.
    #[inline]
    pub fn layer(&self) -> usize {
        self.layer
    }

    /// Newest row.
    pub fn newest(&self) -> &[Cell] {
        self.rows.back().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of rows held.
    #[inline]
    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    /// Row for `length`, if still inside the window.
    pub fn row(&self, length: usize) -> Option<&[Cell]> {
        let back = self.layer.checked_sub(length)?;
        let idx = self.rows.len().checked_sub(back + 1)?;
        self.rows.get(idx).map(Vec::as_slice)
    }
}

impl<'a> RollingProblem<'a> {
    pub fn new(catalog: &'a RailCatalog, target: usize) -> Self {
        let window = catalog.max_length().min(target).max(1);
        Self {
            catalog,
            target,
            window,
        }
    }

    /// Number of rows the frontier retains.
    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }
}

impl LayeredProblem for RollingProblem<'_> {
    type Frontier = RollingFrontier;
    type Cost = Cell;
    type Error = Infallible;

    fn num_layers(&self) -> usize {
        self.target
    }

    fn init_frontier(&self) -> Self::Frontier {
        let width = self.catalog.connector_count();
        // Rows are added as the sweep goes; a long rail must not reserve its
        // whole window up front.
        let mut rows = VecDeque::new();
        rows.push_back(vec![Cell::Cost(0); width]);
        RollingFrontier {
            layer: 0,
            rows,
            spare: vec![Cell::Unreachable; width],
        }
    }

    fn forward_step(&self, layer: usize, f: &mut Self::Frontier) -> Result<(), Infallible> {
        debug_assert_eq!(f.layer, layer, "frontier out of step with layer");
        let length = layer + 1;
        let mut next = std::mem::take(&mut f.spare);
        {
            let rows = &f.rows;
            let newest = rows.len() - 1;
            // Extension reads row `length - len` for 1 <= len <= window,
            // which sits `len - 1` rows behind the newest.
            fill_row(&mut next, self.catalog, length, |l, k| {
                rows[newest - (length - 1 - l)][k]
            });
        }
        f.rows.push_back(next);
        f.layer = length;
        if f.rows.len() > self.window {
            f.spare = f.rows.pop_front().unwrap_or_default();
        } else {
            f.spare = vec![Cell::Unreachable; self.catalog.connector_count()];
        }
        Ok(())
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost {
        row_minimum(frontier_t.newest())
    }
}
