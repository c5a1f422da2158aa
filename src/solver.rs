//! Solve entry points and the final row reduction.

use std::fmt;

use crate::alphabet::ConnectorAlphabet;
use crate::builder::SolverBuilder;
use crate::catalog::{Price, RailCatalog, RailRecord};
use crate::engine::SweepEngine;
use crate::error::{PlannerError, Result};
use crate::rolling::RollingProblem;
use crate::table::{Cell, CostTable};

/// Outcome of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Solution {
    /// Minimum total price of an assembly of exactly the target length.
    Optimal(Price),
    /// No sequence of rails sums exactly to the target length.
    Infeasible,
}

impl Solution {
    /// The optimal price, or `None` when infeasible.
    #[inline]
    pub fn price(self) -> Option<Price> {
        match self {
            Solution::Optimal(price) => Some(price),
            Solution::Infeasible => None,
        }
    }

    #[inline]
    pub fn is_feasible(self) -> bool {
        matches!(self, Solution::Optimal(_))
    }
}

impl Solution {
    /// Read the answer off the cheapest cell of row `target`.
    ///
    /// # Errors
    /// [`PlannerError::PriceOverflow`] if the target is reachable but even its
    /// cheapest assembly costs more than `u64::MAX`.
    pub fn from_cell(cell: Cell, target: usize) -> Result<Self> {
        match cell {
            Cell::Cost(price) => Ok(Solution::Optimal(price)),
            Cell::Unreachable => Ok(Solution::Infeasible),
            Cell::Overflow => Err(PlannerError::PriceOverflow { length: target }),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Optimal(price) => write!(f, "{price}"),
            Solution::Infeasible => f.write_str("infeasible"),
        }
    }
}

/// How the answer row is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Materialize the whole `(target + 1) x C` [`CostTable`].
    #[default]
    FullTable,
    /// Sweep with a [`RollingProblem`], keeping only the rows rails can reach
    /// back to.
    Rolling,
}

impl Strategy {
    pub fn label(self) -> &'static str {
        match self {
            Strategy::FullTable => "full",
            Strategy::Rolling => "rolling",
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "full" | "table" => Ok(Strategy::FullTable),
            "rolling" => Ok(Strategy::Rolling),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}

/// Configured solver. Holds no state between solves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Solver {
    pub(crate) strategy: Strategy,
    pub(crate) block_size: Option<usize>,
}

impl Solver {
    /// Solver with the default strategy ([`Strategy::FullTable`]).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SolverBuilder {
        SolverBuilder::new()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Minimum price of an assembly of exactly `target` units.
    ///
    /// A zero target is the empty assembly and costs 0 whatever the records
    /// contain; they are not resolved in that case.
    ///
    /// # Errors
    /// Returns the resolution errors of [`RailCatalog::resolve`], the size
    /// errors of [`CostTable::build`], and [`PlannerError::PriceOverflow`]
    /// when the cheapest assembly costs more than `u64::MAX`.
    pub fn solve(
        &self,
        target: usize,
        alphabet: &ConnectorAlphabet,
        records: &[RailRecord],
    ) -> Result<Solution> {
        if target == 0 {
            return Ok(Solution::Optimal(0));
        }
        let catalog = RailCatalog::resolve(alphabet, records)?;
        self.solve_catalog(target, &catalog)
    }

    /// Like [`solve`](Self::solve) for an already resolved catalog.
    pub fn solve_catalog(&self, target: usize, catalog: &RailCatalog) -> Result<Solution> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "solve",
            target,
            rails = catalog.len(),
            connectors = catalog.connector_count(),
            strategy = self.strategy.label()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        if target == 0 {
            return Ok(Solution::Optimal(0));
        }
        let best = match self.strategy {
            Strategy::FullTable => CostTable::build(target, catalog)?.cheapest(target),
            Strategy::Rolling => {
                let problem = RollingProblem::new(catalog, target);
                let engine = match self.block_size {
                    Some(b) => SweepEngine::with_block_size(problem, b),
                    None => SweepEngine::new(problem),
                };
                match engine.run() {
                    Ok(cell) => cell,
                    Err(never) => match never {},
                }
            }
        };
        let solution = Solution::from_cell(best, target)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(%solution, "solve finished");

        Ok(solution)
    }
}

/// Solve with the default [`Solver`].
///
/// ```
/// use railway_planner::{solve, ConnectorAlphabet, RailRecord, Solution};
///
/// let alphabet = ConnectorAlphabet::new(['A', 'B']).unwrap();
/// let rails = [
///     RailRecord::new('A', 'B', 3, 10),
///     RailRecord::new('B', 'A', 2, 5),
///     RailRecord::new('A', 'A', 5, 50),
/// ];
/// assert_eq!(solve(5, &alphabet, &rails), Ok(Solution::Optimal(15)));
/// assert_eq!(solve(1, &alphabet, &rails), Ok(Solution::Infeasible));
/// ```
pub fn solve(
    target: usize,
    alphabet: &ConnectorAlphabet,
    records: &[RailRecord],
) -> Result<Solution> {
    Solver::new().solve(target, alphabet, records)
}
