//! Generic forward sweep over a layered DP.
//!
//! The engine advances a single frontier from layer 0 to layer `T` in blocks
//! of layers. Only the frontier is live, so memory is bounded by the frontier
//! width rather than by `T`. Blocks set the granularity of the trace spans
//! emitted under the `tracing` feature.
//!
//! The engine is generic over implementations of [`LayeredProblem`].

use crate::traits::LayeredProblem;
use crate::utils::{block_count, default_block_size};

/// Forward-sweep engine for a problem instance `P`.
///
/// ```
/// use railway_planner::{Cell, ConnectorAlphabet, RailCatalog, RailRecord, SweepEngine};
/// use railway_planner::rolling::RollingProblem;
///
/// let alphabet = ConnectorAlphabet::new(['A']).unwrap();
/// let catalog = RailCatalog::resolve(&alphabet, &[RailRecord::new('A', 'A', 4, 7)]).unwrap();
/// let engine = SweepEngine::new(RollingProblem::new(&catalog, 8));
/// assert_eq!(engine.run(), Ok(Cell::Cost(14)));
/// ```
pub struct SweepEngine<P: LayeredProblem> {
    problem: P,
    block_size: usize,
}

impl<P: LayeredProblem> SweepEngine<P> {
    /// Create an engine that traces about `sqrt(T)` blocks of `sqrt(T)` layers.
    pub fn new(problem: P) -> Self {
        let t = problem.num_layers().max(1);
        let b = default_block_size(t).max(1);
        Self::with_block_size(problem, b)
    }

    /// Create an engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Sweep every block and return the frontier at layer `T`.
    pub fn run_to_frontier(&self) -> Result<P::Frontier, P::Error> {
        let t = self.problem.num_layers();
        let b = self.block_size;
        let mut frontier = self.problem.init_frontier();

        for k in 0..block_count(t, b) {
            let start = k * b;
            let end = start.saturating_add(b).min(t);
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("advance_block", block = k, start, end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.problem.advance_block(start, end, &mut frontier)?;
        }
        Ok(frontier)
    }

    /// Sweep to layer `T` and extract the objective.
    pub fn run(&self) -> Result<P::Cost, P::Error> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "sweep_run",
            layers = self.problem.num_layers(),
            block_size = self.block_size
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let frontier_t = self.run_to_frontier()?;
        Ok(self.problem.extract_cost(&frontier_t))
    }
}
