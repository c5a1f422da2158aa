use crate::solver::{Solver, Strategy};

/// Step-by-step [`Solver`] configuration.
///
/// ```
/// use railway_planner::{Solver, Strategy};
///
/// let solver = Solver::builder().with_strategy(Strategy::Rolling).build();
/// assert_eq!(solver.strategy(), Strategy::Rolling);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SolverBuilder {
    strategy: Option<Strategy>,
    block_size: Option<usize>,
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    /// Sweep block size for [`Strategy::Rolling`]; ignored by the full table.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        self.block_size = Some(block_size);
        self
    }
    pub fn build(self) -> Solver {
        Solver {
            strategy: self.strategy.unwrap_or_default(),
            block_size: self.block_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_full_table() {
        let solver = SolverBuilder::new().build();
        assert_eq!(solver, Solver::new());
        assert_eq!(solver.strategy(), Strategy::FullTable);
    }

    #[test]
    #[should_panic(expected = "block_size must be positive")]
    fn zero_block_size_panics() {
        let _ = SolverBuilder::new().with_block_size(0);
    }
}
