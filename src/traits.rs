//! Core trait for layered dynamic programs driven by the sweep engine.
//!
//! A layered DP has layers `0..=T`. The engine keeps one *frontier*, the
//! compact state needed to produce the next layer, and advances it one layer
//! at a time:
//! - layer 0 comes from [`LayeredProblem::init_frontier`],
//! - `forward_step(i, frontier)` turns the frontier at layer `i` into the
//!   frontier at layer `i + 1`,
//! - after `T` steps the objective is read off the final frontier.
//!
//! A frontier may hold more than one layer. The rail problem, for example,
//! keeps the last `W` rows because a rail of length `W` reaches back that far.

/// A fixed layered DP instance.
pub trait LayeredProblem {
    /// Everything the next layer depends on.
    type Frontier;

    /// Objective read from the final frontier.
    type Cost;

    /// Failure raised while stepping. Problems that cannot fail use
    /// [`Infallible`](std::convert::Infallible).
    type Error;

    /// Number of steps `T`.
    fn num_layers(&self) -> usize;

    /// Frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Advance `frontier` in place from `layer` to `layer + 1`.
    ///
    /// Must only read `frontier` and fixed problem data.
    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier)
        -> Result<(), Self::Error>;

    /// Advance `frontier` across the block of layers `[a, b)`.
    ///
    /// The default applies `forward_step` for each layer in turn;
    /// implementations may batch work across the block.
    fn advance_block(
        &self,
        a: usize,
        b: usize,
        frontier: &mut Self::Frontier,
    ) -> Result<(), Self::Error> {
        for layer in a..b {
            self.forward_step(layer, frontier)?;
        }
        Ok(())
    }

    /// Objective at layer `T`.
    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost;
}
