//! Error types for the planner core.
//!
//! Infeasibility is not represented here: a target length that no assembly
//! reaches is a regular [`Solution::Infeasible`](crate::solver::Solution)
//! result. The variants below are broken preconditions or arithmetic limits.

use thiserror::Error;

/// Errors raised while resolving a catalog or filling the cost table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// A rail names a connector symbol the alphabet does not declare.
    #[error("unknown connector '{symbol}'")]
    UnknownConnector { symbol: char },

    /// A rail with zero length or zero price reached the core.
    #[error("invalid rail #{index}: length {length} and price {price} must both be positive")]
    InvalidRail {
        index: usize,
        length: usize,
        price: u64,
    },

    /// A rail built from raw indices points past the end of the alphabet.
    #[error("rail #{index} uses connector index {connector}, but only {connectors} connectors exist")]
    ConnectorOutOfRange {
        index: usize,
        connector: usize,
        connectors: usize,
    },

    /// The alphabet has no symbols, so the table would have no columns.
    #[error("connector alphabet is empty")]
    EmptyAlphabet,

    /// The target is reachable, but its cheapest assembly costs more than
    /// `u64::MAX`.
    #[error("cheapest assembly of length {length} costs more than u64::MAX")]
    PriceOverflow { length: usize },

    /// `(target + 1) * connectors` cells cannot be counted or allocated.
    #[error("cost table for target {target} with {connectors} connectors is too large")]
    TableTooLarge { target: usize, connectors: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlannerError>;
