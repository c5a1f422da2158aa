//! Railway planner: cheapest rail assembly of an exact length.
//!
//! Given a catalog of rail segments, each with a length, a price, a start
//! connector and an end connector, this crate finds the minimum total price of
//! a chain of segments whose lengths sum exactly to a target length, where
//! each segment starts at the connector the previous one ended on.
//!
//! ## Core idea
//! 1. Resolve connector symbols to dense indices ([`ConnectorAlphabet`]).
//! 2. Validate rails and group them by end connector ([`RailCatalog`]).
//! 3. Fill a `(length, connector)` table of cheapest prices bottom-up
//!    ([`CostTable`]) and take the minimum of the target row ([`Solver`]).
//!
//! Unreachable cells are [`Cell::Unreachable`], never a large integer, so
//! they cannot leak into a sum. Sums past `u64::MAX` become [`Cell::Overflow`],
//! which is still reachable but ranks above every real price. An unreachable
//! target is [`Solution::Infeasible`]; only a target whose cheapest assembly
//! overflows is an error.
//!
//! ## Quick start
//! ```
//! use railway_planner::{solve, ConnectorAlphabet, RailRecord, Solution};
//!
//! let alphabet = ConnectorAlphabet::new(['A']).unwrap();
//! let rails = [RailRecord::new('A', 'A', 4, 7)];
//! assert_eq!(solve(8, &alphabet, &rails), Ok(Solution::Optimal(14)));
//! assert_eq!(solve(6, &alphabet, &rails), Ok(Solution::Infeasible));
//! ```
//!
//! ## Strategies
//! [`Strategy::FullTable`] materializes every row. [`Strategy::Rolling`] runs
//! the same recurrence through the generic [`SweepEngine`] and keeps only the
//! rows the longest rail can reach back to. With the `parallel` feature the
//! cells of each row are filled with rayon.
//!
//! The [`input`] and [`report`] modules implement the line-based file format
//! and output messages used by the `railway_planner` binary.

pub mod alphabet;
pub mod builder;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod input;
pub mod report;
pub mod rolling;
pub mod solver;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::alphabet::ConnectorAlphabet;
pub use crate::builder::SolverBuilder;
pub use crate::catalog::{Price, Rail, RailCatalog, RailRecord};
pub use crate::engine::SweepEngine;
pub use crate::error::PlannerError;
pub use crate::solver::{solve, Solution, Solver, Strategy};
pub use crate::table::{Cell, CostTable};
pub use crate::traits::LayeredProblem;
