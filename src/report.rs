//! Output-file messages.
//!
//! Every run of the command-line tool leaves exactly one message in the
//! output file, with no trailing newline: the answer line on success, or a
//! diagnostic otherwise. An infeasible target is reported as price `-1`.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::solver::Solution;

/// Default output file, created in the working directory.
pub const OUTPUT_FILE: &str = "rwp_output.out";

/// Written when the arguments are wrong.
pub const USAGE: &str = "Usage: RailwayPlanner <InputFilePath>";

/// Price printed for an infeasible target.
pub const INFEASIBLE_PRICE: i64 = -1;

/// Answer line for `solution`.
///
/// ```
/// use railway_planner::{report::answer_line, Solution};
///
/// assert_eq!(answer_line(Solution::Optimal(15)), "The minimal price is: 15.");
/// assert_eq!(answer_line(Solution::Infeasible), "The minimal price is: -1.");
/// ```
pub fn answer_line(solution: Solution) -> String {
    match solution {
        Solution::Optimal(price) => format!("The minimal price is: {price}."),
        Solution::Infeasible => format!("The minimal price is: {INFEASIBLE_PRICE}."),
    }
}

/// An open output file that receives one message.
#[derive(Debug)]
pub struct Reporter {
    file: File,
}

impl Reporter {
    /// Create (or truncate) the output file at `path`.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            file: File::create(path)?,
        })
    }

    /// Write `message` verbatim and flush.
    pub fn write_message(&mut self, message: &str) -> io::Result<()> {
        self.file.write_all(message.as_bytes())?;
        self.file.flush()
    }

    pub fn write_solution(&mut self, solution: Solution) -> io::Result<()> {
        self.write_message(&answer_line(solution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_price_is_a_valid_answer() {
        assert_eq!(answer_line(Solution::Optimal(0)), "The minimal price is: 0.");
    }

    #[test]
    fn reporter_writes_without_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        let mut reporter = Reporter::create(&path).unwrap();
        reporter.write_solution(Solution::Optimal(42)).unwrap();
        drop(reporter);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "The minimal price is: 42."
        );
    }
}
