//! Example: parse the line-based input format and print the report line.
//!
//! Run with:
//! `cargo run --example plan_from_text`

use railway_planner::input::PlannerInput;
use railway_planner::report::answer_line;
use railway_planner::{Cell, CostTable, RailCatalog, Solver};

const INPUT: &str = "\
12
L,R,S
L,R,3,4
R,L,3,5
S,S,2,3
L,S,4,9
S,L,1,1
";

fn main() {
    let input = match PlannerInput::parse(INPUT) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let solution = Solver::new()
        .solve(input.target, &input.alphabet, &input.rails)
        .expect("parsed input is valid");
    println!("{}", answer_line(solution));

    // Show the cheapest price per connector for every length.
    let catalog = RailCatalog::resolve(&input.alphabet, &input.rails).expect("parsed input is valid");
    let table = CostTable::build(input.target, &catalog).expect("table fits in memory");
    let header: Vec<String> = input.alphabet.iter().map(|s| format!("{s:>6}")).collect();
    println!("length {}", header.join(""));
    for length in 0..=table.target() {
        let cells: Vec<String> = table
            .row(length)
            .iter()
            .map(|cell| match cell {
                Cell::Cost(price) => format!("{price:>6}"),
                Cell::Overflow => format!("{:>6}", ">max"),
                Cell::Unreachable => format!("{:>6}", "-"),
            })
            .collect();
        println!("{length:>6} {}", cells.join(""));
    }
}
