//! Example: the three reference scenarios through both strategies.
//!
//! Run with:
//! `cargo run --example worked_scenarios`

use railway_planner::{ConnectorAlphabet, RailRecord, Solver, Strategy};

fn main() {
    let scenarios: [(&str, Vec<char>, Vec<RailRecord>, Vec<usize>); 3] = [
        (
            "two connectors",
            vec!['A', 'B'],
            vec![
                RailRecord::new('A', 'B', 3, 10),
                RailRecord::new('B', 'A', 2, 5),
                RailRecord::new('A', 'A', 5, 50),
            ],
            vec![5],
        ),
        (
            "too long to fit",
            vec!['A'],
            vec![RailRecord::new('A', 'A', 2, 1)],
            vec![1],
        ),
        (
            "direct and chained",
            vec!['A'],
            vec![RailRecord::new('A', 'A', 4, 7)],
            vec![4, 8],
        ),
    ];

    for (name, symbols, rails, targets) in scenarios {
        let alphabet = ConnectorAlphabet::new(symbols).expect("scenario alphabets are non-empty");
        println!("{name}:");
        for target in targets {
            for strategy in [Strategy::FullTable, Strategy::Rolling] {
                let solver = Solver::builder().with_strategy(strategy).build();
                match solver.solve(target, &alphabet, &rails) {
                    Ok(solution) => {
                        println!("  target {target:>2} [{:>7}]: {solution}", strategy.label())
                    }
                    Err(err) => println!("  target {target:>2} [{:>7}]: error: {err}", strategy.label()),
                }
            }
        }
    }
}
