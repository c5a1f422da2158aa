use proptest::prelude::*;
use railway_planner::{
    solve, Cell, ConnectorAlphabet, CostTable, PlannerError, Price, RailCatalog, RailRecord,
    Solution, Solver,
};

const SYMBOLS: [char; 4] = ['w', 'x', 'y', 'z'];

fn instance() -> impl Strategy<Value = (ConnectorAlphabet, Vec<RailRecord>)> {
    (1usize..=4).prop_flat_map(|c| {
        prop::collection::vec((0..c, 0..c, 1usize..=6, 1u64..=50), 0..=6).prop_map(move |rails| {
            let alphabet = ConnectorAlphabet::new(SYMBOLS[..c].iter().copied()).unwrap();
            let records = rails
                .into_iter()
                .map(|(s, e, len, price)| RailRecord::new(SYMBOLS[s], SYMBOLS[e], len, price))
                .collect();
            (alphabet, records)
        })
    })
}

proptest! {
    #[test]
    fn zero_target_is_free((alphabet, rails) in instance()) {
        prop_assert_eq!(solve(0, &alphabet, &rails), Ok(Solution::Optimal(0)));
    }

    #[test]
    fn base_row_is_all_zero((alphabet, rails) in instance(), target in 0usize..40) {
        let catalog = RailCatalog::resolve(&alphabet, &rails).unwrap();
        let table = CostTable::build(target, &catalog).unwrap();
        prop_assert!(table.row(0).iter().all(|&cell| cell == Cell::Cost(0)));
    }

    #[test]
    fn repeated_solves_agree((alphabet, rails) in instance(), target in 0usize..40) {
        let solver = Solver::new();
        let first = solver.solve(target, &alphabet, &rails);
        let second = solver.solve(target, &alphabet, &rails);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn cheaper_rail_never_raises_the_price(
        (alphabet, rails) in instance(),
        target in 1usize..40,
        pick in any::<prop::sample::Index>(),
        discount in 1u64..=50,
    ) {
        prop_assume!(!rails.is_empty());
        let before = solve(target, &alphabet, &rails).unwrap();

        let mut cheaper = rails.clone();
        let i = pick.index(cheaper.len());
        cheaper[i].price = cheaper[i].price.saturating_sub(discount).max(1);
        let after = solve(target, &alphabet, &cheaper).unwrap();

        match (before, after) {
            (Solution::Optimal(b), Solution::Optimal(a)) => prop_assert!(a <= b),
            (Solution::Infeasible, Solution::Infeasible) => {}
            other => prop_assert!(false, "feasibility changed: {:?}", other),
        }
    }

    #[test]
    fn finite_cells_are_at_least_the_cheapest_rail(
        (alphabet, rails) in instance(),
        target in 1usize..40,
    ) {
        let catalog = RailCatalog::resolve(&alphabet, &rails).unwrap();
        let table = CostTable::build(target, &catalog).unwrap();
        let floor: Option<Price> = rails.iter().map(|r| r.price).min();
        for l in 1..=target {
            for &cell in table.row(l) {
                if let Some(price) = cell.price() {
                    prop_assert!(Some(price) >= floor);
                }
            }
        }
    }
}

#[test]
fn inputs_are_not_mutated() {
    let alphabet = ConnectorAlphabet::new(['A', 'B']).unwrap();
    let rails = vec![
        RailRecord::new('A', 'B', 3, 10),
        RailRecord::new('B', 'A', 2, 5),
    ];
    let (alphabet_copy, rails_copy) = (alphabet.clone(), rails.clone());
    let _ = solve(5, &alphabet, &rails);
    assert_eq!(alphabet, alphabet_copy);
    assert_eq!(rails, rails_copy);
}

#[test]
fn broken_records_fail_loudly() {
    let alphabet = ConnectorAlphabet::new(['A']).unwrap();
    assert_eq!(
        solve(3, &alphabet, &[RailRecord::new('A', 'B', 1, 1)]),
        Err(PlannerError::UnknownConnector { symbol: 'B' })
    );
    assert_eq!(
        solve(3, &alphabet, &[RailRecord::new('A', 'A', 1, 0)]),
        Err(PlannerError::InvalidRail {
            index: 0,
            length: 1,
            price: 0
        })
    );
}

fn both_strategies() -> [Solver; 2] {
    [
        Solver::new(),
        Solver::builder()
            .with_strategy(railway_planner::Strategy::Rolling)
            .build(),
    ]
}

#[test]
fn overflowing_candidates_never_hide_a_cheaper_assembly() {
    let huge = u64::MAX - 1;

    // Two huge rails overflow, one short-priced rail covers the same length.
    let single = ConnectorAlphabet::new(['A']).unwrap();
    let rails = [RailRecord::new('A', 'A', 1, huge), RailRecord::new('A', 'A', 2, 1)];
    for solver in both_strategies() {
        assert_eq!(solver.solve(2, &single, &rails), Ok(Solution::Optimal(1)));
        assert_eq!(solver.solve(3, &single, &rails), Ok(Solution::Optimal(u64::MAX)));
    }

    // The overflow lives on a connector the cheap chain never touches.
    let pair = ConnectorAlphabet::new(['A', 'B']).unwrap();
    let rails = [RailRecord::new('B', 'B', 1, huge), RailRecord::new('A', 'A', 1, 1)];
    for solver in both_strategies() {
        assert_eq!(solver.solve(2, &pair, &rails), Ok(Solution::Optimal(2)));
        assert_eq!(solver.solve(40, &pair, &rails), Ok(Solution::Optimal(40)));
    }
}

#[test]
fn only_an_overflowing_answer_is_an_error() {
    let single = ConnectorAlphabet::new(['A']).unwrap();
    let rails = [RailRecord::new('A', 'A', 1, u64::MAX / 2 + 1)];
    for solver in both_strategies() {
        assert_eq!(
            solver.solve(1, &single, &rails),
            Ok(Solution::Optimal(u64::MAX / 2 + 1))
        );
        assert_eq!(
            solver.solve(2, &single, &rails),
            Err(PlannerError::PriceOverflow { length: 2 })
        );
    }
}
