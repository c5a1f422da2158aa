use proptest::prelude::*;
use railway_planner::{
    rolling::RollingProblem, Cell, CostTable, LayeredProblem, PlannerError, Price, Rail,
    RailCatalog, Solution, Solver, SweepEngine,
};

fn catalog(connectors: usize, rails: &[(usize, usize, usize, Price)]) -> RailCatalog {
    let mut catalog = RailCatalog::new(connectors);
    for &(start, end, length, price) in rails {
        catalog.push(Rail::new(start, end, length, price)).unwrap();
    }
    catalog
}

fn instance() -> impl Strategy<Value = RailCatalog> {
    (1usize..=5).prop_flat_map(|c| {
        prop::collection::vec((0..c, 0..c, 1usize..=12, 1u64..=1000), 0..=10)
            .prop_map(move |rails| catalog(c, &rails))
    })
}

proptest! {
    #[test]
    fn rolling_matches_full_table(
        catalog in instance(),
        target in 0usize..200,
        block_size in 1usize..=32,
    ) {
        let full = Solver::new().solve_catalog(target, &catalog);
        let rolling = Solver::builder()
            .with_strategy(railway_planner::Strategy::Rolling)
            .with_block_size(block_size)
            .build()
            .solve_catalog(target, &catalog);
        prop_assert_eq!(full, rolling);
    }

    #[test]
    fn every_rolling_row_matches_the_table(catalog in instance(), target in 1usize..120) {
        let table = CostTable::build(target, &catalog).unwrap();
        let problem = RollingProblem::new(&catalog, target);
        let mut frontier = problem.init_frontier();
        for layer in 0..target {
            problem.forward_step(layer, &mut frontier).unwrap();
            prop_assert_eq!(frontier.newest(), table.row(layer + 1));
        }
    }
}

#[test]
fn overflow_is_reported_identically() {
    // Alternating 0->1 (len 2) and 1->0 (len 3) at a third of u64::MAX each:
    // three rails sum to exactly u64::MAX, a fourth overflows.
    let third = u64::MAX / 3;
    let c = catalog(2, &[(0, 1, 2, third), (1, 0, 3, third)]);
    let rolling = Solver::builder()
        .with_strategy(railway_planner::Strategy::Rolling)
        .build();
    for target in 1usize..=13 {
        let full = Solver::new().solve_catalog(target, &c);
        assert_eq!(full, rolling.solve_catalog(target, &c), "target {target}");
    }

    let table = CostTable::build(13, &c).unwrap();
    assert_eq!(table.cheapest(8), Cell::Cost(u64::MAX));
    assert_eq!(table.cheapest(9), Cell::Unreachable);
    assert_eq!(table.cheapest(10), Cell::Overflow);
    assert_eq!(
        Solver::new().solve_catalog(8, &c),
        Ok(Solution::Optimal(u64::MAX))
    );
    assert_eq!(Solver::new().solve_catalog(9, &c), Ok(Solution::Infeasible));
    assert_eq!(
        Solver::new().solve_catalog(12, &c),
        Err(PlannerError::PriceOverflow { length: 12 })
    );
}

#[test]
fn long_target_short_rails() {
    let c = catalog(3, &[(0, 1, 3, 4), (1, 2, 5, 6), (2, 0, 7, 1), (1, 1, 2, 9)]);
    let target = 5_000;
    let full = Solver::new().solve_catalog(target, &c).unwrap();
    let problem = RollingProblem::new(&c, target);
    assert_eq!(problem.window(), 7);
    let rolling = SweepEngine::new(problem).run().unwrap();
    assert_eq!(full.price(), rolling.price());
    assert!(full.is_feasible());
}
