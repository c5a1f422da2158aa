use proptest::prelude::*;
use railway_planner::{solve, ConnectorAlphabet, Price, RailRecord, Solution};

const SYMBOLS: [char; 3] = ['A', 'B', 'C'];

type IndexedRail = (usize, usize, usize, Price);

fn records(rails: &[IndexedRail]) -> Vec<RailRecord> {
    rails
        .iter()
        .map(|&(s, e, len, price)| RailRecord::new(SYMBOLS[s], SYMBOLS[e], len, price))
        .collect()
}

/// Cheapest chain found by enumerating every connector-compatible sequence.
fn brute_force(target: usize, rails: &[IndexedRail]) -> Option<Price> {
    fn extend(
        remaining: usize,
        open_end: Option<usize>,
        spent: Price,
        rails: &[IndexedRail],
        best: &mut Option<Price>,
    ) {
        if remaining == 0 {
            *best = Some(best.map_or(spent, |b| b.min(spent)));
            return;
        }
        for &(start, end, len, price) in rails {
            if len > remaining || open_end.is_some_and(|k| k != start) {
                continue;
            }
            extend(remaining - len, Some(end), spent + price, rails, best);
        }
    }

    if target == 0 {
        return Some(0);
    }
    let mut best = None;
    extend(target, None, 0, rails, &mut best);
    best
}

/// Whether some multiset of rail lengths sums to `target`, ignoring connectors.
fn lengths_reach(target: usize, rails: &[IndexedRail]) -> bool {
    let mut reach = vec![false; target + 1];
    reach[0] = true;
    for l in 1..=target {
        reach[l] = rails.iter().any(|&(_, _, len, _)| len <= l && reach[l - len]);
    }
    reach[target]
}

fn instance() -> impl Strategy<Value = (usize, Vec<IndexedRail>)> {
    (1usize..=3).prop_flat_map(|c| {
        (
            Just(c),
            prop::collection::vec((0..c, 0..c, 1usize..=4, 1u64..=20), 0..=4),
        )
    })
}

proptest! {
    #[test]
    fn matches_exhaustive_enumeration((c, rails) in instance(), target in 0usize..=8) {
        let alphabet = ConnectorAlphabet::new(SYMBOLS[..c].iter().copied()).unwrap();
        let solution = solve(target, &alphabet, &records(&rails)).unwrap();
        let expected = brute_force(target, &rails).map_or(Solution::Infeasible, Solution::Optimal);
        prop_assert_eq!(solution, expected);
    }

    #[test]
    fn unreachable_lengths_are_infeasible((c, rails) in instance(), target in 1usize..=30) {
        let alphabet = ConnectorAlphabet::new(SYMBOLS[..c].iter().copied()).unwrap();
        let solution = solve(target, &alphabet, &records(&rails)).unwrap();
        if !lengths_reach(target, &rails) {
            prop_assert_eq!(solution, Solution::Infeasible);
        }
    }
}

#[test]
fn odd_target_with_even_rails_is_infeasible() {
    let rails = [(0, 1, 2, 3), (1, 0, 4, 1), (1, 1, 6, 2)];
    let alphabet = ConnectorAlphabet::new(['A', 'B']).unwrap();
    for target in (1..40).step_by(2) {
        assert!(!lengths_reach(target, &rails));
        assert_eq!(
            solve(target, &alphabet, &records(&rails)),
            Ok(Solution::Infeasible)
        );
    }
}

#[test]
fn brute_force_agrees_with_worked_scenario() {
    let rails = [(0, 1, 3, 10), (1, 0, 2, 5), (0, 0, 5, 50)];
    assert_eq!(brute_force(5, &rails), Some(15));
    assert_eq!(brute_force(1, &rails), None);
}
