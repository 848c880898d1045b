//! spec.md §8's property-based invariants 1-6, run over small randomly
//! generated CSPs (a handful of variables, a shared small domain size,
//! a random subset of pairwise `not_equal` constraints).

mod common;

use std::sync::Arc;

use plico::{constraints, AssignmentOrderChecklist, Domain, DomainChangeStack, Problem, SearchStats};
use proptest::prelude::*;

fn build_problem(n: usize, d: usize, include: &[bool]) -> Problem<()> {
    let pairs: Vec<(usize, usize)> = (0..n).flat_map(|i| ((i + 1)..n).map(move |j| (i, j))).collect();
    let mut problem = Problem::new(n, pairs.len());
    for v in 0..n {
        problem.set_domain_size(v, d).expect("v < n");
    }
    for (slot, &(i, j)) in pairs.iter().enumerate() {
        if include[slot] {
            problem
                .install_constraint(slot, Arc::new(constraints::not_equal(i, j)))
                .expect("slot < pairs.len()");
        }
    }
    problem
}

fn is_sound(problem: &Problem<()>, values: &[usize]) -> bool {
    problem.constraints().all(|(_, c)| c.check(values, &()))
}

prop_compose! {
    fn arb_problem()(n in 2usize..=5, d in 1usize..=3)
        (n in Just(n), d in Just(d), include in proptest::collection::vec(any::<bool>(), n * (n - 1) / 2))
        -> (usize, usize, Vec<bool>)
    {
        (n, d, include)
    }
}

proptest! {
    #[test]
    fn soundness((n, d, include) in arb_problem()) {
        plico::init();
        let problem = build_problem(n, d, &include);
        let checklist = AssignmentOrderChecklist::build(&problem);
        let mut values = vec![0; n];

        if plico::solve(&problem, &mut values, &(), &checklist, None, None).unwrap() {
            prop_assert!(is_sound(&problem, &values));
        }
    }

    #[test]
    fn restoration((n, d, include) in arb_problem()) {
        plico::init();
        let problem = build_problem(n, d, &include);
        let checklist = AssignmentOrderChecklist::build(&problem);
        let mut values = vec![0; n];

        let domain_sizes_before: Vec<usize> = problem.domain_sizes().to_vec();
        let num_constraints_before = problem.num_constraints();

        let _ = plico::solve(&problem, &mut values, &(), &checklist, None, None).unwrap();

        prop_assert_eq!(problem.domain_sizes().to_vec(), domain_sizes_before);
        prop_assert_eq!(problem.num_constraints(), num_constraints_before);
    }

    #[test]
    fn forward_checking_does_not_lose_solutions((n, d, include) in arb_problem()) {
        plico::init();
        let problem = build_problem(n, d, &include);
        let checklist = AssignmentOrderChecklist::build(&problem);

        let mut plain_values = vec![0; n];
        let plain_found = plico::solve(&problem, &mut plain_values, &(), &checklist, None, None).unwrap();

        let mut fc_values = vec![0; n];
        let fc_found = plico::solve_fc(&problem, &mut fc_values, &(), &checklist, None, None).unwrap();

        let mut ovars_values = vec![0; n];
        let ovars_found =
            plico::solve_ovars(&problem, &mut ovars_values, &(), &checklist, None, None).unwrap();

        if plain_found {
            prop_assert!(fc_found);
            prop_assert!(ovars_found);
        }
        if !fc_found {
            prop_assert!(!plain_found);
        }
    }

    #[test]
    fn fc_backtrack_count_never_exceeds_plain((n, d, include) in arb_problem()) {
        plico::init();
        let problem = build_problem(n, d, &include);
        let checklist = AssignmentOrderChecklist::build(&problem);

        let mut plain_stats = SearchStats::new();
        let mut plain_values = vec![0; n];
        plico::solve(&problem, &mut plain_values, &(), &checklist, None, Some(&mut plain_stats)).unwrap();

        let mut fc_stats = SearchStats::new();
        let mut fc_values = vec![0; n];
        plico::solve_fc(&problem, &mut fc_values, &(), &checklist, None, Some(&mut fc_stats)).unwrap();

        prop_assert!(fc_stats.backtrack_count <= plain_stats.backtrack_count);
    }

    #[test]
    fn determinism((n, d, include) in arb_problem()) {
        plico::init();
        let problem = build_problem(n, d, &include);
        let checklist = AssignmentOrderChecklist::build(&problem);

        let mut values_a = vec![0; n];
        let mut stats_a = SearchStats::new();
        let found_a =
            plico::solve_ovars(&problem, &mut values_a, &(), &checklist, None, Some(&mut stats_a)).unwrap();

        let mut values_b = vec![0; n];
        let mut stats_b = SearchStats::new();
        let found_b =
            plico::solve_ovars(&problem, &mut values_b, &(), &checklist, None, Some(&mut stats_b)).unwrap();

        prop_assert_eq!(found_a, found_b);
        if found_a {
            prop_assert_eq!(values_a, values_b);
        }
        prop_assert_eq!(stats_a.backtrack_count, stats_b.backtrack_count);
    }
}

proptest! {
    #[test]
    fn domain_and_stack_round_trip_to_mark(
        size in 1usize..12,
        ops in proptest::collection::vec(any::<bool>(), 0..20),
    ) {
        let mut stack = DomainChangeStack::with_capacity(size);
        let mut domains = vec![Domain::new(size)];

        let mut original_live = domains[0].live().to_vec();
        original_live.sort_unstable();

        let mark = stack.mark();
        for remove in ops {
            if remove && !domains[0].is_empty() {
                let value = domains[0].live()[0];
                let pos = domains[0].position_of(value).unwrap();
                domains[0].remove_at(pos);
                stack.push(0, value);
            }
        }
        stack.restore_to(mark, &mut domains);

        let mut live = domains[0].live().to_vec();
        live.sort_unstable();
        prop_assert_eq!(live, original_live);
        prop_assert_eq!(stack.mark(), mark);
    }
}
