// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module tests the behavior of the search driver: the outcome on a few
//! well known scenarios, and the properties that must hold all along a search.

use knapsack_bnb::*;

fn four_items() -> Instance {
    Instance::new(vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)], 5)
}
fn twenty_items() -> Instance {
    let weights = [23, 31, 29, 44, 53, 38, 63, 85, 89, 82, 12, 17, 41, 27, 36, 19, 48, 55, 61, 33];
    let values = [92, 57, 49, 68, 60, 43, 67, 84, 87, 72, 25, 31, 50, 40, 44, 26, 58, 61, 70, 39];
    let items = weights.iter().zip(values.iter()).map(|(w, v)| Item::new(*w, *v)).collect();
    Instance::new(items, 300)
}
fn brute_force(instance: &Instance) -> u64 {
    let n = instance.nb_items();
    (0_u32..(1 << n))
        .filter_map(|mask| {
            let (w, v) = (0..n).filter(|i| mask & (1 << i) != 0)
                .fold((0, 0), |(w, v), i| (w + u64::from(instance.item(i).weight), v + u64::from(instance.item(i).value)));
            (w <= instance.capacity()).then_some(v)
        })
        .max()
        .unwrap_or(0)
}
fn frontier<'a>(ranking: usize) -> Box<dyn Frontier<'a> + 'a> {
    match ranking {
        0 => Box::new(SimpleFrontier::new(BestBound)),
        1 => Box::new(SimpleFrontier::new(DepthFirst)),
        _ => Box::new(SimpleFrontier::new(BreadthFirst)),
    }
}

/// An observer that checks the invariants of the search as it goes
#[derive(Default)]
struct Invariants {
    created: Vec<usize>,
    processed: Vec<(usize, NodeStatus)>,
    lower_bounds: Vec<Bound>,
}
impl SearchObserver for Invariants {
    fn on_new_node_in_tree(&mut self, node: &BnBNode<'_>) {
        assert_eq!(NodeStatus::Unknown, node.status());
        let fixation = node.branching_decisions();
        let selection = node.relaxed_solution().selection();
        for (i, fixed) in fixation.iter().enumerate() {
            if let Some(value) = fixed.as_fraction() {
                assert_eq!(value, selection[i], "fixation of node {} is not respected", node.id());
            }
        }
        self.created.push(node.id());
    }
    fn on_heuristic_solution(&mut self, _node: &BnBNode<'_>, solution: &FractionalSolution<'_>, incumbent: Bound) {
        assert!(solution.is_integral());
        assert!(solution.is_fractionally_feasible());
        assert!(Bound::Finite(solution.value()) <= incumbent, "heuristic solutions are recorded before they are reported");
    }
    fn on_node_processed(
        &mut self,
        node: &BnBNode<'_>,
        lower_bound: Bound,
        upper_bound: Bound,
        incumbent: Option<&FractionalSolution<'_>>,
        _heuristic_solutions: &[FractionalSolution<'_>],
    ) {
        assert!(node.status().is_terminal());
        assert!(lower_bound <= upper_bound, "the bounds crossed at node {}", node.id());
        if let Some(previous) = self.lower_bounds.last() {
            assert!(*previous <= lower_bound, "the incumbent got worse at node {}", node.id());
        }
        assert_eq!(incumbent.map_or(Bound::NegInfinity, |s| Bound::Finite(s.value())), lower_bound);
        self.lower_bounds.push(lower_bound);
        self.processed.push((node.id(), node.status()));
    }
}

#[test]
fn the_four_items_scenario_has_value_seven() {
    let instance = four_items();
    let mut frontier = SimpleFrontier::new(BestBound);
    let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &NoHeuristic);

    let best = search.search(1_000).unwrap().unwrap();
    assert_eq!(Fraction::from(7u64), best.value());
    assert_eq!(Fraction::from(5u64), best.weight());
    assert_eq!(vec![0, 1], best.packed_items().collect::<Vec<_>>());
}

#[test]
fn an_empty_instance_has_an_empty_solution() {
    let instance = Instance::new(vec![], 0);
    let mut frontier = SimpleFrontier::new(BestBound);
    let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &GreedyCompletion);

    let best = search.search(10).unwrap().unwrap();
    assert_eq!(Fraction::ZERO, best.value());
    assert!(best.selection().is_empty());
    assert_eq!(1, search.num_nodes());
}

#[test]
fn an_item_that_does_not_fit_is_left_out() {
    let instance = Instance::new(vec![Item::new(10, 1)], 5);
    let mut recorder = TreeRecorder::default();
    let mut frontier = SimpleFrontier::new(BestBound);
    {
        let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &NoHeuristic)
            .with_observer(&mut recorder);
        let best = search.search(10).unwrap().unwrap();
        assert_eq!(Fraction::ZERO, best.value());
        assert_eq!(&[Fraction::ZERO], best.selection());
    }
    let root = recorder.node(0).unwrap();
    assert_eq!(0.5, root.relaxed_value);
    assert_eq!(NodeStatus::Branched, root.status);

    let relaxed = GreedyRelaxation.solve(&instance, &BranchingDecisions::new(1)).unwrap();
    assert_eq!(&[Fraction::HALF], relaxed.selection());
}

#[test]
fn the_search_is_optimal_for_every_strategy() {
    let instance = twenty_items();
    let optimum = Fraction::from(brute_force(&instance));
    let heuristics: [&dyn Heuristics; 2] = [&NoHeuristic, &GreedyCompletion];
    let branchings: [&dyn BranchingStrategy; 2] = [&FirstFractional, &MostFractional];

    for ranking in 0..3 {
        for heuristic in heuristics {
            for branching in branchings {
                let mut frontier = frontier(ranking);
                let mut search = BnBSearch::new(&instance, &GreedyRelaxation, frontier.as_mut(), branching, heuristic)
                    .with_observer(Invariants::default());
                let best = search.search(100_000).unwrap().unwrap();
                assert_eq!(optimum, best.value());
                assert!(best.is_fractionally_feasible());
                assert_eq!(SearchState::Finished, search.state());
            }
        }
    }
}

/// Twelve items whose weights and values are close to `u32::MAX`, in a sack
/// that holds about five of them
fn huge_items() -> Instance {
    let mut seed = 0x2545_f491_4f6c_dd1d_u64;
    let mut next = move || {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        (seed >> 33) as u32
    };
    let items = (0..12)
        .map(|_| {
            let weight = u32::MAX - next() % 1_000_003;
            let value = u32::MAX - next() % 999_983;
            Item::new(weight, value)
        })
        .collect();
    Instance::new(items, 5 * u64::from(u32::MAX) + 123_457)
}

#[test]
fn huge_weights_and_values_are_handled_exactly() {
    let instance = huge_items();
    let optimum = Fraction::from(brute_force(&instance));
    let branchings: [&dyn BranchingStrategy; 2] = [&FirstFractional, &MostFractional];
    let heuristics: [&dyn Heuristics; 2] = [&NoHeuristic, &GreedyCompletion];

    for ranking in 0..3 {
        for heuristic in heuristics {
            for branching in branchings {
                let mut frontier = frontier(ranking);
                let mut search = BnBSearch::new(&instance, &GreedyRelaxation, frontier.as_mut(), branching, heuristic)
                    .with_observer(Invariants::default());
                let best = search.search(100_000).unwrap().unwrap();
                assert_eq!(optimum, best.value());
                assert_eq!(5, best.packed_items().count());
                assert_eq!(search.best_lower_bound(), search.best_upper_bound());
            }
        }
    }
}

#[test]
fn the_relaxation_of_huge_items_is_exact() {
    let instance = Instance::new(
        vec![Item::new(u32::MAX, u32::MAX - 2), Item::new(u32::MAX - 1, u32::MAX), Item::new(u32::MAX - 4, u32::MAX - 1)],
        u64::from(u32::MAX) * 2,
    );
    let relaxed = GreedyRelaxation.solve(&instance, &BranchingDecisions::new(3)).unwrap();

    assert!(relaxed.is_fractionally_feasible());
    assert_eq!(Fraction::from(u64::from(u32::MAX) * 2), relaxed.weight());
    assert_eq!(1, relaxed.fractional_indices().count());
    // the fractional item is the least dense one
    assert_eq!(vec![0], relaxed.fractional_indices().collect::<Vec<_>>());
}

#[test]
fn every_node_is_created_once_and_processed_at_most_once() {
    let instance = twenty_items();
    let mut invariants = Invariants::default();
    let mut frontier = SimpleFrontier::new(BestBound);
    let nodes = {
        let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &GreedyCompletion)
            .with_observer(&mut invariants);
        search.search(100_000).unwrap();
        search.num_nodes()
    };

    assert_eq!((0..nodes).collect::<Vec<_>>(), invariants.created);
    let mut processed = invariants.processed.iter().map(|(id, _)| *id).collect::<Vec<_>>();
    processed.sort_unstable();
    processed.dedup();
    assert_eq!(invariants.processed.len(), processed.len());
    assert_eq!(Some(&(0, NodeStatus::Branched)), invariants.processed.first());
}

#[test]
fn the_search_is_deterministic() {
    let instance = twenty_items();
    let run = || {
        let mut recorder = TreeRecorder::default();
        let mut frontier = SimpleFrontier::new(BestBound);
        let best = {
            let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &GreedyCompletion)
                .with_observer(&mut recorder);
            search.search(100_000).unwrap().unwrap().selection().to_vec()
        };
        (recorder, best)
    };

    let (first, best_first) = run();
    let (second, best_second) = run();
    assert_eq!(first.nodes(), second.nodes());
    assert_eq!(first.iterations(), second.iterations());
    assert_eq!(best_first, best_second);
}

#[test]
fn children_are_processed_after_their_parent() {
    let instance = twenty_items();
    let mut recorder = TreeRecorder::default();
    let mut frontier = SimpleFrontier::new(DepthFirst);
    {
        let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &NoHeuristic)
            .with_observer(&mut recorder);
        search.search(100_000).unwrap();
    }
    for node in recorder.nodes() {
        if let (Some(parent), Some(at)) = (node.parent_id, node.processed_at) {
            let parent = recorder.node(parent).unwrap();
            assert_eq!(NodeStatus::Branched, parent.status);
            assert!(parent.processed_at.unwrap() < at);
            assert_eq!(parent.depth + 1, node.depth);
        }
    }
}

#[test]
fn every_recorded_solution_is_feasible_and_distinct() {
    let instance = twenty_items();
    let mut frontier = SimpleFrontier::new(BreadthFirst);
    let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &GreedyCompletion);
    search.search(100_000).unwrap();

    let solutions = search.solutions();
    assert!(!solutions.is_empty());
    for (i, a) in solutions.iter().enumerate() {
        assert!(a.is_integral() && a.is_fractionally_feasible());
        assert!(a.value() <= search.best_value().unwrap());
        for b in solutions.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn only_improving_solutions_are_kept_on_demand() {
    let instance = twenty_items();
    let keep_all = {
        let mut frontier = SimpleFrontier::new(BreadthFirst);
        let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &GreedyCompletion);
        search.search(100_000).unwrap();
        search.solutions().len()
    };
    let improving = {
        let config = SearchConfigBuilder::default().keep_all_solutions(false).build().unwrap();
        let mut frontier = SimpleFrontier::new(BreadthFirst);
        let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &GreedyCompletion)
            .with_config(config);
        search.search(100_000).unwrap();
        let values = search.solutions().iter().map(|s| s.value()).collect::<Vec<_>>();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        values.len()
    };
    assert!(improving <= keep_all);
}

#[test]
fn the_iteration_limit_interrupts_the_search() {
    let instance = twenty_items();
    let mut frontier = SimpleFrontier::new(BreadthFirst);
    let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &NoHeuristic);

    let err = search.search(3).unwrap_err();
    assert_eq!(Error::IterationLimitExceeded { limit: 3 }, err);
    assert_eq!(3, search.statistics().iterations);
    assert_eq!(SearchState::Finished, search.state());
    assert!(search.best_upper_bound() >= search.best_lower_bound());
}

#[test]
fn a_zero_iteration_limit_processes_nothing() {
    let instance = four_items();
    let mut frontier = SimpleFrontier::new(BestBound);
    let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &NoHeuristic);

    assert_eq!(Err(Error::IterationLimitExceeded { limit: 0 }), search.search(0).map(|s| s.is_some()));
    assert_eq!(0, search.statistics().iterations);
    assert_eq!(1, search.num_nodes());
    assert!(search.solutions().is_empty());
}

#[test]
fn an_interrupted_maximization_is_not_exact() {
    let instance = twenty_items();
    let config = SearchConfigBuilder::default().iteration_limit(2).build().unwrap();
    let mut frontier = SimpleFrontier::new(BestBound);
    let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &GreedyCompletion)
        .with_config(config);

    let Completion { is_exact, best_value } = search.maximize().unwrap();
    assert!(!is_exact);
    // the greedy completion of the root is known
    assert!(best_value.is_some());
    assert!(search.gap() > 0.0);
}

#[test]
fn a_completed_maximization_is_exact_and_closes_the_gap() {
    let instance = twenty_items();
    let mut frontier = SimpleFrontier::new(BestBound);
    let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &GreedyCompletion);

    let Completion { is_exact, best_value } = search.maximize().unwrap();
    assert!(is_exact);
    assert_eq!(Some(Fraction::from(brute_force(&instance))), best_value);
    assert_eq!(search.best_lower_bound(), search.best_upper_bound());
    assert_eq!(0.0, search.gap());
}

#[test]
fn a_finished_search_returns_its_incumbent_again() {
    let instance = four_items();
    let mut frontier = SimpleFrontier::new(BestBound);
    let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &NoHeuristic);
    assert_eq!(SearchState::NotStarted, search.state());

    let first = search.search(100).unwrap();
    let stats = *search.statistics();
    let second = search.search(100).unwrap();
    assert_eq!(first, second);
    assert_eq!(stats, *search.statistics());
}

#[test]
fn an_interrupted_search_keeps_failing_when_searched_again() {
    let instance = twenty_items();
    let mut frontier = SimpleFrontier::new(BestBound);
    let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &GreedyCompletion);

    assert_eq!(Err(Error::IterationLimitExceeded { limit: 3 }), search.search(3).map(|s| s.is_some()));
    let stats = *search.statistics();
    // a larger budget does not turn the unproved incumbent into an optimum
    assert_eq!(Err(Error::IterationLimitExceeded { limit: 3 }), search.search(100_000).map(|s| s.is_some()));
    assert_eq!(stats, *search.statistics());

    let Completion { is_exact, best_value } = search.maximize().unwrap();
    assert!(!is_exact);
    assert_eq!(search.best_value(), best_value);
}

#[test]
fn statistics_account_for_every_iteration() {
    let instance = twenty_items();
    let mut frontier = SimpleFrontier::new(DepthFirst);
    let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &GreedyCompletion);
    search.search(100_000).unwrap();

    let stats = search.statistics();
    assert_eq!(stats.iterations, stats.infeasible + stats.pruned + stats.feasible + stats.branched);
    assert_eq!(search.num_nodes(), stats.nodes_created);
    assert_eq!(1 + 2 * stats.branched, stats.nodes_created);
    assert!(stats.heuristic_solutions > 0);
}

#[test]
fn a_custom_priority_function_can_drive_the_search() {
    let instance = twenty_items();
    // the original convention: the smallest key is explored first
    let ranking = MinKey::new(|n: &BnBNode<'_>| (std::cmp::Reverse(n.depth()), n.id()));
    let mut frontier = SimpleFrontier::new(ranking);
    let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &MostFractional, &NoHeuristic);

    let best = search.search(100_000).unwrap().unwrap();
    assert_eq!(Fraction::from(brute_force(&instance)), best.value());
}

#[test]
fn progress_and_recording_can_be_combined() {
    let instance = four_items();
    let mut tracker = ProgressTracker::new();
    let mut recorder = TreeRecorder::default();
    {
        let observer = CompositeObserver::new()
            .with(&mut tracker)
            .with(&mut recorder);
        let mut frontier = SimpleFrontier::new(BestBound);
        let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &NoHeuristic)
            .with_observer(observer);
        search.search(100).unwrap();
    }
    assert_eq!(1, tracker.num_nodes());
    assert_eq!(1, tracker.num_iterations());
    assert_eq!(&[0], recorder.iterations());
    assert_eq!(NodeStatus::Feasible, recorder.node(0).unwrap().status);
}

#[test]
fn heuristic_solutions_are_reported_once_recorded() {
    struct BestThenWorse;
    impl Heuristics for BestThenWorse {
        fn search<'a>(&self, instance: &'a Instance, _: &BnBNode<'a>, f: &mut dyn SolutionCallback<'a>) {
            f.apply(FractionalSolution::from_packed(instance, (0..instance.nb_items()).map(|i| i == 0)).unwrap());
            f.apply(FractionalSolution::from_packed(instance, instance.items().iter().map(|_| false)).unwrap());
        }
    }
    #[derive(Default)]
    struct Reported(Vec<(Fraction, Bound)>);
    impl SearchObserver for Reported {
        fn on_heuristic_solution(&mut self, _: &BnBNode<'_>, solution: &FractionalSolution<'_>, incumbent: Bound) {
            self.0.push((solution.value(), incumbent));
        }
    }

    let instance = twenty_items();
    let mut reported = Reported::default();
    let mut tracker = ProgressTracker::new();
    let mut frontier = SimpleFrontier::new(BestBound);
    {
        let observer = CompositeObserver::new().with(&mut reported).with(&mut tracker);
        let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &BestThenWorse)
            .with_observer(observer);
        assert!(search.search(1).is_err());
    }

    let best = Bound::Finite(Fraction::from(92u64));
    assert_eq!(vec![(Fraction::from(92u64), best), (Fraction::ZERO, best)], reported.0);
    // the empty selection was already beaten when it got reported
    assert_eq!(1, tracker.last_heuristic_solutions().len());
    assert!(tracker.last_heuristic_solutions()[0][0].is_one());
}

#[test]
#[should_panic]
fn a_heuristic_yielding_an_infeasible_solution_is_a_defect() {
    struct PackEverything;
    impl Heuristics for PackEverything {
        fn search<'a>(&self, instance: &'a Instance, _: &BnBNode<'a>, f: &mut dyn SolutionCallback<'a>) {
            f.apply(FractionalSolution::from_packed(instance, instance.items().iter().map(|_| true)).unwrap());
        }
    }
    let instance = twenty_items();
    let mut frontier = SimpleFrontier::new(BestBound);
    let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &PackEverything);
    let _ = search.search(100);
}

#[test]
#[should_panic]
fn a_branching_that_does_not_constrain_its_children_is_a_defect() {
    struct Same;
    impl BranchingStrategy for Same {
        fn make_branching_decisions(&self, node: &BnBNode<'_>) -> Result<Vec<BranchingDecisions>, Error> {
            Ok(vec![node.branching_decisions().clone()])
        }
    }
    let instance = twenty_items();
    let mut frontier = SimpleFrontier::new(BestBound);
    let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &Same, &NoHeuristic);
    let _ = search.search(100);
}
