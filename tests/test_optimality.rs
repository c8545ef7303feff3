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

//! Checks that the search finds the optimum of random instances, by comparing
//! it with an exhaustive enumeration of all the subsets of items.

use proptest::prelude::*;

use knapsack_bnb::*;

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

fn instances() -> impl Strategy<Value = Instance> {
    (prop::collection::vec((0_u32..40, 0_u32..40), 0..=12), 0_u64..150)
        .prop_map(|(items, capacity)| {
            Instance::new(items.into_iter().map(|(w, v)| Item::new(w, v)).collect(), capacity)
        })
}

proptest! {
    /// Best first search with the greedy completion finds the optimum
    #[test]
    fn best_first_search_is_optimal(instance in instances()) {
        let mut frontier = SimpleFrontier::new(BestBound);
        let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &GreedyCompletion);

        let best = search.search(100_000).unwrap().unwrap();
        prop_assert_eq!(Fraction::from(brute_force(&instance)), best.value());
        prop_assert!(best.is_integral());
        prop_assert!(best.is_fractionally_feasible());
    }

    /// Depth first search without heuristic finds the optimum too
    #[test]
    fn depth_first_search_is_optimal(instance in instances()) {
        let mut frontier = SimpleFrontier::new(DepthFirst);
        let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &MostFractional, &NoHeuristic);

        let best = search.search(100_000).unwrap().unwrap();
        prop_assert_eq!(Fraction::from(brute_force(&instance)), best.value());
    }

    /// The relaxation of the root is an upper bound on the optimum
    #[test]
    fn the_root_relaxation_bounds_the_optimum(instance in instances()) {
        let relaxed = GreedyRelaxation.solve(&instance, &BranchingDecisions::new(instance.nb_items())).unwrap();
        prop_assert!(relaxed.is_fractionally_feasible());
        prop_assert!(relaxed.fractional_indices().count() <= 1);
        prop_assert!(Fraction::from(brute_force(&instance)) <= relaxed.value());
    }
}
