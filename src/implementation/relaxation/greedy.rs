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

//! This module provides the greedy fractional fill relaxation, which is the
//! exact solution of the linear relaxation of a knapsack.

use crate::{BranchingDecisions, Error, Fixation, Fraction, FractionalSolution, Instance, RelaxationSolver};

/// The greedy relaxation keeps the fixed part of the solution as is, and then
/// fills the remaining capacity with the unassigned items in decreasing
/// density order. The first item that does not fit entirely is packed
/// fractionally and all the items that follow it are left out.
///
/// Items having the same density are considered in increasing index order.
/// When the items fixed to 1 already exceed the capacity, no unassigned item
/// gets selected at all.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// let instance = Instance::new(vec![Item::new(10, 1)], 5);
/// let fixation = BranchingDecisions::new(1);
/// let relaxed  = GreedyRelaxation.solve(&instance, &fixation).unwrap();
///
/// assert_eq!(&[Fraction::HALF], relaxed.selection());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyRelaxation;

impl RelaxationSolver for GreedyRelaxation {
    fn solve<'a>(&self, instance: &'a Instance, fixation: &BranchingDecisions) -> Result<FractionalSolution<'a>, Error> {
        if fixation.len() != instance.nb_items() {
            return Err(Error::LengthMismatch { expected: instance.nb_items(), actual: fixation.len() });
        }

        let mut selection = vec![Fraction::ZERO; instance.nb_items()];
        let mut fixed_weight = 0_u128;
        for (i, fixed) in fixation.iter().enumerate() {
            if let Fixation::Fixed(1) = fixed {
                selection[i] = Fraction::ONE;
                fixed_weight += u128::from(instance.item(i).weight);
            }
        }

        let capacity = u128::from(instance.capacity());
        if let Some(mut remaining) = capacity.checked_sub(fixed_weight) {
            for i in instance.density_order(fixation.unassigned()) {
                let weight = u128::from(instance.item(i).weight);
                if weight <= remaining {
                    selection[i] = Fraction::ONE;
                    remaining -= weight;
                } else {
                    selection[i] = Fraction::new(remaining, weight);
                    break;
                }
            }
        }

        FractionalSolution::new(instance, selection)
    }
}

#[cfg(test)]
mod test_greedy_relaxation {
    use crate::*;

    fn instance() -> Instance {
        Instance::new(vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)], 5)
    }

    #[test]
    fn the_root_relaxation_packs_by_density() {
        let instance = instance();
        let relaxed = GreedyRelaxation.solve(&instance, &BranchingDecisions::new(4)).unwrap();

        assert_eq!(&[Fraction::ONE, Fraction::ONE, Fraction::ZERO, Fraction::ZERO], relaxed.selection());
        assert_eq!(Fraction::from(7u64), relaxed.value());
    }
    #[test]
    fn the_first_item_that_does_not_fit_is_packed_fractionally() {
        let instance = instance();
        let mut fixation = BranchingDecisions::new(4);
        fixation.fix(1, 0).unwrap();
        let relaxed = GreedyRelaxation.solve(&instance, &fixation).unwrap();

        assert_eq!(&[Fraction::ONE, Fraction::ZERO, Fraction::new(3, 4), Fraction::ZERO], relaxed.selection());
        assert_eq!(Fraction::new(27, 4), relaxed.value());
        assert_eq!(vec![2], relaxed.fractional_indices().collect::<Vec<_>>());
    }
    #[test]
    fn fixed_values_are_kept() {
        let instance = instance();
        let mut fixation = BranchingDecisions::new(4);
        fixation.fix(0, 0).unwrap();
        fixation.fix(3, 1).unwrap();
        let relaxed = GreedyRelaxation.solve(&instance, &fixation).unwrap();

        assert_eq!(Fraction::ZERO, relaxed.selection()[0]);
        assert_eq!(Fraction::ONE, relaxed.selection()[3]);
        assert_eq!(Fraction::ZERO, relaxed.selection()[1]);
        assert_eq!(Fraction::ZERO, relaxed.selection()[2]);
        assert!(relaxed.is_fractionally_feasible());
    }
    #[test]
    fn overfull_fixations_select_nothing_else_and_are_infeasible() {
        let instance = instance();
        let mut fixation = BranchingDecisions::new(4);
        fixation.fix(2, 1).unwrap();
        fixation.fix(3, 1).unwrap();
        let relaxed = GreedyRelaxation.solve(&instance, &fixation).unwrap();

        assert_eq!(&[Fraction::ZERO, Fraction::ZERO, Fraction::ONE, Fraction::ONE], relaxed.selection());
        assert!(!relaxed.is_fractionally_feasible());
    }
    #[test]
    fn equal_densities_are_packed_by_index() {
        let instance = Instance::new(vec![Item::new(2, 2), Item::new(2, 2), Item::new(2, 2)], 3);
        let relaxed = GreedyRelaxation.solve(&instance, &BranchingDecisions::new(3)).unwrap();
        assert_eq!(&[Fraction::ONE, Fraction::HALF, Fraction::ZERO], relaxed.selection());
    }
    #[test]
    fn zero_weight_items_are_always_packed() {
        let instance = Instance::new(vec![Item::new(3, 1), Item::new(0, 1)], 0);
        let relaxed = GreedyRelaxation.solve(&instance, &BranchingDecisions::new(2)).unwrap();
        assert_eq!(&[Fraction::ZERO, Fraction::ONE], relaxed.selection());
        assert!(relaxed.is_integral());
    }
    #[test]
    fn the_fixation_must_cover_every_item() {
        let instance = instance();
        let err = GreedyRelaxation.solve(&instance, &BranchingDecisions::new(3)).unwrap_err();
        assert_eq!(Error::LengthMismatch { expected: 4, actual: 3 }, err);
    }
    #[test]
    fn an_empty_instance_has_an_empty_relaxation() {
        let instance = Instance::new(vec![], 0);
        let relaxed = GreedyRelaxation.solve(&instance, &BranchingDecisions::new(0)).unwrap();
        assert!(relaxed.selection().is_empty());
        assert_eq!(Fraction::ZERO, relaxed.value());
    }
}
