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

//! The bookkeeping of the feasible solutions found during a search.

use fxhash::FxHashSet;

use crate::{Bound, Fraction, FractionalSolution};

/// Stores the distinct feasible integral solutions that have been found,
/// and keeps track of the best one among them: the incumbent.
///
/// The number of recorded solutions only ever grows and the value of the
/// incumbent never decreases.
#[derive(Debug, Clone)]
pub struct SolutionSet<'a> {
    solutions: Vec<FractionalSolution<'a>>,
    seen: FxHashSet<Vec<Fraction>>,
    best: Option<usize>,
    keep_all: bool,
}

impl Default for SolutionSet<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SolutionSet<'a> {
    /// Creates an empty solution set which records every distinct solution
    pub fn new() -> Self {
        SolutionSet { solutions: vec![], seen: Default::default(), best: None, keep_all: true }
    }
    /// Creates an empty solution set which only records the solutions that
    /// improve the incumbent at the time they are added
    pub fn improving_only() -> Self {
        SolutionSet { keep_all: false, ..Self::new() }
    }

    /// Adds a feasible integral solution to the set and updates the
    /// incumbent if needed. Returns true iff the incumbent was improved.
    ///
    /// # Panics
    /// When the solution is not integral or not feasible: only feasible
    /// integral solutions may ever be recorded.
    pub fn add(&mut self, solution: FractionalSolution<'a>) -> bool {
        assert!(solution.is_fractionally_feasible(), "only feasible solutions can be recorded: {solution}");
        assert!(solution.is_integral(), "only integral solutions can be recorded: {solution}");

        let improves = Bound::Finite(solution.value()) > self.best_solution_value();
        if !improves && !self.keep_all {
            return false;
        }
        if self.seen.insert(solution.selection().to_vec()) {
            self.solutions.push(solution);
            if improves {
                self.best = Some(self.solutions.len() - 1);
            }
        }
        improves
    }

    /// The best solution found so far, if any
    pub fn best_solution(&self) -> Option<&FractionalSolution<'a>> {
        self.best.map(|i| &self.solutions[i])
    }
    /// The value of the incumbent; minus infinity when there is none
    pub fn best_solution_value(&self) -> Bound {
        self.best_solution()
            .map_or(Bound::NegInfinity, |s| Bound::Finite(s.value()))
    }
    pub fn contains(&self, solution: &FractionalSolution<'_>) -> bool {
        self.seen.contains(solution.selection())
    }
    pub fn len(&self) -> usize {
        self.solutions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
    /// Iterates over the recorded solutions, in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &FractionalSolution<'a>> {
        self.solutions.iter()
    }
}
