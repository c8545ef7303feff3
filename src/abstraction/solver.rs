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

//! This module defines the `Solver` trait.

use crate::{Bound, Completion, Error, Fraction, FractionalSolution};

/// This is the solver abstraction. It is implemented by a structure that
/// explores a branch-and-bound tree to find the best possible solution to a
/// knapsack instance.
pub trait Solver<'a> {
    /// This method orders the solver to search for the optimal solution among
    /// all possibilities. It returns a structure standing for the outcome of
    /// the attempted maximization. Such a `Completion` is marked **exact** if
    /// the maximization has been carried out until optimality was proved. It
    /// is inexact when the search ran out of iterations, in which case the
    /// `best_value` is the best one that was known at that time.
    fn maximize(&mut self) -> Result<Completion, Error>;
    /// The objective value of the best solution found so far
    fn best_value(&self) -> Option<Fraction> {
        self.best_solution().map(|s| s.value())
    }
    /// The best solution found so far
    fn best_solution(&self) -> Option<&FractionalSolution<'a>>;
    /// Returns the best lower bound that has been identified so far.
    fn best_lower_bound(&self) -> Bound;
    /// Returns the tightest upper bound that can be guaranteed so far.
    fn best_upper_bound(&self) -> Bound;

    /// Computes the optimality gap
    fn gap(&self) -> f64 {
        let ub = self.best_upper_bound();
        let lb = self.best_lower_bound();
        match (lb, ub) {
            (Bound::Finite(l), Bound::Finite(u)) => {
                if u <= l || u.is_zero() {
                    0.0
                } else {
                    (u - l).to_f64() / u.to_f64()
                }
            }
            (_, Bound::NegInfinity) => 0.0,
            _ => 1.0,
        }
    }
}
