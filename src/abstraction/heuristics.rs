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

//! This module defines the primal `Heuristics` abstraction.

use crate::{BnBNode, FractionalSolution, Instance};

/// Primal heuristics opportunistically look for integral feasible solutions
/// around a node of the search tree. They never alter the tree itself.
pub trait Heuristics {
    /// Searches for solutions in the neighborhood of `node` and hands each of
    /// them over to the callback `f` as soon as it is found.
    ///
    /// # Contract
    /// Every solution passed to `f` must be integral and fractionally
    /// feasible (the driver asserts it). The search must be finite.
    fn search<'a>(&self, instance: &'a Instance, node: &BnBNode<'a>, f: &mut dyn SolutionCallback<'a>);
}

/// This trait basically defines a callback which is passed on to the
/// heuristics so as to let them stream the solutions they find.
pub trait SolutionCallback<'a> {
    /// executes the callback using the given solution
    fn apply(&mut self, solution: FractionalSolution<'a>);
}
/// The simplest and most natural callback implementation is to simply use
/// a closure.
impl<'a, X: FnMut(FractionalSolution<'a>)> SolutionCallback<'a> for X {
    fn apply(&mut self, solution: FractionalSolution<'a>) {
        self(solution)
    }
}
