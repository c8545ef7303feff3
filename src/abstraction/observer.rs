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

//! This module defines the `SearchObserver` trait.

use crate::{BnBNode, Bound, FractionalSolution, Instance, Statistics};

/// An observer is notified about the key events of a search. It can only
/// look: everything it gets to see is handed over as a shared reference.
///
/// Every method comes with an empty default implementation, so that an
/// observer only needs to implement the events it cares about.
#[allow(unused_variables)]
pub trait SearchObserver {
    /// Called once, before the root node is created
    fn on_search_start(&mut self, instance: &Instance) {}
    /// Called each time a node is added to the search tree
    fn on_new_node_in_tree(&mut self, node: &BnBNode<'_>) {}
    /// Called for each solution yielded by the primal heuristics, once it has
    /// been recorded (and before the node it was found for is classified).
    /// `incumbent` is the value of the best solution known at that point.
    fn on_heuristic_solution(&mut self, node: &BnBNode<'_>, solution: &FractionalSolution<'_>, incumbent: Bound) {}
    /// Called after a node has been classified. The bounds are the global
    /// bounds on the optimum at that point in time, and `heuristic_solutions`
    /// are the solutions the heuristics yielded while processing this node.
    fn on_node_processed(
        &mut self,
        node: &BnBNode<'_>,
        lower_bound: Bound,
        upper_bound: Bound,
        incumbent: Option<&FractionalSolution<'_>>,
        heuristic_solutions: &[FractionalSolution<'_>],
    ) {
    }
    /// Called once, when the search is over
    fn on_search_end(&mut self, statistics: &Statistics) {}
}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn on_search_start(&mut self, instance: &Instance) {
        (**self).on_search_start(instance)
    }
    fn on_new_node_in_tree(&mut self, node: &BnBNode<'_>) {
        (**self).on_new_node_in_tree(node)
    }
    fn on_heuristic_solution(&mut self, node: &BnBNode<'_>, solution: &FractionalSolution<'_>, incumbent: Bound) {
        (**self).on_heuristic_solution(node, solution, incumbent)
    }
    fn on_node_processed(
        &mut self,
        node: &BnBNode<'_>,
        lower_bound: Bound,
        upper_bound: Bound,
        incumbent: Option<&FractionalSolution<'_>>,
        heuristic_solutions: &[FractionalSolution<'_>],
    ) {
        (**self).on_node_processed(node, lower_bound, upper_bound, incumbent, heuristic_solutions)
    }
    fn on_search_end(&mut self, statistics: &Statistics) {
        (**self).on_search_end(statistics)
    }
}
