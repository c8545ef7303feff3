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

//! An observer that reports the progress of a search through the `log`
//! facade, one line per processed node.

use log::info;

use crate::{BnBNode, Bound, Fraction, FractionalSolution, Instance, SearchObserver, Statistics};

/// Tracks and reports the progress of a search. Each processed node yields a
/// line of the following table (at `info` level):
///
/// * Nodes: the number of nodes processed so far of the number of nodes created
/// * Depth: the depth of the current node in the search tree
/// * Status: the status of the current node
/// * Value: the relaxed value of the current node
/// * UB: the upper bound after processing the node
/// * LB: the lower bound after processing the node
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    num_nodes: usize,
    num_iterations: usize,
    lower_bound: Bound,
    upper_bound: Bound,
    /// the heuristic solutions of the current iteration which were at least
    /// as good as the incumbent when they were found
    heuristic_solutions: Vec<Vec<Fraction>>,
    /// the heuristic solutions that were reported with the last processed node
    last_heuristic_solutions: Vec<Vec<Fraction>>,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        ProgressTracker {
            num_nodes: 0,
            num_iterations: 0,
            lower_bound: Bound::NegInfinity,
            upper_bound: Bound::PosInfinity,
            heuristic_solutions: vec![],
            last_heuristic_solutions: vec![],
        }
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }
    /// Number of nodes created so far
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }
    /// Number of nodes processed so far
    pub fn num_iterations(&self) -> usize {
        self.num_iterations
    }
    /// Global lower bound reported with the last processed node
    pub fn lower_bound(&self) -> Bound {
        self.lower_bound
    }
    /// Global upper bound reported with the last processed node
    pub fn upper_bound(&self) -> Bound {
        self.upper_bound
    }
    /// The selections of the good heuristic solutions found while processing
    /// the last node
    pub fn last_heuristic_solutions(&self) -> &[Vec<Fraction>] {
        &self.last_heuristic_solutions
    }
}

fn display(bound: Bound) -> String {
    match bound {
        Bound::Finite(x) => format!("{:.3}", x.to_f64()),
        _ => bound.to_string(),
    }
}

impl SearchObserver for ProgressTracker {
    fn on_search_start(&mut self, instance: &Instance) {
        *self = Self::default();
        info!("Searching an instance of {} items (capacity {})", instance.nb_items(), instance.capacity());
        info!("{:>10} {:>10} {:>10} {:>10} {:>10} {:>10}", "Nodes", "Depth", "Status", "Value", "UB", "LB");
    }

    fn on_new_node_in_tree(&mut self, _node: &BnBNode<'_>) {
        self.num_nodes += 1;
    }

    fn on_heuristic_solution(&mut self, _node: &BnBNode<'_>, solution: &FractionalSolution<'_>, incumbent: Bound) {
        if Bound::Finite(solution.value()) < incumbent {
            return;
        }
        info!("\tNew solution found by heuristics: {} of value {}", solution, solution.value());
        self.heuristic_solutions.push(solution.selection().to_vec());
    }

    fn on_node_processed(
        &mut self,
        node: &BnBNode<'_>,
        lower_bound: Bound,
        upper_bound: Bound,
        _incumbent: Option<&FractionalSolution<'_>>,
        _heuristic_solutions: &[FractionalSolution<'_>],
    ) {
        self.num_iterations += 1;
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self.last_heuristic_solutions = std::mem::take(&mut self.heuristic_solutions);

        info!("{:>10} {:>10} {:>10} {:>10.3} {:>10} {:>10}",
            format!("{}/{}", self.num_iterations, self.num_nodes),
            node.depth(),
            node.status(),
            node.relaxed_value().to_f64(),
            display(upper_bound),
            display(lower_bound));
    }

    fn on_search_end(&mut self, statistics: &Statistics) {
        info!("Search finished in {} iterations and {} created nodes.", statistics.iterations, statistics.nodes_created);
    }
}
