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

//! Outcome and bookkeeping of a search.

use std::fmt;

use crate::{Fraction, NodeStatus};

/// The outcome of a maximization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// is the given solution exact (proved optimal) or is it merely the best
    /// one known when the search was interrupted ?
    pub is_exact: bool,
    /// if present the value of the best solution that has been found
    pub best_value: Option<Fraction>,
}

/// The lifecycle of a search driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchState {
    NotStarted,
    Running,
    Finished,
}

/// Counters describing the work performed by a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Number of nodes that have been created
    pub nodes_created: usize,
    /// Number of nodes that have been popped off the frontier and classified
    pub iterations: usize,
    pub infeasible: usize,
    pub pruned: usize,
    pub feasible: usize,
    pub branched: usize,
    /// Number of solutions yielded by the primal heuristics
    pub heuristic_solutions: usize,
}

impl Statistics {
    /// Accounts for a node that has just been classified
    pub(crate) fn record(&mut self, status: NodeStatus) {
        self.iterations += 1;
        match status {
            NodeStatus::Infeasible => self.infeasible += 1,
            NodeStatus::Pruned => self.pruned += 1,
            NodeStatus::Feasible => self.feasible += 1,
            NodeStatus::Branched => self.branched += 1,
            NodeStatus::Unknown | NodeStatus::Enqueued => {}
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
            "{} iterations, {} nodes created ({} infeasible, {} pruned, {} feasible, {} branched), {} heuristic solutions",
            self.iterations, self.nodes_created, self.infeasible, self.pruned,
            self.feasible, self.branched, self.heuristic_solutions)
    }
}
