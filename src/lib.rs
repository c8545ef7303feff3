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

//! # knapsack-bnb
//! knapsack-bnb is a small, modular branch-and-bound engine which solves the
//! binary (0/1) knapsack problem to optimality. The search itself is generic:
//! every decision it has to make is delegated to a strategy which you inject
//! when the search is created.
//!
//! * A `RelaxationSolver` computes the best fractional solution of a node;
//!   its value bounds everything that can be found below that node.
//! * A `BranchingStrategy` splits a node whose relaxation is fractional.
//! * `Heuristics` opportunistically look for integral solutions.
//! * A `Frontier` decides which node gets explored next (best first, depth
//!   first, ...).
//! * A `SearchObserver` gets to see what happens (progress report, recording
//!   of the tree, ...).
//!
//! ## Quick Example
//! The following solves a tiny instance with the default strategies: a
//! greedy fractional relaxation, branching on the first fractional item and
//! a best bound exploration.
//! ```
//! # use knapsack_bnb::*;
//! // four items given as (weight, value) and a sack of capacity 5
//! let instance = Instance::new(
//!     vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)],
//!     5);
//!
//! let relaxation    = GreedyRelaxation;
//! let branching     = FirstFractional;
//! let heuristics    = GreedyCompletion;
//! let mut frontier  = SimpleFrontier::new(BestBound);
//!
//! let mut search = BnBSearch::new(&instance, &relaxation, &mut frontier, &branching, &heuristics);
//! let outcome = search.maximize().unwrap();
//!
//! // the search ran to completion: its best value is the proved optimum
//! assert!(outcome.is_exact);
//! assert_eq!(Some(Fraction::from(7u64)), outcome.best_value);
//!
//! // and the optimal solution packs the first two items
//! let best = search.best_solution().unwrap();
//! assert_eq!(vec![0, 1], best.packed_items().collect::<Vec<_>>());
//! ```
//!
//! ## Watching the search
//! Observers are plugged with `with_observer`. Pass them by mutable reference
//! if you want to look at them once the search is over.
//! ```
//! # use knapsack_bnb::*;
//! let instance = Instance::new(vec![Item::new(10, 1)], 5);
//! let mut recorder = TreeRecorder::default();
//! let mut frontier = SimpleFrontier::new(DepthFirst);
//! {
//!     let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &NoHeuristic)
//!         .with_observer(&mut recorder);
//!     let best = search.search(10).unwrap().unwrap();
//!     assert_eq!(Fraction::ZERO, best.value());
//! }
//! // the root packs half of the item, then it is split in two
//! assert_eq!(3, recorder.nodes().len());
//! assert_eq!(NodeStatus::Branched, recorder.node(0).unwrap().status);
//! ```

mod common;
mod abstraction;
mod implementation;
pub mod io_utils;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
