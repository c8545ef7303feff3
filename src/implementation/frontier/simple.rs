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

//! This module provides the implementation of a simple frontier (priority queue)

use std::cmp::Ordering;

use binary_heap_plus::BinaryHeap;
use compare::Compare;

use crate::{BnBNode, Bound, Error, Frontier, NodeRanking};

/// A node waiting in the frontier, stamped with its insertion order
struct Queued<'a> {
    seq: u64,
    node: BnBNode<'a>,
}

/// This is a thin wrapper to convert a NodeRanking into a `Compare` object
/// as is required to configure the order of the binary heap. Nodes the
/// ranking deems equal come out in insertion order.
struct CompareQueued<R: NodeRanking>(R);
impl<R: NodeRanking> Compare<Queued<'_>> for CompareQueued<R> {
    fn compare(&self, l: &Queued<'_>, r: &Queued<'_>) -> Ordering {
        self.0.compare(&l.node, &r.node)
            .then_with(|| r.seq.cmp(&l.seq))
    }
}

/// The simplest frontier implementation you can think of: basically consists
/// of a binary heap that pushes and pops nodes in the order of a `NodeRanking`.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// let instance = Instance::new(vec![Item::new(2, 3), Item::new(3, 4)], 4);
/// let mut factory = NodeFactory::new(&instance, &GreedyRelaxation);
/// let root = factory.create_root(&mut NoObserver).unwrap();
///
/// let mut frontier = SimpleFrontier::new(BestBound);
/// frontier.enqueue(root);
/// assert_eq!(Bound::Finite(Fraction::new(17, 3)), frontier.upper_bound());
///
/// let root = frontier.next().unwrap();
/// assert!(root.is_root());
/// assert_eq!(Err(Error::EmptyFrontier), frontier.next().map(|n| n.id()));
/// ```
pub struct SimpleFrontier<'a, R: NodeRanking> {
    heap: BinaryHeap<Queued<'a>, CompareQueued<R>>,
    next_seq: u64,
}
impl<'a, R: NodeRanking> SimpleFrontier<'a, R> {
    /// This creates a new frontier which explores the nodes in the given order
    pub fn new(ranking: R) -> Self {
        Self { heap: BinaryHeap::from_vec_cmp(vec![], CompareQueued(ranking)), next_seq: 0 }
    }
}
impl<'a, R: NodeRanking> Frontier<'a> for SimpleFrontier<'a, R> {
    fn enqueue(&mut self, node: BnBNode<'a>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Queued { seq, node })
    }

    fn next(&mut self) -> Result<BnBNode<'a>, Error> {
        self.heap.pop().map(|q| q.node).ok_or(Error::EmptyFrontier)
    }

    fn upper_bound(&self) -> Bound {
        self.heap.iter()
            .filter(|q| q.node.is_fractionally_feasible())
            .map(|q| Bound::Finite(q.node.relaxed_value()))
            .max()
            .unwrap_or(Bound::NegInfinity)
    }

    fn clear(&mut self) {
        self.heap.clear()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
