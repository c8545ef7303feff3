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

//! This module defines the `Frontier` and `NodeRanking` traits.

use std::cmp::Ordering;

use crate::{BnBNode, Bound, Error};

/// The frontier is the global priority queue which stores all the nodes that
/// remain to be explored. The order in which it hands them out is what makes
/// a search best-first, depth-first, or anything in between.
pub trait Frontier<'a> {
    /// This is how you push a node onto the frontier.
    fn enqueue(&mut self, node: BnBNode<'a>);
    /// Removes the highest priority node from the frontier and returns it.
    ///
    /// # Errors
    /// `EmptyFrontier` when there is nothing left to explore.
    fn next(&mut self) -> Result<BnBNode<'a>, Error>;
    /// The largest relaxed value among the fractionally feasible nodes that
    /// are still queued (minus infinity when there is none).
    fn upper_bound(&self) -> Bound;
    /// This method clears the frontier: it removes all nodes from the queue.
    fn clear(&mut self);
    /// Yields the length of the queue.
    fn len(&self) -> usize;
    /// Returns true iff the frontier is empty (len == 0)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns true iff some node is waiting to be explored
    fn has_next(&self) -> bool {
        !self.is_empty()
    }
}

/// A node ranking is an heuristic that imposes a total order on the nodes
/// waiting in a frontier.
///
/// # Note:
/// Greater means more promising: the greatest node is explored first.
/// Nodes that compare `Equal` are explored in insertion order.
pub trait NodeRanking {
    fn compare(&self, a: &BnBNode<'_>, b: &BnBNode<'_>) -> Ordering;
}
