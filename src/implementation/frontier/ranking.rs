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

//! This module provides the implementation of the usual node rankings.

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::{BnBNode, NodeRanking};

/// Best first: the node having the highest relaxed value is explored first.
/// Ties are broken in favor of the deepest node (which is closer to a leaf).
#[derive(Debug, Default, Clone, Copy)]
pub struct BestBound;
impl NodeRanking for BestBound {
    fn compare(&self, a: &BnBNode<'_>, b: &BnBNode<'_>) -> Ordering {
        a.relaxed_value().cmp(&b.relaxed_value())
            .then_with(|| a.depth().cmp(&b.depth()))
    }
}

/// Depth first: the deepest node is explored first, ties are broken in
/// favor of the highest relaxed value.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;
impl NodeRanking for DepthFirst {
    fn compare(&self, a: &BnBNode<'_>, b: &BnBNode<'_>) -> Ordering {
        a.depth().cmp(&b.depth())
            .then_with(|| a.relaxed_value().cmp(&b.relaxed_value()))
    }
}

/// Breadth first: the shallowest node is explored first, ties are broken in
/// favor of the highest relaxed value.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;
impl NodeRanking for BreadthFirst {
    fn compare(&self, a: &BnBNode<'_>, b: &BnBNode<'_>) -> Ordering {
        b.depth().cmp(&a.depth())
            .then_with(|| a.relaxed_value().cmp(&b.relaxed_value()))
    }
}

/// A ranking given by a priority function: the node having the *smallest*
/// key is explored first. Any ordered key goes, so lexicographic criteria
/// are simply expressed as tuples.
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// // shallowest first, then highest relaxed value
/// let ranking = MinKey::new(|n: &BnBNode<'_>| (n.depth(), std::cmp::Reverse(n.relaxed_value())));
/// let frontier = SimpleFrontier::new(ranking);
/// assert!(frontier.is_empty());
/// ```
pub struct MinKey<F, K> {
    key: F,
    _phantom: PhantomData<fn() -> K>,
}
impl<F, K> MinKey<F, K>
where
    F: Fn(&BnBNode<'_>) -> K,
    K: Ord,
{
    pub fn new(key: F) -> Self {
        MinKey { key, _phantom: PhantomData }
    }
}
impl<F, K> NodeRanking for MinKey<F, K>
where
    F: Fn(&BnBNode<'_>) -> K,
    K: Ord,
{
    fn compare(&self, a: &BnBNode<'_>, b: &BnBNode<'_>) -> Ordering {
        (self.key)(b).cmp(&(self.key)(a))
    }
}
