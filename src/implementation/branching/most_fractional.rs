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

//! Branching on the most fractional item.

use crate::{BnBNode, BranchingDecisions, BranchingStrategy, Error, Fraction};

/// Splits a node on the item whose relaxed selection is the closest to 1/2.
/// When several items are equally close, the one with the lowest index wins.
///
/// With the greedy relaxation there is at most one fractional item per node,
/// so this strategy only makes a difference for custom relaxations.
#[derive(Debug, Default, Clone, Copy)]
pub struct MostFractional;

impl BranchingStrategy for MostFractional {
    fn make_branching_decisions(&self, node: &BnBNode<'_>) -> Result<Vec<BranchingDecisions>, Error> {
        let selection = node.relaxed_solution().selection();
        let best = node.relaxed_solution().fractional_indices()
            .min_by_key(|i| (selection[*i].distance(Fraction::HALF), *i));

        match best {
            None => Ok(vec![]),
            Some(index) => {
                let (left, right) = node.branching_decisions().split_on(index)?;
                Ok(vec![left, right])
            }
        }
    }
}
