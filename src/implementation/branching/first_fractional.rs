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

//! Branching on the first fractional item.

use crate::{BnBNode, BranchingDecisions, BranchingStrategy, Error};

/// This is the default branching strategy. It splits a node on the item
/// having the lowest index among those whose relaxed selection lies strictly
/// between 0 and 1. It always yields two children: the left one leaves the
/// item out, the right one packs it.
///
/// A node whose relaxation is integral has no child.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstFractional;

impl BranchingStrategy for FirstFractional {
    fn make_branching_decisions(&self, node: &BnBNode<'_>) -> Result<Vec<BranchingDecisions>, Error> {
        match node.relaxed_solution().fractional_indices().next() {
            None => Ok(vec![]),
            Some(index) => {
                let (left, right) = node.branching_decisions().split_on(index)?;
                Ok(vec![left, right])
            }
        }
    }
}

#[cfg(test)]
mod test_first_fractional {
    use crate::*;

    #[test]
    fn it_splits_the_fractional_item_in_two() {
        let instance = Instance::new(vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)], 4);
        let mut factory = NodeFactory::new(&instance, &GreedyRelaxation);
        let root = factory.create_root(&mut NoObserver).unwrap();
        assert_eq!(vec![1], root.relaxed_solution().fractional_indices().collect::<Vec<_>>());

        let children = FirstFractional.make_branching_decisions(&root).unwrap();
        assert_eq!(2, children.len());
        assert_eq!(Fixation::Fixed(0), children[0][1]);
        assert_eq!(Fixation::Fixed(1), children[1][1]);
        assert!(children.iter().all(|c| c.refines(root.branching_decisions())));
    }
    #[test]
    fn integral_nodes_have_no_child() {
        let instance = Instance::new(vec![Item::new(2, 3), Item::new(3, 4)], 5);
        let mut factory = NodeFactory::new(&instance, &GreedyRelaxation);
        let root = factory.create_root(&mut NoObserver).unwrap();

        assert!(FirstFractional.make_branching_decisions(&root).unwrap().is_empty());
    }
}
