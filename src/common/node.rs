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

//! The nodes of the branch-and-bound tree and the factory that creates them.

use std::fmt;

use crate::{BranchingDecisions, Error, Fraction, FractionalSolution, Instance, RelaxationSolver, SearchObserver};

/// The status of a node in the search tree. Every node starts `Unknown`,
/// possibly becomes `Enqueued` while it waits on the frontier, and is
/// eventually given one of the four terminal classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeStatus {
    Unknown,
    Enqueued,
    Infeasible,
    Pruned,
    Feasible,
    Branched,
}

impl NodeStatus {
    /// True iff the status is one of the four final classifications
    pub fn is_terminal(self) -> bool {
        matches!(self, NodeStatus::Infeasible | NodeStatus::Pruned | NodeStatus::Feasible | NodeStatus::Branched)
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            NodeStatus::Unknown => "Unknown",
            NodeStatus::Enqueued => "Enqueued",
            NodeStatus::Infeasible => "Infeasible",
            NodeStatus::Pruned => "Pruned",
            NodeStatus::Feasible => "Feasible",
            NodeStatus::Branched => "Branched",
        };
        f.pad(text)
    }
}

/// A node of the branch-and-bound tree.
///
/// # Note:
/// Nodes can only be created by a `NodeFactory`. Apart from their status
/// (which only the search driver may update) they are immutable: the
/// fixation and the relaxed solution are only ever handed out as shared
/// references, so no strategy or observer can alter them in place.
#[derive(Debug, Clone)]
pub struct BnBNode<'a> {
    id: usize,
    parent_id: Option<usize>,
    depth: usize,
    fixation: BranchingDecisions,
    relaxed_solution: FractionalSolution<'a>,
    /// cached relaxed objective value (frontiers compare it a lot)
    relaxed_value: Fraction,
    /// cached fractional feasibility of the relaxed solution
    feasible: bool,
    status: NodeStatus,
}

impl<'a> BnBNode<'a> {
    fn new(
        id: usize,
        parent_id: Option<usize>,
        depth: usize,
        fixation: BranchingDecisions,
        relaxed_solution: FractionalSolution<'a>,
    ) -> Self {
        let relaxed_value = relaxed_solution.value();
        let feasible = relaxed_solution.is_fractionally_feasible();
        BnBNode { id, parent_id, depth, fixation, relaxed_solution, relaxed_value, feasible, status: NodeStatus::Unknown }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn parent_id(&self) -> Option<usize> {
        self.parent_id
    }
    pub fn depth(&self) -> usize {
        self.depth
    }
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
    pub fn branching_decisions(&self) -> &BranchingDecisions {
        &self.fixation
    }
    pub fn relaxed_solution(&self) -> &FractionalSolution<'a> {
        &self.relaxed_solution
    }
    /// The objective value of the relaxed solution
    pub fn relaxed_value(&self) -> Fraction {
        self.relaxed_value
    }
    /// Whether the relaxed solution is fractionally feasible
    pub fn is_fractionally_feasible(&self) -> bool {
        self.feasible
    }
    pub fn status(&self) -> NodeStatus {
        self.status
    }

    /// Moves the node forward in its lifecycle.
    ///
    /// # Panics
    /// When the node already reached a terminal status, or when it would go
    /// back to `Unknown`/`Enqueued`.
    pub(crate) fn set_status(&mut self, status: NodeStatus) {
        let legal = match (self.status, status) {
            (NodeStatus::Unknown, NodeStatus::Enqueued) => true,
            (NodeStatus::Unknown | NodeStatus::Enqueued, s) => s.is_terminal(),
            _ => false,
        };
        assert!(legal, "node {} cannot go from {} to {}", self.id, self.status, status);
        self.status = status;
    }
}

/// The node factory allocates the nodes of the search tree. It solves the
/// relaxation of each new node, gives it a unique (increasing) identifier,
/// links it to its parent and notifies the observer about its creation.
pub struct NodeFactory<'a, 'b> {
    instance: &'a Instance,
    relaxation: &'b dyn RelaxationSolver,
    next_id: usize,
}

impl<'a, 'b> NodeFactory<'a, 'b> {
    pub fn new(instance: &'a Instance, relaxation: &'b dyn RelaxationSolver) -> Self {
        NodeFactory { instance, relaxation, next_id: 0 }
    }
    /// Number of nodes created so far. This counter never decreases.
    pub fn num_nodes(&self) -> usize {
        self.next_id
    }

    /// Creates the root of the search tree (nothing is fixed)
    pub fn create_root(&mut self, observer: &mut dyn SearchObserver) -> Result<BnBNode<'a>, Error> {
        let fixation = BranchingDecisions::new(self.instance.nb_items());
        self.create(None, 0, fixation, observer)
    }
    /// Creates the child of `parent` which is identified by `fixation`
    pub fn create_child(
        &mut self,
        parent: &BnBNode<'a>,
        fixation: BranchingDecisions,
        observer: &mut dyn SearchObserver,
    ) -> Result<BnBNode<'a>, Error> {
        self.create(Some(parent.id()), parent.depth() + 1, fixation, observer)
    }

    fn create(
        &mut self,
        parent_id: Option<usize>,
        depth: usize,
        fixation: BranchingDecisions,
        observer: &mut dyn SearchObserver,
    ) -> Result<BnBNode<'a>, Error> {
        let relaxed = self.relaxation.solve(self.instance, &fixation)?;
        assert!(
            fixation.iter().zip(relaxed.selection().iter())
                .all(|(fixed, x)| fixed.as_fraction().map_or(true, |v| v == *x)),
            "the relaxation is not allowed to change the fixed part of a solution"
        );
        let node = BnBNode::new(self.next_id, parent_id, depth, fixation, relaxed);
        self.next_id += 1;
        observer.on_new_node_in_tree(&node);
        Ok(node)
    }
}
