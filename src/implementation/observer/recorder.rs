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

//! An observer that records the shape of the search tree, so that it can be
//! inspected (or rendered) once the search is over.

use fxhash::FxHashMap;
use serde::Serialize;

use crate::{BnBNode, Bound, FractionalSolution, NodeStatus, SearchObserver};

/// What the recorder remembers about one node of the tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedNode {
    pub id: usize,
    pub parent_id: Option<usize>,
    pub depth: usize,
    /// relaxed objective value (rounded, for display purposes)
    pub relaxed_value: f64,
    pub fractionally_feasible: bool,
    pub integral: bool,
    /// number of nodes processed when this one was created
    pub created_at: usize,
    /// iteration during which this node was processed (if it was)
    pub processed_at: Option<usize>,
    #[serde(serialize_with = "status_as_string")]
    pub status: NodeStatus,
    /// global (lower, upper) bounds right after this node was processed
    pub bounds: Option<(f64, f64)>,
}

fn status_as_string<S: serde::Serializer>(status: &NodeStatus, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(status)
}

/// Records every node that is created and processed during a search, along
/// with the order in which the nodes were processed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TreeRecorder {
    nodes: Vec<RecordedNode>,
    /// ids of the processed nodes, in processing order
    iterations: Vec<usize>,
    #[serde(skip)]
    index: FxHashMap<usize, usize>,
}

impl TreeRecorder {
    /// The recorded nodes, in creation order
    pub fn nodes(&self) -> &[RecordedNode] {
        &self.nodes
    }
    pub fn node(&self, id: usize) -> Option<&RecordedNode> {
        self.index.get(&id).map(|i| &self.nodes[*i])
    }
    /// The ids of the processed nodes, in processing order
    pub fn iterations(&self) -> &[usize] {
        &self.iterations
    }
    /// The children of a node, in creation order
    pub fn children(&self, id: usize) -> impl Iterator<Item = &RecordedNode> {
        self.nodes.iter().filter(move |n| n.parent_id == Some(id))
    }
    /// Serializes the recorded tree as a JSON document
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn rounded(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

impl SearchObserver for TreeRecorder {
    fn on_new_node_in_tree(&mut self, node: &BnBNode<'_>) {
        if let Some(parent) = node.parent_id() {
            assert!(self.index.contains_key(&parent), "node {} created before its parent {}", node.id(), parent);
        }
        self.index.insert(node.id(), self.nodes.len());
        self.nodes.push(RecordedNode {
            id: node.id(),
            parent_id: node.parent_id(),
            depth: node.depth(),
            relaxed_value: rounded(node.relaxed_value().to_f64()),
            fractionally_feasible: node.is_fractionally_feasible(),
            integral: node.relaxed_solution().is_integral(),
            created_at: self.iterations.len(),
            processed_at: None,
            status: node.status(),
            bounds: None,
        });
    }

    fn on_node_processed(
        &mut self,
        node: &BnBNode<'_>,
        lower_bound: Bound,
        upper_bound: Bound,
        _incumbent: Option<&FractionalSolution<'_>>,
        _heuristic_solutions: &[FractionalSolution<'_>],
    ) {
        let iteration = self.iterations.len();
        self.iterations.push(node.id());
        if let Some(i) = self.index.get(&node.id()) {
            let recorded = &mut self.nodes[*i];
            recorded.processed_at = Some(iteration);
            recorded.status = node.status();
            recorded.bounds = Some((lower_bound.to_f64(), upper_bound.to_f64()));
        }
    }
}
