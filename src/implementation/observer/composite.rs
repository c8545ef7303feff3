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

//! A fan-out observer that forwards every event to its children, in
//! insertion order. This lets you combine progress reporting and tree
//! recording without coupling them to the search driver.

use crate::{BnBNode, Bound, FractionalSolution, Instance, SearchObserver, Statistics};

/// An observer that aggregates several observers and forwards each event to
/// all of them.
#[derive(Default)]
pub struct CompositeObserver<'a> {
    observers: Vec<Box<dyn SearchObserver + 'a>>,
}

impl<'a> CompositeObserver<'a> {
    pub fn new() -> Self {
        Self { observers: vec![] }
    }
    /// Adds a new observer to the composite observer.
    pub fn add_observer<O>(&mut self, observer: O)
    where
        O: SearchObserver + 'a,
    {
        self.observers.push(Box::new(observer));
    }
    /// Adds a new observer and returns the composite (builder style).
    pub fn with<O>(mut self, observer: O) -> Self
    where
        O: SearchObserver + 'a,
    {
        self.add_observer(observer);
        self
    }
    pub fn len(&self) -> usize {
        self.observers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn SearchObserver + 'a>> for CompositeObserver<'a> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchObserver + 'a>>,
    {
        Self { observers: iter.into_iter().collect() }
    }
}

impl SearchObserver for CompositeObserver<'_> {
    fn on_search_start(&mut self, instance: &Instance) {
        for observer in &mut self.observers {
            observer.on_search_start(instance);
        }
    }
    fn on_new_node_in_tree(&mut self, node: &BnBNode<'_>) {
        for observer in &mut self.observers {
            observer.on_new_node_in_tree(node);
        }
    }
    fn on_heuristic_solution(&mut self, node: &BnBNode<'_>, solution: &FractionalSolution<'_>, incumbent: Bound) {
        for observer in &mut self.observers {
            observer.on_heuristic_solution(node, solution, incumbent);
        }
    }
    fn on_node_processed(
        &mut self,
        node: &BnBNode<'_>,
        lower_bound: Bound,
        upper_bound: Bound,
        incumbent: Option<&FractionalSolution<'_>>,
        heuristic_solutions: &[FractionalSolution<'_>],
    ) {
        for observer in &mut self.observers {
            observer.on_node_processed(node, lower_bound, upper_bound, incumbent, heuristic_solutions);
        }
    }
    fn on_search_end(&mut self, statistics: &Statistics) {
        for observer in &mut self.observers {
            observer.on_search_end(statistics);
        }
    }
}
