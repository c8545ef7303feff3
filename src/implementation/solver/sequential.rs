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

//! This module provides the implementation of the branch-and-bound driver.
//! It explores the tree with one single thread of execution: nodes are
//! popped off the frontier one at a time, classified, and either discarded,
//! accepted as solutions, or split into children that go back to the
//! frontier.

use log::{debug, info, warn};

use crate::{
    BnBNode, Bound, BranchingStrategy, Completion, Error, FractionalSolution, Frontier, Heuristics, Instance,
    NoObserver, NodeFactory, NodeStatus, RelaxationSolver, SearchConfig, SearchObserver, SearchState, SolutionSet,
    Solver, Statistics,
};

/// The branch-and-bound search driver. All the strategies are injected at
/// construction time and only borrowed: the caller keeps ownership of them
/// (and can inspect them, the frontier in particular, once the search is
/// over).
///
/// # Example
/// ```
/// # use knapsack_bnb::*;
/// let instance = Instance::new(
///     vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)], 5);
///
/// let mut frontier = SimpleFrontier::new(BestBound);
/// let mut search = BnBSearch::new(&instance, &GreedyRelaxation, &mut frontier, &FirstFractional, &NoHeuristic);
///
/// let best = search.search(100).unwrap().unwrap();
/// assert_eq!(Fraction::from(7u64), best.value());
/// assert_eq!(vec![0, 1], best.packed_items().collect::<Vec<_>>());
/// ```
pub struct BnBSearch<'a, 'b> {
    instance: &'a Instance,
    factory: NodeFactory<'a, 'b>,
    frontier: &'b mut dyn Frontier<'a>,
    branching: &'b dyn BranchingStrategy,
    heuristics: &'b dyn Heuristics,
    observer: Box<dyn SearchObserver + 'b>,

    config: SearchConfig,
    solutions: SolutionSet<'a>,
    state: SearchState,
    stats: Statistics,
    /// the tightest global upper bound known so far
    best_ub: Bound,
    /// the error that interrupted the search, if it did not complete
    failure: Option<Error>,
}

impl<'a, 'b> BnBSearch<'a, 'b> {
    pub fn new(
        instance: &'a Instance,
        relaxation: &'b dyn RelaxationSolver,
        frontier: &'b mut dyn Frontier<'a>,
        branching: &'b dyn BranchingStrategy,
        heuristics: &'b dyn Heuristics,
    ) -> Self {
        let config = SearchConfig::default();
        BnBSearch {
            instance,
            factory: NodeFactory::new(instance, relaxation),
            frontier,
            branching,
            heuristics,
            observer: Box::new(NoObserver),
            //
            config,
            solutions: Self::solution_set(&config),
            state: SearchState::NotStarted,
            stats: Statistics::default(),
            best_ub: Bound::PosInfinity,
            failure: None,
        }
    }
    /// Uses the given configuration instead of the default one
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self.solutions = Self::solution_set(&config);
        self
    }
    /// Reports the events of the search to the given observer. Pass it by
    /// mutable reference if you want to inspect it after the search.
    pub fn with_observer<O: SearchObserver + 'b>(mut self, observer: O) -> Self {
        self.observer = Box::new(observer);
        self
    }

    fn solution_set(config: &SearchConfig) -> SolutionSet<'a> {
        if config.keep_all_solutions {
            SolutionSet::new()
        } else {
            SolutionSet::improving_only()
        }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
    /// All the distinct solutions found so far (and the incumbent)
    pub fn solutions(&self) -> &SolutionSet<'a> {
        &self.solutions
    }
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }
    pub fn state(&self) -> SearchState {
        self.state
    }
    /// Number of nodes created so far
    pub fn num_nodes(&self) -> usize {
        self.factory.num_nodes()
    }

    /// Explores the tree until optimality is proved, and returns the best
    /// solution that has been found (None when there is no solution at all).
    ///
    /// A search can only be run once: searching again yields the outcome of
    /// the previous search (its incumbent, or the error that interrupted it).
    ///
    /// # Errors
    /// `IterationLimitExceeded` when `iteration_limit` nodes have been
    /// processed and the search is not over. The solutions found so far
    /// remain available through `solutions()` but are not proved optimal.
    pub fn search(&mut self, iteration_limit: usize) -> Result<Option<FractionalSolution<'a>>, Error> {
        if self.state == SearchState::Finished {
            return match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(self.solutions.best_solution().cloned()),
            };
        }

        self.state = SearchState::Running;
        self.observer.on_search_start(self.instance);
        info!("searching {} items with capacity {} (iteration limit {})",
            self.instance.nb_items(), self.instance.capacity(), iteration_limit);

        let outcome = self.explore(iteration_limit);

        self.state = SearchState::Finished;
        self.failure = outcome.as_ref().err().cloned();
        self.stats.nodes_created = self.factory.num_nodes();
        self.observer.on_search_end(&self.stats);
        info!("search finished: {}", self.stats);

        outcome?;
        Ok(self.solutions.best_solution().cloned())
    }

    fn explore(&mut self, iteration_limit: usize) -> Result<(), Error> {
        self.frontier.clear();
        let root = self.factory.create_root(self.observer.as_mut())?;
        self.enqueue(root);
        self.best_ub = self.frontier.upper_bound().max(self.solutions.best_solution_value());

        let mut budget = iteration_limit;
        while self.frontier.has_next() {
            if budget == 0 {
                warn!("iteration limit of {} reached (best {} / bound {})",
                    iteration_limit, self.solutions.best_solution_value(), self.best_ub);
                return Err(Error::IterationLimitExceeded { limit: iteration_limit });
            }

            let node = self.frontier.next()?;
            budget -= 1;
            self.process_node(node)?;

            if self.best_ub <= self.solutions.best_solution_value() {
                break;
            }
        }
        self.best_ub = self.solutions.best_solution_value();
        Ok(())
    }

    /// Classifies the node, and acts accordingly
    fn process_node(&mut self, mut node: BnBNode<'a>) -> Result<(), Error> {
        let incumbent = self.solutions.best_solution_value();
        let mut heuristic_solutions = vec![];

        let status = if !node.is_fractionally_feasible() {
            NodeStatus::Infeasible
        } else if Bound::Finite(node.relaxed_value()) <= incumbent {
            NodeStatus::Pruned
        } else if node.relaxed_solution().is_integral() {
            self.record(node.relaxed_solution().clone());
            NodeStatus::Feasible
        } else {
            heuristic_solutions = self.run_heuristics(&node);
            self.branch(&node)?;
            NodeStatus::Branched
        };
        node.set_status(status);
        self.stats.record(status);
        self.stats.nodes_created = self.factory.num_nodes();

        let lb = self.solutions.best_solution_value();
        self.best_ub = self.frontier.upper_bound().max(lb);
        debug!("node {} (depth {}, value {}) is {} - lb {} ub {}",
            node.id(), node.depth(), node.relaxed_value(), status, lb, self.best_ub);

        self.observer.on_node_processed(&node, lb, self.best_ub, self.solutions.best_solution(), &heuristic_solutions);
        Ok(())
    }

    /// Streams the solutions of the primal heuristics into the solution set
    fn run_heuristics(&mut self, node: &BnBNode<'a>) -> Vec<FractionalSolution<'a>> {
        let heuristics = self.heuristics;
        let instance = self.instance;
        let mut found = vec![];
        heuristics.search(instance, node, &mut |solution: FractionalSolution<'a>| {
            assert!(solution.is_fractionally_feasible() && solution.is_integral(),
                "heuristics must yield feasible integral solutions: {solution}");
            debug!("heuristic solution {} of value {} at node {}", solution, solution.value(), node.id());
            self.stats.heuristic_solutions += 1;
            self.record(solution.clone());
            self.observer.on_heuristic_solution(node, &solution, self.solutions.best_solution_value());
            found.push(solution);
        });
        found
    }

    /// Creates and enqueues the children of the node
    fn branch(&mut self, node: &BnBNode<'a>) -> Result<(), Error> {
        let children = self.branching.make_branching_decisions(node)?;
        assert!(!children.is_empty(), "node {} is fractional but has no child", node.id());

        for fixation in children {
            assert!(fixation.refines(node.branching_decisions()),
                "the children of node {} must be more constrained than their parent", node.id());
            let child = self.factory.create_child(node, fixation, self.observer.as_mut())?;
            self.enqueue(child);
        }
        Ok(())
    }

    fn enqueue(&mut self, mut node: BnBNode<'a>) {
        node.set_status(NodeStatus::Enqueued);
        self.frontier.enqueue(node);
    }

    fn record(&mut self, solution: FractionalSolution<'a>) {
        let value = solution.value();
        if self.solutions.add(solution) {
            info!("new incumbent of value {} ({} nodes created)", value, self.factory.num_nodes());
        }
    }
}

impl<'a> Solver<'a> for BnBSearch<'a, '_> {
    fn maximize(&mut self) -> Result<Completion, Error> {
        match self.search(self.config.iteration_limit) {
            Ok(_) | Err(Error::IterationLimitExceeded { .. }) => Ok(Completion {
                is_exact: self.failure.is_none(),
                best_value: self.best_value(),
            }),
            Err(e) => Err(e),
        }
    }
    fn best_solution(&self) -> Option<&FractionalSolution<'a>> {
        self.solutions.best_solution()
    }
    fn best_lower_bound(&self) -> Bound {
        self.solutions.best_solution_value()
    }
    fn best_upper_bound(&self) -> Bound {
        self.best_ub
    }
}
