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

//! This module provides the implementation of the search driver and of its
//! configuration.

mod sequential;

pub use sequential::*;

use derive_builder::Builder;

/// The default number of nodes a search may process before giving up
pub const DEFAULT_ITERATION_LIMIT: usize = 10_000;

/// This is how you configure a search, e.g.
/// ```
/// # use knapsack_bnb::*;
/// let config = SearchConfigBuilder::default()
///     .iteration_limit(500)
///     .build()
///     .unwrap();
/// assert_eq!(500, config.iteration_limit);
/// assert!(config.keep_all_solutions);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct SearchConfig {
    /// The maximum number of nodes that are processed by one search. When it
    /// is reached before optimality is proved, the search fails with
    /// `IterationLimitExceeded`.
    #[builder(default = "DEFAULT_ITERATION_LIMIT")]
    pub iteration_limit: usize,
    /// This flag must be true (default) if you want the solution set to
    /// remember every distinct solution found during the search, and not
    /// only those that improved the incumbent when they were found.
    #[builder(default = "true")]
    pub keep_all_solutions: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { iteration_limit: DEFAULT_ITERATION_LIMIT, keep_all_solutions: true }
    }
}
