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

//! This module defines the `RelaxationSolver` trait.

use crate::{BranchingDecisions, Error, FractionalSolution, Instance};

/// A relaxation solver computes the best *fractional* solution that is
/// consistent with a given fixation. Its value is an upper bound on the value
/// of any integral solution reachable below the node being relaxed.
pub trait RelaxationSolver {
    /// Solves the relaxation of `instance` when the items are constrained by
    /// `fixation`.
    ///
    /// # Contract
    /// For every index fixed in `fixation`, the returned selection must be
    /// exactly equal to the fixed value. Breaking this contract is a defect of
    /// the relaxation and aborts the search.
    ///
    /// # Errors
    /// `LengthMismatch` when the fixation does not cover exactly the items of
    /// the instance.
    fn solve<'a>(&self, instance: &'a Instance, fixation: &BranchingDecisions) -> Result<FractionalSolution<'a>, Error>;
}
