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

//! The errors that are surfaced to the caller of the search engine.
//!
//! Only the violations of the *input* contract and the exhaustion of the
//! resources of a search are reported this way. A plug-in strategy which
//! breaks its own contract (a relaxation changing a fixed value, a heuristic
//! returning an infeasible solution, ...) is a programming defect: it is
//! caught with an assertion and never recovered from.

/// This enumeration groups the kinds of failure that can occur while
/// describing an instance, fixing decisions or running a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A fixation (or selection) does not cover exactly the items of the instance
    #[error("length mismatch: expected {expected} entries but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// There is no item with the given index
    #[error("index {index} is out of bounds (length {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    /// An item can only ever be fixed once
    #[error("item {index} is already fixed")]
    AlreadyFixed { index: usize },
    /// An item can only be fixed to zero or one
    #[error("invalid fixation value {value}: must be 0 or 1")]
    InvalidFixValue { value: u8 },
    /// The frontier has no node left to process
    #[error("no more nodes to explore")]
    EmptyFrontier,
    /// The search was interrupted before optimality could be proved
    #[error("iteration limit of {limit} reached before the search completed")]
    IterationLimitExceeded { limit: usize },
}
