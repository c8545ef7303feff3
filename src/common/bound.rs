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

//! Bounds on the objective value of the search.

use std::fmt;

use crate::Fraction;

/// A bound on the objective value. It extends the (non-negative) fractions
/// with both infinities so that "no solution yet" and "nothing left to
/// explore" can be compared with actual values.
///
/// The derived ordering follows the declaration order of the variants:
/// `NegInfinity < Finite(_) < PosInfinity`, and two finite bounds compare
/// by their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bound {
    NegInfinity,
    Finite(Fraction),
    PosInfinity,
}

impl Bound {
    /// Returns the finite value of this bound, if there is one
    pub fn value(self) -> Option<Fraction> {
        match self {
            Bound::Finite(x) => Some(x),
            _ => None,
        }
    }
    pub fn is_finite(self) -> bool {
        matches!(self, Bound::Finite(_))
    }
    /// Lossy conversion, only meant for reporting purposes
    pub fn to_f64(self) -> f64 {
        match self {
            Bound::NegInfinity => f64::NEG_INFINITY,
            Bound::Finite(x) => x.to_f64(),
            Bound::PosInfinity => f64::INFINITY,
        }
    }
}

impl From<Fraction> for Bound {
    fn from(x: Fraction) -> Self {
        Bound::Finite(x)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::NegInfinity => write!(f, "-inf"),
            Bound::Finite(x) => write!(f, "{x}"),
            Bound::PosInfinity => write!(f, "+inf"),
        }
    }
}
