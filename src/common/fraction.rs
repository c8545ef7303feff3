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

//! This module defines the exact arithmetic used by the relaxations and the
//! objective values. All inputs of a knapsack instance are integers, hence
//! every fractional selection is a rational number. Working with exact
//! rationals guarantees that two relaxations of the same node always yield
//! bit-identical bounds and that no drift ever creeps into a fixed value.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

use num::rational::Ratio;
use num::traits::{CheckedAdd, CheckedMul, CheckedSub};

/// A non-negative rational number `numerator / denominator`, always stored
/// in reduced form. Because of that normal form, structural equality (and
/// hashing) coincides with numeric equality.
///
/// Comparisons never overflow, whatever the magnitude of the operands. The
/// arithmetic operators are checked: a result which cannot be represented
/// exactly is a panic, never a silently wrapped value. The weights and values
/// of an `Item` are bounded so that the relaxations and bounds computed on
/// an instance always stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fraction(Ratio<u128>);

impl Fraction {
    pub const ZERO: Fraction = Fraction(Ratio::new_raw(0, 1));
    pub const ONE: Fraction = Fraction(Ratio::new_raw(1, 1));
    pub const HALF: Fraction = Fraction(Ratio::new_raw(1, 2));

    /// Creates and normalizes the fraction `num / den`.
    ///
    /// # Panics
    /// When `den` is zero.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack_bnb::Fraction;
    /// let x = Fraction::new(6, 4);
    /// assert_eq!(3, x.numerator());
    /// assert_eq!(2, x.denominator());
    /// assert_eq!(Fraction::ZERO, Fraction::new(0, 7));
    /// ```
    pub fn new(num: u128, den: u128) -> Self {
        assert!(den != 0, "a fraction cannot have a zero denominator");
        Fraction(Ratio::new(num, den))
    }
    /// Returns the integer `n` as a fraction
    pub fn from_integer(n: u128) -> Self {
        Fraction(Ratio::from_integer(n))
    }
    pub fn numerator(self) -> u128 {
        *self.0.numer()
    }
    pub fn denominator(self) -> u128 {
        *self.0.denom()
    }
    pub fn is_zero(self) -> bool {
        self.numerator() == 0
    }
    pub fn is_one(self) -> bool {
        self == Self::ONE
    }
    /// True iff this fraction equals its rounded integer value
    pub fn is_integer(self) -> bool {
        self.0.is_integer()
    }
    /// The largest integer that is not greater than this fraction
    pub fn floor(self) -> u128 {
        self.0.floor().to_integer()
    }
    /// The smallest integer that is not less than this fraction
    pub fn ceil(self) -> u128 {
        self.0.ceil().to_integer()
    }
    /// The absolute difference between two fractions
    pub fn distance(self, other: Fraction) -> Fraction {
        if self >= other {
            self - other
        } else {
            other - self
        }
    }
    /// Lossy conversion, only meant for reporting purposes
    pub fn to_f64(self) -> f64 {
        self.numerator() as f64 / self.denominator() as f64
    }
}

/// Unwraps the outcome of a checked operation
#[track_caller]
fn exact(result: Option<Ratio<u128>>, op: &str) -> Fraction {
    match result {
        Some(x) => Fraction(x),
        None => panic!("the {op} of two fractions cannot be represented exactly"),
    }
}

impl From<u64> for Fraction {
    fn from(n: u64) -> Self {
        Fraction::from_integer(u128::from(n))
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        exact(self.0.checked_add(&rhs.0), "sum")
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    /// # Panics
    /// When the result would be negative.
    fn sub(self, rhs: Fraction) -> Fraction {
        assert!(self >= rhs, "fractions are non-negative: {self} - {rhs} underflows");
        exact(self.0.checked_sub(&rhs.0), "difference")
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        if self.is_zero() || rhs.is_zero() {
            return Fraction::ZERO;
        }
        exact(self.0.checked_mul(&rhs.0), "product")
    }
}

impl Mul<u64> for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: u64) -> Fraction {
        self * Fraction::from(rhs)
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::ZERO, |acc, x| acc + x)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}
