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

//! Fractional (and integral) solutions of a knapsack instance.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Error, Fraction, Instance};

/// A solution that possibly selects fractions of items. It is the outcome of
/// a relaxation (in which case at most one item is normally fractional) or of
/// a primal heuristic (in which case it is integral).
///
/// Two fractional solutions are considered to be the same solution whenever
/// their selections are element-wise equal.
#[derive(Debug, Clone)]
pub struct FractionalSolution<'a> {
    instance: &'a Instance,
    selection: Vec<Fraction>,
}

impl<'a> FractionalSolution<'a> {
    /// Creates a new solution selecting `selection[i]` of the i-th item.
    ///
    /// # Errors
    /// `LengthMismatch` when the selection does not cover exactly the items
    /// of the instance.
    pub fn new(instance: &'a Instance, selection: Vec<Fraction>) -> Result<Self, Error> {
        if selection.len() != instance.nb_items() {
            return Err(Error::LengthMismatch {
                expected: instance.nb_items(),
                actual: selection.len(),
            });
        }
        Ok(FractionalSolution { instance, selection })
    }
    /// Creates an integral solution that packs the items for which `packed`
    /// yields true.
    ///
    /// # Example
    /// ```
    /// # use knapsack_bnb::{FractionalSolution, Instance, Item};
    /// let instance = Instance::new(vec![Item::new(2, 3), Item::new(3, 4)], 5);
    /// let solution = FractionalSolution::from_packed(&instance, [true, false]).unwrap();
    /// assert!(solution.is_integral());
    /// assert_eq!(3u64, solution.value().numerator() as u64);
    /// ```
    pub fn from_packed(instance: &'a Instance, packed: impl IntoIterator<Item = bool>) -> Result<Self, Error> {
        let selection = packed.into_iter()
            .map(|x| if x { Fraction::ONE } else { Fraction::ZERO })
            .collect();
        Self::new(instance, selection)
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }
    pub fn selection(&self) -> &[Fraction] {
        &self.selection
    }
    /// Total value of the (fractions of) items packed in this solution
    pub fn value(&self) -> Fraction {
        self.instance.items().iter().zip(self.selection.iter())
            .map(|(item, taken)| *taken * u64::from(item.value))
            .sum()
    }
    /// Total weight of the (fractions of) items packed in this solution
    pub fn weight(&self) -> Fraction {
        self.instance.items().iter().zip(self.selection.iter())
            .map(|(item, taken)| *taken * u64::from(item.weight))
            .sum()
    }
    /// True iff the capacity is respected and every selection lies in [0, 1]
    pub fn is_fractionally_feasible(&self) -> bool {
        self.weight() <= Fraction::from(self.instance.capacity())
            && self.selection.iter().all(|x| *x <= Fraction::ONE)
    }
    /// True iff every item is either fully packed or left out
    pub fn is_integral(&self) -> bool {
        self.selection.iter().all(|x| x.is_integer())
    }
    /// The indices of the items whose selection lies strictly between 0 and 1
    pub fn fractional_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selection.iter().enumerate()
            .filter(|(_, x)| !x.is_integer())
            .map(|(i, _)| i)
    }
    /// The indices of the items that are fully packed
    pub fn packed_items(&self) -> impl Iterator<Item = usize> + '_ {
        self.selection.iter().enumerate()
            .filter(|(_, x)| x.is_one())
            .map(|(i, _)| i)
    }
}

impl PartialEq for FractionalSolution<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.selection == other.selection
    }
}
impl Eq for FractionalSolution<'_> {}
impl Hash for FractionalSolution<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.selection.hash(state)
    }
}

impl fmt::Display for FractionalSolution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.selection.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            if x.is_integer() {
                write!(f, "{x}")?;
            } else {
                write!(f, "{:.1}", x.to_f64())?;
            }
        }
        write!(f, "]")
    }
}
