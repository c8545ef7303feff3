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

//! This module defines the partial assignments that identify the position
//! of a node in the branch-and-bound tree.

use std::ops::Index;

use crate::{Error, Fraction};

/// The fixation of one single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fixation {
    /// Nothing has been decided about this item yet
    #[default]
    Unassigned,
    /// The item has been fixed to the given value (either 0 or 1)
    Fixed(u8),
}

impl Fixation {
    pub fn is_fixed(self) -> bool {
        matches!(self, Fixation::Fixed(_))
    }
    /// The fixed value, if any
    pub fn value(self) -> Option<u8> {
        match self {
            Fixation::Fixed(v) => Some(v),
            Fixation::Unassigned => None,
        }
    }
    /// The fixed value as a selection, if any
    pub fn as_fraction(self) -> Option<Fraction> {
        self.value().map(|v| Fraction::from(u64::from(v)))
    }
}

/// A partial 0/1 assignment over the items of an instance. Its length equals
/// the number of items and never changes.
///
/// Fixing an item is an append-only operation: once an index is fixed, it
/// can never be reassigned through the same value. Creating the children of
/// a node (`split_on`) always produces *new* decisions and leaves the parent
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BranchingDecisions {
    assignments: Vec<Fixation>,
}

impl BranchingDecisions {
    /// Creates a fixation of `len` unassigned items
    pub fn new(len: usize) -> Self {
        BranchingDecisions { assignments: vec![Fixation::Unassigned; len] }
    }
    pub fn len(&self) -> usize {
        self.assignments.len()
    }
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
    /// The fixation of the item at `index` (None when out of bounds)
    pub fn get(&self, index: usize) -> Option<Fixation> {
        self.assignments.get(index).copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = Fixation> + '_ {
        self.assignments.iter().copied()
    }
    /// The indices of the items that have not been fixed yet
    pub fn unassigned(&self) -> impl Iterator<Item = usize> + '_ {
        self.assignments.iter().enumerate()
            .filter(|(_, f)| !f.is_fixed())
            .map(|(i, _)| i)
    }
    pub fn nb_fixed(&self) -> usize {
        self.assignments.iter().filter(|f| f.is_fixed()).count()
    }
    /// True iff every item has been fixed
    pub fn is_complete(&self) -> bool {
        self.assignments.iter().all(|f| f.is_fixed())
    }

    /// Fixes the usage of the item at `index` to `value`.
    ///
    /// # Errors
    /// * `InvalidFixValue` when value is neither 0 nor 1
    /// * `IndexOutOfBounds` when there is no such item
    /// * `AlreadyFixed` when the item has been fixed before
    pub fn fix(&mut self, index: usize, value: u8) -> Result<(), Error> {
        if value > 1 {
            return Err(Error::InvalidFixValue { value });
        }
        let len = self.len();
        let slot = self.assignments.get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        if slot.is_fixed() {
            return Err(Error::AlreadyFixed { index });
        }
        *slot = Fixation::Fixed(value);
        Ok(())
    }

    /// Splits these decisions on the item at `index`. The left copy does not
    /// use the item (fixed to 0) while the right one does (fixed to 1).
    ///
    /// # Example
    /// ```
    /// # use knapsack_bnb::{BranchingDecisions, Fixation};
    /// let decisions = BranchingDecisions::new(3);
    /// let (left, right) = decisions.split_on(1).unwrap();
    /// assert_eq!(Fixation::Fixed(0), left[1]);
    /// assert_eq!(Fixation::Fixed(1), right[1]);
    /// assert_eq!(Fixation::Unassigned, decisions[1]);
    /// ```
    pub fn split_on(&self, index: usize) -> Result<(Self, Self), Error> {
        let mut left = self.clone();
        let mut right = self.clone();
        left.fix(index, 0)?;
        right.fix(index, 1)?;
        Ok((left, right))
    }

    /// Returns true iff `self` is strictly more constrained than `parent`:
    /// it agrees with every fixation of the parent and fixes at least one more
    /// item.
    pub fn refines(&self, parent: &BranchingDecisions) -> bool {
        self.len() == parent.len()
            && self.nb_fixed() > parent.nb_fixed()
            && parent.iter().zip(self.iter())
                .all(|(p, c)| !p.is_fixed() || p == c)
    }
}

impl Index<usize> for BranchingDecisions {
    type Output = Fixation;

    fn index(&self, index: usize) -> &Fixation {
        &self.assignments[index]
    }
}
