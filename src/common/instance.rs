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

//! The description of a binary knapsack problem instance.

use serde::{Deserialize, Serialize};

use crate::Fraction;

/// An item that may (or may not) be packed in the sack.
///
/// # Note:
/// Weights and values are 32 bits wide. This guarantees that every relaxed
/// value and every bound computed on an instance is an exact `Fraction`
/// (and hence that comparing them never overflows), whatever the number of
/// items and the capacity of the sack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub weight: u32,
    pub value: u32,
}

impl Item {
    pub fn new(weight: u32, value: u32) -> Self {
        Item { weight, value }
    }
    /// The value per unit of weight of this item. Items that weigh nothing
    /// have an infinite density: they can always be packed for free.
    pub fn density(&self) -> Density {
        if self.weight == 0 {
            Density::Infinite
        } else {
            Density::Finite(Fraction::new(u128::from(self.value), u128::from(self.weight)))
        }
    }
}

/// The value/weight ratio of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Density {
    Finite(Fraction),
    Infinite,
}

/// An instance of the binary knapsack problem: a sequence of items and the
/// capacity of the sack. An instance is immutable once it has been created;
/// it is shared (read only) by all the components of a search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instance {
    items: Vec<Item>,
    capacity: u64,
}

impl Instance {
    pub fn new(items: Vec<Item>, capacity: u64) -> Self {
        Instance { items, capacity }
    }
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    /// # Panics
    /// When there is no such item
    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }
    pub fn capacity(&self) -> u64 {
        self.capacity
    }
    pub fn nb_items(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// Returns the given item indices sorted by decreasing density. Items
    /// having the same density keep their relative order of increasing index,
    /// which makes every greedy procedure built on top of it deterministic.
    ///
    /// # Example
    /// ```
    /// # use knapsack_bnb::{Instance, Item};
    /// let instance = Instance::new(vec![Item::new(2, 2), Item::new(1, 3), Item::new(4, 4)], 5);
    /// assert_eq!(vec![1, 0, 2], instance.density_order(0..3));
    /// ```
    pub fn density_order(&self, indices: impl IntoIterator<Item = usize>) -> Vec<usize> {
        let mut order = indices.into_iter().collect::<Vec<_>>();
        order.sort_by(|a, b| {
            self.items[*b].density().cmp(&self.items[*a].density())
                .then_with(|| a.cmp(b))
        });
        order
    }
}
