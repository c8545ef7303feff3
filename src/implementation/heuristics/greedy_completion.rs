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

//! This module provides a greedy completion heuristic followed by a bounded
//! 1-exchange local search.

use log::debug;

use crate::{BnBNode, FractionalSolution, Heuristics, Instance, SolutionCallback};

/// The greedy completion heuristic turns the relaxed solution of a node into
/// an integral one:
///
/// 1. the fractional items are left out;
/// 2. the unassigned items are then packed in decreasing density order, as
///    long as they fit;
/// 3. the result is improved with 1-exchange moves (swap one packed item for
///    one unpacked item when it strictly increases the value and still fits,
///    then pack whatever fits again). At most one round per item is made.
///
/// The fixations of the node are always respected. It yields the completed
/// solution and, when it differs, the improved one.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyCompletion;

impl Heuristics for GreedyCompletion {
    fn search<'a>(&self, instance: &'a Instance, node: &BnBNode<'a>, f: &mut dyn SolutionCallback<'a>) {
        let fixation = node.branching_decisions();
        let mut packed = node.relaxed_solution().selection().iter()
            .map(|x| x.is_one())
            .collect::<Vec<_>>();

        let used = weight_of(instance, &packed);
        let Some(mut remaining) = u128::from(instance.capacity()).checked_sub(used) else {
            // the fixed part alone does not fit
            return;
        };

        let free = instance.density_order(fixation.unassigned());
        fill(instance, &free, &mut packed, &mut remaining);

        let completed = packed.clone();
        let mut rounds = 0;
        while rounds < instance.nb_items() && exchange(instance, &free, &mut packed, &mut remaining) {
            fill(instance, &free, &mut packed, &mut remaining);
            rounds += 1;
        }
        debug!("greedy completion of node {} improved in {} round(s)", node.id(), rounds);

        if let Ok(solution) = FractionalSolution::from_packed(instance, completed.iter().copied()) {
            f.apply(solution);
        }
        if packed != completed {
            if let Ok(solution) = FractionalSolution::from_packed(instance, packed) {
                f.apply(solution);
            }
        }
    }
}

fn weight_of(instance: &Instance, packed: &[bool]) -> u128 {
    packed.iter().enumerate()
        .filter(|(_, p)| **p)
        .map(|(i, _)| u128::from(instance.item(i).weight))
        .sum()
}

/// Packs every free item that still fits, in the order of `free`
fn fill(instance: &Instance, free: &[usize], packed: &mut [bool], remaining: &mut u128) {
    for &i in free {
        let weight = u128::from(instance.item(i).weight);
        if !packed[i] && weight <= *remaining {
            packed[i] = true;
            *remaining -= weight;
        }
    }
}

/// Performs the best improving swap between a packed and an unpacked free
/// item. Returns false when there is none.
fn exchange(instance: &Instance, free: &[usize], packed: &mut [bool], remaining: &mut u128) -> bool {
    let mut best: Option<(u32, usize, usize)> = None;
    for &out in free.iter().filter(|i| packed[**i]) {
        let left = instance.item(out);
        let room = *remaining + u128::from(left.weight);
        for &inn in free.iter().filter(|i| !packed[**i]) {
            let right = instance.item(inn);
            if right.value > left.value && u128::from(right.weight) <= room {
                let gain = right.value - left.value;
                if best.map_or(true, |(g, _, _)| gain > g) {
                    best = Some((gain, out, inn));
                }
            }
        }
    }

    match best {
        None => false,
        Some((_, out, inn)) => {
            packed[out] = false;
            packed[inn] = true;
            *remaining = *remaining + u128::from(instance.item(out).weight) - u128::from(instance.item(inn).weight);
            true
        }
    }
}
