// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Sorted sequence of intervals shared by the mutable and the frozen set.
//!
//! Every sequence produced here is canonical: sorted by `comes_before`, without empty, overlapping or adjacent intervals. The binary operations walk both operands once, in the manner of a merge.

use crate::error::Error;
use crate::extended::Extended::{NegInf, PosInf};
use crate::interval::{CutResult, Interval, ToInterval};
use crate::ops::{Adjacent, Hull};
use gcollections::ops::*;
use itertools::Itertools;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Canonical<T> {
  intervals: Vec<Interval<T>>
}

impl<T> Canonical<T>
{
  pub fn new() -> Canonical<T> {
    Canonical { intervals: vec![] }
  }

  pub fn as_slice(&self) -> &[Interval<T>] {
    &self.intervals
  }

  pub fn len(&self) -> usize {
    self.intervals.len()
  }

  pub fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }

  pub fn front(&self) -> Option<&Interval<T>> {
    self.intervals.first()
  }

  pub fn back(&self) -> Option<&Interval<T>> {
    self.intervals.last()
  }

  pub fn clear(&mut self) {
    self.intervals.clear();
  }

  pub fn pop(&mut self) -> Option<Interval<T>> {
    self.intervals.pop()
  }

  /// Removing any stored interval keeps the sequence canonical.
  pub fn remove_at(&mut self, index: usize) -> Option<Interval<T>> {
    if index < self.intervals.len() {
      Some(self.intervals.remove(index))
    } else {
      None
    }
  }
}

impl<T: PartialOrd + Clone> Canonical<T>
{
  pub fn from_interval(interval: Interval<T>) -> Canonical<T> {
    let mut res = Canonical::new();
    res.join_or_push(interval);
    res
  }

  /// Sorts the intervals then merges them from left to right.
  pub fn from_intervals<I>(intervals: I) -> Canonical<T> where
   I: IntoIterator<Item=Interval<T>>
  {
    let mut sorted: Vec<_> = intervals.into_iter()
      .filter(|i| !i.is_empty())
      .collect();
    // Stored bounds are orderable, so two intervals are always comparable.
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mut res = Canonical::new();
    for interval in sorted {
      res.join_or_push(interval);
    }
    res
  }

  pub fn try_from_items<I>(items: I) -> Result<Canonical<T>, Error> where
   I: IntoIterator,
   I::Item: ToInterval<T>
  {
    let intervals = items.into_iter()
      .map(ToInterval::to_interval)
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Canonical::from_intervals(intervals))
  }

  /// Appends `interval`, merging it with the last interval when they overlap or touch. `interval` must not come before the last interval.
  fn join_or_push(&mut self, interval: Interval<T>) {
    if interval.is_empty() {
      return;
    }
    match self.intervals.last_mut() {
      Some(back) if back.overlaps(&interval) || back.adjacent_to(&interval) => {
        debug_assert!(!interval.comes_before(back),
          "Intervals must be pushed in increasing order.");
        *back = back.hull(&interval);
      }
      _ => self.intervals.push(interval)
    }
  }

  /// Folds every stored interval overlapping or adjacent to `interval` into it, then places the result at its sorted position.
  pub fn insert(&mut self, interval: Interval<T>) {
    if interval.is_empty() {
      return;
    }
    let before = self.intervals.len();
    let mut merged = interval;
    self.intervals.retain(|i| {
      if i.overlaps(&merged) || i.adjacent_to(&merged) {
        merged = merged.hull(i);
        false
      } else {
        true
      }
    });
    tracing::trace!(merged = before - self.intervals.len(), "insert interval");
    let at = self.intervals.partition_point(|i| i.comes_before(&merged));
    self.intervals.insert(at, merged);
  }

  /// Removes every point of `interval` from the sequence.
  pub fn discard(&mut self, interval: &Interval<T>) {
    if interval.is_empty() {
      return;
    }
    let intervals = std::mem::take(&mut self.intervals);
    for i in intervals {
      if i.overlaps(interval) {
        let CutResult { before_cut, after_cut, .. } = i.cut(interval);
        self.intervals.extend(before_cut);
        self.intervals.extend(after_cut);
      } else {
        self.intervals.push(i);
      }
    }
  }

  pub fn contains(&self, value: &T) -> bool {
    self.intervals.iter().any(|i| i.contains(value))
  }

  /// `true` if a single stored interval covers `interval`.
  pub fn contains_interval(&self, interval: &Interval<T>) -> bool {
    self.intervals.iter().any(|i| i.contains_interval(interval))
  }

  pub fn is_subset(&self, other: &Canonical<T>) -> bool {
    self.intervals.iter().all(|i| other.contains_interval(i))
  }

  /// Hull of the whole sequence, the empty interval if there is nothing stored.
  pub fn span(&self) -> Interval<T> {
    match (self.front(), self.back()) {
      (Some(front), Some(back)) => front.hull(back),
      _ => Interval::none()
    }
  }

  pub fn overlaps(&self, other: &Canonical<T>) -> bool {
    let mut a = self.intervals.iter().peekable();
    let mut b = other.intervals.iter().peekable();
    while let (Some(&i), Some(&j)) = (a.peek(), b.peek()) {
      if i.overlaps(j) {
        return true;
      }
      advance_lub(i, j, &mut a, &mut b);
    }
    false
  }

  pub fn union(&self, other: &Canonical<T>) -> Canonical<T> {
    let mut res = Canonical::new();
    let merged = self.intervals.iter()
      .merge_by(&other.intervals, |i, j| !j.comes_before(i));
    for interval in merged {
      res.join_or_push(interval.clone());
    }
    res
  }

  pub fn intersection(&self, other: &Canonical<T>) -> Canonical<T> {
    let mut res = Canonical::new();
    let mut a = self.intervals.iter().peekable();
    let mut b = other.intervals.iter().peekable();
    while let (Some(&i), Some(&j)) = (a.peek(), b.peek()) {
      if i.overlaps(j) {
        res.join_or_push(i.intersection(j));
      }
      advance_lub(i, j, &mut a, &mut b);
    }
    res
  }

  /// Each interval of `self` is cut by the intervals of `other` it overlaps. A cutter is kept for the next interval while it extends past the current one.
  pub fn difference(&self, other: &Canonical<T>) -> Canonical<T> {
    let mut res = Canonical::new();
    let mut cutters = other.intervals.iter().peekable();
    for interval in &self.intervals {
      let mut rest = Some(interval.clone());
      while let Some(current) = rest.take() {
        match cutters.peek() {
          Some(&cutter) if cutter.overlaps(&current) => {
            let CutResult { before_cut, after_cut, .. } = current.cut(cutter);
            if let Some(before) = before_cut {
              res.join_or_push(before);
            }
            if after_cut.is_some() {
              cutters.next();
            }
            rest = after_cut;
          }
          Some(&cutter) if cutter.ends_before(&current) => {
            cutters.next();
            rest = Some(current);
          }
          _ => res.join_or_push(current)
        }
      }
    }
    tracing::trace!(pieces = res.len(), "difference");
    res
  }

  pub fn symmetric_difference(&self, other: &Canonical<T>) -> Canonical<T> {
    self.union(other).difference(&self.intersection(other))
  }

  /// Gaps between the stored intervals, plus the unbounded parts on both sides.
  pub fn complement(&self) -> Canonical<T> {
    let mut res = Canonical::new();
    let (front, back) = match (self.front(), self.back()) {
      (Some(front), Some(back)) => (front, back),
      _ => {
        res.intervals.push(Interval::all());
        return res;
      }
    };
    if front.lower() != &NegInf {
      res.intervals.push(Interval::raw(NegInf, front.lower().clone(), false, !front.lower_closed()));
    }
    for (previous, current) in self.intervals.iter().tuple_windows() {
      res.intervals.push(Interval::raw(
        previous.upper().clone(), current.lower().clone(),
        !previous.upper_closed(), !current.lower_closed()));
    }
    if back.upper() != &PosInf {
      res.intervals.push(Interval::raw(back.upper().clone(), PosInf, !back.upper_closed(), false));
    }
    res
  }
}

impl<T> Canonical<T>
{
  pub fn into_vec(self) -> Vec<Interval<T>> {
    self.intervals
  }
}

// Advance the one with the lower upper bound.
fn advance_lub<'a, I, T>(i: &Interval<T>, j: &Interval<T>,
  a: &mut std::iter::Peekable<I>, b: &mut std::iter::Peekable<I>) where
 I: Iterator<Item=&'a Interval<T>>,
 T: PartialOrd + 'a
{
  if i.ends_before(j) {
    a.next();
  } else {
    b.next();
  }
}
