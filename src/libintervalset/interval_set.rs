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

//! Mutable set of disjoint intervals.
//!
//! The set keeps the smallest possible sorted list of intervals by merging the ones that overlap or touch. For example `[1..2) U [2..6] U (8..9)` is stored as `{[1..6], (8..9)}`, and `(1..2) U (2..3)` stays as is because the value `2` is not covered.
//!
//! The operators `|` (or `+`), `&`, `-`, `^` and `!` only accept interval sets. The methods ending in `_with` and the `*update` mutators accept any iterable of values, pairs and intervals.
//!
//! # Examples
//!
//! ```rust
//! use intervalset::{Interval, IntervalSet};
//!
//! let mut s = IntervalSet::try_from_iter(vec![
//!   intervalset::Element::Value(2),
//!   intervalset::Element::Interval(Interval::greater_than(8).unwrap()),
//!   intervalset::Element::Value(34)]).unwrap();
//! assert_eq!(s.to_string(), "2,(8...)");
//! s.add(7).unwrap();
//! s.discard(Interval::greater_than(9).unwrap()).unwrap();
//! assert_eq!(s.to_string(), "2,7,(8..9]");
//! assert_eq!((!&s).to_string(), "(...2),(2..7),(7..8],(9...)");
//! ```
//!
//! # See also
//! [frozen interval set](../frozen_interval_set/index.html)

use crate::canonical::Canonical;
use crate::error::Error;
use crate::frozen_interval_set::FrozenIntervalSet;
use crate::interval::{Element, Interval, ToInterval};
use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign, SubAssign};

#[derive(Clone)]
pub struct IntervalSet<T> {
  inner: Canonical<T>
}

impl<T> IntervalSet<T>
{
  pub(crate) fn canonical(&self) -> &Canonical<T> {
    &self.inner
  }

  pub(crate) fn from_canonical(inner: Canonical<T>) -> IntervalSet<T> {
    IntervalSet { inner }
  }

  pub(crate) fn into_vec(self) -> Vec<Interval<T>> {
    self.inner.into_vec()
  }

  pub(crate) fn into_canonical(self) -> Canonical<T> {
    self.inner
  }

  pub fn clear(&mut self) {
    tracing::debug!(len = self.len(), "clear interval set");
    self.inner.clear();
  }

  /// Removes the interval stored at `index`.
  pub fn remove_at(&mut self, index: usize) -> Result<Interval<T>, Error> {
    let len = self.len();
    let removed = self.inner.remove_at(index)
      .ok_or(Error::IndexOutOfRange { index, len })?;
    tracing::debug!(index, "remove interval by position");
    Ok(removed)
  }
}

impl<T: PartialOrd + Clone> IntervalSet<T>
{
  /// Adds `interval`, merging it with the stored intervals it overlaps or touches. The empty interval is ignored.
  pub fn insert(&mut self, interval: Interval<T>) {
    self.inner.insert(interval);
  }

  /// Adds a discrete value, a pair or an interval.
  pub fn add<X>(&mut self, item: X) -> Result<(), Error> where
   X: ToInterval<T>
  {
    let interval = item.to_interval()?;
    self.insert(interval);
    Ok(())
  }

  /// Removes `item`, which must be entirely covered by the set, otherwise fails with `NotFound` and leaves the set unchanged.
  pub fn remove<X>(&mut self, item: X) -> Result<(), Error> where
   X: ToInterval<T>
  {
    let interval = item.to_interval()?;
    if !self.contains_interval(&interval) {
      return Err(Error::NotFound);
    }
    self.inner.discard(&interval);
    Ok(())
  }

  /// Removes whatever part of `item` is in the set.
  pub fn discard<X>(&mut self, item: X) -> Result<(), Error> where
   X: ToInterval<T>
  {
    let interval = item.to_interval()?;
    self.inner.discard(&interval);
    Ok(())
  }

  pub fn update<I>(&mut self, items: I) -> Result<(), Error> where
   I: IntoIterator,
   I::Item: ToInterval<T>
  {
    let other = Canonical::try_from_items(items)?;
    self.inner = self.inner.union(&other);
    Ok(())
  }

  pub fn intersection_update<I>(&mut self, items: I) -> Result<(), Error> where
   I: IntoIterator,
   I::Item: ToInterval<T>
  {
    let other = Canonical::try_from_items(items)?;
    self.inner = self.inner.intersection(&other);
    Ok(())
  }

  pub fn difference_update<I>(&mut self, items: I) -> Result<(), Error> where
   I: IntoIterator,
   I::Item: ToInterval<T>
  {
    let other = Canonical::try_from_items(items)?;
    self.inner = self.inner.difference(&other);
    Ok(())
  }

  pub fn symmetric_difference_update<I>(&mut self, items: I) -> Result<(), Error> where
   I: IntoIterator,
   I::Item: ToInterval<T>
  {
    let other = Canonical::try_from_items(items)?;
    self.inner = self.inner.symmetric_difference(&other);
    Ok(())
  }

  /// Removes and returns the last interval. A single point is returned as a bare value.
  pub fn pop(&mut self) -> Result<Element<T>, Error> {
    let last = self.inner.pop().ok_or(Error::EmptyPop)?;
    tracing::debug!(remaining = self.len(), "pop interval");
    Ok(match last.lower().value() {
      Some(value) if last.is_degenerate() => Element::Value(value.clone()),
      _ => Element::Interval(last)
    })
  }
}

interval_set_impl!(IntervalSet);
interval_set_algebra_impl!(IntervalSet, IntervalSet);
interval_set_algebra_impl!(IntervalSet, FrozenIntervalSet);

impl<T: PartialOrd + Clone> Extend<Interval<T>> for IntervalSet<T>
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=Interval<T>>
  {
    for interval in iterable {
      self.insert(interval);
    }
  }
}

macro_rules! assign_op_impl
{
  ( $( $imp:ident, $method:ident, $op:ident );* ) =>
  {$(
    impl<T: PartialOrd + Clone> $imp for IntervalSet<T>
    {
      fn $method(&mut self, rhs: IntervalSet<T>) {
        self.inner = self.inner.$op(rhs.canonical());
      }
    }

    impl<'a, T: PartialOrd + Clone> $imp<&'a IntervalSet<T>> for IntervalSet<T>
    {
      fn $method(&mut self, rhs: &'a IntervalSet<T>) {
        self.inner = self.inner.$op(rhs.canonical());
      }
    }

    impl<'a, T: PartialOrd + Clone> $imp<&'a FrozenIntervalSet<T>> for IntervalSet<T>
    {
      fn $method(&mut self, rhs: &'a FrozenIntervalSet<T>) {
        self.inner = self.inner.$op(rhs.canonical());
      }
    }
  )*}
}

assign_op_impl! {
  BitOrAssign, bitor_assign, union;
  BitAndAssign, bitand_assign, intersection;
  SubAssign, sub_assign, difference;
  BitXorAssign, bitxor_assign, symmetric_difference
}
