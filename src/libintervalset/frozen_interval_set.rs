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

//! Immutable and hashable set of disjoint intervals.
//!
//! It has the read-only surface of [`IntervalSet`](../interval_set/index.html) and its algebra produces new frozen sets. Clones share the underlying sequence.

use crate::canonical::Canonical;
use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub struct FrozenIntervalSet<T> {
  inner: Arc<Canonical<T>>
}

impl<T> Clone for FrozenIntervalSet<T>
{
  fn clone(&self) -> Self {
    FrozenIntervalSet { inner: Arc::clone(&self.inner) }
  }
}

impl<T> FrozenIntervalSet<T>
{
  pub(crate) fn canonical(&self) -> &Canonical<T> {
    &self.inner
  }

  pub(crate) fn from_canonical(inner: Canonical<T>) -> FrozenIntervalSet<T> {
    FrozenIntervalSet { inner: Arc::new(inner) }
  }

  /// `true` if both sets are backed by the same sequence, as a set and its clones are.
  pub fn shares_storage_with(&self, other: &FrozenIntervalSet<T>) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }
}

impl<T: Clone> FrozenIntervalSet<T>
{
  fn into_canonical(self) -> Canonical<T> {
    Arc::try_unwrap(self.inner).unwrap_or_else(|shared| (*shared).clone())
  }

  pub(crate) fn into_vec(self) -> Vec<Interval<T>> {
    self.into_canonical().into_vec()
  }
}

interval_set_impl!(FrozenIntervalSet);
interval_set_algebra_impl!(FrozenIntervalSet, FrozenIntervalSet);
interval_set_algebra_impl!(FrozenIntervalSet, IntervalSet);

impl<T> From<IntervalSet<T>> for FrozenIntervalSet<T>
{
  fn from(set: IntervalSet<T>) -> FrozenIntervalSet<T> {
    FrozenIntervalSet::from_canonical(set.into_canonical())
  }
}

impl<T: Clone> From<FrozenIntervalSet<T>> for IntervalSet<T>
{
  fn from(set: FrozenIntervalSet<T>) -> IntervalSet<T> {
    IntervalSet::from_canonical(set.into_canonical())
  }
}

/// Exclusive or of the hashes of the stored intervals.
impl<T: Hash> Hash for FrozenIntervalSet<T>
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    let digest = self.iter().fold(0u64, |digest, interval| {
      let mut hasher = DefaultHasher::new();
      interval.hash(&mut hasher);
      digest ^ hasher.finish()
    });
    state.write_u64(digest);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Error;
  use crate::interval::Element;
  use gcollections::ops::*;
  use std::collections::HashSet;

  fn ii(a: i32, b: i32) -> Interval<i32> { Interval::new(a, b, true, true).unwrap() }

  fn frozen(intervals: Vec<Interval<i32>>) -> FrozenIntervalSet<i32> {
    intervals.into_iter().collect()
  }

  fn hash_of(set: &FrozenIntervalSet<i32>) -> u64 {
    let mut hasher = DefaultHasher::new();
    set.hash(&mut hasher);
    hasher.finish()
  }

  #[test]
  fn text_forms() {
    let s = FrozenIntervalSet::try_from_iter(vec![Element::Value(2), Element::Interval(ii(4, 6))]).unwrap();
    assert_eq!(s.to_string(), "2,[4..6]");
    assert_eq!(format!("{:?}", FrozenIntervalSet::<i32>::new()), "FrozenIntervalSet([])");
    assert_eq!(format!("{:?}", FrozenIntervalSet::<i32>::all()),
      "FrozenIntervalSet([Interval(-Inf, Inf, lower_closed=false, upper_closed=false)])");
    assert_eq!(FrozenIntervalSet::<i32>::new().to_string(), "<Empty>");
  }

  #[test]
  fn hash() {
    let a = frozen(vec![ii(1, 2), ii(5, 6)]);
    let b = frozen(vec![ii(5, 6), ii(1, 2)]);
    let c = frozen(vec![ii(5, 5), ii(1, 2), ii(5, 6)]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(hash_of(&a), hash_of(&c));
    assert_ne!(hash_of(&a), hash_of(&frozen(vec![ii(1, 2)])));
    let mut keys = HashSet::new();
    keys.insert(a);
    keys.insert(b);
    keys.insert(c);
    keys.insert(FrozenIntervalSet::new());
    assert_eq!(keys.len(), 2);
  }

  #[test]
  fn shared_storage() {
    let a = frozen(vec![ii(1, 2)]);
    let b = a.clone();
    assert!(a.shares_storage_with(&b));
    assert!(!a.shares_storage_with(&frozen(vec![ii(1, 2)])));
    let mut mutable = IntervalSet::from(b);
    mutable.add(8).unwrap();
    assert_eq!(a.to_string(), "[1..2]");
    assert_eq!(mutable.to_string(), "[1..2],8");
    let refrozen = FrozenIntervalSet::from(mutable);
    assert_eq!(refrozen.len(), 2);
  }

  #[test]
  fn algebra() {
    let a = FrozenIntervalSet::between(-100, 100, true).unwrap();
    let b = FrozenIntervalSet::between(-50, 50, true).unwrap();
    let cases = vec![
      (1, a.union(&b), "[-100..100]"),
      (2, a.intersection(&b), "[-50..50]"),
      (3, &a - &b, "[-100..-50),(50..100]"),
      (4, &a ^ &b, "[-100..-50),(50..100]"),
      (5, !&b, "(...-50),(50...)"),
      (6, b.clone() + a.clone(), "[-100..100]"),
    ];
    for (id, result, expected) in cases {
      assert_eq!(result.to_string(), expected, "test #{} of frozen algebra", id);
    }
    let mutable = IntervalSet::between(0, 200, false).unwrap();
    let mixed: FrozenIntervalSet<i32> = &a & &mutable;
    assert_eq!(mixed.to_string(), "(0..100]");
    assert!(b.is_subset(&a));
    assert!(a.is_proper_superset(&b));
    assert!(a.overlap(&mutable));
    assert_eq!(a.get(1), Err(Error::IndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(a.union_with(vec![200]).unwrap().to_string(), "[-100..100],200");
  }

  #[test]
  fn thread_sharing() {
    fn assert_send_sync<S: Send + Sync>(_: &S) {}
    let a = frozen(vec![ii(1, 2)]);
    assert_send_sync(&a);
    let b = a.clone();
    let handle = std::thread::spawn(move || b.contains(&1));
    assert_eq!(handle.join().ok(), Some(true));
    assert_eq!(a.into_iter().collect::<Vec<_>>(), vec![ii(1, 2)]);
  }

  #[cfg(feature = "serde")]
  #[test]
  fn serde_tokens() {
    use serde_test::{assert_tokens, Token};

    assert_tokens(&frozen(vec![ii(0, 0)]), &[
      Token::Seq { len: Some(1) },
      Token::Tuple { len: 4 },
      Token::NewtypeVariant { name: "Extended", variant: "Value" },
      Token::I32(0),
      Token::NewtypeVariant { name: "Extended", variant: "Value" },
      Token::I32(0),
      Token::Bool(true),
      Token::Bool(true),
      Token::TupleEnd,
      Token::SeqEnd,
    ]);
  }
}
