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

// The two set types share their read-only surface through these macros. A set type provides `canonical(&self) -> &Canonical<T>` and `from_canonical(Canonical<T>) -> Self`.

macro_rules! interval_set_impl {
  ($name:ident) => {
    impl<T> $name<T>
    {
      pub fn new() -> $name<T> {
        $name::from_canonical($crate::canonical::Canonical::new())
      }

      /// Number of disjoint intervals stored.
      pub fn len(&self) -> usize {
        self.canonical().len()
      }

      pub fn is_empty(&self) -> bool {
        self.canonical().is_empty()
      }

      pub fn iter(&self) -> std::slice::Iter<'_, $crate::interval::Interval<T>> {
        self.canonical().as_slice().iter()
      }

      /// The canonical sequence, sorted and without overlapping or adjacent intervals.
      pub fn as_slice(&self) -> &[$crate::interval::Interval<T>] {
        self.canonical().as_slice()
      }

      pub fn first(&self) -> Option<&$crate::interval::Interval<T>> {
        self.canonical().front()
      }

      pub fn last(&self) -> Option<&$crate::interval::Interval<T>> {
        self.canonical().back()
      }

      pub fn get(&self, index: usize) -> Result<&$crate::interval::Interval<T>, $crate::error::Error> {
        self.as_slice().get(index)
          .ok_or($crate::error::Error::IndexOutOfRange { index, len: self.len() })
      }

      /// Interval at `index` counted from the end, `0` being the last one.
      pub fn get_from_end(&self, index: usize) -> Result<&$crate::interval::Interval<T>, $crate::error::Error> {
        self.iter().rev().nth(index)
          .ok_or($crate::error::Error::IndexOutOfRange { index, len: self.len() })
      }

      /// Lower bound of the first interval.
      pub fn lower_bound(&self) -> Option<&$crate::extended::Extended<T>> {
        self.first().map($crate::interval::Interval::lower)
      }

      /// Upper bound of the last interval.
      pub fn upper_bound(&self) -> Option<&$crate::extended::Extended<T>> {
        self.last().map($crate::interval::Interval::upper)
      }

      pub fn lower_closed(&self) -> Option<bool> {
        self.first().map($crate::interval::Interval::lower_closed)
      }

      pub fn upper_closed(&self) -> Option<bool> {
        self.last().map($crate::interval::Interval::upper_closed)
      }
    }

    impl<T: PartialOrd + Clone> $name<T>
    {
      /// `(...)`
      pub fn all() -> $name<T> {
        $name::from_interval($crate::interval::Interval::all())
      }

      pub fn from_interval(interval: $crate::interval::Interval<T>) -> $name<T> {
        $name::from_canonical($crate::canonical::Canonical::from_interval(interval))
      }

      /// Builds a set from discrete values, pairs and intervals. Fails on the first item that is not a valid interval.
      pub fn try_from_iter<I>(items: I) -> Result<$name<T>, $crate::error::Error> where
       I: IntoIterator,
       I::Item: $crate::interval::ToInterval<T>
      {
        $crate::canonical::Canonical::try_from_items(items).map($name::from_canonical)
      }

      pub fn less_than(value: T) -> Result<$name<T>, $crate::error::Error> {
        $crate::interval::Interval::less_than(value).map($name::from_interval)
      }

      pub fn less_or_equal(value: T) -> Result<$name<T>, $crate::error::Error> {
        $crate::interval::Interval::less_or_equal(value).map($name::from_interval)
      }

      pub fn greater_than(value: T) -> Result<$name<T>, $crate::error::Error> {
        $crate::interval::Interval::greater_than(value).map($name::from_interval)
      }

      pub fn greater_or_equal(value: T) -> Result<$name<T>, $crate::error::Error> {
        $crate::interval::Interval::greater_or_equal(value).map($name::from_interval)
      }

      /// Every value but `value`, `(...value),(value...)`.
      pub fn not_equal_to(value: T) -> Result<$name<T>, $crate::error::Error> {
        let below = $crate::interval::Interval::less_than(value.clone())?;
        let above = $crate::interval::Interval::greater_than(value)?;
        Ok($name::from_canonical($crate::canonical::Canonical::from_intervals(vec![below, above])))
      }

      pub fn between(a: T, b: T, closed: bool) -> Result<$name<T>, $crate::error::Error> {
        $crate::interval::Interval::between(a, b, closed).map($name::from_interval)
      }

      /// Smallest interval covering the whole set, the empty interval if the set is empty.
      pub fn bounds(&self) -> $crate::interval::Interval<T> {
        self.canonical().span()
      }

      pub fn contains(&self, value: &T) -> bool {
        self.canonical().contains(value)
      }

      /// `true` if one stored interval covers `interval` entirely.
      pub fn contains_interval(&self, interval: &$crate::interval::Interval<T>) -> bool {
        self.canonical().contains_interval(interval)
      }

      /// Membership of a discrete value, a pair or an interval.
      pub fn contains_item<X>(&self, item: X) -> Result<bool, $crate::error::Error> where
       X: $crate::interval::ToInterval<T>
      {
        item.to_interval().map(|i| self.contains_interval(&i))
      }

      pub fn is_superset(&self, other: &$name<T>) -> bool {
        other.canonical().is_subset(self.canonical())
      }

      pub fn is_proper_superset(&self, other: &$name<T>) -> bool {
        self.is_superset(other) && !other.is_superset(self)
      }

      pub fn union_with<I>(&self, items: I) -> Result<$name<T>, $crate::error::Error> where
       I: IntoIterator,
       I::Item: $crate::interval::ToInterval<T>
      {
        let other = $crate::canonical::Canonical::try_from_items(items)?;
        Ok($name::from_canonical(self.canonical().union(&other)))
      }

      pub fn intersection_with<I>(&self, items: I) -> Result<$name<T>, $crate::error::Error> where
       I: IntoIterator,
       I::Item: $crate::interval::ToInterval<T>
      {
        let other = $crate::canonical::Canonical::try_from_items(items)?;
        Ok($name::from_canonical(self.canonical().intersection(&other)))
      }

      pub fn difference_with<I>(&self, items: I) -> Result<$name<T>, $crate::error::Error> where
       I: IntoIterator,
       I::Item: $crate::interval::ToInterval<T>
      {
        let other = $crate::canonical::Canonical::try_from_items(items)?;
        Ok($name::from_canonical(self.canonical().difference(&other)))
      }

      pub fn symmetric_difference_with<I>(&self, items: I) -> Result<$name<T>, $crate::error::Error> where
       I: IntoIterator,
       I::Item: $crate::interval::ToInterval<T>
      {
        let other = $crate::canonical::Canonical::try_from_items(items)?;
        Ok($name::from_canonical(self.canonical().symmetric_difference(&other)))
      }
    }

    impl<T> ::gcollections::kind::Collection for $name<T>
    {
      type Item = T;
    }

    impl<T> ::gcollections::ops::Empty for $name<T>
    {
      fn empty() -> $name<T> {
        $name::new()
      }
    }

    impl<T> Default for $name<T>
    {
      fn default() -> $name<T> {
        $name::new()
      }
    }

    impl<T> ::gcollections::ops::IsEmpty for $name<T>
    {
      fn is_empty(&self) -> bool {
        $name::is_empty(self)
      }
    }

    impl<T: PartialOrd + Clone> $crate::ops::Whole for $name<T>
    {
      fn whole() -> $name<T> {
        $name::all()
      }
    }

    impl<T: PartialOrd + Clone> ::gcollections::ops::Contains for $name<T>
    {
      fn contains(&self, value: &T) -> bool {
        $name::contains(self, value)
      }
    }

    impl<T: PartialOrd + Clone> ::gcollections::ops::Complement for $name<T>
    {
      fn complement(&self) -> $name<T> {
        $name::from_canonical(self.canonical().complement())
      }
    }

    impl<T: PartialOrd + Clone> std::ops::Not for $name<T>
    {
      type Output = $name<T>;

      fn not(self) -> $name<T> {
        ::gcollections::ops::Complement::complement(&self)
      }
    }

    impl<'a, T: PartialOrd + Clone> std::ops::Not for &'a $name<T>
    {
      type Output = $name<T>;

      fn not(self) -> $name<T> {
        ::gcollections::ops::Complement::complement(self)
      }
    }

    impl<T: Eq + PartialOrd + Clone> Eq for $name<T> {}

    impl<T: PartialOrd + Clone> FromIterator<$crate::interval::Interval<T>> for $name<T>
    {
      fn from_iter<I>(iterable: I) -> $name<T> where
       I: IntoIterator<Item=$crate::interval::Interval<T>>
      {
        $name::from_canonical($crate::canonical::Canonical::from_intervals(iterable))
      }
    }

    impl<'a, T> IntoIterator for &'a $name<T>
    {
      type Item = &'a $crate::interval::Interval<T>;
      type IntoIter = std::slice::Iter<'a, $crate::interval::Interval<T>>;

      fn into_iter(self) -> Self::IntoIter {
        self.iter()
      }
    }

    impl<T> IntoIterator for $name<T> where
     T: Clone
    {
      type Item = $crate::interval::Interval<T>;
      type IntoIter = std::vec::IntoIter<$crate::interval::Interval<T>>;

      fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
      }
    }

    /// Members joined by a comma, `<Empty>` for the empty set.
    impl<T: std::fmt::Debug + PartialEq> std::fmt::Display for $name<T>
    {
      fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_empty() {
          write!(f, "<Empty>")
        } else {
          write!(f, "{}", ::itertools::Itertools::join(&mut self.iter(), ","))
        }
      }
    }

    impl<T: std::fmt::Debug> std::fmt::Debug for $name<T>
    {
      fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let members = ::itertools::Itertools::join(&mut self.iter().map(|i| format!("{:?}", i)), ", ");
        write!(f, "{}([{}])", stringify!($name), members)
      }
    }

    #[cfg(feature = "serde")]
    impl<T: serde::Serialize> serde::Serialize for $name<T>
    {
      fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
       S: serde::Serializer
      {
        serializer.collect_seq(self.iter())
      }
    }

    /// Re-canonicalizes the sequence, so unsorted or overlapping input is accepted.
    #[cfg(feature = "serde")]
    impl<'de, T> serde::Deserialize<'de> for $name<T> where
     T: serde::Deserialize<'de> + PartialOrd + Clone
    {
      fn deserialize<D>(deserializer: D) -> Result<$name<T>, D::Error> where
       D: serde::Deserializer<'de>
      {
        let intervals = <Vec<$crate::interval::Interval<T>>>::deserialize(deserializer)?;
        Ok(intervals.into_iter().collect())
      }
    }
  }
}

// Algebra between `$name` and `$rhs`, the result has the type of the left operand.
macro_rules! interval_set_algebra_impl {
  ($name:ident, $rhs:ident; $($op:ident, $method:ident, $imp:ident, $imp_method:ident);*) => {
    $(
      impl<T: PartialOrd + Clone> ::gcollections::ops::$op<$rhs<T>> for $name<T>
      {
        type Output = $name<T>;

        fn $method(&self, rhs: &$rhs<T>) -> $name<T> {
          $name::from_canonical(self.canonical().$method(rhs.canonical()))
        }
      }

      impl<'a, 'b, T: PartialOrd + Clone> std::ops::$imp<&'b $rhs<T>> for &'a $name<T>
      {
        type Output = $name<T>;

        fn $imp_method(self, rhs: &'b $rhs<T>) -> $name<T> {
          ::gcollections::ops::$op::$method(self, rhs)
        }
      }

      impl<'b, T: PartialOrd + Clone> std::ops::$imp<&'b $rhs<T>> for $name<T>
      {
        type Output = $name<T>;

        fn $imp_method(self, rhs: &'b $rhs<T>) -> $name<T> {
          ::gcollections::ops::$op::$method(&self, rhs)
        }
      }

      impl<'a, T: PartialOrd + Clone> std::ops::$imp<$rhs<T>> for &'a $name<T>
      {
        type Output = $name<T>;

        fn $imp_method(self, rhs: $rhs<T>) -> $name<T> {
          ::gcollections::ops::$op::$method(self, &rhs)
        }
      }

      impl<T: PartialOrd + Clone> std::ops::$imp<$rhs<T>> for $name<T>
      {
        type Output = $name<T>;

        fn $imp_method(self, rhs: $rhs<T>) -> $name<T> {
          ::gcollections::ops::$op::$method(&self, &rhs)
        }
      }
    )*

    impl<T: PartialOrd + Clone> std::ops::Add<$rhs<T>> for $name<T>
    {
      type Output = $name<T>;

      fn add(self, rhs: $rhs<T>) -> $name<T> {
        ::gcollections::ops::Union::union(&self, &rhs)
      }
    }

    impl<'a, 'b, T: PartialOrd + Clone> std::ops::Add<&'b $rhs<T>> for &'a $name<T>
    {
      type Output = $name<T>;

      fn add(self, rhs: &'b $rhs<T>) -> $name<T> {
        ::gcollections::ops::Union::union(self, rhs)
      }
    }

    impl<T: PartialOrd + Clone> ::gcollections::ops::Subset<$rhs<T>> for $name<T>
    {
      fn is_subset(&self, rhs: &$rhs<T>) -> bool {
        self.canonical().is_subset(rhs.canonical())
      }
    }

    impl<T: PartialOrd + Clone> ::gcollections::ops::ProperSubset<$rhs<T>> for $name<T>
    {
      fn is_proper_subset(&self, rhs: &$rhs<T>) -> bool {
        self.canonical().is_subset(rhs.canonical()) && !rhs.canonical().is_subset(self.canonical())
      }
    }

    impl<T: PartialOrd + Clone> ::gcollections::ops::Overlap<$rhs<T>> for $name<T>
    {
      fn overlap(&self, rhs: &$rhs<T>) -> bool {
        self.canonical().overlaps(rhs.canonical())
      }
    }

    impl<T: PartialOrd + Clone> ::gcollections::ops::Disjoint<$rhs<T>> for $name<T>
    {
      fn is_disjoint(&self, rhs: &$rhs<T>) -> bool {
        !self.canonical().overlaps(rhs.canonical())
      }
    }

    /// Two sets are equal when each one is a subset of the other.
    impl<T: PartialOrd + Clone> PartialEq<$rhs<T>> for $name<T>
    {
      fn eq(&self, rhs: &$rhs<T>) -> bool {
        self.canonical().is_subset(rhs.canonical()) && rhs.canonical().is_subset(self.canonical())
      }
    }
  };
  ($name:ident, $rhs:ident) => {
    interval_set_algebra_impl!($name, $rhs;
      Union, union, BitOr, bitor;
      Intersection, intersection, BitAnd, bitand;
      Difference, difference, Sub, sub;
      SymmetricDifference, symmetric_difference, BitXor, bitxor);
  };
}
