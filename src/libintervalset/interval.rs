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

//! Continuous interval over any ordered domain.
//!
//! An interval is given by two bounds and two inclusivity flags. A bound is either a value of the domain or one of the [infinities](../extended/index.html), an infinite end is always open. Intervals are immutable, every operation returns a new one.
//!
//! Text forms follow the usual mathematical notation: `[` and `]` for closed ends, `(` and `)` for open ends, `...` when one end is unbounded and `..` otherwise. A closed single point is printed as the value alone and the empty interval as `<Empty>`.
//!
//! # Examples
//!
//! ```rust
//! use intervalset::Interval;
//! use gcollections::ops::*;
//! use intervalset::ops::Adjacent;
//!
//! let a = Interval::greater_than(3).unwrap();
//! let b = Interval::greater_than(5).unwrap();
//! assert_eq!(a.intersection(&b), b);
//! assert_eq!(format!("{}", a & Interval::less_than(10).unwrap()), "(3..10)");
//! assert!(Interval::less_than(5).unwrap().adjacent_to(&Interval::greater_or_equal(5).unwrap()));
//! ```

use crate::error::Error;
use crate::extended::Extended;
use crate::extended::Extended::{NegInf, PosInf};
use crate::interval_set::IntervalSet;
use crate::ops::{Adjacent, Hull, Whole};
use gcollections::kind::*;
use gcollections::ops::*;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr, Sub};
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
  lower: Extended<T>,
  upper: Extended<T>,
  lower_closed: bool,
  upper_closed: bool
}

impl<T> Interval<T>
{
  /// Internal constructor for bounds already known to be well-formed.
  pub(crate) fn raw(lower: Extended<T>, upper: Extended<T>, lower_closed: bool, upper_closed: bool) -> Interval<T> {
    Interval { lower, upper, lower_closed, upper_closed }
  }

  /// `(...)`, every value of the domain.
  pub fn all() -> Interval<T> {
    Interval::raw(NegInf, PosInf, false, false)
  }

  /// The canonical empty interval. It does not need any domain value.
  pub fn none() -> Interval<T> {
    Interval::raw(NegInf, NegInf, false, false)
  }

  pub fn lower(&self) -> &Extended<T> {
    &self.lower
  }

  pub fn upper(&self) -> &Extended<T> {
    &self.upper
  }

  pub fn lower_closed(&self) -> bool {
    self.lower_closed
  }

  pub fn upper_closed(&self) -> bool {
    self.upper_closed
  }
}

impl<T: PartialEq> Interval<T>
{
  pub fn is_empty(&self) -> bool {
    self.lower == self.upper && !(self.lower_closed && self.upper_closed)
  }

  /// A single closed point such as `[4..4]`.
  pub fn is_degenerate(&self) -> bool {
    self.lower == self.upper && self.lower_closed && self.upper_closed
  }
}

impl<T: PartialOrd> Interval<T>
{
  /// Builds the interval between `lower` and `upper`.
  ///
  /// Bounds are either domain values or [`Extended`] sentinels. Fails with:
  /// * `InvalidBound` if a bound is not comparable with itself (`NaN`) or the two bounds cannot be compared.
  /// * `InvalidRange` if `upper < lower`. Reversed bounds are never swapped.
  /// * `UnboundedClosure` if an infinite end is marked as closed.
  pub fn new<L, U>(lower: L, upper: U, lower_closed: bool, upper_closed: bool) -> Result<Interval<T>, Error> where
   L: Into<Extended<T>>,
   U: Into<Extended<T>>
  {
    let lower = lower.into();
    let upper = upper.into();
    if !lower.is_orderable() || !upper.is_orderable() {
      return Err(Error::InvalidBound);
    }
    match lower.partial_cmp(&upper) {
      None => Err(Error::InvalidBound),
      Some(Ordering::Greater) => Err(Error::InvalidRange),
      Some(_) if (lower.is_infinite() && lower_closed) || (upper.is_infinite() && upper_closed) =>
        Err(Error::UnboundedClosure),
      Some(_) => Ok(Interval::raw(lower, upper, lower_closed, upper_closed))
    }
  }

  /// `(...value)`
  pub fn less_than(value: T) -> Result<Interval<T>, Error> {
    Interval::new(NegInf, value, false, false)
  }

  /// `(...value]`
  pub fn less_or_equal(value: T) -> Result<Interval<T>, Error> {
    Interval::new(NegInf, value, false, true)
  }

  /// `(value...)`
  pub fn greater_than(value: T) -> Result<Interval<T>, Error> {
    Interval::new(value, PosInf, false, false)
  }

  /// `[value...)`
  pub fn greater_or_equal(value: T) -> Result<Interval<T>, Error> {
    Interval::new(value, PosInf, true, false)
  }

  /// `[a..b]` if `closed`, `(a..b)` otherwise.
  pub fn between(a: T, b: T, closed: bool) -> Result<Interval<T>, Error> {
    Interval::new(a, b, closed, closed)
  }

  /// Ordering used to sort intervals: by lower bound, a closed lower bound first, then by upper bound, an open upper bound first. Equal intervals do not come before each other.
  pub fn comes_before(&self, other: &Interval<T>) -> bool {
    if self == other { false }
    else if self.lower < other.lower { true }
    else if self.lower > other.lower { false }
    else if self.lower_closed == other.lower_closed {
      if self.upper < other.upper { true }
      else if self.upper > other.upper || self.upper_closed == other.upper_closed || self.upper_closed { false }
      else { true }
    }
    else { self.lower_closed }
  }

  /// `true` if both intervals share at least one point. An empty interval overlaps nothing.
  pub fn overlaps(&self, other: &Interval<T>) -> bool {
    if self.is_empty() || other.is_empty() { false }
    else if self == other { true }
    else if other.comes_before(self) { other.overlaps(self) }
    else if other.lower < self.upper { true }
    else if other.lower == self.upper { other.lower_closed && self.upper_closed }
    else { false }
  }

  /// `true` if `value` lies in the interval. A value that is not orderable is never contained.
  pub fn contains(&self, value: &T) -> bool {
    if value.partial_cmp(value) != Some(Ordering::Equal) {
      return false;
    }
    let above_lower = match self.lower.partial_cmp_value(value) {
      Some(Ordering::Less) => true,
      Some(Ordering::Equal) => self.lower_closed,
      _ => false
    };
    let below_upper = match self.upper.partial_cmp_value(value) {
      Some(Ordering::Greater) => true,
      Some(Ordering::Equal) => self.upper_closed,
      _ => false
    };
    above_lower && below_upper
  }

  /// `true` if `other` lies wholly within `self`. The empty interval is contained everywhere.
  pub fn contains_interval(&self, other: &Interval<T>) -> bool {
    if other.is_empty() {
      return true;
    }
    let inside_lower =
      if other.lower < self.lower { false }
      else if other.lower == self.lower { !other.lower_closed || self.lower_closed }
      else { true };
    let inside_upper =
      if other.upper > self.upper { false }
      else if other.upper == self.upper { !other.upper_closed || self.upper_closed }
      else { true };
    inside_lower && inside_upper
  }

  /// `true` if the upper end of `self` is reached before the upper end of `other`.
  pub(crate) fn ends_before(&self, other: &Interval<T>) -> bool {
    self.upper < other.upper
    || (self.upper == other.upper && !self.upper_closed && other.upper_closed)
  }
}

impl<T: PartialOrd + Clone> Interval<T>
{
  /// `value` alone, printed as the bare value.
  pub fn equal_to(value: T) -> Result<Interval<T>, Error> {
    Interval::new(value.clone(), value, true, true)
  }

  /// Hull restricted to intervals that overlap or are adjacent, so that no value is added. Fails with `DisjointJoin` otherwise.
  pub fn join(&self, other: &Interval<T>) -> Result<Interval<T>, Error> {
    if self.overlaps(other) || self.adjacent_to(other) {
      Ok(self.hull(other))
    } else {
      Err(Error::DisjointJoin)
    }
  }

  /// Splits `self` into the parts strictly before, inside and strictly after `other`.
  pub fn cut(&self, other: &Interval<T>) -> CutResult<T> {
    if other.is_empty() {
      return CutResult {
        before_cut: non_empty(self.clone()),
        inside_cut: None,
        after_cut: None
      };
    }
    // `other` is not empty so its lower end is never `PosInf` and its upper end never `NegInf`.
    let before_cut = match &other.lower {
      NegInf => None,
      lower => non_empty(self.intersection(
        &Interval::raw(NegInf, lower.clone(), false, !other.lower_closed)))
    };
    let after_cut = match &other.upper {
      PosInf => None,
      upper => non_empty(self.intersection(
        &Interval::raw(upper.clone(), PosInf, !other.upper_closed, false)))
    };
    CutResult {
      before_cut,
      inside_cut: non_empty(self.intersection(other)),
      after_cut
    }
  }
}

fn non_empty<T: PartialEq>(interval: Interval<T>) -> Option<Interval<T>> {
  Some(interval).filter(|i| !i.is_empty())
}

/// The pieces of an interval once cut by another one, see [`Interval::cut`].
#[derive(Debug, Clone, PartialEq)]
pub struct CutResult<T> {
  pub before_cut: Option<Interval<T>>,
  pub inside_cut: Option<Interval<T>>,
  pub after_cut: Option<Interval<T>>
}

impl<T: PartialOrd> PartialOrd for Interval<T>
{
  fn partial_cmp(&self, other: &Interval<T>) -> Option<Ordering> {
    if self == other { Some(Ordering::Equal) }
    else if self.comes_before(other) { Some(Ordering::Less) }
    else if other.comes_before(self) { Some(Ordering::Greater) }
    else { None }
  }
}

impl<T: Ord> Ord for Interval<T>
{
  fn cmp(&self, other: &Interval<T>) -> Ordering {
    self.lower.cmp(&other.lower)
      .then_with(|| other.lower_closed.cmp(&self.lower_closed))
      .then_with(|| self.upper.cmp(&other.upper))
      .then_with(|| self.upper_closed.cmp(&other.upper_closed))
  }
}

impl<T> Collection for Interval<T>
{
  type Item = T;
}

impl<T> Empty for Interval<T>
{
  fn empty() -> Interval<T> {
    Interval::none()
  }
}

impl<T> Whole for Interval<T>
{
  fn whole() -> Interval<T> {
    Interval::all()
  }
}

impl<T: PartialEq> IsEmpty for Interval<T>
{
  fn is_empty(&self) -> bool {
    Interval::is_empty(self)
  }
}

impl<T: PartialOrd> Contains for Interval<T>
{
  fn contains(&self, value: &T) -> bool {
    Interval::contains(self, value)
  }
}

impl<T: PartialOrd> Subset for Interval<T>
{
  fn is_subset(&self, other: &Interval<T>) -> bool {
    other.contains_interval(self)
  }
}

impl<T: PartialOrd> ProperSubset for Interval<T>
{
  fn is_proper_subset(&self, other: &Interval<T>) -> bool {
    self.is_subset(other) && !other.is_subset(self)
  }
}

impl<T: PartialOrd> Overlap for Interval<T>
{
  fn overlap(&self, other: &Interval<T>) -> bool {
    self.overlaps(other)
  }
}

impl<T: PartialOrd> Disjoint for Interval<T>
{
  fn is_disjoint(&self, other: &Interval<T>) -> bool {
    !self.overlaps(other)
  }
}

impl<T: PartialOrd> Adjacent for Interval<T>
{
  /// Disjoint intervals sharing a boundary value included by exactly one of them, such as `(...5)` and `[5...)`. `(...5]` and `[5...)` overlap instead.
  fn adjacent_to(&self, other: &Interval<T>) -> bool {
    if self.is_empty() || other.is_empty() || self == other { false }
    else if self.comes_before(other) {
      self.upper == other.lower && self.upper_closed != other.lower_closed
    }
    else { other.adjacent_to(self) }
  }
}

impl<T: PartialOrd + Clone> Hull for Interval<T>
{
  type Output = Interval<T>;

  /// Outer-most bound on each side, the most inclusive flag when the bounds are equal.
  fn hull(&self, other: &Interval<T>) -> Interval<T> {
    if self.is_empty() { return other.clone(); }
    if other.is_empty() { return self.clone(); }
    let (lower, lower_closed) =
      if self.lower < other.lower { (&self.lower, self.lower_closed) }
      else if self.lower == other.lower { (&self.lower, self.lower_closed || other.lower_closed) }
      else { (&other.lower, other.lower_closed) };
    let (upper, upper_closed) =
      if self.upper > other.upper { (&self.upper, self.upper_closed) }
      else if self.upper == other.upper { (&self.upper, self.upper_closed || other.upper_closed) }
      else { (&other.upper, other.upper_closed) };
    Interval::raw(lower.clone(), upper.clone(), lower_closed, upper_closed)
  }
}

impl<T: PartialOrd + Clone> Intersection for Interval<T>
{
  type Output = Interval<T>;

  /// Tighter bound on each side, the least inclusive flag when the bounds are equal. Returns [`Interval::none`] when the intervals do not overlap.
  fn intersection(&self, other: &Interval<T>) -> Interval<T> {
    if self == other {
      return self.clone();
    }
    if !self.overlaps(other) {
      return Interval::none();
    }
    let (lower, lower_closed) =
      if self.lower == other.lower { (&self.lower, self.lower_closed && other.lower_closed) }
      else if self.lower > other.lower { (&self.lower, self.lower_closed) }
      else { (&other.lower, other.lower_closed) };
    let (upper, upper_closed) =
      if self.upper == other.upper { (&self.upper, self.upper_closed && other.upper_closed) }
      else if self.upper < other.upper { (&self.upper, self.upper_closed) }
      else { (&other.upper, other.upper_closed) };
    Interval::raw(lower.clone(), upper.clone(), lower_closed, upper_closed)
  }
}

impl<T: PartialOrd + Clone> Union for Interval<T>
{
  type Output = IntervalSet<T>;

  fn union(&self, other: &Interval<T>) -> IntervalSet<T> {
    let mut res = IntervalSet::new();
    res.insert(self.clone());
    res.insert(other.clone());
    res
  }
}

impl<T: PartialOrd + Clone> Difference for Interval<T>
{
  type Output = IntervalSet<T>;

  fn difference(&self, other: &Interval<T>) -> IntervalSet<T> {
    let CutResult { before_cut, after_cut, .. } = self.cut(other);
    before_cut.into_iter().chain(after_cut).collect()
  }
}

impl<T: PartialOrd + Clone> SymmetricDifference for Interval<T>
{
  type Output = IntervalSet<T>;

  fn symmetric_difference(&self, other: &Interval<T>) -> IntervalSet<T> {
    let union = self.union(other);
    let intersection = IntervalSet::from_iter(Some(self.intersection(other)));
    union.difference(&intersection)
  }
}

impl<'a, T: PartialOrd + Clone> BitAnd<&'a Interval<T>> for &'a Interval<T>
{
  type Output = Interval<T>;

  fn bitand(self, other: &'a Interval<T>) -> Interval<T> {
    self.intersection(other)
  }
}

impl<T: PartialOrd + Clone> BitAnd for Interval<T>
{
  type Output = Interval<T>;

  fn bitand(self, other: Interval<T>) -> Interval<T> {
    self.intersection(&other)
  }
}

impl<'a, T: PartialOrd + Clone> BitOr<&'a Interval<T>> for &'a Interval<T>
{
  type Output = IntervalSet<T>;

  fn bitor(self, other: &'a Interval<T>) -> IntervalSet<T> {
    self.union(other)
  }
}

impl<T: PartialOrd + Clone> BitOr for Interval<T>
{
  type Output = IntervalSet<T>;

  fn bitor(self, other: Interval<T>) -> IntervalSet<T> {
    self.union(&other)
  }
}

impl<'a, T: PartialOrd + Clone> Sub<&'a Interval<T>> for &'a Interval<T>
{
  type Output = IntervalSet<T>;

  fn sub(self, other: &'a Interval<T>) -> IntervalSet<T> {
    self.difference(other)
  }
}

impl<T: PartialOrd + Clone> Sub for Interval<T>
{
  type Output = IntervalSet<T>;

  fn sub(self, other: Interval<T>) -> IntervalSet<T> {
    self.difference(&other)
  }
}

/// Bounds are printed with their `Debug` form, so string bounds are quoted: `["Bob".."Fred"]`.
impl<T: Debug + PartialEq> Display for Interval<T>
{
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.is_empty() {
      return write!(f, "<Empty>");
    }
    if self.lower == self.upper {
      return write!(f, "{:?}", self.lower);
    }
    let mut between = "..";
    let lower = match &self.lower {
      Extended::Value(v) => format!("{:?}", v),
      _ => { between = "..."; String::new() }
    };
    let upper = match &self.upper {
      Extended::Value(v) => format!("{:?}", v),
      _ => { between = "..."; String::new() }
    };
    write!(f, "{}{}{}{}{}",
      if self.lower_closed { '[' } else { '(' },
      lower, between, upper,
      if self.upper_closed { ']' } else { ')' })
  }
}

impl<T: Debug> Debug for Interval<T>
{
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "Interval({:?}, {:?}, lower_closed={}, upper_closed={})",
      self.lower, self.upper, self.lower_closed, self.upper_closed)
  }
}

/// Parses the `Debug` form, `Interval(3, 6, lower_closed=true, upper_closed=false)`. A bound is `-Inf`, `Inf` or the `Debug` form of a domain value; quoted literals such as `"Bob"` are unescaped before the `FromStr` of the domain is applied. The result is validated by [`Interval::new`].
impl<T: FromStr + PartialOrd> FromStr for Interval<T>
{
  type Err = Error;

  fn from_str(s: &str) -> Result<Interval<T>, Error> {
    let fail = || Error::Parse(s.to_string());
    let body = s.trim()
      .strip_prefix("Interval(")
      .and_then(|rest| rest.strip_suffix(')'))
      .ok_or_else(fail)?;
    let fields = split_fields(body).ok_or_else(fail)?;
    let (lower, upper, lower_closed, upper_closed) = match fields.as_slice() {
      &[lower, upper, lower_closed, upper_closed] => (lower, upper, lower_closed, upper_closed),
      _ => return Err(fail())
    };
    let lower_closed = parse_flag(lower_closed, "lower_closed=").ok_or_else(fail)?;
    let upper_closed = parse_flag(upper_closed, "upper_closed=").ok_or_else(fail)?;
    let lower: Extended<T> = parse_bound(lower).ok_or_else(fail)?;
    let upper: Extended<T> = parse_bound(upper).ok_or_else(fail)?;
    Interval::new(lower, upper, lower_closed, upper_closed)
  }
}

// Splits on the commas lying outside quoted literals and brackets.
fn split_fields(body: &str) -> Option<Vec<&str>> {
  let mut fields = vec![];
  let mut depth = 0usize;
  let mut quote: Option<char> = None;
  let mut escaped = false;
  let mut start = 0;
  for (at, c) in body.char_indices() {
    match quote {
      Some(q) => {
        if escaped { escaped = false; }
        else if c == '\\' { escaped = true; }
        else if c == q { quote = None; }
      }
      None => match c {
        '"' | '\'' => quote = Some(c),
        '(' | '[' | '{' => depth += 1,
        ')' | ']' | '}' => depth = depth.checked_sub(1)?,
        ',' if depth == 0 => {
          fields.push(body[start..at].trim());
          start = at + 1;
        }
        _ => {}
      }
    }
  }
  if quote.is_some() || depth != 0 {
    return None;
  }
  fields.push(body[start..].trim());
  Some(fields)
}

// Reverses the escaping of a quoted `Debug` literal such as `"a\"b"` or `'c'`.
fn unquote(text: &str) -> Option<String> {
  let quote = text.chars().next()?;
  let inner = text.strip_prefix(quote)?.strip_suffix(quote)?;
  let mut res = String::with_capacity(inner.len());
  let mut chars = inner.chars();
  while let Some(c) = chars.next() {
    if c != '\\' {
      res.push(c);
      continue;
    }
    let unescaped = match chars.next()? {
      'n' => '\n',
      'r' => '\r',
      't' => '\t',
      '0' => '\0',
      'u' => {
        let (code, rest) = chars.as_str().strip_prefix('{')?.split_once('}')?;
        chars = rest.chars();
        char::from_u32(u32::from_str_radix(code, 16).ok()?)?
      }
      other => other
    };
    res.push(unescaped);
  }
  Some(res)
}

fn parse_flag(field: &str, key: &str) -> Option<bool> {
  field.strip_prefix(key)?.parse().ok()
}

fn parse_bound<T: FromStr>(text: &str) -> Option<Extended<T>> {
  match text {
    "-Inf" => Some(NegInf),
    "Inf" => Some(PosInf),
    quoted if quoted.starts_with('"') || quoted.starts_with('\'') =>
      unquote(quoted)?.parse().ok().map(Extended::Value),
    value => value.parse().ok().map(Extended::Value)
  }
}

/// A discrete value or an interval, the items accepted when building a set from heterogeneous input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element<T> {
  Value(T),
  Interval(Interval<T>)
}

impl<T> From<Interval<T>> for Element<T>
{
  fn from(interval: Interval<T>) -> Element<T> {
    Element::Interval(interval)
  }
}

impl<T: Debug + PartialEq> Display for Element<T>
{
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Element::Value(v) => write!(f, "{:?}", v),
      Element::Interval(i) => write!(f, "{}", i)
    }
  }
}

/// Conversion into an interval: a discrete value becomes the point interval `[v..v]`, a pair `(a, b)` becomes `[a..b]`.
pub trait ToInterval<T> {
  fn to_interval(self) -> Result<Interval<T>, Error>;
}

impl<T> ToInterval<T> for Interval<T>
{
  fn to_interval(self) -> Result<Interval<T>, Error> {
    Ok(self)
  }
}

impl<'a, T: Clone> ToInterval<T> for &'a Interval<T>
{
  fn to_interval(self) -> Result<Interval<T>, Error> {
    Ok(self.clone())
  }
}

impl<T: PartialOrd + Clone> ToInterval<T> for T
{
  fn to_interval(self) -> Result<Interval<T>, Error> {
    Interval::equal_to(self)
  }
}

impl<T: PartialOrd + Clone> ToInterval<T> for (T, T)
{
  fn to_interval(self) -> Result<Interval<T>, Error> {
    let (a, b) = self;
    Interval::between(a, b, true)
  }
}

impl<T: PartialOrd + Clone> ToInterval<T> for Element<T>
{
  fn to_interval(self) -> Result<Interval<T>, Error> {
    match self {
      Element::Value(v) => Interval::equal_to(v),
      Element::Interval(i) => Ok(i)
    }
  }
}

#[cfg(feature = "serde")]
mod serialization {
  use super::*;
  use serde::de::Error as DeError;
  use serde::{Deserialize, Deserializer, Serialize, Serializer};

  impl<T: Serialize> Serialize for Interval<T>
  {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
     S: Serializer
    {
      (&self.lower, &self.upper, self.lower_closed, self.upper_closed).serialize(serializer)
    }
  }

  impl<'de, T> Deserialize<'de> for Interval<T> where
   T: Deserialize<'de> + PartialOrd
  {
    fn deserialize<D>(deserializer: D) -> Result<Interval<T>, D::Error> where
     D: Deserializer<'de>
    {
      let (lower, upper, lower_closed, upper_closed) =
        <(Extended<T>, Extended<T>, bool, bool)>::deserialize(deserializer)?;
      Interval::new(lower, upper, lower_closed, upper_closed).map_err(D::Error::custom)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // Fixtures shared by the join, overlap and adjacency tables.
  fn r(id: usize) -> Interval<i32> {
    let res = match id {
      1 => Interval::less_than(-100),
      2 => Interval::less_or_equal(-100),
      3 => Interval::less_than(100),
      4 => Interval::less_or_equal(100),
      5 => Ok(Interval::all()),
      6 => Interval::between(-100, 100, false),
      7 => Interval::new(-100, 100, false, true),
      8 => Interval::greater_than(-100),
      9 => Interval::equal_to(-100),
      10 => Interval::new(-100, 100, true, false),
      11 => Interval::between(-100, 100, true),
      12 => Interval::greater_or_equal(-100),
      13 => Interval::greater_than(100),
      14 => Interval::equal_to(100),
      15 => Interval::greater_or_equal(100),
      _ => unreachable!()
    };
    res.unwrap()
  }

  fn ii(a: i32, b: i32) -> Interval<i32> { Interval::new(a, b, true, true).unwrap() }
  fn ie(a: i32, b: i32) -> Interval<i32> { Interval::new(a, b, true, false).unwrap() }
  fn ei(a: i32, b: i32) -> Interval<i32> { Interval::new(a, b, false, true).unwrap() }
  fn ee(a: i32, b: i32) -> Interval<i32> { Interval::new(a, b, false, false).unwrap() }

  #[test]
  fn construction() {
    let cases: Vec<(usize, Result<Interval<i32>, Error>, Option<Error>)> = vec![
      (1, Interval::new(5, 2, false, true), Some(Error::InvalidRange)),
      (2, Interval::new(NegInf, 3, true, true), Some(Error::UnboundedClosure)),
      (3, Interval::new(3, PosInf, false, true), Some(Error::UnboundedClosure)),
      (4, Interval::new(PosInf, 3, false, false), Some(Error::InvalidRange)),
      (5, Interval::new(5, 5, false, false), None),
      (6, Interval::new(NegInf, PosInf, false, false), None),
      (7, Interval::new(2, 5, true, false), None),
    ];
    for (id, res, expected) in cases {
      assert_eq!(res.err(), expected, "test #{} of construction", id);
    }
    assert_eq!(Interval::equal_to(f64::NAN).err(), Some(Error::InvalidBound));
    assert_eq!(Interval::new(1.0, f64::NAN, true, true).err(), Some(Error::InvalidBound));
    assert_eq!(Interval::less_than(f64::NAN).err(), Some(Error::InvalidBound));
    assert_eq!(Interval::new(0.5, 2.5, true, false).unwrap(), Interval::raw(Extended::Value(0.5), Extended::Value(2.5), true, false));
  }

  #[test]
  fn emptiness() {
    assert!(ee(12, 12).is_empty());
    assert!(ie(12, 12).is_empty());
    assert!(!ii(12, 12).is_empty());
    assert!(ii(12, 12).is_degenerate());
    assert!(Interval::<i32>::none().is_empty());
    assert!(!Interval::<i32>::all().is_empty());
    assert!(!ee(1, 2).is_empty());
  }

  #[test]
  fn display() {
    let cases = vec![
      (Interval::all(), "(...)"),
      (Interval::less_than(100).unwrap(), "(...100)"),
      (Interval::less_or_equal(2593).unwrap(), "(...2593]"),
      (Interval::greater_than(2378).unwrap(), "(2378...)"),
      (Interval::between(26, 8234, false).unwrap(), "(26..8234)"),
      (ei(237, 2348), "(237..2348]"),
      (Interval::greater_or_equal(347).unwrap(), "[347...)"),
      (ie(237, 278), "[237..278)"),
      (Interval::between(723, 2378, true).unwrap(), "[723..2378]"),
      (Interval::equal_to(5).unwrap(), "5"),
      (Interval::none(), "<Empty>"),
      (ee(5, 5), "<Empty>"),
    ];
    for (id, (interval, expected)) in cases.into_iter().enumerate() {
      assert_eq!(format!("{}", interval), expected, "test #{} of display", id);
    }
  }

  #[test]
  fn debug_and_parse() {
    assert_eq!(format!("{:?}", ii(3, 6)), "Interval(3, 6, lower_closed=true, upper_closed=true)");
    assert_eq!(format!("{:?}", ee(3, 6)), "Interval(3, 6, lower_closed=false, upper_closed=false)");
    assert_eq!(format!("{:?}", Interval::<i32>::all()), "Interval(-Inf, Inf, lower_closed=false, upper_closed=false)");
    for id in 1..=15 {
      let parsed: Interval<i32> = format!("{:?}", r(id)).parse().unwrap();
      assert_eq!(parsed, r(id), "test #{} of debug_and_parse", id);
    }
    assert_eq!("Interval(5, 2, lower_closed=true, upper_closed=true)".parse::<Interval<i32>>(), Err(Error::InvalidRange));
    assert_eq!("Interval(-Inf, 2, lower_closed=true, upper_closed=true)".parse::<Interval<i32>>(), Err(Error::UnboundedClosure));
    assert_eq!("[1..2]".parse::<Interval<i32>>(), Err(Error::Parse("[1..2]".into())));
    assert_eq!("Interval(1, x, lower_closed=true, upper_closed=true)".parse::<Interval<i32>>(),
      Err(Error::Parse("Interval(1, x, lower_closed=true, upper_closed=true)".into())));
    assert_eq!("Interval(1.5, 2.25, lower_closed=false, upper_closed=true)".parse::<Interval<f64>>(),
      Interval::new(1.5, 2.25, false, true));
    assert_eq!("Interval(1, 2, lower_closed=true)".parse::<Interval<i32>>(),
      Err(Error::Parse("Interval(1, 2, lower_closed=true)".into())));
  }

  #[test]
  fn string_bounds() {
    let names = Interval::between("Bob".to_string(), "Fred".to_string(), true).unwrap();
    assert_eq!(names.to_string(), "[\"Bob\"..\"Fred\"]");
    assert_eq!(Interval::equal_to("Mary".to_string()).unwrap().to_string(), "\"Mary\"");
    assert_eq!(format!("{:?}", names), "Interval(\"Bob\", \"Fred\", lower_closed=true, upper_closed=true)");
    let cases = vec![
      (1, names.clone()),
      (2, Interval::new("a, b".to_string(), "c".to_string(), false, true).unwrap()),
      (3, Interval::new("say \"hi\"".to_string(), PosInf, true, false).unwrap()),
      (4, Interval::less_than("back\\slash\n".to_string()).unwrap()),
      (5, Interval::equal_to("Inf".to_string()).unwrap()),
      (6, Interval::between("l'été".to_string(), "z\u{301}".to_string(), false).unwrap()),
    ];
    for (id, interval) in cases {
      let parsed: Interval<String> = format!("{:?}", interval).parse().unwrap();
      assert_eq!(parsed, interval, "test #{} of string round trip", id);
    }
    let quotes = Interval::between('\'', 'a', true).unwrap();
    assert_eq!(format!("{:?}", quotes).parse::<Interval<char>>(), Ok(quotes));
    let unterminated = "Interval(\"Bob, Inf, lower_closed=true, upper_closed=false)";
    assert_eq!(unterminated.parse::<Interval<String>>(), Err(Error::Parse(unterminated.into())));
  }

  #[test]
  fn comes_before() {
    let cases = vec![
      (1, Interval::equal_to(1).unwrap(), Interval::equal_to(4).unwrap(), true),
      (2, Interval::less_or_equal(1).unwrap(), Interval::equal_to(4).unwrap(), true),
      (3, Interval::less_or_equal(5).unwrap(), Interval::less_than(5).unwrap(), false),
      (4, Interval::less_than(5).unwrap(), Interval::less_or_equal(5).unwrap(), true),
      (5, Interval::all(), Interval::all(), false),
      (6, ii(2, 4), ii(2, 5), true),
      (7, ii(2, 5), ii(2, 4), false),
      (8, ii(2, 5), ei(2, 3), true),
      (9, ei(2, 3), ii(2, 5), false),
      (10, ie(2, 5), ii(2, 5), true),
      (11, ii(2, 5), ie(2, 5), false),
    ];
    for (id, a, b, expected) in cases {
      assert_eq!(a.comes_before(&b), expected, "test #{} of comes_before", id);
      assert_eq!(a < b, expected, "test #{} of `<`", id);
    }
    assert!(ii(2, 5) > ii(2, 4));
    assert!(ii(2, 5) >= ii(2, 5));
    assert_eq!(ii(2, 5).cmp(&ie(2, 5)), Ordering::Greater);
  }

  #[test]
  fn overlaps() {
    let cases = vec![
      (1, 8, 9, false),
      (2, 12, 6, true),
      (3, 7, 8, true),
      (4, 8, 4, true),
      (5, 14, 11, true),
      (6, 10, 13, false),
      (7, 5, 1, true),
      (8, 5, 2, true),
      (9, 15, 6, false),
      (10, 3, 1, true),
      (11, 1, 8, false),
      (12, 2, 12, true),
    ];
    for (id, a, b, expected) in cases {
      assert_eq!(r(a).overlaps(&r(b)), expected, "test #{} of overlaps", id);
      assert_eq!(r(b).overlaps(&r(a)), expected, "test #{} of overlaps (symmetric)", id);
      assert_eq!(r(a).is_disjoint(&r(b)), !expected, "test #{} of is_disjoint", id);
    }
    assert!(!Interval::<i32>::none().overlaps(&Interval::<i32>::none()));
    assert!(!Interval::all().overlaps(&ee(3, 3)));
  }

  #[test]
  fn adjacent_to() {
    let cases = vec![
      (1, 1, 6, false),
      (2, 6, 11, false),
      (3, 7, 9, true),
      (4, 3, 10, false),
      (5, 5, 14, false),
      (6, 6, 15, true),
      (7, 1, 8, false),
      (8, 12, 14, false),
      (9, 6, 13, false),
      (10, 2, 15, false),
      (11, 1, 4, false),
      (12, 1, 12, true),
      (13, 2, 8, true),
    ];
    for (id, a, b, expected) in cases {
      assert_eq!(r(a).adjacent_to(&r(b)), expected, "test #{} of adjacent_to", id);
      assert_eq!(r(b).adjacent_to(&r(a)), expected, "test #{} of adjacent_to (symmetric)", id);
    }
  }

  #[test]
  fn join() {
    let cases = vec![
      (1, 13, 15, Ok("[100...)")),
      (2, 7, 6, Ok("(-100..100]")),
      (3, 11, 2, Ok("(...100]")),
      (4, 4, 15, Ok("(...)")),
      (5, 8, 8, Ok("(-100...)")),
      (6, 3, 7, Ok("(...100]")),
      (7, 5, 10, Ok("(...)")),
      (8, 9, 1, Ok("(...-100]")),
      (9, 12, 5, Ok("(...)")),
      (10, 13, 1, Err(Error::DisjointJoin)),
      (11, 14, 2, Err(Error::DisjointJoin)),
    ];
    for (id, a, b, expected) in cases {
      let res = r(a).join(&r(b)).map(|i| i.to_string());
      assert_eq!(res, expected.map(String::from), "test #{} of join", id);
    }
    assert_eq!(Interval::<i32>::none().join(&ii(1, 2)), Err(Error::DisjointJoin));
    assert_eq!(Interval::<i32>::none().hull(&ii(1, 2)), ii(1, 2));
    assert_eq!(ii(1, 2).hull(&ii(5, 6)), ii(1, 6));
  }

  #[test]
  fn intersection() {
    let gt3 = Interval::greater_than(3).unwrap();
    let cases = vec![
      (1, gt3, Interval::greater_than(5).unwrap(), "(5...)"),
      (2, gt3, Interval::equal_to(3).unwrap(), "<Empty>"),
      (3, Interval::greater_or_equal(3).unwrap(), Interval::equal_to(3).unwrap(), "3"),
      (4, Interval::all(), Interval::all(), "(...)"),
      (5, gt3, Interval::less_than(10).unwrap(), "(3..10)"),
      (6, ii(1, 5), ie(1, 5), "[1..5)"),
      (7, ei(1, 5), ie(1, 5), "(1..5)"),
      (8, ii(1, 5), ii(5, 8), "5"),
      (9, ie(1, 5), ii(5, 8), "<Empty>"),
    ];
    for (id, a, b, expected) in cases {
      assert_eq!((a & b).to_string(), expected, "test #{} of intersection", id);
      assert_eq!((b & a).to_string(), expected, "test #{} of intersection (symmetric)", id);
    }
    assert_eq!(gt3.intersection(&Interval::equal_to(3).unwrap()), Interval::none());
  }

  #[test]
  fn contains() {
    let all = Interval::all();
    let lt = Interval::less_than(10).unwrap();
    let le = Interval::less_or_equal(10).unwrap();
    let some = ei(10, 20);
    let single = Interval::equal_to(10).unwrap();
    let ge = Interval::greater_or_equal(10).unwrap();
    let gt = Interval::greater_than(10).unwrap();
    let ne = Interval::equal_to(17).unwrap();
    let points = vec![
      (1, all, true), (2, lt, false), (3, le, true), (4, some, false),
      (5, single, true), (6, ge, true), (7, gt, false), (8, ne, false),
    ];
    for (id, interval, expected) in points {
      assert_eq!(interval.contains(&10), expected, "test #{} of contains", id);
    }
    assert!(all.contains_interval(&Interval::all()));
    assert!(!some.contains_interval(&all));
    assert!(all.contains_interval(&lt));
    assert!(!some.contains_interval(&lt));
    assert!(ge.contains_interval(&single));
    assert!(some.contains_interval(&ne));
    assert!(single.is_subset(&ge));
    assert!(single.is_proper_subset(&ge));
    assert!(!ge.is_proper_subset(&ge));
    assert!(gt.contains_interval(&Interval::none()));
    assert!(!Interval::all().contains(&f64::NAN));
  }

  #[test]
  fn cut() {
    let base = ii(0, 10);
    let cases = vec![
      (1, ie(3, 5), Some(ie(0, 3)), Some(ie(3, 5)), Some(ii(5, 10))),
      (2, ii(3, 5), Some(ie(0, 3)), Some(ii(3, 5)), Some(ei(5, 10))),
      (3, ii(-5, 5), None, Some(ii(0, 5)), Some(ei(5, 10))),
      (4, ee(5, 15), Some(ii(0, 5)), Some(ei(5, 10)), None),
      (5, ii(20, 30), Some(ii(0, 10)), None, None),
      (6, ii(-5, 20), None, Some(ii(0, 10)), None),
      (7, ee(0, 10), Some(ii(0, 0)), Some(ee(0, 10)), Some(ii(10, 10))),
    ];
    for (id, cut, before_cut, inside_cut, after_cut) in cases {
      assert_eq!(base.cut(&cut), CutResult { before_cut, inside_cut, after_cut }, "test #{} of cut", id);
    }
    let half = Interval::less_than(4).unwrap();
    assert_eq!(base.cut(&half).before_cut, None);
    assert_eq!(base.cut(&half).after_cut, Some(ii(4, 10)));
  }

  // Mathematical definitions checked on a grid finer than the bounds.
  fn sample_bounds() -> Vec<Interval<f64>> {
    let values = [NegInf, Extended::Value(2.0), Extended::Value(4.0), Extended::Value(6.0), PosInf];
    let mut output = Vec::new();
    for l in &values {
      for u in &values {
        for &(lc, uc) in &[(true, true), (true, false), (false, true), (false, false)] {
          if let Ok(i) = Interval::<f64>::new(*l, *u, lc, uc) {
            if !i.is_empty() {
              output.push(i);
            }
          }
        }
      }
    }
    output
  }

  fn sample_points() -> Vec<f64> {
    (-2..=16).map(|x| x as f64 * 0.5).collect()
  }

  #[test]
  fn overlap_adjacency_and_join_match_definitions() {
    let points = sample_points();
    for a in sample_bounds() {
      for b in sample_bounds() {
        let overlap = points.iter().any(|x| a.contains(x) && b.contains(x));
        let hull = a.hull(&b);
        let gapless = points.iter().filter(|x| hull.contains(x)).all(|x| a.contains(x) || b.contains(x));
        assert_eq!(a.overlaps(&b), overlap, "overlap of {:?} and {:?}", a, b);
        assert_eq!(a.adjacent_to(&b), !overlap && gapless, "adjacency of {:?} and {:?}", a, b);
        assert_eq!(a.join(&b).is_ok(), gapless, "join of {:?} and {:?}", a, b);
        let inter = a.intersection(&b);
        for x in &points {
          assert_eq!(inter.contains(x), a.contains(x) && b.contains(x), "intersection of {:?} and {:?} at {}", a, b, x);
        }
      }
    }
  }

  #[test]
  fn interval_algebra_into_sets() {
    assert_eq!((ii(0, 3) | ii(5, 8)).to_string(), "[0..3],[5..8]");
    assert_eq!((ie(0, 5) | ii(5, 8)).to_string(), "[0..8]");
    assert_eq!((ii(0, 10) - ii(3, 5)).to_string(), "[0..3),(5..10]");
    assert_eq!(ii(0, 5).symmetric_difference(&ii(3, 8)).to_string(), "[0..3),(5..8]");
  }

  #[test]
  fn to_interval() {
    let point: Result<Interval<i32>, Error> = 4i32.to_interval();
    assert_eq!(point, Interval::equal_to(4));
    let pair: Result<Interval<i32>, Error> = (2i32, 5i32).to_interval();
    assert_eq!(pair, Ok(ii(2, 5)));
    let reversed: Result<Interval<i32>, Error> = (5i32, 2i32).to_interval();
    assert_eq!(reversed, Err(Error::InvalidRange));
    let value: Result<Interval<i32>, Error> = Element::Value(7).to_interval();
    assert_eq!(value, Ok(ii(7, 7)));
    let wrapped: Result<Interval<i32>, Error> = Element::Interval(ie(1, 2)).to_interval();
    assert_eq!(wrapped, Ok(ie(1, 2)));
    let borrowed: Result<Interval<i32>, Error> = (&ie(1, 2)).to_interval();
    assert_eq!(borrowed, Ok(ie(1, 2)));
  }

  #[cfg(feature = "serde")]
  #[test]
  fn serde_tokens() {
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    assert_tokens(&ie(2, 5), &[
      Token::Tuple { len: 4 },
      Token::NewtypeVariant { name: "Extended", variant: "Value" },
      Token::I32(2),
      Token::NewtypeVariant { name: "Extended", variant: "Value" },
      Token::I32(5),
      Token::Bool(true),
      Token::Bool(false),
      Token::TupleEnd,
    ]);
    assert_tokens(&Interval::<i32>::less_than(0).unwrap(), &[
      Token::Tuple { len: 4 },
      Token::UnitVariant { name: "Extended", variant: "NegInf" },
      Token::NewtypeVariant { name: "Extended", variant: "Value" },
      Token::I32(0),
      Token::Bool(false),
      Token::Bool(false),
      Token::TupleEnd,
    ]);
    assert_de_tokens_error::<Interval<i32>>(&[
      Token::Tuple { len: 4 },
      Token::NewtypeVariant { name: "Extended", variant: "Value" },
      Token::I32(5),
      Token::NewtypeVariant { name: "Extended", variant: "Value" },
      Token::I32(2),
      Token::Bool(true),
      Token::Bool(true),
      Token::TupleEnd,
    ], "upper bound cannot be less than lower bound");
  }
}
