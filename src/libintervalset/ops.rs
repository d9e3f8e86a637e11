// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval and bound specific operations.
//!
//! The set operations (union, intersection, difference, ...) come from `gcollections::ops`, this module only adds what is specific to convex ranges.

/// Smallest convex value covering both operands, whether they touch or not.
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

/// Two values touching without sharing any point of the domain, such as `(...5)` and `[5...)`.
pub trait Adjacent<RHS = Self>
{
  fn adjacent_to(&self, rhs: &RHS) -> bool;
}

/// The value covering the whole extended domain, `(...)`.
pub trait Whole
{
  fn whole() -> Self;
}
