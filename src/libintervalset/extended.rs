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

//! Extension of an ordered domain with a bottom and a top element.
//!
//! Any domain value `v` satisfies `NegInf < Value(v) < PosInf`. The two sentinels are only equal to themselves and are the negation of each other.
//!
//! # Examples
//!
//! ```rust
//! use intervalset::Extended;
//!
//! let five = Extended::Value(5);
//! assert!(Extended::NegInf < five);
//! assert!(five < Extended::PosInf);
//! assert_eq!(-Extended::<i32>::NegInf, Extended::PosInf);
//! assert_eq!(-five, Extended::Value(-5));
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A domain value or one of the two universal infinities.
///
/// The variants are declared in increasing order so the derived comparisons are the extended order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Extended<T> {
  NegInf,
  Value(T),
  PosInf
}

impl<T> Extended<T>
{
  pub fn is_finite(&self) -> bool {
    matches!(self, Extended::Value(_))
  }

  pub fn is_infinite(&self) -> bool {
    !self.is_finite()
  }

  pub fn value(&self) -> Option<&T> {
    match self {
      Extended::Value(v) => Some(v),
      _ => None
    }
  }

  pub fn into_value(self) -> Option<T> {
    match self {
      Extended::Value(v) => Some(v),
      _ => None
    }
  }
}

impl<T: PartialOrd> Extended<T>
{
  /// A finite value that cannot be compared with itself (such as `NaN`) is not orderable, the sentinels always are.
  pub fn is_orderable(&self) -> bool {
    match self {
      Extended::Value(v) => v.partial_cmp(v) == Some(Ordering::Equal),
      _ => true
    }
  }

  /// Compares with a plain domain value without wrapping it.
  pub(crate) fn partial_cmp_value(&self, value: &T) -> Option<Ordering> {
    match self {
      Extended::NegInf => Some(Ordering::Less),
      Extended::Value(v) => v.partial_cmp(value),
      Extended::PosInf => Some(Ordering::Greater)
    }
  }
}

impl<T> From<T> for Extended<T>
{
  fn from(value: T) -> Extended<T> {
    Extended::Value(value)
  }
}

impl<T> Neg for Extended<T> where
 T: Neg<Output=T>
{
  type Output = Extended<T>;

  fn neg(self) -> Extended<T> {
    match self {
      Extended::NegInf => Extended::PosInf,
      Extended::Value(v) => Extended::Value(-v),
      Extended::PosInf => Extended::NegInf
    }
  }
}

impl<T: Display> Display for Extended<T>
{
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Extended::NegInf => write!(f, "-~"),
      Extended::Value(v) => write!(f, "{}", v),
      Extended::PosInf => write!(f, "~")
    }
  }
}

impl<T: Debug> Debug for Extended<T>
{
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Extended::NegInf => write!(f, "-Inf"),
      Extended::Value(v) => write!(f, "{:?}", v),
      Extended::PosInf => write!(f, "Inf")
    }
  }
}
