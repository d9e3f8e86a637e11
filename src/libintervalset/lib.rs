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

//! This library proposes continuous intervals over any ordered domain, with open, closed and unbounded ends, and sets of disjoint intervals closed under union, intersection, difference, symmetric difference and complement. Bounds only need `PartialOrd + Clone`, so integers, floating point numbers, strings or dates can be used; a bound that cannot be ordered, such as `NaN`, is rejected at construction.
//!
//! The set operations are the traits of [gcollections](https://docs.rs/gcollections), available with `use gcollections::ops::*`.
//!
//! # Examples
//!
//! ```rust
//! use intervalset::{Interval, IntervalSet};
//! use gcollections::ops::*;
//!
//! let a = IntervalSet::between(-100, 100, true).unwrap();
//! let b = IntervalSet::between(-50, 50, true).unwrap();
//! assert_eq!((&a ^ &b).to_string(), "[-100..-50),(50..100]");
//!
//! let holes = IntervalSet::all() - IntervalSet::from_interval(Interval::equal_to(0).unwrap());
//! assert_eq!(holes, IntervalSet::not_equal_to(0).unwrap());
//! assert_eq!(holes.complement().to_string(), "0");
//! ```
//!
//! For more examples see the [interval module](interval/index.html) and the [interval set module](interval_set/index.html).
//!
//! # References
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)

#[macro_use]
mod macros;

mod canonical;
pub mod error;
pub mod extended;
pub mod frozen_interval_set;
pub mod interval;
pub mod interval_set;
pub mod ops;

pub use crate::error::Error;
pub use crate::extended::Extended;
pub use crate::frozen_interval_set::FrozenIntervalSet;
pub use crate::interval::{CutResult, Element, Interval, ToInterval};
pub use crate::interval_set::IntervalSet;
