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

//! Errors raised when building or mutating intervals and interval sets.

use thiserror::Error;

/// Every failure of this crate. Errors are only raised at construction time or by a mutator asked to do something impossible; a built value is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// A bound is not comparable with itself (such as `NaN`), or the two bounds cannot be compared with each other.
  #[error("interval bound is not orderable")]
  InvalidBound,
  /// The upper bound is strictly less than the lower bound.
  #[error("upper bound cannot be less than lower bound")]
  InvalidRange,
  /// An infinite end was marked as closed.
  #[error("unbounded ends cannot be included in an interval")]
  UnboundedClosure,
  /// Joining two intervals that neither overlap nor touch.
  #[error("the intervals are disjoint")]
  DisjointJoin,
  /// Removing something that is not entirely covered by the set.
  #[error("the element is not contained in the set")]
  NotFound,
  #[error("pop from an empty interval set")]
  EmptyPop,
  #[error("index {index} is out of range for a set of {len} intervals")]
  IndexOutOfRange {
    index: usize,
    len: usize
  },
  /// The text is not of the form `Interval(lower, upper, lower_closed=bool, upper_closed=bool)`.
  #[error("cannot parse `{0}` as an interval")]
  Parse(String),
}
