// SPDX-License-Identifier: MIT
// Copyright (c) 2024 Rishabh Dwivedi (rishabhdwivedi17@gmail.com)

//! # Algorithms module
//!
//! The `algo` module provides a collection of STL algorithms. These algorithms
//! explicitly accepts Positions. For more compact algorithm overloads that
//! just accepts ranges, or infix notation (by .) use `rng` module.
//!
//! NOTE: In documentation of any function that accepts position with notation
//! like [start, end), if doc talks in term of full range, it should be considered
//! as rng elements from [start, end) position only.

#[doc(hidden)]
pub mod rotate;
#[doc(inline)]
pub use rotate::*;

#[doc(hidden)]
pub mod partition;
#[doc(inline)]
pub use partition::*;

#[doc(inline)]
pub use crate::samplesort::{
    sort_random_access, sort_random_access_by, sort_random_access_default,
    sort_random_access_seeded,
};
#[doc(inline)]
pub use crate::slabsort::{sort_bidirectional, sort_bidirectional_by, sort_bidirectional_default};
