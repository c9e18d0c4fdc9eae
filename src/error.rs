// SPDX-License-Identifier: MIT
// Copyright (c) 2024 Rishabh Dwivedi (rishabhdwivedi17@gmail.com)

//! Error type surfaced by this crate's public sorting entry points.
//!
//! Every other failure mode this crate can hit internally -- stable
//! partition's scratch-buffer allocation, melsort's list budget, samplesort's
//! splitter degeneracy -- is recoverable and handled by falling back to a
//! different internal strategy; none of it is surfaced here. The one
//! exception is the node pool slabsort allocates up front: without it melsort
//! cannot run at all, so its allocation failure is the only thing this crate
//! reports to a caller.

use std::collections::TryReserveError;

use thiserror::Error;

/// The only error this crate's public API can return.
#[derive(Debug, Error)]
pub enum SortError {
    /// `sort_bidirectional` could not allocate the node pool it needs for
    /// slabsort's melsort passes.
    #[error("failed to allocate a node pool of {requested} nodes: {source}")]
    PoolAllocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}
