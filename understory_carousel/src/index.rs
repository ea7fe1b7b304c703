// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Start and active index normalization.
//!
//! Indices handed to and returned by the engine are *logical*: `0` is the first
//! real item whether or not clones are present. The clone-adjusted *track*
//! slot of a logical index is `index + get_shift_index(clones)`.

use crate::clones::Clones;

/// Clamps a requested index into `0..items_count`.
///
/// A missing or negative request, or an empty carousel, yields `0`; requests
/// past the end select the last item.
pub fn get_start_index(requested: Option<isize>, items_count: usize) -> usize {
    match requested {
        Some(index) if items_count > 0 && index > 0 => index.unsigned_abs().min(items_count - 1),
        _ => 0,
    }
}

/// Returns the logical active index for a normalized start index.
///
/// Finite carousels re-clamp into range. Looping carousels keep the index as
/// is; translation into track slots happens through [`get_shift_index`].
pub fn get_active_index(start_index: usize, items_count: usize, infinite: bool) -> usize {
    if infinite {
        start_index
    } else {
        start_index.min(items_count.saturating_sub(1))
    }
}

/// Number of track slots before the first real item.
pub fn get_shift_index(clones: &Clones) -> usize {
    clones.before.len()
}
