// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track offset for the active item.

use crate::transformation::TransformationSet;

/// Inputs to [`get_translate3d_property`].
#[derive(Clone, Copy, Debug)]
pub struct TranslateParams<'a> {
    /// Track slots before the first real item, padding clones included.
    pub shift: usize,
    /// Track coordinates.
    pub transformation_set: &'a TransformationSet,
    /// Loop mode.
    pub infinite: bool,
}

/// Horizontal track offset that brings the logical `active_index` into view.
///
/// The result is the negated position of the item's slot. Looping tracks look
/// the slot up past the leading clones; finite tracks use the index as is.
/// Auto-width slots are looked up at their measured positions, so no uniform
/// slide width is assumed. Unknown slots translate to `0.0`.
///
/// The offset is not clamped to the track end; drags are bounded by
/// [`SwipeLimits`](crate::SwipeLimits) instead.
pub fn get_translate3d_property(active_index: usize, params: &TranslateParams<'_>) -> f64 {
    let slot = if params.infinite {
        active_index + params.shift
    } else {
        active_index
    };
    -params.transformation_set.position(slot)
}
