// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe boundaries.
//!
//! Values live in translate space, the same space as `State::translate3d`:
//! `0.0` shows the first slot, negative values move the track to the left.
//! [`SwipeLimits::min`] bounds a drag towards the start of the track and
//! [`SwipeLimits::max`] towards its end, so `max <= min` for any track that
//! scrolls.

use crate::config::CarouselConfig;
use crate::transformation::{TransformationSet, overscroll_cap};

/// Inputs shared by the swipe computations.
#[derive(Clone, Copy, Debug)]
pub struct SwipeParams<'a> {
    /// Number of real items.
    pub items_count: usize,
    /// Extra padding clones per side (`0` or `1`).
    pub items_offset: usize,
    /// Items per slide.
    pub items_in_slide: usize,
    /// Track slots before the first real item.
    pub shift: usize,
    /// Track coordinates.
    pub transformation_set: &'a TransformationSet,
    /// Stage width.
    pub stage_width: f64,
    /// Track content width.
    pub content_width: f64,
}

/// Swipe boundaries for one layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeLimits {
    /// Translation bound towards the start of the track.
    pub min: f64,
    /// Translation bound towards the end of the track.
    pub max: f64,
    /// Distance between a track slot and its loop twin.
    pub shift_value: f64,
    /// Position of the first slot of the last full slide.
    pub allowed_position_max: f64,
}

/// Bound for dragging towards the start.
///
/// Looping tracks stop at the slot after the padding clone; finite tracks may
/// over-scroll by `swipe_extra_padding`, but never by more than one slot.
pub fn get_swipe_limit_min(params: &SwipeParams<'_>, config: &CarouselConfig) -> f64 {
    let set = params.transformation_set;
    if config.infinite {
        return -set.position(params.items_offset);
    }
    config.swipe_extra_padding.min(set.coord(0).width)
}

/// Bound for dragging towards the end.
///
/// Looping tracks stop where the trailing clones begin to repeat the head.
/// Finite tracks stop once the last slide is flush with the stage edge, plus
/// `swipe_extra_padding`.
pub fn get_swipe_limit_max(params: &SwipeParams<'_>, config: &CarouselConfig) -> f64 {
    let set = params.transformation_set;
    if config.infinite {
        return -set.position(params.items_count + params.shift);
    }
    let last_slide = set.coords_from_end(params.items_in_slide).position;
    let flush = last_slide.min(overscroll_cap(params.content_width, params.stage_width));
    -(flush + config.swipe_extra_padding)
}

/// Distance the track jumps when a looping drag wraps around.
///
/// This is the position of slot `items_count`, i.e. one full cycle of real
/// items. Finite tracks usually have no such slot and yield `0.0`.
pub fn get_swipe_shift_value(items_count: usize, transformation_set: &TransformationSet) -> f64 {
    transformation_set.position(items_count)
}

/// Computes all swipe boundaries.
pub fn get_swipe_limits(params: &SwipeParams<'_>, config: &CarouselConfig) -> SwipeLimits {
    SwipeLimits {
        min: get_swipe_limit_min(params, config),
        max: get_swipe_limit_max(params, config),
        shift_value: get_swipe_shift_value(params.items_count, params.transformation_set),
        allowed_position_max: params
            .transformation_set
            .coords_from_end(params.items_in_slide)
            .position,
    }
}
