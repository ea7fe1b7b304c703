// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-slot coordinates of the rendered track.

use alloc::vec::Vec;

use crate::clones::Clones;
use crate::measure::Measure;

/// Horizontal placement of one track slot, in stage pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemCoord {
    /// Offset of the slot's leading edge from the start of the track.
    pub position: f64,
    /// Width of the slot.
    pub width: f64,
}

/// Ordered coordinates of every slot in the track, clones included.
///
/// Positions never decrease. Lookups outside the set yield a zero
/// [`ItemCoord`] instead of failing, since hosts routinely query a set built
/// before the stage was measured.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformationSet {
    coords: Vec<ItemCoord>,
}

impl TransformationSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { coords: Vec::new() }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns `true` if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the coordinates of slot `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ItemCoord> {
        self.coords.get(index).copied()
    }

    /// Returns the coordinates of slot `index`, or a zero coordinate.
    #[must_use]
    pub fn coord(&self, index: usize) -> ItemCoord {
        self.get(index).unwrap_or_default()
    }

    /// Position of slot `index`, or `0.0` if out of range.
    #[must_use]
    pub fn position(&self, index: usize) -> f64 {
        self.coord(index).position
    }

    /// Returns the slot `n` steps before the end.
    ///
    /// `n == 0` and `n > len` both resolve to the first slot; an empty set
    /// yields a zero coordinate.
    #[must_use]
    pub fn coords_from_end(&self, n: usize) -> ItemCoord {
        let index = if n == 0 {
            0
        } else {
            self.len().saturating_sub(n)
        };
        self.coord(index)
    }

    /// The coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ItemCoord] {
        &self.coords
    }

    /// Iterates the coordinates in visual order.
    pub fn iter(&self) -> impl Iterator<Item = ItemCoord> + '_ {
        self.coords.iter().copied()
    }

    /// Appends a slot directly after the last one.
    fn push_width(&mut self, width: f64) {
        let position = self
            .coords
            .last()
            .map_or(0.0, |prev| prev.position + prev.width);
        self.coords.push(ItemCoord { position, width });
    }
}

impl FromIterator<ItemCoord> for TransformationSet {
    fn from_iter<I: IntoIterator<Item = ItemCoord>>(iter: I) -> Self {
        Self {
            coords: iter.into_iter().collect(),
        }
    }
}

/// Output of the transformation-set builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformationSetResult {
    /// Slot coordinates.
    pub coords: TransformationSet,
    /// Total width of the track content.
    pub content: f64,
    /// Whether the content fits the stage, so that nothing needs to scroll.
    pub partial: bool,
}

/// Width of one slot when `items_in_slide` slots share the stage.
///
/// A zero slot count gives every slot the full stage width.
pub fn get_item_width(stage_width: f64, items_in_slide: usize) -> f64 {
    if items_in_slide > 0 {
        stage_width / items_in_slide as f64
    } else {
        stage_width
    }
}

/// Returns `true` when a finite track fits inside the stage.
///
/// A looping track is never partial: its clones always overflow.
pub fn is_stage_content_partial(infinite: bool, stage_width: f64, content_width: f64) -> bool {
    !infinite && stage_width >= content_width
}

/// How far the track may scroll before its end leaves the stage's trailing edge.
pub fn overscroll_cap(content_width: f64, stage_width: f64) -> f64 {
    (content_width - stage_width).max(0.0)
}

/// Lays out every track slot with the same width, `stage_width / items_in_slide`.
///
/// Slots are packed without gaps: `position[i + 1] == position[i] + width`.
pub fn create_default_transformation_set(
    clones: &Clones,
    stage_width: f64,
    items_in_slide: usize,
    infinite: bool,
) -> TransformationSetResult {
    let width = get_item_width(stage_width, items_in_slide);
    let mut coords = TransformationSet::new();
    let mut content = 0.0;
    for _ in clones.track_slots() {
        coords.push_width(width);
        content += width;
    }

    TransformationSetResult {
        partial: is_stage_content_partial(infinite, stage_width, content),
        coords,
        content,
    }
}

/// Lays out every track slot at its measured intrinsic width.
///
/// Missing, negative, and non-finite widths count as zero.
/// Without a measurement source the set is empty.
pub fn create_autowidth_transformation_set(
    measure: Option<&dyn Measure>,
    clones: &Clones,
    stage_width: f64,
    infinite: bool,
) -> TransformationSetResult {
    let mut coords = TransformationSet::new();
    let mut content = 0.0;
    if let Some(measure) = measure {
        for index in 0..clones.track_len() {
            let width = match measure.item_width(index) {
                Some(width) if width.is_finite() => width.max(0.0),
                Some(width) => {
                    log::debug!(
                        target: "understory_carousel",
                        "non-finite width {width:?} for track slot {index}; using 0"
                    );
                    0.0
                }
                None => 0.0,
            };
            coords.push_width(width);
            content += width;
        }
    } else {
        log::debug!(
            target: "understory_carousel",
            "auto-width layout without measurements; track is empty"
        );
    }

    TransformationSetResult {
        partial: is_stage_content_partial(infinite, stage_width, content),
        coords,
        content,
    }
}
