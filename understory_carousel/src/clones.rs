// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loop clones for infinite mode.
//!
//! A looping carousel renders a *track*: copies of the tail items, then the
//! real items, then copies of the head items. Swiping past either end then
//! reveals a duplicate instead of empty space, and the host silently jumps
//! back to the twin slot once the animation settles.
//!
//! Clones are recorded by the index of the item they duplicate, so the host
//! renders them exactly like their source.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::config::CarouselConfig;

/// Source indices of one side's clones.
pub type CloneSources = SmallVec<[usize; 8]>;

/// One rendered slot of the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackSlot {
    /// A clone placed before the first real item.
    LeadingClone(usize),
    /// A real item.
    Item(usize),
    /// A clone placed after the last real item.
    TrailingClone(usize),
}

impl TrackSlot {
    /// Index of the real item this slot shows.
    #[must_use]
    pub const fn source(self) -> usize {
        match self {
            Self::LeadingClone(i) | Self::Item(i) | Self::TrailingClone(i) => i,
        }
    }

    /// Returns `true` for clone slots.
    #[must_use]
    pub const fn is_clone(self) -> bool {
        !matches!(self, Self::Item(_))
    }
}

/// Clones placed around the real items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clones {
    /// Sources of the clones placed before the head, in visual order.
    pub before: CloneSources,
    /// Sources of the clones placed after the tail, in visual order.
    pub after: CloneSources,
    items_count: usize,
}

impl Clones {
    /// No clones around `items_count` real items.
    #[must_use]
    pub fn none(items_count: usize) -> Self {
        Self {
            before: CloneSources::new(),
            after: CloneSources::new(),
            items_count,
        }
    }

    /// Number of real items the clones were generated for.
    #[must_use]
    pub const fn items_count(&self) -> usize {
        self.items_count
    }

    /// Total number of clones on both sides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    /// Returns `true` if there are no clones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }

    /// Number of slots in the rendered track.
    #[must_use]
    pub fn track_len(&self) -> usize {
        self.items_count + self.len()
    }

    /// Iterates the rendered track in visual order.
    pub fn track_slots(&self) -> impl Iterator<Item = TrackSlot> + '_ {
        let before = self.before.iter().copied().map(TrackSlot::LeadingClone);
        let items = (0..self.items_count).map(TrackSlot::Item);
        let after = self.after.iter().copied().map(TrackSlot::TrailingClone);
        before.chain(items).chain(after)
    }

    /// Collects the rendered track.
    #[must_use]
    pub fn track(&self) -> Vec<TrackSlot> {
        self.track_slots().collect()
    }
}

/// Returns `1` when a looping carousel has a stage padding, else `0`.
///
/// A padded stage shows a sliver of the neighbouring items, so one extra clone
/// is needed on each side.
pub fn get_items_offset(config: &CarouselConfig) -> usize {
    let padded = config.padding_left != 0.0 || config.padding_right != 0.0;
    usize::from(config.infinite && padded)
}

/// Builds the loop clones for `config`.
///
/// Finite carousels get no clones. Looping ones duplicate
/// `min(items_in_slide, items_count) + items_offset` items on each side: the
/// tail before the head and the head after the tail. When a padded stage shows
/// every item in one slide, one more copy of the last and first item is added
/// on the outside.
pub fn create_clones(config: &CarouselConfig, items_in_slide: usize) -> Clones {
    let items_count = config.items_count;
    if !config.infinite {
        return Clones::none(items_count);
    }

    let items_offset = get_items_offset(config);
    let cursor = (items_in_slide.min(items_count) + items_offset).min(items_count);

    let mut before: CloneSources = (items_count - cursor..items_count).collect();
    let mut after: CloneSources = (0..cursor).collect();

    if items_offset > 0 && items_in_slide == items_count && items_count > 0 {
        before.insert(0, items_count - 1);
        after.push(0);
    }

    Clones {
        before,
        after,
        items_count,
    }
}
