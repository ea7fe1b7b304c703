// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration and the responsive breakpoint table.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// How a responsive rule's `items` count interacts with the number of items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ItemsFit {
    /// Never show more slots than there are items: `min(items, items_count)`.
    #[default]
    Fill,
    /// Use `items` as is, even if it exceeds the item count. The last slide
    /// may then contain empty slots.
    Contain,
}

/// Layout rule applied once the viewport reaches a breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResponsiveRule {
    /// Number of items visible in one slide.
    pub items: usize,
    /// How `items` is reconciled with the item count.
    pub items_fit: ItemsFit,
}

impl ResponsiveRule {
    /// Creates a rule with the default [`ItemsFit::Fill`] policy.
    #[must_use]
    pub const fn new(items: usize) -> Self {
        Self {
            items,
            items_fit: ItemsFit::Fill,
        }
    }

    /// Creates a rule with the [`ItemsFit::Contain`] policy.
    #[must_use]
    pub const fn contain(items: usize) -> Self {
        Self {
            items,
            items_fit: ItemsFit::Contain,
        }
    }
}

/// A single `breakpoint => rule` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoint {
    /// Breakpoint key as written by the caller, for example `"768"`.
    pub key: String,
    /// Rule applied when the viewport is at least this wide.
    pub rule: ResponsiveRule,
}

impl Breakpoint {
    /// Parses the key as a viewport width in pixels.
    ///
    /// Returns `None` for keys that are not a finite number.
    #[must_use]
    pub fn min_width(&self) -> Option<f64> {
        let key = self.key.trim();
        if key.is_empty() {
            return Some(0.0);
        }
        key.parse::<f64>().ok().filter(|width| width.is_finite())
    }
}

/// Ordered breakpoint table.
///
/// Entries keep their declaration order. Resolution walks them in that order
/// and the last applicable entry wins, so a table declared in descending
/// order resolves differently from the same table declared ascending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponsiveTable {
    entries: Vec<Breakpoint>,
}

impl ResponsiveTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a numeric breakpoint.
    #[must_use]
    pub fn with(mut self, min_width: u32, rule: ResponsiveRule) -> Self {
        self.push(min_width.to_string(), rule);
        self
    }

    /// Appends a breakpoint with a textual key, exactly as supplied.
    pub fn push(&mut self, key: impl Into<String>, rule: ResponsiveRule) {
        self.entries.push(Breakpoint {
            key: key.into(),
            rule,
        });
    }

    /// Returns the entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }

    /// Returns `true` if no breakpoints are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of declared breakpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Into<String>> FromIterator<(K, ResponsiveRule)> for ResponsiveTable {
    fn from_iter<I: IntoIterator<Item = (K, ResponsiveRule)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, rule) in iter {
            table.push(key, rule);
        }
        table
    }
}

/// Immutable input to the layout engine.
///
/// Every field has an explicit default (see [`CarouselConfig::default`]):
///
/// | field | default |
/// |---|---|
/// | `items_count` | `0` |
/// | `responsive` | `None` (one item per slide) |
/// | `auto_width`, `infinite`, `auto_play` | `false` |
/// | `animation_duration` | `0.0` ms |
/// | `animation_easing` | `"ease"` |
/// | `active_index` | `None` (first item) |
/// | `viewport_width` | `None` (probe the environment) |
/// | `padding_left`, `padding_right` | `0.0` |
/// | `swipe_extra_padding` | `0.0` |
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Number of logical items.
    pub items_count: usize,
    /// Breakpoint table mapping viewport widths to items per slide.
    pub responsive: Option<ResponsiveTable>,
    /// Items take their intrinsic width instead of a share of the stage.
    pub auto_width: bool,
    /// Loop mode: clones are generated on both sides of the track.
    pub infinite: bool,
    /// Start in auto-play mode. Passed through to the state.
    pub auto_play: bool,
    /// Slide animation duration in milliseconds. Passed through to the state.
    pub animation_duration: f64,
    /// CSS easing function used by the track transition.
    pub animation_easing: String,
    /// Requested starting index.
    pub active_index: Option<isize>,
    /// Explicit viewport width, bypassing the environment probe.
    pub viewport_width: Option<f64>,
    /// Left stage padding in pixels.
    pub padding_left: f64,
    /// Right stage padding in pixels.
    pub padding_right: f64,
    /// How far a drag may over-scroll past either end of a finite track.
    pub swipe_extra_padding: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            items_count: 0,
            responsive: None,
            auto_width: false,
            infinite: false,
            auto_play: false,
            animation_duration: 0.0,
            animation_easing: String::from("ease"),
            active_index: None,
            viewport_width: None,
            padding_left: 0.0,
            padding_right: 0.0,
            swipe_extra_padding: 0.0,
        }
    }
}

impl CarouselConfig {
    /// Creates a configuration for `items_count` items with all other fields defaulted.
    #[must_use]
    pub fn new(items_count: usize) -> Self {
        Self {
            items_count,
            ..Self::default()
        }
    }

    /// Sets the breakpoint table.
    #[must_use]
    pub fn with_responsive(mut self, table: ResponsiveTable) -> Self {
        self.responsive = Some(table);
        self
    }

    /// Enables or disables auto-width mode.
    #[must_use]
    pub fn with_auto_width(mut self, auto_width: bool) -> Self {
        self.auto_width = auto_width;
        self
    }

    /// Enables or disables loop mode.
    #[must_use]
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    /// Enables or disables auto-play.
    #[must_use]
    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    /// Sets the animation duration in milliseconds.
    #[must_use]
    pub fn with_animation_duration(mut self, duration_ms: f64) -> Self {
        self.animation_duration = duration_ms;
        self
    }

    /// Sets the requested starting index.
    #[must_use]
    pub fn with_active_index(mut self, index: isize) -> Self {
        self.active_index = Some(index);
        self
    }

    /// Overrides the viewport width used for breakpoint resolution.
    #[must_use]
    pub fn with_viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = Some(width);
        self
    }

    /// Sets the left and right stage paddings.
    #[must_use]
    pub fn with_padding(mut self, left: f64, right: f64) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    /// Sets the over-scroll distance allowed while dragging a finite track.
    #[must_use]
    pub fn with_swipe_extra_padding(mut self, padding: f64) -> Self {
        self.swipe_extra_padding = padding;
        self
    }
}
