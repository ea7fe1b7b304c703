// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: headless layout for carousels and sliders.
//!
//! This crate computes everything a carousel needs to render and swipe a
//! horizontal track of items, from a configuration value and a single stage
//! measurement. It is a pure function: no DOM access, timers, or event
//! handling happen here.
//!
//! The core concepts are:
//!
//! - [`CarouselConfig`]: immutable input (item count, [`ResponsiveTable`]
//!   breakpoints, loop and auto-width modes, requested index, paddings).
//! - [`Environment`]: whether a DOM-like host exists and how wide its viewport
//!   is. [`Headless`] and [`FixedViewport`] cover tests and server-side layout.
//! - [`Measure`]: the stage size and, in auto-width mode, each rendered
//!   child's intrinsic width. [`StageMeasurement`] is a plain record of both.
//! - [`calculate_initial_state`]: composes the pipeline below into a [`State`].
//! - [`Carousel`]: a small controller that owns the inputs and caches the last
//!   [`State`], recomputing only when something changed.
//!
//! The pipeline, leaves first:
//!
//! 1. [`resolve_items_per_slide`] picks the number of items per slide from the
//!    breakpoint table.
//! 2. [`create_clones`] duplicates head and tail items around a looping track.
//! 3. [`create_default_transformation_set`] or
//!    [`create_autowidth_transformation_set`] lays out every track slot.
//! 4. [`get_start_index`] and [`get_active_index`] normalize the requested index.
//! 5. [`get_swipe_limits`] derives drag bounds.
//! 6. [`get_translate3d_property`] converts the active index into a track offset.
//!
//! Host frameworks are responsible for:
//!
//! - Rendering [`Clones::track`] in order, each slot showing its source item.
//! - Applying [`State::translate3d`] as a horizontal transform on the track.
//! - Clamping drags between [`State::swipe_limit_max`] and
//!   [`State::swipe_limit_min`].
//! - Recomputing on resize, breakpoint changes, and navigation.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{
//!     CarouselConfig, Headless, StageMeasurement, calculate_initial_state,
//! };
//!
//! // Six items, one per slide, on a 600px stage.
//! let config = CarouselConfig::new(6).with_active_index(2);
//! let stage = StageMeasurement::with_stage_width(600.0);
//! let state = calculate_initial_state(&config, Some(&stage), &Headless, false);
//!
//! assert_eq!(state.items_in_slide, 1);
//! assert_eq!(state.transformation_set.len(), 6);
//! assert_eq!(state.translate3d, -1200.0);
//! ```
//!
//! ## Responsive, looping example
//!
//! ```rust
//! use understory_carousel::{
//!     CarouselConfig, FixedViewport, ResponsiveRule, ResponsiveTable, StageMeasurement,
//!     calculate_initial_state,
//! };
//!
//! let breakpoints = ResponsiveTable::new()
//!     .with(0, ResponsiveRule::new(1))
//!     .with(768, ResponsiveRule::new(3));
//! let config = CarouselConfig::new(10)
//!     .with_responsive(breakpoints)
//!     .with_infinite(true);
//! let stage = StageMeasurement::with_stage_width(900.0);
//! let state = calculate_initial_state(&config, Some(&stage), &FixedViewport(1024.0), false);
//!
//! // Three clones on each side of the ten real items.
//! assert_eq!(state.items_in_slide, 3);
//! assert_eq!(state.transformation_set.len(), 16);
//! // The first real item sits right after the leading clones.
//! assert_eq!(state.translate3d, -900.0);
//! ```
//!
//! All widths and offsets are in stage pixels and expected to be finite.
//! Measurements that are not are treated as zero.
//!
//! This crate is `no_std` and uses `alloc`. Diagnostics go through the
//! [`log`](https://docs.rs/log) facade under the `understory_carousel` target.

#![no_std]

extern crate alloc;

mod carousel;
mod clones;
mod config;
mod environment;
mod index;
mod measure;
mod responsive;
mod state;
mod swipe;
mod transformation;
mod translate;

pub use carousel::Carousel;
pub use clones::{CloneSources, Clones, TrackSlot, create_clones, get_items_offset};
pub use config::{Breakpoint, CarouselConfig, ItemsFit, ResponsiveRule, ResponsiveTable};
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use environment::WebEnvironment;
pub use environment::{Environment, FixedViewport, Headless, can_use_environment};
pub use index::{get_active_index, get_shift_index, get_start_index};
pub use measure::{Measure, StageMeasurement, measured_stage_width};
pub use responsive::resolve_items_per_slide;
pub use state::{FadeoutAnimation, State, Transition, calculate_initial_state};
pub use swipe::{
    SwipeLimits, SwipeParams, get_swipe_limit_max, get_swipe_limit_min, get_swipe_limits,
    get_swipe_shift_value,
};
pub use transformation::{
    ItemCoord, TransformationSet, TransformationSetResult, create_autowidth_transformation_set,
    create_default_transformation_set, get_item_width, is_stage_content_partial, overscroll_cap,
};
pub use translate::{TranslateParams, get_translate3d_property};
