// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns carousel inputs and caches the last layout.

use alloc::vec::Vec;

use kurbo::Size;

use crate::config::CarouselConfig;
use crate::environment::Environment;
use crate::measure::{Measure, StageMeasurement};
use crate::state::{State, calculate_initial_state};

/// Controller for one carousel instance.
///
/// This type:
/// - owns the [`CarouselConfig`], the latest [`StageMeasurement`], and an
///   [`Environment`],
/// - recomputes the [`State`] lazily after any input actually changed,
/// - hands out the cached snapshot otherwise.
///
/// It does *not* bind events, run timers, or apply transforms; the host calls
/// the setters from its resize, swipe-end, and navigation handlers and renders
/// whatever [`Carousel::state`] returns.
#[derive(Debug)]
pub struct Carousel<E: Environment> {
    config: CarouselConfig,
    measurement: StageMeasurement,
    env: E,
    can_use_dom: bool,

    dirty: bool,
    last_state: Option<State>,
}

impl<E: Environment> Carousel<E> {
    /// Creates a controller with no stage measurement yet.
    #[must_use]
    pub fn new(config: CarouselConfig, env: E) -> Self {
        Self {
            config,
            measurement: StageMeasurement::default(),
            env,
            can_use_dom: false,
            dirty: true,
            last_state: None,
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: CarouselConfig) {
        if config != self.config {
            self.config = config;
            self.dirty = true;
        }
    }

    /// Returns the environment.
    #[must_use]
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Returns a mutable reference to the environment, marking the cached state dirty.
    pub fn env_mut(&mut self) -> &mut E {
        self.dirty = true;
        &mut self.env
    }

    /// Returns the latest measurement.
    #[must_use]
    pub fn measurement(&self) -> &StageMeasurement {
        &self.measurement
    }

    /// Records that the host renders into a DOM regardless of what the
    /// environment reports.
    pub fn set_can_use_dom(&mut self, can_use_dom: bool) {
        if can_use_dom != self.can_use_dom {
            self.can_use_dom = can_use_dom;
            self.dirty = true;
        }
    }

    /// Sets the number of items.
    pub fn set_items_count(&mut self, items_count: usize) {
        if items_count != self.config.items_count {
            self.config.items_count = items_count;
            self.dirty = true;
        }
    }

    /// Sets the requested active index.
    pub fn set_active_index(&mut self, index: isize) {
        if self.config.active_index != Some(index) {
            self.config.active_index = Some(index);
            self.dirty = true;
        }
    }

    /// Sets or clears the viewport width override.
    pub fn set_viewport_width(&mut self, width: Option<f64>) {
        if self.config.viewport_width != width {
            self.config.viewport_width = width;
            self.dirty = true;
        }
    }

    /// Records a new stage size, or `None` when the stage is detached.
    pub fn set_stage_size(&mut self, size: Option<Size>) {
        if self.measurement.stage != size {
            self.measurement.stage = size;
            self.dirty = true;
        }
    }

    /// Records the intrinsic widths of the rendered track children.
    pub fn set_item_widths(&mut self, widths: Vec<f64>) {
        if self.measurement.item_widths != widths {
            self.measurement.item_widths = widths;
            self.dirty = true;
        }
    }

    /// Returns `true` if the next [`Carousel::state`] call recomputes.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Computes or returns the cached layout.
    pub fn state(&mut self) -> &State {
        if self.dirty {
            self.last_state = None;
            self.dirty = false;
        }
        let Self {
            config,
            measurement,
            env,
            can_use_dom,
            last_state,
            ..
        } = self;
        last_state.get_or_insert_with(|| {
            let measure = measurement.stage.map(|_| &*measurement as &dyn Measure);
            calculate_initial_state(config, measure, &*env, *can_use_dom)
        })
    }

    /// Returns an owned copy of the current layout.
    #[must_use]
    pub fn snapshot(&mut self) -> State {
        self.state().clone()
    }
}
