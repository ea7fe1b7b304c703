// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout snapshot and the function that computes it.

use alloc::string::String;
use core::fmt;

use crate::clones::{Clones, create_clones, get_items_offset};
use crate::config::CarouselConfig;
use crate::environment::{Environment, can_use_environment};
use crate::index::{get_active_index, get_shift_index, get_start_index};
use crate::measure::{Measure, measured_stage_width};
use crate::responsive::resolve_items_per_slide;
use crate::swipe::{SwipeParams, get_swipe_limits};
use crate::transformation::{
    TransformationSet, create_autowidth_transformation_set, create_default_transformation_set,
};
use crate::translate::{TranslateParams, get_translate3d_property};

/// Progress of the fade-out animation.
///
/// The animation itself is driven elsewhere; a fresh layout is always idle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FadeoutAnimation {
    /// Index of the item fading out.
    pub index: Option<usize>,
    /// Track offset at which the fading item is pinned.
    pub position: Option<f64>,
    /// Whether a fade-out is running.
    pub processing: bool,
}

impl FadeoutAnimation {
    /// The idle state.
    pub const IDLE: Self = Self {
        index: None,
        position: None,
        processing: false,
    };

    /// Returns `true` when no fade-out is pending or running.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

/// Transition applied to the track's `transform`.
///
/// Displays as a CSS `transition` value, for example `transform 0ms ease 0s`.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Duration in milliseconds.
    pub duration_ms: f64,
    /// CSS easing function.
    pub easing: String,
}

impl Transition {
    /// A transition that completes immediately.
    #[must_use]
    pub fn immediate(easing: &str) -> Self {
        Self {
            duration_ms: 0.0,
            easing: String::from(easing),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform {}ms {} 0s", self.duration_ms, self.easing)
    }
}

/// Everything a renderer needs to draw and drag one carousel layout.
///
/// A `State` owns all of its data. It is produced fresh for every
/// computation and never updated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    /// Logical index of the active item.
    pub active_index: usize,
    /// Items are measured individually.
    pub auto_width: bool,
    /// Slide animation duration in milliseconds.
    pub animation_duration: f64,
    /// Loop clones around the real items.
    pub clones: Clones,
    /// Loop mode.
    pub infinite: bool,
    /// Number of real items.
    pub items_count: usize,
    /// Items per slide.
    pub items_in_slide: usize,
    /// Extra padding clones per side (`0` or `1`).
    pub items_offset: usize,
    /// Track offset showing the active item.
    pub translate3d: f64,
    /// Measured stage width.
    pub stage_width: f64,
    /// Total width of the track content.
    pub stage_content_width: f64,
    /// Stage height before the first measurement; always `0.0` here.
    pub initial_stage_height: f64,
    /// The content fits the stage and nothing needs to scroll.
    pub is_stage_content_partial: bool,
    /// Auto-play is running.
    pub is_auto_playing: bool,
    /// Auto-play was stopped by a user action.
    pub is_auto_play_canceled_on_action: bool,
    /// Per-slot coordinates of the track.
    pub transformation_set: TransformationSet,
    /// Track transition for this layout.
    pub transition: Transition,
    /// Fade-out animation progress.
    pub fadeout_animation: FadeoutAnimation,
    /// Drag bound towards the start of the track.
    pub swipe_limit_min: f64,
    /// Drag bound towards the end of the track.
    pub swipe_limit_max: f64,
    /// Position of the first slot of the last full slide.
    pub swipe_allowed_position_max: f64,
    /// Distance the track jumps when a looping drag wraps around.
    pub swipe_shift_value: f64,
    /// A DOM-like host is available.
    pub can_use_dom: bool,
}

impl State {
    /// Track slot shown for the logical `index`.
    #[must_use]
    pub fn track_index(&self, index: usize) -> usize {
        index + get_shift_index(&self.clones)
    }
}

/// Computes a complete layout snapshot.
///
/// `measure` is the stage measurement, if one is available yet; before the
/// first layout pass it is `None` and the stage is treated as zero-width.
/// `can_use_dom` forces [`State::can_use_dom`] on when the host already knows
/// it renders into a DOM.
///
/// This never fails: every missing or malformed input falls back to a
/// documented default.
pub fn calculate_initial_state(
    config: &CarouselConfig,
    measure: Option<&dyn Measure>,
    env: &dyn Environment,
    can_use_dom: bool,
) -> State {
    let items_count = config.items_count;
    let items_offset = get_items_offset(config);
    let items_in_slide = resolve_items_per_slide(items_count, config, env);
    let clones = create_clones(config, items_in_slide);
    let shift = get_shift_index(&clones);
    let start_index = get_start_index(config.active_index, items_count);
    let active_index = get_active_index(start_index, items_count, config.infinite);
    let stage_width = measured_stage_width(measure);

    let layout = if config.auto_width {
        create_autowidth_transformation_set(measure, &clones, stage_width, config.infinite)
    } else {
        create_default_transformation_set(&clones, stage_width, items_in_slide, config.infinite)
    };

    let limits = get_swipe_limits(
        &SwipeParams {
            items_count,
            items_offset,
            items_in_slide,
            shift,
            transformation_set: &layout.coords,
            stage_width,
            content_width: layout.content,
        },
        config,
    );

    let translate3d = get_translate3d_property(
        active_index,
        &TranslateParams {
            shift,
            transformation_set: &layout.coords,
            infinite: config.infinite,
        },
    );

    log::debug!(
        target: "understory_carousel",
        "layout: {items_count} items, {items_in_slide} per slide, {} slots, active {active_index}",
        layout.coords.len()
    );

    State {
        active_index,
        auto_width: config.auto_width,
        animation_duration: config.animation_duration,
        clones,
        infinite: config.infinite,
        items_count,
        items_in_slide,
        items_offset,
        translate3d,
        stage_width,
        stage_content_width: layout.content,
        initial_stage_height: 0.0,
        is_stage_content_partial: layout.partial,
        is_auto_playing: config.auto_play,
        is_auto_play_canceled_on_action: false,
        transformation_set: layout.coords,
        transition: Transition::immediate(&config.animation_easing),
        fadeout_animation: FadeoutAnimation::IDLE,
        swipe_limit_min: limits.min,
        swipe_limit_max: limits.max,
        swipe_allowed_position_max: limits.allowed_position_max,
        swipe_shift_value: limits.shift_value,
        can_use_dom: can_use_dom || can_use_environment(env),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{FadeoutAnimation, Transition, calculate_initial_state};
    use crate::config::CarouselConfig;
    use crate::environment::{FixedViewport, Headless};
    use crate::measure::StageMeasurement;

    #[test]
    fn first_pass_without_measurement_is_well_defined() {
        let state = calculate_initial_state(&CarouselConfig::new(4), None, &Headless, false);
        assert_eq!(state.stage_width, 0.0);
        assert_eq!(state.items_in_slide, 1);
        assert_eq!(state.transformation_set.len(), 4);
        assert_eq!(state.translate3d, 0.0);
        assert!(state.is_stage_content_partial);
        assert!(!state.can_use_dom);
    }

    #[test]
    fn pass_through_fields() {
        let config = CarouselConfig::new(3)
            .with_auto_play(true)
            .with_animation_duration(400.0);
        let stage = StageMeasurement::with_stage_width(300.0);
        let state = calculate_initial_state(&config, Some(&stage), &Headless, true);
        assert!(state.is_auto_playing);
        assert!(!state.is_auto_play_canceled_on_action);
        assert_eq!(state.animation_duration, 400.0);
        assert_eq!(state.initial_stage_height, 0.0);
        assert!(state.fadeout_animation.is_idle());
        assert!(state.can_use_dom);
        assert_eq!(state.transition.to_string(), "transform 0ms ease 0s");
    }

    #[test]
    fn dom_flag_comes_from_the_environment() {
        let env = FixedViewport(800.0);
        let state = calculate_initial_state(&CarouselConfig::new(1), None, &env, false);
        assert!(state.can_use_dom);
    }

    #[test]
    fn idle_fadeout_is_the_default() {
        assert_eq!(FadeoutAnimation::default(), FadeoutAnimation::IDLE);
        let running = FadeoutAnimation {
            index: Some(2),
            position: Some(-300.0),
            processing: true,
        };
        assert!(!running.is_idle());
    }

    #[test]
    fn transition_renders_css() {
        let transition = Transition {
            duration_ms: 250.0,
            easing: "linear".into(),
        };
        assert_eq!(transition.to_string(), "transform 250ms linear 0s");
    }

    #[test]
    fn snapshots_do_not_alias() {
        let config = CarouselConfig::new(5).with_infinite(true);
        let stage = StageMeasurement::with_stage_width(500.0);
        let first = calculate_initial_state(&config, Some(&stage), &Headless, false);
        let mut edited = first.clone();
        edited.clones.before.clear();
        let second = calculate_initial_state(&config, Some(&stage), &Headless, false);
        assert_eq!(first, second);
        assert_ne!(edited, second);
    }
}
