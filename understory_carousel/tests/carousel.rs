// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_carousel` crate.
//!
//! These exercise `calculate_initial_state` end to end: how breakpoints,
//! loop clones, measurements, and the requested index combine into one
//! layout snapshot.

use understory_carousel::{
    CarouselConfig, Clones, FixedViewport, Headless, ResponsiveRule, ResponsiveTable,
    StageMeasurement, State, TrackSlot, calculate_initial_state, create_clones,
    create_default_transformation_set, get_active_index, get_shift_index, get_start_index,
    resolve_items_per_slide,
};

fn breakpoints() -> ResponsiveTable {
    ResponsiveTable::new()
        .with(0, ResponsiveRule::new(1))
        .with(768, ResponsiveRule::new(3))
        .with(1200, ResponsiveRule::new(5))
}

fn layout(config: &CarouselConfig, stage_width: f64) -> State {
    let stage = StageMeasurement::with_stage_width(stage_width);
    calculate_initial_state(config, Some(&stage), &Headless, false)
}

#[test]
fn breakpoint_table_examples() {
    let config = CarouselConfig::new(10).with_responsive(breakpoints());
    for (viewport, expected) in [(500.0, 1), (1000.0, 3), (1400.0, 5)] {
        assert_eq!(
            resolve_items_per_slide(10, &config, &FixedViewport(viewport)),
            expected,
            "viewport {viewport}"
        );
    }
}

#[test]
fn items_in_slide_is_one_without_breakpoints() {
    for count in [0, 1, 2, 50] {
        let state = layout(&CarouselConfig::new(count), 800.0);
        assert_eq!(state.items_in_slide, 1);

        let looping = CarouselConfig::new(count).with_infinite(true);
        assert_eq!(layout(&looping, 800.0).items_in_slide, 1);
    }
}

#[test]
fn looping_track_has_one_slide_of_clones_per_side() {
    let config = CarouselConfig::new(10)
        .with_infinite(true)
        .with_responsive(breakpoints())
        .with_viewport_width(1000.0);
    let state = layout(&config, 900.0);

    assert_eq!(state.items_in_slide, 3);
    assert_eq!(state.clones.before.len(), 3);
    assert_eq!(state.clones.after.len(), 3);
    assert_eq!(state.transformation_set.len(), 16);
    assert!(!state.is_stage_content_partial);

    let track = state.clones.track();
    assert_eq!(track.first(), Some(&TrackSlot::LeadingClone(7)));
    assert_eq!(track.last(), Some(&TrackSlot::TrailingClone(2)));
}

#[test]
fn finite_tracks_never_clone() {
    let config = CarouselConfig::new(10)
        .with_responsive(breakpoints())
        .with_viewport_width(1400.0);
    let state = layout(&config, 1000.0);
    assert!(state.clones.is_empty());
    assert_eq!(state.transformation_set.len(), 10);
}

#[test]
fn default_layout_has_no_gaps() {
    let config = CarouselConfig::new(10)
        .with_infinite(true)
        .with_responsive(breakpoints())
        .with_viewport_width(1000.0);
    let state = layout(&config, 1000.0);
    let coords = state.transformation_set.as_slice();
    assert!(!coords.is_empty());
    for pair in coords.windows(2) {
        assert_eq!(pair[1].position, pair[0].position + pair[0].width);
    }
}

#[test]
fn partial_content_only_for_finite_tracks() {
    let short = CarouselConfig::new(2)
        .with_responsive(ResponsiveTable::new().with(0, ResponsiveRule::contain(4)))
        .with_viewport_width(1000.0);
    let state = layout(&short, 800.0);
    assert_eq!(state.stage_content_width, 400.0);
    assert!(state.is_stage_content_partial);
    assert_eq!(state.swipe_limit_max, 0.0);

    let looping = short.clone().with_infinite(true);
    assert!(!layout(&looping, 800.0).is_stage_content_partial);

    let long = CarouselConfig::new(5);
    assert!(!layout(&long, 800.0).is_stage_content_partial);
}

#[test]
fn active_index_zero_shows_the_first_real_item() {
    for infinite in [false, true] {
        let config = CarouselConfig::new(8)
            .with_infinite(infinite)
            .with_responsive(breakpoints())
            .with_viewport_width(800.0);
        let state = layout(&config, 600.0);

        let first_real = state
            .clones
            .track()
            .iter()
            .position(|slot| !slot.is_clone())
            .expect("track has real items");
        assert_eq!(first_real, get_shift_index(&state.clones));
        assert_eq!(
            state.translate3d,
            -state.transformation_set.position(first_real),
            "infinite = {infinite}"
        );
    }
}

#[test]
fn requested_index_is_normalized() {
    let state = layout(&CarouselConfig::new(4).with_active_index(-2), 400.0);
    assert_eq!(state.active_index, 0);

    let state = layout(&CarouselConfig::new(4).with_active_index(17), 400.0);
    assert_eq!(state.active_index, 3);
    assert_eq!(state.translate3d, -1200.0);

    let start = get_start_index(Some(2), 4);
    assert_eq!(get_active_index(start, 4, true), 2);
}

#[test]
fn end_to_end_six_items_two_per_slide() {
    let config = CarouselConfig::new(6)
        .with_responsive(ResponsiveTable::new().with(0, ResponsiveRule::new(2)))
        .with_viewport_width(1024.0);
    let state = layout(&config, 600.0);

    assert_eq!(state.items_in_slide, 2);
    assert!(state.transformation_set.iter().all(|c| c.width == 300.0));
    assert_eq!(state.stage_content_width, 1800.0);

    let last_slide = state.transformation_set.position(6 - 2);
    assert_eq!(state.swipe_limit_max, -last_slide);
    assert_eq!(state.swipe_limit_max, -1200.0);
    assert_eq!(state.swipe_allowed_position_max, 1200.0);
    assert_eq!(state.swipe_limit_min, 0.0);
}

#[test]
fn translate_is_the_active_slot_position() {
    let config = CarouselConfig::new(6)
        .with_responsive(ResponsiveTable::new().with(0, ResponsiveRule::new(2)))
        .with_viewport_width(1024.0)
        .with_active_index(5);
    let state = layout(&config, 600.0);

    assert_eq!(state.active_index, 5);
    assert_eq!(state.transformation_set.position(5), 1500.0);
    assert_eq!(state.translate3d, -1500.0);
    // The swipe bound still stops at the last full slide.
    assert_eq!(state.swipe_limit_max, -1200.0);
}

#[test]
fn looping_swipe_bounds_span_one_cycle() {
    let config = CarouselConfig::new(4).with_infinite(true);
    let state = layout(&config, 250.0);

    // Track: [3] 0 1 2 3 [0], 250px per slot.
    assert_eq!(state.transformation_set.len(), 6);
    assert_eq!(state.translate3d, -250.0);
    assert_eq!(state.swipe_limit_min, 0.0);
    assert_eq!(state.swipe_limit_max, -1250.0);
    assert_eq!(state.swipe_shift_value, 1000.0);
}

#[test]
fn padded_loop_adds_an_offset_clone() {
    let config = CarouselConfig::new(6)
        .with_infinite(true)
        .with_padding(40.0, 40.0);
    let state = layout(&config, 300.0);
    assert_eq!(state.items_offset, 1);
    assert_eq!(state.clones.before.as_slice(), &[4, 5]);
    assert_eq!(state.track_index(0), 2);
    assert_eq!(state.translate3d, -600.0);
    assert_eq!(state.swipe_limit_min, -300.0);
}

#[test]
fn autowidth_uses_measured_children() {
    let config = CarouselConfig::new(3).with_auto_width(true).with_active_index(2);
    let stage = StageMeasurement::with_stage_width(200.0).with_item_widths([120.0, 80.0, 150.0]);
    let state = calculate_initial_state(&config, Some(&stage), &Headless, false);

    assert_eq!(state.items_in_slide, 1);
    assert_eq!(state.stage_content_width, 350.0);
    let positions: Vec<f64> = state.transformation_set.iter().map(|c| c.position).collect();
    assert_eq!(positions, [0.0, 120.0, 200.0]);
    assert_eq!(state.translate3d, -200.0);
    // Dragging stops once the track end is flush with the stage.
    assert_eq!(state.swipe_limit_max, -150.0);
}

#[test]
fn autowidth_loop_clones_the_whole_set() {
    let config = CarouselConfig::new(3).with_auto_width(true).with_infinite(true);
    let widths = [50.0, 60.0, 70.0].repeat(3);
    let stage = StageMeasurement::with_stage_width(100.0).with_item_widths(widths);
    let state = calculate_initial_state(&config, Some(&stage), &Headless, false);

    assert_eq!(state.items_in_slide, 3);
    assert_eq!(state.clones.len(), 6);
    assert_eq!(state.transformation_set.len(), 9);
    assert_eq!(state.translate3d, -180.0);
}

#[test]
fn zero_items_and_zero_stage_are_well_defined() {
    let state = layout(&CarouselConfig::new(0), 0.0);
    assert!(state.transformation_set.is_empty());
    assert_eq!(state.stage_content_width, 0.0);
    assert!(state.is_stage_content_partial);
    assert_eq!(state.translate3d, 0.0);
    assert_eq!(state.active_index, 0);

    let state = layout(&CarouselConfig::new(3).with_infinite(true), 0.0);
    assert_eq!(state.transformation_set.len(), 5);
    assert!(state.transformation_set.iter().all(|c| c.position == 0.0));
}

#[test]
fn transformation_set_matches_clone_track() {
    let config = CarouselConfig::new(10).with_infinite(true);
    let clones = create_clones(&config, 3);
    let result = create_default_transformation_set(&clones, 900.0, 3, true);
    assert_eq!(result.coords.len(), 10 + 6);

    let none = create_default_transformation_set(&Clones::none(10), 900.0, 3, false);
    assert_eq!(none.coords.len(), 10);
}

#[test]
fn autowidth_tolerates_non_finite_measurements() {
    let config = CarouselConfig::new(2).with_auto_width(true);
    let stage = StageMeasurement::with_stage_width(300.0).with_item_widths([100.0, f64::NAN]);
    let state = calculate_initial_state(&config, Some(&stage), &Headless, false);

    assert_eq!(state.transformation_set.len(), 2);
    assert_eq!(state.transformation_set.coord(1).width, 0.0);
    assert_eq!(state.transformation_set.position(1), 100.0);
    assert_eq!(state.stage_content_width, 100.0);
}
