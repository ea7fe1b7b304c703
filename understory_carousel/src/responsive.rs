// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolves how many items make up one slide.

use crate::config::{CarouselConfig, ItemsFit};
use crate::environment::{Environment, can_use_environment};

/// Returns the number of items visible in one slide.
///
/// - In auto-width mode this is `items_count` for a looping carousel (the
///   whole set is cloned) and `1` otherwise; no breakpoint is consulted.
/// - Otherwise the breakpoint table is walked in declaration order and every
///   entry whose key is `<=` the viewport width is applied; the last one wins.
///   The viewport width is [`CarouselConfig::viewport_width`] when set, else
///   the environment's live width. An override of `0.0` is a real width, so
///   it still selects a `"0"` breakpoint without a DOM. Without either
///   width, the table is ignored.
/// - The result is never below `1`.
pub fn resolve_items_per_slide(
    items_count: usize,
    config: &CarouselConfig,
    env: &dyn Environment,
) -> usize {
    if config.auto_width {
        return if config.infinite { items_count } else { 1 };
    }

    let mut items_in_slide = 1;
    if let Some(table) = config.responsive.as_ref().filter(|t| !t.is_empty()) {
        match effective_viewport_width(config, env) {
            Some(viewport) => {
                for breakpoint in table.entries() {
                    let Some(min_width) = breakpoint.min_width() else {
                        log::warn!(
                            target: "understory_carousel",
                            "skipping non-numeric breakpoint key {:?}",
                            breakpoint.key
                        );
                        continue;
                    };
                    if min_width <= viewport {
                        let rule = breakpoint.rule;
                        items_in_slide = match rule.items_fit {
                            ItemsFit::Contain => rule.items,
                            ItemsFit::Fill => rule.items.min(items_count),
                        };
                    }
                }
            }
            None => {
                log::debug!(
                    target: "understory_carousel",
                    "viewport width unavailable; breakpoints ignored"
                );
            }
        }
    }

    items_in_slide.max(1)
}

fn effective_viewport_width(config: &CarouselConfig, env: &dyn Environment) -> Option<f64> {
    if let Some(width) = config.viewport_width {
        return Some(width);
    }
    if can_use_environment(env) {
        env.viewport_width()
    } else {
        None
    }
}
