// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurements supplied by the rendering layer.

use alloc::vec::Vec;

use kurbo::Size;

/// Geometry read back from the rendered stage.
///
/// The engine only ever asks for the stage size and, in auto-width mode, the
/// intrinsic width of each rendered track child.
pub trait Measure {
    /// Size of the stage element, or `None` before it has been laid out.
    fn stage_size(&self) -> Option<Size>;

    /// Intrinsic width of the track child at `index`, in visual order
    /// (clones included).
    fn item_width(&self, index: usize) -> Option<f64>;
}

/// Returns the measured stage width, or `0.0` when nothing is measured yet.
pub fn measured_stage_width(measure: Option<&dyn Measure>) -> f64 {
    let width = measure
        .and_then(|measure| measure.stage_size())
        .map_or(0.0, |size| size.width);
    if width.is_finite() { width.max(0.0) } else { 0.0 }
}

/// A plain record of stage and item measurements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StageMeasurement {
    /// Size of the stage, if measured.
    pub stage: Option<Size>,
    /// Intrinsic widths of the rendered track children.
    pub item_widths: Vec<f64>,
}

impl StageMeasurement {
    /// Creates a measurement with a stage of the given width and no items.
    #[must_use]
    pub fn with_stage_width(width: f64) -> Self {
        Self {
            stage: Some(Size::new(width, 0.0)),
            item_widths: Vec::new(),
        }
    }

    /// Sets the measured track child widths.
    #[must_use]
    pub fn with_item_widths(mut self, widths: impl IntoIterator<Item = f64>) -> Self {
        self.item_widths = widths.into_iter().collect();
        self
    }
}

impl Measure for StageMeasurement {
    fn stage_size(&self) -> Option<Size> {
        self.stage
    }

    fn item_width(&self, index: usize) -> Option<f64> {
        self.item_widths.get(index).copied()
    }
}
