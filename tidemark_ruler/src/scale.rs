// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Time↔pixel mapping for one ruler cycle.
///
/// `RulerScale` is conventionally rebuilt from the committed timeline state
/// whenever a consumer re-reads geometry; it is cheap to construct and
/// carries no identity. Two view-side coordinate frames are supported:
///
/// - **View space**: relative to the visible viewport's left edge. The left
///   padding and the current scroll offset both participate, so positions in
///   this frame can be negative once the ruler scrolls.
/// - **Bar space**: relative to the ruler bar itself (time zero is bar x
///   zero). The bar's bounding box already moves with scroll, so only the
///   pixel ratio participates. Pointer input arrives in this frame after
///   [`crate::pointer_bar_position`] has clamped it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerScale {
    pixels_per_unit: f64,
    left_padding: f64,
    scroll_offset: f64,
}

impl RulerScale {
    /// Creates a scale from explicit mapping inputs.
    ///
    /// `pixels_per_unit` must be positive and finite.
    #[must_use]
    pub fn new(pixels_per_unit: f64, left_padding: f64, scroll_offset: f64) -> Self {
        debug_assert!(
            pixels_per_unit > 0.0 && pixels_per_unit.is_finite(),
            "pixels_per_unit must be positive and finite"
        );
        Self {
            pixels_per_unit,
            left_padding,
            scroll_offset,
        }
    }

    /// Pixels one time unit occupies.
    #[must_use]
    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    /// Fixed padding between the viewport's left edge and time zero.
    #[must_use]
    pub fn left_padding(&self) -> f64 {
        self.left_padding
    }

    /// Horizontal scroll offset the scale was built with.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Maps a time value to a view-space X position.
    ///
    /// This is the canonical forward mapping used for the playhead; it stays
    /// consistent with [`RulerScale::span_width`] by construction.
    #[must_use]
    pub fn time_to_view_x(&self, time: f64) -> f64 {
        time * self.pixels_per_unit + self.left_padding - self.scroll_offset
    }

    /// Maps a view-space X position back to a time value.
    ///
    /// Exact inverse of [`RulerScale::time_to_view_x`].
    #[must_use]
    pub fn view_x_to_time(&self, view_x: f64) -> f64 {
        (view_x - self.left_padding + self.scroll_offset) / self.pixels_per_unit
    }

    /// Maps a bar-space X position (pointer input) to a time value.
    #[must_use]
    pub fn bar_x_to_time(&self, bar_x: f64) -> f64 {
        bar_x / self.pixels_per_unit
    }

    /// Maps a time value to a bar-space X position.
    #[must_use]
    pub fn time_to_bar_x(&self, time: f64) -> f64 {
        time * self.pixels_per_unit
    }

    /// Width in pixels of an element spanning `duration` time units (the
    /// ruler bar, a keyframe segment).
    #[must_use]
    pub fn span_width(&self, duration: f64) -> f64 {
        duration * self.pixels_per_unit
    }
}
