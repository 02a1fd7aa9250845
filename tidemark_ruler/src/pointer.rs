// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-to-bar projection.
//!
//! Clicks and drags land anywhere in the page; what the mapping needs is a
//! position inside the ruler bar. Pointers beyond either edge of the bar are
//! clamped to the nearest edge rather than rejected, so dragging past the
//! end of the bar pins the playhead to the boundary instead of dropping
//! events.

use kurbo::{Point, Rect};

/// Clamps a bar-relative X position into `[0, bar_width]`.
#[must_use]
pub fn bar_relative_x(x: f64, bar_width: f64) -> f64 {
    x.clamp(0.0, bar_width)
}

/// Projects a pointer position onto the ruler bar, returning the clamped
/// bar-space X.
///
/// `bar` is the bar's bounding box in the same coordinate frame as
/// `pointer` (typically client coordinates from the host). The pointer's Y
/// coordinate is ignored; the bar is a 1D target.
#[must_use]
pub fn pointer_bar_position(pointer: Point, bar: Rect) -> f64 {
    bar_relative_x(pointer.x - bar.x0, bar.width())
}
