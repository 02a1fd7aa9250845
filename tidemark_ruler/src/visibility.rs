// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playhead visibility against the visible viewport span.

use core::ops::Range;

use crate::scale::RulerScale;

/// Returns `true` if `position` lies within the viewport span, inclusive at
/// both edges.
///
/// A position exactly on either edge pixel counts as visible; anything
/// beyond is hidden. There is no partial-visibility state.
#[must_use]
pub fn is_visible(position: f64, viewport: Range<f64>) -> bool {
    viewport.start <= position && position <= viewport.end
}

/// Where the playhead lands this cycle, and whether it can be seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayheadPlacement {
    /// View-space X position of the playhead.
    pub view_x: f64,
    /// Whether the position lies within the visible viewport span.
    pub visible: bool,
}

/// Maps a playhead time through `scale` and tests it against `viewport`.
#[must_use]
pub fn playhead_placement(time: f64, scale: RulerScale, viewport: Range<f64>) -> PlayheadPlacement {
    let view_x = scale.time_to_view_x(time);
    PlayheadPlacement {
        view_x,
        visible: is_visible(view_x, viewport),
    }
}
