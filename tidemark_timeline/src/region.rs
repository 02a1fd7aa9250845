// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tidemark_scroll::SyncAxes;

/// The widget's scrollable regions.
///
/// The ruler and the keyframe list share horizontal scroll; the keyframe
/// list and the track list share vertical scroll. The keyframe list sits in
/// both groups, which is what keeps all three regions consistent when any
/// one of them moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimelineRegion {
    /// The time ruler across the top.
    Ruler,
    /// The keyframe list: horizontally and vertically scrollable.
    KeyframeList,
    /// The track list along the left.
    TrackList,
}

impl TimelineRegion {
    /// The sync groups this region participates in.
    #[must_use]
    pub fn sync_axes(self) -> SyncAxes {
        match self {
            Self::Ruler => SyncAxes::HORIZONTAL,
            Self::KeyframeList => SyncAxes::HORIZONTAL | SyncAxes::VERTICAL,
            Self::TrackList => SyncAxes::VERTICAL,
        }
    }

    /// All regions, in layout order.
    pub const ALL: [Self; 3] = [Self::Ruler, Self::KeyframeList, Self::TrackList];
}
