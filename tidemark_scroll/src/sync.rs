// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::Hash;

use bitflags::bitflags;
use hashbrown::HashMap;
use smallvec::SmallVec;

bitflags! {
    /// Which sync groups a region participates in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SyncAxes: u8 {
        /// Member of the horizontal scroll group.
        const HORIZONTAL = 1 << 0;
        /// Member of the vertical scroll group.
        const VERTICAL = 1 << 1;
    }
}

/// One scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAxis {
    /// Left/right scrolling.
    Horizontal,
    /// Up/down scrolling.
    Vertical,
}

impl ScrollAxis {
    fn flag(self) -> SyncAxes {
        match self {
            Self::Horizontal => SyncAxes::HORIZONTAL,
            Self::Vertical => SyncAxes::VERTICAL,
        }
    }
}

/// Result of reporting a scroll event into the group.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollUpdate<K> {
    /// The shared offset for the axis after the report.
    pub offset: f64,
    /// Whether the shared offset changed. Drives the host's offset dispatch
    /// into the reducer; an unchanged report (including write-back echoes)
    /// needs none.
    pub changed: bool,
    /// Peer regions on the axis whose real scroll positions the host must
    /// now set to `offset`. Empty when nothing changed.
    pub peers: SmallVec<[K; 2]>,
}

/// Registry of scroll-linked regions with one shared offset per axis.
///
/// `K` identifies a region; any cheap `Copy + Eq + Hash` id works. The
/// registry is tiny in practice (three regions for the stock widget), but
/// nothing constrains its size.
#[derive(Clone, Debug, Default)]
pub struct ScrollSync<K> {
    regions: HashMap<K, SyncAxes>,
    horizontal: f64,
    vertical: f64,
}

impl<K: Copy + Eq + Hash> ScrollSync<K> {
    /// Creates an empty registry with both shared offsets at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regions: HashMap::new(),
            horizontal: 0.0,
            vertical: 0.0,
        }
    }

    /// Registers a region with the groups it participates in, replacing any
    /// previous membership.
    pub fn insert(&mut self, key: K, axes: SyncAxes) {
        self.regions.insert(key, axes);
    }

    /// Removes a region from all groups.
    pub fn remove(&mut self, key: &K) {
        self.regions.remove(key);
    }

    /// The groups `key` participates in, if registered.
    #[must_use]
    pub fn axes(&self, key: &K) -> Option<SyncAxes> {
        self.regions.get(key).copied()
    }

    /// The shared offset for an axis.
    #[must_use]
    pub fn offset(&self, axis: ScrollAxis) -> f64 {
        match axis {
            ScrollAxis::Horizontal => self.horizontal,
            ScrollAxis::Vertical => self.vertical,
        }
    }

    /// Reports that `key` scrolled to `offset` along `axis`.
    ///
    /// The offset is adopted verbatim as the axis's shared offset. Reports
    /// from regions that are not members of the axis group, and reports
    /// that match the current shared offset, produce an empty update.
    pub fn scrolled(&mut self, key: K, axis: ScrollAxis, offset: f64) -> ScrollUpdate<K> {
        let member = self
            .regions
            .get(&key)
            .is_some_and(|axes| axes.contains(axis.flag()));
        if !member {
            return ScrollUpdate {
                offset: self.offset(axis),
                changed: false,
                peers: SmallVec::new(),
            };
        }

        let shared = match axis {
            ScrollAxis::Horizontal => &mut self.horizontal,
            ScrollAxis::Vertical => &mut self.vertical,
        };
        if *shared == offset {
            return ScrollUpdate {
                offset,
                changed: false,
                peers: SmallVec::new(),
            };
        }
        *shared = offset;

        let peers = self
            .regions
            .iter()
            .filter(|(peer, axes)| **peer != key && axes.contains(axis.flag()))
            .map(|(peer, _)| *peer)
            .collect();
        ScrollUpdate {
            offset,
            changed: true,
            peers,
        }
    }
}
