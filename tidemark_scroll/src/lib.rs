// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tidemark_scroll --heading-base-level=0

//! Tidemark Scroll: bookkeeping for scroll-linked regions.
//!
//! A timeline widget has several independently scrollable regions that must
//! move together: the ruler and the keyframe list share horizontal scroll,
//! the keyframe list and the track list share vertical scroll. The pairings
//! are independent — a region may participate in the horizontal group, the
//! vertical group, or both — which [`SyncAxes`] expresses as flags.
//!
//! [`ScrollSync`] keeps the registry of regions and one shared offset per
//! axis. When the host observes a region scrolling, it reports the new
//! absolute offset; the returned [`ScrollUpdate`] says whether the shared
//! offset actually changed (which drives a reducer dispatch) and lists the
//! peer regions whose real scroll positions the host must write back.
//!
//! Offsets are adopted verbatim: the reporting viewport is trusted to have
//! clamped them to its own scroll extents already.
//!
//! ## Minimal example
//!
//! ```rust
//! use tidemark_scroll::{ScrollAxis, ScrollSync, SyncAxes};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
//! enum Region {
//!     Ruler,
//!     Keyframes,
//!     Tracks,
//! }
//!
//! let mut sync = ScrollSync::new();
//! sync.insert(Region::Ruler, SyncAxes::HORIZONTAL);
//! sync.insert(Region::Keyframes, SyncAxes::HORIZONTAL | SyncAxes::VERTICAL);
//! sync.insert(Region::Tracks, SyncAxes::VERTICAL);
//!
//! // The ruler scrolls to 600; the keyframe list must follow.
//! let update = sync.scrolled(Region::Ruler, ScrollAxis::Horizontal, 600.0);
//! assert!(update.changed);
//! assert_eq!(update.peers.as_slice(), &[Region::Keyframes]);
//!
//! // The keyframe list then scrolls back to 200; the ruler follows and the
//! // whole horizontal group nets out at 200.
//! let update = sync.scrolled(Region::Keyframes, ScrollAxis::Horizontal, 200.0);
//! assert_eq!(update.offset, 200.0);
//! assert_eq!(sync.offset(ScrollAxis::Horizontal), 200.0);
//! ```
//!
//! Write-backs echo: a peer whose scroll position the host just set will
//! report that same offset as its own scroll event. Reporting an unchanged
//! offset returns an empty update, so the echo terminates after one hop.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod sync;

pub use sync::{ScrollAxis, ScrollSync, ScrollUpdate, SyncAxes};
