// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tidemark_timeline --heading-base-level=0

//! Tidemark Timeline: the interaction controller for a timeline widget.
//!
//! The kernel crates are deliberately independent: `tidemark_state` owns the
//! committed time state, `tidemark_ruler` maps time to pixels,
//! `tidemark_input` tracks edit buffers and scrub gestures, and
//! `tidemark_scroll` keeps linked regions aligned. This crate wires them
//! into the control loop the widget actually runs:
//!
//! ```text
//! input event → action → reducer → new snapshot → geometry → consumers
//! ```
//!
//! [`TimelineController`] exposes one route per semantic input — field
//! drafts/commits/steps, ruler clicks and scrubs, scroll reports — and one
//! output, [`TimelineController::geometry`], which recomputes the pixel
//! geometry every consumer reads (playhead placement and visibility, ruler
//! bar width, keyframe segment width).
//!
//! The host remains responsible for everything visual: rendering, real DOM
//! event wiring, and writing returned scroll offsets back into its
//! scrollable elements. The controller never reads the DOM; bounding boxes
//! arrive via [`TimelineController::set_ruler_bar_bounds`] and
//! [`TimelineController::set_viewport_bounds`], and while either is missing
//! the routes that need it simply skip the cycle.
//!
//! ## Minimal example
//!
//! ```rust
//! use tidemark_state::TimelineConfig;
//! use tidemark_timeline::TimelineController;
//!
//! let mut timeline = TimelineController::new(TimelineConfig::default());
//!
//! // Type into the duration field and confirm.
//! timeline.duration_draft("600");
//! timeline.duration_commit();
//! assert_eq!(timeline.state().duration_time(), 600.0);
//!
//! // A playhead commit past the duration clamps, and the field display
//! // follows the committed state rather than the typed text.
//! timeline.playhead_draft("700");
//! timeline.playhead_commit();
//! assert_eq!(timeline.state().playhead_time(), 600.0);
//! assert_eq!(timeline.playhead_display(), "600");
//! ```
//!
//! All routes run synchronously on the calling thread; the controller holds
//! the only mutable state and every mutation is serialized through it.
//! Hosts that want to coalesce bursty input defer whole route calls with
//! `tidemark_frame` — the controller itself never defers.

#![no_std]

extern crate alloc;

mod controller;
mod region;

pub use controller::{TimelineController, TimelineGeometry};
pub use region::TimelineRegion;
