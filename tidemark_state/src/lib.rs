// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tidemark_state --heading-base-level=0

//! Tidemark State: the timeline time-state kernel.
//!
//! This crate owns the single source of truth for a timeline widget: the
//! playhead position, the total duration, the playhead bounds, and the scroll
//! offsets of the shared viewport. All mutation flows through one transition
//! function, [`TimelineState::apply`], which enforces the clamping and
//! rounding invariants on every step:
//!
//! - `min_time <= playhead_time <= min(max_time, duration_time)`
//! - `min_duration <= duration_time <= max_duration`
//!
//! The crate deliberately knows nothing about pixels, pointers, or rendering.
//! Hosts normalize raw input (typed values, arrow-key steps, ruler drags,
//! scroll events) into [`TimelineAction`] values, apply them, and read the
//! resulting snapshot back out. Coordinate mapping lives in `tidemark_ruler`;
//! edit buffers and drag tracking live in `tidemark_input`.
//!
//! ## Minimal example
//!
//! ```rust
//! use tidemark_state::{TimelineAction, TimelineConfig, TimelineState};
//!
//! let config = TimelineConfig::default();
//! let mut state = TimelineState::new().with_time_bounds(0.0, 6000.0);
//!
//! // Typed values round to the nearest multiple of the rounding factor.
//! state.apply(&config, TimelineAction::SetPlayheadTime(505.0));
//! assert_eq!(state.playhead_time(), 510.0);
//!
//! // Shrinking the duration pulls the playhead down in the same transition.
//! state.apply(&config, TimelineAction::SetDurationTime(500.0));
//! assert_eq!(state.duration_time(), 500.0);
//! assert_eq!(state.playhead_time(), 500.0);
//! ```
//!
//! ## Change detection
//!
//! [`TimelineState`] carries a monotonically increasing revision counter that
//! bumps exactly when a transition changes a field value. Dispatching an
//! action that resolves to the current state is a no-op: [`TimelineState::apply`]
//! returns `false` and the revision stays put. Consumers that need a cheap
//! "did anything change" signal compare revisions; consumers that need the
//! details compare snapshots, which are `Copy` and `PartialEq`.
//!
//! ## Failure semantics
//!
//! The action type is a closed enum, so there is no "unrecognized action"
//! error path to handle at runtime. Payloads are expected to be finite;
//! a non-finite payload indicates a bug in the caller and fails an assert
//! rather than being silently ignored. Out-of-range but finite payloads are
//! not errors: they are clamped.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod state;
mod time;

pub use config::TimelineConfig;
pub use state::{TimelineAction, TimelineState};
pub use time::{resolve_duration_time, resolve_playhead_time, round_time};
