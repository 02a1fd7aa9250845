// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tidemark_ruler --heading-base-level=0

//! Tidemark Ruler: headless geometry for a horizontal time ruler.
//!
//! This crate converts between time units and pixel positions inside a
//! scrollable ruler region. It owns no DOM, no widgets, and no state of its
//! own: a [`RulerScale`] is a small `Copy` value built each cycle from the
//! committed timeline state and configuration, and every query takes its
//! inputs explicitly.
//!
//! The forward mapping is the canonical one for the whole widget:
//!
//! ```text
//! view_x = time * pixels_per_unit + left_padding - scroll_offset
//! ```
//!
//! The same scale derives the width of time-proportional elements
//! ([`RulerScale::span_width`]), so a duration of N time units renders as
//! exactly N pixels of bar width at ratio 1, and the playhead mapped through
//! [`RulerScale::time_to_view_x`] lines up with it pixel for pixel.
//!
//! Pointer input goes the other way: a pointer position is clamped into the
//! ruler bar's bounding box ([`pointer_bar_position`]) and converted back to
//! a time value ([`RulerScale::bar_x_to_time`]). The result is a *raw* time;
//! hosts are expected to push it through `tidemark_state`'s playhead pipeline
//! before dispatching, so clamping and rounding stay in one place.
//!
//! ## Minimal example
//!
//! ```rust
//! use tidemark_ruler::{RulerScale, is_visible};
//!
//! // Ratio 1, left padding 316, not scrolled.
//! let scale = RulerScale::new(1.0, 316.0, 0.0);
//!
//! assert_eq!(scale.time_to_view_x(100.0), 416.0);
//! assert_eq!(scale.view_x_to_time(416.0), 100.0);
//! assert_eq!(scale.span_width(2000.0), 2000.0);
//!
//! // Scrolling shifts mapped positions the opposite way.
//! let scrolled = RulerScale::new(1.0, 316.0, 600.0);
//! assert_eq!(scrolled.time_to_view_x(100.0), -184.0);
//! assert!(!is_visible(scrolled.time_to_view_x(100.0), 0.0..1000.0));
//! ```
//!
//! Pixel math is pure floating point and is never rounded to integers;
//! rounding is a time-domain policy and lives in `tidemark_state`.
//!
//! This crate is `no_std`.

#![no_std]

mod pointer;
mod scale;
mod visibility;

pub use pointer::{bar_relative_x, pointer_bar_position};
pub use scale::RulerScale;
pub use visibility::{PlayheadPlacement, is_visible, playhead_placement};
