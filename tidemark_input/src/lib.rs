// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tidemark_input --heading-base-level=0

//! Tidemark Input: small state machines for timeline interactions.
//!
//! This crate provides focused state managers for the two stateful input
//! patterns a timeline widget needs:
//!
//! - [`field`]: a number field's committed-value/edit-buffer split, with
//!   explicit commit, revert, and step operations
//! - [`scrub`]: 1D drag tracking for scrubbing the playhead along a ruler
//!
//! Neither module assumes a UI framework or an event system. Hosts feed in
//! pre-digested input (draft text, bar-relative pointer positions) and
//! interpret the returned transitions; the committed timeline state itself
//! lives in `tidemark_state` and is only ever updated by dispatching the
//! values these managers hand back.
//!
//! ## Edit buffer
//!
//! Typing into a field must not touch shared state: the draft is
//! display-only until a confirming event, Escape discards it, and
//! arrow-key/spin-button steps commit immediately. [`field::NumberField`]
//! models exactly that split:
//!
//! ```rust
//! use tidemark_input::field::{FieldCommit, NumberField};
//!
//! let mut field = NumberField::new(0.0, 10.0);
//!
//! // Typing updates the display only.
//! field.set_draft("100");
//! assert_eq!(field.display(), "100");
//! assert_eq!(field.committed(), 0.0);
//!
//! // Confirmation hands the parsed value to the host for dispatch.
//! assert_eq!(field.commit(), FieldCommit::Value(100.0));
//!
//! // The host dispatches, then mirrors the committed state back.
//! field.sync(100.0);
//! assert_eq!(field.display(), "100");
//!
//! // Non-numeric text reverts on confirmation instead of dispatching.
//! field.set_draft("abc");
//! assert_eq!(field.commit(), FieldCommit::Reverted);
//! assert_eq!(field.display(), "100");
//! ```
//!
//! ## Scrubbing
//!
//! ```rust
//! use tidemark_input::scrub::ScrubState;
//!
//! let mut scrub = ScrubState::default();
//! scrub.begin(100.0);
//! assert!(scrub.is_scrubbing());
//!
//! // Each move reports the delta since the last position.
//! assert_eq!(scrub.update(125.0), Some(25.0));
//! assert_eq!(scrub.travel(125.0), Some(25.0));
//! scrub.end();
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod field;
pub mod scrub;
