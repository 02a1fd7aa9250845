// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tidemark_frame --heading-base-level=0

//! Tidemark Frame: coalesce rapid-fire updates to one per refresh.
//!
//! Bursty input (a flood of scroll events, a fast drag) can produce far more
//! updates than a display can show. Hosts that want to coalesce them defer
//! recomputation to their frame-aligned callback and keep only the most
//! recent pending update per logical source — **last-value-wins**, never a
//! queue. This crate provides that bookkeeping without knowing anything
//! about the host's frame callback API:
//!
//! - [`FrameSlot`]: a single pending update. Scheduling replaces any value
//!   already pending (cancel-and-replace), so at most one is ever waiting.
//! - [`FrameQueue`]: one slot per logical source, for hosts that coalesce
//!   several independent update streams against the same frame callback.
//!
//! Deferral is purely a throughput optimization. Taking every scheduled
//! value immediately must produce the same final state as coalescing; these
//! types only guarantee that skipped intermediates are dropped, not queued.
//!
//! ## Minimal example
//!
//! ```rust
//! use tidemark_frame::FrameSlot;
//!
//! let mut slot = FrameSlot::new();
//!
//! // Three scroll events land before the next frame...
//! slot.schedule(100.0);
//! slot.schedule(250.0);
//! slot.schedule(400.0);
//!
//! // ...and the frame callback sees only the last one.
//! assert_eq!(slot.take(), Some(400.0));
//! assert_eq!(slot.take(), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;
mod slot;

pub use queue::FrameQueue;
pub use slot::FrameSlot;
