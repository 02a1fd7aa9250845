// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrub state: 1D drag tracking along the ruler axis.
//!
//! A scrub starts on pointer-down over the ruler bar, dispatches a playhead
//! update for every move, and ends on pointer-up. A plain click is the
//! degenerate case: begin and end around a single position. All positions
//! are bar-relative X values; the host projects raw pointer events through
//! `tidemark_ruler` before feeding them in.

/// Tracks one scrub gesture across move events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrubState {
    anchor_x: Option<f64>,
    last_x: Option<f64>,
}

impl ScrubState {
    /// Starts a scrub at the given bar-relative X.
    pub fn begin(&mut self, x: f64) {
        self.anchor_x = Some(x);
        self.last_x = Some(x);
    }

    /// Records a move, returning the delta since the previous position.
    ///
    /// Returns `None` when no scrub is active, so stray move events between
    /// gestures are ignored for free.
    pub fn update(&mut self, x: f64) -> Option<f64> {
        self.anchor_x?;
        let delta = self.last_x.map(|last| x - last);
        self.last_x = Some(x);
        delta
    }

    /// Total offset from the scrub's starting position, if one is active.
    #[must_use]
    pub fn travel(&self, x: f64) -> Option<f64> {
        self.anchor_x.map(|anchor| x - anchor)
    }

    /// Ends the gesture and resets the tracker.
    pub fn end(&mut self) {
        self.anchor_x = None;
        self.last_x = None;
    }

    /// Returns `true` while a scrub is in progress.
    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.anchor_x.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::ScrubState;

    #[test]
    fn fresh_state_is_idle() {
        let scrub = ScrubState::default();
        assert!(!scrub.is_scrubbing());
        assert_eq!(scrub.travel(50.0), None);
    }

    #[test]
    fn begin_anchors_the_gesture() {
        let mut scrub = ScrubState::default();
        scrub.begin(100.0);
        assert!(scrub.is_scrubbing());
        assert_eq!(scrub.travel(100.0), Some(0.0));
    }

    #[test]
    fn updates_report_incremental_deltas() {
        let mut scrub = ScrubState::default();
        scrub.begin(0.0);
        assert_eq!(scrub.update(5.0), Some(5.0));
        assert_eq!(scrub.update(8.0), Some(3.0));
        assert_eq!(scrub.update(2.0), Some(-6.0));
        assert_eq!(scrub.travel(2.0), Some(2.0));
    }

    #[test]
    fn updates_without_a_gesture_are_ignored() {
        let mut scrub = ScrubState::default();
        assert_eq!(scrub.update(25.0), None);
        assert!(!scrub.is_scrubbing());
    }

    #[test]
    fn end_resets_everything() {
        let mut scrub = ScrubState::default();
        scrub.begin(10.0);
        scrub.update(20.0);
        scrub.end();
        assert!(!scrub.is_scrubbing());
        assert_eq!(scrub.update(30.0), None);
    }

    #[test]
    fn begin_overwrites_a_previous_gesture() {
        let mut scrub = ScrubState::default();
        scrub.begin(0.0);
        scrub.update(40.0);
        scrub.begin(100.0);
        assert_eq!(scrub.travel(105.0), Some(5.0));
        assert_eq!(scrub.update(105.0), Some(5.0));
    }
}
