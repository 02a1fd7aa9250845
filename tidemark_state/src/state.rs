// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::config::TimelineConfig;
use crate::time::{resolve_duration_time, resolve_playhead_time};

/// A state transition request.
///
/// Hosts normalize raw input events (typed values, arrow-key steps, ruler
/// clicks and drags, scroll events) into these four kinds. The enum is
/// closed: there is no unrecognized-action case for the reducer to reject at
/// runtime, and adding a kind is an API change.
///
/// All payloads are in time units except the offset payloads, which carry
/// the raw scroll position in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimelineAction {
    /// Move the playhead. The payload passes through the truncate → clamp →
    /// round pipeline before landing in the state.
    SetPlayheadTime(f64),
    /// Resize the timeline. The payload is resolved against the duration
    /// band, then the playhead is re-resolved against the new duration in
    /// the same transition.
    SetDurationTime(f64),
    /// Adopt a new horizontal scroll offset, unclamped.
    SetHorizontalOffset(f64),
    /// Adopt a new vertical scroll offset, unclamped.
    SetVerticalOffset(f64),
}

/// The timeline's single source of truth.
///
/// Fields are private and mutated only through [`TimelineState::apply`] (or
/// the `with_*` constructors, which run the same normalization). Snapshots
/// are `Copy` and `PartialEq`; the embedded revision counter bumps exactly
/// when a transition changes a field value, so two snapshots compare equal
/// iff nothing observable happened between them.
///
/// Invariants, maintained by every transition:
///
/// - `min_time <= playhead_time <= min(max_time, duration_time)`
/// - offsets are adopted verbatim from the host viewport, which is trusted
///   to report valid extents.
///
/// The duration band lives in [`TimelineConfig`] and is enforced at each
/// duration transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineState {
    playhead_time: f64,
    duration_time: f64,
    min_time: f64,
    max_time: f64,
    horizontal_offset: f64,
    vertical_offset: f64,
    revision: u64,
}

impl TimelineState {
    /// Creates the default state: playhead at `0`, duration `2000`, playhead
    /// bounds `0..=0`, offsets `0`.
    ///
    /// The default `max_time` of zero pins the playhead until the host
    /// widens the band with [`TimelineState::with_time_bounds`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            playhead_time: 0.0,
            duration_time: 2000.0,
            min_time: 0.0,
            max_time: 0.0,
            horizontal_offset: 0.0,
            vertical_offset: 0.0,
            revision: 0,
        }
    }

    /// Sets the playhead bounds, clamping the current playhead into the new
    /// band.
    #[must_use]
    pub fn with_time_bounds(mut self, min_time: f64, max_time: f64) -> Self {
        self.min_time = min_time;
        self.max_time = max_time;
        self.playhead_time = self
            .playhead_time
            .clamp(min_time, max_time.min(self.duration_time));
        self
    }

    /// Sets the initial duration through the same pipeline as a live
    /// [`TimelineAction::SetDurationTime`] transition.
    #[must_use]
    pub fn with_duration_time(mut self, config: &TimelineConfig, duration: f64) -> Self {
        self.duration_time = resolve_duration_time(
            duration,
            config.min_duration,
            config.max_duration,
            config.rounding_factor,
        );
        self.playhead_time = resolve_playhead_time(
            self.playhead_time,
            self.min_time,
            self.max_time,
            self.duration_time,
            config.rounding_factor,
        );
        self
    }

    /// Sets the initial playhead through the same pipeline as a live
    /// [`TimelineAction::SetPlayheadTime`] transition.
    #[must_use]
    pub fn with_playhead_time(mut self, config: &TimelineConfig, playhead: f64) -> Self {
        self.playhead_time = resolve_playhead_time(
            playhead,
            self.min_time,
            self.max_time,
            self.duration_time,
            config.rounding_factor,
        );
        self
    }

    /// Current playhead position in time units.
    #[must_use]
    pub fn playhead_time(&self) -> f64 {
        self.playhead_time
    }

    /// Current total duration in time units.
    #[must_use]
    pub fn duration_time(&self) -> f64 {
        self.duration_time
    }

    /// Lower playhead bound.
    #[must_use]
    pub fn min_time(&self) -> f64 {
        self.min_time
    }

    /// Upper playhead bound (before intersecting with the duration).
    #[must_use]
    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    /// Horizontal scroll offset of the shared viewport, in pixels.
    #[must_use]
    pub fn horizontal_offset(&self) -> f64 {
        self.horizontal_offset
    }

    /// Vertical scroll offset of the shared viewport, in pixels.
    #[must_use]
    pub fn vertical_offset(&self) -> f64 {
        self.vertical_offset
    }

    /// Monotonic change counter; bumps exactly when a transition changes a
    /// field value.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies an action, returning `true` if any field changed.
    ///
    /// Actions that resolve to the current values are no-ops: the state is
    /// untouched, the revision stays put, and `false` comes back. Payloads
    /// must be finite; a non-finite payload is a caller bug and panics.
    pub fn apply(&mut self, config: &TimelineConfig, action: TimelineAction) -> bool {
        match action {
            TimelineAction::SetPlayheadTime(payload) => {
                assert!(payload.is_finite(), "playhead payload must be finite");
                let playhead = resolve_playhead_time(
                    payload,
                    self.min_time,
                    self.max_time,
                    self.duration_time,
                    config.rounding_factor,
                );
                self.update_times(playhead, self.duration_time)
            }
            TimelineAction::SetDurationTime(payload) => {
                assert!(payload.is_finite(), "duration payload must be finite");
                let duration = resolve_duration_time(
                    payload,
                    config.min_duration,
                    config.max_duration,
                    config.rounding_factor,
                );
                // Re-resolve the playhead against the new duration so that a
                // shrinking timeline pulls it down atomically.
                let playhead = resolve_playhead_time(
                    self.playhead_time,
                    self.min_time,
                    self.max_time,
                    duration,
                    config.rounding_factor,
                );
                self.update_times(playhead, duration)
            }
            TimelineAction::SetHorizontalOffset(offset) => {
                assert!(offset.is_finite(), "horizontal offset must be finite");
                if self.horizontal_offset == offset {
                    return false;
                }
                self.horizontal_offset = offset;
                self.bump();
                true
            }
            TimelineAction::SetVerticalOffset(offset) => {
                assert!(offset.is_finite(), "vertical offset must be finite");
                if self.vertical_offset == offset {
                    return false;
                }
                self.vertical_offset = offset;
                self.bump();
                true
            }
        }
    }

    fn update_times(&mut self, playhead: f64, duration: f64) -> bool {
        if self.playhead_time == playhead && self.duration_time == duration {
            return false;
        }
        self.playhead_time = playhead;
        self.duration_time = duration;
        self.bump();
        true
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

impl Default for TimelineState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{TimelineAction, TimelineConfig, TimelineState};

    fn timeline() -> (TimelineConfig, TimelineState) {
        let config = TimelineConfig::default();
        (config, TimelineState::new().with_time_bounds(0.0, 6000.0))
    }

    #[test]
    fn defaults_match_mount_state() {
        let state = TimelineState::new();
        assert_eq!(state.playhead_time(), 0.0);
        assert_eq!(state.duration_time(), 2000.0);
        assert_eq!(state.horizontal_offset(), 0.0);
        assert_eq!(state.vertical_offset(), 0.0);
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn playhead_rounds_to_factor() {
        let (config, mut state) = timeline();
        assert!(state.apply(&config, TimelineAction::SetPlayheadTime(505.0)));
        assert_eq!(state.playhead_time(), 510.0);
        assert!(state.apply(&config, TimelineAction::SetPlayheadTime(501.0)));
        assert_eq!(state.playhead_time(), 500.0);
    }

    #[test]
    fn playhead_clamps_to_duration() {
        let (config, mut state) = timeline();
        state.apply(&config, TimelineAction::SetDurationTime(600.0));
        state.apply(&config, TimelineAction::SetPlayheadTime(700.0));
        assert_eq!(state.playhead_time(), 600.0);
    }

    #[test]
    fn playhead_clamps_to_min() {
        let (config, mut state) = timeline();
        state.apply(&config, TimelineAction::SetPlayheadTime(-50.0));
        assert_eq!(state.playhead_time(), 0.0);
    }

    #[test]
    fn off_grid_boundary_is_not_rounded() {
        let config = TimelineConfig::default();
        let mut state = TimelineState::new().with_time_bounds(5.0, 6000.0);
        state.apply(&config, TimelineAction::SetPlayheadTime(2.0));
        assert_eq!(state.playhead_time(), 5.0);
    }

    #[test]
    fn shrinking_duration_pulls_playhead_down() {
        let (config, mut state) = timeline();
        state.apply(&config, TimelineAction::SetDurationTime(600.0));
        state.apply(&config, TimelineAction::SetPlayheadTime(600.0));
        let before = state.revision();

        assert!(state.apply(&config, TimelineAction::SetDurationTime(500.0)));
        assert_eq!(state.duration_time(), 500.0);
        assert_eq!(state.playhead_time(), 500.0);
        // Both fields moved in one transition.
        assert_eq!(state.revision(), before + 1);
    }

    #[test]
    fn duration_clamps_to_band() {
        let (config, mut state) = timeline();
        state.apply(&config, TimelineAction::SetDurationTime(10.0));
        assert_eq!(state.duration_time(), 100.0);
        state.apply(&config, TimelineAction::SetDurationTime(10_000.0));
        assert_eq!(state.duration_time(), 6000.0);
    }

    #[test]
    fn repeated_dispatch_is_a_no_op() {
        let (config, mut state) = timeline();
        assert!(state.apply(&config, TimelineAction::SetPlayheadTime(300.0)));
        let snapshot = state;

        assert!(!state.apply(&config, TimelineAction::SetPlayheadTime(300.0)));
        assert_eq!(state, snapshot);
        assert_eq!(state.revision(), snapshot.revision());
    }

    #[test]
    fn clamped_dispatch_onto_current_value_is_a_no_op() {
        let (config, mut state) = timeline();
        state.apply(&config, TimelineAction::SetDurationTime(600.0));
        state.apply(&config, TimelineAction::SetPlayheadTime(600.0));
        // 700 clamps to 600, which is where the playhead already is.
        assert!(!state.apply(&config, TimelineAction::SetPlayheadTime(700.0)));
        assert_eq!(state.playhead_time(), 600.0);
    }

    #[test]
    fn offsets_are_adopted_verbatim() {
        let (config, mut state) = timeline();
        assert!(state.apply(&config, TimelineAction::SetHorizontalOffset(600.0)));
        assert!(state.apply(&config, TimelineAction::SetHorizontalOffset(200.0)));
        assert_eq!(state.horizontal_offset(), 200.0);

        assert!(state.apply(&config, TimelineAction::SetVerticalOffset(30.0)));
        assert_eq!(state.vertical_offset(), 30.0);

        assert!(!state.apply(&config, TimelineAction::SetVerticalOffset(30.0)));
    }

    #[test]
    fn fractional_payloads_truncate_before_rounding() {
        let (config, mut state) = timeline();
        state.apply(&config, TimelineAction::SetPlayheadTime(504.5));
        assert_eq!(state.playhead_time(), 500.0);
        state.apply(&config, TimelineAction::SetPlayheadTime(505.9));
        assert_eq!(state.playhead_time(), 510.0);
    }

    #[test]
    fn invariants_hold_across_transition_sequences() {
        let (config, mut state) = timeline();
        let actions = [
            TimelineAction::SetPlayheadTime(5999.0),
            TimelineAction::SetDurationTime(150.0),
            TimelineAction::SetPlayheadTime(0.4),
            TimelineAction::SetDurationTime(99_999.0),
            TimelineAction::SetPlayheadTime(-3.0),
            TimelineAction::SetDurationTime(0.0),
        ];
        for action in actions {
            state.apply(&config, action);
            let upper = state.max_time().min(state.duration_time());
            assert!(
                state.playhead_time() >= state.min_time() && state.playhead_time() <= upper,
                "playhead out of band after {action:?}"
            );
            assert!(
                state.duration_time() >= config.min_duration
                    && state.duration_time() <= config.max_duration,
                "duration out of band after {action:?}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "playhead payload must be finite")]
    fn non_finite_payload_panics() {
        let (config, mut state) = timeline();
        state.apply(&config, TimelineAction::SetPlayheadTime(f64::NAN));
    }

    #[test]
    fn builder_overrides_normalize() {
        let config = TimelineConfig::default();
        let state = TimelineState::new()
            .with_time_bounds(0.0, 6000.0)
            .with_duration_time(&config, 10.0)
            .with_playhead_time(&config, 505.0);
        assert_eq!(state.duration_time(), 100.0);
        assert_eq!(state.playhead_time(), 100.0);
    }
}
