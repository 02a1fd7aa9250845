// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Rect};
use tidemark_input::field::{FieldCommit, NumberField};
use tidemark_input::scrub::ScrubState;
use tidemark_ruler::{PlayheadPlacement, RulerScale, playhead_placement, pointer_bar_position};
use tidemark_scroll::{ScrollAxis, ScrollSync, ScrollUpdate};
use tidemark_state::{TimelineAction, TimelineConfig, TimelineState};

use crate::region::TimelineRegion;

/// Pixel geometry consumers re-read after every transition.
///
/// Produced by [`TimelineController::geometry`] from the current committed
/// snapshot; nothing here is cached across transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineGeometry {
    /// Width of the ruler bar in pixels.
    pub ruler_width: f64,
    /// Width of one keyframe segment in pixels; equals the ruler width by
    /// construction, both being the duration mapped through the same scale.
    pub segment_width: f64,
    /// Playhead position and visibility, or `None` while the host has not
    /// reported viewport bounds.
    pub playhead: Option<PlayheadPlacement>,
}

/// Serializes every timeline interaction into reducer dispatches and hands
/// geometry back out.
///
/// One controller instance exists per mounted widget. All methods run
/// synchronously on the calling thread; the committed [`TimelineState`] is
/// the only shared mutable value and nothing mutates it except this type.
///
/// Host geometry (the ruler bar's bounding box, the widget's visible
/// bounding box) is pushed in whenever layout changes. Routes that need a
/// bounding box that has not been reported yet skip the cycle and return
/// `false` rather than erroring.
#[derive(Clone, Debug)]
pub struct TimelineController {
    config: TimelineConfig,
    state: TimelineState,
    playhead_field: NumberField,
    duration_field: NumberField,
    scrub: ScrubState,
    scroll: ScrollSync<TimelineRegion>,
    ruler_bar: Option<Rect>,
    viewport: Option<Rect>,
}

impl TimelineController {
    /// Creates a controller over the default mount state, with the playhead
    /// band spanning `0..=config.max_duration`.
    #[must_use]
    pub fn new(config: TimelineConfig) -> Self {
        let state = TimelineState::new().with_time_bounds(0.0, config.max_duration);
        Self::with_state(config, state)
    }

    /// Creates a controller over a caller-built initial state.
    #[must_use]
    pub fn with_state(config: TimelineConfig, state: TimelineState) -> Self {
        let mut scroll = ScrollSync::new();
        for region in TimelineRegion::ALL {
            scroll.insert(region, region.sync_axes());
        }
        Self {
            config,
            state,
            playhead_field: NumberField::new(state.playhead_time(), config.increment),
            duration_field: NumberField::new(state.duration_time(), config.increment),
            scrub: ScrubState::default(),
            scroll,
            ruler_bar: None,
            viewport: None,
        }
    }

    /// The committed state snapshot.
    #[must_use]
    pub fn state(&self) -> TimelineState {
        self.state
    }

    /// The configuration the controller was built with.
    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// The committed state's revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.revision()
    }

    /// Reports the ruler bar's bounding box (pointer coordinate frame), or
    /// `None` when the bar is unmounted.
    pub fn set_ruler_bar_bounds(&mut self, bounds: Option<Rect>) {
        self.ruler_bar = bounds;
    }

    /// Reports the widget's visible bounding box, or `None` when unmounted.
    pub fn set_viewport_bounds(&mut self, bounds: Option<Rect>) {
        self.viewport = bounds;
    }

    /// The time↔pixel scale for the current snapshot.
    #[must_use]
    pub fn scale(&self) -> RulerScale {
        RulerScale::new(
            self.config.pixels_per_unit,
            self.config.left_ruler_padding,
            self.state.horizontal_offset(),
        )
    }

    /// Recomputes the pixel geometry from the current snapshot.
    #[must_use]
    pub fn geometry(&self) -> TimelineGeometry {
        let scale = self.scale();
        let width = scale.span_width(self.state.duration_time());
        let playhead = self.viewport.map(|viewport| {
            playhead_placement(self.state.playhead_time(), scale, 0.0..viewport.width())
        });
        TimelineGeometry {
            ruler_width: width,
            segment_width: width,
            playhead,
        }
    }

    /// Text the current-time field should render.
    #[must_use]
    pub fn playhead_display(&self) -> String {
        self.playhead_field.display()
    }

    /// Text the duration field should render.
    #[must_use]
    pub fn duration_display(&self) -> String {
        self.duration_field.display()
    }

    /// Typing into the current-time field; display-only.
    pub fn playhead_draft(&mut self, text: &str) {
        self.playhead_field.set_draft(text);
    }

    /// Typing into the duration field; display-only.
    pub fn duration_draft(&mut self, text: &str) {
        self.duration_field.set_draft(text);
    }

    /// Confirms the current-time field (Enter or blur).
    pub fn playhead_commit(&mut self) {
        match self.playhead_field.commit() {
            FieldCommit::Value(value) => {
                self.dispatch_time(TimelineAction::SetPlayheadTime(value));
            }
            FieldCommit::Reverted => {
                self.playhead_field.sync(self.state.playhead_time());
            }
        }
    }

    /// Confirms the duration field (Enter or blur).
    pub fn duration_commit(&mut self) {
        match self.duration_field.commit() {
            FieldCommit::Value(value) => {
                self.dispatch_time(TimelineAction::SetDurationTime(value));
            }
            FieldCommit::Reverted => {
                self.duration_field.sync(self.state.duration_time());
            }
        }
    }

    /// Escape in the current-time field: discard the draft, dispatch nothing.
    pub fn playhead_revert(&mut self) {
        self.playhead_field.revert();
    }

    /// Escape in the duration field: discard the draft, dispatch nothing.
    pub fn duration_revert(&mut self) {
        self.duration_field.revert();
    }

    /// Arrow-up / spin-up on the current-time field; commits immediately.
    pub fn playhead_step_up(&mut self) {
        let value = self.playhead_field.step_up();
        self.dispatch_time(TimelineAction::SetPlayheadTime(value));
    }

    /// Arrow-down / spin-down on the current-time field; commits immediately.
    pub fn playhead_step_down(&mut self) {
        let value = self.playhead_field.step_down();
        self.dispatch_time(TimelineAction::SetPlayheadTime(value));
    }

    /// Arrow-up / spin-up on the duration field; commits immediately.
    pub fn duration_step_up(&mut self) {
        let value = self.duration_field.step_up();
        self.dispatch_time(TimelineAction::SetDurationTime(value));
    }

    /// Arrow-down / spin-down on the duration field; commits immediately.
    pub fn duration_step_down(&mut self) {
        let value = self.duration_field.step_down();
        self.dispatch_time(TimelineAction::SetDurationTime(value));
    }

    /// A click on the ruler bar: one playhead dispatch through the inverse
    /// mapping.
    ///
    /// Returns `false` (skipping the cycle) while the bar's bounding box is
    /// unreported. Pointers beyond the bar's edges clamp to the nearest
    /// edge.
    pub fn ruler_click(&mut self, pointer: Point) -> bool {
        let Some(time) = self.pointer_time(pointer) else {
            return false;
        };
        self.dispatch_time(TimelineAction::SetPlayheadTime(time));
        true
    }

    /// Pointer-down on the ruler bar: starts a scrub and dispatches for the
    /// initial position.
    pub fn scrub_begin(&mut self, pointer: Point) -> bool {
        let Some(bar) = self.ruler_bar else {
            return false;
        };
        let bar_x = pointer_bar_position(pointer, bar);
        self.scrub.begin(bar_x);
        let time = self.scale().bar_x_to_time(bar_x);
        self.dispatch_time(TimelineAction::SetPlayheadTime(time));
        true
    }

    /// Pointer-move during a scrub: dispatches continuously.
    ///
    /// Moves outside a gesture are ignored; a missing bar bounding box skips
    /// the cycle without ending the gesture.
    pub fn scrub_move(&mut self, pointer: Point) -> bool {
        if !self.scrub.is_scrubbing() {
            return false;
        }
        let Some(bar) = self.ruler_bar else {
            return false;
        };
        let bar_x = pointer_bar_position(pointer, bar);
        self.scrub.update(bar_x);
        let time = self.scale().bar_x_to_time(bar_x);
        self.dispatch_time(TimelineAction::SetPlayheadTime(time));
        true
    }

    /// Pointer-up: ends the scrub gesture.
    pub fn scrub_end(&mut self) {
        self.scrub.end();
    }

    /// Returns `true` while a scrub gesture is active.
    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.scrub.is_scrubbing()
    }

    /// A region reported a new absolute scroll offset.
    ///
    /// Runs the sync group, dispatches the offset into the state when it
    /// changed, and returns the peers whose real scroll positions the host
    /// must now write back.
    pub fn scrolled(
        &mut self,
        region: TimelineRegion,
        axis: ScrollAxis,
        offset: f64,
    ) -> ScrollUpdate<TimelineRegion> {
        let update = self.scroll.scrolled(region, axis, offset);
        if update.changed {
            let action = match axis {
                ScrollAxis::Horizontal => TimelineAction::SetHorizontalOffset(update.offset),
                ScrollAxis::Vertical => TimelineAction::SetVerticalOffset(update.offset),
            };
            self.state.apply(&self.config, action);
        }
        update
    }

    fn pointer_time(&self, pointer: Point) -> Option<f64> {
        let bar = self.ruler_bar?;
        let bar_x = pointer_bar_position(pointer, bar);
        Some(self.scale().bar_x_to_time(bar_x))
    }

    /// Dispatches a time action and re-mirrors both fields from the
    /// committed state, so clamped and cascaded values land in the displays.
    fn dispatch_time(&mut self, action: TimelineAction) {
        self.state.apply(&self.config, action);
        self.playhead_field.sync(self.state.playhead_time());
        self.duration_field.sync(self.state.duration_time());
    }
}
