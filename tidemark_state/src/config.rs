// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Process-wide timeline constants.
///
/// A config value is created once by the host and passed explicitly into
/// every transition and geometry derivation; nothing in the workspace reads
/// it through hidden global state. The bounds and the rounding factor are
/// expected to be mutually consistent: `min_duration` and `max_duration`
/// should lie on the rounding grid, since clamped boundary values are not
/// re-rounded (see [`crate::resolve_duration_time`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineConfig {
    /// Arrow-key / spin-button step for the number fields, in time units.
    pub increment: f64,
    /// Lower bound for the duration.
    pub min_duration: f64,
    /// Upper bound for the duration.
    pub max_duration: f64,
    /// Granularity that committed time values snap to.
    pub rounding_factor: f64,
    /// Horizontal scale: how many pixels one time unit occupies.
    pub pixels_per_unit: f64,
    /// Fixed padding between the viewport's left edge and time zero.
    pub left_ruler_padding: f64,
    /// Fixed padding after the end of the ruler bar.
    pub right_ruler_padding: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            increment: 10.0,
            min_duration: 100.0,
            max_duration: 6000.0,
            rounding_factor: 10.0,
            pixels_per_unit: 1.0,
            left_ruler_padding: 316.0,
            right_ruler_padding: 16.0,
        }
    }
}
