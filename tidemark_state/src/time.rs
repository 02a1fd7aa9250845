// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure time normalization: the truncate → clamp → round pipeline.
//!
//! These functions are the whole of the reducer's numeric policy, exposed
//! separately so hosts and tests can exercise it without a state value.
//! The pipeline runs in a fixed order:
//!
//! 1. Fractional payloads are truncated toward zero to whole time units.
//! 2. The truncated value is clamped into its valid band.
//! 3. Values that were *not* clamped to a boundary are rounded to the nearest
//!    multiple of the rounding factor, ties away from zero. Boundary values
//!    are returned as-is; bounds are assumed to already lie on the grid.
//!
//! Truncating before rounding means `504.5` resolves to `500` (truncates to
//! `504`, rounds down) while `505.0` resolves to `510` (rounds up).

/// Rounds `time` to the nearest multiple of `factor`, ties away from zero.
///
/// `factor` must be positive. The input is expected to be a whole number of
/// time units; callers that accept fractional input truncate first (see the
/// module docs).
#[must_use]
pub fn round_time(time: f64, factor: f64) -> f64 {
    libm::round(time / factor) * factor
}

/// Resolves a playhead payload against the current bounds.
///
/// The effective upper bound is `min(max_time, duration_time)`, so the
/// playhead can never outrun a duration shorter than the configured maximum.
/// Payloads clamped to either boundary return the boundary value unrounded.
#[must_use]
pub fn resolve_playhead_time(
    payload: f64,
    min_time: f64,
    max_time: f64,
    duration_time: f64,
    factor: f64,
) -> f64 {
    let time = libm::trunc(payload);
    let upper = max_time.min(duration_time);
    if time < min_time {
        return min_time;
    }
    if time > upper {
        return upper;
    }
    round_time(time, factor)
}

/// Resolves a duration payload against the configured duration bounds.
///
/// Same pipeline as [`resolve_playhead_time`], with the duration band in
/// place of the playhead band.
#[must_use]
pub fn resolve_duration_time(payload: f64, min_duration: f64, max_duration: f64, factor: f64) -> f64 {
    let duration = libm::trunc(payload);
    if duration < min_duration {
        return min_duration;
    }
    if duration > max_duration {
        return max_duration;
    }
    round_time(duration, factor)
}
