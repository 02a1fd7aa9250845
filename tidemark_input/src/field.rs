// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number-field edit buffer: a committed value plus an uncommitted draft.
//!
//! The field never writes shared state itself. It tracks the last committed
//! value (mirroring the reducer's state) and an optional draft (what the
//! user has typed but not confirmed). The host wires the transitions:
//!
//! 1) Typing calls [`NumberField::set_draft`]; only the display changes.
//! 2) Enter/blur calls [`NumberField::commit`]; a parseable draft comes back
//!    as [`FieldCommit::Value`] for the host to dispatch, anything else
//!    reverts the display.
//! 3) Escape calls [`NumberField::revert`]; the draft is discarded and
//!    nothing is dispatched.
//! 4) Arrow keys and spin buttons call [`NumberField::step_up`] /
//!    [`NumberField::step_down`]; the stepped value is dispatched
//!    immediately with no separate confirmation.
//! 5) After every dispatch the host calls [`NumberField::sync`] with the
//!    value the reducer actually kept, which may differ from the one sent
//!    (clamping, rounding). This is what resets a field showing `700` to
//!    `600` when the duration caps the commit.

use alloc::string::{String, ToString};

/// Outcome of confirming a field edit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldCommit {
    /// The displayed text parsed; dispatch this value.
    Value(f64),
    /// The draft was empty or non-numeric; the display reverted to the
    /// committed value and nothing should be dispatched.
    Reverted,
}

/// Edit-buffer state for one numeric input field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumberField {
    committed: f64,
    step: f64,
    draft: Option<String>,
}

impl NumberField {
    /// Creates a field mirroring `committed`, stepping by `step` per
    /// arrow-key/spin-button press.
    #[must_use]
    pub fn new(committed: f64, step: f64) -> Self {
        Self {
            committed,
            step,
            draft: None,
        }
    }

    /// The last committed value the field mirrors.
    #[must_use]
    pub fn committed(&self) -> f64 {
        self.committed
    }

    /// Returns `true` while an uncommitted draft is open.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// The text the field should render: the draft if one is open, the
    /// committed value otherwise.
    #[must_use]
    pub fn display(&self) -> String {
        match &self.draft {
            Some(draft) => draft.clone(),
            None => self.committed.to_string(),
        }
    }

    /// Replaces the draft with newly typed text. Display-only; shared state
    /// is untouched until [`NumberField::commit`].
    pub fn set_draft(&mut self, text: &str) {
        self.draft = Some(String::from(text));
    }

    /// Confirms the current draft (Enter or blur).
    ///
    /// A field with no open draft re-commits its mirrored value; the
    /// resulting dispatch is a reducer no-op. Empty or non-numeric drafts
    /// revert. Numeric text is accepted as-is — leading zeros and decimals
    /// are the parser's business, and range enforcement belongs to the
    /// reducer the host dispatches into.
    pub fn commit(&mut self) -> FieldCommit {
        match self.draft.take() {
            None => FieldCommit::Value(self.committed),
            Some(draft) => match parse_numeric(&draft) {
                Some(value) => FieldCommit::Value(value),
                None => FieldCommit::Reverted,
            },
        }
    }

    /// Discards the draft without dispatching (Escape).
    pub fn revert(&mut self) {
        self.draft = None;
    }

    /// Steps the displayed value up, returning the raw value to dispatch
    /// immediately.
    ///
    /// Steps are based on the draft when one parses, the committed value
    /// otherwise, and they close the draft — the follow-up
    /// [`NumberField::sync`] decides what the field shows next.
    pub fn step_up(&mut self) -> f64 {
        self.step_by(self.step)
    }

    /// Steps the displayed value down, returning the raw value to dispatch
    /// immediately.
    pub fn step_down(&mut self) -> f64 {
        self.step_by(-self.step)
    }

    /// Mirrors the committed state after a dispatch round-trip, closing any
    /// draft so the display reflects what the reducer actually kept.
    pub fn sync(&mut self, committed: f64) {
        self.committed = committed;
        self.draft = None;
    }

    fn step_by(&mut self, delta: f64) -> f64 {
        let base = self
            .draft
            .take()
            .and_then(|draft| parse_numeric(&draft))
            .unwrap_or(self.committed);
        base + delta
    }
}

fn parse_numeric(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
