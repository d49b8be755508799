// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Email registry: the accepted invitation addresses plus the outcome of the
//! latest add attempt, advanced by a pure reducer.

use tracing::debug;

use crate::models::email::{InviteError, is_email_shaped};

/// Immutable registry state. Only [`reduce`] produces new values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    emails: Vec<String>,
    error: Option<InviteError>,
}

/// Transitions understood by the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Validate and append a candidate address.
    Add(String),
    /// Drop every entry equal to the given address.
    Remove(String),
}

impl Registry {
    /// Accepted addresses in insertion order.
    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    /// Rejection reason of the most recent add, if it failed.
    pub fn error(&self) -> Option<InviteError> {
        self.error
    }

    pub fn contains(&self, email: &str) -> bool {
        self.emails.iter().any(|existing| existing == email)
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

/// Compute the next registry state for `action`.
///
/// Rejections never fail the call; they are recorded in [`Registry::error`]
/// and leave the list untouched. Removal keeps whatever error is present.
pub fn reduce(state: Registry, action: Action) -> Registry {
    match action {
        Action::Add(candidate) => add(state, candidate),
        Action::Remove(target) => remove(state, &target),
    }
}

fn add(mut state: Registry, candidate: String) -> Registry {
    if !is_email_shaped(&candidate) {
        debug!(candidate = %candidate, "rejected malformed address");
        state.error = Some(InviteError::InvalidFormat);
        return state;
    }
    if state.contains(&candidate) {
        debug!(candidate = %candidate, "rejected duplicate address");
        state.error = Some(InviteError::DuplicateEntry);
        return state;
    }

    debug!(email = %candidate, "address added");
    state.emails.push(candidate);
    state.error = None;
    state
}

fn remove(mut state: Registry, target: &str) -> Registry {
    let before = state.emails.len();
    state.emails.retain(|email| email != target);
    debug!(
        email = %target,
        removed = before - state.emails.len(),
        "remove requested"
    );
    state
}
