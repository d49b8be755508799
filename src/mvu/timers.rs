// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Deadline queue for delayed commands, driven by the UI frame clock.
//!
//! Times are seconds on egui's input clock (`InputState::time`). Each command
//! comes due exactly `Command::delay` after it was scheduled, however many
//! others are waiting.

use std::time::Duration;

use tracing::debug;

use super::Command;

/// Commands waiting for their deadline.
#[derive(Debug, Default)]
pub struct Timers {
    pending: Vec<(f64, Command)>,
}

impl Timers {
    /// Queue `cmd` to come due `cmd.delay()` after `now`.
    pub fn schedule(&mut self, now: f64, cmd: Command) {
        let due = now + cmd.delay().as_secs_f64();
        debug!(?cmd, due, "command scheduled");
        self.pending.push((due, cmd));
    }

    /// Remove and return every command whose deadline is at or before `now`,
    /// earliest first.
    pub fn take_due(&mut self, now: f64) -> Vec<Command> {
        let (mut due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|(at, _)| *at <= now);
        self.pending = waiting;
        due.sort_by(|a, b| a.0.total_cmp(&b.0));
        due.into_iter().map(|(_, cmd)| cmd).collect()
    }

    /// Time left until the earliest deadline, if anything is queued.
    pub fn next_due_in(&self, now: f64) -> Option<Duration> {
        self.pending
            .iter()
            .map(|(at, _)| *at)
            .min_by(f64::total_cmp)
            .map(|at| Duration::from_secs_f64((at - now).max(0.0)))
    }
}
