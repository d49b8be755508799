// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring the email registry, form state,
//! messages, and commands.

pub mod timers;

use std::time::Duration;

use tracing::debug;

use crate::logic::registry::{self, Action, Registry};
use crate::ui::components::invite_form::{self, FormCommand, FormMsg, InviteFormModel};
use crate::ui::components::member_tags::TagsMsg;

/// Top-level application state.
#[derive(Clone, Debug, Default)]
pub struct AppModel {
    /// Accepted addresses and the latest validation outcome.
    pub registry: Registry,
    /// Draft text, shake and focus state of the input form.
    pub form: InviteFormModel,
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    Form(FormMsg),
    Tags(TagsMsg),
}

/// Commands represent side-effects executed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Wait out the shake animation, then end the shake for `generation`.
    ResetShake { generation: u64 },
}

impl Command {
    /// How long after scheduling the command comes due.
    pub fn delay(&self) -> Duration {
        match self {
            Command::ResetShake { .. } => invite_form::SHAKE_DURATION,
        }
    }
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Form(m) => {
            let mut form_cmds = Vec::new();
            if let Some(candidate) = invite_form::update(&mut model.form, m, &mut form_cmds) {
                dispatch(model, Action::Add(candidate));
            }
            for c in form_cmds {
                match c {
                    FormCommand::ScheduleShakeReset { generation } => {
                        cmds.push(Command::ResetShake { generation })
                    }
                }
            }
        }
        Msg::Tags(TagsMsg::Remove(email)) => dispatch(model, Action::Remove(email)),
    }
}

/// Resolve a command whose delay has elapsed into the message it produces.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::ResetShake { generation } => Msg::Form(FormMsg::ShakeElapsed { generation }),
    }
}

/// Feed an action through the registry reducer.
fn dispatch(model: &mut AppModel, action: Action) {
    debug!(?action, "dispatching registry action");
    let current = std::mem::take(&mut model.registry);
    model.registry = registry::reduce(current, action);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::email::InviteError;

    fn submit(model: &mut AppModel, text: &str) -> Vec<Command> {
        let mut cmds = Vec::new();
        update(
            model,
            Msg::Form(FormMsg::DraftChanged(text.into())),
            &mut cmds,
        );
        update(model, Msg::Form(FormMsg::Submit), &mut cmds);
        cmds
    }

    #[test]
    fn submit_adds_email_and_schedules_reset() {
        let mut model = AppModel::default();

        let cmds = submit(&mut model, "a@b.com");

        assert_eq!(model.registry.emails(), ["a@b.com"]);
        assert_eq!(model.registry.error(), None);
        assert_eq!(model.form.draft(), "");
        assert!(model.form.is_shaking());
        assert_eq!(cmds, vec![Command::ResetShake { generation: 1 }]);
    }

    #[test]
    fn rejected_submit_still_clears_draft_and_shakes() {
        let mut model = AppModel::default();

        let cmds = submit(&mut model, "not-an-email");

        assert!(model.registry.is_empty());
        assert_eq!(model.registry.error(), Some(InviteError::InvalidFormat));
        assert_eq!(model.form.draft(), "");
        assert!(model.form.is_shaking());
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn empty_submit_never_reaches_registry() {
        let mut model = AppModel::default();
        submit(&mut model, "not-an-email");
        let before = model.registry.clone();

        let mut cmds = Vec::new();
        update(&mut model, Msg::Form(FormMsg::Submit), &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(model.registry, before);
    }

    #[test]
    fn duplicate_submit_sets_error_and_keeps_list() {
        let mut model = AppModel::default();
        submit(&mut model, "a@b.com");

        submit(&mut model, "a@b.com");

        assert_eq!(model.registry.emails(), ["a@b.com"]);
        assert_eq!(model.registry.error(), Some(InviteError::DuplicateEntry));
    }

    #[test]
    fn remove_from_tag_keeps_stale_error() {
        let mut model = AppModel::default();
        submit(&mut model, "a@b.com");
        submit(&mut model, "oops");
        assert_eq!(model.registry.error(), Some(InviteError::InvalidFormat));

        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::Tags(TagsMsg::Remove("a@b.com".into())),
            &mut cmds,
        );

        assert!(cmds.is_empty());
        assert!(model.registry.is_empty());
        assert_eq!(model.registry.error(), Some(InviteError::InvalidFormat));
    }

    #[test]
    fn reset_command_round_trip_ends_shake() {
        let mut model = AppModel::default();
        let mut cmds = submit(&mut model, "a@b.com");
        assert!(model.form.is_shaking());

        let msg = run_command(cmds.pop().expect("reset scheduled"));
        assert_eq!(msg, Msg::Form(FormMsg::ShakeElapsed { generation: 1 }));

        let mut cmds2 = Vec::new();
        update(&mut model, msg, &mut cmds2);

        assert!(cmds2.is_empty());
        assert!(!model.form.is_shaking());
    }

    #[test]
    fn reset_shake_is_due_after_shake_duration() {
        let cmd = Command::ResetShake { generation: 3 };
        assert_eq!(cmd.delay(), Duration::from_millis(300));
    }
}
