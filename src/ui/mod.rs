// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for inviting team members.
//! Handles layout, delayed command timers, and repaint scheduling.

pub mod components;

use std::time::Duration;

use eframe::egui;

use crate::mvu::timers::Timers;
use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::{invite_form, member_tags};

/// Repaint cadence while the input shakes.
const ANIMATION_TICK: Duration = Duration::from_millis(16);
/// Repaint cadence for the error outline pulse.
const PULSE_TICK: Duration = Duration::from_millis(50);

/// Stateful egui application hosting the invitation form.
#[derive(Default)]
pub struct InviteApp {
    model: AppModel,
    inbox: Vec<Msg>,
    timers: Timers,
}

impl eframe::App for InviteApp {
    /// Drives a single UI frame: fires due timers, applies queued messages in
    /// arrival order, schedules resulting commands, then renders the header,
    /// form, and tag list.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);
        let now = ctx.input(|inp| inp.time);

        for cmd in self.timers.take_due(now) {
            self.inbox.push(mvu::run_command(cmd));
        }

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                self.timers.schedule(now, cmd);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(16.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(560.0);
                    self.render_header(ui);
                    ui.add_space(20.0);
                });

                let form_msgs =
                    invite_form::view(ui, &self.model.form, self.model.registry.error());
                self.inbox.extend(form_msgs.into_iter().map(Msg::Form));
                ui.add_space(28.0);

                let tag_msgs = member_tags::view(ui, self.model.registry.emails());
                self.inbox.extend(tag_msgs.into_iter().map(Msg::Tags));
            });
        });

        self.schedule_repaint(ctx, now);
    }

    /// Required by eframe 0.34; all rendering happens in `update`, which
    /// eframe still calls right before this each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

impl InviteApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Envelope icon, heading, and a summary of the invited members.
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new(egui_phosphor::regular::ENVELOPE)
                .size(48.0)
                .color(egui::Color32::from_gray(150)),
        );
        ui.add_space(4.0);
        ui.heading("Invite team members");
        ui.add_space(2.0);
        let summary = if self.model.registry.is_empty() {
            "You haven't added any team members to your project yet. \
             As the owner of this project, you can manage team member permissions."
                .to_string()
        } else {
            format!(
                "{} team member(s) invited. As the owner of this project, \
                 you can manage team member permissions.",
                self.model.registry.len()
            )
        };
        ui.label(
            egui::RichText::new(summary)
                .small()
                .color(egui::Color32::from_gray(110)),
        );
    }

    /// Keep frames coming while something changes without user input.
    fn schedule_repaint(&self, ctx: &egui::Context, now: f64) {
        if !self.inbox.is_empty() {
            ctx.request_repaint();
            return;
        }
        let window_focused = ctx.input(|inp| inp.viewport().focused).unwrap_or(true);
        if let Some(wait) =
            repaint_after(&self.model, self.timers.next_due_in(now), window_focused)
        {
            ctx.request_repaint_after(wait);
        }
    }
}

/// Longest wait before the next frame that keeps the shake smooth, fires the
/// next timer on time, and pulses a visible error. The pulse is skipped while
/// the window is in the background; `None` means idle until input arrives.
fn repaint_after(
    model: &AppModel,
    next_timer: Option<Duration>,
    window_focused: bool,
) -> Option<Duration> {
    let mut wait = next_timer;
    if model.form.is_shaking() {
        wait = sooner(wait, ANIMATION_TICK);
    }
    if window_focused && model.registry.error().is_some() {
        wait = sooner(wait, PULSE_TICK);
    }
    wait
}

fn sooner(current: Option<Duration>, candidate: Duration) -> Option<Duration> {
    Some(current.map_or(candidate, |c| c.min(candidate)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvu::{Command, update};
    use crate::ui::components::invite_form::FormMsg;

    fn submit(model: &mut AppModel, text: &str) {
        let mut cmds: Vec<Command> = Vec::new();
        update(model, Msg::Form(FormMsg::DraftChanged(text.into())), &mut cmds);
        update(model, Msg::Form(FormMsg::Submit), &mut cmds);
    }

    #[test]
    fn idle_model_needs_no_repaint() {
        assert_eq!(repaint_after(&AppModel::default(), None, true), None);
    }

    #[test]
    fn stale_error_pulses_at_slow_tick_only_while_focused() {
        let mut model = AppModel::default();
        submit(&mut model, "not-an-email");
        // End the shake so only the error remains on screen.
        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::Form(FormMsg::ShakeElapsed { generation: 1 }),
            &mut cmds,
        );
        assert!(!model.form.is_shaking());
        assert!(model.registry.error().is_some());

        assert_eq!(repaint_after(&model, None, true), Some(PULSE_TICK));
        assert_eq!(repaint_after(&model, None, false), None);
    }

    #[test]
    fn shaking_uses_animation_tick_even_in_background() {
        let mut model = AppModel::default();
        submit(&mut model, "a@b.com");
        assert!(model.form.is_shaking());

        let timer = Some(Duration::from_millis(300));
        assert_eq!(repaint_after(&model, timer, false), Some(ANIMATION_TICK));
    }

    #[test]
    fn pending_timer_wakes_idle_window() {
        let model = AppModel::default();
        let timer = Some(Duration::from_millis(120));

        assert_eq!(repaint_after(&model, timer, false), timer);
    }
}
