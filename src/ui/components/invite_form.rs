// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Invitation input form in MVU shape: draft text, submit button, shake and
//! focus feedback, and the inline validation error line.

use std::time::Duration;

use eframe::egui;

use crate::models::email::InviteError;

/// How long the input keeps shaking after a submission.
pub const SHAKE_DURATION: Duration = Duration::from_millis(300);

/// Horizontal shake amplitude in points.
const SHAKE_AMPLITUDE: f32 = 6.0;
/// Angular speed of the shake oscillation (rad/s).
const SHAKE_SPEED: f64 = 60.0;
/// Angular speed of the error outline pulse (rad/s).
const PULSE_SPEED: f64 = 4.0;
const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
const FIELD_LABEL: &str = "Email address";

/// UI-only state owned by the form; never touches the registry.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct InviteFormModel {
    draft: String,
    shaking: bool,
    shake_generation: u64,
    focused: bool,
}

/// Messages emitted by the form view or posted back by the shake timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMsg {
    DraftChanged(String),
    Submit,
    /// Timer for the given submission ran out.
    ShakeElapsed {
        generation: u64,
    },
    FocusChanged(bool),
}

/// Side effects requested by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormCommand {
    /// Post `ShakeElapsed { generation }` after [`SHAKE_DURATION`].
    ScheduleShakeReset { generation: u64 },
}

impl InviteFormModel {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Submission is only possible with a non-empty draft.
    pub fn can_submit(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Whether the field label floats above the input instead of sitting inside it.
    pub fn label_raised(&self) -> bool {
        self.focused || !self.draft.is_empty()
    }
}

/// Apply a message to the form.
///
/// Returns the submitted candidate when `Submit` fires with a non-empty
/// draft. The draft is cleared and a shake is started regardless of whether
/// the caller later accepts the candidate.
pub fn update(
    model: &mut InviteFormModel,
    msg: FormMsg,
    cmds: &mut Vec<FormCommand>,
) -> Option<String> {
    match msg {
        FormMsg::DraftChanged(text) => {
            model.draft = text;
            None
        }
        FormMsg::Submit => {
            if model.draft.is_empty() {
                return None;
            }
            let candidate = std::mem::take(&mut model.draft);
            model.shake_generation = model.shake_generation.wrapping_add(1);
            model.shaking = true;
            cmds.push(FormCommand::ScheduleShakeReset {
                generation: model.shake_generation,
            });
            Some(candidate)
        }
        FormMsg::ShakeElapsed { generation } => {
            // A newer submission restarted the shake; its own timer ends it.
            if generation == model.shake_generation {
                model.shaking = false;
            }
            None
        }
        FormMsg::FocusChanged(focused) => {
            model.focused = focused;
            None
        }
    }
}

/// Render the form and return any messages triggered by user interaction.
pub fn view(
    ui: &mut egui::Ui,
    model: &InviteFormModel,
    error: Option<InviteError>,
) -> Vec<FormMsg> {
    let mut msgs = Vec::new();
    let time = ui.input(|inp| inp.time);

    render_floating_label(ui, model);

    ui.horizontal(|ui| {
        let offset = if model.shaking {
            shake_offset(time)
        } else {
            0.0
        };
        ui.add_space(SHAKE_AMPLITUDE + offset);

        let mut draft = model.draft().to_string();
        let field_width = (ui.available_width() - 190.0).max(160.0);
        let response = egui::Frame::new()
            .stroke(outline_stroke(ui, error.is_some(), time))
            .inner_margin(4.0)
            .show(ui, |ui| {
                let mut edit = egui::TextEdit::singleline(&mut draft).desired_width(field_width);
                if !model.label_raised() {
                    edit = edit.hint_text(format!(
                        "{} {FIELD_LABEL}",
                        egui_phosphor::regular::ENVELOPE
                    ));
                }
                ui.add(edit)
            })
            .inner;

        if response.changed() {
            msgs.push(FormMsg::DraftChanged(draft.clone()));
        }
        if response.has_focus() != model.focused {
            msgs.push(FormMsg::FocusChanged(response.has_focus()));
        }

        let enter = response.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter));
        if enter {
            // Enter drops focus in egui; keep typing without clicking back in.
            response.request_focus();
            msgs.push(FormMsg::Submit);
        }

        ui.add_space(SHAKE_AMPLITUDE - offset);

        let button = egui::Button::new(format!(
            "{} Send invitation",
            egui_phosphor::regular::PAPER_PLANE_TILT
        ));
        if ui
            .add_enabled(model.can_submit(), button)
            .on_disabled_hover_text("Type an email address first")
            .clicked()
        {
            msgs.push(FormMsg::Submit);
        }
    });

    if let Some(err) = error {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.add_space(SHAKE_AMPLITUDE);
            ui.colored_label(
                ERROR_RED,
                format!("{} {err}", egui_phosphor::regular::WARNING_CIRCLE),
            );
        });
    }

    msgs
}

/// Small caption above the field; fades in while the in-field hint is hidden.
fn render_floating_label(ui: &mut egui::Ui, model: &InviteFormModel) {
    let raised = ui
        .ctx()
        .animate_bool(egui::Id::new("invite_form_label"), model.label_raised());
    let color = if model.is_focused() {
        ui.visuals().selection.bg_fill
    } else {
        egui::Color32::from_gray(110)
    };
    ui.horizontal(|ui| {
        ui.add_space(SHAKE_AMPLITUDE);
        ui.label(
            egui::RichText::new(FIELD_LABEL)
                .small()
                .color(color.gamma_multiply(raised)),
        );
    });
}

/// Horizontal displacement of the input while shaking.
fn shake_offset(time: f64) -> f32 {
    SHAKE_AMPLITUDE * (time * SHAKE_SPEED).sin() as f32
}

/// Regular outline, or a pulsing red one while an error is shown.
fn outline_stroke(ui: &egui::Ui, has_error: bool, time: f64) -> egui::Stroke {
    if !has_error {
        return ui.visuals().window_stroke();
    }
    let pulse = 0.5 + 0.5 * (time * PULSE_SPEED).sin() as f32;
    egui::Stroke::new(1.5, ERROR_RED.gamma_multiply(egui::lerp(0.35..=1.0, pulse)))
}
