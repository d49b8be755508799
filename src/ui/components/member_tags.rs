// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Removable tag chips for the invited addresses.

use eframe::egui;

const CHIP_FILL: egui::Color32 = egui::Color32::from_rgb(199, 210, 254);
const CHIP_TEXT: egui::Color32 = egui::Color32::from_rgb(67, 56, 202);

/// Messages emitted by the tag list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagsMsg {
    Remove(String),
}

/// Render one chip per address in list order and return removal requests.
pub fn view(ui: &mut egui::Ui, emails: &[String]) -> Vec<TagsMsg> {
    let mut msgs = Vec::new();

    ui.label(
        egui::RichText::new(format!("{} Team members", egui_phosphor::regular::USERS))
            .strong()
            .color(egui::Color32::from_gray(110)),
    );
    ui.add_space(6.0);

    if emails.is_empty() {
        ui.label(
            egui::RichText::new("No team members invited yet.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return msgs;
    }

    ui.horizontal_wrapped(|ui| {
        for email in emails {
            render_chip(ui, email, &mut msgs);
        }
    });

    msgs
}

/// Single address chip with an inline trash control.
fn render_chip(ui: &mut egui::Ui, email: &str, msgs: &mut Vec<TagsMsg>) {
    egui::Frame::new()
        .fill(CHIP_FILL)
        .stroke(egui::Stroke::new(1.0, CHIP_TEXT))
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(email).color(CHIP_TEXT));
                if ui
                    .button(
                        egui::RichText::new(egui_phosphor::regular::TRASH_SIMPLE)
                            .color(egui::Color32::from_rgb(220, 50, 50)),
                    )
                    .on_hover_text("Remove invitation")
                    .clicked()
                {
                    msgs.push(TagsMsg::Remove(email.to_string()));
                }
            });
        });
}
