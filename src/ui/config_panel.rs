// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Configuration JSON panel.
//!
//! This module provides the editable text surface mirroring the current
//! configuration, plus the copy-to-clipboard control. The text is
//! bidirectionally bound: edits are reported back so the app can re-parse
//! them on every change.

/// Result of config panel interaction.
pub enum PanelAction {
    None,
    /// The user edited the JSON text; the app should attempt a parse.
    ConfigEdited,
}

/// Display the JSON text surface and its controls.
pub fn show(ui: &mut egui::Ui, config_text: &mut String) -> PanelAction {
    let mut action = PanelAction::None;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Configuration JSON").strong());
        if ui.button("📋 Copy to clipboard").clicked() {
            ui.output_mut(|o| o.copied_text = config_text.clone());
            log::info!("Copied configuration to clipboard");
        }
    });

    let response = ui.add(
        egui::TextEdit::multiline(config_text)
            .code_editor()
            .desired_rows(10)
            .desired_width(f32::INFINITY),
    );

    if response.changed() {
        action = PanelAction::ConfigEdited;
    }

    action
}
