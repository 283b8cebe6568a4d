// src/modules/settings_panel.rs
//
// Settings tab: API keys, ComfyUI server and the default fps/codec.
// Keys are masked here but stored in cleartext in the settings file.

use super::{codec_combo, panel_header, PanelModule};
use egui::{Grid, RichText, TextEdit, Ui};
use frameforge_core::commands::ControlCommand;
use frameforge_core::tabs::Tab;
use frameforge_core::Controller;

use crate::theme::DARK_TEXT_DIM;

#[derive(Default)]
pub struct SettingsPanel {
    reveal_keys: bool,
}

impl PanelModule for SettingsPanel {
    fn tab(&self) -> Tab {
        Tab::Settings
    }

    fn ui(&mut self, ui: &mut Ui, ctl: &mut Controller, cmd: &mut Vec<ControlCommand>) {
        panel_header(ui, "Settings", "Saved locally for this user; nothing is sent anywhere.");

        ui.label(RichText::new("API KEYS").strong().small());
        ui.add_space(4.0);
        let masked = !self.reveal_keys;
        Grid::new("settings_keys")
            .num_columns(3)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Grok API key");
                ui.add(TextEdit::singleline(&mut ctl.form.grok_key).password(masked).desired_width(320.0));
                if ui.button("Save").clicked() {
                    cmd.push(ControlCommand::SaveGrokKey);
                }
                ui.end_row();

                ui.label("Midjourney API key");
                ui.add(TextEdit::singleline(&mut ctl.form.mj_key).password(masked).desired_width(320.0));
                if ui.button("Save").clicked() {
                    cmd.push(ControlCommand::SaveMidjourneyKey);
                }
                ui.end_row();

                ui.label("ComfyUI server");
                ui.add(TextEdit::singleline(&mut ctl.form.comfyui_server).desired_width(320.0));
                if ui.button("Save").clicked() {
                    cmd.push(ControlCommand::SaveComfyUiServer);
                }
                ui.end_row();
            });
        ui.checkbox(&mut self.reveal_keys, "Show keys");
        ui.label(
            RichText::new("Keys are stored unencrypted in the settings file.")
                .small()
                .color(DARK_TEXT_DIM),
        );

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(RichText::new("DEFAULTS").strong().small());
        ui.add_space(4.0);
        Grid::new("settings_defaults")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Default FPS");
                ui.add(TextEdit::singleline(&mut ctl.form.default_fps).desired_width(80.0));
                ui.end_row();

                ui.label("Default codec");
                codec_combo(ui, "default_codec", &mut ctl.form.default_codec);
                ui.end_row();
            });
        ui.add_space(8.0);
        if ui.button("💾 Save Defaults").clicked() {
            cmd.push(ControlCommand::SaveDefaults);
        }
    }
}
