// src/modules/process.rs
//
// Process tab: single-video form, Process / Clear buttons and the main log.
// The run itself is simulated; the header says so.

use super::{codec_combo, log_view, panel_header, provider_combo, PanelModule};
use egui::{Button, Grid, RichText, TextEdit, Ui};
use frameforge_core::commands::ControlCommand;
use frameforge_core::tabs::Tab;
use frameforge_core::Controller;

use crate::theme::ACCENT_DIM;

const LOG_HEIGHT: f32 = 260.0;

#[derive(Default)]
pub struct ProcessPanel {
    /// Set by app.rs each frame from the worker's active run count.
    pub busy: bool,
}

impl PanelModule for ProcessPanel {
    fn tab(&self) -> Tab {
        Tab::Process
    }

    fn ui(&mut self, ui: &mut Ui, ctl: &mut Controller, cmd: &mut Vec<ControlCommand>) {
        panel_header(
            ui,
            "Process Video",
            "Simulated pipeline: stages are timed log messages, no media is read or written.",
        );

        Grid::new("process_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Input video");
                ui.horizontal(|ui| {
                    ui.add(
                        TextEdit::singleline(&mut ctl.form.input_video)
                            .hint_text("path/to/clip.mp4")
                            .desired_width(380.0),
                    );
                    if ui.button("📂 Browse...").clicked() {
                        cmd.push(ControlCommand::SelectFile);
                    }
                });
                ui.end_row();

                ui.label("Output video");
                ui.add(
                    TextEdit::singleline(&mut ctl.form.output_video)
                        .hint_text("path/to/output.mp4")
                        .desired_width(380.0),
                );
                ui.end_row();

                ui.label("Provider");
                provider_combo(ui, "process_provider", &mut ctl.form.provider);
                ui.end_row();

                ui.label("FPS");
                ui.add(TextEdit::singleline(&mut ctl.form.fps).desired_width(80.0));
                ui.end_row();

                ui.label("Codec");
                codec_combo(ui, "process_codec", &mut ctl.form.codec);
                ui.end_row();
            });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let run = Button::new(RichText::new("▶  Process").strong()).fill(ACCENT_DIM);
            if ui.add(run).clicked() {
                cmd.push(ControlCommand::ProcessVideo);
            }
            if ui.button("🗑 Clear Log").clicked() {
                cmd.push(ControlCommand::ClearLog);
            }
            if self.busy {
                ui.spinner();
            }
        });

        ui.add_space(10.0);
        log_view::show(ui, "main_log", &mut ctl.main_log, LOG_HEIGHT);
    }
}
