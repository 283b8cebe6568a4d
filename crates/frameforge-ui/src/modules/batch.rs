// src/modules/batch.rs
// Batch tab: input/output folders, provider and the batch log.

use super::{log_view, panel_header, provider_combo, PanelModule};
use egui::{Button, Grid, RichText, TextEdit, Ui};
use frameforge_core::commands::ControlCommand;
use frameforge_core::form::FolderTarget;
use frameforge_core::tabs::Tab;
use frameforge_core::Controller;

use crate::theme::ACCENT_DIM;

const LOG_HEIGHT: f32 = 260.0;

#[derive(Default)]
pub struct BatchPanel;

impl PanelModule for BatchPanel {
    fn tab(&self) -> Tab {
        Tab::Batch
    }

    fn ui(&mut self, ui: &mut Ui, ctl: &mut Controller, cmd: &mut Vec<ControlCommand>) {
        panel_header(ui, "Batch Processing", "Queue every video in a folder.");

        Grid::new("batch_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for (label, target) in [("Input folder", FolderTarget::Input), ("Output folder", FolderTarget::Output)] {
                    ui.label(label);
                    ui.horizontal(|ui| {
                        let field = match target {
                            FolderTarget::Input  => &mut ctl.form.batch_input,
                            FolderTarget::Output => &mut ctl.form.batch_output,
                        };
                        ui.add(TextEdit::singleline(field).desired_width(380.0));
                        if ui.button("📂 Browse...").clicked() {
                            cmd.push(ControlCommand::SelectFolder(target));
                        }
                    });
                    ui.end_row();
                }

                ui.label("Provider");
                provider_combo(ui, "batch_provider", &mut ctl.form.batch_provider);
                ui.end_row();
            });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let run = Button::new(RichText::new("▶  Process Batch").strong()).fill(ACCENT_DIM);
            if ui.add(run).clicked() {
                cmd.push(ControlCommand::ProcessBatch);
            }
            if ui.button("🗑 Clear Log").clicked() {
                cmd.push(ControlCommand::ClearBatchLog);
            }
        });

        ui.add_space(10.0);
        log_view::show(ui, "batch_log", &mut ctl.batch_log, LOG_HEIGHT);
    }
}
