// src/modules/status_panel.rs
//
// Status tab. Every row is simulated (see frameforge_core::status); the
// ComfyUI row stays at "Checking..." because no probe exists yet.

use super::{panel_header, PanelModule};
use egui::{Grid, RichText, Ui};
use frameforge_core::commands::ControlCommand;
use frameforge_core::helpers::time::format_clock;
use frameforge_core::status::{StatusKey, StatusLevel};
use frameforge_core::tabs::Tab;
use frameforge_core::Controller;

use crate::theme::{status_color, DARK_TEXT_DIM};

#[derive(Default)]
pub struct StatusPanel;

impl PanelModule for StatusPanel {
    fn tab(&self) -> Tab {
        Tab::Status
    }

    fn ui(&mut self, ui: &mut Ui, ctl: &mut Controller, cmd: &mut Vec<ControlCommand>) {
        panel_header(ui, "System Status", "Simulated checks: values are fixed or read from saved settings.");

        Grid::new("status_grid")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .striped(true)
            .show(ui, |ui| {
                for key in StatusKey::ALL {
                    ui.label(key.label());
                    match ctl.status.get(key) {
                        Some(value) => {
                            let glyph = match value.level {
                                StatusLevel::Ok      => "●",
                                StatusLevel::Warning => "▲",
                                StatusLevel::Pending => "…",
                            };
                            ui.label(
                                RichText::new(format!("{glyph} {}", value.text))
                                    .color(status_color(value.level)),
                            );
                        }
                        None => {
                            ui.label(RichText::new("not checked").color(DARK_TEXT_DIM));
                        }
                    }
                    ui.end_row();
                }
            });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("🔄 Check Status").clicked() {
                cmd.push(ControlCommand::CheckStatus);
            }
            if let Some(at) = ctl.status.checked_at() {
                ui.label(
                    RichText::new(format!("last checked {}", format_clock(at)))
                        .small()
                        .color(DARK_TEXT_DIM),
                );
            }
        });
    }
}
