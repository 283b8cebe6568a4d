// src/modules/log_view.rs
// Scrolling, monospace view of one LogPanel.

use egui::{Align, Frame, RichText, ScrollArea, Stroke, Ui};
use frameforge_core::log::LogPanel;

use crate::theme::{severity_color, DARK_BG_0, DARK_BORDER, DARK_TEXT_DIM};

pub fn show(ui: &mut Ui, id: &str, log: &mut LogPanel, height: f32) {
    let jump = log.take_scroll_request();

    Frame::default()
        .fill(DARK_BG_0)
        .stroke(Stroke::new(1.0, DARK_BORDER))
        .inner_margin(egui::Margin::same(8))
        .corner_radius(egui::CornerRadius::same(4))
        .show(ui, |ui| {
            ui.set_min_height(height);
            ScrollArea::vertical()
                .id_salt(id)
                .max_height(height)
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if log.is_empty() {
                        ui.label(RichText::new("No output yet.").italics().color(DARK_TEXT_DIM));
                    }
                    for entry in log.entries() {
                        ui.label(
                            RichText::new(entry.to_string())
                                .monospace()
                                .size(12.0)
                                .color(severity_color(entry.severity)),
                        );
                    }
                    if jump {
                        ui.scroll_to_cursor(Some(Align::BOTTOM));
                    }
                });
        });
}
