// src/modules/mod.rs
//
// Panel registry. One module per tab:
//   1. Create modules/mypanel.rs implementing PanelModule
//   2. Add `pub mod mypanel;` below
//   3. Add a field and a match arm in app.rs

pub mod batch;
pub mod log_view;
pub mod process;
pub mod settings_panel;
pub mod status_panel;

use egui::{ComboBox, RichText, Ui};
use frameforge_core::commands::ControlCommand;
use frameforge_core::form::{Provider, CODECS};
use frameforge_core::tabs::Tab;
use frameforge_core::Controller;

use crate::theme::DARK_TEXT_DIM;

/// Every tab panel implements this trait.
/// Panels edit form fields in place (they are the inputs); every action is
/// emitted as a ControlCommand and applied by app.rs after the UI pass.
pub trait PanelModule {
    fn tab(&self) -> Tab;
    fn ui(&mut self, ui: &mut Ui, ctl: &mut Controller, cmd: &mut Vec<ControlCommand>);
}

// ── Shared widgets ────────────────────────────────────────────────────────────

pub(crate) fn panel_header(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.heading(title);
    ui.label(RichText::new(subtitle).size(12.0).color(DARK_TEXT_DIM));
    ui.add_space(12.0);
}

pub(crate) fn provider_combo(ui: &mut Ui, id: &str, provider: &mut Provider) {
    ComboBox::from_id_salt(id)
        .selected_text(provider.label())
        .width(180.0)
        .show_ui(ui, |ui| {
            for p in Provider::ALL {
                ui.selectable_value(provider, p, p.label());
            }
        });
}

/// Codec picker. A value not in CODECS (typed into settings) still shows.
pub(crate) fn codec_combo(ui: &mut Ui, id: &str, codec: &mut String) {
    ComboBox::from_id_salt(id)
        .selected_text(codec.as_str())
        .width(180.0)
        .show_ui(ui, |ui| {
            for c in CODECS {
                ui.selectable_value(codec, (*c).to_string(), *c);
            }
        });
}
