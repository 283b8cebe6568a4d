// src/app.rs
use std::time::Duration;

use anyhow::Context as _;
use eframe::egui;
use frameforge_core::commands::ControlCommand;
use frameforge_core::controller::Notice;
use frameforge_core::settings::{JsonFileStore, MemoryStore, SettingsRepository};
use frameforge_core::tabs::Tab;
use frameforge_core::{ControlError, Controller};
use frameforge_worker::PipelineWorker;

use crate::context::AppContext;
use crate::modules::{
    PanelModule,
    batch::BatchPanel,
    process::ProcessPanel,
    settings_panel::SettingsPanel,
    status_panel::StatusPanel,
};
use crate::paths;
use crate::theme::{configure_style, notice_color, ACCENT, DARK_BG_2, DARK_TEXT_DIM};

/// Lines kept per log panel before the oldest are dropped.
const LOG_CAPACITY: usize = 10_000;

/// Repaint cadence while a simulated run is in flight.
const RUN_REPAINT: Duration = Duration::from_millis(100);

// ── App ───────────────────────────────────────────────────────────────────────

pub struct FrameForgeApp {
    controller:   Controller,
    context:      AppContext,
    // Panels as concrete types so a missing arm is a compile error.
    process:      ProcessPanel,
    batch:        BatchPanel,
    settings:     SettingsPanel,
    status:       StatusPanel,
    /// Commands emitted by panels each frame, processed after the UI pass
    pending_cmds: Vec<ControlCommand>,
}

impl FrameForgeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Pin to dark mode so an OS theme change doesn't replace our visuals.
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });
        configure_style(&cc.egui_ctx);

        let (store, open_error) = match open_settings() {
            Ok(store) => (Box::new(store) as Box<dyn SettingsRepository>, None),
            Err(e) => {
                tracing::warn!("{e:#}; settings will not persist this session");
                (Box::new(MemoryStore::new()) as Box<dyn SettingsRepository>, Some(e))
            }
        };

        let mut controller = Controller::new(store).with_log_capacity(LOG_CAPACITY);
        controller.load();
        if let Some(e) = open_error {
            controller.notice = Some(Notice::error(format!(
                "Settings unavailable ({e:#}); changes will not be saved",
            )));
        }

        Self {
            controller,
            context:      AppContext::new(PipelineWorker::new()),
            process:      ProcessPanel::default(),
            batch:        BatchPanel,
            settings:     SettingsPanel::default(),
            status:       StatusPanel,
            pending_cmds: Vec::new(),
        }
    }

    fn process_command(&mut self, cmd: ControlCommand) {
        let ctl = &mut self.controller;
        match cmd {
            // ── Navigation ───────────────────────────────────────────────────
            ControlCommand::SwitchTab { tab, origin } => ctl.switch_tab(tab, origin),

            // ── Pickers ──────────────────────────────────────────────────────
            ControlCommand::SelectFile => ctl.select_file(&self.context.picker),
            ControlCommand::SelectFolder(target) => {
                ctl.select_folder(target, &self.context.picker);
            }

            // ── Processing ───────────────────────────────────────────────────
            // Validation failures are already in the panel's log.
            ControlCommand::ProcessVideo => {
                if let Err(e) = ctl.process_video(&mut self.context.worker) {
                    tracing::debug!("process rejected: {e}");
                }
            }
            ControlCommand::ProcessBatch => {
                if let Err(e) = ctl.process_batch() {
                    tracing::debug!("batch rejected: {e}");
                }
            }
            ControlCommand::ClearLog      => ctl.clear_log(),
            ControlCommand::ClearBatchLog => ctl.clear_batch_log(),

            // ── Settings ─────────────────────────────────────────────────────
            ControlCommand::SaveGrokKey => {
                let res = ctl.save_grok_key().map(drop);
                self.report(res);
            }
            ControlCommand::SaveMidjourneyKey => {
                let res = ctl.save_mj_key().map(drop);
                self.report(res);
            }
            ControlCommand::SaveComfyUiServer => {
                let res = ctl.save_comfyui_server();
                self.report(res);
            }
            ControlCommand::SaveDefaults => {
                let res = ctl.save_defaults();
                self.report(res);
            }

            // ── Status ───────────────────────────────────────────────────────
            ControlCommand::CheckStatus   => ctl.check_status(),
            ControlCommand::DismissNotice => ctl.dismiss_notice(),
        }
    }

    fn report(&mut self, res: Result<(), ControlError>) {
        if let Err(e) = res {
            tracing::error!("settings save failed: {e}");
            self.controller.notice = Some(Notice::error(format!("Could not save: {e}")));
        }
    }

    /// Drain stage transitions from every in-flight run into the main log.
    fn poll_pipeline(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.context.worker.rx.try_recv() {
            self.controller.apply_pipeline_event(event);
        }
        self.process.busy = self.context.worker.is_busy();
        if self.process.busy {
            ctx.request_repaint_after(RUN_REPAINT);
        }
    }

    fn tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                let selected = self.controller.tabs.is_button_active(tab);
                let text = if selected {
                    egui::RichText::new(tab.label()).strong().color(egui::Color32::WHITE)
                } else {
                    egui::RichText::new(tab.label())
                };
                if ui.selectable_label(selected, text).clicked() {
                    self.pending_cmds.push(ControlCommand::SwitchTab { tab, origin: Some(tab) });
                }
            }
        });
    }

    fn notice_bar(&mut self, ui: &mut egui::Ui) {
        let Some(notice) = &self.controller.notice else { return };
        let color = notice_color(notice.kind);
        let text  = notice.text.clone();
        egui::Frame::default()
            .fill(DARK_BG_2)
            .stroke(egui::Stroke::new(1.0, color))
            .inner_margin(egui::Margin::symmetric(10, 6))
            .corner_radius(egui::CornerRadius::same(4))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(text).color(color));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            self.pending_cmds.push(ControlCommand::DismissNotice);
                        }
                    });
                });
            });
    }
}

fn open_settings() -> anyhow::Result<JsonFileStore> {
    let path = paths::settings_file();
    JsonFileStore::open(&path).with_context(|| format!("opening settings at {}", path.display()))
}

// ── eframe::App ───────────────────────────────────────────────────────────────

impl eframe::App for FrameForgeApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.context.worker.shutdown();
        tracing::info!("frameforge exiting");
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pipeline(ctx);

        egui::TopBottomPanel::top("top_panel")
            .exact_height(36.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(egui::RichText::new("🎞 FrameForge").strong().size(15.0).color(ACCENT));
                    ui.separator();
                    ui.label(
                        egui::RichText::new("AI video processing control panel (simulation)")
                            .size(12.0)
                            .color(DARK_TEXT_DIM),
                    );
                });
            });

        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.tab_bar(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.notice_bar(ui);
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                let ctl  = &mut self.controller;
                let cmds = &mut self.pending_cmds;
                let panel: &mut dyn PanelModule = match ctl.tabs.active_panel() {
                    Tab::Process  => &mut self.process,
                    Tab::Batch    => &mut self.batch,
                    Tab::Settings => &mut self.settings,
                    Tab::Status   => &mut self.status,
                };
                debug_assert_eq!(panel.tab(), ctl.tabs.active_panel());
                panel.ui(ui, ctl, cmds);
            });
        });

        // ── Process commands emitted by panels this frame ─────────────────────
        let cmds: Vec<ControlCommand> = self.pending_cmds.drain(..).collect();
        for cmd in cmds {
            self.process_command(cmd);
        }
    }
}
