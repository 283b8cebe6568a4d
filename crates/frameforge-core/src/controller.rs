// crates/frameforge-core/src/controller.rs
//
// Controller owns everything the panel shows: the form, both log panels, the
// tab bar, the status board and the latest notice. It also holds the injected
// settings repository, so no panel touches storage directly.
//
// Only two preconditions are validated: a non-empty input path before single
// or batch processing. A violation logs one error line and aborts the action
// with no other change.

use crate::error::{ControlError, Result};
use crate::form::{FolderTarget, FormState};
use crate::log::LogPanel;
use crate::picker::PathPicker;
use crate::pipeline::{PipelineEvent, PipelineLauncher, PipelineRequest, RunId};
use crate::settings::{SettingKey, SettingsRepository};
use crate::status::StatusBoard;
use crate::tabs::{Tab, TabBar};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Short confirmation shown above the panels until dismissed or replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

pub struct Controller {
    pub form:      FormState,
    pub main_log:  LogPanel,
    pub batch_log: LogPanel,
    pub tabs:      TabBar,
    pub status:    StatusBoard,
    pub notice:    Option<Notice>,
    settings:      Box<dyn SettingsRepository>,
}

impl Controller {
    pub fn new(settings: Box<dyn SettingsRepository>) -> Self {
        Self {
            form:      FormState::default(),
            main_log:  LogPanel::unbounded(),
            batch_log: LogPanel::unbounded(),
            tabs:      TabBar::default(),
            status:    StatusBoard::default(),
            notice:    None,
            settings,
        }
    }

    /// Bound both log panels to `capacity` lines.
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.main_log  = LogPanel::bounded(capacity);
        self.batch_log = LogPanel::bounded(capacity);
        self
    }

    pub fn settings(&self) -> &dyn SettingsRepository {
        self.settings.as_ref()
    }

    /// Hand the repository back, e.g. to reopen a controller on the same store.
    pub fn into_settings(self) -> Box<dyn SettingsRepository> {
        self.settings
    }

    // ── Startup ──────────────────────────────────────────────────────────────

    /// Apply stored defaults over the built-in ones, then refresh status.
    pub fn load(&mut self) {
        if let Some(fps) = self.settings.get_non_empty(SettingKey::DefaultFps) {
            self.form.default_fps = fps.clone();
            self.form.fps = fps;
        }
        if let Some(codec) = self.settings.get_non_empty(SettingKey::DefaultCodec) {
            self.form.default_codec = codec.clone();
            self.form.codec = codec;
        }
        if let Some(server) = self.settings.get_non_empty(SettingKey::ComfyUiServer) {
            self.form.comfyui_server = server;
        }
        self.check_status();
    }

    // ── Navigation ───────────────────────────────────────────────────────────

    pub fn switch_tab(&mut self, tab: Tab, origin: Option<Tab>) {
        self.tabs.switch(tab, origin);
    }

    // ── Pickers ──────────────────────────────────────────────────────────────

    pub fn select_file(&mut self, picker: &dyn PathPicker) {
        if let Some(path) = picker.pick_file() {
            self.form.input_video = path.display().to_string();
        }
    }

    pub fn select_folder(&mut self, target: FolderTarget, picker: &dyn PathPicker) {
        let Some(path) = picker.pick_folder() else { return };
        let value = path.display().to_string();
        match target {
            FolderTarget::Input  => self.form.batch_input  = value,
            FolderTarget::Output => self.form.batch_output = value,
        }
    }

    // ── Processing ───────────────────────────────────────────────────────────

    /// Clear the main log, echo the job parameters and launch a simulated run.
    pub fn process_video(&mut self, launcher: &mut dyn PipelineLauncher) -> Result<RunId> {
        self.main_log.clear();

        let form = &self.form;
        if form.input_video.is_empty() {
            self.main_log.error("Please select input video");
            return Err(ControlError::MissingInput { field: "inputVideo" });
        }

        self.main_log.info("Starting video processing...");
        self.main_log.info(format!("Input: {}", form.input_video));
        self.main_log.info(format!("Output: {}", form.output_video));
        self.main_log.info(format!("Provider: {}", form.provider));
        self.main_log.info(format!("FPS: {}", form.fps));
        self.main_log.info(format!("Codec: {}", form.codec));

        let run = launcher.launch(PipelineRequest {
            input:    form.input_video.clone(),
            output:   form.output_video.clone(),
            provider: form.provider,
            fps:      form.fps.clone(),
            codec:    form.codec.clone(),
        });
        tracing::info!(%run, input = %form.input_video, "simulated pipeline launched");
        Ok(run)
    }

    /// Log the stage a run just entered.
    pub fn apply_pipeline_event(&mut self, event: PipelineEvent) {
        if let Some(line) = event.stage.announcement() {
            self.main_log.log(line, event.stage.severity());
        }
        if event.stage.is_terminal() {
            tracing::info!(run = %event.run, "simulated pipeline complete");
        }
    }

    pub fn process_batch(&mut self) -> Result<()> {
        self.batch_log.clear();

        let form = &self.form;
        if form.batch_input.is_empty() {
            self.batch_log.error("Please select input folder");
            return Err(ControlError::MissingInput { field: "batchInput" });
        }

        self.batch_log.info("Starting batch processing...");
        self.batch_log.info(format!("Input: {}", form.batch_input));
        self.batch_log.info(format!("Output: {}", form.batch_output));
        self.batch_log.info(format!("Provider: {}", form.batch_provider));
        Ok(())
    }

    pub fn clear_log(&mut self) {
        self.main_log.clear();
    }

    pub fn clear_batch_log(&mut self) {
        self.batch_log.clear();
    }

    // ── Settings ─────────────────────────────────────────────────────────────

    /// Store the Grok key. Returns `Ok(false)` without touching the store when
    /// the field is empty.
    pub fn save_grok_key(&mut self) -> Result<bool> {
        let key = self.form.grok_key.clone();
        self.save_api_key(SettingKey::GrokKey, &key, "Grok API Key saved locally")
    }

    pub fn save_mj_key(&mut self) -> Result<bool> {
        let key = self.form.mj_key.clone();
        self.save_api_key(SettingKey::MidjourneyKey, &key, "Midjourney API Key saved locally")
    }

    fn save_api_key(&mut self, key: SettingKey, value: &str, confirmation: &str) -> Result<bool> {
        if value.is_empty() {
            return Ok(false);
        }
        self.settings.set(key, value)?;
        tracing::info!(key = key.as_str(), "api key saved");
        self.notice = Some(Notice::info(confirmation));
        Ok(true)
    }

    /// Store the server URL as typed, empty included.
    pub fn save_comfyui_server(&mut self) -> Result<()> {
        self.settings.set(SettingKey::ComfyUiServer, &self.form.comfyui_server)?;
        tracing::info!(server = %self.form.comfyui_server, "comfyui server saved");
        self.notice = Some(Notice::info("ComfyUI server saved"));
        Ok(())
    }

    /// Store the default fps/codec and apply them to the Process tab. An empty
    /// field leaves both the stored value and the Process tab field alone.
    pub fn save_defaults(&mut self) -> Result<()> {
        let fps   = self.form.default_fps.clone();
        let codec = self.form.default_codec.clone();

        if !fps.is_empty() {
            self.settings.set(SettingKey::DefaultFps, &fps)?;
            self.form.fps = fps;
        }
        if !codec.is_empty() {
            self.settings.set(SettingKey::DefaultCodec, &codec)?;
            self.form.codec = codec;
        }
        tracing::info!(fps = %self.form.fps, codec = %self.form.codec, "defaults saved");
        self.notice = Some(Notice::info("Defaults saved"));
        Ok(())
    }

    // ── Status ───────────────────────────────────────────────────────────────

    pub fn check_status(&mut self) {
        self.status.check(self.settings.as_ref());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Provider, DEFAULT_CODEC, DEFAULT_FPS};
    use crate::log::Severity;
    use crate::pipeline::{PipelineStage, PipelineTiming};
    use crate::settings::MemoryStore;
    use crate::status::StatusKey;
    use std::path::PathBuf;
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingLauncher {
        launched: Vec<PipelineRequest>,
    }

    impl PipelineLauncher for RecordingLauncher {
        fn launch(&mut self, request: PipelineRequest) -> RunId {
            self.launched.push(request);
            Uuid::new_v4()
        }
    }

    struct CannedPicker(Option<PathBuf>);

    impl PathPicker for CannedPicker {
        fn pick_file(&self) -> Option<PathBuf> {
            self.0.clone()
        }
        fn pick_folder(&self) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    fn controller() -> Controller {
        Controller::new(Box::new(MemoryStore::new()))
    }

    fn messages(log: &LogPanel) -> Vec<String> {
        log.entries().map(|e| e.message.clone()).collect()
    }

    #[test]
    fn process_with_empty_input_logs_one_error_and_launches_nothing() {
        let mut ctl = controller();
        ctl.main_log.info("stale line");
        let mut launcher = RecordingLauncher::default();

        let res = ctl.process_video(&mut launcher);

        assert!(matches!(res, Err(ControlError::MissingInput { field: "inputVideo" })));
        assert!(launcher.launched.is_empty());
        assert_eq!(ctl.main_log.len(), 1);
        let entry = ctl.main_log.entries().next().unwrap();
        assert_eq!(entry.severity, Severity::Error);
        assert_eq!(entry.message, "Please select input video");
    }

    #[test]
    fn process_echoes_parameters_then_launches() {
        let mut ctl = controller();
        ctl.form.input_video  = "clip.mp4".into();
        ctl.form.output_video = "out.mp4".into();
        ctl.form.provider     = Provider::ComfyUi;
        let mut launcher = RecordingLauncher::default();

        ctl.process_video(&mut launcher).unwrap();

        assert_eq!(messages(&ctl.main_log), [
            "Starting video processing...",
            "Input: clip.mp4",
            "Output: out.mp4",
            "Provider: comfyui",
            "FPS: 24",
            "Codec: libx264",
        ]);
        assert!(ctl.main_log.entries().all(|e| e.severity == Severity::Info));
        assert_eq!(launcher.launched.len(), 1);
        assert_eq!(launcher.launched[0].input, "clip.mp4");
    }

    #[test]
    fn stage_events_append_announcements() {
        let mut ctl = controller();
        let run = Uuid::new_v4();
        for (_, stage) in PipelineTiming::default().schedule() {
            ctl.apply_pipeline_event(PipelineEvent { run, stage });
        }
        assert_eq!(messages(&ctl.main_log), [
            "Extracting frames...",
            "Processing frames...",
            "Re-encoding video...",
            "Process complete!",
        ]);
        let severities: Vec<_> = ctl.main_log.entries().map(|e| e.severity).collect();
        assert_eq!(severities.last(), Some(&Severity::Success));
        assert_eq!(severities.iter().filter(|s| **s == Severity::Success).count(), 1);

        ctl.apply_pipeline_event(PipelineEvent { run, stage: PipelineStage::Idle });
        assert_eq!(ctl.main_log.len(), 4);
    }

    #[test]
    fn batch_requires_input_folder() {
        let mut ctl = controller();
        assert!(ctl.process_batch().is_err());
        assert_eq!(messages(&ctl.batch_log), ["Please select input folder"]);
        assert!(ctl.main_log.is_empty());
    }

    #[test]
    fn batch_logs_parameters_and_replaces_previous_output() {
        let mut ctl = controller();
        ctl.batch_log.info("old");
        ctl.form.batch_input    = "/in".into();
        ctl.form.batch_output   = "/out".into();
        ctl.form.batch_provider = Provider::Midjourney;
        ctl.process_batch().unwrap();
        assert_eq!(messages(&ctl.batch_log), [
            "Starting batch processing...",
            "Input: /in",
            "Output: /out",
            "Provider: midjourney",
        ]);
    }

    #[test]
    fn pickers_fill_fields_only_on_selection() {
        let mut ctl = controller();
        ctl.select_file(&CannedPicker(None));
        assert_eq!(ctl.form.input_video, "");

        ctl.select_file(&CannedPicker(Some(PathBuf::from("clip.mp4"))));
        assert_eq!(ctl.form.input_video, "clip.mp4");

        ctl.select_folder(FolderTarget::Output, &CannedPicker(Some(PathBuf::from("renders"))));
        assert_eq!(ctl.form.batch_output, "renders");
        assert_eq!(ctl.form.batch_input, "");

        ctl.select_folder(FolderTarget::Input, &CannedPicker(Some(PathBuf::from("frames"))));
        assert_eq!(ctl.form.batch_input, "frames");
    }

    #[test]
    fn empty_api_key_is_not_saved() {
        let mut ctl = controller();
        assert!(!ctl.save_grok_key().unwrap());
        assert!(ctl.notice.is_none());
        assert_eq!(ctl.settings().get(SettingKey::GrokKey), None);

        ctl.form.mj_key = "mj-1".into();
        assert!(ctl.save_mj_key().unwrap());
        assert_eq!(ctl.settings().get(SettingKey::MidjourneyKey).as_deref(), Some("mj-1"));
        assert_eq!(ctl.notice, Some(Notice::info("Midjourney API Key saved locally")));
    }

    #[test]
    fn comfyui_server_saves_even_when_empty() {
        let mut ctl = controller();
        ctl.form.comfyui_server.clear();
        ctl.save_comfyui_server().unwrap();
        assert_eq!(ctl.settings().get(SettingKey::ComfyUiServer).as_deref(), Some(""));
        assert_eq!(ctl.notice, Some(Notice::info("ComfyUI server saved")));
    }

    #[test]
    fn saved_defaults_apply_now_and_after_reload() {
        let mut ctl = controller();
        ctl.form.default_fps   = "30".into();
        ctl.form.default_codec = "libx265".into();
        ctl.save_defaults().unwrap();
        assert_eq!(ctl.form.fps, "30");
        assert_eq!(ctl.form.codec, "libx265");

        let mut reloaded = Controller::new(ctl.into_settings());
        assert_eq!(reloaded.form.fps, DEFAULT_FPS);
        reloaded.load();
        assert_eq!(reloaded.form.fps, "30");
        assert_eq!(reloaded.form.codec, "libx265");
        assert_eq!(reloaded.form.default_codec, "libx265");
    }

    #[test]
    fn empty_defaults_do_not_overwrite_saved_values() {
        let mut ctl = controller();
        ctl.form.default_fps = "60".into();
        ctl.save_defaults().unwrap();

        ctl.form.default_fps.clear();
        ctl.form.default_codec.clear();
        ctl.save_defaults().unwrap();
        assert_eq!(ctl.form.fps, "60");
        assert_eq!(ctl.form.codec, DEFAULT_CODEC);

        let mut reloaded = Controller::new(ctl.into_settings());
        reloaded.load();
        assert_eq!(reloaded.form.fps, "60");
        assert_eq!(reloaded.form.codec, DEFAULT_CODEC);
    }

    #[test]
    fn load_runs_status_check() {
        let mut store = MemoryStore::new();
        store.set(SettingKey::GrokKey, "k").unwrap();
        let mut ctl = Controller::new(Box::new(store));
        ctl.load();
        assert_eq!(ctl.status.get(StatusKey::Grok).unwrap().text, "Configured");
        assert_eq!(ctl.status.get(StatusKey::Midjourney).unwrap().text, "Not configured");
    }

    #[test]
    fn status_reflects_key_saved_after_load() {
        let mut ctl = controller();
        ctl.load();
        ctl.form.grok_key = "xai".into();
        ctl.save_grok_key().unwrap();
        ctl.check_status();
        assert_eq!(ctl.status.get(StatusKey::Grok).unwrap().text, "Configured");
    }

    #[test]
    fn bounded_controller_caps_both_logs() {
        let mut ctl = controller().with_log_capacity(2);
        for i in 0..3 {
            ctl.main_log.info(format!("{i}"));
            ctl.batch_log.info(format!("{i}"));
        }
        assert_eq!(ctl.main_log.len(), 2);
        assert_eq!(ctl.batch_log.len(), 2);
    }
}
