// crates/frameforge-core/src/form.rs
//
// Every editable field on the panel. The UI binds text edits and combo boxes
// straight to these strings; actions read them through the Controller.

use std::fmt;

pub const DEFAULT_FPS:            &str = "24";
pub const DEFAULT_CODEC:          &str = "libx264";
pub const DEFAULT_COMFYUI_SERVER: &str = "http://localhost:8188";

/// Codecs offered in the codec pickers. Any string is accepted.
pub const CODECS: &[&str] = &["libx264", "libx265", "libvpx-vp9", "prores_ks"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Grok,
    Midjourney,
    ComfyUi,
    Claude,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::Grok,
        Provider::Midjourney,
        Provider::ComfyUi,
        Provider::Claude,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Grok       => "grok",
            Provider::Midjourney => "midjourney",
            Provider::ComfyUi    => "comfyui",
            Provider::Claude     => "claude",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Provider::Grok       => "Grok",
            Provider::Midjourney => "Midjourney",
            Provider::ComfyUi    => "ComfyUI",
            Provider::Claude     => "Claude",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which batch field a folder pick fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FolderTarget {
    Input,
    Output,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    // ── Process tab ──────────────────────────────────────────────────────────
    pub input_video:    String,
    pub output_video:   String,
    pub provider:       Provider,
    pub fps:            String,
    pub codec:          String,

    // ── Batch tab ────────────────────────────────────────────────────────────
    pub batch_input:    String,
    pub batch_output:   String,
    pub batch_provider: Provider,

    // ── Settings tab ─────────────────────────────────────────────────────────
    pub grok_key:       String,
    pub mj_key:         String,
    pub comfyui_server: String,
    pub default_fps:    String,
    pub default_codec:  String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            input_video:    String::new(),
            output_video:   String::new(),
            provider:       Provider::default(),
            fps:            DEFAULT_FPS.into(),
            codec:          DEFAULT_CODEC.into(),

            batch_input:    String::new(),
            batch_output:   String::new(),
            batch_provider: Provider::default(),

            grok_key:       String::new(),
            mj_key:         String::new(),
            comfyui_server: DEFAULT_COMFYUI_SERVER.into(),
            default_fps:    DEFAULT_FPS.into(),
            default_codec:  DEFAULT_CODEC.into(),
        }
    }
}
