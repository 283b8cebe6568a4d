// crates/frameforge-core/src/commands.rs
//
// Every user action on the panel is a ControlCommand. Panels emit these
// during the UI pass; app.rs applies them afterwards.

use crate::form::FolderTarget;
use crate::tabs::Tab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCommand {
    // ── Navigation ───────────────────────────────────────────────────────────
    /// `origin` is the tab button that was clicked, if any.
    SwitchTab { tab: Tab, origin: Option<Tab> },

    // ── Pickers ──────────────────────────────────────────────────────────────
    SelectFile,
    SelectFolder(FolderTarget),

    // ── Processing ───────────────────────────────────────────────────────────
    ProcessVideo,
    ProcessBatch,
    ClearLog,
    ClearBatchLog,

    // ── Settings ─────────────────────────────────────────────────────────────
    SaveGrokKey,
    SaveMidjourneyKey,
    SaveComfyUiServer,
    SaveDefaults,

    // ── Status ───────────────────────────────────────────────────────────────
    CheckStatus,
    DismissNotice,
}
