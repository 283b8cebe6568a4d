// crates/frameforge-core/src/status.rs
//
// Subsystem status board. Every entry here is simulated: the tool, runtime
// and version rows are fixed strings, the API key rows only look at whether
// a key is stored, and ComfyUI is never actually probed (it stays at
// "Checking..." until a real health check exists).

use chrono::NaiveTime;

use crate::helpers::time::now;
use crate::settings::{SettingKey, SettingsRepository};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKey {
    PowerShell,
    Ffmpeg,
    Python,
    Grok,
    Midjourney,
    ComfyUi,
}

impl StatusKey {
    pub const ALL: [StatusKey; 6] = [
        StatusKey::PowerShell,
        StatusKey::Ffmpeg,
        StatusKey::Python,
        StatusKey::Grok,
        StatusKey::Midjourney,
        StatusKey::ComfyUi,
    ];

    pub fn id(self) -> &'static str {
        match self {
            StatusKey::PowerShell => "statusPS",
            StatusKey::Ffmpeg     => "statusFFmpeg",
            StatusKey::Python     => "statusPython",
            StatusKey::Grok       => "statusGrok",
            StatusKey::Midjourney => "statusMJ",
            StatusKey::ComfyUi    => "statusComfyUI",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusKey::PowerShell => "PowerShell",
            StatusKey::Ffmpeg     => "FFmpeg",
            StatusKey::Python     => "Python",
            StatusKey::Grok       => "Grok API",
            StatusKey::Midjourney => "Midjourney API",
            StatusKey::ComfyUi    => "ComfyUI",
        }
    }

    fn index(self) -> usize {
        StatusKey::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Ok,
    Warning,
    /// The check started but never resolves.
    Pending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusValue {
    pub text:  String,
    pub level: StatusLevel,
}

impl StatusValue {
    fn new(text: &str, level: StatusLevel) -> Self {
        Self { text: text.into(), level }
    }
}

#[derive(Debug, Default, Clone)]
pub struct StatusBoard {
    values:     [Option<StatusValue>; 6],
    checked_at: Option<NaiveTime>,
}

impl StatusBoard {
    /// Rewrite every entry. Key rows reflect the store at call time.
    pub fn check(&mut self, store: &dyn SettingsRepository) {
        self.put(StatusKey::PowerShell, StatusValue::new("Available", StatusLevel::Ok));
        self.put(StatusKey::Ffmpeg,     StatusValue::new("v8.0.1", StatusLevel::Ok));
        self.put(StatusKey::Python,     StatusValue::new("v3.12", StatusLevel::Ok));

        self.put(StatusKey::Grok,       configured(store, SettingKey::GrokKey));
        self.put(StatusKey::Midjourney, configured(store, SettingKey::MidjourneyKey));

        self.put(StatusKey::ComfyUi,    StatusValue::new("Checking...", StatusLevel::Pending));

        self.checked_at = Some(now());
        tracing::debug!("status board refreshed");
    }

    pub fn get(&self, key: StatusKey) -> Option<&StatusValue> {
        self.values[key.index()].as_ref()
    }

    pub fn checked_at(&self) -> Option<NaiveTime> {
        self.checked_at
    }

    fn put(&mut self, key: StatusKey, value: StatusValue) {
        self.values[key.index()] = Some(value);
    }
}

fn configured(store: &dyn SettingsRepository, key: SettingKey) -> StatusValue {
    if store.get_non_empty(key).is_some() {
        StatusValue::new("Configured", StatusLevel::Ok)
    } else {
        StatusValue::new("Not configured", StatusLevel::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;

    #[test]
    fn unchecked_board_is_blank() {
        let board = StatusBoard::default();
        assert!(StatusKey::ALL.iter().all(|k| board.get(*k).is_none()));
        assert!(board.checked_at().is_none());
    }

    #[test]
    fn grok_configured_iff_non_empty_key_stored() {
        let mut store = MemoryStore::new();
        let mut board = StatusBoard::default();

        board.check(&store);
        assert_eq!(board.get(StatusKey::Grok).unwrap().text, "Not configured");

        store.set(SettingKey::GrokKey, "").unwrap();
        board.check(&store);
        assert_eq!(board.get(StatusKey::Grok).unwrap().level, StatusLevel::Warning);

        store.set(SettingKey::GrokKey, "xai-key").unwrap();
        board.check(&store);
        let grok = board.get(StatusKey::Grok).unwrap();
        assert_eq!(grok.text, "Configured");
        assert_eq!(grok.level, StatusLevel::Ok);
        // Midjourney is independent of the Grok key.
        assert_eq!(board.get(StatusKey::Midjourney).unwrap().text, "Not configured");
    }

    #[test]
    fn fixed_rows_and_pending_comfyui() {
        let mut board = StatusBoard::default();
        board.check(&MemoryStore::new());
        assert_eq!(board.get(StatusKey::Ffmpeg).unwrap().text, "v8.0.1");
        assert_eq!(board.get(StatusKey::Python).unwrap().text, "v3.12");
        assert_eq!(board.get(StatusKey::PowerShell).unwrap().level, StatusLevel::Ok);
        let comfy = board.get(StatusKey::ComfyUi).unwrap();
        assert_eq!(comfy.text, "Checking...");
        assert_eq!(comfy.level, StatusLevel::Pending);
        assert!(board.checked_at().is_some());
    }

    #[test]
    fn ids_match_status_fields() {
        assert_eq!(StatusKey::Grok.id(), "statusGrok");
        assert_eq!(StatusKey::ComfyUi.id(), "statusComfyUI");
    }
}
