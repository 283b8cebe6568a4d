// src/paths.rs
// Single source of truth for where FrameForge keeps its files.

use std::path::PathBuf;

/// Overrides the settings file location when set.
pub const SETTINGS_ENV: &str = "FRAMEFORGE_SETTINGS";

/// `$FRAMEFORGE_SETTINGS`, else `<config dir>/frameforge/settings.json`
/// (`%APPDATA%` on Windows, `~/.config` on Linux).
pub fn settings_file() -> PathBuf {
    if let Some(p) = std::env::var_os(SETTINGS_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(p);
    }
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("frameforge")
        .join("settings.json")
}

/// Append-only diagnostics log in the OS temp directory. GUI-subsystem
/// launches have no console, so tracing output goes here.
pub fn log_file() -> PathBuf {
    std::env::temp_dir().join("frameforge.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_env_overrides_default_location() {
        std::env::set_var(SETTINGS_ENV, "/tmp/ff-test/settings.json");
        assert_eq!(settings_file(), PathBuf::from("/tmp/ff-test/settings.json"));

        std::env::set_var(SETTINGS_ENV, "");
        assert!(settings_file().ends_with("frameforge/settings.json"));
        std::env::remove_var(SETTINGS_ENV);
    }

    #[test]
    fn log_file_lives_in_temp_dir() {
        assert!(log_file().starts_with(std::env::temp_dir()));
    }
}
