// src/picker.rs
// Native dialogs for the Browse buttons.

use std::path::PathBuf;

use frameforge_core::picker::PathPicker;
use rfd::FileDialog;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "mov", "avi", "webm"];

#[derive(Default)]
pub struct RfdPicker;

impl PathPicker for RfdPicker {
    fn pick_file(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Select input video")
            .add_filter("Video", VIDEO_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
    }

    fn pick_folder(&self) -> Option<PathBuf> {
        FileDialog::new().set_title("Select folder").pick_folder()
    }
}
