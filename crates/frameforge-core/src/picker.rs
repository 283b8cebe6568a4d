// crates/frameforge-core/src/picker.rs

use std::path::PathBuf;

/// Native file/folder chooser. `None` means the user made no selection.
///
/// frameforge-ui implements this with rfd dialogs; tests use a canned picker.
pub trait PathPicker {
    fn pick_file(&self) -> Option<PathBuf>;
    fn pick_folder(&self) -> Option<PathBuf>;
}
