use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::app::{App, Message, Model, ToastLevel};

impl App {
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        if let Message::Save = msg {
            Self::save(model);
        }
    }

    fn save(model: &mut Model) {
        match save_buffer(&model.file_path, &model.buffer.text()) {
            Ok(()) => {
                model.buffer.mark_clean();
                model.quit_confirmed = false;
                tracing::info!(path = %model.file_path.display(), "saved");
                model.show_toast(ToastLevel::Info, "Saved");
            }
            Err(err) => {
                tracing::error!(path = %model.file_path.display(), error = %format!("{err:#}"), "save failed");
                model.show_toast(ToastLevel::Error, format!("Save failed: {err:#}"));
            }
        }
    }
}

/// Write `text` to `path` through a sibling temp file and a rename.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed over `path`.
pub fn save_buffer(path: &Path, text: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Not a file path: {}", path.display()))?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".mdbar-tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, text)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err).with_context(|| format!("Failed to replace {}", path.display()));
    }
    Ok(())
}
