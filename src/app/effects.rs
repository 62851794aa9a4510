//! Per-message side effects.
//!
//! Everything that touches the file system lives here, keyed on the message
//! that triggered it; the pure transition has already run. Errors are
//! logged and swallowed at the triggering action - the model is left
//! unchanged and the application carries on.

use std::path::{Path, PathBuf};

use crate::app::model::PromptKind;
use crate::app::{Message, Model};
use crate::files;

/// Resolve the side effects of a message against the model.
pub(super) fn apply(model: &mut Model, msg: &Message) {
    match msg {
        Message::Save => save(model),
        Message::PromptSubmit => submit_prompt(model),
        Message::SidebarSelect => {
            if let Some(sel) = model.sidebar_selected {
                open_entry(model, sel);
            }
        }
        Message::SidebarClick(idx) => open_entry(model, *idx),
        Message::ToggleSidebar => {
            if model.sidebar_visible && model.sidebar_dir.is_none() {
                populate_default_listing(model);
            }
        }
        _ => {}
    }
}

/// Write the buffer back to its file. No-op unless there are unsaved
/// changes and a path is known.
fn save(model: &mut Model) {
    if !model.document.can_save() {
        return;
    }
    let Some(path) = model.document.path.clone() else {
        return;
    };
    match files::write_file(&path, &model.document.buffer.contents()) {
        Ok(()) => {
            model.document.buffer.mark_clean();
            tracing::info!(path = %path.display(), "file saved");
        }
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "save failed");
        }
    }
}

/// Resolve the active prompt. An empty input counts as a cancellation,
/// same as Esc.
fn submit_prompt(model: &mut Model) {
    let Some(prompt) = model.prompt.take() else {
        return;
    };
    let input = prompt.input.trim();
    if input.is_empty() {
        return;
    }
    let path = PathBuf::from(input);
    match prompt.kind {
        PromptKind::OpenFile => open_file(model, &path),
        PromptKind::OpenFolder => open_folder(model, &path),
        PromptKind::SaveAs => save_as(model, path),
    }
}

fn open_file(model: &mut Model, path: &Path) {
    match files::read_file(path) {
        Ok(text) => {
            model.open_document(path.to_path_buf(), &text);
            tracing::info!(path = %path.display(), "file opened");
        }
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "open failed");
        }
    }
}

fn open_folder(model: &mut Model, path: &Path) {
    match files::list_entries(path) {
        Ok(entries) => {
            tracing::info!(path = %path.display(), count = entries.len(), "folder opened");
            model.show_listing(path.to_path_buf(), entries);
        }
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "folder listing failed");
        }
    }
}

/// Save-as writes to the chosen destination (creating it if needed),
/// adopts it as the document path, and clears the dirty flag.
fn save_as(model: &mut Model, path: PathBuf) {
    if !model.document.is_dirty() {
        return;
    }
    match files::write_file_create(&path, &model.document.buffer.contents()) {
        Ok(()) => {
            model.document.path = Some(path.clone());
            model.document.buffer.mark_clean();
            tracing::info!(path = %path.display(), "file saved as");
        }
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "save as failed");
        }
    }
}

/// Open a sidebar entry by index. A subdirectory entry fails inside
/// [`files::read_file`] with a distinct error instead of being read.
fn open_entry(model: &mut Model, idx: usize) {
    let Some(dir) = model.sidebar_dir.clone() else {
        return;
    };
    let Some(name) = model.sidebar_entries.get(idx).cloned() else {
        return;
    };
    open_file(model, &dir.join(name));
}

/// First sidebar toggle with no listing yet: show the current file's
/// directory, or the working directory for an untitled document.
fn populate_default_listing(model: &mut Model) {
    let dir = model
        .document
        .path
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    open_folder(model, &dir);
}
