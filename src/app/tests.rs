use std::path::{Path, PathBuf};

use tempfile::tempdir;

use crate::editor::Direction;

use super::{Document, Message, Model, Prompt, PromptKind, dispatch, update};

fn untitled_model() -> Model {
    Model::new((80, 24))
}

fn model_with_file(path: &Path, text: &str) -> Model {
    let mut model = Model::new((80, 24));
    model.document = Document::from_file(path.to_path_buf(), text);
    model
}

fn type_prompt(model: &mut Model, text: &str) {
    for ch in text.chars() {
        dispatch(model, Message::PromptInput(ch));
    }
}

// --- Text edits set the dirty flag ---

#[test]
fn test_insert_sets_dirty() {
    let model = model_with_file(Path::new("test.txt"), "hello");
    assert!(!model.document.is_dirty());
    let model = update(model, Message::Insert('x'));
    assert!(model.document.is_dirty());
}

#[test]
fn test_every_edit_message_sets_dirty() {
    for msg in [
        Message::Insert('a'),
        Message::InsertNewline,
        Message::DeleteForward,
    ] {
        let model = model_with_file(Path::new("test.txt"), "hello");
        let model = update(model, msg.clone());
        assert!(model.document.is_dirty(), "{msg:?} should set dirty");
    }
    // Backspace needs a cursor past the origin to delete anything.
    let mut model = model_with_file(Path::new("test.txt"), "hello");
    model.document.buffer.move_line_end();
    let model = update(model, Message::DeleteBack);
    assert!(model.document.is_dirty());
}

#[test]
fn test_cursor_movement_does_not_dirty() {
    let model = model_with_file(Path::new("test.txt"), "hello\nworld");
    let model = update(model, Message::Move(Direction::Down));
    let model = update(model, Message::MoveLineEnd);
    let model = update(model, Message::MoveWordLeft);
    assert!(!model.document.is_dirty());
}

// --- Open file ---

#[test]
fn test_open_file_via_prompt_loads_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, "alpha\nbeta\n").unwrap();

    let mut model = untitled_model();
    dispatch(&mut model, Message::OpenFilePrompt);
    type_prompt(&mut model, &path.display().to_string());
    dispatch(&mut model, Message::PromptSubmit);

    assert_eq!(model.document.path.as_deref(), Some(path.as_path()));
    assert_eq!(model.document.buffer.contents(), "alpha\nbeta\n");
    assert!(!model.document.is_dirty());
    assert!(model.prompt.is_none());
}

#[test]
fn test_open_missing_file_leaves_model_unchanged() {
    let dir = tempdir().unwrap();
    let mut model = model_with_file(Path::new("current.txt"), "kept");
    model.document.buffer.move_doc_end();
    model.document.buffer.insert_char('!');

    dispatch(&mut model, Message::OpenFilePrompt);
    type_prompt(&mut model, &dir.path().join("nope.txt").display().to_string());
    dispatch(&mut model, Message::PromptSubmit);

    assert_eq!(model.document.path.as_deref(), Some(Path::new("current.txt")));
    assert_eq!(model.document.buffer.contents(), "kept!");
    assert!(model.document.is_dirty());
}

#[test]
fn test_open_directory_path_leaves_model_unchanged() {
    let dir = tempdir().unwrap();
    let mut model = model_with_file(Path::new("current.txt"), "kept");

    dispatch(&mut model, Message::OpenFilePrompt);
    type_prompt(&mut model, &dir.path().display().to_string());
    dispatch(&mut model, Message::PromptSubmit);

    assert_eq!(model.document.buffer.contents(), "kept");
    assert_eq!(model.document.path.as_deref(), Some(Path::new("current.txt")));
}

#[test]
fn test_prompt_cancel_discards_input() {
    let mut model = untitled_model();
    dispatch(&mut model, Message::OpenFilePrompt);
    type_prompt(&mut model, "/somewhere");
    dispatch(&mut model, Message::PromptCancel);
    assert!(model.prompt.is_none());
    assert!(model.document.path.is_none());
}

#[test]
fn test_prompt_empty_submit_is_cancellation() {
    let mut model = untitled_model();
    dispatch(&mut model, Message::OpenFilePrompt);
    dispatch(&mut model, Message::PromptSubmit);
    assert!(model.prompt.is_none());
    assert!(model.document.path.is_none());
    assert!(model.sidebar_entries.is_empty());
}

#[test]
fn test_prompt_backspace_edits_input() {
    let mut model = untitled_model();
    dispatch(&mut model, Message::OpenFilePrompt);
    type_prompt(&mut model, "ab");
    dispatch(&mut model, Message::PromptBackspace);
    assert_eq!(
        model.prompt,
        Some(Prompt {
            kind: PromptKind::OpenFile,
            input: "a".to_string()
        })
    );
}

// --- Save ---

#[test]
fn test_save_writes_and_clears_dirty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, "old").unwrap();

    let mut model = model_with_file(&path, "old");
    model.document.buffer.move_doc_end();
    model.document.buffer.insert_char('!');
    assert!(model.document.can_save());

    dispatch(&mut model, Message::Save);

    assert!(!model.document.is_dirty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "old!");
}

#[test]
fn test_save_then_reopen_yields_written_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, "one").unwrap();

    let mut model = model_with_file(&path, "one");
    model.document.buffer.move_doc_end();
    model.document.buffer.insert_char('!');
    dispatch(&mut model, Message::Save);

    dispatch(&mut model, Message::OpenFilePrompt);
    type_prompt(&mut model, &path.display().to_string());
    dispatch(&mut model, Message::PromptSubmit);

    assert_eq!(model.document.buffer.contents(), "one!");
    assert!(!model.document.is_dirty());
}

#[test]
fn test_save_without_path_is_noop() {
    let mut model = untitled_model();
    model.document.buffer.insert_char('x');
    dispatch(&mut model, Message::Save);
    assert!(model.document.is_dirty());
    assert!(model.document.path.is_none());
}

#[test]
fn test_save_clean_document_performs_no_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, "loaded").unwrap();
    let mut model = model_with_file(&path, "loaded");

    // Simulate an external change; a no-op save must not clobber it.
    std::fs::write(&path, "changed externally").unwrap();
    dispatch(&mut model, Message::Save);

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "changed externally"
    );
}

#[test]
fn test_save_failure_keeps_dirty() {
    let dir = tempdir().unwrap();
    // The path never existed, and plain save refuses to create files.
    let path = dir.path().join("ghost.txt");
    let mut model = model_with_file(&path, "");
    model.document.buffer.insert_char('x');

    dispatch(&mut model, Message::Save);

    assert!(model.document.is_dirty());
    assert!(!path.exists());
}

// --- Save as ---

#[test]
fn test_save_as_creates_file_adopts_path_and_clears_dirty() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("new.txt");

    let mut model = untitled_model();
    model.document.buffer.insert_char('h');
    model.document.buffer.insert_char('i');

    dispatch(&mut model, Message::SaveAsPrompt);
    assert!(model.prompt.is_some());
    type_prompt(&mut model, &dest.display().to_string());
    dispatch(&mut model, Message::PromptSubmit);

    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "hi");
    assert_eq!(model.document.path.as_deref(), Some(dest.as_path()));
    assert!(!model.document.is_dirty());
}

#[test]
fn test_save_as_on_clean_buffer_is_noop() {
    let mut model = model_with_file(Path::new("doc.txt"), "content");
    dispatch(&mut model, Message::SaveAsPrompt);
    assert!(model.prompt.is_none());
}

#[test]
fn test_save_as_cancel_keeps_document_untouched() {
    let mut model = untitled_model();
    model.document.buffer.insert_char('x');
    dispatch(&mut model, Message::SaveAsPrompt);
    type_prompt(&mut model, "/tmp/whatever.txt");
    dispatch(&mut model, Message::PromptCancel);
    assert!(model.document.is_dirty());
    assert!(model.document.path.is_none());
}

// --- Open folder and sidebar ---

#[test]
fn test_open_folder_lists_enumeration_order() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "alpha").unwrap();
    std::fs::write(dir.path().join("b.txt"), "beta").unwrap();

    let expected: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();

    let mut model = untitled_model();
    dispatch(&mut model, Message::OpenFolderPrompt);
    type_prompt(&mut model, &dir.path().display().to_string());
    dispatch(&mut model, Message::PromptSubmit);

    assert!(model.sidebar_visible);
    assert_eq!(model.sidebar_entries, expected);
    assert_eq!(model.sidebar_dir.as_deref(), Some(dir.path()));
    // Listing a folder does not touch the document.
    assert!(model.document.path.is_none());
    assert!(!model.document.is_dirty());
}

#[test]
fn test_open_missing_folder_keeps_sidebar_unchanged() {
    let dir = tempdir().unwrap();
    let mut model = untitled_model();
    dispatch(&mut model, Message::OpenFolderPrompt);
    type_prompt(&mut model, &dir.path().join("nope").display().to_string());
    dispatch(&mut model, Message::PromptSubmit);
    assert!(!model.sidebar_visible);
    assert!(model.sidebar_entries.is_empty());
}

#[test]
fn test_select_entry_opens_its_file() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "alpha").unwrap();
    std::fs::write(dir.path().join("b.txt"), "beta").unwrap();

    let mut model = untitled_model();
    dispatch(&mut model, Message::OpenFolderPrompt);
    type_prompt(&mut model, &dir.path().display().to_string());
    dispatch(&mut model, Message::PromptSubmit);

    let idx = model
        .sidebar_entries
        .iter()
        .position(|name| name == "b.txt")
        .unwrap();
    dispatch(&mut model, Message::SidebarClick(idx));

    assert_eq!(model.document.buffer.contents(), "beta");
    assert_eq!(
        model.document.path.as_deref(),
        Some(dir.path().join("b.txt").as_path())
    );
    assert!(!model.document.is_dirty());
}

#[test]
fn test_select_directory_entry_keeps_document() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let mut model = model_with_file(Path::new("current.txt"), "kept");
    dispatch(&mut model, Message::OpenFolderPrompt);
    type_prompt(&mut model, &dir.path().display().to_string());
    dispatch(&mut model, Message::PromptSubmit);

    let idx = model
        .sidebar_entries
        .iter()
        .position(|name| name == "sub")
        .unwrap();
    dispatch(&mut model, Message::SidebarClick(idx));

    assert_eq!(model.document.buffer.contents(), "kept");
    assert_eq!(model.document.path.as_deref(), Some(Path::new("current.txt")));
}

#[test]
fn test_sidebar_selection_moves_and_clamps() {
    let mut model = untitled_model();
    model.show_listing(
        PathBuf::from("/docs"),
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
    );
    assert_eq!(model.sidebar_selected, Some(0));

    let mut model = update(model, Message::SidebarDown);
    assert_eq!(model.sidebar_selected, Some(1));
    model = update(model, Message::SidebarDown);
    model = update(model, Message::SidebarDown);
    assert_eq!(model.sidebar_selected, Some(2));

    model = update(model, Message::SidebarUp);
    model = update(model, Message::SidebarUp);
    model = update(model, Message::SidebarUp);
    assert_eq!(model.sidebar_selected, Some(0));
}

#[test]
fn test_toggle_sidebar_populates_parent_listing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, "text").unwrap();

    let mut model = model_with_file(&path, "text");
    dispatch(&mut model, Message::ToggleSidebar);

    assert!(model.sidebar_visible);
    assert_eq!(model.sidebar_dir.as_deref(), Some(dir.path()));
    assert!(model.sidebar_entries.iter().any(|name| name == "doc.txt"));
}

#[test]
fn test_toggle_sidebar_off_keeps_listing_for_next_time() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "x").unwrap();

    let mut model = untitled_model();
    dispatch(&mut model, Message::OpenFolderPrompt);
    type_prompt(&mut model, &dir.path().display().to_string());
    dispatch(&mut model, Message::PromptSubmit);

    dispatch(&mut model, Message::ToggleSidebar);
    assert!(!model.sidebar_visible);
    assert!(!model.sidebar_entries.is_empty());
}

#[test]
fn test_switch_focus_requires_visible_sidebar() {
    let model = untitled_model();
    let model = update(model, Message::SwitchFocus);
    assert!(!model.sidebar_focused);

    let mut model = untitled_model();
    model.sidebar_visible = true;
    let model = update(model, Message::SwitchFocus);
    assert!(model.sidebar_focused);
}

// --- Quit confirmation ---

#[test]
fn test_quit_clean_is_immediate() {
    let model = untitled_model();
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_quit_dirty_requires_second_press() {
    let mut model = untitled_model();
    model.document.buffer.insert_char('x');

    let model = update(model, Message::Quit);
    assert!(!model.should_quit);
    assert!(model.quit_confirmed);
    assert!(model.active_notice().is_some());

    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_quit_confirmation_resets_on_other_message() {
    let mut model = untitled_model();
    model.document.buffer.insert_char('x');

    let model = update(model, Message::Quit);
    let model = update(model, Message::Move(Direction::Left));
    assert!(!model.quit_confirmed);

    let model = update(model, Message::Quit);
    assert!(!model.should_quit);
}

// --- Viewport ---

#[test]
fn test_scroll_down_clamps_to_last_line() {
    let mut model = model_with_file(Path::new("t.txt"), "a\nb\nc");
    model = update(model, Message::ScrollDown(10));
    assert_eq!(model.scroll_offset, 2);
    model = update(model, Message::ScrollUp(1));
    assert_eq!(model.scroll_offset, 1);
}

#[test]
fn test_typing_past_viewport_bottom_scrolls() {
    let text = "x\n".repeat(40);
    let mut model = model_with_file(Path::new("t.txt"), &text);
    model.height = 10;
    model.document.buffer.move_doc_end();
    let model = update(model, Message::Insert('y'));
    assert!(model.scroll_offset > 0);
    let cursor_line = model.document.buffer.cursor().line;
    assert!(cursor_line >= model.scroll_offset);
    assert!(cursor_line < model.scroll_offset + model.editor_rows());
}

#[test]
fn test_page_down_moves_cursor_with_viewport() {
    let text = "line\n".repeat(100);
    let mut model = model_with_file(Path::new("t.txt"), &text);
    model.height = 20;
    let model = update(model, Message::PageDown);
    assert!(model.scroll_offset > 0);
    assert!(model.document.buffer.cursor().line > 0);
}

#[test]
fn test_resize_clamps_scroll() {
    let mut model = model_with_file(Path::new("t.txt"), "a\nb");
    model.scroll_offset = 1;
    let model = update(model, Message::Resize(100, 40));
    assert_eq!(model.width, 100);
    assert_eq!(model.height, 40);
    assert!(model.scroll_offset <= 1);
}

// --- Help overlay ---

#[test]
fn test_help_toggle_and_hide() {
    let model = untitled_model();
    let model = update(model, Message::ToggleHelp);
    assert!(model.help_visible);
    let model = update(model, Message::HideHelp);
    assert!(!model.help_visible);
}
