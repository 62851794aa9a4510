use crate::app::Model;
use crate::app::model::{Prompt, PromptKind};
use crate::editor::Direction;

/// All possible events and actions in the application.
///
/// These represent user input and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Text editing
    /// Insert a character at the cursor
    Insert(char),
    /// Split the line at the cursor (Enter)
    InsertNewline,
    /// Delete the character before the cursor (Backspace)
    DeleteBack,
    /// Delete the character at the cursor (Delete)
    DeleteForward,

    // Cursor
    /// Move the cursor one cell in a direction
    Move(Direction),
    /// Move to the beginning of the line (Home)
    MoveLineStart,
    /// Move to the end of the line (End)
    MoveLineEnd,
    /// Move one word left (Ctrl+Left)
    MoveWordLeft,
    /// Move one word right (Ctrl+Right)
    MoveWordRight,
    /// Move to the start of the buffer (Ctrl+Home)
    MoveDocStart,
    /// Move to the end of the buffer (Ctrl+End)
    MoveDocEnd,
    /// Move to an absolute position (line, col), e.g. from a mouse click
    MoveTo(usize, usize),

    // Viewport
    /// Scroll the editor up by n lines
    ScrollUp(usize),
    /// Scroll the editor down by n lines
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,

    // Sidebar
    /// Toggle sidebar visibility (listing populated in effects)
    ToggleSidebar,
    /// Move sidebar selection up
    SidebarUp,
    /// Move sidebar selection down
    SidebarDown,
    /// Open the selected sidebar entry (effect)
    SidebarSelect,
    /// Select and open a sidebar entry by index (effect)
    SidebarClick(usize),
    /// Switch focus between sidebar and editor
    SwitchFocus,

    // File commands
    /// Open the open-file prompt
    OpenFilePrompt,
    /// Open the open-folder prompt
    OpenFolderPrompt,
    /// Save the document to its path (effect; gated on dirty + path)
    Save,
    /// Open the save-as prompt (gated on dirty)
    SaveAsPrompt,
    /// Append a character to the active prompt
    PromptInput(char),
    /// Delete the last character of the active prompt
    PromptBackspace,
    /// Resolve the active prompt with its input (effect)
    PromptSubmit,
    /// Cancel the active prompt
    PromptCancel,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects occur in this function; file I/O is resolved in the
/// per-message effects handler.
pub fn update(mut model: Model, msg: Message) -> Model {
    // A pending quit confirmation survives only an immediate second Quit.
    if !matches!(msg, Message::Quit) {
        model.quit_confirmed = false;
    }

    match msg {
        // Text editing
        Message::Insert(ch) => {
            model.document.buffer.insert_char(ch);
            ensure_cursor_visible(&mut model);
        }
        Message::InsertNewline => {
            model.document.buffer.insert_newline();
            ensure_cursor_visible(&mut model);
        }
        Message::DeleteBack => {
            model.document.buffer.backspace();
            ensure_cursor_visible(&mut model);
        }
        Message::DeleteForward => {
            model.document.buffer.delete();
            ensure_cursor_visible(&mut model);
        }

        // Cursor
        Message::Move(dir) => {
            model.document.buffer.move_cursor(dir);
            ensure_cursor_visible(&mut model);
        }
        Message::MoveLineStart => {
            model.document.buffer.move_line_start();
        }
        Message::MoveLineEnd => {
            model.document.buffer.move_line_end();
        }
        Message::MoveWordLeft => {
            model.document.buffer.move_word_left();
            ensure_cursor_visible(&mut model);
        }
        Message::MoveWordRight => {
            model.document.buffer.move_word_right();
            ensure_cursor_visible(&mut model);
        }
        Message::MoveDocStart => {
            model.document.buffer.move_doc_start();
            ensure_cursor_visible(&mut model);
        }
        Message::MoveDocEnd => {
            model.document.buffer.move_doc_end();
            ensure_cursor_visible(&mut model);
        }
        Message::MoveTo(line, col) => {
            model.document.buffer.move_to(line, col);
            // A click into the editor pane claims focus.
            model.sidebar_focused = false;
            ensure_cursor_visible(&mut model);
        }

        // Viewport
        Message::ScrollUp(n) => {
            model.scroll_offset = model.scroll_offset.saturating_sub(n);
        }
        Message::ScrollDown(n) => {
            let max = model.document.buffer.line_count().saturating_sub(1);
            model.scroll_offset = (model.scroll_offset + n).min(max);
        }
        Message::PageUp => {
            let page = model.editor_rows();
            model.scroll_offset = model.scroll_offset.saturating_sub(page);
            let line = model.document.buffer.cursor().line.saturating_sub(page);
            let col = model.document.buffer.cursor().col;
            model.document.buffer.move_to(line, col);
            ensure_cursor_visible(&mut model);
        }
        Message::PageDown => {
            let page = model.editor_rows();
            let max = model.document.buffer.line_count().saturating_sub(1);
            model.scroll_offset = (model.scroll_offset + page).min(max);
            let line = (model.document.buffer.cursor().line + page).min(max);
            let col = model.document.buffer.cursor().col;
            model.document.buffer.move_to(line, col);
            ensure_cursor_visible(&mut model);
        }

        // Sidebar
        Message::ToggleSidebar => {
            model.sidebar_visible = !model.sidebar_visible;
            model.sidebar_focused = model.sidebar_visible;
            // An empty sidebar is filled with a default listing in effects.
        }
        Message::SidebarUp => {
            if let Some(sel) = model.sidebar_selected {
                let next = sel.saturating_sub(1);
                model.sidebar_selected = Some(next);
                if next < model.sidebar_scroll {
                    model.sidebar_scroll = next;
                }
            }
        }
        Message::SidebarDown => {
            if let Some(sel) = model.sidebar_selected {
                let max = model.sidebar_entries.len().saturating_sub(1);
                let next = (sel + 1).min(max);
                model.sidebar_selected = Some(next);
                let visible = model.sidebar_rows();
                if visible > 0 {
                    let bottom = model.sidebar_scroll + visible.saturating_sub(1);
                    if next > bottom {
                        model.sidebar_scroll = (next + 1)
                            .saturating_sub(visible)
                            .min(model.max_sidebar_scroll());
                    }
                }
            }
        }
        Message::SidebarClick(idx) => {
            if idx < model.sidebar_entries.len() {
                model.sidebar_selected = Some(idx);
                model.sidebar_focused = true;
            }
            // Opening the entry happens in effects.
        }
        Message::SwitchFocus => {
            if model.sidebar_visible {
                model.sidebar_focused = !model.sidebar_focused;
            }
        }
        // SidebarSelect / Save / PromptSubmit: handled in effects (side effect)
        Message::SidebarSelect | Message::Save | Message::PromptSubmit => {}

        // File commands
        Message::OpenFilePrompt => {
            model.prompt = Some(Prompt::new(PromptKind::OpenFile));
        }
        Message::OpenFolderPrompt => {
            model.prompt = Some(Prompt::new(PromptKind::OpenFolder));
        }
        Message::SaveAsPrompt => {
            // Save-as on a clean buffer is a no-op.
            if model.document.is_dirty() {
                model.prompt = Some(Prompt::new(PromptKind::SaveAs));
            }
        }
        Message::PromptInput(ch) => {
            if let Some(prompt) = &mut model.prompt {
                prompt.input.push(ch);
            }
        }
        Message::PromptBackspace => {
            if let Some(prompt) = &mut model.prompt {
                prompt.input.pop();
            }
        }
        Message::PromptCancel => {
            model.prompt = None;
        }

        // Window
        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
            let max = model.document.buffer.line_count().saturating_sub(1);
            model.scroll_offset = model.scroll_offset.min(max);
            model.sidebar_scroll = model.sidebar_scroll.min(model.max_sidebar_scroll());
            ensure_cursor_visible(&mut model);
        }
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }

        // Application
        Message::Quit => {
            if model.document.is_dirty() && !model.quit_confirmed {
                model.show_notice(
                    "Unsaved changes! Press Ctrl+Q again to quit, or Ctrl+S to save",
                );
                model.quit_confirmed = true;
            } else {
                model.should_quit = true;
            }
        }
    }
    model
}

/// Keep the cursor line inside the editor viewport.
fn ensure_cursor_visible(model: &mut Model) {
    let cursor_line = model.document.buffer.cursor().line;
    let visible = model.editor_rows();
    if visible == 0 {
        model.scroll_offset = cursor_line;
        return;
    }
    if cursor_line < model.scroll_offset {
        model.scroll_offset = cursor_line;
    } else if cursor_line >= model.scroll_offset + visible {
        model.scroll_offset = cursor_line + 1 - visible;
    }
}
