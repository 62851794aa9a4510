use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{Message, Model};
use crate::editor::Direction;
use crate::ui;

/// Translate a terminal event into a message, if it means anything in the
/// current state.
pub(super) fn translate(event: &Event, model: &Model) -> Option<Message> {
    match event {
        Event::Key(key) => handle_key(*key, model),
        Event::Mouse(mouse) => handle_mouse(*mouse, model),
        Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
        _ => None,
    }
}

fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    if model.help_visible {
        return Some(Message::HideHelp);
    }

    // Modal prompt captures everything until it resolves.
    if model.prompt.is_some() {
        return match key.code {
            KeyCode::Esc => Some(Message::PromptCancel),
            KeyCode::Enter => Some(Message::PromptSubmit),
            KeyCode::Backspace => Some(Message::PromptBackspace),
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(Message::PromptInput(c))
            }
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q' | 'c') => Some(Message::Quit),
            KeyCode::Char('s') => Some(Message::Save),
            KeyCode::Char('w') => Some(Message::SaveAsPrompt),
            KeyCode::Char('o') => Some(Message::OpenFilePrompt),
            KeyCode::Char('f') => Some(Message::OpenFolderPrompt),
            KeyCode::Char('b') => Some(Message::ToggleSidebar),
            KeyCode::Left => Some(Message::MoveWordLeft),
            KeyCode::Right => Some(Message::MoveWordRight),
            KeyCode::Home => Some(Message::MoveDocStart),
            KeyCode::End => Some(Message::MoveDocEnd),
            _ => None,
        };
    }

    // Sidebar-focused navigation
    if model.sidebar_focused && model.sidebar_visible {
        return match key.code {
            KeyCode::Up => Some(Message::SidebarUp),
            KeyCode::Down => Some(Message::SidebarDown),
            KeyCode::Enter => Some(Message::SidebarSelect),
            KeyCode::Tab | KeyCode::Esc => Some(Message::SwitchFocus),
            KeyCode::F(1) => Some(Message::ToggleHelp),
            _ => None,
        };
    }

    // Editor keys
    match key.code {
        KeyCode::Enter => Some(Message::InsertNewline),
        KeyCode::Backspace => Some(Message::DeleteBack),
        KeyCode::Delete => Some(Message::DeleteForward),
        KeyCode::Left => Some(Message::Move(Direction::Left)),
        KeyCode::Right => Some(Message::Move(Direction::Right)),
        KeyCode::Up => Some(Message::Move(Direction::Up)),
        KeyCode::Down => Some(Message::Move(Direction::Down)),
        KeyCode::Home => Some(Message::MoveLineStart),
        KeyCode::End => Some(Message::MoveLineEnd),
        KeyCode::PageUp => Some(Message::PageUp),
        KeyCode::PageDown => Some(Message::PageDown),
        KeyCode::F(1) => Some(Message::ToggleHelp),
        KeyCode::Tab => Some(Message::Insert('\t')),
        KeyCode::Esc if model.sidebar_visible => Some(Message::SwitchFocus),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Message::Insert(c))
        }
        _ => None,
    }
}

fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
    if model.help_visible || model.prompt.is_some() {
        return None;
    }

    match mouse.kind {
        MouseEventKind::ScrollDown => return Some(Message::ScrollDown(3)),
        MouseEventKind::ScrollUp => return Some(Message::ScrollUp(3)),
        MouseEventKind::Down(MouseButton::Left) => {}
        _ => return None,
    }

    let frame = Rect::new(0, 0, model.width, model.height);
    let main = Rect {
        height: frame.height.saturating_sub(model.footer_rows()),
        ..frame
    };

    if model.sidebar_visible {
        let chunks = ui::split_main_columns(main);
        if point_in_rect(mouse.column, mouse.row, chunks[0]) {
            return sidebar_click(mouse.row, chunks[0], model);
        }
        if point_in_rect(mouse.column, mouse.row, chunks[1]) {
            return editor_click(mouse.column, mouse.row, chunks[1], model);
        }
        return None;
    }

    if point_in_rect(mouse.column, mouse.row, main) {
        return editor_click(mouse.column, mouse.row, main, model);
    }
    None
}

fn sidebar_click(row: u16, area: Rect, model: &Model) -> Option<Message> {
    // Inside the border only.
    if row <= area.y || row >= area.y + area.height.saturating_sub(1) {
        return None;
    }
    let rel = usize::from(row - area.y - 1);
    let idx = model.sidebar_scroll + rel;
    if idx < model.sidebar_entries.len() {
        return Some(Message::SidebarClick(idx));
    }
    None
}

fn editor_click(col: u16, row: u16, area: Rect, model: &Model) -> Option<Message> {
    let line = model.scroll_offset + usize::from(row.saturating_sub(area.y));
    let gutter = ui::gutter_width(model.document.buffer.line_count()) + 1;
    let col = usize::from(col.saturating_sub(area.x).saturating_sub(gutter));
    Some(Message::MoveTo(line, col))
}

const fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}
