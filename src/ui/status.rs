use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let name = model.document.display_name();
    let modified = if model.document.is_dirty() {
        " [modified]"
    } else {
        ""
    };

    let cursor = model.document.buffer.cursor();
    let position = format!("Ln {}, Col {}", cursor.line + 1, cursor.col + 1);

    // The save hint is the derived save-enabled flag: shown only when a
    // plain save would actually write.
    let save_hint = if model.document.can_save() {
        "  Ctrl+S:save"
    } else {
        ""
    };

    let status = format!(" {name}{modified}  {position}{save_hint}  F1:help");
    let bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
}

pub fn render_prompt_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(prompt) = &model.prompt else {
        return;
    };
    let text = format!(
        "{}{}  Enter:confirm  Esc:cancel",
        prompt.kind.label(),
        prompt.input
    );
    let bar = Paragraph::new(text).style(Style::default().bg(Color::Blue).fg(Color::White));
    frame.render_widget(bar, area);
}

pub fn render_notice_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(message) = model.active_notice() else {
        return;
    };
    let bar = Paragraph::new(format!("[warn] {message}"))
        .style(Style::default().bg(Color::Yellow).fg(Color::Black));
    frame.render_widget(bar, area);
}
