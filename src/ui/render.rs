use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::Model;

use super::{EDITOR_WIDTH_PERCENT, SIDEBAR_WIDTH_PERCENT, status};

pub fn split_main_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(SIDEBAR_WIDTH_PERCENT),
            Constraint::Percentage(EDITOR_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Columns taken by the line-number gutter for a buffer of `total_lines`.
pub fn gutter_width(total_lines: usize) -> u16 {
    let mut digits = 1u16;
    let mut n = total_lines;
    while n >= 10 {
        digits += 1;
        n /= 10;
    }
    digits.max(2)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let footer_rows = model.footer_rows();
    let main_area = Rect {
        height: area.height.saturating_sub(footer_rows),
        ..area
    };

    if model.sidebar_visible {
        let chunks = split_main_columns(main_area);
        render_sidebar(model, frame, chunks[0]);
        render_editor(model, frame, chunks[1]);
    } else {
        render_editor(model, frame, main_area);
    }

    // Footer stack, bottom-up: status bar, then prompt, then notice.
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };
    status::render_status_bar(model, frame, status_area);

    if model.prompt.is_some() {
        let prompt_area = Rect {
            y: area.y + area.height.saturating_sub(2),
            height: 1,
            ..area
        };
        status::render_prompt_bar(model, frame, prompt_area);
    }
    if model.active_notice().is_some() {
        let notice_area = Rect {
            y: area.y
                + area
                    .height
                    .saturating_sub(2 + u16::from(model.prompt.is_some())),
            height: 1,
            ..area
        };
        status::render_notice_bar(model, frame, notice_area);
    }

    if model.help_visible {
        render_help_overlay(frame, area);
    }
}

fn render_sidebar(model: &Model, frame: &mut Frame, area: Rect) {
    let entries = &model.sidebar_entries;
    let visible_rows = usize::from(area.height.saturating_sub(2));
    let max_start = entries.len().saturating_sub(visible_rows);
    let start = model.sidebar_scroll.min(max_start);
    let end = (start + visible_rows).min(entries.len());

    let items: Vec<Line> = entries
        .iter()
        .enumerate()
        .skip(start)
        .take(end.saturating_sub(start))
        .map(|(i, name)| {
            let marker = if model.sidebar_selected == Some(i) {
                ">"
            } else {
                " "
            };
            let style = if model.sidebar_selected == Some(i) {
                Style::default().reversed()
            } else {
                Style::default()
            };
            Line::styled(format!("{marker} {name}"), style)
        })
        .collect();

    let title = model.sidebar_dir.as_deref().map_or_else(
        || "files".to_string(),
        |dir| {
            dir.file_name().map_or_else(
                || dir.display().to_string(),
                |n| n.to_string_lossy().to_string(),
            )
        },
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if model.sidebar_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });

    frame.render_widget(Paragraph::new(items).block(block), area);
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let buffer = &model.document.buffer;
    let total_lines = buffer.line_count();
    let gutter = gutter_width(total_lines);

    let visible_height = usize::from(area.height);
    let start = model.scroll_offset;
    let end = (start + visible_height).min(total_lines);
    let cursor = buffer.cursor();

    let mut content: Vec<Line> = Vec::new();
    for line_idx in start..end {
        let line_text = buffer.line(line_idx).unwrap_or_default();
        let line_num = format!("{:>width$} ", line_idx + 1, width = usize::from(gutter));

        let mut spans = vec![Span::styled(line_num, Style::default().fg(Color::DarkGray))];

        if line_idx == cursor.line {
            // Split the line at the cursor so the cursor cell can be
            // rendered in reverse video.
            let chars: Vec<char> = line_text.chars().collect();
            let col = cursor.col.min(chars.len());
            let before: String = chars[..col].iter().collect();
            let at: String = chars
                .get(col)
                .map_or_else(|| " ".to_string(), char::to_string);
            let after: String = chars.get(col + 1..).map_or_else(String::new, |cs| {
                cs.iter().collect()
            });

            if !before.is_empty() {
                spans.push(Span::raw(before));
            }
            let cursor_style = if model.sidebar_focused {
                Style::default().bg(Color::DarkGray).fg(Color::Black)
            } else {
                Style::default().bg(Color::White).fg(Color::Black)
            };
            spans.push(Span::styled(at, cursor_style));
            if !after.is_empty() {
                spans.push(Span::raw(after));
            }
        } else {
            spans.push(Span::raw(line_text));
        }

        content.push(Line::from(spans));
    }

    // Clear first so stale cells from a previous frame never leak through.
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("  Ctrl+O     open file"),
        Line::from("  Ctrl+F     open folder"),
        Line::from("  Ctrl+S     save"),
        Line::from("  Ctrl+W     save as"),
        Line::from("  Ctrl+B     toggle sidebar"),
        Line::from("  Tab/Esc    switch sidebar focus"),
        Line::from("  Ctrl+Q     quit"),
        Line::from(""),
        Line::from("  any key to close"),
    ];

    let popup = centered_rect(area, 40, (lines.len() + 2) as u16);
    let block = Block::default().title("Help").borders(Borders::ALL);
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
