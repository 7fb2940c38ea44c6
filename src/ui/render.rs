use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::app::Model;
use crate::config::ToolbarPosition;
use crate::toolbar::{BUTTON_GAP, TOOLBAR_BUTTONS};

use super::{status, style};

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLayout {
    pub toolbar: Option<Rect>,
    pub editor: Rect,
    pub toast: Option<Rect>,
    pub status: Rect,
}

/// Split `area` into toolbar, editing area, toast and status rows.
///
/// The status bar is always the last row, with the toast (when active) just
/// above it. The toolbar takes the first or last row of what remains.
pub fn layout(model: &Model, area: Rect) -> EditorLayout {
    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(toast_active);
    let status = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    };
    let toast = toast_active.then(|| Rect {
        y: area.y + area.height.saturating_sub(2),
        height: 1,
        ..area
    });
    let body = Rect {
        height: area.height.saturating_sub(footer_rows),
        ..area
    };

    let (toolbar, editor) = match (model.toolbar_visible, model.toolbar_position) {
        (false, _) => (None, body),
        (true, ToolbarPosition::Top) => (
            Some(Rect {
                height: body.height.min(1),
                ..body
            }),
            Rect {
                y: body.y + body.height.min(1),
                height: body.height.saturating_sub(1),
                ..body
            },
        ),
        (true, ToolbarPosition::Bottom) => (
            Some(Rect {
                y: body.y + body.height.saturating_sub(1),
                height: body.height.min(1),
                ..body
            }),
            Rect {
                height: body.height.saturating_sub(1),
                ..body
            },
        ),
    };

    EditorLayout {
        toolbar,
        editor,
        toast,
        status,
    }
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let parts = layout(model, frame.area());

    if let Some(area) = parts.toolbar {
        render_toolbar(model, frame, area);
    }
    render_editor(model, frame, parts.editor);
    if let Some(area) = parts.toast {
        status::render_toast_bar(model, frame, area);
    }
    status::render_status_bar(model, frame, parts.status);
}

fn render_toolbar(model: &Model, frame: &mut Frame, area: Rect) {
    let gap = " ".repeat(usize::from(BUTTON_GAP));
    let mut spans = Vec::with_capacity(TOOLBAR_BUTTONS.len() * 2 + 1);
    for (idx, button) in TOOLBAR_BUTTONS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(gap.clone()));
        }
        let pressed = model.pressed == Some(button.action);
        let focused = model.toolbar_focus == Some(idx);
        spans.push(Span::styled(button.cap(), style::button_style(pressed, focused)));
    }

    let hint = model
        .pressed
        .map(crate::toolbar::Action::title)
        .or_else(|| {
            model
                .toolbar_focus
                .and_then(|idx| TOOLBAR_BUTTONS.get(idx))
                .map(|b| b.title())
        });
    if let Some(title) = hint {
        spans.push(Span::styled(
            format!("  {title}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let buf = &model.buffer;
    let total_lines = buf.line_count();
    let gutter_width = line_number_width(total_lines);

    let visible_height = area.height as usize;
    let start = model.scroll_offset.min(total_lines.saturating_sub(1));
    let end = (start + visible_height).min(total_lines);
    let cursor = buf.cursor();
    let selection = buf.selection_range();
    let background = model.highlighter.background();
    let selection_bg = style::selection_bg(background);

    let texts = buf.lines();
    let styled = model.highlighter.lines(&texts);

    let mut content: Vec<Line> = Vec::with_capacity(end.saturating_sub(start));
    for line_idx in start..end {
        let line_num = format!("{:>width$} ", line_idx + 1, width = gutter_width as usize);
        let mut spans = vec![Span::styled(line_num, Style::default().fg(Color::DarkGray))];

        let line_start = buf.line_start(line_idx);
        let mut col = 0usize;
        for span in styled.get(line_idx).map(Vec::as_slice).unwrap_or_default() {
            let base = style::style_for_span(span, background);
            for ch in span.text.chars() {
                let offset = line_start + col;
                let mut cell = base;
                if selection.is_some_and(|sel| offset >= sel.start() && offset < sel.end()) {
                    cell = cell.bg(selection_bg);
                }
                if line_idx == cursor.line && col == cursor.col {
                    cell = style::cursor_style();
                }
                push_char(&mut spans, ch, cell);
                col += 1;
            }
        }
        if line_idx == cursor.line && cursor.col >= col {
            spans.push(Span::styled(" ", style::cursor_style()));
        }

        content.push(Line::from(spans));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);
}

fn push_char(spans: &mut Vec<Span<'static>>, ch: char, style: Style) {
    if let Some(last) = spans.last_mut()
        && last.style == style
    {
        last.content.to_mut().push(ch);
    } else {
        spans.push(Span::styled(ch.to_string(), style));
    }
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}

/// Columns taken by the line number gutter, including its trailing space.
pub const fn gutter_width(total_lines: usize) -> u16 {
    line_number_width(total_lines) + 1
}

/// Char index under display `column` of `line`; past the end maps to the line length.
pub fn char_index_at_column(line: &str, column: usize) -> usize {
    let mut used = 0usize;
    for (idx, ch) in line.chars().enumerate() {
        used += ch.width().unwrap_or(0);
        if used > column {
            return idx;
        }
    }
    line.chars().count()
}
