use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};
use crate::toolbar::TOOLBAR_BUTTONS;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    if let Some(idx) = model.toolbar_focus {
        let title = TOOLBAR_BUTTONS.get(idx).map_or("", |b| b.title());
        let status = format!(" TOOLBAR  {title}  ←/→:move  Enter:apply  Esc:back");
        let bar = Paragraph::new(status).style(Style::default().bg(Color::Magenta).fg(Color::White));
        frame.render_widget(bar, area);
        return;
    }

    let filename = model.file_path.file_name().map_or_else(
        || "untitled".to_string(),
        |s| s.to_string_lossy().to_string(),
    );
    let dirty_indicator = if model.is_dirty() { " [modified]" } else { "" };
    let cursor = model.buffer.cursor();
    let selection_info = model
        .buffer
        .selection_range()
        .map_or_else(String::new, |sel| format!("  [{} selected]", sel.len()));

    let status = format!(
        " {filename}{dirty_indicator}  Ln {}, Col {}{selection_info}  F10:toolbar  Ctrl+S:save  Ctrl+Q:quit",
        cursor.line + 1,
        cursor.col + 1
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
