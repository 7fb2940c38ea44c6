//! Theming and color definitions.
//!
//! Maps highlighter spans and toolbar states to terminal styles. Uses ANSI
//! colors that adapt to the terminal's palette, with darker indexed colors
//! on light backgrounds.

use ratatui::style::{Color, Modifier, Style};

use crate::highlight::{HighlightBackground, SpanKind, StyledSpan};

/// Get the style for a highlighted span.
///
/// Syntax colours from code fences win over the span kind.
pub fn style_for_span(span: &StyledSpan, background: HighlightBackground) -> Style {
    if let Some(rgb) = span.color {
        return Style::default().fg(Color::Rgb(rgb.r, rgb.g, rgb.b));
    }
    let light_bg = background == HighlightBackground::Light;
    let pick = |light: Color, dark: Color| if light_bg { light } else { dark };
    match span.kind {
        SpanKind::Plain => Style::default(),
        SpanKind::HeadingMarker => Style::default()
            .fg(pick(Color::Indexed(241), Color::Indexed(244)))
            .add_modifier(Modifier::BOLD),
        SpanKind::Heading => Style::default()
            .fg(pick(Color::Indexed(24), Color::Cyan))
            .add_modifier(Modifier::BOLD),
        SpanKind::QuoteMarker => Style::default()
            .fg(pick(Color::Indexed(24), Color::Blue))
            .add_modifier(Modifier::BOLD),
        SpanKind::ListMarker => Style::default()
            .fg(pick(Color::Indexed(58), Color::Yellow))
            .add_modifier(Modifier::BOLD),
        // Fences are dim so the code stands out
        SpanKind::Fence => Style::default()
            .fg(pick(Color::Indexed(241), Color::Indexed(240)))
            .add_modifier(Modifier::DIM),
        SpanKind::Code => Style::default().fg(pick(Color::Indexed(238), Color::Indexed(245))),
        SpanKind::InlineCode => Style::default().fg(pick(Color::Indexed(124), Color::Indexed(180))),
        SpanKind::Bold => Style::default().add_modifier(Modifier::BOLD),
        SpanKind::Italic => Style::default().add_modifier(Modifier::ITALIC),
        SpanKind::Link => Style::default()
            .fg(pick(Color::Indexed(25), Color::LightBlue))
            .add_modifier(Modifier::UNDERLINED),
    }
}

/// Background for selected text.
pub const fn selection_bg(background: HighlightBackground) -> Color {
    match background {
        HighlightBackground::Light => Color::Indexed(153),
        HighlightBackground::Dark => Color::Indexed(238),
    }
}

/// The block caret.
pub fn cursor_style() -> Style {
    Style::default().bg(Color::White).fg(Color::Black)
}

/// Style for a toolbar button cap.
pub fn button_style(pressed: bool, focused: bool) -> Style {
    let base = Style::default().bg(Color::DarkGray).fg(Color::White);
    if pressed {
        base.bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if focused {
        base.bg(Color::Yellow).fg(Color::Black)
    } else {
        base
    }
}
