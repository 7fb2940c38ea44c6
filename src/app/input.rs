use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::{App, Message, Model};
use crate::editor::Direction;
use crate::toolbar::button_at;

/// Rows scrolled per mouse wheel notch.
const WHEEL_LINES: usize = 3;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        // Global shortcuts
        match key.code {
            KeyCode::Char('s') if ctrl => return Some(Message::Save),
            KeyCode::Char('q') if ctrl => return Some(Message::Quit),
            KeyCode::F(10) => return Some(Message::ToggleToolbarFocus),
            _ => {}
        }

        // Toolbar focus mode
        if model.toolbar_focus.is_some() {
            return match key.code {
                KeyCode::Left | KeyCode::BackTab => Some(Message::ToolbarFocusLeft),
                KeyCode::Right | KeyCode::Tab => Some(Message::ToolbarFocusRight),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Message::ToolbarPressFocused),
                KeyCode::Esc => Some(Message::LeaveToolbar),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('a') if ctrl => Some(Message::SelectAll),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Message::InsertChar(c))
            }
            KeyCode::Enter => Some(Message::SplitLine),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),

            // Navigation
            KeyCode::Left if ctrl => Some(Message::MoveWordLeft),
            KeyCode::Right if ctrl => Some(Message::MoveWordRight),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                let dir = match key.code {
                    KeyCode::Up => Direction::Up,
                    KeyCode::Down => Direction::Down,
                    KeyCode::Left => Direction::Left,
                    _ => Direction::Right,
                };
                if shift {
                    Some(Message::ExtendSelection(dir))
                } else {
                    Some(Message::MoveCursor(dir))
                }
            }
            KeyCode::Home if ctrl => Some(Message::MoveToStart),
            KeyCode::End if ctrl => Some(Message::MoveToEnd),
            KeyCode::Home => Some(Message::MoveHome),
            KeyCode::End => Some(Message::MoveEnd),
            KeyCode::PageUp => Some(Message::ScrollUp(model.editor_height())),
            KeyCode::PageDown => Some(Message::ScrollDown(model.editor_height())),

            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        let area = Rect::new(0, 0, model.size.0, model.size.1);
        let parts = crate::ui::layout(model, area);

        if let Some(toolbar) = parts.toolbar
            && point_in_rect(mouse.column, mouse.row, toolbar)
        {
            return match mouse.kind {
                MouseEventKind::Up(MouseButton::Left) => {
                    button_at(mouse.column - toolbar.x).map(|button| Message::Toolbar(button.action))
                }
                _ => None,
            };
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !point_in_rect(mouse.column, mouse.row, parts.editor) {
                    return None;
                }
                let (line, col) = buffer_position(model, parts.editor, mouse.column, mouse.row)?;
                Some(Message::ClickAt(line, col))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (line, col) = buffer_position(model, parts.editor, mouse.column, mouse.row)?;
                Some(Message::DragTo(line, col))
            }
            MouseEventKind::ScrollUp => Some(Message::ScrollUp(WHEEL_LINES)),
            MouseEventKind::ScrollDown => Some(Message::ScrollDown(WHEEL_LINES)),
            _ => None,
        }
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Map a screen cell to (line, char column), clamping rows to the editing area.
fn buffer_position(model: &Model, editor: Rect, column: u16, row: u16) -> Option<(usize, usize)> {
    if editor.height == 0 {
        return None;
    }
    let max_row = editor.y + editor.height - 1;
    let rel_row = usize::from(row.clamp(editor.y, max_row) - editor.y);
    let line = (model.scroll_offset + rel_row).min(model.buffer.line_count().saturating_sub(1));

    let gutter = crate::ui::gutter_width(model.buffer.line_count());
    let content_col = usize::from(column.saturating_sub(editor.x + gutter));
    let text = model.buffer.line_at(line).unwrap_or_default();
    Some((line, crate::ui::char_index_at_column(&text, content_col)))
}
