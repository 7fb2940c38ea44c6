use crate::app::{Model, ToastLevel};
use crate::editor::Direction;
use crate::toolbar::{Action, TOOLBAR_BUTTONS};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Toolbar
    /// Press the toolbar button bound to an action
    Toolbar(Action),
    /// Enter toolbar focus mode (or leave it when already focused)
    ToggleToolbarFocus,
    /// Move toolbar focus one button left
    ToolbarFocusLeft,
    /// Move toolbar focus one button right
    ToolbarFocusRight,
    /// Press the focused toolbar button
    ToolbarPressFocused,
    /// Leave toolbar focus mode
    LeaveToolbar,

    // Editor
    /// Insert a character at the cursor
    InsertChar(char),
    /// Delete selection or character before cursor (Backspace)
    DeleteBack,
    /// Delete selection or character at cursor (Delete)
    DeleteForward,
    /// Split line at cursor (Enter)
    SplitLine,
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Grow the selection in a direction (Shift+arrow)
    ExtendSelection(Direction),
    /// Move cursor to start of line
    MoveHome,
    /// Move cursor to end of line
    MoveEnd,
    /// Move cursor one word left
    MoveWordLeft,
    /// Move cursor one word right
    MoveWordRight,
    /// Move cursor to start of buffer
    MoveToStart,
    /// Move cursor to end of buffer
    MoveToEnd,
    /// Select the whole buffer
    SelectAll,
    /// Place the caret at (line, col), e.g. from a mouse click
    ClickAt(usize, usize),
    /// Extend the selection to (line, col), e.g. from a mouse drag
    DragTo(usize, usize),
    /// Scroll the editing area up by n lines
    ScrollUp(usize),
    /// Scroll the editing area down by n lines
    ScrollDown(usize),

    // File
    /// Write the buffer to disk (side effect in event loop)
    Save,

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Apply a message to the model, producing the next model.
pub fn update(mut model: Model, msg: Message) -> Model {
    if !matches!(msg, Message::Quit | Message::Save) {
        model.quit_confirmed = false;
    }
    model.pressed = None;

    match msg {
        // Toolbar
        Message::Toolbar(action) => {
            press(&mut model, action);
        }
        Message::ToggleToolbarFocus => {
            model.toolbar_focus = match model.toolbar_focus {
                Some(_) => None,
                None if model.toolbar_visible => Some(0),
                None => None,
            };
        }
        Message::ToolbarFocusLeft => {
            if let Some(idx) = model.toolbar_focus {
                model.toolbar_focus = Some(idx.checked_sub(1).unwrap_or(TOOLBAR_BUTTONS.len() - 1));
            }
        }
        Message::ToolbarFocusRight => {
            if let Some(idx) = model.toolbar_focus {
                model.toolbar_focus = Some((idx + 1) % TOOLBAR_BUTTONS.len());
            }
        }
        Message::ToolbarPressFocused => {
            if let Some(button) = model.toolbar_focus.and_then(|idx| TOOLBAR_BUTTONS.get(idx)) {
                press(&mut model, button.action);
            }
        }
        Message::LeaveToolbar => {
            model.toolbar_focus = None;
        }

        // Editor
        Message::InsertChar(ch) => edit(&mut model, |buf| buf.insert_char(ch)),
        Message::DeleteBack => edit(&mut model, |buf| {
            buf.delete_back();
        }),
        Message::DeleteForward => edit(&mut model, |buf| {
            buf.delete_forward();
        }),
        Message::SplitLine => edit(&mut model, |buf| buf.split_line()),
        Message::MoveCursor(dir) => navigate(&mut model, |buf| buf.move_cursor(dir)),
        Message::ExtendSelection(dir) => navigate(&mut model, |buf| buf.extend_selection(dir)),
        Message::MoveHome => navigate(&mut model, |buf| buf.move_home()),
        Message::MoveEnd => navigate(&mut model, |buf| buf.move_end()),
        Message::MoveWordLeft => navigate(&mut model, |buf| buf.move_word_left()),
        Message::MoveWordRight => navigate(&mut model, |buf| buf.move_word_right()),
        Message::MoveToStart => navigate(&mut model, |buf| buf.move_to_start()),
        Message::MoveToEnd => navigate(&mut model, |buf| buf.move_to_end()),
        Message::SelectAll => navigate(&mut model, |buf| buf.select_all()),
        Message::ClickAt(line, col) => {
            model.toolbar_focus = None;
            navigate(&mut model, |buf| buf.move_to(line, col));
        }
        Message::DragTo(line, col) => navigate(&mut model, |buf| buf.drag_to(line, col)),
        Message::ScrollUp(n) => {
            model.scroll_offset = model.scroll_offset.saturating_sub(n);
        }
        Message::ScrollDown(n) => {
            let max = model.buffer.line_count().saturating_sub(1);
            model.scroll_offset = (model.scroll_offset + n).min(max);
        }

        // side effect in event loop
        Message::Save => {}

        // Window
        Message::Resize(width, height) => {
            model.size = (width, height);
            model.ensure_cursor_visible();
        }

        // Application
        Message::Quit => {
            if model.is_dirty() && !model.quit_confirmed {
                model.show_toast(
                    ToastLevel::Warning,
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

fn press(model: &mut Model, action: Action) {
    model.toolbar.perform(action, &mut model.buffer);
    model.pressed = Some(action);
    model.ensure_cursor_visible();
}

fn edit(model: &mut Model, f: impl FnOnce(&mut crate::editor::EditorBuffer)) {
    f(&mut model.buffer);
    model.highlighter.invalidate();
    model.ensure_cursor_visible();
}

fn navigate(model: &mut Model, f: impl FnOnce(&mut crate::editor::EditorBuffer)) {
    f(&mut model.buffer);
    model.ensure_cursor_visible();
}
