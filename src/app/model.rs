use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::config::ToolbarPosition;
use crate::editor::EditorBuffer;
use crate::highlight::{HighlightBackground, Highlighter, MarkdownHighlighter};
use crate::link::LinkDetector;
use crate::toolbar::{Action, ToolbarActionHandler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Default)]
pub struct Model {
    /// File the buffer is saved to
    pub file_path: PathBuf,
    /// The text being edited; the toolbar's text surface
    pub buffer: EditorBuffer,
    /// Applies toolbar actions to the buffer
    pub toolbar: ToolbarActionHandler,
    /// Styles the buffer; shared with the toolbar handler
    pub highlighter: Rc<MarkdownHighlighter>,
    /// Whether the toolbar row is shown
    pub toolbar_visible: bool,
    /// Where the toolbar row sits
    pub toolbar_position: ToolbarPosition,
    /// Index of the keyboard-focused toolbar button, when in toolbar focus mode
    pub toolbar_focus: Option<usize>,
    /// Button drawn pressed until the next message
    pub pressed: Option<Action>,
    /// First buffer line shown in the editing area
    pub scroll_offset: usize,
    /// Terminal size (width, height)
    pub size: (u16, u16),
    toast: Option<Toast>,
    /// Set after first quit attempt with unsaved changes; allows second quit to proceed
    pub quit_confirmed: bool,
    pub should_quit: bool,
}

impl Model {
    /// Create a model editing `text`, to be saved at `file_path`.
    pub fn new(file_path: PathBuf, text: &str, size: (u16, u16)) -> Self {
        let highlighter = Rc::new(MarkdownHighlighter::new(HighlightBackground::default()));
        let toolbar = ToolbarActionHandler::new().with_highlighter(highlighter.clone());
        Self {
            file_path,
            buffer: EditorBuffer::from_text(text),
            toolbar,
            highlighter,
            toolbar_visible: true,
            size,
            ..Self::default()
        }
    }

    /// Swap the highlighter, rewiring the toolbar to notify the new one.
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: MarkdownHighlighter) -> Self {
        self.highlighter = Rc::new(highlighter);
        let notify: Rc<dyn Highlighter> = self.highlighter.clone();
        self.toolbar.set_highlighter(Some(notify));
        self
    }

    #[must_use]
    pub fn with_link_detector(mut self, detector: LinkDetector) -> Self {
        self.toolbar = self.toolbar.with_link_detector(detector);
        self
    }

    #[must_use]
    pub const fn with_toolbar(mut self, visible: bool, position: ToolbarPosition) -> Self {
        self.toolbar_visible = visible;
        self.toolbar_position = position;
        self
    }

    /// Rows available for buffer text once the toolbar, status and toast rows are taken.
    pub fn editor_height(&self) -> usize {
        let chrome = 1 + u16::from(self.toolbar_visible) + u16::from(self.toast.is_some());
        usize::from(self.size.1.saturating_sub(chrome)).max(1)
    }

    /// Scroll so the caret line is inside the editing area.
    pub fn ensure_cursor_visible(&mut self) {
        let line = self.buffer.cursor().line;
        let height = self.editor_height();
        if line < self.scroll_offset {
            self.scroll_offset = line;
        } else if line >= self.scroll_offset + height {
            self.scroll_offset = line + 1 - height;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}
