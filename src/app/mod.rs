//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use effects::save_buffer;
pub use model::{Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::ToolbarPosition;
use crate::highlight::HighlightBackground;
use crate::link::{LinkDetector, default_detector};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    toolbar_visible: bool,
    toolbar_position: ToolbarPosition,
    highlight_enabled: bool,
    background: HighlightBackground,
    link_detector: LinkDetector,
    startup_warnings: Vec<String>,
}

impl App {
    /// Create a new application editing the given file.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            toolbar_visible: true,
            toolbar_position: ToolbarPosition::Top,
            highlight_enabled: true,
            background: HighlightBackground::default(),
            link_detector: default_detector(),
            startup_warnings: Vec::new(),
        }
    }

    /// Show or hide the toolbar, and choose its row.
    #[must_use]
    pub const fn with_toolbar(mut self, visible: bool, position: ToolbarPosition) -> Self {
        self.toolbar_visible = visible;
        self.toolbar_position = position;
        self
    }

    /// Enable or disable Markdown highlighting.
    #[must_use]
    pub const fn with_highlight(mut self, enabled: bool, background: HighlightBackground) -> Self {
        self.highlight_enabled = enabled;
        self.background = background;
        self
    }

    /// Decide what counts as a link for the Link button.
    #[must_use]
    pub fn with_link_detector(mut self, detector: LinkDetector) -> Self {
        self.link_detector = detector;
        self
    }

    /// Warnings shown as a toast once the editor opens.
    #[must_use]
    pub fn with_startup_warnings(mut self, warnings: Vec<String>) -> Self {
        self.startup_warnings = warnings;
        self
    }
}
