// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. toolbar::ToolbarButton)
    clippy::module_name_repetitions
)]

//! # mdbar
//!
//! A terminal markdown editor with a formatting toolbar.
//!
//! mdbar edits markdown files in the terminal with:
//! - A ten-button toolbar for headings, emphasis, lists, quotes, links and code
//! - Markdown highlighting, with syntect colours in fenced code
//! - Mouse and keyboard selection
//!
//! ## Architecture
//!
//! The formatting core is independent of the terminal: a
//! [`ToolbarActionHandler`](toolbar::ToolbarActionHandler) applies an
//! [`Action`](toolbar::Action) to anything implementing
//! [`TextSurface`](toolbar::TextSurface), then asks a
//! [`Highlighter`](highlight::Highlighter) to restyle.
//!
//! The terminal app uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`toolbar`]: Formatting actions, the action handler and toolbar buttons
//! - [`editor`]: Rope-backed text buffer implementing the text surface
//! - [`highlight`]: Markdown and code highlighting
//! - [`link`]: Link detection for the Link action
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved command-line defaults

pub mod app;
pub mod config;
pub mod editor;
pub mod highlight;
pub mod link;
pub mod toolbar;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::EditorBuffer;
    pub use crate::highlight::{Highlighter, MarkdownHighlighter};
    pub use crate::toolbar::{Action, Selection, TextSurface, ToolbarActionHandler};
}
