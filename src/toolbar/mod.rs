//! Markdown formatting toolbar.
//!
//! Ten buttons, each bound to an [`Action`] that splices fixed Markdown
//! markers into a [`TextSurface`] at or around its selection:
//!
//! - [`action`]: the actions and their insertion recipes
//! - [`handler`]: applies recipes to a surface and notifies the highlighter
//! - [`surface`]: the capabilities a host text surface provides
//! - [`button`]: button faces and toolbar hit testing

pub mod action;
pub mod button;
pub mod handler;
pub mod surface;

pub use action::{Action, CursorRule, Recipe};
pub use button::{
    BUTTON_GAP, BUTTON_WIDTH, ButtonFace, Icon, TOOLBAR_BUTTONS, ToolbarButton, button_at, button_x,
};
pub use handler::{Edit, ToolbarActionHandler};
pub use surface::{Selection, SelectionError, TextSurface};
