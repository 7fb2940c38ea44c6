//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Toolbar, editing area, toast and status rows
//! - [`render`]: Draws a [`Model`](crate::app::Model) into a frame
//! - [`style`]: Theming and colors

pub mod style;

mod render;
mod status;

pub use render::{
    EditorLayout, char_index_at_column, gutter_width, layout, line_number_width, render,
};
