//! Lightweight editor module for in-place markdown editing.
//!
//! Provides a rope-backed text buffer with char-offset cursor and selection
//! management. The buffer is the text surface the formatting toolbar edits.

mod buffer;

pub use buffer::{Cursor, Direction, EditorBuffer};
