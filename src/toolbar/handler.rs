use std::fmt;
use std::rc::Rc;

use super::action::Action;
use super::surface::{Selection, TextSurface};
use crate::highlight::Highlighter;
use crate::link::{self, LinkDetector};

/// What one toolbar action did to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub action: Action,
    /// The selection the action ran on, after clamping to the buffer.
    pub selection: Selection,
    /// `(offset, text)` of each insertion, in the order performed.
    pub insertions: Vec<(usize, &'static str)>,
    /// Where the caret was placed, `None` when it was left to the surface.
    pub cursor: Option<usize>,
}

/// Applies toolbar actions to a [`TextSurface`].
///
/// Holds the injected collaborators: a link detector consulted by the Link
/// action, and an optional highlighter told to restyle after every edit.
#[derive(Clone)]
pub struct ToolbarActionHandler {
    link_detector: LinkDetector,
    highlighter: Option<Rc<dyn Highlighter>>,
}

impl fmt::Debug for ToolbarActionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolbarActionHandler")
            .field("highlighter", &self.highlighter.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for ToolbarActionHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolbarActionHandler {
    /// A handler with the built-in link detector and no highlighter.
    pub fn new() -> Self {
        Self {
            link_detector: link::default_detector(),
            highlighter: None,
        }
    }

    pub fn with_link_detector(mut self, detector: LinkDetector) -> Self {
        self.link_detector = detector;
        self
    }

    pub fn with_highlighter(mut self, highlighter: Rc<dyn Highlighter>) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    pub fn set_highlighter(&mut self, highlighter: Option<Rc<dyn Highlighter>>) {
        self.highlighter = highlighter;
    }

    pub const fn has_highlighter(&self) -> bool {
        self.highlighter.is_some()
    }

    /// Whether the detector sees a link in `text`.
    pub fn is_link(&self, text: &str) -> bool {
        (self.link_detector)(text)
    }

    /// Apply `action` at the surface's current selection.
    ///
    /// A surface without a selection is treated as a caret at offset 0. A
    /// selection reaching past the end of the buffer is clamped to it.
    pub fn perform<S: TextSurface + ?Sized>(&self, action: Action, surface: &mut S) -> Edit {
        let len = surface.len_chars();
        let requested = surface.selection().unwrap_or_default();
        let selection = requested.clamp_to(len);
        if selection != requested {
            tracing::warn!(
                ?action,
                start = requested.start(),
                end = requested.end(),
                len,
                "selection past end of buffer, clamping"
            );
        }
        let (start, end) = (selection.start(), selection.end());

        let recipe = action.recipe(|| self.is_link(&surface.slice(selection)));

        let mut insertions = Vec::with_capacity(2);
        surface.insert_at(start, recipe.prefix);
        insertions.push((start, recipe.prefix));
        if let Some(suffix) = recipe.suffix {
            let at = recipe.suffix_offset(end);
            surface.insert_at(at, suffix);
            insertions.push((at, suffix));
        }

        let cursor = recipe.cursor.resolve(start, end);
        if let Some(offset) = cursor {
            surface.set_cursor(offset);
        }

        if let Some(highlighter) = &self.highlighter {
            highlighter.reapply_styles();
        }

        tracing::debug!(?action, start, end, ?cursor, "applied toolbar action");

        Edit {
            action,
            selection,
            insertions,
            cursor,
        }
    }
}
