/// A formatting action bound to one toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    H1,
    H2,
    H3,
    Bold,
    Italic,
    UnorderedList,
    OrderedList,
    BlockQuote,
    Link,
    CodeBlock,
}

impl Action {
    /// Every action, in toolbar order.
    pub const ALL: [Self; 10] = [
        Self::H1,
        Self::H2,
        Self::H3,
        Self::Bold,
        Self::Italic,
        Self::UnorderedList,
        Self::OrderedList,
        Self::BlockQuote,
        Self::Link,
        Self::CodeBlock,
    ];

    /// The insertion recipe for this action.
    ///
    /// `selection_is_link` is only consulted for [`Action::Link`].
    pub fn recipe(self, selection_is_link: impl FnOnce() -> bool) -> Recipe {
        match self {
            Self::H1 => Recipe::prefix("# ", CursorRule::Start(2)),
            Self::H2 => Recipe::prefix("## ", CursorRule::Start(3)),
            Self::H3 => Recipe::prefix("### ", CursorRule::Start(4)),
            Self::Bold => Recipe::wrap("**", "**", CursorRule::End(2)),
            Self::Italic => Recipe::wrap("*", "*", CursorRule::End(1)),
            Self::UnorderedList => Recipe::prefix("\n- ", CursorRule::Start(3)),
            Self::OrderedList => Recipe::prefix("\n1. ", CursorRule::Start(3)),
            Self::BlockQuote => Recipe::prefix("> ", CursorRule::Keep),
            Self::Link => {
                if selection_is_link() {
                    // Selected text is the URL; caret goes inside the empty title.
                    Recipe::wrap("[](", ")", CursorRule::Start(1))
                } else {
                    // Selected text is the title; caret goes inside the empty URL.
                    Recipe::wrap("[", "]()", CursorRule::End(3))
                }
            }
            Self::CodeBlock => Recipe::wrap("```\n", "\n```", CursorRule::End(4)),
        }
    }

    /// Human-readable name, used for button titles and log lines.
    pub const fn title(self) -> &'static str {
        match self {
            Self::H1 => "Heading 1",
            Self::H2 => "Heading 2",
            Self::H3 => "Heading 3",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::UnorderedList => "Bullet List",
            Self::OrderedList => "Numbered List",
            Self::BlockQuote => "Quote",
            Self::Link => "Link",
            Self::CodeBlock => "Code Block",
        }
    }
}

/// Where the caret lands after a recipe is applied.
///
/// Offsets are relative to the selection bounds of the buffer *before* any
/// insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorRule {
    /// `start + n`
    Start(usize),
    /// `end + n`
    End(usize),
    /// No explicit move; the surface keeps whatever caret its insert left.
    Keep,
}

impl CursorRule {
    pub const fn resolve(self, start: usize, end: usize) -> Option<usize> {
        match self {
            Self::Start(n) => Some(start + n),
            Self::End(n) => Some(end + n),
            Self::Keep => None,
        }
    }
}

/// Literal markers an action splices around a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    /// Inserted at the selection start.
    pub prefix: &'static str,
    /// Inserted after the selected text, i.e. at `end + prefix_len`.
    pub suffix: Option<&'static str>,
    pub cursor: CursorRule,
}

impl Recipe {
    const fn prefix(prefix: &'static str, cursor: CursorRule) -> Self {
        Self {
            prefix,
            suffix: None,
            cursor,
        }
    }

    const fn wrap(prefix: &'static str, suffix: &'static str, cursor: CursorRule) -> Self {
        Self {
            prefix,
            suffix: Some(suffix),
            cursor,
        }
    }

    /// Length of the prefix in chars.
    pub fn prefix_len(&self) -> usize {
        self.prefix.chars().count()
    }

    /// Offset at which the suffix goes, given the pre-edit selection end.
    pub fn suffix_offset(&self, end: usize) -> usize {
        end + self.prefix_len()
    }
}
