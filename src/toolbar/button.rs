use unicode_width::UnicodeWidthStr;

use super::action::Action;

/// Cells each button occupies in the toolbar row.
pub const BUTTON_WIDTH: u16 = 5;
/// Blank cells between neighbouring buttons.
pub const BUTTON_GAP: u16 = 1;

/// Icon shown on a button that has no text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Bold,
    Italic,
    BulletList,
    NumberedList,
    Quote,
    Link,
    Code,
}

impl Icon {
    /// Terminal glyph for the icon.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::BulletList => "•",
            Self::NumberedList => "1.",
            Self::Quote => "❝",
            Self::Link => "↗",
            Self::Code => "</>",
        }
    }
}

/// How a button presents itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonFace {
    Label(&'static str),
    Icon(Icon),
}

/// One toolbar button and the action it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarButton {
    pub action: Action,
    pub face: ButtonFace,
}

/// The toolbar, left to right.
pub const TOOLBAR_BUTTONS: [ToolbarButton; 10] = [
    ToolbarButton::for_action(Action::H1),
    ToolbarButton::for_action(Action::H2),
    ToolbarButton::for_action(Action::H3),
    ToolbarButton::for_action(Action::Bold),
    ToolbarButton::for_action(Action::Italic),
    ToolbarButton::for_action(Action::UnorderedList),
    ToolbarButton::for_action(Action::OrderedList),
    ToolbarButton::for_action(Action::BlockQuote),
    ToolbarButton::for_action(Action::Link),
    ToolbarButton::for_action(Action::CodeBlock),
];

impl ToolbarButton {
    pub const fn for_action(action: Action) -> Self {
        let face = match action {
            Action::H1 => ButtonFace::Label("H1"),
            Action::H2 => ButtonFace::Label("H2"),
            Action::H3 => ButtonFace::Label("H3"),
            Action::Bold => ButtonFace::Icon(Icon::Bold),
            Action::Italic => ButtonFace::Icon(Icon::Italic),
            Action::UnorderedList => ButtonFace::Icon(Icon::BulletList),
            Action::OrderedList => ButtonFace::Icon(Icon::NumberedList),
            Action::BlockQuote => ButtonFace::Icon(Icon::Quote),
            Action::Link => ButtonFace::Icon(Icon::Link),
            Action::CodeBlock => ButtonFace::Icon(Icon::Code),
        };
        Self { action, face }
    }

    pub const fn glyph(&self) -> &'static str {
        match self.face {
            ButtonFace::Label(label) => label,
            ButtonFace::Icon(icon) => icon.glyph(),
        }
    }

    pub const fn title(&self) -> &'static str {
        self.action.title()
    }

    /// The glyph centred in a [`BUTTON_WIDTH`]-cell cap.
    pub fn cap(&self) -> String {
        let glyph = self.glyph();
        let width = usize::from(BUTTON_WIDTH);
        let used = glyph.width().min(width);
        let left = (width - used) / 2;
        let right = width - used - left;
        format!("{}{glyph}{}", " ".repeat(left), " ".repeat(right))
    }
}

/// Column (relative to the toolbar's left edge) where button `index` starts.
pub fn button_x(index: usize) -> u16 {
    let index = u16::try_from(index).unwrap_or(u16::MAX);
    index.saturating_mul(BUTTON_WIDTH + BUTTON_GAP)
}

/// The button under `column`, relative to the toolbar's left edge.
pub fn button_at(column: u16) -> Option<&'static ToolbarButton> {
    let stride = BUTTON_WIDTH + BUTTON_GAP;
    if column % stride >= BUTTON_WIDTH {
        return None;
    }
    TOOLBAR_BUTTONS.get(usize::from(column / stride))
}
