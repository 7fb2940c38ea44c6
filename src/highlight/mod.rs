//! Markdown styling for the editing surface.
//!
//! The toolbar only knows the [`Highlighter`] capability: "re-apply your
//! styles". [`MarkdownHighlighter`] implements it by marking its span cache
//! stale; the next call to [`MarkdownHighlighter::lines`] recomputes spans.
//! Fenced code with a known language is coloured with syntect.

use std::cell::{Cell, Ref, RefCell};
use std::sync::LazyLock;

use regex::Regex;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

/// Something that restyles the text surface after the toolbar edits it.
pub trait Highlighter {
    fn reapply_styles(&self);
}

/// Terminal background the code colours must stay readable on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightBackground {
    Light,
    #[default]
    Dark,
}

/// What a run of text represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    HeadingMarker,
    Heading,
    QuoteMarker,
    ListMarker,
    Fence,
    Code,
    InlineCode,
    Bold,
    Italic,
    Link,
}

/// RGB foreground colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A styled run within one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub kind: SpanKind,
    /// Syntax colour, set only inside highlighted code fences.
    pub color: Option<Rgb>,
}

impl StyledSpan {
    fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            color: None,
        }
    }
}

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6} )(.*)$").expect("valid heading regex"));
static QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*> ?)(.*)$").expect("valid quote regex"));
static LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*(?:[-*+]|\d+[.)]) )(.*)$").expect("valid list marker regex")
});
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\([^\)]*\)").expect("valid markdown link regex"));
static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("valid inline code regex"));
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*[^*]+\*\*").expect("valid bold regex"));
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*[^*\s][^*]*\*").expect("valid italic regex"));

/// Lazily recomputed Markdown spans for the editing surface.
#[derive(Debug)]
pub struct MarkdownHighlighter {
    background: HighlightBackground,
    enabled: bool,
    stale: Cell<bool>,
    reapplied: Cell<u64>,
    cache: RefCell<Vec<Vec<StyledSpan>>>,
}

impl MarkdownHighlighter {
    pub fn new(background: HighlightBackground) -> Self {
        Self {
            background,
            enabled: true,
            stale: Cell::new(true),
            reapplied: Cell::new(0),
            cache: RefCell::new(Vec::new()),
        }
    }

    /// A highlighter that renders every line as plain text.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(HighlightBackground::Dark)
        }
    }

    pub const fn background(&self) -> HighlightBackground {
        self.background
    }

    /// How many times styles were re-applied on request.
    pub fn reapply_count(&self) -> u64 {
        self.reapplied.get()
    }

    pub fn is_stale(&self) -> bool {
        self.stale.get()
    }

    /// Mark the cache stale after an edit that did not go through the toolbar.
    pub fn invalidate(&self) {
        self.stale.set(true);
    }

    /// Spans for each of `lines`, recomputing when stale.
    pub fn lines(&self, lines: &[String]) -> Ref<'_, [Vec<StyledSpan>]> {
        if self.stale.get() || self.cache.borrow().len() != lines.len() {
            let spans = if self.enabled {
                highlight_lines(lines, self.background)
            } else {
                lines
                    .iter()
                    .map(|line| vec![StyledSpan::new(line.as_str(), SpanKind::Plain)])
                    .collect()
            };
            *self.cache.borrow_mut() = spans;
            self.stale.set(false);
        }
        Ref::map(self.cache.borrow(), Vec::as_slice)
    }
}

impl Default for MarkdownHighlighter {
    fn default() -> Self {
        Self::new(HighlightBackground::default())
    }
}

impl Highlighter for MarkdownHighlighter {
    fn reapply_styles(&self) {
        self.reapplied.set(self.reapplied.get() + 1);
        self.stale.set(true);
    }
}

/// Style every line of a Markdown source.
pub fn highlight_lines(lines: &[String], background: HighlightBackground) -> Vec<Vec<StyledSpan>> {
    let mut out = Vec::with_capacity(lines.len());
    let mut idx = 0;
    while idx < lines.len() {
        let line = &lines[idx];
        if let Some(lang) = parse_code_fence_language(line) {
            out.push(vec![StyledSpan::new(line.as_str(), SpanKind::Fence)]);
            idx += 1;
            let body_start = idx;
            while idx < lines.len() && parse_code_fence_language(&lines[idx]).is_none() {
                idx += 1;
            }
            out.extend(highlight_code(lang, &lines[body_start..idx], background));
            if idx < lines.len() {
                out.push(vec![StyledSpan::new(lines[idx].as_str(), SpanKind::Fence)]);
                idx += 1;
            }
            continue;
        }
        out.push(highlight_line(line));
        idx += 1;
    }
    out
}

/// Style a single line outside code fences.
pub fn highlight_line(line: &str) -> Vec<StyledSpan> {
    if let Some(caps) = HEADING_RE.captures(line) {
        let mut spans = vec![StyledSpan::new(&caps[1], SpanKind::HeadingMarker)];
        if !caps[2].is_empty() {
            spans.push(StyledSpan::new(&caps[2], SpanKind::Heading));
        }
        return spans;
    }
    for (re, kind) in [
        (&*QUOTE_RE, SpanKind::QuoteMarker),
        (&*LIST_RE, SpanKind::ListMarker),
    ] {
        if let Some(caps) = re.captures(line) {
            let mut spans = vec![StyledSpan::new(&caps[1], kind)];
            spans.extend(inline_spans(&caps[2]));
            return spans;
        }
    }
    inline_spans(line)
}

/// Split running text into plain and inline-markup spans.
pub fn inline_spans(text: &str) -> Vec<StyledSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;
    while let Some((start, end, kind)) = next_inline_token(text, pos) {
        if start > pos {
            spans.push(StyledSpan::new(&text[pos..start], SpanKind::Plain));
        }
        spans.push(StyledSpan::new(&text[start..end], kind));
        pos = end;
    }
    if pos < text.len() || spans.is_empty() {
        spans.push(StyledSpan::new(&text[pos..], SpanKind::Plain));
    }
    spans
}

fn next_inline_token(text: &str, start_at: usize) -> Option<(usize, usize, SpanKind)> {
    [
        (&*INLINE_CODE_RE, SpanKind::InlineCode),
        (&*LINK_RE, SpanKind::Link),
        (&*BOLD_RE, SpanKind::Bold),
        (&*ITALIC_RE, SpanKind::Italic),
    ]
    .into_iter()
    .enumerate()
    .filter_map(|(priority, (re, kind))| {
        re.find_at(text, start_at)
            .map(|m| (m.start(), priority, m.end(), kind))
    })
    .min_by_key(|&(start, priority, _, _)| (start, priority))
    .map(|(start, _, end, kind)| (start, end, kind))
}

/// The language named on a fence line, `Some("")` for a bare fence.
fn parse_code_fence_language(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    trimmed.strip_prefix("```").map(str::trim)
}

fn theme_for(background: HighlightBackground) -> Option<&'static Theme> {
    let name = match background {
        HighlightBackground::Dark => "base16-ocean.dark",
        HighlightBackground::Light => "InspiredGitHub",
    };
    THEME_SET
        .themes
        .get(name)
        .or_else(|| THEME_SET.themes.values().next())
}

fn plain_code(lines: &[String]) -> Vec<Vec<StyledSpan>> {
    lines
        .iter()
        .map(|line| vec![StyledSpan::new(line.as_str(), SpanKind::Code)])
        .collect()
}

fn highlight_code(
    lang: &str,
    lines: &[String],
    background: HighlightBackground,
) -> Vec<Vec<StyledSpan>> {
    let syntax = if lang.is_empty() {
        None
    } else {
        SYNTAX_SET.find_syntax_by_token(lang)
    };
    let (Some(syntax), Some(theme)) = (syntax, theme_for(background)) else {
        return plain_code(lines);
    };

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        let with_newline = format!("{line}\n");
        let Ok(regions) = highlighter.highlight_line(&with_newline, &SYNTAX_SET) else {
            tracing::debug!(lang, "syntect failed on code line, falling back to plain");
            return plain_code(lines);
        };
        let spans: Vec<StyledSpan> = regions
            .into_iter()
            .filter_map(|(style, piece)| {
                let piece = piece.trim_end_matches('\n');
                if piece.is_empty() {
                    return None;
                }
                Some(StyledSpan {
                    text: piece.to_string(),
                    kind: SpanKind::Code,
                    color: Some(Rgb {
                        r: style.foreground.r,
                        g: style.foreground.g,
                        b: style.foreground.b,
                    }),
                })
            })
            .collect();
        if spans.is_empty() {
            out.push(vec![StyledSpan::new("", SpanKind::Code)]);
        } else {
            out.push(spans);
        }
    }
    out
}
