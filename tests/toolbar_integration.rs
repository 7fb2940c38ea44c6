use std::rc::Rc;

use mdbar::editor::EditorBuffer;
use mdbar::highlight::{Highlighter, MarkdownHighlighter, SpanKind};
use mdbar::link::detector_from_pattern;
use mdbar::toolbar::{Action, TextSurface, ToolbarActionHandler};

fn handler_with_highlighter() -> (ToolbarActionHandler, Rc<MarkdownHighlighter>) {
    let highlighter = Rc::new(MarkdownHighlighter::default());
    let notify: Rc<dyn Highlighter> = highlighter.clone();
    (ToolbarActionHandler::new().with_highlighter(notify), highlighter)
}

#[test]
fn test_heading_then_highlight_sees_heading() {
    let (handler, highlighter) = handler_with_highlighter();
    let mut buffer = EditorBuffer::from_text("Intro\nbody");

    let edit = handler.perform(Action::H2, &mut buffer);

    assert_eq!(buffer.text(), "## Intro\nbody");
    assert_eq!(edit.cursor, Some(3));
    assert_eq!(buffer.offset(), 3);
    assert_eq!(highlighter.reapply_count(), 1);
    assert!(highlighter.is_stale());

    let lines = buffer.lines();
    let spans = highlighter.lines(&lines);
    assert!(spans[0].iter().any(|span| span.kind == SpanKind::Heading));
}

#[test]
fn test_block_quote_caret_ends_after_prefix_in_buffer() {
    let (handler, _) = handler_with_highlighter();
    let mut buffer = EditorBuffer::from_text("wise words");
    buffer.select(0, 4).unwrap();

    let edit = handler.perform(Action::BlockQuote, &mut buffer);

    assert_eq!(buffer.text(), "> wise words");
    assert_eq!(edit.cursor, None);
    // The buffer shifts its own selection past the inserted prefix
    let selection = buffer.selection().unwrap();
    assert_eq!((selection.start(), selection.end()), (2, 6));
}

#[test]
fn test_formatting_sequence_on_one_buffer() {
    let (handler, highlighter) = handler_with_highlighter();
    let mut buffer = EditorBuffer::from_text("see docs");

    buffer.select(4, 8).unwrap();
    handler.perform(Action::Bold, &mut buffer);
    assert_eq!(buffer.text(), "see **docs**");

    buffer.select(0, 3).unwrap();
    handler.perform(Action::Italic, &mut buffer);
    assert_eq!(buffer.text(), "*see* **docs**");

    buffer.move_to_end();
    handler.perform(Action::CodeBlock, &mut buffer);
    assert_eq!(buffer.text(), "*see* **docs**```\n\n```");
    assert_eq!(buffer.offset(), 14 + 4);

    assert_eq!(highlighter.reapply_count(), 3);
}

#[test]
fn test_lists_insert_on_new_line() {
    let handler = ToolbarActionHandler::new();
    let mut buffer = EditorBuffer::from_text("items");
    buffer.move_to_end();

    handler.perform(Action::UnorderedList, &mut buffer);
    assert_eq!(buffer.text(), "items\n- ");
    assert_eq!(buffer.offset(), 8);

    handler.perform(Action::OrderedList, &mut buffer);
    assert_eq!(buffer.text(), "items\n- \n1. ");
    assert_eq!(buffer.offset(), 11);
}

#[test]
fn test_custom_link_pattern_drives_link_action() {
    let detector = detector_from_pattern(r"^gh:\S+$").unwrap();
    let handler = ToolbarActionHandler::new().with_link_detector(detector);

    let mut buffer = EditorBuffer::from_text("gh:rust-lang/rust");
    buffer.select(0, 17).unwrap();
    handler.perform(Action::Link, &mut buffer);
    assert_eq!(buffer.text(), "[](gh:rust-lang/rust)");
    assert_eq!(buffer.offset(), 1);

    let mut buffer = EditorBuffer::from_text("https://example.com");
    buffer.select(0, 19).unwrap();
    handler.perform(Action::Link, &mut buffer);
    assert_eq!(buffer.text(), "[https://example.com]()");
}

#[test]
fn test_every_action_keeps_selected_text() {
    for action in Action::ALL {
        let handler = ToolbarActionHandler::new();
        let mut buffer = EditorBuffer::from_text("abc xyz");
        buffer.select(4, 7).unwrap();

        let edit = handler.perform(action, &mut buffer);

        assert!(buffer.text().contains("xyz"), "{action:?}");
        assert!(buffer.len_chars() > 7, "{action:?} inserted nothing");
        assert!(edit.cursor.is_none_or(|c| c <= buffer.len_chars()), "{action:?}");
    }
}

#[test]
fn test_bold_after_joining_cr_and_lf_keeps_line_break_intact() {
    let handler = ToolbarActionHandler::new();
    let mut buffer = EditorBuffer::from_text("a\rx\nb");
    buffer.move_to(1, 0);
    buffer.delete_forward();

    let edit = handler.perform(Action::Bold, &mut buffer);

    assert_eq!(buffer.text(), "a****\r\nb");
    assert_eq!(edit.cursor, Some(3));
    assert_eq!(buffer.line_count(), 2);
    assert_eq!(buffer.line_at(0), Some("a****".to_string()));
}
