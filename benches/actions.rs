//! Benchmarks for toolbar actions and highlighting on large buffers.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mdbar::editor::EditorBuffer;
use mdbar::highlight::{HighlightBackground, highlight_lines};
use mdbar::toolbar::{Action, ToolbarActionHandler};

fn large_document() -> String {
    let mut md = String::new();
    for i in 0..2_000 {
        md.push_str(&format!("## Section {i}\n\nSome **bold** and *italic* text with a [link](https://example.com).\n\n```rust\nfn main() {{ println!(\"{i}\"); }}\n```\n\n"));
    }
    md
}

fn bench_bold_middle_of_large_buffer(c: &mut Criterion) {
    let md = large_document();
    let handler = ToolbarActionHandler::new();
    let mid = md.chars().count() / 2;
    c.bench_function("bold_large_buffer", |b| {
        b.iter_batched(
            || {
                let mut buffer = EditorBuffer::from_text(&md);
                buffer.select(mid, mid + 10).unwrap();
                buffer
            },
            |mut buffer| handler.perform(black_box(Action::Bold), &mut buffer),
            criterion::BatchSize::LargeInput,
        );
    });
}

fn bench_link_detection(c: &mut Criterion) {
    let handler = ToolbarActionHandler::new();
    c.bench_function("link_detection", |b| {
        b.iter(|| handler.is_link(black_box("see https://example.com/docs for details")));
    });
}

fn bench_highlight_large_document(c: &mut Criterion) {
    let lines: Vec<String> = large_document().lines().map(ToOwned::to_owned).collect();
    c.bench_function("highlight_large_document", |b| {
        b.iter(|| highlight_lines(black_box(&lines), HighlightBackground::Dark));
    });
}

criterion_group!(
    benches,
    bench_bold_middle_of_large_buffer,
    bench_link_detection,
    bench_highlight_large_document
);
criterion_main!(benches);
