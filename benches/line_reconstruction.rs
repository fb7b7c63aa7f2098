//! Benchmark for line reconstruction and search over a synthetic page.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdf_locate::fonts::UniformWidths;
use pdf_locate::geometry::Point;
use pdf_locate::{LocationExtractor, TextComparison, TextRun};

fn synthetic_extractor(lines: usize, chunks_per_line: usize) -> LocationExtractor {
    let mut extractor = LocationExtractor::new();
    let widths = Arc::new(UniformWidths(0.5));
    for row in 0..lines {
        let y = 800.0 - row as f32 * 12.0;
        for col in 0..chunks_per_line {
            let x0 = col as f32 * 60.0;
            let x1 = x0 + 50.0;
            extractor
                .ingest(
                    TextRun {
                        text: format!("word{row}x{col}"),
                        baseline_start: Point::new(x0, y),
                        baseline_end: Point::new(x1, y),
                        ascent_end: Point::new(x1, y + 8.0),
                        descent_start: Point::new(x0, y - 2.0),
                        single_space_width: 5.0,
                        font_name: "Helvetica".to_string(),
                        font_size: 10.0,
                    },
                    widths.clone(),
                )
                .expect("synthetic runs are valid");
        }
    }
    extractor
}

fn bench_reconstruction(c: &mut Criterion) {
    c.bench_function("reconstruct_60x10", |b| {
        b.iter_with_setup(
            || synthetic_extractor(60, 10),
            |extractor| black_box(extractor.finish()),
        )
    });
}

fn bench_find(c: &mut Criterion) {
    let page = synthetic_extractor(60, 10).finish();
    c.bench_function("find_60x10", |b| {
        b.iter(|| black_box(page.find("word30x5", TextComparison::Exact)))
    });
}

criterion_group!(benches, bench_reconstruction, bench_find);
criterion_main!(benches);
