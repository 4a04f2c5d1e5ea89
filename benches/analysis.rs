// benches/analysis.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use propwatch::core::analysis;

fn sample_delimited() -> String {
    let mut s = String::from("Quick take on this week's launches. ");
    for i in 0..50 {
        s.push_str(&format!(
            "**Label {i}:** some moderately long content cell with enough text to matter "
        ));
    }
    s
}

fn sample_numbered() -> String {
    let mut s = String::new();
    for i in 1..=50 {
        s.push_str(&format!("{i}. Topic {i}: content for this point goes here "));
    }
    s
}

fn bench_parse(c: &mut Criterion) {
    let delimited = sample_delimited();
    let numbered = sample_numbered();

    c.bench_function("parse_delimited", |b| {
        b.iter(|| {
            let secs = analysis::parse(black_box(Some(delimited.as_str())));
            black_box(secs.len())
        })
    });

    c.bench_function("parse_numbered", |b| {
        b.iter(|| {
            let secs = analysis::parse(black_box(Some(numbered.as_str())));
            black_box(secs.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
