//! Transform Pipeline Benchmarks
//!
//! **Purpose:** Measure the cost of turning scripts into bookmarklets
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench transform_pipeline
//! ```
//!
//! **What's Being Measured:**
//! 1. `strip comments` - the three regex passes
//! 2. `flatten` - newline/whitespace collapsing
//! 3. `transform` - the full pipeline on a typical scraper
//! 4. `compose and transform` - the combined chat variant
//!
//! **Performance Notes:**
//! - Regexes are compiled once and cached in `OnceLock` statics
//! - Every stage is linear in input length

use bookmarkletize::compose::{compose, SourceScript};
use bookmarkletize::transform::{flatten, strip_comments, transform};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const SCRAPER: &str = r#"// Scraper
/* Collects every turn on the page
   and saves it as markdown. */
function scrape() {
    var turns = document.querySelectorAll('.turn'); // one per message
    var src = "https://example.com/chat";
    return Array.from(turns).map(function (t) { return t.innerText; }).join('\n') + src;
}

function download() {
    var link = document.createElement('a');
    link.href = 'data:text/markdown,' + encodeURIComponent(scrape());
    link.download = 'chat.md';
    link.click();
}

download();
"#;

fn large_script() -> String {
    SCRAPER.repeat(200)
}

fn bench_stages(c: &mut Criterion) {
    let big = large_script();

    c.bench_function("strip comments", |b| {
        b.iter(|| strip_comments(black_box(&big)))
    });

    let stripped = strip_comments(&big);
    c.bench_function("flatten", |b| b.iter(|| flatten(black_box(&stripped))));

    c.bench_function("transform", |b| b.iter(|| transform(black_box(SCRAPER))));
}

fn bench_compose(c: &mut Criterion) {
    let scripts = vec![
        SourceScript::with_entry_call(SCRAPER, "download();"),
        SourceScript::with_entry_call(SCRAPER, "download();"),
        SourceScript::new("download();"),
    ];

    c.bench_function("compose and transform", |b| {
        b.iter(|| transform(&compose(black_box(&scripts))))
    });
}

criterion_group!(benches, bench_stages, bench_compose);
criterion_main!(benches);
