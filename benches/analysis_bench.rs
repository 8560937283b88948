use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use plush::analysis::report::full_report_body;
use plush::{analyze, dialogue_by_character, find_cliches, normalize, split_sentences, suggest};

const SHORT_TEXT: &str = "It was a dark night. \"Run,\" said Ada. The door was locked by someone.";
const PARAGRAPH: &str = "\u{201C}We should really go,\u{201D} whispered Elena. Dr. Smith was just very \
tired, like a needle in a haystack. \"Why?\" asked Tom -- but nobody answered. The rain had been \
pounding the windows since dawn and it showed no sign of stopping any time soon.\n\n";

fn long_text() -> String {
    PARAGRAPH.repeat(200)
}

fn bench_sections(c: &mut Criterion) {
    let long = long_text();
    let mut group = c.benchmark_group("sections");

    group.bench_function("split_sentences_short", |b| {
        b.iter(|| split_sentences(black_box(SHORT_TEXT)).len())
    });
    group.bench_function("split_sentences_long", |b| {
        b.iter(|| split_sentences(black_box(&long)).len())
    });
    group.bench_function("normalize_long", |b| b.iter(|| normalize(black_box(&long))));
    group.bench_function("suggest_long", |b| b.iter(|| suggest(black_box(&long))));
    group.bench_function("analyze_long", |b| b.iter(|| analyze(black_box(&long), "Gritty")));
    group.bench_function("dialogue_by_character_long", |b| {
        b.iter(|| dialogue_by_character(black_box(&long)))
    });
    group.bench_function("find_cliches_long", |b| b.iter(|| find_cliches(black_box(&long))));

    group.finish();
}

// Throughput of the whole report in bytes of manuscript per second
fn bench_full_report_throughput(c: &mut Criterion) {
    let long = long_text();
    let mut group = c.benchmark_group("full_report");
    group.throughput(Throughput::Bytes(long.len() as u64));

    group.bench_function("full_report_body", |b| {
        b.iter(|| full_report_body(black_box(&long), "None"))
    });

    group.finish();
}

criterion_group!(benches, bench_sections, bench_full_report_throughput);
criterion_main!(benches);
