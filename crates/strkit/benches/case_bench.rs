// Criterion benchmarks for the case conversion paths.
//
// The interesting split is unchanged input (fast path, no allocation)
// versus input that needs rewriting.
//
// Run:
//   cargo bench -p strkit

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use strkit::{camel_case, snake_case};

fn bench_unchanged_simple(c: &mut Criterion) {
    c.bench_function("snake_unchanged_simple", |b| {
        b.iter(|| snake_case(black_box("sample_text")))
    });
}

fn bench_unchanged_long(c: &mut Criterion) {
    c.bench_function("snake_unchanged_long", |b| {
        b.iter(|| snake_case(black_box("invite_your_customers_add_invites")))
    });
}

fn bench_modified_simple(c: &mut Criterion) {
    c.bench_function("snake_modified_simple", |b| {
        b.iter(|| snake_case(black_box("sample text")))
    });
}

fn bench_modified_long(c: &mut Criterion) {
    c.bench_function("snake_modified_long", |b| {
        b.iter(|| snake_case(black_box("inviteYourCustomersAddInvites")))
    });
}

fn bench_modified_special_chars(c: &mut Criterion) {
    c.bench_function("snake_modified_special_chars", |b| {
        b.iter(|| snake_case(black_box("FOO:BAR$BAZ__Sample    Text___")))
    });
}

fn bench_modified_unicode(c: &mut Criterion) {
    c.bench_function("snake_modified_unicode", |b| {
        b.iter(|| snake_case(black_box("\u{df}_\u{192}_foo")))
    });
}

fn bench_leading_digit_upper(c: &mut Criterion) {
    c.bench_function("snake_leading_digit_upper", |b| {
        b.iter(|| snake_case(black_box("_5TEst")))
    });
}

fn bench_camel(c: &mut Criterion) {
    c.bench_function("camel", |b| {
        b.iter(|| camel_case(black_box("some sample text here_noething:too$amazing")))
    });
}

criterion_group!(
    benches,
    bench_unchanged_simple,
    bench_unchanged_long,
    bench_modified_simple,
    bench_modified_long,
    bench_modified_special_chars,
    bench_modified_unicode,
    bench_leading_digit_upper,
    bench_camel,
);
criterion_main!(benches);
