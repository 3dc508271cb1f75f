//! Lexer Benchmarks
//!
//! Measures scanning throughput of the lexical analyzer.
//! Run with: `cargo bench --package picoc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use picoc_lex::{Backtrack, LexicalAnalyzer, ScanConfig};
use picoc_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    let lexer = LexicalAnalyzer::new(source, &handler);
    // LexicalAnalyzer implements Iterator, so we can use it directly
    lexer.count()
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "IF x <> 10 THEN PRINT x; WHILE i < 10 DO i = i + 1;";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_assign", |b| {
        b.iter(|| lexer_token_count(black_box("x = 42;")))
    });

    group.bench_function("control_flow", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    let source = r#"
        i = 0;
        total = 0.0;
        WHILE i <= 100 DO
            IF i >= 50 THEN
                total = total + 1.5;
            PRINT [i, total];
            mask = 17x08 * 1Fx16;
            i = i + 1;
        IF total <> 75.0 THEN PRINT (total / 2);
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("program", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("x = 123456;")))
    });

    group.bench_function("real", |b| {
        b.iter(|| lexer_token_count(black_box("x = 3.14159;")))
    });

    group.bench_function("base16", |b| {
        b.iter(|| lexer_token_count(black_box("x = 98765x16;")))
    });

    group.bench_function("rejected_suffix_restore", |b| {
        let config = ScanConfig::new().with_backtrack(Backtrack::Restore);
        b.iter(|| {
            let handler = Handler::new();
            LexicalAnalyzer::new(black_box("x = 89x08 3.a;"), &handler)
                .with_config(config)
                .count()
        })
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| {
        b.iter(|| lexer_token_count(black_box("x = 42;")))
    });

    group.bench_function("long_ident", |b| {
        b.iter(|| lexer_token_count(black_box("veryLongVariableName2 = 42;")))
    });

    group.bench_function("many_ident", |b| {
        b.iter(|| lexer_token_count(black_box("a = 1; b = 2; c = 3; d = 4; e = 5;")))
    });

    group.finish();
}

fn bench_pushback(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_pushback");

    group.bench_function("lookahead_one", |b| {
        b.iter(|| {
            let handler = Handler::new();
            let mut lexer = LexicalAnalyzer::new(black_box("IF a < b THEN PRINT a;"), &handler);
            let mut count = 0;
            loop {
                let token = lexer.get_token();
                if token.is_eof() {
                    break;
                }
                lexer.unget_token(token);
                lexer.get_token();
                count += 1;
            }
            count
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_program,
    bench_lexer_numbers,
    bench_lexer_identifiers,
    bench_pushback
);
criterion_main!(benches);
