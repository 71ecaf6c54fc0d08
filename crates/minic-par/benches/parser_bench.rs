//! Parser benchmarks.
//!
//! Run with: `cargo bench --package minic-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use minic_lex::Lexer;
use minic_par::{Parser, Program};
use minic_util::Handler;

fn parse_source(source: &str) -> Program {
    let handler = Handler::new();
    let tokens = Lexer::new(source, &handler).tokenize();
    let mut parser = Parser::new(tokens, &handler);
    parser.parse()
}

fn bench_parser_assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_assignment");

    let source = "a = 1; b = 2; return a + b;";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("assignment", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_expression_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_expression_chain");

    let source = "return 1 + 2 * 3 - 4 / 2 + (5 - 1) * 2 == 10;";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("expression_chain", |b| {
        b.iter(|| parse_source(black_box(source)))
    });

    group.finish();
}

fn bench_parser_control_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_control_flow");

    let source = r#"
        i = 0;
        sum = 0;
        while (i < 10) {
            if (i == 5) sum = sum + 100; else sum = sum + i;
            i = i + 1;
        }
        for (j = 0; j < 3; j = j + 1) sum = sum + j;
        return sum;
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("control_flow", |b| {
        b.iter(|| parse_source(black_box(source)))
    });

    group.finish();
}

fn bench_parser_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_calls");

    let source = "return add(1, 2, mul(3, 4), foo());";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("calls", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_many_locals(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_many_locals");

    let mut source = String::new();
    for i in 0..64 {
        source.push_str(&format!("var{i} = {i};\n"));
    }
    source.push_str("return var0;\n");

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("many_locals", |b| {
        b.iter(|| parse_source(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_assignment,
    bench_parser_expression_chain,
    bench_parser_control_flow,
    bench_parser_calls,
    bench_parser_many_locals
);
criterion_main!(benches);
