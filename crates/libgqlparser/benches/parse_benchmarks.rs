mod fixtures;

use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgqlparser::GraphQLParser;
use libgqlparser::scanner::GraphQLScanner;

// ─── Group 1: Execution Document Parsing ─────────────────

fn execution_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution_parse");

    group.bench_function("simple_query", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(fixtures::SIMPLE_QUERY);
            black_box(parser.parse_execution_document())
        })
    });

    group.bench_function("complex_query", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(fixtures::COMPLEX_QUERY);
            black_box(parser.parse_execution_document())
        })
    });

    let nested_10 = fixtures::operations::deeply_nested_query(10);
    group.bench_function("nested_depth_10", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(&nested_10);
            black_box(parser.parse_execution_document())
        })
    });

    let nested_60 = fixtures::operations::deeply_nested_query(60);
    group.bench_function("nested_depth_60", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(&nested_60);
            black_box(parser.parse_execution_document())
        })
    });

    let many_ops = fixtures::operations::many_operations(50);
    group.bench_function("many_operations_50", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(&many_ops);
            black_box(parser.parse_execution_document())
        })
    });

    let values = fixtures::operations::value_heavy_query(100);
    group.bench_function("value_heavy_100", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(&values);
            black_box(parser.parse_execution_document())
        })
    });

    group.finish();
}

// ─── Group 2: Scanner Only ───────────────────────────────

fn scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let many_ops = fixtures::operations::many_operations(50);
    let inputs: &[(&str, &str)] = &[
        ("complex_query", fixtures::COMPLEX_QUERY),
        ("many_operations_50", &many_ops),
    ];

    for &(label, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(label, |b| {
            b.iter(|| {
                for token in GraphQLScanner::new(input) {
                    black_box(token);
                }
            })
        });
    }

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(benches, execution_parse, scanner);
criterion_main!(benches);
