//! Unparse Throughput Benchmarks
//!
//! Measures rendering of deep expression chains and of a representative
//! statement mix.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench --bench unparse
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sqltree::stmt::{AlterTableDropColumn, AlterTableRename, Select, TruncateTable};
use sqltree::{registry, Call, Identifier, Literal, Node, NodeList, Span};

fn ident(name: &str) -> Node {
    Node::Identifier(Identifier::simple(Span::ZERO, name))
}

fn num(n: i64) -> Node {
    Node::Literal(Literal::number(Span::ZERO, n.to_string()).unwrap())
}

/// `x + 1 + 2 + ... + n`, alternating into multiplication every 8 terms so
/// the renderer's precedence path stays hot.
fn deep_chain(terms: i64) -> Node {
    let mut tree = ident("x");
    for i in 0..terms {
        let op = if i % 8 == 7 {
            &registry::MULTIPLY
        } else {
            &registry::PLUS
        };
        tree = Call::binary(op, Span::ZERO, tree, num(i)).unwrap();
    }
    tree
}

fn statement_mix() -> Vec<Node> {
    let columns: Vec<Node> = (0..16).map(|i| ident(&format!("c{}", i))).collect();
    vec![
        AlterTableRename::build(
            Span::ZERO,
            Identifier::simple(Span::ZERO, "t"),
            Identifier::simple(Span::ZERO, "u"),
        )
        .unwrap(),
        AlterTableDropColumn::build(
            Span::ZERO,
            Identifier::simple(Span::ZERO, "t"),
            NodeList::new(Span::ZERO, columns.clone()),
        )
        .unwrap(),
        TruncateTable::build(Span::ZERO, Identifier::simple(Span::ZERO, "t")).unwrap(),
        Select::build(
            Span::ZERO,
            NodeList::new(Span::ZERO, columns),
            Identifier::simple(Span::ZERO, "t"),
            Some(Call::binary(&registry::GT, Span::ZERO, ident("c0"), num(10)).unwrap()),
        )
        .unwrap(),
    ]
}

fn bench_deep_expression(c: &mut Criterion) {
    let tree = deep_chain(512);
    let rendered_len = tree.unparse().len() as u64;

    let mut group = c.benchmark_group("unparse_expression");
    group.throughput(Throughput::Bytes(rendered_len));
    group.bench_function("chain_512", |b| {
        b.iter(|| black_box(&tree).unparse());
    });
    group.finish();
}

fn bench_statement_mix(c: &mut Criterion) {
    let statements = statement_mix();

    c.bench_function("unparse_statement_mix", |b| {
        b.iter(|| {
            for stmt in &statements {
                black_box(black_box(stmt).unparse());
            }
        });
    });
}

fn bench_clone_and_deep_eq(c: &mut Criterion) {
    let tree = deep_chain(512);

    c.bench_function("clone_with_512", |b| {
        b.iter(|| black_box(&tree).clone_with(Span::ZERO));
    });

    let copy = tree.clone_with(Span::ZERO);
    c.bench_function("deep_eq_512", |b| {
        b.iter(|| black_box(&tree).deep_eq(black_box(&copy)));
    });
}

criterion_group!(
    benches,
    bench_deep_expression,
    bench_statement_mix,
    bench_clone_and_deep_eq
);
criterion_main!(benches);
