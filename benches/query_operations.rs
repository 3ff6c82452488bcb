use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cxxgraph::{NodeCache, NodeKind, Record};

/// One namespace per 100 classes, 10 functions per class.
fn corpus(classes: usize) -> Vec<Record> {
    let mut records = Vec::new();
    let mut next_id = 0usize;
    let mut id = |n: &mut usize| {
        *n += 1;
        format!("_{}", *n)
    };

    let mut namespace = String::new();
    for c in 0..classes {
        if c % 100 == 0 {
            namespace = id(&mut next_id);
            records.push(
                Record::new(NodeKind::Namespace, namespace.clone())
                    .with_name(format!("ns{}", c / 100)),
            );
        }
        let class = id(&mut next_id);
        records.push(
            Record::new(NodeKind::Class, class.clone())
                .with_name(format!("Class{c}"))
                .with_context(namespace.clone()),
        );
        for f in 0..10 {
            records.push(
                Record::new(NodeKind::Function, id(&mut next_id))
                    .with_name(format!("method{f}"))
                    .with_context(class.clone()),
            );
        }
    }
    records
}

fn bench_ingestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingestion");

    for size in [100, 1000, 10_000] {
        let records = corpus(size);
        group.bench_with_input(BenchmarkId::new("from_records", size), &records, |b, records| {
            b.iter(|| {
                let cache = NodeCache::from_records(records.iter().cloned()).unwrap();
                black_box(cache.node_count());
            });
        });
    }

    group.finish();
}

fn bench_child_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("child_search");

    for size in [100, 1000, 10_000] {
        let cache = NodeCache::from_records(corpus(size)).unwrap();
        group.bench_with_input(BenchmarkId::new("classes_of_namespace", size), &size, |b, _| {
            b.iter(|| {
                let classes = cache
                    .namespaces("ns0")
                    .unwrap()
                    .classes(())
                    .unwrap();
                black_box(classes.len());
            });
        });
    }

    group.finish();
}

fn bench_qualified_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("qualified_names");

    // Memoized path: first call resolves the chain, repeats hit the cache.
    let cache = NodeCache::from_records(corpus(1000)).unwrap();
    group.bench_function("all_nodes", |b| {
        b.iter(|| {
            for node in cache.iter() {
                black_box(node.qualified_name());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ingestion, bench_child_search, bench_qualified_names);
criterion_main!(benches);
