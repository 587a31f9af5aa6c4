use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use sjson_core::{parse, to_string, Value};

/// A save-file shaped document: many small records with literal enumerators.
fn sample_document(records: usize) -> String {
    let mut doc = Value::object();
    let mut items = Value::array();
    for i in 0..records {
        let mut item = Value::object();
        item.set("id", i)
            .set("name", format!("item number {i}"))
            .set("rarity", Value::literal(if i % 3 == 0 { "rare" } else { "common" }))
            .set("pos", Value::Array(vec![Value::from(i % 17), Value::from(i % 5)]));
        items.push(item);
    }
    doc.set("version", 3).set("items", items);
    to_string(&doc)
}

fn bench_parse(c: &mut Criterion) {
    let text = sample_document(2_000);
    c.bench_function("parse_2000_records", |b| b.iter(|| parse(black_box(&text))));
}

fn bench_serialize(c: &mut Criterion) {
    let doc = parse(&sample_document(2_000)).expect("sample document parses");
    c.bench_function("serialize_2000_records", |b| b.iter(|| to_string(black_box(&doc))));
}

criterion_group!(benches, bench_parse, bench_serialize);
criterion_main!(benches);
