use criterion::{Criterion, criterion_group, criterion_main};
use sectionizer_engine::{DocNode, StructureOptions, flatten, segment, structure};
use serde_json::{Value, json};

fn text(value: String) -> Value {
    json!([{ "type": "text", "text": value }])
}

/// A resume-shaped document: one title, then `entries` H2/H3 branches, each
/// with a paragraph and a short list.
fn generate_document(entries: usize) -> DocNode {
    let mut content = vec![json!({
        "type": "heading", "attrs": { "level": 1 }, "content": text("Experience".into())
    })];
    for i in 0..entries {
        content.push(json!({ "type": "heading", "attrs": { "level": 2 }, "content": text(format!("Role {i}")) }));
        content.push(json!({ "type": "heading", "attrs": { "level": 3 }, "content": text(format!("{i} years")) }));
        content.push(json!({ "type": "paragraph", "content": text(format!("Did things at company {i}.")) }));
        content.push(json!({
            "type": "bulletList",
            "content": [
                { "type": "listItem", "content": [{ "type": "paragraph", "content": text("Led a team".into()) }] },
                { "type": "listItem", "content": [{ "type": "paragraph", "content": text("Shipped".into()) }] }
            ]
        }));
    }
    serde_json::from_value(json!({ "type": "doc", "content": content })).unwrap()
}

fn bench_structure(c: &mut Criterion) {
    let mut group = c.benchmark_group("structure");
    group.sample_size(20);

    let options = StructureOptions::default();
    let document = generate_document(200);

    group.bench_function("flatten", |b| {
        b.iter(|| std::hint::black_box(flatten(std::hint::black_box(&document), &options)));
    });

    let sequence = flatten(&document, &options);
    group.bench_function("segment", |b| {
        b.iter(|| std::hint::black_box(segment(std::hint::black_box(&sequence)).groups.len()));
    });

    group.bench_function("full_pipeline", |b| {
        b.iter(|| std::hint::black_box(structure(std::hint::black_box(&document), &options)));
    });

    group.finish();
}

criterion_group!(benches, bench_structure);
criterion_main!(benches);
