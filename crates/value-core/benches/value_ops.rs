use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use value_core::{Type, Value};

/// A record list shaped like a typical API payload.
fn sample_json(records: usize) -> String {
    let items: Vec<String> = (0..records)
        .map(|i| {
            format!(
                r#"{{"id":{i},"name":"item-{i}","price":{}.25,"active":{},"tags":["a","b"],"at":"2024-01-01T00:00:00Z"}}"#,
                i * 3,
                i % 2 == 0
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

fn bench_decode(c: &mut Criterion) {
    let json = sample_json(200);
    c.bench_function("decode_200_records", |b| {
        b.iter(|| Value::from_json_str(black_box(&json)).unwrap())
    });
}

fn bench_encode(c: &mut Criterion) {
    let value = Value::from_json_str(&sample_json(200)).unwrap();
    c.bench_function("encode_200_records", |b| {
        b.iter(|| black_box(&value).to_json_string().unwrap())
    });
}

fn bench_clone_and_equality(c: &mut Criterion) {
    let value = Value::from_json_str(&sample_json(200)).unwrap();
    c.bench_function("clone_200_records", |b| b.iter(|| black_box(&value).clone()));
    let copy = value.clone();
    c.bench_function("equals_200_records", |b| {
        b.iter(|| black_box(&value) == black_box(&copy))
    });
}

fn bench_coerce(c: &mut Criterion) {
    let values = [
        Value::from("yes"),
        Value::Float(2.6),
        Value::from("123"),
        Value::Int(0),
    ];
    c.bench_function("coerce_scalars", |b| {
        b.iter(|| {
            for v in &values {
                black_box(v.coerce_to(Type::Bool));
                black_box(v.coerce_to(Type::Int));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_decode,
    bench_encode,
    bench_clone_and_equality,
    bench_coerce
);
criterion_main!(benches);
