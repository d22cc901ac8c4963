use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonmock::MockDataGenerator;

const USER_SCHEMA: &str = r#"{
    "id": "uuid",
    "name": "name",
    "email": "email",
    "age": "smallNumber",
    "active": "boolean",
    "createdAt": "past",
    "tags": "tags"
}"#;

fn benchmark_batch_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for count in [1i64, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut generator = MockDataGenerator::with_seed(42);
            b.iter(|| generator.generate(black_box(USER_SCHEMA), count).unwrap());
        });
    }
    group.finish();
}

fn benchmark_fallback_types(c: &mut Criterion) {
    let mut generator = MockDataGenerator::with_seed(42);
    c.bench_function("unknown_types_1000", |b| {
        b.iter(|| {
            generator
                .generate(black_box(r#"{"a": "nope", "b": "still_nope"}"#), 1000)
                .unwrap()
        });
    });
}

criterion_group!(benches, benchmark_batch_sizes, benchmark_fallback_types);
criterion_main!(benches);
