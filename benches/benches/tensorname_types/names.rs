use criterion::{black_box, criterion_group, Criterion};
use std::sync::Arc;
use tensorname_core::{backend::Backend, default::DefaultTypeConfig, dtype::ScalarType};
use tensorname_types::{enumerate_declared_types, format_type_name, TypeNameResolver};

const NAMES: [(&str, &str); 4] = [
    ("cpu", "torch.FloatTensor"),
    ("cuda", "torch.cuda.DoubleTensor"),
    ("sparse", "torch.sparse.LongTensor"),
    ("default", "torch.Tensor"),
];

pub fn format(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("names/format");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));

    group.bench_function("single", |b| {
        b.iter(|| format_type_name(black_box(&(Backend::CUDA, ScalarType::Float))).unwrap())
    });
    group.bench_function("declared", |b| {
        b.iter(|| {
            for pair in enumerate_declared_types() {
                black_box(format_type_name(&pair).unwrap());
            }
        })
    });

    group.finish();
}

pub fn resolve(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("names/resolve");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));

    let resolver = TypeNameResolver::new(Arc::new(DefaultTypeConfig::default()));
    for (label, name) in NAMES {
        group.bench_function(label, |b| b.iter(|| resolver.resolve(black_box(name)).unwrap()));
    }

    group.bench_function("cold", |b| {
        b.iter(|| {
            let resolver = TypeNameResolver::new(Arc::new(DefaultTypeConfig::default()));
            black_box(resolver.resolve("torch.cuda.sparse.HalfTensor").unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, format, resolve);
