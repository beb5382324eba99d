use chromasync::{transform, Hsl, Lab, Rgb, Session, Xyz};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn run_benchmarks(c: &mut Criterion) {
    let blue = Rgb::new(78, 166, 255);
    let xyz = blue.to_xyz();
    let lab = blue.to_lab();
    let hsl = blue.to_hsl();

    let mut group = c.benchmark_group("transform");
    group.bench_function("rgb255-to-xyz", |b| {
        b.iter(|| transform::rgb255_to_xyz(black_box(blue)))
    });
    group.bench_function("xyz-to-rgb255", |b| {
        b.iter(|| transform::xyz_to_rgb255(black_box(xyz)))
    });
    group.bench_function("xyz-to-lab", |b| b.iter(|| transform::xyz_to_lab(black_box(xyz))));
    group.bench_function("lab-to-xyz", |b| b.iter(|| transform::lab_to_xyz(black_box(lab))));
    group.bench_function("rgb255-to-hsl", |b| {
        b.iter(|| transform::rgb255_to_hsl(black_box(blue)))
    });
    group.bench_function("hsl-to-rgb255", |b| {
        b.iter(|| transform::hsl_to_rgb255(black_box(hsl)))
    });
    group.finish();

    let session = Session::new(blue);
    let mut group = c.benchmark_group("edit");
    group.bench_function("rgb", |b| b.iter(|| session.apply_edit(black_box(blue))));
    group.bench_function("xyz", |b| {
        b.iter(|| session.apply_edit(black_box(Xyz::new(0.0, 0.0, 200.0))))
    });
    group.bench_function("lab", |b| {
        b.iter(|| session.apply_edit(black_box(Lab::new(50.0, 100.0, -120.0))))
    });
    group.bench_function("hsl", |b| {
        b.iter(|| session.apply_edit(black_box(Hsl::new(210.0, 100.0, 65.0))))
    });
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
