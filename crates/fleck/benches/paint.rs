use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fleck::prelude::*;
use glam::DVec2;

const DENSITIES: [u32; 4] = [4, 16, 64, 256];
const EXTENT: (f64, f64) = (1200.0, 900.0);

fn paint_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint/region_1200x900");

    for &density in &DENSITIES {
        let config = PaintConfig::new(
            42,
            density,
            10.0,
            vec!["#e07a5f".to_owned(), "#3d405b".to_owned()],
        );
        let painter = FleckPainter::new(config);

        // 4x3 cells at GRID_SIZE 300.
        let cells = 12u64;
        group.throughput(Throughput::Elements(cells * density as u64));

        group.bench_with_input(BenchmarkId::from_parameter(density), &density, |b, _| {
            b.iter(|| {
                let mut surface = RecordingSurface::new();
                painter
                    .paint(&mut surface, DVec2::new(EXTENT.0, EXTENT.1).into())
                    .expect("valid config");
                black_box(surface.ops().len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, paint_benches);
criterion_main!(benches);
