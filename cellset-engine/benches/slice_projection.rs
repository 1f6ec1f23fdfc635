//! Benchmarks for the slice projection walk.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cellset_engine::{CellsetReader, Projection, SliceSelection};
use resultset::{Axis, Cell, Cellset, Member, Tuple};

fn build_cellset(cols: usize, rows: usize) -> Cellset {
    let mut axis0 = Axis::new("Axis0");
    for i in 0..cols {
        axis0
            .tuples
            .push(Tuple::of(Member::new(format!("[Product].[{}]", i))));
    }
    let mut axis1 = Axis::new("Axis1");
    for i in 0..rows {
        axis1
            .tuples
            .push(Tuple::of(Member::new(format!("[Customer].[{}]", i))));
    }

    let cells = (0..cols * rows)
        .map(|ordinal| {
            Cell::new(ordinal)
                .with_property("Value", ordinal as f64)
                .with_property("FmtValue", format!("{}", ordinal))
        })
        .collect();

    Cellset::new(vec![axis0, axis1], cells)
}

fn bench_wrap(c: &mut Criterion) {
    let cellset = build_cellset(100, 100);
    c.bench_function("wrap_100x100", |b| {
        b.iter(|| CellsetReader::new(black_box(cellset.clone())))
    });
}

fn bench_full_slice(c: &mut Criterion) {
    let reader = CellsetReader::new(build_cellset(100, 100));
    let selection = SliceSelection::new();
    c.bench_function("full_slice_100x100_cells", |b| {
        b.iter(|| reader.slice(black_box(&selection), &Projection::Cells))
    });
}

fn bench_value_slice(c: &mut Criterion) {
    let reader = CellsetReader::new(build_cellset(100, 100));
    let selection = SliceSelection::new();
    let projection = Projection::property("Value");
    c.bench_function("full_slice_100x100_values", |b| {
        b.iter(|| reader.slice(black_box(&selection), &projection))
    });
}

fn bench_narrow_slice(c: &mut Criterion) {
    let reader = CellsetReader::new(build_cellset(100, 100));
    let selection = SliceSelection::new()
        .with_axis("Axis0", vec![3, 17, 42])
        .with_axis("Axis1", (0..50).collect::<Vec<_>>());
    let projection = Projection::property("Value");
    c.bench_function("narrow_slice_3x50_values", |b| {
        b.iter(|| reader.slice(black_box(&selection), &projection))
    });
}

criterion_group!(
    benches,
    bench_wrap,
    bench_full_slice,
    bench_value_slice,
    bench_narrow_slice
);
criterion_main!(benches);
