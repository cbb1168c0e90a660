use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use pipe_lattice_editor::core::{connection_nodes, NodeIndex, GRID_UNIT_M};
use pipe_lattice_editor::{
    build_structure_by_counts, build_tiered_scaffold, PartsBudget, PartsSummary, Structure,
};
use std::hint::black_box;

fn build_box_structure(count_40: u32) -> Structure {
    let mut structure = Structure::new();
    structure.replace_all(build_structure_by_counts(PartsBudget::new(0, count_40)));
    structure
}

fn build_query_points(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let x = (i % 64) as f32 * GRID_UNIT_M + 0.013;
            let y = ((i * 7) % 64) as f32 * GRID_UNIT_M + 0.021;
            let z = ((i * 13) % 16) as f32 * GRID_UNIT_M;
            Vec3::new(x, y, z)
        })
        .collect()
}

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generators");

    for &count_40 in &[1_200u32, 12_000u32] {
        group.bench_with_input(
            BenchmarkId::new("boxes", count_40),
            &PartsBudget::new(count_40, count_40),
            |b, budget| b.iter(|| black_box(build_structure_by_counts(black_box(*budget)).len())),
        );
    }

    group.bench_function("tiered", |b| b.iter(|| black_box(build_tiered_scaffold().len())));
    group.finish();
}

fn bench_connection_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("connection_graph");

    for &count_40 in &[1_200u32, 12_000u32] {
        let structure = build_box_structure(count_40);

        group.bench_with_input(
            BenchmarkId::new("nodes", count_40),
            &structure,
            |b, structure| b.iter(|| black_box(connection_nodes(black_box(structure)).len())),
        );

        group.bench_with_input(
            BenchmarkId::new("parts_summary", count_40),
            &structure,
            |b, structure| {
                b.iter(|| black_box(PartsSummary::from_structure(black_box(structure))))
            },
        );
    }

    group.finish();
}

fn bench_anchor_snapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("anchor_snapping");
    let query_points = build_query_points(1024);

    for &count_40 in &[1_200u32, 12_000u32] {
        let index = NodeIndex::from_structure(&build_box_structure(count_40));

        group.bench_with_input(
            BenchmarkId::new("resolve_batch", count_40),
            &index,
            |b, index| {
                b.iter(|| {
                    let mut snapped = 0usize;
                    for point in &query_points {
                        let anchor = index.resolve_anchor(black_box(*point), 0.08);
                        if anchor.x % 4 == 0 {
                            snapped += 1;
                        }
                    }
                    black_box(snapped)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    core_benches,
    bench_generators,
    bench_connection_graph,
    bench_anchor_snapping
);
criterion_main!(core_benches);
