use std::sync::Arc;

use bempp_traversal::{BoxFlags, Dimension, FmmTraversalBuilder, Tree, TraversalConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const QUAD_OFFSETS: [(f64, f64); 4] = [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)];

/// A uniform quadtree of `depth` levels, every leaf flagged with its
/// own sources and targets, every interior box flagged with
/// `HAS_CHILD_SOURCES`/`HAS_CHILD_TARGETS`.
fn uniform_quadtree(depth: usize) -> Tree<f64> {
    let mut level_counts = vec![1usize];
    for _ in 0..depth {
        level_counts.push(level_counts.last().unwrap() * 4);
    }
    let nboxes: usize = level_counts.iter().sum();

    let mut level_start = vec![0usize];
    for &count in &level_counts {
        level_start.push(level_start.last().unwrap() + count);
    }

    let mut box_centers = vec![0.0f64; 2 * nboxes];
    let mut box_levels = vec![0u8; nboxes];
    let mut box_parent_ids = vec![0usize; nboxes];
    let mut box_child_ids = vec![0usize; 4 * nboxes];
    let mut box_flags = vec![BoxFlags::empty(); nboxes];

    for level in 0..depth {
        let this_start = level_start[level];
        let this_count = level_counts[level];
        let next_start = level_start[level + 1];

        for i in 0..this_count {
            let box_id = this_start + i;
            let size = 1.0 / 2f64.powi(level as i32 + 1);
            for (k, &(ddx, ddy)) in QUAD_OFFSETS.iter().enumerate() {
                let child_id = next_start + i * 4 + k;
                box_child_ids[k * nboxes + box_id] = child_id;
                box_parent_ids[child_id] = box_id;
                box_levels[child_id] = (level + 1) as u8;
                box_centers[child_id] = box_centers[box_id] + ddx * size;
                box_centers[nboxes + child_id] = box_centers[nboxes + box_id] + ddy * size;
            }
            box_flags[box_id] =
                BoxFlags::HAS_CHILDREN | BoxFlags::HAS_CHILD_SOURCES | BoxFlags::HAS_CHILD_TARGETS;
        }
    }

    for box_id in level_start[depth]..nboxes {
        box_flags[box_id] = BoxFlags::HAS_OWN_SOURCES | BoxFlags::HAS_OWN_TARGETS;
    }

    Tree {
        dimensions: Dimension::Two,
        nboxes,
        nlevels: depth + 1,
        root_extent: 1.0,
        box_centers,
        aligned_nboxes: nboxes,
        box_levels,
        box_parent_ids,
        box_child_ids,
        level_start_box_nrs: level_start,
        box_flags,
        sources_are_targets: false,
        is_pruned: true,
    }
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal_build");
    for depth in [2usize, 3, 4] {
        let tree = Arc::new(uniform_quadtree(depth));
        let builder = FmmTraversalBuilder::new(TraversalConfig::default());
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter(|| {
                let info = builder.build(tree.clone(), None).unwrap();
                black_box(info);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_traversal);
criterion_main!(benches);
