//! Measure a bounded reachability scan through chunks of snaking corridors,
//! where the diagonal corner-cutting checks dominate
//!

use std::collections::BTreeSet;

use bevy_chunked_nav_plugin::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Cell data with a wall along every other row, each pierced by a single gap
fn walled_data() -> ChunkCellData {
	let mut data = ChunkCellData::default();
	for row in (1..CHUNK_RESOLUTION).step_by(2) {
		let gap = if (row / 2) % 2 == 0 { 0 } else { CHUNK_RESOLUTION - 1 };
		for column in 0..CHUNK_RESOLUTION {
			if column != gap {
				data.set_blocked(column, row, 0b1);
			}
		}
	}
	data
}

/// Create a 3x3 block of walled chunks around the origin
fn prepare_graph() -> NavGraph {
	let data = walled_data();
	let mut graph = NavGraph::default();
	for x in -1..=1 {
		for y in -1..=1 {
			graph.load_chunk(ChunkCoord::new(x, y), &data);
		}
	}
	graph
}

/// Walk every node within the proximity bound
fn scan_walled(graph: &NavGraph, args: &ScanArgs) -> usize {
	graph.nodes_in_range(args, true).count()
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("algorithm_use");
	group.significance_level(0.05).sample_size(100);
	let graph = prepare_graph();
	let args = ScanArgs::new(
		CellIndex::new(4, 4),
		CellIndex::new(-8, -8),
		TraversalProfile::new(10.0, BTreeSet::new(), 0b1),
		10.0,
	);
	group.bench_function("scan_walled", |b| {
		b.iter(|| scan_walled(black_box(&graph), black_box(&args)))
	});
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
