//!
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Everything one grid entity needs for navigation queries: the node graph
/// and the coarse region graph derived from it. Spawn one per grid and feed
/// it chunks through [crate::prelude::EventLoadChunk]
#[derive(Bundle, Default)]
pub struct ChunkedNavBundle {
	nav_graph: NavGraph,
	region_index: RegionIndex,
}

impl ChunkedNavBundle {
	/// Create a new instance of [ChunkedNavBundle] with no chunks loaded
	pub fn new() -> Self {
		ChunkedNavBundle::default()
	}
	/// Create a new instance of [ChunkedNavBundle] preloaded with one chunk of
	/// cell data read from a `ron` file
	#[cfg(feature = "ron")]
	pub fn new_from_disk(coord: ChunkCoord, path: &str) -> Self {
		let data = ChunkCellData::from_ron(path.to_string());
		let mut nav_graph = NavGraph::default();
		nav_graph.load_chunk(coord, &data);
		let mut region_index = RegionIndex::default();
		region_index.generate_regions(&nav_graph, coord);
		ChunkedNavBundle {
			nav_graph,
			region_index,
		}
	}
}
