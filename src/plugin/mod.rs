//! Defines the Bevy [Plugin] for the chunked navigation graph
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod graph_layer;
pub mod region_layer;

/// Node-graph mutations run before region rebuilds so the coarse graph is
/// always derived from the frame's final node state
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum OrderingSet {
	Graph,
	Regions,
}

pub struct ChunkedNavPlugin;

impl Plugin for ChunkedNavPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.register_type::<Ordinal>()
			.register_type::<CellIndex>()
			.register_type::<ChunkCoord>()
			.add_event::<graph_layer::EventLoadChunk>()
			.add_event::<graph_layer::EventUnloadChunk>()
			.add_event::<graph_layer::EventUpdateCell>()
			.add_event::<graph_layer::EventRebuildRegions>()
			.configure_sets(Update, (OrderingSet::Graph, OrderingSet::Regions).chain())
			.add_systems(
				Update,
				(
					(
						graph_layer::process_chunk_unloads,
						graph_layer::process_chunk_loads,
						graph_layer::process_cell_updates,
					)
						.chain()
						.in_set(OrderingSet::Graph),
					region_layer::rebuild_regions.in_set(OrderingSet::Regions),
				),
			);
	}
}
