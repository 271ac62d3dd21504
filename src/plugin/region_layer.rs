//! Logic for rebuilding the coarse region graph after the node graph has
//! changed
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Read [EventRebuildRegions] and regenerate the regions of each queued chunk
#[cfg(not(tarpaulin_include))]
pub fn rebuild_regions(
	mut events: EventReader<EventRebuildRegions>,
	mut query: Query<(&NavGraph, &mut RegionIndex)>,
) {
	// coalesce events to avoid processing duplicates
	let mut coalesced_chunks = Vec::new();
	for event in events.read() {
		let coord = event.get();
		if !coalesced_chunks.contains(&coord) {
			coalesced_chunks.push(coord);
		}
	}
	for coord in coalesced_chunks {
		debug!("Rebuilding regions of {:?}", coord);
		for (graph, mut region_index) in query.iter_mut() {
			region_index.generate_regions(graph, coord);
		}
	}
}
