//! Logic for handling changes to the node graph: chunks streaming in and out
//! and individual cells changing their blocking mask or barriers. Every change
//! queues a region rebuild for the affected chunk so the coarse graph catches
//! up in the same frame
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Used to load a chunk of cells into every [NavGraph]
#[derive(Event)]
pub struct EventLoadChunk {
	/// Coordinate of the chunk to load
	coord: ChunkCoord,
	/// Initial cell data of the chunk
	data: ChunkCellData,
}

impl EventLoadChunk {
	/// Create a new instance of [EventLoadChunk]
	#[cfg(not(tarpaulin_include))]
	pub fn new(coord: ChunkCoord, data: ChunkCellData) -> Self {
		EventLoadChunk { coord, data }
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get_coord(&self) -> ChunkCoord {
		self.coord
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get_data(&self) -> &ChunkCellData {
		&self.data
	}
}

/// Used to unload a chunk from every [NavGraph]
#[derive(Event)]
pub struct EventUnloadChunk {
	/// Coordinate of the chunk to unload
	coord: ChunkCoord,
}

impl EventUnloadChunk {
	/// Create a new instance of [EventUnloadChunk]
	#[cfg(not(tarpaulin_include))]
	pub fn new(coord: ChunkCoord) -> Self {
		EventUnloadChunk { coord }
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get_coord(&self) -> ChunkCoord {
		self.coord
	}
}

/// The mutation an [EventUpdateCell] applies to its cell
pub enum CellChange {
	/// Replace the blocking-layer bitfield of the cell
	BlockedMask(u32),
	/// Place an access barrier on the cell
	AddBarrier(AccessBarrier),
	/// Remove every access barrier from the cell
	ClearBarriers,
}

/// Used to update a single cell of every [NavGraph], e.g. when a wall is
/// built or a door is welded shut
#[derive(Event)]
pub struct EventUpdateCell {
	/// The cell to update
	cell: CellIndex,
	/// The mutation to apply
	change: CellChange,
}

impl EventUpdateCell {
	/// Create a new instance of [EventUpdateCell]
	#[cfg(not(tarpaulin_include))]
	pub fn new(cell: CellIndex, change: CellChange) -> Self {
		EventUpdateCell { cell, change }
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get_cell(&self) -> CellIndex {
		self.cell
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get_change(&self) -> &CellChange {
		&self.change
	}
}

/// For the given chunk the regions need rebuilding from the current node state
#[derive(Event)]
pub struct EventRebuildRegions(pub ChunkCoord);

impl EventRebuildRegions {
	#[cfg(not(tarpaulin_include))]
	pub fn get(&self) -> ChunkCoord {
		self.0
	}
}

/// Read [EventLoadChunk] and create the chunk's nodes. The freshly generated
/// regions link themselves to the regions of adjacent chunks so only the new
/// chunk needs a rebuild
#[cfg(not(tarpaulin_include))]
pub fn process_chunk_loads(
	mut events: EventReader<EventLoadChunk>,
	mut query: Query<&mut NavGraph>,
	mut event_rebuild: EventWriter<EventRebuildRegions>,
) {
	for event in events.read() {
		let coord = event.get_coord();
		for mut graph in query.iter_mut() {
			graph.load_chunk(coord, event.get_data());
		}
		event_rebuild.write(EventRebuildRegions(coord));
	}
}

/// Read [EventUnloadChunk] and drop the chunk. Regions are shut down before
/// the nodes go so their symmetric neighbour links unwind while both sides
/// still exist
#[cfg(not(tarpaulin_include))]
pub fn process_chunk_unloads(
	mut events: EventReader<EventUnloadChunk>,
	mut query: Query<(&mut NavGraph, &mut RegionIndex)>,
) {
	for event in events.read() {
		let coord = event.get_coord();
		for (mut graph, mut region_index) in query.iter_mut() {
			region_index.shutdown_chunk(coord);
			graph.unload_chunk(coord);
		}
	}
}

/// Read [EventUpdateCell], apply the mutations and queue one region rebuild
/// per touched chunk
#[cfg(not(tarpaulin_include))]
pub fn process_cell_updates(
	mut events: EventReader<EventUpdateCell>,
	mut query: Query<&mut NavGraph>,
	mut event_rebuild: EventWriter<EventRebuildRegions>,
) {
	// coalesce events to avoid rebuilding a chunk once per cell
	let mut coalesced_chunks = Vec::new();
	for event in events.read() {
		let cell = event.get_cell();
		for mut graph in query.iter_mut() {
			match event.get_change() {
				CellChange::BlockedMask(mask) => {
					graph.set_blocked_mask(cell, *mask);
				}
				CellChange::AddBarrier(barrier) => {
					graph.add_barrier(cell, barrier.clone());
				}
				CellChange::ClearBarriers => {
					graph.clear_barriers(cell);
				}
			}
		}
		let coord = ChunkCoord::from_cell(cell);
		if !coalesced_chunks.contains(&coord) {
			coalesced_chunks.push(coord);
		}
	}
	for coord in coalesced_chunks {
		debug!("Queueing region rebuild of {:?}", coord);
		event_rebuild.write(EventRebuildRegions(coord));
	}
}
