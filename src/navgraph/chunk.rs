//! A grid is split into a series of `NxN` chunks of cells, the granularity at
//! which the navigation graph is loaded and unloaded
//!

use std::collections::{BTreeMap, BTreeSet};

use crate::prelude::*;
use bevy::prelude::*;

/// Initial cell data used to populate the nodes of a chunk when it loads.
/// Indexed as `[column][row]` from the bottom-left corner of the chunk
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(default)
)]
#[derive(Clone, Debug)]
pub struct ChunkCellData {
	/// Blocking-layer bitfield of each cell, `0` being fully open
	blocked: [[u32; CHUNK_RESOLUTION]; CHUNK_RESOLUTION],
	/// Access barriers placed on cells as `(column, row, barrier)`
	barriers: Vec<(usize, usize, AccessBarrier)>,
}

impl Default for ChunkCellData {
	fn default() -> Self {
		ChunkCellData {
			blocked: [[0; CHUNK_RESOLUTION]; CHUNK_RESOLUTION],
			barriers: Vec::new(),
		}
	}
}

impl ChunkCellData {
	/// Create a new instance of [ChunkCellData] where every cell carries the
	/// supplied blocking mask
	pub fn new_with_mask(mask: u32) -> Self {
		ChunkCellData {
			blocked: [[mask; CHUNK_RESOLUTION]; CHUNK_RESOLUTION],
			barriers: Vec::new(),
		}
	}
	/// Get the blocking mask of the cell at a `(column, row)` offset
	pub fn get_blocked(&self, column: usize, row: usize) -> u32 {
		self.blocked[column][row]
	}
	/// Set the blocking mask of the cell at a `(column, row)` offset
	pub fn set_blocked(&mut self, column: usize, row: usize, mask: u32) {
		self.blocked[column][row] = mask;
	}
	/// Place an access barrier on the cell at a `(column, row)` offset
	pub fn add_barrier(&mut self, column: usize, row: usize, barrier: AccessBarrier) {
		self.barriers.push((column, row, barrier));
	}
	/// Get the access barriers of the chunk
	pub fn get_barriers(&self) -> &[(usize, usize, AccessBarrier)] {
		&self.barriers
	}
	/// Create a new instance of [ChunkCellData] from a `ron` file
	#[cfg(feature = "ron")]
	pub fn from_ron(path: String) -> Self {
		let file = std::fs::File::open(path).expect("Failed opening ChunkCellData file");
		match ron::de::from_reader(file) {
			Ok(data) => data,
			Err(e) => panic!("Failed deserializing ChunkCellData: {}", e),
		}
	}
}

/// A loaded `NxN` block of cells owning one [NavNode] per cell
#[derive(Clone, Debug)]
pub struct NavChunk {
	/// Coordinate of the chunk
	coord: ChunkCoord,
	/// Dense node storage indexed as `column * CHUNK_RESOLUTION + row`
	nodes: Vec<NavNode>,
}

impl NavChunk {
	/// Create a new instance of [NavChunk] with nodes populated from `data`.
	/// Neighbour links are left unset, [NavGraph::load_chunk] rebuilds them
	fn new(coord: ChunkCoord, data: &ChunkCellData) -> Self {
		let mut nodes = Vec::with_capacity(CHUNK_RESOLUTION * CHUNK_RESOLUTION);
		for column in 0..CHUNK_RESOLUTION {
			for row in 0..CHUNK_RESOLUTION {
				let cell = coord.cell_at_offset(column, row);
				nodes.push(NavNode::new(cell, coord, data.get_blocked(column, row)));
			}
		}
		let mut chunk = NavChunk { coord, nodes };
		for (column, row, barrier) in data.get_barriers() {
			if let Some(node) = chunk.get_node_mut(*column, *row) {
				node.add_barrier(barrier.clone());
			} else {
				error!(
					"Barrier offset ({}, {}) is outside chunk {:?}",
					column, row, coord
				);
			}
		}
		chunk
	}
	/// Get the coordinate of the chunk
	pub fn get_coord(&self) -> ChunkCoord {
		self.coord
	}
	/// Get the node at a `(column, row)` offset within the chunk
	pub fn get_node(&self, column: usize, row: usize) -> Option<&NavNode> {
		if column >= CHUNK_RESOLUTION || row >= CHUNK_RESOLUTION {
			return None;
		}
		self.nodes.get(column * CHUNK_RESOLUTION + row)
	}
	/// Get a mutable node at a `(column, row)` offset within the chunk
	pub fn get_node_mut(&mut self, column: usize, row: usize) -> Option<&mut NavNode> {
		if column >= CHUNK_RESOLUTION || row >= CHUNK_RESOLUTION {
			return None;
		}
		self.nodes.get_mut(column * CHUNK_RESOLUTION + row)
	}
	/// Iterate over every node of the chunk
	pub fn iter_nodes(&self) -> impl Iterator<Item = &NavNode> {
		self.nodes.iter()
	}
}

/// The navigation graph of one grid entity: an arena of loaded chunks keyed
/// by coordinate. Nodes reference each other and their owning chunk purely by
/// coordinate so unloading a chunk can never leave a dangling pointer
#[derive(Component, Default)]
pub struct NavGraph {
	/// Loaded chunks keyed by their coordinate
	chunks: BTreeMap<ChunkCoord, NavChunk>,
}

impl NavGraph {
	/// Get the map of loaded chunks
	pub fn get_chunks(&self) -> &BTreeMap<ChunkCoord, NavChunk> {
		&self.chunks
	}
	/// Whether the chunk at `coord` is loaded
	pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
		self.chunks.contains_key(&coord)
	}
	/// Create the nodes for a chunk and rebuild the neighbour links of it and
	/// of every adjacent loaded chunk. Returns `false` and leaves the graph
	/// untouched if the chunk is already loaded
	pub fn load_chunk(&mut self, coord: ChunkCoord, data: &ChunkCellData) -> bool {
		if self.chunks.contains_key(&coord) {
			error!("Chunk {:?} is already loaded", coord);
			return false;
		}
		self.chunks.insert(coord, NavChunk::new(coord, data));
		self.relink_chunk(coord);
		for adjacent in coord.adjacent() {
			if self.is_loaded(adjacent) {
				self.relink_chunk(adjacent);
			}
		}
		true
	}
	/// Remove a chunk and sever any neighbour links pointing into it from
	/// adjacent chunks. Returns `false` if the chunk was not loaded.
	///
	/// Regions of the chunk must be shut down before calling this so that
	/// their symmetric neighbour-link removal still has valid nodes to work
	/// with, see [crate::prelude::RegionIndex::shutdown_chunk]
	pub fn unload_chunk(&mut self, coord: ChunkCoord) -> bool {
		if self.chunks.remove(&coord).is_none() {
			return false;
		}
		for adjacent in coord.adjacent() {
			if self.is_loaded(adjacent) {
				self.relink_chunk(adjacent);
			}
		}
		true
	}
	/// Recompute the neighbour links of every node in a chunk from the
	/// current loaded state of the surrounding chunks
	fn relink_chunk(&mut self, coord: ChunkCoord) {
		// snapshot which surrounding chunks are loaded before borrowing the
		// chunk's nodes mutably
		let mut loaded: BTreeSet<ChunkCoord> = BTreeSet::new();
		loaded.insert(coord);
		for adjacent in coord.adjacent() {
			if self.is_loaded(adjacent) {
				loaded.insert(adjacent);
			}
		}
		if let Some(chunk) = self.chunks.get_mut(&coord) {
			for column in 0..CHUNK_RESOLUTION {
				for row in 0..CHUNK_RESOLUTION {
					let cell = coord.cell_at_offset(column, row);
					if let Some(node) = chunk.get_node_mut(column, row) {
						for ordinal in Ordinal::ALL.iter() {
							let neighbour = cell.neighbour(*ordinal);
							let link = if loaded.contains(&ChunkCoord::from_cell(neighbour)) {
								Some(neighbour)
							} else {
								None
							};
							node.set_neighbour(*ordinal, link);
						}
					}
				}
			}
		}
	}
	/// Get the node of a cell, [None] if the cell's chunk is not loaded
	pub fn get_node(&self, cell: CellIndex) -> Option<&NavNode> {
		let coord = ChunkCoord::from_cell(cell);
		let chunk = self.chunks.get(&coord)?;
		let (column, row) = coord.local_offset(cell)?;
		chunk.get_node(column, row)
	}
	/// Get the mutable node of a cell, [None] if the cell's chunk is not loaded
	pub fn get_node_mut(&mut self, cell: CellIndex) -> Option<&mut NavNode> {
		let coord = ChunkCoord::from_cell(cell);
		let chunk = self.chunks.get_mut(&coord)?;
		let (column, row) = coord.local_offset(cell)?;
		chunk.get_node_mut(column, row)
	}
	/// Replace the blocking mask of a cell. Returns `false` if the cell's
	/// chunk is not loaded
	pub fn set_blocked_mask(&mut self, cell: CellIndex, mask: u32) -> bool {
		if let Some(node) = self.get_node_mut(cell) {
			node.set_blocked_mask(mask);
			true
		} else {
			error!("Cannot set blocking mask of unloaded cell {:?}", cell);
			false
		}
	}
	/// Place an access barrier on a cell. Returns `false` if the cell's chunk
	/// is not loaded
	pub fn add_barrier(&mut self, cell: CellIndex, barrier: AccessBarrier) -> bool {
		if let Some(node) = self.get_node_mut(cell) {
			node.add_barrier(barrier);
			true
		} else {
			error!("Cannot place barrier on unloaded cell {:?}", cell);
			false
		}
	}
	/// Remove every access barrier from a cell. Returns `false` if the cell's
	/// chunk is not loaded
	pub fn clear_barriers(&mut self, cell: CellIndex) -> bool {
		if let Some(node) = self.get_node_mut(cell) {
			node.clear_barriers();
			true
		} else {
			error!("Cannot clear barriers of unloaded cell {:?}", cell);
			false
		}
	}
}
