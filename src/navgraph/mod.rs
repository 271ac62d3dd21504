//! A grid is split into a series of fixed-size chunks, each owning one graph
//! node per tile. Contiguous open nodes within a chunk are aggregated into
//! regions which form a much smaller graph used for coarse connectivity
//! queries, while a bounded flood-fill over the per-tile nodes answers
//! "what can this agent reach within a given cost" questions.
//!
//! Definitions:
//!
//! * Cell - one grid tile, addressed by integer `(x, y)` coordinates
//! * Chunk - an `NxN` block of cells, the granularity of loading and unloading
//! * Node - a graph vertex for one cell of a loaded chunk, linked to up to 8
//!   neighbours. Whether a node can actually be traversed is decided per query
//!   against an agent's collision mask and access tags, never baked into the
//!   node itself
//! * Region - a group of contiguous nodes within one chunk that share the same
//!   traversal characteristics, used as a coarse graph vertex. Doors are
//!   single-node regions of their own
//! * Traversal profile - a snapshot of one agent's collision mask, access tags
//!   and vision radius taken at query time
//!
//! The flood-fill scan is deliberately not a shortest-path search: it uses a
//! plain FIFO queue and a heuristic seed-relative cost, because callers only
//! ask "is it within proximity", never "what is the cheapest route".
//!

pub mod chunk;
pub mod helpers;
pub mod node;
pub mod profile;
pub mod region;
pub mod scan;
pub mod utilities;

use crate::prelude::*;
use bevy::prelude::*;

/// Unique ID of a grid cell in world-tile coordinates
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Reflect)]
pub struct CellIndex((i32, i32));

impl CellIndex {
	/// Create a new instance of [CellIndex]
	pub fn new(x: i32, y: i32) -> Self {
		CellIndex((x, y))
	}
	/// Get the cell `(x, y)` tuple
	pub fn get(&self) -> (i32, i32) {
		self.0
	}
	/// Get the cell x coordinate
	pub fn get_x(&self) -> i32 {
		self.0 .0
	}
	/// Get the cell y coordinate
	pub fn get_y(&self) -> i32 {
		self.0 .1
	}
	/// The cell found by stepping one cell towards an [Ordinal]
	pub fn neighbour(&self, ordinal: Ordinal) -> CellIndex {
		let (dx, dy) = ordinal.offset();
		CellIndex::new(self.get_x() + dx, self.get_y() + dy)
	}
}

/// Unique ID of a chunk, derived from the cells it covers by floored division
/// of their coordinates by [CHUNK_RESOLUTION]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Reflect)]
pub struct ChunkCoord((i32, i32));

impl ChunkCoord {
	/// Create a new instance of [ChunkCoord]
	pub fn new(x: i32, y: i32) -> Self {
		ChunkCoord((x, y))
	}
	/// Get the chunk coordinate that contains `cell`
	pub fn from_cell(cell: CellIndex) -> Self {
		ChunkCoord((
			cell.get_x().div_euclid(CHUNK_RESOLUTION as i32),
			cell.get_y().div_euclid(CHUNK_RESOLUTION as i32),
		))
	}
	/// Get the chunk `(x, y)` tuple
	pub fn get(&self) -> (i32, i32) {
		self.0
	}
	/// Get the cell at the bottom-left corner of the chunk
	pub fn origin_cell(&self) -> CellIndex {
		CellIndex::new(
			self.0 .0 * CHUNK_RESOLUTION as i32,
			self.0 .1 * CHUNK_RESOLUTION as i32,
		)
	}
	/// Get the `(column, row)` offset of `cell` within this chunk. Returns
	/// [None] if the cell belongs to a different chunk
	pub fn local_offset(&self, cell: CellIndex) -> Option<(usize, usize)> {
		if ChunkCoord::from_cell(cell) != *self {
			return None;
		}
		let origin = self.origin_cell();
		Some((
			(cell.get_x() - origin.get_x()) as usize,
			(cell.get_y() - origin.get_y()) as usize,
		))
	}
	/// Get the cell at a `(column, row)` offset within this chunk
	pub fn cell_at_offset(&self, column: usize, row: usize) -> CellIndex {
		let origin = self.origin_cell();
		CellIndex::new(origin.get_x() + column as i32, origin.get_y() + row as i32)
	}
	/// The up-to-8 chunk coordinates surrounding this one
	pub fn adjacent(&self) -> Vec<ChunkCoord> {
		let mut coords = Vec::with_capacity(8);
		for dx in -1..=1 {
			for dy in -1..=1 {
				if dx == 0 && dy == 0 {
					continue;
				}
				coords.push(ChunkCoord::new(self.0 .0 + dx, self.0 .1 + dy));
			}
		}
		coords
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn chunk_of_origin_cell() {
		let cell = CellIndex::new(0, 0);
		let result = ChunkCoord::from_cell(cell);
		let actual = ChunkCoord::new(0, 0);
		assert_eq!(actual, result);
	}
	#[test]
	fn chunk_of_positive_cell() {
		let cell = CellIndex::new(11, 7);
		let result = ChunkCoord::from_cell(cell);
		let actual = ChunkCoord::new(1, 0);
		assert_eq!(actual, result);
	}
	#[test]
	fn chunk_of_negative_cell() {
		let cell = CellIndex::new(-1, -8);
		let result = ChunkCoord::from_cell(cell);
		let actual = ChunkCoord::new(-1, -1);
		assert_eq!(actual, result);
	}
	#[test]
	fn chunk_origin_cell() {
		let chunk = ChunkCoord::new(-1, 2);
		let result = chunk.origin_cell();
		let actual = CellIndex::new(-8, 16);
		assert_eq!(actual, result);
	}
	#[test]
	fn local_offset_inside() {
		let chunk = ChunkCoord::new(1, 1);
		let cell = CellIndex::new(10, 15);
		let result = chunk.local_offset(cell);
		let actual = Some((2, 7));
		assert_eq!(actual, result);
	}
	#[test]
	fn local_offset_outside() {
		let chunk = ChunkCoord::new(0, 0);
		let cell = CellIndex::new(8, 0);
		let result = chunk.local_offset(cell);
		assert!(result.is_none());
	}
	#[test]
	fn offset_round_trip() {
		let chunk = ChunkCoord::new(-2, 3);
		let cell = chunk.cell_at_offset(5, 1);
		let result = chunk.local_offset(cell);
		let actual = Some((5, 1));
		assert_eq!(actual, result);
	}
	#[test]
	fn adjacent_chunk_count() {
		let chunk = ChunkCoord::new(0, 0);
		let result = chunk.adjacent();
		assert_eq!(8, result.len());
		assert!(!result.contains(&chunk));
	}
	#[test]
	fn cell_neighbour_north() {
		let cell = CellIndex::new(3, 3);
		let result = cell.neighbour(Ordinal::North);
		let actual = CellIndex::new(3, 4);
		assert_eq!(actual, result);
	}
}
