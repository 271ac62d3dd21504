//! Per-cell graph nodes and the access barriers that can sit on them
//!

use std::collections::BTreeSet;

use crate::prelude::*;

/// The credential requirement of an access-controlled cell such as a locked
/// door. An agent satisfies the barrier when it holds every tag of at least
/// one of the alternative tag sets, or when the barrier requires nothing
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessBarrier {
	/// Alternative sets of tags, any one of which grants passage
	required: Vec<BTreeSet<String>>,
}

impl AccessBarrier {
	/// Create a new instance of [AccessBarrier] from alternative tag sets
	pub fn new(required: Vec<BTreeSet<String>>) -> Self {
		AccessBarrier { required }
	}
	/// Create a barrier satisfied by one specific set of tags
	pub fn with_tags<T: Into<String>>(tags: Vec<T>) -> Self {
		let set = tags.into_iter().map(|t| t.into()).collect();
		AccessBarrier {
			required: vec![set],
		}
	}
	/// Whether an agent holding `access` tags may pass this barrier
	pub fn is_allowed(&self, access: &BTreeSet<String>) -> bool {
		self.required.is_empty() || self.required.iter().any(|set| set.is_subset(access))
	}
}

/// A graph vertex for one cell of a loaded chunk.
///
/// A node exists if and only if its chunk is loaded; whether an agent can
/// actually traverse it is re-checked per query against the agent's collision
/// mask and access tags, never baked into the node
#[derive(Clone, Debug)]
pub struct NavNode {
	/// The cell this node represents
	cell: CellIndex,
	/// Coordinate handle of the owning chunk, re-looked-up on use rather than
	/// held as a reference so an unloaded chunk cannot dangle
	chunk: ChunkCoord,
	/// Blocking-layer bitfield of the cell, fed by the physics provider
	blocked_mask: u32,
	/// Access-controlled barriers occupying the cell, fed by the access
	/// provider. Non-empty marks the cell as a door for region purposes
	barriers: Vec<AccessBarrier>,
	/// Links to neighbouring nodes indexed by [Ordinal::index]. [None] where
	/// the neighbouring cell's chunk is not loaded. Rebuilt whenever an
	/// adjacent chunk loads or unloads
	neighbours: [Option<CellIndex>; 8],
}

impl NavNode {
	/// Create a new instance of [NavNode] with no links
	pub fn new(cell: CellIndex, chunk: ChunkCoord, blocked_mask: u32) -> Self {
		NavNode {
			cell,
			chunk,
			blocked_mask,
			barriers: Vec::new(),
			neighbours: [None; 8],
		}
	}
	/// Get the cell this node represents
	pub fn get_cell(&self) -> CellIndex {
		self.cell
	}
	/// Get the coordinate of the owning chunk
	pub fn get_chunk(&self) -> ChunkCoord {
		self.chunk
	}
	/// Get the blocking-layer bitfield of the cell
	pub fn get_blocked_mask(&self) -> u32 {
		self.blocked_mask
	}
	/// Replace the blocking-layer bitfield of the cell
	pub fn set_blocked_mask(&mut self, mask: u32) {
		self.blocked_mask = mask;
	}
	/// Get the access barriers occupying the cell
	pub fn get_barriers(&self) -> &[AccessBarrier] {
		&self.barriers
	}
	/// Place an access barrier on the cell
	pub fn add_barrier(&mut self, barrier: AccessBarrier) {
		self.barriers.push(barrier);
	}
	/// Remove every access barrier from the cell
	pub fn clear_barriers(&mut self) {
		self.barriers.clear();
	}
	/// Whether the cell carries any access barrier, i.e. acts as a door
	pub fn is_door(&self) -> bool {
		!self.barriers.is_empty()
	}
	/// Get the linked neighbour cell in a direction, [None] if that cell's
	/// chunk is not loaded
	pub fn get_neighbour(&self, ordinal: Ordinal) -> Option<CellIndex> {
		self.neighbours[ordinal.index()]
	}
	/// Set or sever the link in a direction
	pub fn set_neighbour(&mut self, ordinal: Ordinal, cell: Option<CellIndex>) {
		self.neighbours[ordinal.index()] = cell;
	}
	/// Iterate the linked neighbour cells in [Ordinal::ALL] order
	pub fn get_neighbours(&self) -> impl Iterator<Item = CellIndex> + '_ {
		self.neighbours.iter().flatten().copied()
	}
}
