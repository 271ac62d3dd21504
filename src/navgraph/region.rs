//! Regions are contiguous, traversability-homogeneous groups of cells within
//! a single chunk, linked to adjacent regions to form a coarse graph layered
//! above the node graph. Expensive "can I get there at all" questions are
//! answered by walking this small graph instead of flooding thousands of
//! nodes
//!

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::prelude::*;
use bevy::prelude::*;

/// A contiguous group of cells of one chunk with identical traversability.
/// Door cells always form single-cell regions so that access checks happen at
/// region granularity.
///
/// The identity of a region is its immutable origin cell, the first cell it
/// was created from. All equality and hashing go through the origin so a
/// region can grow, merge and link without ever invalidating a key derived
/// from it
#[derive(Clone, Debug)]
pub struct Region {
	/// The founding cell, sole identity of the region
	origin: CellIndex,
	/// Coordinate of the owning chunk
	chunk: ChunkCoord,
	/// Every cell belonging to the region, origin included
	cells: HashSet<CellIndex>,
	/// Largest horizontal cell offset magnitude from the origin. Grows
	/// monotonically, never recomputed downwards, so it is a conservative
	/// bound rather than a tight one
	width: i32,
	/// Largest vertical cell offset magnitude from the origin, same
	/// monotonic-bound behaviour as `width`
	height: i32,
	/// Origins of adjacent regions, maintained symmetrically on both sides
	neighbours: HashSet<CellIndex>,
	/// Whether the region is a single access-controlled door cell
	is_door: bool,
	/// Set once the region has been shut down, any lingering handle to it
	/// must be treated as stale
	deleted: bool,
}

impl PartialEq for Region {
	fn eq(&self, other: &Self) -> bool {
		self.origin == other.origin
	}
}

impl Eq for Region {}

impl std::hash::Hash for Region {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.origin.hash(state);
	}
}

impl Region {
	/// Create a new instance of [Region] containing just its origin cell
	pub fn new(origin: CellIndex, is_door: bool) -> Self {
		let mut cells = HashSet::new();
		cells.insert(origin);
		Region {
			origin,
			chunk: ChunkCoord::from_cell(origin),
			cells,
			width: 0,
			height: 0,
			neighbours: HashSet::new(),
			is_door,
			deleted: false,
		}
	}
	/// Get the founding cell of the region
	pub fn get_origin(&self) -> CellIndex {
		self.origin
	}
	/// Get the coordinate of the owning chunk
	pub fn get_chunk(&self) -> ChunkCoord {
		self.chunk
	}
	/// Get the cells belonging to the region
	pub fn get_cells(&self) -> &HashSet<CellIndex> {
		&self.cells
	}
	/// Get the conservative horizontal extent from the origin
	pub fn get_width(&self) -> i32 {
		self.width
	}
	/// Get the conservative vertical extent from the origin
	pub fn get_height(&self) -> i32 {
		self.height
	}
	/// Get the origins of adjacent regions
	pub fn get_neighbours(&self) -> &HashSet<CellIndex> {
		&self.neighbours
	}
	/// Whether the region is a single access-controlled door cell
	pub fn is_door(&self) -> bool {
		self.is_door
	}
	/// Whether the region has been shut down
	pub fn is_deleted(&self) -> bool {
		self.deleted
	}
	/// Whether a cell belongs to the region
	pub fn contains(&self, cell: CellIndex) -> bool {
		self.cells.contains(&cell)
	}
	/// Add a cell, growing the bounding extents where it sits further from the
	/// origin than any previous cell. Cells must belong to the region's chunk
	pub fn add(&mut self, cell: CellIndex) {
		debug_assert!(
			ChunkCoord::from_cell(cell) == self.chunk,
			"Cell {:?} lies outside chunk {:?}",
			cell,
			self.chunk
		);
		self.cells.insert(cell);
		self.width = self.width.max((cell.get_x() - self.origin.get_x()).abs());
		self.height = self.height.max((cell.get_y() - self.origin.get_y()).abs());
	}
	/// Record an adjacent region by its origin
	pub fn add_neighbour(&mut self, origin: CellIndex) {
		self.neighbours.insert(origin);
	}
	/// Forget an adjacent region by its origin
	pub fn remove_neighbour(&mut self, origin: CellIndex) {
		self.neighbours.remove(&origin);
	}
	/// Cheap distance estimate between two regions: the octile distance of the
	/// origins shrunk by the bounding extents facing each other, clamped so
	/// overlapping extents read as zero rather than negative
	pub fn distance(&self, other: &Region) -> f32 {
		let mut dx = (other.origin.get_x() - self.origin.get_x()) as f32;
		let mut dy = (other.origin.get_y() - self.origin.get_y()) as f32;
		if dx > 0.0 {
			dx = (dx - self.width as f32).max(0.0);
		} else if dx < 0.0 {
			dx = (dx + other.width as f32).min(0.0);
		}
		if dy > 0.0 {
			dy = (dy - self.height as f32).max(0.0);
		} else if dy < 0.0 {
			dy = (dy + other.height as f32).min(0.0);
		}
		octile_distance_f32(dx, dy)
	}
	/// Whether an agent can traverse the region. Cells of a region share their
	/// traversability so only the origin node is sampled; a missing node means
	/// the chunk has unloaded under a stale handle and reads as impassable
	pub fn traversable(&self, graph: &NavGraph, profile: &TraversalProfile) -> bool {
		match graph.get_node(self.origin) {
			Some(node) => traversable(profile.get_collision_mask(), profile.get_access(), node),
			None => false,
		}
	}
	/// Empty the region and mark it deleted. Idempotent, shutting down twice
	/// changes nothing
	pub fn shutdown(&mut self) {
		self.cells.clear();
		self.neighbours.clear();
		self.deleted = true;
	}
}

/// The coarse region graph of one grid entity, owning every [Region] keyed by
/// origin cell plus a per-chunk lookup of the origins it hosts. Lives
/// alongside the [NavGraph] it is derived from and is rebuilt one chunk at a
/// time as cells change
#[derive(Component, Default)]
pub struct RegionIndex {
	/// Origins of the regions hosted by each chunk
	chunks: BTreeMap<ChunkCoord, BTreeSet<CellIndex>>,
	/// All regions keyed by origin cell
	regions: HashMap<CellIndex, Region>,
}

impl RegionIndex {
	/// Get all regions keyed by origin cell
	pub fn get_regions(&self) -> &HashMap<CellIndex, Region> {
		&self.regions
	}
	/// Get the region founded at an origin cell
	pub fn get_region(&self, origin: CellIndex) -> Option<&Region> {
		self.regions.get(&origin)
	}
	/// Get the regions hosted by a chunk
	pub fn get_chunk_regions(&self, coord: ChunkCoord) -> Vec<&Region> {
		self.chunks
			.get(&coord)
			.map(|origins| origins.iter().filter_map(|o| self.regions.get(o)).collect())
			.unwrap_or_default()
	}
	/// Find the origin of the region containing a cell. A linear scan over the
	/// regions of the cell's chunk, cheap because chunks host few regions
	fn region_origin_for_cell(&self, cell: CellIndex) -> Option<CellIndex> {
		let origins = self.chunks.get(&ChunkCoord::from_cell(cell))?;
		for origin in origins.iter() {
			if let Some(region) = self.regions.get(origin) {
				if region.contains(cell) {
					return Some(*origin);
				}
			}
		}
		None
	}
	/// Find the region containing a cell. [None] for blocked cells and cells
	/// of chunks without generated regions
	pub fn region_for_cell(&self, cell: CellIndex) -> Option<&Region> {
		self.region_origin_for_cell(cell)
			.and_then(|origin| self.regions.get(&origin))
	}
	/// Track a freshly created region
	fn insert_region(&mut self, region: Region) {
		self.chunks
			.entry(region.get_chunk())
			.or_default()
			.insert(region.get_origin());
		self.regions.insert(region.get_origin(), region);
	}
	/// Rebuild the regions of one chunk from the current node state.
	///
	/// Any previous regions of the chunk are shut down first, then cells are
	/// swept bottom-left to top-right: each open cell joins the region of its
	/// western or southern neighbour, merges the two when they differ, or
	/// founds a new region. Door cells always found their own single-cell
	/// region. Edges to regions of adjacent chunks are linked symmetrically as
	/// the sweep goes
	pub fn generate_regions(&mut self, graph: &NavGraph, coord: ChunkCoord) {
		self.shutdown_chunk(coord);
		if !graph.is_loaded(coord) {
			// the chunk unloaded while its rebuild was queued
			debug!("Skipping region generation for unloaded chunk {:?}", coord);
			return;
		}
		// cell to owning-origin lookup local to the sweep, doors and blocked
		// cells are deliberately absent so nothing joins through them
		let mut node_region: HashMap<CellIndex, CellIndex> = HashMap::new();
		for row in 0..CHUNK_RESOLUTION {
			for column in 0..CHUNK_RESOLUTION {
				let cell = coord.cell_at_offset(column, row);
				let Some(node) = graph.get_node(cell) else {
					continue;
				};
				if node.get_blocked_mask() != 0 {
					continue;
				}
				if node.is_door() {
					self.insert_region(Region::new(cell, true));
					self.update_region_edge(graph, cell, cell);
					continue;
				}
				let left = node_region.get(&cell.neighbour(Ordinal::West)).copied();
				let below = node_region.get(&cell.neighbour(Ordinal::South)).copied();
				match (left, below) {
					(Some(left_origin), Some(below_origin)) if left_origin != below_origin => {
						if let Some(region) = self.regions.get_mut(&below_origin) {
							region.add(cell);
						}
						node_region.insert(cell, below_origin);
						self.merge_into(graph, left_origin, below_origin, &mut node_region);
					}
					(Some(origin), _) | (None, Some(origin)) => {
						if let Some(region) = self.regions.get_mut(&origin) {
							region.add(cell);
						}
						node_region.insert(cell, origin);
						self.update_region_edge(graph, origin, cell);
					}
					(None, None) => {
						self.insert_region(Region::new(cell, false));
						node_region.insert(cell, cell);
						self.update_region_edge(graph, cell, cell);
					}
				}
			}
		}
	}
	/// Fold the source region into the target: unlink the source everywhere,
	/// move its cells across and re-walk the target's edges so links the
	/// source carried end up on the target
	fn merge_into(
		&mut self,
		graph: &NavGraph,
		source_origin: CellIndex,
		target_origin: CellIndex,
		node_region: &mut HashMap<CellIndex, CellIndex>,
	) {
		let Some(mut source) = self.regions.remove(&source_origin) else {
			error!("Cannot merge missing region {:?}", source_origin);
			return;
		};
		if let Some(origins) = self.chunks.get_mut(&source.get_chunk()) {
			origins.remove(&source_origin);
		}
		for neighbour in source.get_neighbours().iter() {
			if let Some(region) = self.regions.get_mut(neighbour) {
				region.remove_neighbour(source_origin);
			}
		}
		let moved: Vec<CellIndex> = source.get_cells().iter().copied().collect();
		source.shutdown();
		if let Some(target) = self.regions.get_mut(&target_origin) {
			for cell in moved.iter() {
				target.add(*cell);
				node_region.insert(*cell, target_origin);
			}
		}
		let target_cells: Vec<CellIndex> = self
			.regions
			.get(&target_origin)
			.map(|region| region.get_cells().iter().copied().collect())
			.unwrap_or_default();
		for cell in target_cells {
			self.update_region_edge(graph, target_origin, cell);
		}
	}
	/// Link a region symmetrically to the regions owning the compass
	/// neighbours of one of its cells, including across chunk boundaries
	fn update_region_edge(&mut self, graph: &NavGraph, origin: CellIndex, cell: CellIndex) {
		let Some(node) = graph.get_node(cell) else {
			return;
		};
		let mut linked: Vec<CellIndex> = Vec::new();
		for cardinal in Ordinal::CARDINALS.iter() {
			let Some(neighbour_cell) = node.get_neighbour(*cardinal) else {
				continue;
			};
			if let Some(neighbour_origin) = self.region_origin_for_cell(neighbour_cell) {
				if neighbour_origin != origin {
					linked.push(neighbour_origin);
				}
			}
		}
		for neighbour_origin in linked {
			if let Some(region) = self.regions.get_mut(&origin) {
				region.add_neighbour(neighbour_origin);
			}
			if let Some(region) = self.regions.get_mut(&neighbour_origin) {
				region.add_neighbour(origin);
			}
		}
	}
	/// Shut down one region: drop it from the index, remove the links adjacent
	/// regions hold to it and return it emptied and marked deleted so callers
	/// holding handles can observe the shutdown. [None] when the origin is
	/// unknown, which makes repeated shutdowns harmless
	pub fn shutdown_region(&mut self, origin: CellIndex) -> Option<Region> {
		let mut region = self.regions.remove(&origin)?;
		if let Some(origins) = self.chunks.get_mut(&region.get_chunk()) {
			origins.remove(&origin);
			if origins.is_empty() {
				self.chunks.remove(&region.get_chunk());
			}
		}
		let neighbours: Vec<CellIndex> = region.get_neighbours().iter().copied().collect();
		for neighbour in neighbours {
			if let Some(other) = self.regions.get_mut(&neighbour) {
				other.remove_neighbour(origin);
			}
		}
		region.shutdown();
		Some(region)
	}
	/// Shut down every region of a chunk. Must run before the chunk's nodes
	/// are dropped from the [NavGraph] so cross-chunk links unwind cleanly
	pub fn shutdown_chunk(&mut self, coord: ChunkCoord) {
		let origins: Vec<CellIndex> = self
			.chunks
			.get(&coord)
			.map(|set| set.iter().copied().collect())
			.unwrap_or_default();
		for origin in origins {
			self.shutdown_region(origin);
		}
	}
	/// The origins of every region an agent standing at `from` can reach: a
	/// flood over region links gated by the agent's ability to traverse each
	/// region and by its vision radius measured from the starting region. An
	/// untraversable or too-distant region is sealed, nothing is explored
	/// through it
	pub fn reachable_regions(
		&self,
		graph: &NavGraph,
		profile: &TraversalProfile,
		from: CellIndex,
	) -> HashSet<CellIndex> {
		let mut accessible = HashSet::new();
		let Some(start) = self.region_for_cell(from) else {
			return accessible;
		};
		let start_origin = start.get_origin();
		accessible.insert(start_origin);
		let mut closed: HashSet<CellIndex> = HashSet::new();
		let mut queue: VecDeque<CellIndex> = VecDeque::new();
		queue.push_back(start_origin);
		while let Some(origin) = queue.pop_front() {
			if !closed.insert(origin) {
				continue;
			}
			let Some(region) = self.regions.get(&origin) else {
				continue;
			};
			for neighbour_origin in region.get_neighbours().iter().copied() {
				if closed.contains(&neighbour_origin) {
					continue;
				}
				let Some(candidate) = self.regions.get(&neighbour_origin) else {
					continue;
				};
				if !candidate.traversable(graph, profile)
					|| candidate.distance(start) > profile.get_vision_radius() + 1.0
				{
					closed.insert(neighbour_origin);
					continue;
				}
				accessible.insert(neighbour_origin);
				queue.push_back(neighbour_origin);
			}
		}
		accessible
	}
	/// Whether an agent at `from` can reach `to` at all. Cells sharing a
	/// region answer immediately; otherwise the flood runs from the target
	/// side and asks whether it washes over the agent's region
	pub fn reachable(
		&self,
		graph: &NavGraph,
		profile: &TraversalProfile,
		from: CellIndex,
		to: CellIndex,
	) -> bool {
		let Some(from_region) = self.region_for_cell(from) else {
			return false;
		};
		let Some(to_region) = self.region_for_cell(to) else {
			return false;
		};
		if from_region.get_origin() == to_region.get_origin() {
			return true;
		}
		self.reachable_regions(graph, profile, to)
			.contains(&from_region.get_origin())
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;

	/// Graph and regions for a single fully open chunk at the origin
	fn open_setup() -> (NavGraph, RegionIndex) {
		let mut graph = NavGraph::default();
		graph.load_chunk(ChunkCoord::new(0, 0), &ChunkCellData::default());
		let mut index = RegionIndex::default();
		index.generate_regions(&graph, ChunkCoord::new(0, 0));
		(graph, index)
	}
	/// A chunk split by a wall along column 3, pierced at `(3, 4)` by a door
	/// requiring the `engineering` tag
	fn door_setup() -> (NavGraph, RegionIndex) {
		let mut data = ChunkCellData::default();
		for row in 0..CHUNK_RESOLUTION {
			data.set_blocked(3, row, 0b1);
		}
		data.set_blocked(3, 4, 0);
		data.add_barrier(3, 4, AccessBarrier::with_tags(vec!["engineering"]));
		let mut graph = NavGraph::default();
		graph.load_chunk(ChunkCoord::new(0, 0), &data);
		let mut index = RegionIndex::default();
		index.generate_regions(&graph, ChunkCoord::new(0, 0));
		(graph, index)
	}
	/// Profile holding the `engineering` tag
	fn engineering_profile(vision_radius: f32) -> TraversalProfile {
		let mut access = BTreeSet::new();
		access.insert("engineering".to_string());
		TraversalProfile::new(vision_radius, access, 0b1)
	}
	#[test]
	fn open_chunk_forms_single_region() {
		let (_, index) = open_setup();
		let regions = index.get_chunk_regions(ChunkCoord::new(0, 0));
		assert_eq!(1, regions.len());
		let region = regions[0];
		assert_eq!(CellIndex::new(0, 0), region.get_origin());
		assert_eq!(CHUNK_RESOLUTION * CHUNK_RESOLUTION, region.get_cells().len());
		assert_eq!(7, region.get_width());
		assert_eq!(7, region.get_height());
		assert!(region.get_neighbours().is_empty());
		assert!(!region.is_door());
	}
	#[test]
	fn full_wall_splits_chunk_into_two_regions() {
		let mut data = ChunkCellData::default();
		for row in 0..CHUNK_RESOLUTION {
			data.set_blocked(1, row, 0b1);
		}
		let mut graph = NavGraph::default();
		graph.load_chunk(ChunkCoord::new(0, 0), &data);
		let mut index = RegionIndex::default();
		index.generate_regions(&graph, ChunkCoord::new(0, 0));
		assert_eq!(2, index.get_chunk_regions(ChunkCoord::new(0, 0)).len());
		let west = index.region_for_cell(CellIndex::new(0, 3)).unwrap();
		let east = index.region_for_cell(CellIndex::new(5, 3)).unwrap();
		assert_ne!(west.get_origin(), east.get_origin());
		// the wall carries no region so the two sides are not linked
		assert!(west.get_neighbours().is_empty());
		assert!(east.get_neighbours().is_empty());
	}
	#[test]
	fn partial_wall_regions_merge_where_they_meet() {
		// a wall along column 1 stopping below row 6, the two sides grow
		// separately and fold into one region where the sweep joins them
		let mut data = ChunkCellData::default();
		for row in 0..6 {
			data.set_blocked(1, row, 0b1);
		}
		let mut graph = NavGraph::default();
		graph.load_chunk(ChunkCoord::new(0, 0), &data);
		let mut index = RegionIndex::default();
		index.generate_regions(&graph, ChunkCoord::new(0, 0));
		let regions = index.get_chunk_regions(ChunkCoord::new(0, 0));
		assert_eq!(1, regions.len());
		assert_eq!(
			CHUNK_RESOLUTION * CHUNK_RESOLUTION - 6,
			regions[0].get_cells().len()
		);
		assert!(regions[0].contains(CellIndex::new(0, 0)));
		assert!(regions[0].contains(CellIndex::new(7, 0)));
	}
	#[test]
	fn blocked_cells_belong_to_no_region() {
		let (_, index) = door_setup();
		assert!(index.region_for_cell(CellIndex::new(3, 0)).is_none());
		// and a cell of a chunk with no generated regions finds nothing
		assert!(index.region_for_cell(CellIndex::new(20, 20)).is_none());
	}
	#[test]
	fn door_cell_forms_its_own_linked_region() {
		let (_, index) = door_setup();
		assert_eq!(3, index.get_chunk_regions(ChunkCoord::new(0, 0)).len());
		let door = index.region_for_cell(CellIndex::new(3, 4)).unwrap();
		assert!(door.is_door());
		assert_eq!(1, door.get_cells().len());
		let west = index.region_for_cell(CellIndex::new(0, 0)).unwrap();
		let east = index.region_for_cell(CellIndex::new(7, 0)).unwrap();
		// the door bridges the two rooms, links held on both sides
		assert!(door.get_neighbours().contains(&west.get_origin()));
		assert!(door.get_neighbours().contains(&east.get_origin()));
		assert!(west.get_neighbours().contains(&door.get_origin()));
		assert!(east.get_neighbours().contains(&door.get_origin()));
		assert!(!west.get_neighbours().contains(&east.get_origin()));
	}
	#[test]
	fn cross_chunk_regions_link_symmetrically() {
		let mut graph = NavGraph::default();
		graph.load_chunk(ChunkCoord::new(0, 0), &ChunkCellData::default());
		graph.load_chunk(ChunkCoord::new(1, 0), &ChunkCellData::default());
		let mut index = RegionIndex::default();
		index.generate_regions(&graph, ChunkCoord::new(0, 0));
		index.generate_regions(&graph, ChunkCoord::new(1, 0));
		let west = index.region_for_cell(CellIndex::new(0, 0)).unwrap();
		let east = index.region_for_cell(CellIndex::new(8, 0)).unwrap();
		assert!(west.get_neighbours().contains(&east.get_origin()));
		assert!(east.get_neighbours().contains(&west.get_origin()));
	}
	#[test]
	fn bounds_grow_monotonically() {
		let mut region = Region::new(CellIndex::new(4, 4), false);
		assert_eq!((0, 0), (region.get_width(), region.get_height()));
		region.add(CellIndex::new(1, 4));
		assert_eq!((3, 0), (region.get_width(), region.get_height()));
		// a closer cell never shrinks the extents
		region.add(CellIndex::new(5, 4));
		assert_eq!((3, 0), (region.get_width(), region.get_height()));
		region.add(CellIndex::new(4, 7));
		assert_eq!((3, 3), (region.get_width(), region.get_height()));
	}
	#[test]
	fn distance_shrinks_by_facing_extents() {
		let mut graph = NavGraph::default();
		graph.load_chunk(ChunkCoord::new(0, 0), &ChunkCellData::default());
		graph.load_chunk(ChunkCoord::new(1, 0), &ChunkCellData::default());
		let mut index = RegionIndex::default();
		index.generate_regions(&graph, ChunkCoord::new(0, 0));
		index.generate_regions(&graph, ChunkCoord::new(1, 0));
		let west = index.region_for_cell(CellIndex::new(0, 0)).unwrap();
		let east = index.region_for_cell(CellIndex::new(8, 0)).unwrap();
		// origins sit 8 apart but the west region extends 7 cells towards the
		// east one
		assert_eq!(1.0, west.distance(east));
		assert_eq!(1.0, east.distance(west));
	}
	#[test]
	fn shutdown_region_unlinks_and_is_idempotent() {
		let (_, mut index) = door_setup();
		let door_origin = CellIndex::new(3, 4);
		let west_origin = index
			.region_for_cell(CellIndex::new(0, 0))
			.unwrap()
			.get_origin();
		let removed = index.shutdown_region(door_origin).unwrap();
		assert!(removed.is_deleted());
		assert!(removed.get_cells().is_empty());
		assert!(index.get_region(door_origin).is_none());
		let west = index.get_region(west_origin).unwrap();
		assert!(!west.get_neighbours().contains(&door_origin));
		// a second shutdown finds nothing to do
		assert!(index.shutdown_region(door_origin).is_none());
	}
	#[test]
	fn regenerating_a_chunk_replaces_its_regions() {
		let (graph, mut index) = open_setup();
		index.generate_regions(&graph, ChunkCoord::new(0, 0));
		assert_eq!(1, index.get_chunk_regions(ChunkCoord::new(0, 0)).len());
		assert_eq!(1, index.get_regions().len());
	}
	#[test]
	fn shutdown_chunk_drops_cross_chunk_links() {
		let mut graph = NavGraph::default();
		graph.load_chunk(ChunkCoord::new(0, 0), &ChunkCellData::default());
		graph.load_chunk(ChunkCoord::new(1, 0), &ChunkCellData::default());
		let mut index = RegionIndex::default();
		index.generate_regions(&graph, ChunkCoord::new(0, 0));
		index.generate_regions(&graph, ChunkCoord::new(1, 0));
		index.shutdown_chunk(ChunkCoord::new(1, 0));
		assert!(index.get_chunk_regions(ChunkCoord::new(1, 0)).is_empty());
		let west = index.region_for_cell(CellIndex::new(0, 0)).unwrap();
		assert!(west.get_neighbours().is_empty());
	}
	#[test]
	fn reachable_regions_respects_door_access() {
		let (graph, index) = door_setup();
		let no_tags = TraversalProfile::new(20.0, BTreeSet::new(), 0b1);
		let sealed = index.reachable_regions(&graph, &no_tags, CellIndex::new(0, 0));
		assert_eq!(1, sealed.len());
		let open = index.reachable_regions(&graph, &engineering_profile(20.0), CellIndex::new(0, 0));
		assert_eq!(3, open.len());
		assert!(open.contains(&CellIndex::new(3, 4)));
	}
	#[test]
	fn reachable_regions_bounded_by_vision_radius() {
		let mut graph = NavGraph::default();
		let mut index = RegionIndex::default();
		for x in 0..3 {
			graph.load_chunk(ChunkCoord::new(x, 0), &ChunkCellData::default());
		}
		for x in 0..3 {
			index.generate_regions(&graph, ChunkCoord::new(x, 0));
		}
		// a zero radius still reaches the adjacent chunk's region at distance
		// one but not the chunk beyond it
		let profile = TraversalProfile::new(0.0, BTreeSet::new(), 0b1);
		let reached = index.reachable_regions(&graph, &profile, CellIndex::new(0, 0));
		assert_eq!(2, reached.len());
		assert!(reached.contains(&CellIndex::new(8, 0)));
		assert!(!reached.contains(&CellIndex::new(16, 0)));
	}
	#[test]
	fn reachable_same_region_is_immediate() {
		let (graph, index) = open_setup();
		let profile = TraversalProfile::new(0.0, BTreeSet::new(), 0b1);
		assert!(index.reachable(&graph, &profile, CellIndex::new(1, 1), CellIndex::new(6, 6)));
	}
	#[test]
	fn reachable_across_door_needs_tags() {
		let (graph, index) = door_setup();
		let from = CellIndex::new(0, 0);
		let to = CellIndex::new(7, 0);
		let no_tags = TraversalProfile::new(20.0, BTreeSet::new(), 0b1);
		assert!(!index.reachable(&graph, &no_tags, from, to));
		assert!(index.reachable(&graph, &engineering_profile(20.0), from, to));
	}
	#[test]
	fn reachable_false_for_unregioned_cells() {
		let (graph, index) = door_setup();
		// the wall cell has no region
		assert!(!index.reachable(
			&graph,
			&engineering_profile(20.0),
			CellIndex::new(0, 0),
			CellIndex::new(3, 0)
		));
	}
}
