//! A bounded reachability scan over the node graph: a plain FIFO flood fill
//! that lazily yields every node an agent can reach within a cost ceiling.
//!
//! This is deliberately not a shortest-path search. There is no priority
//! queue and the cost of a node is measured straight from the seed cell with
//! the octile heuristic, so a node may be discovered via a route that is not
//! its cheapest. Callers only ever ask "is this within proximity" so the
//! over-approximation is acceptable and downstream code depends on it, do not
//! "correct" this into Dijkstra
//!

use std::collections::{HashSet, VecDeque};

use crate::prelude::*;

/// Lazy sequence of nodes reachable within [ScanArgs::get_proximity] of a
/// seed cell. Obtained from [NavGraph::nodes_in_range], consumed once and
/// never resumed; a fresh scan starts from a fresh call
pub struct ReachableNodes<'a> {
	/// The graph being walked
	graph: &'a NavGraph,
	/// The query arguments the scan was started with
	args: &'a ScanArgs,
	/// Cell the flood originates from
	seed: CellIndex,
	/// FIFO frontier of discovered cells
	queue: VecDeque<CellIndex>,
	/// Cells whose expansion has begun. Note that the cell being closed is
	/// the predecessor, not the neighbour under consideration, so a cell can
	/// be enqueued twice via different predecessors before either is
	/// expanded. The yield dedup below covers that window
	closed: HashSet<CellIndex>,
	/// Cells already handed to the caller, so no node is yielded twice
	yielded: HashSet<CellIndex>,
	/// The cell currently being expanded and the next [Ordinal::ALL] index
	/// to consider from it
	expanding: Option<(CellIndex, usize)>,
}

impl NavGraph {
	/// Start a bounded reachability scan. `from_start` selects whether the
	/// flood originates at the start or end cell of `args`. An unloaded seed
	/// cell produces an empty sequence, the only "not found" signal a scan has
	pub fn nodes_in_range<'a>(
		&'a self,
		args: &'a ScanArgs,
		from_start: bool,
	) -> ReachableNodes<'a> {
		let seed = if from_start {
			args.get_start()
		} else {
			args.get_end()
		};
		let mut queue = VecDeque::new();
		if self.get_node(seed).is_some() {
			queue.push_back(seed);
		}
		ReachableNodes {
			graph: self,
			args,
			seed,
			queue,
			closed: HashSet::new(),
			yielded: HashSet::new(),
			expanding: None,
		}
	}
}

impl<'a> Iterator for ReachableNodes<'a> {
	type Item = &'a NavNode;

	fn next(&mut self) -> Option<Self::Item> {
		let graph = self.graph;
		let profile = self.args.get_profile();
		loop {
			let (current_cell, start_index) = match self.expanding {
				Some(state) => state,
				None => {
					let current_cell = self.queue.pop_front()?;
					self.expanding = Some((current_cell, 0));
					(current_cell, 0)
				}
			};
			// a chunk mutation during an abandoned-and-resumed scan is a
			// caller contract violation, treat a vanished node as exhausted
			let Some(current) = graph.get_node(current_cell) else {
				self.expanding = None;
				continue;
			};
			let Some(seed_node) = graph.get_node(self.seed) else {
				return None;
			};
			for index in start_index..Ordinal::ALL.len() {
				let ordinal = Ordinal::ALL[index];
				let Some(neighbour_cell) = current.get_neighbour(ordinal) else {
					continue;
				};
				if self.closed.contains(&neighbour_cell) {
					continue;
				}
				// the predecessor is closed here, not the neighbour
				self.closed.insert(current_cell);
				let Some(neighbour) = graph.get_node(neighbour_cell) else {
					continue;
				};
				let cost = tile_cost(profile, seed_node, neighbour);
				match cost {
					None => continue,
					Some(cost) if cost > self.args.get_proximity() => continue,
					Some(_) => (),
				}
				if !direction_traversable(
					graph,
					profile.get_collision_mask(),
					profile.get_access(),
					current,
					ordinal,
				) {
					continue;
				}
				self.queue.push_back(neighbour_cell);
				if self.yielded.insert(neighbour_cell) {
					self.expanding = Some((current_cell, index + 1));
					return Some(neighbour);
				}
			}
			self.expanding = None;
		}
	}
}
