//! Pure traversability and cost helpers shared by the reachability scan and
//! the region graph. All of these are deterministic for identical inputs,
//! which the region homogeneity assumption depends on
//!

use std::collections::BTreeSet;

use crate::prelude::*;

/// Whether an agent with the given collision mask and access tags can occupy
/// a node's cell at all, independent of the direction of approach
pub fn traversable(collision_mask: u32, access: &BTreeSet<String>, node: &NavNode) -> bool {
	if collision_mask & node.get_blocked_mask() != 0 {
		return false;
	}
	node.get_barriers()
		.iter()
		.all(|barrier| barrier.is_allowed(access))
}

/// The heuristic cost of a candidate node measured from the *seed* reference
/// node of a query, not from the immediate predecessor. Returns [None] when
/// the candidate is untraversable for the profile, which scans treat as a
/// prune signal rather than an error
pub fn tile_cost(profile: &TraversalProfile, seed: &NavNode, candidate: &NavNode) -> Option<f32> {
	if !traversable(
		profile.get_collision_mask(),
		profile.get_access(),
		candidate,
	) {
		return None;
	}
	Some(octile_distance(seed.get_cell(), candidate.get_cell()))
}

/// Whether stepping from a node in a direction is legal for the given mask
/// and access tags. Compass steps always pass, the candidate cell itself is
/// gated by [tile_cost]; diagonal steps additionally require both flanking
/// compass neighbours to be loaded and traversable so an agent cannot cut a
/// corner through a blocked or locked cell
pub fn direction_traversable(
	graph: &NavGraph,
	collision_mask: u32,
	access: &BTreeSet<String>,
	from: &NavNode,
	direction: Ordinal,
) -> bool {
	let Some((first, second)) = direction.flanking_cardinals() else {
		return true;
	};
	for flank in [first, second] {
		let Some(flank_cell) = from.get_neighbour(flank) else {
			return false;
		};
		let Some(flank_node) = graph.get_node(flank_cell) else {
			return false;
		};
		if !traversable(collision_mask, access, flank_node) {
			return false;
		}
	}
	true
}
