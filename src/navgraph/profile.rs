//! A traversal profile is an immutable snapshot of one agent's movement
//! capabilities taken at query time from its physics, access and AI state
//!

use std::collections::BTreeSet;

use crate::prelude::*;

/// Snapshot of an agent's movement capabilities. Constructed per query from
/// the querying entity's components and discarded afterwards, it carries no
/// identity of its own
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraversalProfile {
	/// How far the agent can search/see, bounding coarse region queries
	vision_radius: f32,
	/// Access credential tags the agent holds
	access: BTreeSet<String>,
	/// Collision-mask bitfield of the agent
	collision_mask: u32,
}

impl TraversalProfile {
	/// Create a new instance of [TraversalProfile]
	pub fn new(vision_radius: f32, access: BTreeSet<String>, collision_mask: u32) -> Self {
		TraversalProfile {
			vision_radius,
			access,
			collision_mask,
		}
	}
	/// Get the vision/search radius
	pub fn get_vision_radius(&self) -> f32 {
		self.vision_radius
	}
	/// Get the access credential tags
	pub fn get_access(&self) -> &BTreeSet<String> {
		&self.access
	}
	/// Get the collision-mask bitfield
	pub fn get_collision_mask(&self) -> u32 {
		self.collision_mask
	}
}

/// Bundles everything a reachability scan needs: the two cells of interest,
/// the agent's [TraversalProfile] and the cost ceiling bounding the flood
#[derive(Clone, Debug)]
pub struct ScanArgs {
	/// Cell the query originates from
	start: CellIndex,
	/// Cell the query is interested in
	end: CellIndex,
	/// Capabilities of the querying agent
	profile: TraversalProfile,
	/// Cost ceiling of the flood fill relative to the seed cell. The only
	/// termination guarantee of a scan, so it must be finite and small enough
	/// that the worst-case node count (proportional to its square in open
	/// areas) stays cheap
	proximity: f32,
}

impl ScanArgs {
	/// Create a new instance of [ScanArgs]. A non-finite or negative
	/// `proximity` is a caller error, guarded in debug builds only
	pub fn new(start: CellIndex, end: CellIndex, profile: TraversalProfile, proximity: f32) -> Self {
		debug_assert!(
			proximity.is_finite() && proximity >= 0.0,
			"Scan proximity must be finite and non-negative, got {}",
			proximity
		);
		ScanArgs {
			start,
			end,
			profile,
			proximity,
		}
	}
	/// Get the cell the query originates from
	pub fn get_start(&self) -> CellIndex {
		self.start
	}
	/// Get the cell the query is interested in
	pub fn get_end(&self) -> CellIndex {
		self.end
	}
	/// Get the capabilities of the querying agent
	pub fn get_profile(&self) -> &TraversalProfile {
		&self.profile
	}
	/// Get the cost ceiling of the flood fill
	pub fn get_proximity(&self) -> f32 {
		self.proximity
	}
}
