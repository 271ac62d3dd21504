//! Useful structures and tools used by the graph
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Defines the dimensions of the dense node array of every chunk
pub const CHUNK_RESOLUTION: usize = 8;

/// The diagonal surcharge of the octile metric, `sqrt(2) - 1`
const OCTILE_DIAGONAL_WEIGHT: f32 = 0.414_213_56;

/// Convenience way of accessing the 8 directions of movement between cells
/// and the up-to-8 neighbour links of a [crate::prelude::NavNode]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Reflect)]
pub enum Ordinal {
	North,
	NorthEast,
	East,
	SouthEast,
	South,
	SouthWest,
	West,
	NorthWest,
}

impl Ordinal {
	/// All directions in the fixed order used to index neighbour arrays
	pub const ALL: [Ordinal; 8] = [
		Ordinal::North,
		Ordinal::NorthEast,
		Ordinal::East,
		Ordinal::SouthEast,
		Ordinal::South,
		Ordinal::SouthWest,
		Ordinal::West,
		Ordinal::NorthWest,
	];
	/// The 4 compass directions, used when walking region edges
	pub const CARDINALS: [Ordinal; 4] = [
		Ordinal::North,
		Ordinal::East,
		Ordinal::South,
		Ordinal::West,
	];
	/// Position of this direction within [Ordinal::ALL]
	pub fn index(&self) -> usize {
		match self {
			Ordinal::North => 0,
			Ordinal::NorthEast => 1,
			Ordinal::East => 2,
			Ordinal::SouthEast => 3,
			Ordinal::South => 4,
			Ordinal::SouthWest => 5,
			Ordinal::West => 6,
			Ordinal::NorthWest => 7,
		}
	}
	/// The `(dx, dy)` cell offset of stepping once in this direction
	pub fn offset(&self) -> (i32, i32) {
		match self {
			Ordinal::North => (0, 1),
			Ordinal::NorthEast => (1, 1),
			Ordinal::East => (1, 0),
			Ordinal::SouthEast => (1, -1),
			Ordinal::South => (0, -1),
			Ordinal::SouthWest => (-1, -1),
			Ordinal::West => (-1, 0),
			Ordinal::NorthWest => (-1, 1),
		}
	}
	/// Whether this is one of the 4 diagonal directions
	pub fn is_diagonal(&self) -> bool {
		matches!(
			self,
			Ordinal::NorthEast | Ordinal::SouthEast | Ordinal::SouthWest | Ordinal::NorthWest
		)
	}
	/// The two compass directions flanking a diagonal, e.g. `NorthEast` is
	/// flanked by `North` and `East`. Returns [None] for compass directions
	pub fn flanking_cardinals(&self) -> Option<(Ordinal, Ordinal)> {
		match self {
			Ordinal::NorthEast => Some((Ordinal::North, Ordinal::East)),
			Ordinal::SouthEast => Some((Ordinal::South, Ordinal::East)),
			Ordinal::SouthWest => Some((Ordinal::South, Ordinal::West)),
			Ordinal::NorthWest => Some((Ordinal::North, Ordinal::West)),
			_ => None,
		}
	}
	/// Returns the opposite [Ordinal] of the current
	pub fn inverse(&self) -> Ordinal {
		match self {
			Ordinal::North => Ordinal::South,
			Ordinal::NorthEast => Ordinal::SouthWest,
			Ordinal::East => Ordinal::West,
			Ordinal::SouthEast => Ordinal::NorthWest,
			Ordinal::South => Ordinal::North,
			Ordinal::SouthWest => Ordinal::NorthEast,
			Ordinal::West => Ordinal::East,
			Ordinal::NorthWest => Ordinal::SouthEast,
		}
	}
	/// For two adjacent cells find the [Ordinal] describing where `target`
	/// sits relative to `source`. Returns [None] if the cells are not
	/// orthogonally or diagonally adjacent
	pub fn cell_to_cell_direction(target: CellIndex, source: CellIndex) -> Option<Self> {
		let direction = (
			target.get_x() - source.get_x(),
			target.get_y() - source.get_y(),
		);
		match direction {
			(0, 1) => Some(Ordinal::North),
			(1, 1) => Some(Ordinal::NorthEast),
			(1, 0) => Some(Ordinal::East),
			(1, -1) => Some(Ordinal::SouthEast),
			(0, -1) => Some(Ordinal::South),
			(-1, -1) => Some(Ordinal::SouthWest),
			(-1, 0) => Some(Ordinal::West),
			(-1, 1) => Some(Ordinal::NorthWest),
			_ => None,
		}
	}
}

/// The octile distance between two cells,
/// `max(|dx|,|dy|) + (sqrt(2) - 1) * min(|dx|,|dy|)`
pub fn octile_distance(a: CellIndex, b: CellIndex) -> f32 {
	octile_distance_f32(
		(a.get_x() - b.get_x()) as f32,
		(a.get_y() - b.get_y()) as f32,
	)
}

/// The octile metric applied to a raw `(dx, dy)` delta, used where the delta
/// has already been adjusted, e.g. by region bounding extents
pub fn octile_distance_f32(dx: f32, dy: f32) -> f32 {
	let dx = dx.abs();
	let dy = dy.abs();
	dx.max(dy) + OCTILE_DIAGONAL_WEIGHT * dx.min(dy)
}
