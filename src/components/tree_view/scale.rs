//! Maps a node's degree onto a circle radius.

use super::types::GraphNode;

/// Degree range of a dataset and the radius tiers derived from it.
///
/// The range always includes zero, so with non-negative degrees every
/// radius lies between `base` and `base + tiers`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegreeScale {
	/// Smallest degree seen, or zero if every degree is positive.
	pub min_degree: i64,
	/// Largest degree seen, or zero if every degree is negative.
	pub max_degree: i64,
	tiers: f64,
	base: f64,
	flat: f64,
}

const MIN_RADIUS: f64 = 1.0;

impl DegreeScale {
	/// Scans `nodes` once, widening a range that starts at `0..=0`.
	pub fn observe<'a>(
		nodes: impl IntoIterator<Item = &'a GraphNode>,
		tiers: f64,
		base: f64,
		flat: f64,
	) -> Self {
		let (min_degree, max_degree) = nodes.into_iter().fold((0, 0), |(lo, hi), node| {
			(node.degree.min(lo), node.degree.max(hi))
		});
		Self {
			min_degree,
			max_degree,
			tiers,
			base,
			flat,
		}
	}

	/// True when every degree is the same, so no span is available to divide.
	pub fn is_flat(&self) -> bool {
		self.max_degree <= self.min_degree
	}

	/// `degree / (span / tiers) + base`, or the flat radius when the span is empty.
	pub fn radius(&self, degree: i64) -> f64 {
		if self.is_flat() {
			return self.flat;
		}
		let divisor = (self.max_degree - self.min_degree) as f64 / self.tiers;
		(degree as f64 / divisor + self.base).max(MIN_RADIUS)
	}
}
