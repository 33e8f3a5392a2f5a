//! Group palette and the presentation attributes derived from it.

use super::types::Group;

/// Root fill.
pub const ROOT_FILL: &str = "#f5a200";
/// Trunk fill.
pub const TRUNK_FILL: &str = "#824d13";
/// Leaf fill.
pub const LEAF_FILL: &str = "#4cac33";

/// Root fill while selected.
pub const ROOT_SELECTED: &str = "#a86f00";
/// Trunk fill while selected.
pub const TRUNK_SELECTED: &str = "#351d07";
/// Leaf fill while selected.
pub const LEAF_SELECTED: &str = "#235f13";

/// Circle fill for a node, darker while it is selected.
pub fn fill(group: Group, selected: bool) -> &'static str {
	match (group, selected) {
		(Group::Root, false) => ROOT_FILL,
		(Group::Trunk, false) => TRUNK_FILL,
		(Group::Leaf, false) => LEAF_FILL,
		(Group::Root, true) => ROOT_SELECTED,
		(Group::Trunk, true) => TRUNK_SELECTED,
		(Group::Leaf, true) => LEAF_SELECTED,
	}
}

/// Inline style of the bullet icon in list entries.
pub fn bullet_style(group: Group) -> String {
	format!(
		"color:{};font-size:21px;background:none;",
		fill(group, false)
	)
}

/// Row class in the summary table.
pub fn summary_class(group: Group) -> &'static str {
	match group {
		Group::Root => "bg-yellow",
		Group::Trunk => "bg-red",
		Group::Leaf => "bg-green",
	}
}

/// SVG coordinates are written with two decimals.
pub fn coord(v: f64) -> String {
	format!("{v:.2}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selected_shade_differs_for_every_group() {
		for group in [Group::Root, Group::Trunk, Group::Leaf] {
			assert_ne!(fill(group, false), fill(group, true));
		}
	}

	#[test]
	fn fills_match_palette() {
		let cases = [
			(Group::Root, false, "#f5a200"),
			(Group::Trunk, false, "#824d13"),
			(Group::Leaf, false, "#4cac33"),
			(Group::Root, true, "#a86f00"),
			(Group::Trunk, true, "#351d07"),
			(Group::Leaf, true, "#235f13"),
		];
		for (group, selected, expected) in cases {
			assert_eq!(fill(group, selected), expected, "{group} selected={selected}");
		}
	}

	#[test]
	fn summary_row_classes() {
		assert_eq!(summary_class(Group::Root), "bg-yellow");
		assert_eq!(summary_class(Group::Trunk), "bg-red");
		assert_eq!(summary_class(Group::Leaf), "bg-green");
	}

	#[test]
	fn bullet_uses_unselected_fill() {
		assert!(bullet_style(Group::Trunk).starts_with("color:#824d13;"));
	}

	#[test]
	fn coords_are_rounded() {
		assert_eq!(coord(12.3456), "12.35");
	}
}
