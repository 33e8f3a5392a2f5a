use std::collections::HashSet;

use log::warn;

use super::label::LabelParts;
use super::scale::DegreeScale;
use super::state::Focus;
use super::types::{GraphDescription, Group, NodeKey};
use crate::config::TreeConfig;

/// One node as listed in the summary table and the all-nodes panel.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeEntry {
	/// Selection key.
	pub key: NodeKey,
	/// Tree position of the paper.
	pub group: Group,
	/// Full label as served.
	pub label: String,
	/// Rank inside the group.
	pub ri: i64,
	/// Index of the paper in the source tree, when the server sends it.
	pub indice: Option<i64>,
	/// Label split into display text and DOI.
	pub parts: LabelParts,
}

impl NodeEntry {
	/// DOM id of the all-nodes entry, keyed by the source-tree index
	/// (falling back to `ri` when the server omits it).
	pub fn list_dom_id(&self) -> String {
		format!("nodelist{}{}", self.key.id, self.indice.unwrap_or(self.ri))
	}
}

/// A node that takes part in the layout and gets a circle.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedNode {
	/// Selection key.
	pub key: NodeKey,
	/// Picks the circle colors.
	pub group: Group,
	/// Full label, copied onto the circle.
	pub label: String,
	/// Written to the circle's `indice` attribute.
	pub ri: i64,
	/// Circle radius from the degree scale.
	pub radius: f64,
	/// Point the node is pulled toward.
	pub focus: Focus,
}

/// Everything derived from a ready dataset before anything is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeModel {
	/// Degree range of the whole dataset.
	pub scale: DegreeScale,
	entries: Vec<NodeEntry>,
	rendered: Vec<RenderedNode>,
}

impl TreeModel {
	/// Derives panel entries and rendered nodes from a ready dataset.
	pub fn build(desc: &GraphDescription, config: &TreeConfig) -> Self {
		let scale = DegreeScale::observe(
			&desc.nodes,
			config.degree_tiers,
			config.base_radius,
			config.flat_radius,
		);

		let mut entries = Vec::with_capacity(desc.nodes.len());
		let mut rendered = Vec::with_capacity(desc.nodes.len());
		let mut seen = HashSet::new();

		for node in &desc.nodes {
			let key = node.key();
			entries.push(NodeEntry {
				key,
				group: node.group,
				label: node.label.clone(),
				ri: node.ri,
				indice: node.indice,
				parts: LabelParts::split(&node.label),
			});

			if node.id == config.sentinel_id {
				continue;
			}
			if !seen.insert(key) {
				warn!("Duplicate node key {key:?}, drawing first occurrence only");
				continue;
			}
			rendered.push(RenderedNode {
				key,
				group: node.group,
				label: node.label.clone(),
				ri: node.ri,
				radius: scale.radius(node.degree),
				focus: Focus::resolve(node.id, node.group),
			});
		}

		Self {
			scale,
			entries,
			rendered,
		}
	}

	/// Summary table rows, in dataset order.
	pub fn summary_rows(&self) -> impl Iterator<Item = &NodeEntry> {
		self.entries.iter()
	}

	/// All-nodes panel entries; each node was prepended, so newest first.
	pub fn all_nodes(&self) -> impl Iterator<Item = &NodeEntry> {
		self.entries.iter().rev()
	}

	/// Nodes that get a circle, in dataset order.
	pub fn rendered(&self) -> &[RenderedNode] {
		&self.rendered
	}

	/// Looks up a drawn node.
	pub fn rendered_node(&self, key: &NodeKey) -> Option<&RenderedNode> {
		self.rendered.iter().find(|n| n.key == *key)
	}

	/// First panel entry with `key`.
	pub fn entry(&self, key: &NodeKey) -> Option<&NodeEntry> {
		self.entries.iter().find(|e| e.key == *key)
	}
}
