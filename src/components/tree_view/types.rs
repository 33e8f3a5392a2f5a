use std::fmt;

use serde::{Deserialize, Deserializer};

/// Position of a paper in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
	/// Foundational papers.
	Root,
	/// Structural papers linking roots to recent work.
	Trunk,
	/// Recent papers.
	Leaf,
}

impl Group {
	/// Name used in JSON and DOM attributes.
	pub fn as_str(self) -> &'static str {
		match self {
			Group::Root => "root",
			Group::Trunk => "trunk",
			Group::Leaf => "leaf",
		}
	}
}

impl fmt::Display for Group {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Identifies one node across the circle, its list entry and its selected entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
	/// Group index assigned by the server.
	pub id: i64,
	/// Rank inside the group.
	pub ri: i64,
}

impl NodeKey {
	/// DOM id suffix, `<id><ri>` with no separator.
	pub fn dom_suffix(&self) -> String {
		format!("{}{}", self.id, self.ri)
	}

	/// Value of the quit action's `data-node` attribute.
	pub fn data_node(&self) -> String {
		format!("{},{}", self.id, self.ri)
	}
}

/// One paper as served in the dataset.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphNode {
	/// Group index; doubles as the focus selector.
	pub id: i64,
	/// Tree position.
	pub group: Group,
	/// Title, optionally followed by `DOI` and an identifier.
	pub label: String,
	/// Rank inside the group.
	pub ri: i64,
	/// Citation degree, used only for sizing.
	#[serde(deserialize_with = "lenient_int")]
	pub degree: i64,
	/// Index of the paper in the source tree.
	#[serde(default)]
	pub indice: Option<i64>,
}

impl GraphNode {
	/// Key correlating the circle and both list entries.
	pub fn key(&self) -> NodeKey {
		NodeKey {
			id: self.id,
			ri: self.ri,
		}
	}
}

/// Body served by the query page for AJAX requests.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphDescription {
	/// `"not ready"` while the tree is still being computed.
	pub status: String,
	/// Papers; absent until the tree is ready.
	#[serde(default)]
	pub nodes: Vec<GraphNode>,
}

impl GraphDescription {
	/// Decodes a response body.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Only the literal `"not ready"` blocks rendering.
	pub fn is_ready(&self) -> bool {
		self.status != "not ready"
	}
}

/// Accepts `5` as well as `"5"`.
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum IntOrText {
		Int(i64),
		Text(String),
	}

	match IntOrText::deserialize(deserializer)? {
		IntOrText::Int(n) => Ok(n),
		IntOrText::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_server_payload() {
		let desc = GraphDescription::from_json(
			r#"{"status":"success","nodes":[
				{"id":0,"group":"root","label":"A","ri":1,"degree":5,"indice":42},
				{"id":2,"group":"leaf","label":"B","ri":0,"degree":"3"}
			]}"#,
		)
		.unwrap();
		assert!(desc.is_ready());
		assert_eq!(desc.nodes.len(), 2);
		assert_eq!(desc.nodes[0].indice, Some(42));
		assert_eq!(desc.nodes[1].degree, 3);
		assert_eq!(desc.nodes[1].group, Group::Leaf);
	}

	#[test]
	fn not_ready_needs_no_nodes() {
		let desc = GraphDescription::from_json(r#"{"status":"not ready"}"#).unwrap();
		assert!(!desc.is_ready());
		assert!(desc.nodes.is_empty());
	}

	#[test]
	fn unknown_group_rejects_dataset() {
		let err = GraphDescription::from_json(
			r#"{"status":"ready","nodes":[{"id":0,"group":"branch","label":"A","ri":1,"degree":5}]}"#,
		);
		assert!(err.is_err());
	}

	#[test]
	fn key_formats() {
		let key = NodeKey { id: 1, ri: 12 };
		assert_eq!(key.dom_suffix(), "112");
		assert_eq!(key.data_node(), "1,12");
	}
}
