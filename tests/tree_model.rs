use serde_json::json;
use tos_tree_view::config::TreeConfig;
use tos_tree_view::{GraphDescription, Group, LoadState, NodeKey, Selection, TreeLayout, TreeModel};

fn scenario() -> GraphDescription {
	let body = json!({
		"status": "ready",
		"nodes": [
			{"id": 0, "group": "root", "label": "A", "ri": 1, "degree": 5},
			{"id": 1, "group": "trunk", "label": "B DOIabc", "ri": 2, "degree": 2},
			{"id": 9, "group": "leaf", "label": "C", "ri": 3, "degree": 1}
		]
	});
	GraphDescription::from_json(&body.to_string()).unwrap()
}

#[test]
fn three_node_scenario() {
	let model = TreeModel::build(&scenario(), &TreeConfig::default());

	assert_eq!(model.summary_rows().count(), 3);
	assert_eq!(model.all_nodes().count(), 3);

	let drawn: Vec<NodeKey> = model.rendered().iter().map(|n| n.key).collect();
	assert_eq!(drawn, [NodeKey { id: 0, ri: 1 }, NodeKey { id: 1, ri: 2 }]);

	let trunk = model.entry(&NodeKey { id: 1, ri: 2 }).unwrap();
	assert_eq!(trunk.parts.text, "B ");
	assert_eq!(trunk.parts.href().as_deref(), Some("http://dx.doi.org/abc"));

	let root = model.entry(&NodeKey { id: 0, ri: 1 }).unwrap();
	assert_eq!(root.parts.href(), None);
}

#[test]
fn radii_follow_degree() {
	let model = TreeModel::build(&scenario(), &TreeConfig::default());
	let root = model.rendered_node(&NodeKey { id: 0, ri: 1 }).unwrap();
	let trunk = model.rendered_node(&NodeKey { id: 1, ri: 2 }).unwrap();
	assert!(root.radius > trunk.radius);
	// range 0..=5, so the largest degree lands on the top tier
	assert!((root.radius - 13.0).abs() < 1e-9);
	assert!((trunk.radius - (2.0 * 9.0 / 5.0 + 4.0)).abs() < 1e-9);
}

#[test]
fn sentinel_never_enters_layout() {
	let config = TreeConfig::default();
	let model = TreeModel::build(&scenario(), &config);
	let mut layout = TreeLayout::new(640.0, &config);
	for node in model.rendered() {
		layout.add_node(node);
	}
	assert_eq!(layout.len(), 2);
	assert!(layout.position(&NodeKey { id: 9, ri: 3 }).is_none());
}

#[test]
fn click_and_quit_converge_for_every_group() {
	let body = json!({
		"status": "success",
		"nodes": [
			{"id": 0, "group": "root", "label": "R", "ri": 0, "degree": 3},
			{"id": 1, "group": "trunk", "label": "T", "ri": 0, "degree": 2},
			{"id": 2, "group": "leaf", "label": "L", "ri": 0, "degree": 1}
		]
	});
	let model = TreeModel::build(
		&GraphDescription::from_json(&body.to_string()).unwrap(),
		&TreeConfig::default(),
	);
	let groups: Vec<Group> = model.rendered().iter().map(|n| n.group).collect();
	assert_eq!(groups, [Group::Root, Group::Trunk, Group::Leaf]);

	for node in model.rendered() {
		let mut reclicked = Selection::default();
		let mut quit = Selection::default();
		assert!(reclicked.toggle(node.key));
		assert!(quit.toggle(node.key));

		assert!(!reclicked.toggle(node.key));
		assert!(quit.remove(&node.key));
		assert_eq!(reclicked, quit);
		assert!(!quit.contains(&node.key));
	}
}

#[test]
fn not_ready_renders_nothing() {
	let body = json!({"status": "not ready"});
	let desc = GraphDescription::from_json(&body.to_string()).unwrap();
	let state = LoadState::resolve(&desc, &TreeConfig::default());
	assert_eq!(state, LoadState::NotReady);
	assert!(state.model().is_none());
}
