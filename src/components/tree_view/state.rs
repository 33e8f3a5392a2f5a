use std::collections::HashMap;
use std::f64::consts::TAU;

use force_graph::{DefaultNodeIdx, ForceGraph, NodeData, SimulationParameters};
use log::{info, warn};

use super::model::RenderedNode;
use super::types::{Group, NodeKey};
use crate::config::TreeConfig;

/// One of the three attraction points of the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Focus {
	/// Lowest point, where roots gather.
	Root,
	/// Middle point.
	Trunk,
	/// Highest point.
	Leaf,
}

impl Focus {
	/// Validated mapping of ids 0, 1 and 2.
	pub fn from_id(id: i64) -> Option<Self> {
		match id {
			0 => Some(Focus::Root),
			1 => Some(Focus::Trunk),
			2 => Some(Focus::Leaf),
			_ => None,
		}
	}

	/// Focus for a node id, falling back to the node's group for ids outside 0..=2.
	pub fn resolve(id: i64, group: Group) -> Self {
		Self::from_id(id).unwrap_or_else(|| {
			warn!("Node id {id} has no focus point, using the {group} focus");
			Self::from(group)
		})
	}

	fn slot(self) -> usize {
		match self {
			Focus::Root => 0,
			Focus::Trunk => 1,
			Focus::Leaf => 2,
		}
	}
}

impl From<Group> for Focus {
	fn from(group: Group) -> Self {
		match group {
			Group::Root => Focus::Root,
			Group::Trunk => Focus::Trunk,
			Group::Leaf => Focus::Leaf,
		}
	}
}

/// Screen coordinates of the three focus points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusPoints([(f64, f64); 3]);

impl FocusPoints {
	/// Horizontally centered in a view `width` wide.
	pub fn new(width: f64, focus_y: [f64; 3]) -> Self {
		Self(focus_y.map(|y| (width / 2.0, y)))
	}

	/// Coordinates of `focus`.
	pub fn get(&self, focus: Focus) -> (f64, f64) {
		self.0[focus.slot()]
	}
}

/// Pull rates, each scaled by alpha on every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pull {
	/// Vertical rate for all groups, horizontal rate for roots and leaves.
	pub rate: f64,
	/// Horizontal rate for trunk nodes.
	pub trunk_x_rate: f64,
}

/// Minimal view of a simulated node for the focus step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Selects the horizontal pull rate.
	pub group: Group,
	/// Point the body is pulled toward.
	pub focus: Focus,
	/// Held by the pointer; not pulled.
	pub anchored: bool,
}

/// Nudges every free body toward its focus point.
///
/// Trunk nodes close the horizontal gap at `trunk_x_rate`, everything else
/// at `rate`. Vertical movement always uses `rate`.
pub fn advance(bodies: &mut [Body], foci: &FocusPoints, pull: Pull, alpha: f64) {
	for body in bodies.iter_mut().filter(|b| !b.anchored) {
		let (fx, fy) = foci.get(body.focus);
		let x_rate = match body.group {
			Group::Trunk => pull.trunk_x_rate,
			Group::Root | Group::Leaf => pull.rate,
		};
		body.y += (fy - body.y) * pull.rate * alpha;
		body.x += (fx - body.x) * x_rate * alpha;
	}
}

/// Per-node payload stored in the integrator.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	/// Key of the rendered node.
	pub key: NodeKey,
	/// Group of the rendered node.
	pub group: Group,
	/// Focus the node is pulled toward.
	pub focus: Focus,
}

/// Pointer drag in progress, in SVG coordinates.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	/// A node is held by the pointer.
	pub active: bool,
	/// Integrator index of the held node.
	pub node_idx: Option<DefaultNodeIdx>,
	/// Pointer position at press.
	pub start_x: f64,
	/// Pointer position at press.
	pub start_y: f64,
	/// Node position at press.
	pub node_start_x: f32,
	/// Node position at press.
	pub node_start_y: f32,
	/// The pointer moved since the press.
	pub moved: bool,
	/// Set when the last pointer-up ended a real drag, so the click that follows is ignored.
	pub swallow_click: bool,
}

/// Current position of every simulated node.
pub type Positions = HashMap<NodeKey, (f64, f64)>;

/// Focus-point layout of the rendered nodes, with alpha cooling.
pub struct TreeLayout {
	/// Repulsion integrator holding the node positions.
	pub graph: ForceGraph<NodeInfo, ()>,
	/// Current pointer drag.
	pub drag: DragState,
	/// View width.
	pub width: f64,
	/// View height.
	pub height: f64,
	index: HashMap<NodeKey, DefaultNodeIdx>,
	foci: FocusPoints,
	pull: Pull,
	alpha: f64,
	alpha_start: f64,
	alpha_decay: f64,
	alpha_rest: f64,
	mass: f32,
}

impl TreeLayout {
	/// Empty layout at rest.
	pub fn new(width: f64, config: &TreeConfig) -> Self {
		let r = config.repulsion;
		let graph = ForceGraph::new(SimulationParameters {
			force_charge: r.charge,
			force_spring: 0.0,
			force_max: r.max_force,
			node_speed: r.node_speed,
			damping_factor: r.damping,
		});
		Self {
			graph,
			drag: DragState::default(),
			width,
			height: config.height,
			index: HashMap::new(),
			foci: FocusPoints::new(width, config.focus_y),
			pull: Pull {
				rate: config.pull_rate,
				trunk_x_rate: config.trunk_pull_rate,
			},
			alpha: 0.0,
			alpha_start: config.alpha_start,
			alpha_decay: config.alpha_decay,
			alpha_rest: config.alpha_rest,
			mass: r.node_mass,
		}
	}

	/// Adds a node near its focus point and restarts the layout.
	pub fn add_node(&mut self, node: &RenderedNode) {
		if self.index.contains_key(&node.key) {
			return;
		}
		let i = self.index.len() as f64;
		let (fx, fy) = self.foci.get(node.focus);
		let angle = i * TAU / 7.0;
		let spread = 30.0 + 4.0 * i.sqrt();
		let idx = self.graph.add_node(NodeData {
			x: (fx + spread * angle.cos()) as f32,
			y: (fy + spread * angle.sin()) as f32,
			mass: self.mass,
			is_anchor: false,
			user_data: NodeInfo {
				key: node.key,
				group: node.group,
				focus: node.focus,
			},
		});
		self.index.insert(node.key, idx);
		self.restart();
	}

	/// Number of simulated nodes.
	pub fn len(&self) -> usize {
		self.index.len()
	}

	/// No node has been added.
	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	/// Current cooling factor; zero at rest.
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	/// Whether frames still move nodes.
	pub fn is_active(&self) -> bool {
		self.alpha > 0.0
	}

	/// Resets alpha to its starting value.
	pub fn restart(&mut self) {
		self.alpha = self.alpha_start;
	}

	/// Raises alpha back to its starting value if it has cooled below it.
	pub fn resume(&mut self) {
		self.alpha = self.alpha.max(self.alpha_start);
	}

	/// Advances one frame. Returns `false` once the layout has come to rest.
	pub fn tick(&mut self, dt: f32) -> bool {
		if !self.is_active() {
			return false;
		}
		self.alpha *= self.alpha_decay;
		if self.alpha < self.alpha_rest {
			self.alpha = 0.0;
			info!("Layout at rest with {} nodes", self.len());
			return false;
		}

		self.graph.update(dt);

		let mut ids = Vec::with_capacity(self.len());
		let mut bodies = Vec::with_capacity(self.len());
		self.graph.visit_nodes(|node| {
			let info = &node.data.user_data;
			ids.push(node.index());
			bodies.push(Body {
				x: node.x() as f64,
				y: node.y() as f64,
				group: info.group,
				focus: info.focus,
				anchored: node.data.is_anchor,
			});
		});
		advance(&mut bodies, &self.foci, self.pull, self.alpha);

		let moved: HashMap<DefaultNodeIdx, Body> = ids.into_iter().zip(bodies).collect();
		self.graph.visit_nodes_mut(|node| {
			if let Some(body) = moved.get(&node.index()) {
				node.data.x = body.x as f32;
				node.data.y = body.y as f32;
			}
		});
		true
	}

	/// Position of one node.
	pub fn position(&self, key: &NodeKey) -> Option<(f64, f64)> {
		let idx = *self.index.get(key)?;
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	/// Snapshot of every node position.
	pub fn positions(&self) -> Positions {
		let mut out = Positions::with_capacity(self.len());
		self.graph.visit_nodes(|node| {
			out.insert(node.data.user_data.key, (node.x() as f64, node.y() as f64));
		});
		out
	}

	/// Starts dragging `key` from pointer position `(x, y)`; the node is held
	/// in place by the pointer until [`Self::end_drag`].
	pub fn begin_drag(&mut self, key: &NodeKey, x: f64, y: f64) -> bool {
		let Some(&idx) = self.index.get(key) else {
			return false;
		};
		self.drag = DragState {
			active: true,
			node_idx: Some(idx),
			start_x: x,
			start_y: y,
			..DragState::default()
		};
		let drag = &mut self.drag;
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				drag.node_start_x = node.data.x;
				drag.node_start_y = node.data.y;
				node.data.is_anchor = true;
			}
		});
		self.resume();
		true
	}

	/// Moves the held node with the pointer.
	pub fn drag_to(&mut self, x: f64, y: f64) {
		let (true, Some(idx)) = (self.drag.active, self.drag.node_idx) else {
			return;
		};
		let (dx, dy) = (x - self.drag.start_x, y - self.drag.start_y);
		if dx != 0.0 || dy != 0.0 {
			self.drag.moved = true;
		}
		let (nx, ny) = (
			self.drag.node_start_x + dx as f32,
			self.drag.node_start_y + dy as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
			}
		});
		self.resume();
	}

	/// Releases the dragged node back into the simulation.
	pub fn end_drag(&mut self) {
		if let Some(idx) = self.drag.node_idx.take() {
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.is_anchor = false;
				}
			});
		}
		self.drag.swallow_click = self.drag.active && self.drag.moved;
		self.drag.active = false;
		self.drag.moved = false;
	}

	/// Consumes the click-suppression flag left by a finished drag.
	pub fn take_swallowed_click(&mut self) -> bool {
		std::mem::take(&mut self.drag.swallow_click)
	}
}
