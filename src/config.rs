//! Tunables for the tree view and the host page it mounts into.

/// CSS selectors of the containers the host page provides.
#[derive(Clone, Debug)]
pub struct HostSelectors {
	/// Container the SVG is appended to.
	pub tree: String,
	/// Body of the summary table.
	pub summary_body: String,
	/// List of every node.
	pub all_nodes: String,
	/// List of selected nodes.
	pub selected_nodes: String,
}

impl Default for HostSelectors {
	fn default() -> Self {
		Self {
			tree: "#tree".into(),
			summary_body: "#jsontable tbody".into(),
			all_nodes: ".allnodes".into(),
			selected_nodes: ".selectedNodes".into(),
		}
	}
}

/// Charge settings handed to the `force_graph` integrator.
#[derive(Clone, Copy, Debug)]
pub struct Repulsion {
	/// Charge between every pair of nodes.
	pub charge: f32,
	/// Cap on the force applied to one node.
	pub max_force: f32,
	/// Integrator speed multiplier.
	pub node_speed: f32,
	/// Velocity kept between frames.
	pub damping: f32,
	/// Mass of every node.
	pub node_mass: f32,
}

impl Default for Repulsion {
	fn default() -> Self {
		Self {
			charge: 30.0,
			max_force: 20.0,
			node_speed: 600.0,
			damping: 0.9,
			node_mass: 10.0,
		}
	}
}

/// Layout and sizing parameters.
#[derive(Clone, Debug)]
pub struct TreeConfig {
	/// Dataset URL; `None` means the URL of the current page.
	pub data_url: Option<String>,
	/// Width used when the tree container reports none.
	pub fallback_width: f64,
	/// Height of the SVG viewport.
	pub height: f64,
	/// Vertical position of the root, trunk and leaf focus points.
	pub focus_y: [f64; 3],
	/// Nodes with this id are listed but never drawn.
	pub sentinel_id: i64,
	/// Alpha the layout (re)starts with.
	pub alpha_start: f64,
	/// Per-tick alpha multiplier.
	pub alpha_decay: f64,
	/// Below this alpha the layout is at rest.
	pub alpha_rest: f64,
	/// Vertical pull rate, multiplied by alpha.
	pub pull_rate: f64,
	/// Horizontal pull rate for trunk nodes, multiplied by alpha.
	pub trunk_pull_rate: f64,
	/// Number of radius tiers the degree span is split into.
	pub degree_tiers: f64,
	/// Radius added to every node.
	pub base_radius: f64,
	/// Radius used when every node has the same degree.
	pub flat_radius: f64,
	/// Seconds simulated per animation frame.
	pub frame_dt: f32,
	/// Node repulsion integrator settings.
	pub repulsion: Repulsion,
	/// Where the panels are mounted.
	pub hosts: HostSelectors,
}

impl Default for TreeConfig {
	fn default() -> Self {
		Self {
			data_url: None,
			fallback_width: 800.0,
			height: 600.0,
			focus_y: [280.0, 190.0, 150.0],
			sentinel_id: 9,
			alpha_start: 0.1,
			alpha_decay: 0.99,
			alpha_rest: 0.005,
			pull_rate: 0.1,
			trunk_pull_rate: 0.2,
			degree_tiers: 9.0,
			base_radius: 4.0,
			flat_radius: 8.0,
			frame_dt: 0.016,
			repulsion: Repulsion::default(),
			hosts: HostSelectors::default(),
		}
	}
}
