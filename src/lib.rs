//! Tree-of-Science graph view: a client-side page script that loads a
//! query's root/trunk/leaf dataset and renders it as a force-directed
//! view with summary and selection panels.

use log::{Level, info};

// Modules
mod components;
pub mod config;
pub mod error;
mod pages;

pub use components::tree_view::{
	Body, Focus, FocusPoints, GraphDescription, GraphNode, Group, LabelParts, LinkAttrs, NodeEntry,
	NodeKey, Pull, RenderedNode, Selection, TreeLayout, TreeModel, advance,
};
pub use pages::tree::{LoadState, NOT_READY_MESSAGE, TreeStore, fetch_graph, mount_host_page};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}
