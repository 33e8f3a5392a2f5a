mod component;
mod label;
mod model;
pub mod render;
pub mod scale;
mod selection;
mod state;
mod types;

pub use component::TreeView;
pub use label::{LabelParts, LinkAttrs};
pub use model::{NodeEntry, RenderedNode, TreeModel};
pub use selection::Selection;
pub use state::{Body, Focus, FocusPoints, Pull, TreeLayout, advance};
pub use types::{GraphDescription, GraphNode, Group, NodeKey};
