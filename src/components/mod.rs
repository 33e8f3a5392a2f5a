pub mod panels;
pub mod tree_view;
