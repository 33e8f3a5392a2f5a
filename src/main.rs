use log::error;
use tos_tree_view::config::TreeConfig;
use tos_tree_view::{init_logging, mount_host_page};

fn main() {
	init_logging();
	if let Err(err) = mount_host_page(TreeConfig::default()) {
		error!("Tree view not mounted: {err}");
	}
}
