//! Query page: loads the dataset and mounts the tree and its panels into
//! the containers the server-rendered page already provides.

use std::sync::Arc;

use gloo_net::http::Request;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::components::panels::{AllNodesList, SelectedList, SummaryRows};
use crate::components::tree_view::{GraphDescription, Selection, TreeModel, TreeView};
use crate::config::TreeConfig;
use crate::error::TreeError;

/// Shown while the tree is still being computed.
pub const NOT_READY_MESSAGE: &str = "Your query is not ready";

/// Where the page is in loading its dataset.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
	/// Request in flight.
	Loading,
	/// The query has not finished; nothing is rendered.
	NotReady,
	/// The request or decoding failed.
	Failed(String),
	/// Dataset derived and ready to draw.
	Ready(Arc<TreeModel>),
}

impl LoadState {
	/// Turns a fetched dataset into the state the page renders from.
	pub fn resolve(desc: &GraphDescription, config: &TreeConfig) -> Self {
		if !desc.is_ready() {
			return LoadState::NotReady;
		}
		let model = TreeModel::build(desc, config);
		info!(
			"Loaded {} nodes, {} drawn",
			model.summary_rows().count(),
			model.rendered().len()
		);
		LoadState::Ready(Arc::new(model))
	}

	/// The model once ready.
	pub fn model(&self) -> Option<Arc<TreeModel>> {
		match self {
			LoadState::Ready(model) => Some(model.clone()),
			_ => None,
		}
	}
}

/// Reactive state shared by every mounted panel of one page view.
#[derive(Clone, Copy)]
pub struct TreeStore {
	/// Dataset load state.
	pub load: RwSignal<LoadState>,
	/// Selected nodes.
	pub selection: RwSignal<Selection>,
}

impl TreeStore {
	/// Store in the loading state with nothing selected.
	pub fn new() -> Self {
		Self {
			load: RwSignal::new(LoadState::Loading),
			selection: RwSignal::new(Selection::default()),
		}
	}
}

impl Default for TreeStore {
	fn default() -> Self {
		Self::new()
	}
}

/// GETs the graph description served at `url`.
pub async fn fetch_graph(url: &str) -> Result<GraphDescription, TreeError> {
	let fetch_err = |source| TreeError::Fetch {
		url: url.to_string(),
		source,
	};

	// The query view only answers with JSON to AJAX requests.
	let response = Request::get(url)
		.header("Accept", "application/json")
		.header("X-Requested-With", "XMLHttpRequest")
		.send()
		.await
		.map_err(fetch_err)?;
	if !response.ok() {
		return Err(TreeError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}
	let body = response.text().await.map_err(fetch_err)?;
	Ok(GraphDescription::from_json(&body)?)
}

#[component]
fn TreeSlot(store: TreeStore, width: f64, config: TreeConfig) -> impl IntoView {
	move || match store.load.get() {
		LoadState::Loading => ().into_any(),
		LoadState::NotReady => view! { <p class="tree-notice">{NOT_READY_MESSAGE}</p> }.into_any(),
		LoadState::Failed(reason) => view! {
			<p class="tree-notice red-text">"Could not load the tree: " {reason}</p>
		}
		.into_any(),
		LoadState::Ready(model) => view! {
			<TreeView model=model selection=store.selection width=width config=config.clone() />
		}
		.into_any(),
	}
}

fn host(document: &Document, selector: &str) -> Result<HtmlElement, TreeError> {
	document
		.query_selector(selector)
		.ok()
		.flatten()
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		.ok_or_else(|| TreeError::MissingHost(selector.to_string()))
}

/// Mounts `view` into `selector`, logging instead of failing when the host is absent.
fn mount_panel<N: IntoView + 'static>(
	document: &Document,
	selector: &str,
	view: impl FnOnce() -> N + 'static,
) {
	match host(document, selector) {
		Ok(el) => mount_to(el, view).forget(),
		Err(err) => error!("{err}"),
	}
}

/// Fetches the dataset and mounts the tree view and its panels.
pub fn mount_host_page(config: TreeConfig) -> Result<(), TreeError> {
	let window = web_sys::window().ok_or(TreeError::NoWindow)?;
	let document = window.document().ok_or(TreeError::NoWindow)?;
	let url = match &config.data_url {
		Some(url) => url.clone(),
		None => window.location().href().map_err(|_| TreeError::NoWindow)?,
	};
	let store = TreeStore::new();
	let hosts = config.hosts.clone();

	let width = host(&document, &hosts.tree)
		.map(|el| el.client_width() as f64)
		.ok()
		.filter(|w| *w > 0.0)
		.unwrap_or(config.fallback_width);
	let tree_config = config.clone();
	mount_panel(&document, &hosts.tree, move || {
		view! { <TreeSlot store=store width=width config=tree_config /> }
	});
	mount_panel(&document, &hosts.summary_body, move || {
		move || store.load.get().model().map(|model| view! { <SummaryRows model=model /> })
	});
	mount_panel(&document, &hosts.all_nodes, move || {
		move || store.load.get().model().map(|model| view! { <AllNodesList model=model /> })
	});
	mount_panel(&document, &hosts.selected_nodes, move || {
		move || {
			store
				.load
				.get()
				.model()
				.map(|model| view! { <SelectedList model=model selection=store.selection /> })
		}
	});

	spawn_local(async move {
		let state = match fetch_graph(&url).await {
			Ok(desc) => LoadState::resolve(&desc, &config),
			Err(err) => {
				error!("{err}");
				LoadState::Failed(err.to_string())
			}
		};
		let not_ready = state == LoadState::NotReady;
		store.load.set(state);
		if not_ready {
			if let Err(err) = window.alert_with_message(NOT_READY_MESSAGE) {
				warn!("Not-ready alert failed: {err:?}");
			}
		}
	});
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn not_ready_builds_nothing() {
		let desc = GraphDescription::from_json(r#"{"status":"not ready"}"#).unwrap();
		assert_eq!(
			LoadState::resolve(&desc, &TreeConfig::default()),
			LoadState::NotReady
		);
	}

	#[test]
	fn ready_dataset_yields_model() {
		let desc = GraphDescription::from_json(
			r#"{"status":"success","nodes":[{"id":0,"group":"root","label":"A","ri":0,"degree":1}]}"#,
		)
		.unwrap();
		let state = LoadState::resolve(&desc, &TreeConfig::default());
		assert_eq!(state.model().map(|m| m.rendered().len()), Some(1));
	}
}
