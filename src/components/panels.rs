//! Side panels: summary table, all-nodes list and selected-nodes list.

use std::sync::Arc;

use leptos::prelude::*;
use log::debug;
use web_sys::MouseEvent;

use super::tree_view::{Group, LabelParts, LinkAttrs, NodeEntry, Selection, TreeModel, render};

/// Link to the paper's DOI, disabled when the label carries none.
#[component]
fn DoiLink(parts: LabelParts) -> impl IntoView {
	let LinkAttrs {
		href,
		target,
		class,
	} = parts.link_attrs();
	view! {
		<a href=href target=target class=class>
			<i class="material-icons">"link"</i>
		</a>
	}
}

#[component]
fn Bullet(group: Group) -> impl IntoView {
	view! {
		<i class="material-icons circle left" style=render::bullet_style(group)>
			"brightness_1"
		</i>
	}
}

/// Rows for the summary table body, in dataset order.
#[component]
pub fn SummaryRows(
	/// Loaded dataset.
	model: Arc<TreeModel>,
) -> impl IntoView {
	model
		.summary_rows()
		.map(|entry| {
			view! {
				<tr class=render::summary_class(entry.group)>
					<td>{entry.group.as_str()}</td>
					<td>{entry.label.clone()}</td>
					<td>{entry.ri.to_string()}</td>
				</tr>
			}
		})
		.collect_view()
}

/// Every node, including the ones that are not drawn.
#[component]
pub fn AllNodesList(
	/// Loaded dataset.
	model: Arc<TreeModel>,
) -> impl IntoView {
	model
		.all_nodes()
		.map(|entry| {
			view! {
				<li id=entry.list_dom_id() class="collection-item">
					<Bullet group=entry.group />
					<DoiLink parts=entry.parts.clone() />
					<p>{entry.parts.text.clone()}</p>
				</li>
			}
		})
		.collect_view()
}

/// Currently selected nodes, newest first. The clear action deselects.
#[component]
pub fn SelectedList(
	/// Loaded dataset.
	model: Arc<TreeModel>,
	/// Shared selection; the clear action removes from it.
	selection: RwSignal<Selection>,
) -> impl IntoView {
	let entries = move || {
		selection.with(|s| {
			s.iter()
				.filter_map(|key| model.entry(key).cloned())
				.collect::<Vec<_>>()
		})
	};

	view! {
		<For
			each=entries
			key=|entry| entry.key
			children=move |entry: NodeEntry| {
				let key = entry.key;
				let quit = move |ev: MouseEvent| {
					ev.prevent_default();
					selection.update(|s| {
						if s.remove(&key) {
							debug!("Node {key:?} dismissed from selection");
						}
					});
				};
				view! {
					<li id=format!("node{}", key.dom_suffix()) class="collection-item">
						<Bullet group=entry.group />
						<a
							href="#!"
							data-node=key.data_node()
							class="quit-in-list right"
							on:click=quit
						>
							<i class="material-icons">"clear"</i>
						</a>
						<DoiLink parts=entry.parts.clone() />
						<p>{entry.parts.text.clone()}</p>
					</li>
				}
			}
		/>
	}
}
