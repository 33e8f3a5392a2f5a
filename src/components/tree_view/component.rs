use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use super::model::TreeModel;
use super::render;
use super::selection::Selection;
use super::state::{Positions, TreeLayout};
use crate::config::TreeConfig;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Runs the layout on animation frames until it comes to rest.
#[derive(Clone)]
struct FrameLoop {
	callback: FrameCallback,
	running: Rc<Cell<bool>>,
}

impl FrameLoop {
	fn new(layout: Rc<RefCell<TreeLayout>>, positions: RwSignal<Positions>, dt: f32) -> Self {
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let running = Rc::new(Cell::new(false));
		let (next, running_inner) = (callback.clone(), running.clone());

		*callback.borrow_mut() = Some(Closure::new(move || {
			let active = {
				let mut layout = layout.borrow_mut();
				let active = layout.tick(dt);
				positions.set(layout.positions());
				active
			};
			if !(active && request_frame(&next)) {
				running_inner.set(false);
			}
		}));

		Self { callback, running }
	}

	/// Schedules a frame unless one is already pending.
	fn kick(&self) {
		if !self.running.replace(true) && !request_frame(&self.callback) {
			self.running.set(false);
		}
	}
}

fn request_frame(callback: &FrameCallback) -> bool {
	let Some(window) = web_sys::window() else {
		return false;
	};
	let callback = callback.borrow();
	let Some(cb) = callback.as_ref() else {
		return false;
	};
	window
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.is_ok()
}

/// SVG view of the tree: one draggable, selectable circle per rendered node.
#[component]
pub fn TreeView(
	/// Nodes to draw.
	model: Arc<TreeModel>,
	/// Shared selection; clicks toggle it and fills follow it.
	selection: RwSignal<Selection>,
	/// SVG width in pixels.
	width: f64,
	/// Layout parameters.
	config: TreeConfig,
) -> impl IntoView {
	let mut layout = TreeLayout::new(width, &config);
	for node in model.rendered() {
		layout.add_node(node);
	}
	let positions = RwSignal::new(layout.positions());
	let height = layout.height;
	let layout = Rc::new(RefCell::new(layout));
	let frames = FrameLoop::new(layout.clone(), positions, config.frame_dt);
	frames.kick();

	let svg_ref = NodeRef::<leptos::svg::Svg>::new();
	let pointer = move |ev: &MouseEvent| {
		let rect = svg_ref.get()?.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let circles = model
		.rendered()
		.iter()
		.map(|node| {
			let (key, group) = (node.key, node.group);
			let (layout_md, frames_md, layout_click) =
				(layout.clone(), frames.clone(), layout.clone());

			let on_mousedown = move |ev: MouseEvent| {
				ev.prevent_default();
				let Some((x, y)) = pointer(&ev) else {
					return;
				};
				if layout_md.borrow_mut().begin_drag(&key, x, y) {
					frames_md.kick();
				}
			};

			let on_click = move |_: MouseEvent| {
				if layout_click.borrow_mut().take_swallowed_click() {
					return;
				}
				selection.update(|s| {
					let selected = s.toggle(key);
					debug!("Node {key:?} selected: {selected}");
				});
			};

			view! {
				<circle
					class="node"
					id=key.dom_suffix()
					group=group.as_str()
					label=node.label.clone()
					indice=node.ri.to_string()
					r=render::coord(node.radius)
					cx=move || positions.with(|p| p.get(&key).map(|&(x, _)| render::coord(x)))
					cy=move || positions.with(|p| p.get(&key).map(|&(_, y)| render::coord(y)))
					style:fill=move || render::fill(group, selection.with(|s| s.contains(&key)))
					on:mousedown=on_mousedown
					on:click=on_click
				/>
			}
		})
		.collect_view();

	let (layout_mm, frames_mm) = (layout.clone(), frames.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		let mut layout = layout_mm.borrow_mut();
		if layout.drag.active {
			layout.drag_to(x, y);
			frames_mm.kick();
		}
	};

	let layout_mu = layout.clone();
	let on_mouseup = move |_: MouseEvent| layout_mu.borrow_mut().end_drag();

	let layout_ml = layout;
	let on_mouseleave = move |_: MouseEvent| layout_ml.borrow_mut().end_drag();

	view! {
		<svg
			node_ref=svg_ref
			width=render::coord(width)
			height=render::coord(height)
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
		>
			{circles}
		</svg>
	}
}
