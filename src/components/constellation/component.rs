//! Leptos component rendering the skill constellation.
//!
//! Nodes are HTML elements placed at their percentage positions; the
//! connecting lines are an SVG layer in pixel-space sized from the measured
//! container. A resize observer on the container re-measures it whenever its
//! box changes, window resizes included.

use leptos::prelude::*;
use log::warn;

use super::layout::{Viewport, edge_lines};
use super::state::Constellation;
use super::theme::EdgeStyle;
use crate::components::listener::ElementResizeObserver;
use crate::content::SkillNode;

/// Interactive skill map. Hovering a node highlights its edges and shows its
/// skills in a popover.
#[component]
pub fn SkillConstellation(nodes: Vec<SkillNode>) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let constellation = RwSignal::new(Constellation::new(nodes));
	let viewport = RwSignal::new(Viewport::default());
	let edge_style = StoredValue::new(EdgeStyle::default());

	let measure = move || {
		let Some(el) = container_ref.get_untracked() else {
			return;
		};
		let rect = el.get_bounding_client_rect();
		if let Some(next) = viewport.get_untracked().remeasure(rect.width(), rect.height()) {
			viewport.set(next);
		}
	};

	let observer = StoredValue::new_local(None::<ElementResizeObserver>);
	Effect::new(move |_| {
		if let Some(el) = container_ref.get() {
			measure();
			observer.set_value(ElementResizeObserver::new(&el, measure));
		}
	});
	on_cleanup(move || {
		observer.try_update_value(|slot| slot.take());
	});

	let lines = move || {
		let vp = viewport.get();
		constellation.with(|c| {
			edge_lines(c, vp)
				.into_iter()
				.map(|line| {
					let (a, b) = c.edge_ids(line.edge);
					let stroke = edge_style.with_value(|s| s.stroke(c.is_edge_highlighted(a, b)));
					view! {
						<line
							x1=line.from.x
							y1=line.from.y
							x2=line.to.x
							y2=line.to.y
							stroke=stroke.color
							stroke-width=stroke.width
						/>
					}
				})
				.collect_view()
		})
	};

	let node_views = constellation.with_untracked(|c| {
		c.nodes()
			.iter()
			.map(|node| {
				let (id_enter, id_leave, id_active) =
					(node.id.clone(), node.id.clone(), node.id.clone());
				let is_active =
					move || constellation.with(|c| c.is_node_active(&id_active));
				view! {
					<div
						class="skill-node"
						class:active=is_active
						style=format!("left: {}%; top: {}%;", node.x, node.y)
						on:mouseenter=move |_| {
							constellation.update(|c| {
								if let Err(e) = c.hover_enter(&id_enter) {
									warn!("constellation: {}", e);
								}
							})
						}
						on:mouseleave=move |_| constellation.update(|c| c.hover_leave(&id_leave))
					>
						<div class="skill-node-glow" />
						<div class="skill-node-dot" />
						<p class="skill-node-label">{node.name.clone()}</p>
					</div>
				}
			})
			.collect_view()
	});

	let popover = move || {
		constellation.with(|c| {
			c.hovered_node().map(|node| {
				let chips = node
					.skills
					.iter()
					.map(|skill| view! { <span class="skill-chip">{skill.clone()}</span> })
					.collect_view();
				view! {
					<div class="skill-popover">
						<h4>{node.name.clone()}</h4>
						<div class="skill-chips">{chips}</div>
					</div>
				}
			})
		})
	};

	view! {
		<div node_ref=container_ref class="constellation">
			<svg
				class="constellation-lines"
				viewBox=move || viewport.get().view_box()
				preserveAspectRatio="none"
			>
				{lines}
			</svg>
			{node_views}
			{popover}
		</div>
	}
}
