//! Project carousel section.
//!
//! Hovering the active card pauses autoplay for as long as the pointer stays
//! on it. Opening a project's demo suspends autoplay until the overlay closes.

use leptos::prelude::*;
use log::warn;

use crate::components::carousel::{CarouselControls, CarouselEvent, use_carousel};
use crate::components::lightbox::{Lightbox, LightboxModal};
use crate::content::Project;

#[component]
fn ProjectCard(
	project: Project,
	active: bool,
	github_url: Option<String>,
	on_demo: Callback<Project>,
) -> impl IntoView {
	let tech = project
		.tech_stack
		.iter()
		.map(|t| view! { <span class="tech-chip">{t.clone()}</span> })
		.collect_view();

	let details = active.then(|| {
		let highlights = project
			.highlights
			.iter()
			.map(|h| view! { <li>{h.clone()}</li> })
			.collect_view();

		let actions = if project.github_card {
			github_url.map(|url| {
				view! {
					<a class="button primary" href=url target="_blank" rel="noopener noreferrer">
						"Visit My GitHub"
					</a>
				}
				.into_any()
			})
		} else {
			project.demo_url.is_some().then(|| {
				let p = project.clone();
				view! {
					<button class="button primary" on:click=move |_| on_demo.run(p.clone())>
						"Watch demo"
					</button>
				}
				.into_any()
			})
		};

		view! {
			<div class="project-details">
				<h4>"Key Highlights"</h4>
				<ul class="highlights">{highlights}</ul>
				<div class="project-actions">{actions}</div>
			</div>
		}
	});

	view! {
		<div class="project-card" class:active=active>
			<h3>{project.name.clone()}</h3>
			<p class="project-role">{project.role.clone()}</p>
			<div class="tech-stack">{tech}</div>
			<p class="project-summary">{project.summary.clone()}</p>
			{details}
		</div>
	}
}

/// Project carousel with prev/current/next cards and a demo overlay.
#[component]
pub fn Projects(
	projects: Vec<Project>,
	autoplay_period_ms: u32,
	github_url: Option<String>,
) -> impl IntoView {
	let carousel = match use_carousel(projects.len(), autoplay_period_ms) {
		Ok(c) => c,
		Err(e) => {
			warn!("projects: {}", e);
			return ().into_any();
		}
	};
	let projects = StoredValue::new(projects);
	let github_url = StoredValue::new(github_url);
	let slots = Memo::new(move |_| carousel.slots());
	let demo = RwSignal::new(Lightbox::<Project>::default());

	let on_demo = Callback::new(move |project: Project| {
		demo.update(|d| d.open(project));
		carousel.dispatch(CarouselEvent::OverlayOpened);
	});
	let close_demo = Callback::new(move |_: ()| {
		demo.update(|d| {
			d.close();
		});
		carousel.dispatch(CarouselEvent::OverlayClosed);
	});

	let card = move |index: usize, active: bool| {
		let project = projects.with_value(|ps| ps[index].clone());
		view! {
			<ProjectCard
				project=project
				active=active
				github_url=github_url.get_value()
				on_demo=on_demo
			/>
		}
	};

	let demo_view = move || {
		demo.with(|d| {
			d.selected().and_then(|p| {
				let url = p.demo_url.clone()?;
				Some(view! {
					<div class="demo">
						<video src=url controls=true autoplay=true />
						<h3>{p.name.clone()}</h3>
					</div>
				})
			})
		})
	};

	view! {
		<section id="projects" class="section projects">
			<div class="section-inner">
				<div class="section-heading">
					<h2>"Projects"</h2>
					<p>"The projects that mean the most to me, from shipped work to side projects."</p>
				</div>
				<div class="carousel">
					<div class="carousel-track">
						<div class="carousel-side previous">
							{move || card(slots.get().previous, false)}
						</div>
						<div
							class="carousel-current"
							on:mouseenter=move |_| carousel.dispatch(CarouselEvent::HoverEnter)
							on:mouseleave=move |_| carousel.dispatch(CarouselEvent::HoverLeave)
						>
							{move || card(slots.get().current, true)}
						</div>
						<div class="carousel-side next">
							{move || card(slots.get().next, false)}
						</div>
					</div>
					<CarouselControls carousel=carousel noun="project" />
				</div>
			</div>
			<LightboxModal open=Signal::derive(move || demo.with(|d| d.is_open())) on_close=close_demo>
				{demo_view}
			</LightboxModal>
		</section>
	}
	.into_any()
}
