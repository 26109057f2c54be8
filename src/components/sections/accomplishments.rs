//! Accomplishments gallery with a lightbox for the selected tile.

use leptos::prelude::*;

use crate::components::lightbox::{Lightbox, LightboxModal};
use crate::content::Accomplishment;

/// Gallery of certificates and awards; clicking a tile opens it in the lightbox.
#[component]
pub fn Accomplishments(items: Vec<Accomplishment>) -> impl IntoView {
	let lightbox = RwSignal::new(Lightbox::<Accomplishment>::default());
	let close = Callback::new(move |_: ()| {
		lightbox.update(|l| {
			l.close();
		});
	});

	let tiles = items
		.into_iter()
		.map(|item| {
			let style = item.span.to_css();
			let (url, title) = (item.url.clone(), item.title.clone());
			view! {
				<div class="gallery-tile" style=style on:click=move |_| lightbox.update(|l| l.open(item.clone()))>
					<img src=url alt=title.clone() />
					<p class="gallery-caption">{title}</p>
				</div>
			}
		})
		.collect_view();

	let details = move || {
		lightbox.with(|l| {
			l.selected().map(|item| {
				let meta = (!item.date.is_empty() || !item.organization.is_empty()).then(|| {
					view! {
						<div class="lightbox-meta">
							<p>"Date: " {item.date.clone()}</p>
							<p>"Organization: " {item.organization.clone()}</p>
						</div>
					}
				});
				view! {
					<div class="lightbox-body">
						<img src=item.url.clone() alt=item.title.clone() />
						<div class="lightbox-text">
							<h3>{item.title.clone()}</h3>
							<p>{item.description.clone()}</p>
							{meta}
						</div>
					</div>
				}
			})
		})
	};

	view! {
		<section id="accomplishments" class="section accomplishments muted">
			<div class="section-inner">
				<div class="section-heading">
					<h2>"Certs & Accomplishments"</h2>
					<p>"Certifications, awards and memorable moments along the way."</p>
				</div>
				<div class="gallery">{tiles}</div>
			</div>
			<LightboxModal open=Signal::derive(move || lightbox.with(|l| l.is_open())) on_close=close>
				{details}
			</LightboxModal>
		</section>
	}
}
