//! Opening section with name, title and portrait.

use leptos::prelude::*;

use super::scroll_to_section;
use crate::content::Profile;

/// Hero section. The CV button only renders when a CV link is configured.
#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
	let cv = profile.cv_url.map(|url| {
		view! {
			<a class="button primary" href=url download="">
				"Download CV"
			</a>
		}
	});

	view! {
		<section id="hero" class="section hero">
			<div class="hero-grid">
				<div class="hero-text">
					<div class="accent-line" />
					<p class="eyebrow">"Name"</p>
					<h1>{profile.name.clone()}</h1>
					<p class="eyebrow">"Title"</p>
					<h2>{profile.title}</h2>
					<p class="eyebrow">"About me"</p>
					<p class="lead">{profile.about}</p>
					<div class="hero-actions">
						{cv}
						<button class="button outline" on:click=move |_| scroll_to_section("footer")>
							"Get in touch ↓"
						</button>
					</div>
				</div>
				<div class="hero-portrait">
					<img src=profile.portrait_url alt=profile.name />
					<div class="monogram large">{profile.initials}</div>
				</div>
			</div>
		</section>
	}
}
