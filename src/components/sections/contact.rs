//! Closing call to action above the footer.

use leptos::prelude::*;

/// "Contact Me" section.
#[component]
pub fn Contact() -> impl IntoView {
	view! {
		<section id="contact" class="section contact">
			<div class="contact-inner">
				<div class="accent-line centered" />
				<h2>"Contact Me"</h2>
				<p>
					"Be it an idea, work opportunities or just reaching out to learn more. "
					"Let's connect to bring your vision to life."
				</p>
			</div>
		</section>
	}
}
