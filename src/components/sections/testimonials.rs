//! Testimonial cards.

use leptos::prelude::*;

use crate::content::Testimonial;

/// One card per testimonial, in the given order.
#[component]
pub fn Testimonials(items: Vec<Testimonial>) -> impl IntoView {
	let cards = items
		.into_iter()
		.map(|t| {
			let profile_label = format!("View {}'s LinkedIn profile", t.name);
			view! {
				<article class="testimonial">
					<img class="testimonial-photo" src=t.image_url alt=t.name.clone() />
					<div class="testimonial-body">
						<blockquote>"“" {t.quote} "”"</blockquote>
						<footer class="testimonial-author">
							<div>
								<h4>{t.name}</h4>
								<p class="role">{t.role}</p>
								<p class="company">{t.company}</p>
							</div>
							<a
								href=t.linkedin_url
								target="_blank"
								rel="noopener noreferrer"
								aria-label=profile_label
							>
								"in"
							</a>
						</footer>
					</div>
				</article>
			}
		})
		.collect_view();

	view! {
		<section id="testimonials" class="section testimonials">
			<div class="section-inner">
				<div class="section-heading">
					<h2>"Testimonials"</h2>
					<p>"Words from colleagues, mentors and supervisors."</p>
				</div>
				<div class="testimonial-list">{cards}</div>
			</div>
		</section>
	}
}
