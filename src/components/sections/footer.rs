//! Page footer: social links and copyright line.

use leptos::prelude::*;

use crate::content::SocialLink;

/// `target` for a social link: mail links open in place, everything else in
/// a new tab.
fn link_target(url: &str) -> Option<&'static str> {
	(!url.starts_with("mailto:")).then_some("_blank")
}

/// Closing call to action with the social links and the copyright line.
#[component]
pub fn Footer(#[prop(into)] owner: String, links: Vec<SocialLink>) -> impl IntoView {
	let icons = links
		.into_iter()
		.map(|link| {
			let SocialLink { id, label, url } = link;
			let target = link_target(&url);
			let aria_label = label.clone();
			view! {
				<a
					class=format!("social-link social-{}", id)
					href=url
					target=target
					rel="noopener noreferrer"
					aria-label=aria_label
				>
					{label}
				</a>
			}
		})
		.collect_view();

	view! {
		<footer id="footer" class="site-footer">
			<div class="footer-inner">
				<div class="footer-cta">
					<h3>"Let's build something great."</h3>
					<p>"Click on the icon links to get in touch"</p>
				</div>
				<div class="social-links">{icons}</div>
			</div>
			<p class="copyright">"© " {owner} ". Made with love & care."</p>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mail_links_stay_in_place() {
		assert_eq!(link_target("mailto:someone@example.com"), None);
		assert_eq!(link_target("https://github.com/someone"), Some("_blank"));
	}
}
