//! Fixed header with section navigation.
//!
//! The header turns solid once the page scrolls past a threshold; the
//! scroll listener is released with the component.

use leptos::prelude::*;

use super::scroll_to_section;
use crate::components::listener::WindowListener;

const NAV: &[(&str, &str)] = &[
	("hero", "Home"),
	("skills", "Skills"),
	("projects", "Projects"),
	("accomplishments", "Accomplishments"),
	("testimonials", "Testimonials"),
	("contact", "Contact"),
];

/// Whether the page has scrolled far enough for the solid header style.
fn is_scrolled(offset: f64, threshold: f64) -> bool {
	offset > threshold
}

/// Fixed navigation bar.
#[component]
pub fn Header(
	#[prop(into)] name: String,
	#[prop(into)] initials: String,
	scrolled_threshold_px: f64,
) -> impl IntoView {
	let scrolled = RwSignal::new(false);

	let on_scroll = move || {
		let offset = web_sys::window()
			.and_then(|w| w.scroll_y().ok())
			.unwrap_or(0.0);
		let next = is_scrolled(offset, scrolled_threshold_px);
		if scrolled.get_untracked() != next {
			scrolled.set(next);
		}
	};
	let listener = StoredValue::new_local(WindowListener::new("scroll", on_scroll));
	on_cleanup(move || {
		listener.try_update_value(|l| l.take());
	});

	let links = NAV
		.iter()
		.map(|&(id, label)| {
			view! {
				<button class="nav-link" on:click=move |_| scroll_to_section(id)>
					{label}
				</button>
			}
		})
		.collect_view();

	view! {
		<header class="site-header" class:scrolled=move || scrolled.get()>
			<div class="header-inner">
				<span class="header-name">{name}</span>
				<nav class="header-nav">{links}</nav>
				<div class="monogram">{initials}</div>
			</div>
		</header>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn threshold_is_exclusive() {
		assert!(!is_scrolled(0.0, 20.0));
		assert!(!is_scrolled(20.0, 20.0));
		assert!(is_scrolled(20.5, 20.0));
	}
}
