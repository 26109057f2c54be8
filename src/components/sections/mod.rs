//! Full-viewport page sections, top to bottom.

mod accomplishments;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;
mod testimonials;

pub use accomplishments::Accomplishments;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;
pub use testimonials::Testimonials;

use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) {
	let Some(element) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
	else {
		warn!("no section with id `{}`", id);
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}
