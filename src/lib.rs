//! folio-site: single-page portfolio rendered client-side with Leptos.
//!
//! The page is a stack of full-viewport sections. Its interactive parts are
//! a project carousel with autoplay, a hoverable skill constellation, and a
//! lightbox shared by the gallery and the project demos. All content is
//! static data read once at mount.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;
pub mod error;

pub use content::SiteContent;

use components::sections::{
	Accomplishments, Contact, Footer, Header, Hero, Projects, Skills, Testimonials,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio-site: logging initialized");
}

/// Read the inline JSON from a script element with id="site-content".
fn content_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-content")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load site content from the DOM, falling back to the built-in defaults.
fn load_site_content() -> SiteContent {
	let Some(json_text) = content_script_text() else {
		info!("folio-site: no inline content, using built-in defaults");
		return SiteContent::default();
	};

	match SiteContent::from_json(&json_text) {
		Ok(content) => {
			info!(
				"folio-site: loaded {} projects, {} skill nodes, {} accomplishments",
				content.projects.len(),
				content.skills.len(),
				content.accomplishments.len()
			);
			content
		}
		Err(e) => {
			warn!("folio-site: {}; using built-in defaults", e);
			SiteContent::default()
		}
	}
}

/// Main application component.
/// Loads content from the DOM and renders every section in page order.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let SiteContent {
		profile,
		skills,
		projects,
		accomplishments,
		testimonials,
		social,
		settings,
	} = load_site_content();
	let github_url = social
		.iter()
		.find(|link| link.id == "github")
		.map(|link| link.url.clone());
	let title = format!("{} | Portfolio", profile.name);
	let owner = profile.name.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page">
			<Header
				name=profile.name.clone()
				initials=profile.initials.clone()
				scrolled_threshold_px=settings.scrolled_threshold_px
			/>
			<main>
				<Hero profile=profile.clone() />
				<Skills nodes=skills star_count=settings.star_count />
				<Projects
					projects=projects
					autoplay_period_ms=settings.autoplay_period_ms
					github_url=github_url
				/>
				<Accomplishments items=accomplishments />
				<Testimonials items=testimonials />
				<Contact />
			</main>
			<Footer owner=owner links=social />
		</div>
	}
}
