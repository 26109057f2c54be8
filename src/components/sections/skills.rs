//! Skills section: starfield backdrop behind the constellation.

use leptos::prelude::*;

use crate::components::constellation::{SkillConstellation, starfield};
use crate::content::SkillNode;

/// Skills section with `star_count` background stars.
#[component]
pub fn Skills(nodes: Vec<SkillNode>, star_count: usize) -> impl IntoView {
	let stars = starfield(star_count)
		.into_iter()
		.map(|star| view! { <div class="star" style=star.style() /> })
		.collect_view();

	view! {
		<section id="skills" class="section skills dark">
			<div class="starfield">{stars}</div>
			<div class="section-inner">
				<div class="section-heading">
					<h2>"My Skills"</h2>
					<p>"An interconnected skill set built through real-world projects and continuous learning."</p>
				</div>
				<SkillConstellation nodes=nodes />
				<p class="legend">"Interactive skill map. Hover to explore."</p>
			</div>
		</section>
	}
}
