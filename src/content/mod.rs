//! Author-supplied site content.
//!
//! Everything the page displays is read once at mount from an inline JSON
//! script element. Missing fields fall back to sensible defaults, and a
//! payload that cannot be parsed or validated is replaced wholesale by
//! [`SiteContent::default`].

mod defaults;

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ContentError;

/// Complete page content.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteContent {
	/// Owner details for the hero and header.
	pub profile: Profile,
	/// Constellation nodes.
	pub skills: Vec<SkillNode>,
	/// Carousel items, in display order. Never empty.
	pub projects: Vec<Project>,
	/// Gallery tiles.
	pub accomplishments: Vec<Accomplishment>,
	/// Quotes shown in the testimonials section.
	pub testimonials: Vec<Testimonial>,
	/// Footer links. The `github` entry also backs the GitHub project card.
	pub social: Vec<SocialLink>,
	/// Timing and layout knobs.
	pub settings: Settings,
}

/// Who the portfolio belongs to.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
	/// Full name, also used in the page title and copyright line.
	pub name: String,
	/// Short monogram shown in the header badge.
	pub initials: String,
	/// Job title under the name.
	pub title: String,
	/// Introductory paragraph.
	pub about: String,
	/// Hero portrait image.
	pub portrait_url: String,
	/// Downloadable CV. The download button is hidden when absent.
	pub cv_url: Option<String>,
}

/// A skill category placed on the constellation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillNode {
	/// Unique identifier, referenced by other nodes' `connections`.
	pub id: String,
	/// Category label under the node.
	pub name: String,
	/// Skills listed in the hover popover.
	#[serde(default)]
	pub skills: Vec<String>,
	/// Horizontal position as a percentage of the container width (0..=100).
	pub x: f64,
	/// Vertical position as a percentage of the container height (0..=100).
	pub y: f64,
	/// Ids of adjacent nodes. Ids that do not resolve are ignored.
	#[serde(default)]
	pub connections: Vec<String>,
}

/// A project card in the carousel.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
	/// Stable identifier.
	pub id: u32,
	/// Card heading.
	pub name: String,
	/// The owner's role on the project.
	#[serde(default)]
	pub role: String,
	/// Technology chips.
	#[serde(default)]
	pub tech_stack: Vec<String>,
	/// One-line description.
	#[serde(default)]
	pub summary: String,
	/// Bullet points shown on the active card only.
	#[serde(default)]
	pub highlights: Vec<String>,
	/// Renders as a "visit my GitHub" card instead of project actions.
	#[serde(default)]
	pub github_card: bool,
	/// Optional demo media opened in an overlay.
	#[serde(default)]
	pub demo_url: Option<String>,
}

/// How many gallery grid cells a tile spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridSpan {
	/// Grid columns covered.
	pub cols: u8,
	/// Grid rows covered.
	pub rows: u8,
}

impl Default for GridSpan {
	fn default() -> Self {
		Self { cols: 1, rows: 1 }
	}
}

impl GridSpan {
	/// Inline CSS placing the tile in the gallery grid.
	pub fn to_css(self) -> String {
		format!(
			"grid-column: span {}; grid-row: span {};",
			self.cols.max(1),
			self.rows.max(1)
		)
	}
}

/// A certificate, award or milestone shown in the gallery.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Accomplishment {
	/// Stable identifier.
	pub id: u32,
	/// Image shown on the tile and in the lightbox.
	pub url: String,
	/// Caption and lightbox heading.
	pub title: String,
	/// Lightbox body text.
	#[serde(default)]
	pub description: String,
	/// Free-form date shown in the lightbox footer.
	#[serde(default)]
	pub date: String,
	/// Issuing organization shown in the lightbox footer.
	#[serde(default)]
	pub organization: String,
	/// Tile size in the gallery grid.
	#[serde(default)]
	pub span: GridSpan,
}

/// A quote from a colleague or mentor.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Testimonial {
	/// Stable identifier.
	pub id: u32,
	/// The quote itself, without surrounding quotation marks.
	pub quote: String,
	/// Author's name.
	pub name: String,
	/// Author's role.
	#[serde(default)]
	pub role: String,
	/// Author's organization.
	#[serde(default)]
	pub company: String,
	/// Author's photo.
	#[serde(default)]
	pub image_url: String,
	/// Author's LinkedIn profile.
	#[serde(default)]
	pub linkedin_url: String,
}

/// A footer contact link.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
	/// Short key such as `github`; also used as a CSS modifier.
	pub id: String,
	/// Accessible name and visible text.
	pub label: String,
	/// Target; `mailto:` links open in place.
	pub url: String,
}

/// Behavioural knobs.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Carousel autoplay period in milliseconds.
	pub autoplay_period_ms: u32,
	/// Scroll offset past which the header switches to its solid style.
	pub scrolled_threshold_px: f64,
	/// Number of background stars behind the constellation.
	pub star_count: usize,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			autoplay_period_ms: 5_500,
			scrolled_threshold_px: 20.0,
			star_count: 50,
		}
	}
}

impl SiteContent {
	/// Parse and validate content from JSON text.
	pub fn from_json(text: &str) -> Result<Self, ContentError> {
		let content: SiteContent = serde_json::from_str(text)?;
		content.validate()?;
		Ok(content)
	}

	/// Check the invariants the widgets rely on.
	pub fn validate(&self) -> Result<(), ContentError> {
		if self.projects.is_empty() {
			return Err(ContentError::Validation(
				"at least one project is required".into(),
			));
		}
		if self.settings.autoplay_period_ms == 0 {
			return Err(ContentError::Validation(
				"autoplay period must be positive".into(),
			));
		}

		let mut seen = HashSet::new();
		for node in &self.skills {
			if !seen.insert(node.id.as_str()) {
				return Err(ContentError::Validation(format!(
					"duplicate skill node id `{}`",
					node.id
				)));
			}
			if !(0.0..=100.0).contains(&node.x) || !(0.0..=100.0).contains(&node.y) {
				return Err(ContentError::Validation(format!(
					"skill node `{}` lies outside the 0..=100 percentage box",
					node.id
				)));
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		let content = SiteContent::default();
		assert!(content.validate().is_ok());
		assert_eq!(content.projects.len(), 5);
		assert_eq!(content.settings.autoplay_period_ms, 5_500);
	}

	#[test]
	fn defaults_fill_every_section() {
		let content = SiteContent::default();

		assert_eq!(content.testimonials.len(), 2);
		assert!(content.accomplishments.iter().all(|a| !a.url.is_empty()));
		assert!(!content.profile.portrait_url.is_empty());
		assert!(content.projects.iter().any(|p| p.demo_url.is_some()));

		let ids: Vec<&str> = content.social.iter().map(|l| l.id.as_str()).collect();
		assert_eq!(ids, ["linkedin", "github", "gmail"]);
		assert!(content.projects.iter().any(|p| p.github_card));
	}

	#[test]
	fn missing_fields_take_defaults() {
		let json = r#"{
			"projects": [{ "id": 1, "name": "Only project" }],
			"skills": [{ "id": "a", "name": "A", "x": 10, "y": 20 }]
		}"#;
		let content = SiteContent::from_json(json).unwrap();

		assert_eq!(content.projects[0].name, "Only project");
		assert!(!content.projects[0].github_card);
		assert!(content.skills[0].connections.is_empty());
		assert_eq!(content.settings, Settings::default());
		// Sections absent from the payload come from the built-in content.
		assert_eq!(content.social, SiteContent::default().social);
		assert_eq!(content.testimonials.len(), 2);
	}

	#[test]
	fn settings_override() {
		let json = r#"{
			"projects": [{ "id": 1, "name": "p" }],
			"settings": { "autoplay_period_ms": 10000 }
		}"#;
		let content = SiteContent::from_json(json).unwrap();
		assert_eq!(content.settings.autoplay_period_ms, 10_000);
		assert_eq!(content.settings.star_count, 50);
	}

	#[test]
	fn empty_project_list_is_rejected() {
		let err = SiteContent::from_json(r#"{ "projects": [] }"#).unwrap_err();
		assert!(matches!(err, ContentError::Validation(_)));
	}

	#[test]
	fn duplicate_skill_ids_are_rejected() {
		let json = r#"{
			"projects": [{ "id": 1, "name": "p" }],
			"skills": [
				{ "id": "a", "name": "A", "x": 1, "y": 1 },
				{ "id": "a", "name": "B", "x": 2, "y": 2 }
			]
		}"#;
		assert!(matches!(
			SiteContent::from_json(json),
			Err(ContentError::Validation(_))
		));
	}

	#[test]
	fn out_of_box_position_is_rejected() {
		let json = r#"{
			"projects": [{ "id": 1, "name": "p" }],
			"skills": [{ "id": "a", "name": "A", "x": 120, "y": 1 }]
		}"#;
		assert!(SiteContent::from_json(json).is_err());
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		assert!(matches!(
			SiteContent::from_json("{ not json"),
			Err(ContentError::Parse(_))
		));
	}

	#[test]
	fn grid_span_css_never_spans_zero() {
		let span = GridSpan { cols: 0, rows: 2 };
		assert_eq!(span.to_css(), "grid-column: span 1; grid-row: span 2;");
	}
}
