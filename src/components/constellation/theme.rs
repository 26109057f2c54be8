//! Stroke colours for constellation edges.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `0.0..=1.0`.
	pub a: f64,
}

impl Color {
	/// Build a color from channels and opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with a different opacity.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Hex for opaque colors, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Resolved stroke for one edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
	/// CSS color value.
	pub color: String,
	/// Stroke width in render units.
	pub width: f64,
}

/// Edge styling for the resting and highlighted states.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Resting color.
	pub color: Color,
	/// Resting width.
	pub width: f64,
	/// Alpha used when an endpoint is hovered.
	pub highlight_alpha: f64,
	/// Width used when an endpoint is hovered.
	pub highlight_width: f64,
}

impl Default for EdgeStyle {
	fn default() -> Self {
		Self {
			color: Color::rgba(96, 165, 250, 0.5),
			width: 1.0,
			highlight_alpha: 0.9,
			highlight_width: 1.5,
		}
	}
}

impl EdgeStyle {
	/// Stroke for an edge in the given highlight state.
	pub fn stroke(&self, highlighted: bool) -> Stroke {
		if highlighted {
			Stroke {
				color: self.color.with_alpha(self.highlight_alpha).to_css(),
				width: self.highlight_width,
			}
		} else {
			Stroke {
				color: self.color.to_css(),
				width: self.width,
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgba(96, 165, 250, 1.0).to_css(), "#60a5fa");
	}

	#[test]
	fn highlighted_stroke_is_brighter_and_wider() {
		let style = EdgeStyle::default();
		assert_eq!(
			style.stroke(false),
			Stroke {
				color: "rgba(96, 165, 250, 0.5)".into(),
				width: 1.0
			}
		);
		assert_eq!(
			style.stroke(true),
			Stroke {
				color: "rgba(96, 165, 250, 0.9)".into(),
				width: 1.5
			}
		);
	}
}
