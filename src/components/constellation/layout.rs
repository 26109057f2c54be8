//! Mapping authored node positions onto the rendered container.
//!
//! # Coordinate Spaces
//!
//! - **Percent-space**: node positions as authored, `0..=100` on each axis
//!   relative to the container's bounding box.
//! - **Pixel-space**: CSS pixels inside the container, used by the SVG layer
//!   so lines meet node centres exactly on non-square containers.
//!
//! The container size is measured whenever its box changes (a resize observer
//! on the container itself) and handed in as a [`Viewport`]. Nothing here caches pixel positions, so a
//! resize is reflected by the next render.

use super::state::{Constellation, Edge};

/// Measured container size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	/// Container width in CSS pixels.
	pub width: f64,
	/// Container height in CSS pixels.
	pub height: f64,
}

/// A point in whichever space the current [`Viewport`] renders in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	/// Horizontal offset from the container's left edge.
	pub x: f64,
	/// Vertical offset from the container's top edge.
	pub y: f64,
}

/// A line to draw between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeLine {
	/// The edge this line renders.
	pub edge: Edge,
	/// Position of the edge's source node.
	pub from: Point,
	/// Position of the edge's target node.
	pub to: Point,
}

impl Viewport {
	/// A viewport of the given pixel size.
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// The viewport for a fresh measurement, or `None` if nothing changed.
	///
	/// Skipping unchanged sizes keeps repeated layout notifications from
	/// re-rendering every line.
	pub fn remeasure(self, width: f64, height: f64) -> Option<Self> {
		let next = Self::new(width, height);
		(next != self).then_some(next)
	}

	/// Whether a real size has been measured yet.
	pub fn is_measured(&self) -> bool {
		self.width > 0.0 && self.height > 0.0
	}

	/// Map a percent-space position into render space.
	///
	/// Before the first measurement positions stay in percent-space, which
	/// pairs with the `0 0 100 100` view box from [`Viewport::view_box`].
	pub fn project(&self, x_pct: f64, y_pct: f64) -> Point {
		if self.is_measured() {
			Point {
				x: x_pct * self.width / 100.0,
				y: y_pct * self.height / 100.0,
			}
		} else {
			Point { x: x_pct, y: y_pct }
		}
	}

	/// SVG `viewBox` matching [`Viewport::project`].
	pub fn view_box(&self) -> String {
		if self.is_measured() {
			format!("0 0 {} {}", self.width, self.height)
		} else {
			"0 0 100 100".to_string()
		}
	}
}

/// Lines for every resolved edge, in render space.
pub fn edge_lines(constellation: &Constellation, viewport: Viewport) -> Vec<EdgeLine> {
	let nodes = constellation.nodes();
	constellation
		.edges()
		.iter()
		.map(|&edge| {
			let (a, b) = (&nodes[edge.source], &nodes[edge.target]);
			EdgeLine {
				edge,
				from: viewport.project(a.x, a.y),
				to: viewport.project(b.x, b.y),
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::content::SkillNode;

	fn node(id: &str, x: f64, y: f64, connections: &[&str]) -> SkillNode {
		SkillNode {
			id: id.into(),
			name: id.into(),
			skills: Vec::new(),
			x,
			y,
			connections: connections.iter().map(|s| s.to_string()).collect(),
		}
	}

	#[test]
	fn unmeasured_viewport_stays_in_percent_space() {
		let vp = Viewport::default();
		assert!(!vp.is_measured());
		assert_eq!(vp.project(25.0, 75.0), Point { x: 25.0, y: 75.0 });
		assert_eq!(vp.view_box(), "0 0 100 100");
	}

	#[test]
	fn measured_viewport_scales_each_axis() {
		let vp = Viewport::new(800.0, 450.0);
		assert_eq!(vp.project(50.0, 20.0), Point { x: 400.0, y: 90.0 });
		assert_eq!(vp.view_box(), "0 0 800 450");
	}

	#[test]
	fn edge_lines_track_resizes() {
		let c = Constellation::new(vec![
			node("a", 10.0, 50.0, &["b"]),
			node("b", 90.0, 50.0, &["missing"]),
		]);

		let lines = edge_lines(&c, Viewport::new(1000.0, 400.0));
		assert_eq!(lines.len(), 1);
		assert_eq!(lines[0].from, Point { x: 100.0, y: 200.0 });
		assert_eq!(lines[0].to, Point { x: 900.0, y: 200.0 });

		let lines = edge_lines(&c, Viewport::new(1000.0, 400.0).remeasure(500.0, 200.0).unwrap());
		assert_eq!(lines[0].from, Point { x: 50.0, y: 100.0 });
		assert_eq!(lines[0].to, Point { x: 450.0, y: 100.0 });
	}

	#[test]
	fn container_resize_yields_new_viewport() {
		let vp = Viewport::new(1000.0, 400.0);
		assert_eq!(vp.remeasure(1000.0, 400.0), None);

		// Scrollbar appearing narrows the container without a window resize.
		let narrowed = vp.remeasure(985.0, 400.0).unwrap();
		assert_eq!(narrowed.project(100.0, 0.0), Point { x: 985.0, y: 0.0 });
		assert_eq!(narrowed.view_box(), "0 0 985 400");

		assert!(Viewport::default().remeasure(640.0, 360.0).is_some());
	}
}
