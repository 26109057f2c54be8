//! Twinkling star backdrop behind the constellation.

/// A single background star, positioned in percent-space.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
	/// Left offset in percent.
	pub x: f64,
	/// Top offset in percent.
	pub y: f64,
	/// Resting opacity.
	pub alpha: f64,
	/// Seconds per twinkle cycle.
	pub period: f64,
}

impl Star {
	/// Inline CSS for an absolutely positioned star.
	pub fn style(&self) -> String {
		format!(
			"left: {:.2}%; top: {:.2}%; opacity: {:.2}; animation-duration: {:.2}s;",
			self.x, self.y, self.alpha, self.period
		)
	}
}

/// Generate `count` stars. The layout is deterministic so it does not jump
/// between renders.
pub fn starfield(count: usize) -> Vec<Star> {
	(0..count)
		.map(|i| {
			let seed = i as f64 + 1.0;
			Star {
				x: pseudo_random(seed * 1.1) * 100.0,
				y: pseudo_random(seed * 2.3) * 100.0,
				alpha: 0.3 + pseudo_random(seed * 3.7) * 0.7,
				period: 2.0 + pseudo_random(seed * 4.1) * 3.0,
			}
		})
		.collect()
}

/// Simple pseudo-random function (deterministic)
fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stars_stay_inside_the_box() {
		for star in starfield(200) {
			assert!((0.0..100.0).contains(&star.x));
			assert!((0.0..100.0).contains(&star.y));
			assert!((0.3..=1.0).contains(&star.alpha));
			assert!((2.0..=5.0).contains(&star.period));
		}
	}

	#[test]
	fn layout_is_stable() {
		assert_eq!(starfield(10), starfield(10));
		assert!(starfield(0).is_empty());
	}
}
