//! Overlay selection state.

/// At most one item shown in a modal overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct Lightbox<T> {
	selected: Option<T>,
}

impl<T> Default for Lightbox<T> {
	fn default() -> Self {
		Self { selected: None }
	}
}

impl<T> Lightbox<T> {
	/// Show `item`, replacing whatever was open.
	pub fn open(&mut self, item: T) {
		self.selected = Some(item);
	}

	/// Close the overlay, returning what it showed.
	pub fn close(&mut self) -> Option<T> {
		self.selected.take()
	}

	/// The item currently shown.
	pub fn selected(&self) -> Option<&T> {
		self.selected.as_ref()
	}

	/// Whether anything is shown.
	pub fn is_open(&self) -> bool {
		self.selected.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn open_replaces_and_close_clears() {
		let mut lb = Lightbox::default();
		assert!(!lb.is_open());

		lb.open(1);
		lb.open(2);
		assert_eq!(lb.selected(), Some(&2));

		assert_eq!(lb.close(), Some(2));
		assert!(!lb.is_open());
		assert_eq!(lb.close(), None);
	}
}
