//! Carousel position and autoplay state.
//!
//! The state is a small `Copy` value updated through explicit transitions, so
//! it can be driven from event handlers, a timer, or a test without a DOM.
//!
//! Autoplay can be suspended by three independent sources:
//!
//! - **manual**: explicit navigation (`advance`, `retreat`, `jump_to`) or
//!   `pause`. Only `resume` clears it.
//! - **hover**: pointer over the active card. Cleared on pointer leave.
//! - **overlay**: a modal tied to the carousel is open. Cleared on close.
//!
//! Autoplay runs only while none of them is set. A hover leave therefore
//! never restarts autoplay that navigation switched off.

use log::warn;

use crate::error::CarouselError;

/// An input the carousel reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
	/// Manual step forward (next button).
	Advance,
	/// Manual step back (previous button).
	Retreat,
	/// Manual jump (indicator dot).
	JumpTo(usize),
	/// Autoplay timer fired.
	Tick,
	/// Autoplay toggle switched off.
	Pause,
	/// Autoplay toggle switched on.
	Resume,
	/// Pointer entered the active item.
	HoverEnter,
	/// Pointer left the active item.
	HoverLeave,
	/// A modal tied to the carousel opened.
	OverlayOpened,
	/// That modal closed.
	OverlayClosed,
}

/// The three rendered positions around the active item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slots {
	/// Item rendered to the left of the active one.
	pub previous: usize,
	/// The active item.
	pub current: usize,
	/// Item rendered to the right of the active one.
	pub next: usize,
}

/// Carousel pointer plus autoplay suspension flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
	len: usize,
	active: usize,
	manual_disabled: bool,
	hover_paused: bool,
	overlay_open: bool,
}

impl CarouselState {
	/// Create a carousel over `len` items, starting at index 0 with autoplay on.
	pub fn new(len: usize) -> Result<Self, CarouselError> {
		if len == 0 {
			return Err(CarouselError::Empty);
		}
		Ok(Self {
			len,
			active: 0,
			manual_disabled: false,
			hover_paused: false,
			overlay_open: false,
		})
	}

	/// Number of items.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Always `false`; construction rejects an empty list.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Index of the item in the current slot.
	pub fn active_index(&self) -> usize {
		self.active
	}

	/// Whether the autoplay timer should be running.
	pub fn is_auto_playing(&self) -> bool {
		!self.manual_disabled && !self.hover_paused && !self.overlay_open
	}

	/// Previous, current and next indices, wrapping at both ends.
	pub fn slots(&self) -> Slots {
		Slots {
			previous: (self.active + self.len - 1) % self.len,
			current: self.active,
			next: (self.active + 1) % self.len,
		}
	}

	fn step_forward(&mut self) {
		self.active = (self.active + 1) % self.len;
	}

	fn step_back(&mut self) {
		self.active = (self.active + self.len - 1) % self.len;
	}

	/// Manual step forward. Disables autoplay.
	pub fn advance(&mut self) {
		self.step_forward();
		self.manual_disabled = true;
	}

	/// Manual step back. Disables autoplay.
	pub fn retreat(&mut self) {
		self.step_back();
		self.manual_disabled = true;
	}

	/// Jump to `index`. Out-of-range indices are rejected and leave the state untouched.
	pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
		if index >= self.len {
			return Err(CarouselError::IndexOutOfRange {
				index,
				len: self.len,
			});
		}
		self.active = index;
		self.manual_disabled = true;
		Ok(())
	}

	/// Timer-driven step. Ignored unless autoplay is active, so a tick that
	/// races a suspension cannot move the carousel. Returns whether it advanced.
	pub fn tick(&mut self) -> bool {
		if !self.is_auto_playing() {
			return false;
		}
		self.step_forward();
		true
	}

	/// Switch autoplay off until [`resume`](Self::resume).
	pub fn pause(&mut self) {
		self.manual_disabled = true;
	}

	/// Clear the manual suspension. Hover and overlay suspensions still apply.
	pub fn resume(&mut self) {
		self.manual_disabled = false;
	}

	/// Suspend autoplay while the pointer rests on the active item.
	pub fn hover_enter(&mut self) {
		self.hover_paused = true;
	}

	/// Lift the hover suspension only.
	pub fn hover_leave(&mut self) {
		self.hover_paused = false;
	}

	/// Suspend autoplay while a related overlay is open.
	pub fn overlay_opened(&mut self) {
		self.overlay_open = true;
	}

	/// Lift the overlay suspension only.
	pub fn overlay_closed(&mut self) {
		self.overlay_open = false;
	}

	/// Apply `event` and return the resulting state.
	pub fn reduce(mut self, event: CarouselEvent) -> Self {
		match event {
			CarouselEvent::Advance => self.advance(),
			CarouselEvent::Retreat => self.retreat(),
			CarouselEvent::JumpTo(index) => {
				if let Err(e) = self.jump_to(index) {
					warn!("carousel: ignoring jump: {}", e);
				}
			}
			CarouselEvent::Tick => {
				self.tick();
			}
			CarouselEvent::Pause => self.pause(),
			CarouselEvent::Resume => self.resume(),
			CarouselEvent::HoverEnter => self.hover_enter(),
			CarouselEvent::HoverLeave => self.hover_leave(),
			CarouselEvent::OverlayOpened => self.overlay_opened(),
			CarouselEvent::OverlayClosed => self.overlay_closed(),
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const PERIOD_MS: u64 = 5_500;

	fn carousel(len: usize) -> CarouselState {
		CarouselState::new(len).unwrap()
	}

	#[test]
	fn empty_carousel_is_rejected() {
		assert_eq!(CarouselState::new(0), Err(CarouselError::Empty));
		assert!(!carousel(1).is_empty());
	}

	#[test]
	fn starts_at_zero_with_autoplay() {
		let c = carousel(3);
		assert_eq!(c.active_index(), 0);
		assert!(c.is_auto_playing());
	}

	#[test]
	fn index_stays_in_range() {
		for len in 1..=7 {
			let mut c = carousel(len);
			// Mixed walk, biased backwards so we cross zero several times.
			for step in 0..50usize {
				if step % 3 == 0 {
					c.advance();
				} else {
					c.retreat();
				}
				assert!(c.active_index() < len);
			}
		}
	}

	#[test]
	fn advance_then_retreat_round_trips() {
		for len in 1..=5 {
			for start in 0..len {
				let mut c = carousel(len);
				c.jump_to(start).unwrap();
				c.advance();
				c.retreat();
				assert_eq!(c.active_index(), start);
			}
		}
	}

	#[test]
	fn single_item_wraps_onto_itself() {
		let mut c = carousel(1);
		c.advance();
		assert_eq!(c.active_index(), 0);
		let slots = c.slots();
		assert_eq!((slots.previous, slots.current, slots.next), (0, 0, 0));
	}

	#[test]
	fn jump_sets_index_exactly() {
		let mut c = carousel(4);
		c.jump_to(2).unwrap();
		assert_eq!(c.active_index(), 2);
	}

	#[test]
	fn out_of_range_jump_is_rejected() {
		let mut c = carousel(4);
		c.tick();
		let before = c;
		assert_eq!(
			c.jump_to(4),
			Err(CarouselError::IndexOutOfRange { index: 4, len: 4 })
		);
		assert_eq!(c, before);
		assert_eq!(c.reduce(CarouselEvent::JumpTo(9)), before);
	}

	#[test]
	fn manual_navigation_disables_autoplay() {
		let events = [
			CarouselEvent::Advance,
			CarouselEvent::Retreat,
			CarouselEvent::JumpTo(1),
		];
		for event in events {
			let c = carousel(3).reduce(event);
			assert!(!c.is_auto_playing(), "{:?} left autoplay on", event);
		}
	}

	#[test]
	fn ticks_advance_modulo_len() {
		let mut c = carousel(4);
		c.jump_to(1).unwrap();
		c.resume();
		for t in 1..=10 {
			assert!(c.tick());
			assert_eq!(c.active_index(), (1 + t) % 4);
		}
	}

	#[test]
	fn autoplay_then_retreat_scenario() {
		let mut c = carousel(5);
		let elapsed_ms = 16_500;
		for _ in 0..elapsed_ms / PERIOD_MS {
			c = c.reduce(CarouselEvent::Tick);
		}
		assert_eq!(c.active_index(), 3);

		c = c.reduce(CarouselEvent::Retreat);
		assert_eq!(c.active_index(), 2);
		assert!(!c.is_auto_playing());

		for _ in 0..5 {
			c = c.reduce(CarouselEvent::Tick);
		}
		assert_eq!(c.active_index(), 2);
	}

	#[test]
	fn hover_pauses_and_leave_resumes() {
		let mut c = carousel(3);
		c.hover_enter();
		assert!(!c.is_auto_playing());
		assert!(!c.tick());
		c.hover_leave();
		assert!(c.is_auto_playing());
	}

	#[test]
	fn hover_leave_does_not_undo_manual_disable() {
		let mut c = carousel(3);
		c.hover_enter();
		c.advance();
		c.hover_leave();
		assert!(!c.is_auto_playing());

		c.resume();
		assert!(c.is_auto_playing());
	}

	#[test]
	fn overlay_suspends_and_restores() {
		let mut c = carousel(3);
		c = c.reduce(CarouselEvent::OverlayOpened);
		assert!(!c.is_auto_playing());
		assert!(!c.tick());

		c = c.reduce(CarouselEvent::OverlayClosed);
		assert!(c.is_auto_playing());

		// Closing twice (button, then backdrop) is harmless.
		c = c.reduce(CarouselEvent::OverlayClosed);
		assert!(c.is_auto_playing());
	}

	#[test]
	fn overlay_close_keeps_manual_disable() {
		let mut c = carousel(3);
		c.pause();
		c.overlay_opened();
		c.overlay_closed();
		assert!(!c.is_auto_playing());
	}

	#[test]
	fn slots_follow_active_index() {
		let mut c = carousel(5);
		assert_eq!(
			c.slots(),
			Slots {
				previous: 4,
				current: 0,
				next: 1
			}
		);
		c.jump_to(4).unwrap();
		assert_eq!(
			c.slots(),
			Slots {
				previous: 3,
				current: 4,
				next: 0
			}
		);
	}
}
