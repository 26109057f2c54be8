//! Repeating browser timer owned by a single carousel instance.

use log::{debug, warn};
use wasm_bindgen::prelude::*;

/// A `setInterval` registration that is cleared when dropped.
///
/// Holding the timer keeps the callback alive; dropping it cancels the
/// interval, so releasing the owner is enough to stop autoplay.
pub struct AutoplayTimer {
	handle: i32,
	_callback: Closure<dyn FnMut()>,
}

impl AutoplayTimer {
	/// Start calling `on_tick` every `period_ms` milliseconds.
	///
	/// Returns `None` outside a browser window or if the interval could not
	/// be registered.
	pub fn start(period_ms: u32, on_tick: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let callback = Closure::<dyn FnMut()>::new(on_tick);
		let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
		let handle = match window.set_interval_with_callback_and_timeout_and_arguments_0(
			callback.as_ref().unchecked_ref(),
			timeout,
		) {
			Ok(handle) => handle,
			Err(e) => {
				warn!("carousel: failed to start autoplay timer: {:?}", e);
				return None;
			}
		};
		debug!("carousel: autoplay timer {} started ({} ms)", handle, period_ms);

		Some(Self {
			handle,
			_callback: callback,
		})
	}
}

impl Drop for AutoplayTimer {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			window.clear_interval_with_handle(self.handle);
		}
		debug!("carousel: autoplay timer {} cleared", self.handle);
	}
}

/// The single autoplay timer owned by a carousel instance.
///
/// Generic over the timer so the start/stop rules hold for [`AutoplayTimer`]
/// and for test doubles alike. Dropping the held timer is what stops it.
pub(crate) struct TimerSlot<T> {
	timer: Option<T>,
}

impl<T> Default for TimerSlot<T> {
	fn default() -> Self {
		Self { timer: None }
	}
}

impl<T> TimerSlot<T> {
	/// Bring the slot in line with `auto_playing`.
	///
	/// Starts a timer when autoplay is on and none is held, and drops the
	/// held one when autoplay is off. A running timer is never replaced.
	pub(crate) fn sync(&mut self, auto_playing: bool, start: impl FnOnce() -> Option<T>) {
		match (auto_playing, self.timer.is_some()) {
			(true, false) => self.timer = start(),
			(false, true) => self.timer = None,
			_ => {}
		}
	}

	#[cfg(test)]
	pub(crate) fn is_running(&self) -> bool {
		self.timer.is_some()
	}

	/// Drop the held timer. Returns whether one was running.
	pub(crate) fn release(&mut self) -> bool {
		self.timer.take().is_some()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use super::*;

	/// Counts how many timers were started and how many are still alive.
	#[derive(Clone, Default)]
	struct Counters {
		started: Rc<Cell<u32>>,
		alive: Rc<Cell<u32>>,
	}

	struct FakeTimer(Counters);

	impl Drop for FakeTimer {
		fn drop(&mut self) {
			self.0.alive.set(self.0.alive.get() - 1);
		}
	}

	impl Counters {
		fn start(&self) -> Option<FakeTimer> {
			self.started.set(self.started.get() + 1);
			self.alive.set(self.alive.get() + 1);
			Some(FakeTimer(self.clone()))
		}
	}

	#[test]
	fn timer_follows_autoplay_switches() {
		let counters = Counters::default();
		let mut slot = TimerSlot::default();

		slot.sync(true, || counters.start());
		assert!(slot.is_running());
		assert_eq!(counters.started.get(), 1);

		// Re-syncing while on keeps the same interval.
		slot.sync(true, || counters.start());
		assert_eq!(counters.started.get(), 1);

		slot.sync(false, || counters.start());
		assert!(!slot.is_running());
		assert_eq!(counters.alive.get(), 0);

		slot.sync(true, || counters.start());
		assert_eq!(counters.started.get(), 2);
		assert_eq!(counters.alive.get(), 1);
	}

	#[test]
	fn release_reports_only_a_running_timer() {
		let counters = Counters::default();
		let mut slot = TimerSlot::default();

		assert!(!slot.release());

		slot.sync(true, || counters.start());
		assert!(slot.release());
		assert_eq!(counters.alive.get(), 0);
		assert!(!slot.release());
	}

	#[test]
	fn failed_start_is_retried_on_next_sync() {
		let counters = Counters::default();
		let mut slot = TimerSlot::default();

		slot.sync(true, || None);
		assert!(!slot.is_running());

		slot.sync(true, || counters.start());
		assert!(slot.is_running());
	}
}
