//! Browser callbacks tied to a component's lifetime.
//!
//! Each guard owns its closure and unregisters it when dropped, so storing
//! the guard in a component and releasing it on cleanup is all that is
//! needed.

use log::warn;
use wasm_bindgen::prelude::*;

/// A listener registered on `window`, removed again when dropped.
pub struct WindowListener {
	event: &'static str,
	callback: Closure<dyn FnMut()>,
}

impl WindowListener {
	/// Register `on_event` for `event` (e.g. `"resize"`, `"scroll"`).
	pub fn new(event: &'static str, on_event: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let callback = Closure::<dyn FnMut()>::new(on_event);
		if let Err(e) =
			window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
		{
			warn!("failed to listen for window `{}`: {:?}", event, e);
			return None;
		}
		Some(Self { event, callback })
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			let _ = window
				.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
		}
	}
}

/// A `ResizeObserver` watching one element, disconnected when dropped.
///
/// Fires for any change to the element's box, including ones the window
/// never reports (a scrollbar appearing, a sibling growing).
pub struct ElementResizeObserver {
	observer: web_sys::ResizeObserver,
	_callback: Closure<dyn FnMut()>,
}

impl ElementResizeObserver {
	/// Observe `element`, calling `on_resize` after each size change.
	///
	/// Browsers also deliver one notification right after observation
	/// starts, which covers the initial measurement.
	pub fn new(element: &web_sys::Element, on_resize: impl FnMut() + 'static) -> Option<Self> {
		let callback = Closure::<dyn FnMut()>::new(on_resize);
		let observer = match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
			Ok(observer) => observer,
			Err(e) => {
				warn!("failed to create resize observer: {:?}", e);
				return None;
			}
		};
		observer.observe(element);
		Some(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for ElementResizeObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}
