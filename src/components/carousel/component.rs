//! Leptos bindings for the carousel state.
//!
//! [`use_carousel`] owns the reactive state and the autoplay timer for one
//! carousel instance. The timer is recreated whenever autoplay switches on,
//! dropped whenever it switches off, and dropped on unmount. Item rendering
//! is left to the caller; [`CarouselControls`] renders the shared
//! prev/next buttons, indicator dots and autoplay toggle.

use leptos::prelude::*;
use log::info;
use web_sys::MouseEvent;

use super::state::{CarouselEvent, CarouselState, Slots};
use super::timer::{AutoplayTimer, TimerSlot};
use crate::error::CarouselError;

/// Cheap, copyable handle to a mounted carousel.
#[derive(Clone, Copy)]
pub struct CarouselHandle {
	state: RwSignal<CarouselState>,
}

impl CarouselHandle {
	/// Apply an event to the carousel.
	pub fn dispatch(&self, event: CarouselEvent) {
		self.state.update(|s| *s = s.reduce(event));
	}

	/// Reactive read of the visible slots.
	pub fn slots(&self) -> Slots {
		self.state.with(|s| s.slots())
	}

	/// Reactive read of the active index.
	pub fn active_index(&self) -> usize {
		self.state.with(|s| s.active_index())
	}

	/// Reactive read of whether autoplay is running.
	pub fn is_auto_playing(&self) -> bool {
		self.state.with(|s| s.is_auto_playing())
	}

	/// Number of items. Fixed for the carousel's lifetime, so untracked.
	pub fn len(&self) -> usize {
		self.state.with_untracked(|s| s.len())
	}

	/// Always `false`; see [`CarouselState::is_empty`].
	pub fn is_empty(&self) -> bool {
		self.state.with_untracked(|s| s.is_empty())
	}
}

/// Create a carousel over `len` items that autoplays every `period_ms`.
pub fn use_carousel(len: usize, period_ms: u32) -> Result<CarouselHandle, CarouselError> {
	let state = RwSignal::new(CarouselState::new(len)?);
	let timer = StoredValue::new_local(TimerSlot::<AutoplayTimer>::default());
	let auto_playing = Memo::new(move |_| state.with(|s| s.is_auto_playing()));

	Effect::new(move |_| {
		let on = auto_playing.get();
		timer.update_value(|slot| {
			slot.sync(on, || {
				AutoplayTimer::start(period_ms, move || {
					state.update(|s| {
						s.tick();
					});
				})
			})
		});
	});

	on_cleanup(move || {
		if timer.try_update_value(|slot| slot.release()).unwrap_or(false) {
			info!("carousel: unmounted, autoplay released");
		}
	});

	Ok(CarouselHandle { state })
}

/// Previous/next buttons, one indicator dot per item, and an autoplay toggle.
#[component]
pub fn CarouselControls(
	carousel: CarouselHandle,
	/// Noun used in button labels, e.g. "project".
	#[prop(into)]
	noun: String,
) -> impl IntoView {
	let dots = (0..carousel.len())
		.map(|index| {
			let label = format!("Go to {} {}", noun, index + 1);
			view! {
				<button
					class="carousel-dot"
					class:active=move || carousel.active_index() == index
					aria-label=label
					on:click=move |_| carousel.dispatch(CarouselEvent::JumpTo(index))
				/>
			}
		})
		.collect_view();

	let toggle_autoplay = move |_: MouseEvent| {
		let event = if carousel.is_auto_playing() {
			CarouselEvent::Pause
		} else {
			CarouselEvent::Resume
		};
		carousel.dispatch(event);
	};

	view! {
		<div class="carousel-controls" class:autoplaying=move || carousel.is_auto_playing()>
			<button
				class="carousel-arrow"
				aria-label=format!("Previous {}", noun)
				on:click=move |_| carousel.dispatch(CarouselEvent::Retreat)
			>
				"‹"
			</button>
			<div class="carousel-dots">{dots}</div>
			<button
				class="carousel-autoplay"
				aria-label="Toggle autoplay"
				on:click=toggle_autoplay
			>
				{move || if carousel.is_auto_playing() { "❚❚" } else { "▶" }}
			</button>
			<button
				class="carousel-arrow"
				aria-label=format!("Next {}", noun)
				on:click=move |_| carousel.dispatch(CarouselEvent::Advance)
			>
				"›"
			</button>
		</div>
	}
}
