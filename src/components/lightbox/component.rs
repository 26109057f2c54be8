//! Modal shell rendered over the page.

use leptos::prelude::*;
use web_sys::MouseEvent;

/// Full-screen modal shown while `open` is true.
///
/// The backdrop and the close button both go through `on_close`, so callers
/// tying other state to the overlay (e.g. suspending autoplay) see exactly
/// one release path.
#[component]
pub fn LightboxModal(
	#[prop(into)] open: Signal<bool>,
	on_close: Callback<()>,
	children: ChildrenFn,
) -> impl IntoView {
	view! {
		<Show when=move || open.get()>
			<div class="lightbox-backdrop" on:click=move |_| on_close.run(())>
				<div class="lightbox-panel" on:click=|ev: MouseEvent| ev.stop_propagation()>
					<button
						class="lightbox-close"
						aria-label="Close"
						on:click=move |_| on_close.run(())
					>
						"×"
					</button>
					{children()}
				</div>
			</div>
		</Show>
	}
}
