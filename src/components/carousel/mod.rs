//! Auto-advancing, manually navigable carousel.
//!
//! - Modular prev/current/next slots over a fixed, non-empty item list
//! - Interval autoplay owned by the component instance
//! - Separate suspension for manual navigation, hover and overlays
//!
//! # Example
//!
//! ```ignore
//! let carousel = use_carousel(items.len(), 5_500)?;
//! view! {
//!     <p>{move || items[carousel.slots().current].clone()}</p>
//!     <CarouselControls carousel=carousel noun="item" />
//! }
//! ```

mod component;
mod state;
mod timer;

pub use component::{CarouselControls, CarouselHandle, use_carousel};
pub use state::{CarouselEvent, CarouselState, Slots};
