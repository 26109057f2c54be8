//! Image/media lightbox shared by the gallery and the project demo overlay.

mod component;
mod state;

pub use component::LightboxModal;
pub use state::Lightbox;
