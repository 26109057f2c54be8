//! Hoverable skill constellation.
//!
//! Renders skill categories as nodes at authored percentage positions with
//! lines between connected categories:
//! - Single-node hover with a stale-leave guard
//! - Edge highlighting derived purely from the hovered node
//! - Pixel-space edges recomputed from the measured container size
//! - Deterministic starfield backdrop
//!
//! # Example
//!
//! ```ignore
//! view! { <SkillConstellation nodes=content.skills.clone() /> }
//! ```

mod component;
mod layout;
mod starfield;
mod state;
pub mod theme;

pub use component::SkillConstellation;
pub use layout::{EdgeLine, Point, Viewport};
pub use starfield::{Star, starfield};
pub use state::{Constellation, Edge};
