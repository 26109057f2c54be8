//! UI components: the interactive widgets and the page sections built on them.

pub mod carousel;
pub mod constellation;
pub mod lightbox;
mod listener;
pub mod sections;
