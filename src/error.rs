//! Error types for the interactive widgets and content loading.

use thiserror::Error;

/// Rejected carousel construction or navigation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CarouselError {
	/// A carousel needs at least one item to point at.
	#[error("carousel requires at least one item")]
	Empty,
	/// `jump_to` was given an index outside `0..len`.
	#[error("index {index} out of range for carousel of {len} items")]
	IndexOutOfRange {
		/// The rejected index.
		index: usize,
		/// Number of items in the carousel.
		len: usize,
	},
}

/// Rejected constellation hover input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConstellationError {
	/// The node id is not part of the constellation.
	#[error("unknown skill node `{0}`")]
	UnknownNode(String),
}

/// Site content that could not be used.
#[derive(Debug, Error)]
pub enum ContentError {
	/// The payload is not valid JSON for the content model.
	#[error("failed to parse site content: {0}")]
	Parse(#[from] serde_json::Error),
	/// The payload parsed but breaks an invariant the widgets rely on.
	#[error("invalid site content: {0}")]
	Validation(String),
}
