//! Skill graph structure and single-node hover tracking.
//!
//! Nodes are indexed by id once at construction. Authored adjacency is
//! directed, but edges are stored as unordered pairs: `a -> b` and `b -> a`
//! collapse into one line, and either endpoint's hover highlights it.
//! Adjacency ids that do not resolve, and self-loops, are dropped.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::content::SkillNode;
use crate::error::ConstellationError;

/// An undirected connection between two nodes, by index into the node list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	/// Index of the node that authored the connection.
	pub source: usize,
	/// Index of the node it points at.
	pub target: usize,
}

/// The constellation graph plus which node, if any, the pointer is over.
#[derive(Clone, Debug)]
pub struct Constellation {
	nodes: Vec<SkillNode>,
	index: HashMap<String, usize>,
	edges: Vec<Edge>,
	hovered: Option<String>,
}

impl Constellation {
	/// Index `nodes` and resolve their adjacency into deduplicated edges.
	pub fn new(nodes: Vec<SkillNode>) -> Self {
		let index: HashMap<String, usize> = nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.clone(), i))
			.collect();

		let mut seen = HashSet::new();
		let mut edges = Vec::new();
		for (src, node) in nodes.iter().enumerate() {
			for target_id in &node.connections {
				let Some(&tgt) = index.get(target_id) else {
					debug!(
						"constellation: skipping dangling edge {} -> {}",
						node.id, target_id
					);
					continue;
				};
				if src == tgt {
					continue;
				}
				if seen.insert((src.min(tgt), src.max(tgt))) {
					edges.push(Edge {
						source: src,
						target: tgt,
					});
				}
			}
		}

		Self {
			nodes,
			index,
			edges,
			hovered: None,
		}
	}

	/// Nodes in authored order.
	pub fn nodes(&self) -> &[SkillNode] {
		&self.nodes
	}

	/// Resolved, deduplicated edges.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Look up a node by id.
	pub fn node(&self, id: &str) -> Option<&SkillNode> {
		self.index.get(id).map(|&i| &self.nodes[i])
	}

	/// Id of the hovered node.
	pub fn hovered_id(&self) -> Option<&str> {
		self.hovered.as_deref()
	}

	/// The hovered node, for popover rendering.
	pub fn hovered_node(&self) -> Option<&SkillNode> {
		self.hovered.as_deref().and_then(|id| self.node(id))
	}

	/// Pointer entered `id`. Replaces any previous hover.
	pub fn hover_enter(&mut self, id: &str) -> Result<(), ConstellationError> {
		if !self.index.contains_key(id) {
			return Err(ConstellationError::UnknownNode(id.to_string()));
		}
		self.hovered = Some(id.to_string());
		Ok(())
	}

	/// Pointer left `id`. A leave from a node that is no longer the hovered
	/// one is stale and ignored.
	pub fn hover_leave(&mut self, id: &str) {
		if self.hovered.as_deref() == Some(id) {
			self.hovered = None;
		}
	}

	/// Whether `id` is the hovered node.
	pub fn is_node_active(&self, id: &str) -> bool {
		self.hovered.as_deref() == Some(id)
	}

	/// Whether the edge `a`-`b` touches the hovered node, in either direction.
	pub fn is_edge_highlighted(&self, a: &str, b: &str) -> bool {
		matches!(self.hovered.as_deref(), Some(h) if h == a || h == b)
	}

	/// Endpoint ids of `edge`.
	pub fn edge_ids(&self, edge: Edge) -> (&str, &str) {
		(&self.nodes[edge.source].id, &self.nodes[edge.target].id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, x: f64, y: f64, connections: &[&str]) -> SkillNode {
		SkillNode {
			id: id.into(),
			name: id.to_uppercase(),
			skills: Vec::new(),
			x,
			y,
			connections: connections.iter().map(|s| s.to_string()).collect(),
		}
	}

	fn chain() -> Constellation {
		Constellation::new(vec![
			node("a", 10.0, 10.0, &["b"]),
			node("b", 50.0, 50.0, &["c"]),
			node("c", 90.0, 90.0, &[]),
		])
	}

	fn highlighted(c: &Constellation) -> Vec<(String, String)> {
		c.edges()
			.iter()
			.map(|&e| c.edge_ids(e))
			.filter(|(a, b)| c.is_edge_highlighted(a, b))
			.map(|(a, b)| (a.to_string(), b.to_string()))
			.collect()
	}

	#[test]
	fn chain_highlights_follow_hover() {
		let mut c = chain();
		assert!(highlighted(&c).is_empty());

		c.hover_enter("a").unwrap();
		assert_eq!(highlighted(&c), vec![("a".into(), "b".into())]);

		c.hover_enter("c").unwrap();
		assert_eq!(highlighted(&c), vec![("b".into(), "c".into())]);

		c.hover_leave("c");
		assert!(highlighted(&c).is_empty());
	}

	#[test]
	fn middle_node_highlights_both_edges() {
		let mut c = chain();
		c.hover_enter("b").unwrap();
		assert_eq!(highlighted(&c).len(), 2);
	}

	#[test]
	fn stale_leave_is_ignored() {
		let mut c = chain();
		c.hover_enter("a").unwrap();
		c.hover_enter("b").unwrap();
		c.hover_leave("a");
		assert_eq!(c.hovered_id(), Some("b"));
		assert!(c.is_node_active("b"));
		assert!(!c.is_node_active("a"));
	}

	#[test]
	fn unknown_node_is_rejected() {
		let mut c = chain();
		c.hover_enter("a").unwrap();
		assert_eq!(
			c.hover_enter("zzz"),
			Err(ConstellationError::UnknownNode("zzz".into()))
		);
		assert_eq!(c.hovered_id(), Some("a"));
	}

	#[test]
	fn edge_highlight_matches_hover_membership() {
		let mut c = chain();
		let ids = ["a", "b", "c"];
		for hovered in [None, Some("a"), Some("b"), Some("c")] {
			if let Some(h) = hovered {
				c.hover_enter(h).unwrap();
			} else if let Some(h) = c.hovered_id().map(str::to_string) {
				c.hover_leave(&h);
			}
			for a in ids {
				for b in ids {
					let expected = hovered.is_some_and(|h| h == a || h == b);
					assert_eq!(c.is_edge_highlighted(a, b), expected);
				}
			}
		}
	}

	#[test]
	fn dangling_and_duplicate_edges_are_dropped() {
		let c = Constellation::new(vec![
			node("a", 0.0, 0.0, &["b", "ghost", "a"]),
			node("b", 100.0, 100.0, &["a"]),
		]);
		assert_eq!(c.edges(), &[Edge { source: 0, target: 1 }]);
	}

	#[test]
	fn hovered_node_resolves_for_popover() {
		let mut c = chain();
		assert!(c.hovered_node().is_none());
		c.hover_enter("c").unwrap();
		assert_eq!(c.hovered_node().map(|n| n.name.as_str()), Some("C"));
	}
}
