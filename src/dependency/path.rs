//! Traversals over dependency heads.

use std::collections::VecDeque;

use super::{DependencyGraph, NodeId};

/// Iterator from a node up to its sentence root.
///
/// Holds no shared state, so walking again from the same node yields the same sequence.
#[derive(Debug, Clone)]
pub struct PathToTop<'g> {
    graph: &'g DependencyGraph,
    next: Option<NodeId>,
}

impl<'g> PathToTop<'g> {
    pub(super) fn new(graph: &'g DependencyGraph, start: NodeId) -> Self {
        Self {
            graph,
            next: Some(start),
        }
    }
}

impl Iterator for PathToTop<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.graph.head_of(current);
        Some(current)
    }
}

/// Path `from -> ... -> common -> ... -> to` through the nearest shared ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyPath {
    nodes: Vec<NodeId>,
    common: usize,
}

impl DependencyPath {
    pub(super) fn between(graph: &DependencyGraph, from: NodeId, to: NodeId) -> Option<Self> {
        let up_to: Vec<NodeId> = graph.path_to_top(to).collect();
        let mut nodes = Vec::new();

        for up_from in graph.path_to_top(from) {
            nodes.push(up_from);
            let mut descent = VecDeque::new();
            for &candidate in &up_to {
                if graph.equal_coverage(Some(up_from), Some(candidate)) {
                    let common = nodes.len() - 1;
                    nodes.extend(descent);
                    return Some(Self { nodes, common });
                }
                descent.push_front(candidate);
            }
        }
        None
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn common_node(&self) -> NodeId {
        self.nodes[self.common]
    }

    /// Position of the common ancestor within [`Self::nodes`].
    pub fn common_index(&self) -> usize {
        self.common
    }

    /// The common ancestor is the direct head of one of the two endpoints.
    pub fn is_one_removed(&self) -> bool {
        self.common == 1 || self.common + 2 == self.nodes.len()
    }
}
