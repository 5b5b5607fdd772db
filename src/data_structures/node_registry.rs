use crate::common::{Grid, Point};

/// Handle to a node stored in a [NodeRegistry].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Search state for a single grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    pub position: Point,
    /// cost to reach this position (the g_score in A* terminology)
    pub g_score: f64,
    /// straight-line distance to the goal, fixed when the node is created
    pub h_score: f64,
    pub parent: Option<NodeId>,
}

impl SearchNode {
    /// Best-guess total cost through this node (the f_score).
    pub fn f_score(&self) -> f64 {
        self.g_score + self.h_score
    }
}

/// Owns every node discovered during one search.
///
/// Nodes live in an arena and are looked up through a flat `y * width + x`
/// index, so each grid cell maps to at most one node. Nodes are never removed;
/// the whole registry is dropped when the search ends.
#[derive(Debug)]
pub struct NodeRegistry<'a> {
    grid: &'a Grid,
    slots: Vec<Option<NodeId>>,
    nodes: Vec<SearchNode>,
}

impl<'a> NodeRegistry<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            slots: vec![None; grid.len()],
            nodes: Vec::new(),
        }
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get_id(&self, position: Point) -> Option<NodeId> {
        self.grid.index(position).and_then(|idx| self.slots[idx])
    }

    /// Stores a new node, returning its handle.
    ///
    /// If the node's position already has a node, or lies outside the grid, the
    /// node is not stored and None is returned.
    pub fn insert(&mut self, node: SearchNode) -> Option<NodeId> {
        let idx = self.grid.index(node.position)?;
        if self.slots[idx].is_some() {
            return None;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.slots[idx] = Some(id);
        Some(id)
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Lowers the node's cost and re-parents it if `g_score` is an improvement.
    ///
    /// Returns whether the node was relaxed.
    pub fn relax(&mut self, id: NodeId, g_score: f64, parent: NodeId) -> bool {
        let node = &mut self.nodes[id.0];
        if g_score < node.g_score {
            node.g_score = g_score;
            node.parent = Some(parent);
            true
        } else {
            false
        }
    }

    /// Positions from `id` back to the root of its parent chain, inclusive.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = Point> + '_ {
        let nodes = &self.nodes;
        std::iter::successors(Some(id), move |current| nodes[current.0].parent)
            .map(move |current| nodes[current.0].position)
    }
}
