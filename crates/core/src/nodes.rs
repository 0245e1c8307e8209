//! Per-search node arena with direct-indexed lookup by cell.
//! Nodes live in a dense `Vec` and refer to their predecessor by index, so a
//! finished search drops every node at once and a path is rebuilt by walking
//! indices back to the start.

use std::num::NonZeroU32;

use crate::grid::{Grid, MAX_DIMENSION};
use crate::types::Pos;

// Every cell of the largest grid needs a distinct id.
const _: () = assert!(MAX_DIMENSION * MAX_DIMENSION < u32::MAX as usize);

/// Arena index stored as `index + 1`, so `Option<NodeId>` stays 4 bytes and
/// the per-cell slot table costs 4 bytes per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    pub fn new(index: usize) -> Self {
        let raw = u32::try_from(index + 1).ok().and_then(NonZeroU32::new);
        Self(raw.expect("node index is bounded by the grid cell count"))
    }

    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Pos,
    pub cost_from_start: u32,
    /// Estimate to the goal, computed once when the node is created.
    pub heuristic_cost: u32,
    pub predecessor: Option<NodeId>,
    pub closed: bool,
}

impl SearchNode {
    pub fn total_estimated_cost(&self) -> u32 {
        self.cost_from_start + self.heuristic_cost
    }
}

/// What [`NodeTable::insert_or_update`] did with a candidate cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relaxation {
    /// First time this cell was reached.
    Inserted(NodeId),
    /// A strictly cheaper path replaced the previous one.
    Improved(NodeId),
    /// Existing cost was as good or better, or the node is already closed.
    Unchanged,
    /// The position lies outside the grid.
    OutOfBounds,
}

pub struct NodeTable<'g> {
    grid: &'g Grid,
    slots: Vec<Option<NodeId>>,
    nodes: Vec<SearchNode>,
}

impl<'g> NodeTable<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid, slots: vec![None; grid.len()], nodes: Vec::new() }
    }

    fn id_at(&self, pos: Pos) -> Option<NodeId> {
        self.grid.index_of(pos).and_then(|i| self.slots[i])
    }

    pub fn find(&self, pos: Pos) -> Option<&SearchNode> {
        self.id_at(pos).map(|id| &self.nodes[id.index()])
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    pub fn is_closed(&self, pos: Pos) -> bool {
        self.find(pos).is_some_and(|node| node.closed)
    }

    pub fn close(&mut self, id: NodeId) {
        self.nodes[id.index()].closed = true;
    }

    /// Record that `pos` is reachable at `cost` via `predecessor`.
    ///
    /// `heuristic` is only evaluated when the node is created.
    pub fn insert_or_update(
        &mut self,
        pos: Pos,
        cost: u32,
        predecessor: Option<NodeId>,
        heuristic: impl FnOnce(Pos) -> u32,
    ) -> Relaxation {
        let Some(slot) = self.grid.index_of(pos) else {
            return Relaxation::OutOfBounds;
        };
        match self.slots[slot] {
            None => {
                let id = NodeId::new(self.nodes.len());
                self.nodes.push(SearchNode {
                    pos,
                    cost_from_start: cost,
                    heuristic_cost: heuristic(pos),
                    predecessor,
                    closed: false,
                });
                self.slots[slot] = Some(id);
                Relaxation::Inserted(id)
            }
            Some(id) => {
                let node = &mut self.nodes[id.index()];
                if node.closed || cost >= node.cost_from_start {
                    return Relaxation::Unchanged;
                }
                node.cost_from_start = cost;
                node.predecessor = predecessor;
                Relaxation::Improved(id)
            }
        }
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Cells from the root of `id`'s predecessor chain to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<Pos> {
        let mut cells = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            cells.push(node.pos);
            current = node.predecessor;
        }
        cells.reverse();
        cells
    }
}
