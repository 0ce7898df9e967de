//! Core graph data structures.

use mf_core::{BuildingId, Capacity, EdgeId, Flow, NodeId, TrackId};

use crate::registry::BuildingRegistry;

/// A building as supplied by the caller: an id and how many people it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Building {
    pub id: BuildingId,
    pub occupancy: Capacity,
}

impl Building {
    pub fn new(id: BuildingId, occupancy: Capacity) -> Self {
        Self { id, occupancy }
    }
}

/// A directed track between two buildings.
///
/// `cost` is only consulted by network planning; the flow engine looks at
/// `capacity` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub from: BuildingId,
    pub to: BuildingId,
    pub cost: Capacity,
    pub capacity: Capacity,
}

impl Track {
    /// Create a track with unit cost.
    pub fn new(id: TrackId, from: BuildingId, to: BuildingId, capacity: Capacity) -> Self {
        Self {
            id,
            from,
            to,
            cost: 1,
            capacity,
        }
    }

    pub fn with_cost(mut self, cost: Capacity) -> Self {
        self.cost = cost;
        self
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Direction of an edge within its residual pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Follows the track direction; capacity is the bounded track capacity.
    Forward,
    /// Undo edge; capacity 0, residual equals the flow on its forward edge.
    Reverse,
}

/// One half of a residual pair, stored in the graph's edge arena.
///
/// The pair is linked by index: `pair` is the arena slot of the other half.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,
    /// Track that produced this pair.
    pub track: TrackId,
    /// Fixed at construction. Always 0 for reverse edges.
    pub capacity: Capacity,
    pub pair: EdgeId,
    pub(crate) residual: Capacity,
}

impl Edge {
    /// Remaining capacity that may still be pushed along this edge.
    pub fn residual(&self) -> Capacity {
        self.residual
    }

    pub fn is_forward(&self) -> bool {
        self.kind == EdgeKind::Forward
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// The residual graph: building registry, edge arena and compact adjacency.
///
/// Structure is frozen by [`crate::NetworkBuilder::build`]. Afterwards only
/// residual capacities change, through [`ResidualGraph::push_flow`].
#[derive(Debug, Clone)]
pub struct ResidualGraph {
    pub(crate) registry: BuildingRegistry,
    pub(crate) edges: Vec<Edge>,

    /// Offsets for node->edge adjacency: node i's outgoing edges are in
    /// node_edges[node_edge_offsets[i]..node_edge_offsets[i+1]].
    pub(crate) node_edge_offsets: Vec<usize>,

    /// Flat list of outgoing edge IDs, grouped by node, in track order.
    pub(crate) node_edges: Vec<EdgeId>,
}

impl ResidualGraph {
    /// Build a graph in one go: every building first, then every track.
    pub fn from_parts(buildings: &[Building], tracks: &[Track]) -> mf_core::MfResult<Self> {
        let mut builder = crate::NetworkBuilder::new();
        builder.add_buildings(buildings)?;
        builder.add_tracks(tracks)?;
        builder.build()
    }

    /// Return the building registry.
    pub fn registry(&self) -> &BuildingRegistry {
        &self.registry
    }

    /// Return all edges, forward and reverse, in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.slot())
    }

    /// Iterate over the forward half of every residual pair.
    pub fn forward_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.is_forward())
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn out_edges(&self, node: NodeId) -> &[EdgeId] {
        let idx = node.slot();
        if idx >= self.registry.len() {
            return &[];
        }
        let start = self.node_edge_offsets[idx];
        let end = self.node_edge_offsets[idx + 1];
        &self.node_edges[start..end]
    }

    /// Arena node for a building, if registered.
    pub fn node_of(&self, building: BuildingId) -> Option<NodeId> {
        self.registry.node_id(building)
    }

    /// Flow currently carried by a forward edge (0 for reverse edges).
    pub fn flow_on(&self, id: EdgeId) -> Flow {
        match self.edge(id) {
            Some(edge) if edge.is_forward() => Flow::from(edge.capacity - edge.residual),
            _ => 0,
        }
    }

    /// Push `amount` along an edge: its residual shrinks and its pair's grows.
    ///
    /// This is the only way residual capacities change.
    ///
    /// # Panics
    ///
    /// Panics if `amount` exceeds the edge's residual capacity. Callers push
    /// at most the bottleneck of a path they just found, so this indicates a
    /// broken accumulator rather than bad input.
    pub fn push_flow(&mut self, id: EdgeId, amount: Capacity) {
        let edge = &mut self.edges[id.slot()];
        assert!(
            amount <= edge.residual,
            "push of {amount} exceeds residual {} on edge {id}",
            edge.residual
        );
        edge.residual -= amount;
        let pair = edge.pair;
        self.edges[pair.slot()].residual += amount;
    }

    /// Re-run structural validation on the current state.
    ///
    /// Checks pair symmetry and that every pair's residuals still sum to the
    /// forward capacity.
    pub fn check_invariants(&self) -> mf_core::MfResult<()> {
        crate::validate::validate_registry(&self.registry)?;
        crate::validate::validate_edges(&self.registry, &self.edges)?;
        crate::validate::validate_adjacency(
            &self.registry,
            &self.edges,
            &self.node_edge_offsets,
            &self.node_edges,
        )
    }
}
