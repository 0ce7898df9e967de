//! Residual graph builder.

use std::collections::HashMap;

use mf_core::{EdgeId, MfResult, NodeId, bounded_capacity};
use tracing::debug;

use crate::graph::{Building, Edge, EdgeKind, ResidualGraph, Track};
use crate::registry::BuildingRegistry;
use crate::validate;

/// Builder for constructing a residual graph.
///
/// Register buildings with `add_building`, then feed tracks with
/// `add_track`, then call `build()` to validate and freeze the structure.
/// A track is only kept if both of its buildings are registered at the time
/// it is added.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    registry: BuildingRegistry,
    edges: Vec<Edge>,
    dropped_tracks: usize,
    duplicate_buildings: usize,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a building and return its node, or `None` if the ID was
    /// already registered (first occurrence wins).
    pub fn add_building(&mut self, building: &Building) -> MfResult<Option<NodeId>> {
        let node = self.registry.insert(building.id, building.occupancy)?;
        if node.is_none() {
            self.duplicate_buildings += 1;
            debug!(building = %building.id, "ignoring duplicate building");
        }
        Ok(node)
    }

    /// Register every building in order.
    pub fn add_buildings<'a>(&mut self, buildings: impl IntoIterator<Item = &'a Building>) -> MfResult<()> {
        for building in buildings {
            self.add_building(building)?;
        }
        Ok(())
    }

    /// Add the residual pair for a track.
    ///
    /// Returns the forward edge, or `None` when either endpoint is unknown,
    /// in which case nothing is added. Fails when the pair would not fit in
    /// the edge handle space.
    pub fn add_track(&mut self, track: &Track) -> MfResult<Option<EdgeId>> {
        let (Some(from), Some(to)) = (
            self.registry.node_id(track.from),
            self.registry.node_id(track.to),
        ) else {
            self.dropped_tracks += 1;
            debug!(track = %track.id, from = %track.from, to = %track.to, "dropping track with unknown building");
            return Ok(None);
        };

        let capacity = bounded_capacity(
            track.capacity,
            self.registry.nodes()[from.slot()].occupancy,
            self.registry.nodes()[to.slot()].occupancy,
        );

        let forward_id = EdgeId::try_from_usize(self.edges.len())?;
        let reverse_id = EdgeId::try_from_usize(self.edges.len() + 1)?;

        // Forward edge
        self.edges.push(Edge {
            id: forward_id,
            from,
            to,
            kind: EdgeKind::Forward,
            track: track.id,
            capacity,
            pair: reverse_id,
            residual: capacity,
        });

        // Reverse edge
        self.edges.push(Edge {
            id: reverse_id,
            from: to,
            to: from,
            kind: EdgeKind::Reverse,
            track: track.id,
            capacity: 0,
            pair: forward_id,
            residual: 0,
        });

        Ok(Some(forward_id))
    }

    /// Add every track in order.
    pub fn add_tracks<'a>(&mut self, tracks: impl IntoIterator<Item = &'a Track>) -> MfResult<()> {
        for track in tracks {
            self.add_track(track)?;
        }
        Ok(())
    }

    /// Number of tracks skipped so far because of an unknown building.
    pub fn dropped_tracks(&self) -> usize {
        self.dropped_tracks
    }

    /// Build and validate the graph.
    ///
    /// This performs validation and constructs compact adjacency lists.
    pub fn build(self) -> MfResult<ResidualGraph> {
        validate::validate_registry(&self.registry)?;
        validate::validate_edges(&self.registry, &self.edges)?;

        // Build adjacency lists: node -> [outgoing edges]
        let (node_edge_offsets, node_edges) = Self::build_adjacency(&self.registry, &self.edges);

        validate::validate_adjacency(&self.registry, &self.edges, &node_edge_offsets, &node_edges)?;

        debug!(
            buildings = self.registry.len(),
            residual_pairs = self.edges.len() / 2,
            dropped_tracks = self.dropped_tracks,
            duplicate_buildings = self.duplicate_buildings,
            "built residual graph"
        );

        Ok(ResidualGraph {
            registry: self.registry,
            edges: self.edges,
            node_edge_offsets,
            node_edges,
        })
    }

    /// Build compact adjacency lists: for each node, collect its outgoing edges.
    fn build_adjacency(registry: &BuildingRegistry, edges: &[Edge]) -> (Vec<usize>, Vec<EdgeId>) {
        // Group edges by origin node
        let mut node_to_edges: HashMap<NodeId, Vec<EdgeId>> = HashMap::new();
        for edge in edges {
            node_to_edges.entry(edge.from).or_default().push(edge.id);
        }

        // Edge IDs follow creation order, so this keeps track order
        for edge_list in node_to_edges.values_mut() {
            edge_list.sort_by_key(|e| e.index());
        }

        // Build offsets and flat list
        let mut offsets = Vec::with_capacity(registry.len() + 1);
        let mut flat_edges = Vec::with_capacity(edges.len());
        offsets.push(0);

        for node in registry.nodes() {
            if let Some(edge_list) = node_to_edges.get(&node.id) {
                flat_edges.extend_from_slice(edge_list);
            }
            offsets.push(flat_edges.len());
        }

        (offsets, flat_edges)
    }
}
