//! Building registry.
//!
//! Maps caller-supplied building IDs to contiguous arena nodes (0..N) and
//! keeps each building's occupancy limit.

use std::collections::HashMap;

use mf_core::{BuildingId, Capacity, MfResult, NodeId};

/// A registered building: arena handle plus the data the builder needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub building: BuildingId,
    pub occupancy: Capacity,
}

/// Registry providing O(1) lookup between building IDs and arena nodes.
#[derive(Debug, Clone, Default)]
pub struct BuildingRegistry {
    /// Contiguous list of nodes (index -> Node).
    nodes: Vec<Node>,

    /// Reverse lookup: BuildingId -> NodeId.
    lookup: HashMap<BuildingId, NodeId>,
}

impl BuildingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a building. The first registration of an ID wins; later
    /// ones are ignored and return `Ok(None)`.
    ///
    /// Fails only when the registry already holds as many buildings as a
    /// [`NodeId`] can address.
    pub fn insert(&mut self, building: BuildingId, occupancy: Capacity) -> MfResult<Option<NodeId>> {
        if self.lookup.contains_key(&building) {
            return Ok(None);
        }
        let id = NodeId::try_from_usize(self.nodes.len())?;
        self.nodes.push(Node {
            id,
            building,
            occupancy,
        });
        self.lookup.insert(building, id);
        Ok(Some(id))
    }

    /// Number of registered buildings.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, building: BuildingId) -> bool {
        self.lookup.contains_key(&building)
    }

    /// Arena node of a building, if registered.
    pub fn node_id(&self, building: BuildingId) -> Option<NodeId> {
        self.lookup.get(&building).copied()
    }

    /// Occupancy limit of a building, if registered.
    pub fn occupancy(&self, building: BuildingId) -> Option<Capacity> {
        self.node_id(building).map(|id| self.nodes[id.slot()].occupancy)
    }

    /// Get a node by arena ID (returns None if out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    /// All nodes in registration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn lookup_len(&self) -> usize {
        self.lookup.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_basic() {
        let mut registry = BuildingRegistry::new();
        let n1 = registry.insert(BuildingId(10), 100).unwrap().unwrap();
        let n2 = registry.insert(BuildingId(20), 200).unwrap().unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.node_id(BuildingId(10)), Some(n1));
        assert_eq!(registry.node(n2).map(|n| n.building), Some(BuildingId(20)));
        assert_eq!(registry.occupancy(BuildingId(20)), Some(200));
        assert!(registry.contains(BuildingId(10)));
    }

    #[test]
    fn registry_first_occurrence_wins() {
        let mut registry = BuildingRegistry::new();
        assert!(registry.insert(BuildingId(1), 100).unwrap().is_some());
        assert_eq!(registry.insert(BuildingId(1), 5), Ok(None));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.occupancy(BuildingId(1)), Some(100));
    }

    #[test]
    fn registry_unknown_building() {
        let registry = BuildingRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.occupancy(BuildingId(999)), None);
        assert_eq!(registry.node_id(BuildingId(999)), None);
        assert!(registry.node(NodeId::from_index(0)).is_none());
    }

    #[test]
    fn registry_contiguous() {
        let mut registry = BuildingRegistry::new();
        for raw in [7_u32, 3, 11] {
            registry.insert(BuildingId(raw), raw * 10).unwrap();
        }

        // All indices should be 0..N in registration order
        let slots: Vec<Option<u32>> = [7, 3, 11]
            .map(|raw| registry.node_id(BuildingId(raw)).map(NodeId::index))
            .to_vec();
        assert_eq!(slots, vec![Some(0), Some(1), Some(2)]);
    }
}
