use crate::adapter::BoundaryEdge;
use crate::error::Result;
use crate::topology::{ModelStore, SolidId};

/// Enumerates the boundary edges of a solid.
///
/// Edges appear once each, in first-encounter order over the shell's face
/// boundaries. Each entry carries the edge's length and the position of its
/// start vertex (the start point of the edge's curve, regardless of how any
/// face traverses it).
pub struct BoundaryEdges {
    solid: SolidId,
}

impl BoundaryEdges {
    /// Creates a new `BoundaryEdges` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid references missing entities.
    pub fn execute(&self, store: &ModelStore) -> Result<Vec<BoundaryEdge>> {
        let mut edges = Vec::new();
        for edge_id in store.solid_edges(self.solid)? {
            let edge = store.edge(edge_id)?;
            let start = store.vertex(edge.start)?.point;
            let end = store.vertex(edge.end)?.point;
            edges.push(BoundaryEdge {
                length: (end - start).norm(),
                start,
            });
        }
        Ok(edges)
    }
}
