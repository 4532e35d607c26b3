use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{
    EdgeData, FaceData, ModelStore, OrientedEdge, ShellData, SolidData, SolidId, VertexData,
};

/// Creates an axis-aligned box solid from two corner points.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Executes the operation, creating the box in the model store.
    ///
    /// The box has 8 vertices, 12 edges, and 6 quad faces whose boundary
    /// loops run counter-clockwise seen from outside.
    ///
    /// # Errors
    ///
    /// Returns an error if the corners do not span a positive extent on every
    /// axis.
    pub fn execute(&self, store: &mut ModelStore) -> Result<SolidId> {
        let (lo, hi) = (self.min_corner, self.max_corner);
        if hi.x - lo.x < TOLERANCE || hi.y - lo.y < TOLERANCE || hi.z - lo.z < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "box corners must span a positive extent on every axis".into(),
            )
            .into());
        }

        // Bottom ring then top ring, counter-clockwise seen from above.
        let corners = [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
        ];
        let v: Vec<_> = corners
            .iter()
            .map(|&point| store.add_vertex(VertexData::new(point)))
            .collect();

        // Bottom ring, top ring, then verticals.
        let segments: [(usize, usize); 12] = [
            (0, 1), (1, 2), (2, 3), (3, 0),
            (4, 5), (5, 6), (6, 7), (7, 4),
            (0, 4), (1, 5), (2, 6), (3, 7),
        ];
        let e: Vec<_> = segments
            .iter()
            .map(|&(start, end)| {
                store.add_edge(EdgeData {
                    start: v[start],
                    end: v[end],
                })
            })
            .collect();

        // Each face as (edge index, forward) loops, outward normals.
        let loops: [[(usize, bool); 4]; 6] = [
            [(3, false), (2, false), (1, false), (0, false)], // bottom, -z
            [(4, true), (5, true), (6, true), (7, true)],     // top, +z
            [(0, true), (9, true), (4, false), (8, false)],   // front, -y
            [(1, true), (10, true), (5, false), (9, false)],  // right, +x
            [(2, true), (11, true), (6, false), (10, false)], // back, +y
            [(3, true), (8, true), (7, false), (11, false)],  // left, -x
        ];
        let faces = loops
            .iter()
            .map(|face| {
                store.add_face(FaceData {
                    boundary: face
                        .iter()
                        .map(|&(edge, forward)| OrientedEdge::new(e[edge], forward))
                        .collect(),
                })
            })
            .collect();

        let shell = store.add_shell(ShellData { faces });
        Ok(store.add_solid(SolidData { shell }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn box_topology_counts() {
        let mut store = ModelStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        assert_eq!(store.solid_vertices(solid).unwrap().len(), 8);
        assert_eq!(store.solid_edges(solid).unwrap().len(), 12);
        let shell = store.solid(solid).unwrap().shell;
        assert_eq!(store.shell(shell).unwrap().faces.len(), 6);
    }

    #[test]
    fn flat_box_returns_error() {
        let mut store = ModelStore::new();
        let result = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0)).execute(&mut store);
        assert!(result.is_err());
    }

    #[test]
    fn inverted_box_returns_error() {
        let mut store = ModelStore::new();
        let result = MakeBox::new(p(1.0, 1.0, 1.0), p(0.0, 0.0, 0.0)).execute(&mut store);
        assert!(result.is_err());
    }
}
