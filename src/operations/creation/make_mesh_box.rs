use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{MeshId, ModelStore};

use super::MakeMesh;

/// Creates an axis-aligned box as a closed triangle mesh: 8 shared vertices
/// and 12 outward-wound triangles.
pub struct MakeMeshBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeMeshBox {
    /// Creates a new `MakeMeshBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Executes the operation, creating the mesh in the model store.
    ///
    /// # Errors
    ///
    /// Returns an error if the corners do not span a positive extent on every
    /// axis.
    pub fn execute(&self, store: &mut ModelStore) -> Result<MeshId> {
        let (lo, hi) = (self.min_corner, self.max_corner);
        if hi.x - lo.x < TOLERANCE || hi.y - lo.y < TOLERANCE || hi.z - lo.z < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "box corners must span a positive extent on every axis".into(),
            )
            .into());
        }

        let vertices = vec![
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
        ];
        let faces = vec![
            [0, 3, 2], [0, 2, 1], // bottom, -z
            [4, 5, 6], [4, 6, 7], // top, +z
            [0, 1, 5], [0, 5, 4], // front, -y
            [1, 2, 6], [1, 6, 5], // right, +x
            [2, 3, 7], [2, 7, 6], // back, +y
            [3, 0, 4], [3, 4, 7], // left, -x
        ];

        MakeMesh::new(vertices, faces).execute(store)
    }
}
