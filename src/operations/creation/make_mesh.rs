use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::topology::{MeshData, MeshId, ModelStore};

/// Creates a triangle mesh from raw vertex and face data.
pub struct MakeMesh {
    vertices: Vec<Point3>,
    faces: Vec<[u32; 3]>,
}

impl MakeMesh {
    /// Creates a new `MakeMesh` operation.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Executes the operation, creating the mesh in the model store.
    ///
    /// # Errors
    ///
    /// Returns an error if any face indexes a vertex that does not exist.
    pub fn execute(&self, store: &mut ModelStore) -> Result<MeshId> {
        let vertex_count = self.vertices.len();
        for face in &self.faces {
            if face.iter().any(|&index| index as usize >= vertex_count) {
                return Err(OperationError::InvalidInput(format!(
                    "face {face:?} indexes past the last vertex ({vertex_count} vertices)"
                ))
                .into());
            }
        }

        Ok(store.add_mesh(MeshData::new(self.vertices.clone(), self.faces.clone())))
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
    fn tetrahedron_counts() {
        let mut store = ModelStore::new();
        let mesh = MakeMesh::new(
            vec![
                p(0.0, 0.0, 0.0),
                p(1.0, 0.0, 0.0),
                p(0.0, 1.0, 0.0),
                p(0.0, 0.0, 1.0),
            ],
            vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]],
        )
        .execute(&mut store)
        .unwrap();

        let data = store.mesh(mesh).unwrap();
        assert_eq!(data.vertex_count(), 4);
        assert_eq!(data.face_count(), 4);
    }

    #[test]
    fn out_of_range_index_returns_error() {
        let mut store = ModelStore::new();
        let result = MakeMesh::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)],
            vec![[0, 1, 3]],
        )
        .execute(&mut store);
        assert!(result.is_err());
    }
}
