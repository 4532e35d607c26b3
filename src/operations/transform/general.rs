use crate::error::Result;
use crate::math::Matrix4;
use crate::topology::{ModelStore, Shape};

/// Applies an arbitrary 4x4 transformation matrix to a shape.
pub struct GeneralTransform {
    shape: Shape,
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(shape: Shape, matrix: Matrix4) -> Self {
        Self { shape, matrix }
    }

    /// Executes the transformation, modifying the shape's vertex positions
    /// in-place. Edges and faces are defined purely by their vertices, so no
    /// further rebuilding is needed.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced entity is missing from the store.
    pub fn execute(&self, store: &mut ModelStore) -> Result<()> {
        match self.shape {
            Shape::Solid(id) => {
                for vertex_id in store.solid_vertices(id)? {
                    let vertex = store.vertex_mut(vertex_id)?;
                    vertex.point = self.matrix.transform_point(&vertex.point);
                }
            }
            Shape::Mesh(id) => {
                for point in &mut store.mesh_mut(id)?.vertices {
                    *point = self.matrix.transform_point(point);
                }
            }
        }
        Ok(())
    }
}
