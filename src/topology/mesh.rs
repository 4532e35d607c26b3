use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a mesh in the model store.
    pub struct MeshId;
}

/// Data associated with an indexed triangle mesh.
///
/// Faces index into `vertices`; a vertex may be shared by any number of
/// faces. Face windings are expected to be consistent, with normals pointing
/// out of the enclosed volume.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle faces as index triples into `vertices`.
    pub faces: Vec<[u32; 3]>,
}

impl MeshData {
    /// Creates a new mesh from raw vertex and face data.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Returns the number of triangle faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
