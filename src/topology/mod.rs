pub mod brep;
pub mod mesh;

pub use brep::{
    EdgeData, EdgeId, FaceData, FaceId, OrientedEdge, ShellData, ShellId, SolidData, SolidId,
    VertexData, VertexId,
};
pub use mesh::{MeshData, MeshId};

use std::collections::HashSet;

use slotmap::SlotMap;

use crate::error::TopologyError;

/// The storage representation of a shape, used to discriminate which matching
/// rules apply. Solids and meshes are never compared against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A boundary-representation solid.
    Solid,
    /// An indexed triangle mesh.
    Mesh,
}

/// Handle to one shape in a [`ModelStore`], tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A solid entity.
    Solid(SolidId),
    /// A mesh entity.
    Mesh(MeshId),
}

impl Shape {
    /// Returns the kind of this shape.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Solid(_) => ShapeKind::Solid,
            Self::Mesh(_) => ShapeKind::Mesh,
        }
    }
}

/// Central arena that owns all model entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation.
#[derive(Debug, Default)]
pub struct ModelStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
    meshes: SlotMap<MeshId, MeshData>,
}

impl ModelStore {
    /// Creates a new, empty model store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    // --- Edge operations ---

    /// Inserts an edge and returns its ID.
    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        self.edges.insert(data)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    // --- Face operations ---

    /// Inserts a face and returns its ID.
    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    // --- Shell operations ---

    /// Inserts a shell and returns its ID.
    pub fn add_shell(&mut self, data: ShellData) -> ShellId {
        self.shells.insert(data)
    }

    /// Returns a reference to the shell data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn shell(&self, id: ShellId) -> Result<&ShellData, TopologyError> {
        self.shells
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("shell".into()))
    }

    /// Returns a mutable reference to the shell data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn shell_mut(&mut self, id: ShellId) -> Result<&mut ShellData, TopologyError> {
        self.shells
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("shell".into()))
    }

    // --- Solid operations ---

    /// Inserts a solid and returns its ID.
    pub fn add_solid(&mut self, data: SolidData) -> SolidId {
        self.solids.insert(data)
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, TopologyError> {
        self.solids
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("solid".into()))
    }

    // --- Mesh operations ---

    /// Inserts a mesh and returns its ID.
    pub fn add_mesh(&mut self, data: MeshData) -> MeshId {
        self.meshes.insert(data)
    }

    /// Returns a reference to the mesh data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn mesh(&self, id: MeshId) -> Result<&MeshData, TopologyError> {
        self.meshes
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("mesh".into()))
    }

    /// Returns a mutable reference to the mesh data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn mesh_mut(&mut self, id: MeshId) -> Result<&mut MeshData, TopologyError> {
        self.meshes
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("mesh".into()))
    }

    // --- Traversal helpers ---

    /// Collects the distinct edges of a solid, in first-encounter order over
    /// its shell's face boundaries.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced entity is missing from the store.
    pub fn solid_edges(&self, id: SolidId) -> Result<Vec<EdgeId>, TopologyError> {
        let shell = self.shell(self.solid(id)?.shell)?;

        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for &face_id in &shell.faces {
            for oriented in &self.face(face_id)?.boundary {
                if seen.insert(oriented.edge) {
                    edges.push(oriented.edge);
                }
            }
        }
        Ok(edges)
    }

    /// Collects the distinct vertices of a solid, in first-encounter order
    /// over its edges.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced entity is missing from the store.
    pub fn solid_vertices(&self, id: SolidId) -> Result<Vec<VertexId>, TopologyError> {
        let mut seen = HashSet::new();
        let mut vertices = Vec::new();
        for edge_id in self.solid_edges(id)? {
            let edge = self.edge(edge_id)?;
            for vertex in [edge.start, edge.end] {
                if seen.insert(vertex) {
                    vertices.push(vertex);
                }
            }
        }
        Ok(vertices)
    }
}
