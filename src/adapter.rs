use crate::math::Point3;
use crate::operations::query::{BoundaryEdges, IsClosed, MassProperties, SurfaceArea};
use crate::topology::{MeshData, ModelStore, Shape};

/// One boundary edge of a solid, as consumed by signature extraction: the
/// edge's length and the start point of its curve.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryEdge {
    /// Length of the edge.
    pub length: f64,
    /// Start point of the edge's curve.
    pub start: Point3,
}

/// Read-only geometric queries the matching layer needs from a host model.
///
/// `None` from the mass-property queries signals degenerate or non-manifold
/// geometry; the matching layer treats it as "not a candidate" rather than an
/// error. Implementations should fold unknown or stale handles into the same
/// `None` / `false` / empty returns.
pub trait GeometryAdapter {
    /// Handle identifying one shape in the host model.
    type Handle: Copy;

    /// Whether the shape is a closed (watertight) boundary.
    fn is_closed(&self, shape: Self::Handle) -> bool;

    /// Volume and volume centroid, or `None` for degenerate geometry.
    fn volume_and_centroid(&self, shape: Self::Handle) -> Option<(f64, Point3)>;

    /// Total surface area, or `None` for degenerate geometry.
    fn area(&self, shape: Self::Handle) -> Option<f64>;

    /// The shape's boundary edges, in enumeration order. Empty for meshes.
    fn boundary_edges(&self, shape: Self::Handle) -> Vec<BoundaryEdge>;

    /// Number of faces.
    fn face_count(&self, shape: Self::Handle) -> usize;

    /// Number of vertices.
    fn vertex_count(&self, shape: Self::Handle) -> usize;
}

impl GeometryAdapter for ModelStore {
    type Handle = Shape;

    fn is_closed(&self, shape: Shape) -> bool {
        IsClosed::new(shape).execute(self).unwrap_or(false)
    }

    fn volume_and_centroid(&self, shape: Shape) -> Option<(f64, Point3)> {
        MassProperties::new(shape)
            .execute(self)
            .ok()
            .flatten()
            .map(|props| (props.volume, props.centroid))
    }

    fn area(&self, shape: Shape) -> Option<f64> {
        SurfaceArea::new(shape).execute(self).ok().flatten()
    }

    fn boundary_edges(&self, shape: Shape) -> Vec<BoundaryEdge> {
        match shape {
            Shape::Solid(id) => BoundaryEdges::new(id).execute(self).unwrap_or_default(),
            Shape::Mesh(_) => Vec::new(),
        }
    }

    fn face_count(&self, shape: Shape) -> usize {
        match shape {
            Shape::Solid(id) => self
                .solid(id)
                .and_then(|solid| self.shell(solid.shell))
                .map_or(0, |shell| shell.faces.len()),
            Shape::Mesh(id) => self.mesh(id).map_or(0, MeshData::face_count),
        }
    }

    fn vertex_count(&self, shape: Shape) -> usize {
        match shape {
            Shape::Solid(id) => self.solid_vertices(id).map_or(0, |vertices| vertices.len()),
            Shape::Mesh(id) => self.mesh(id).map_or(0, MeshData::vertex_count),
        }
    }
}
