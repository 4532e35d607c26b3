use crate::adapter::GeometryAdapter;
use crate::error::ExtractionFailure;
use crate::math::Point3;
use crate::topology::ShapeKind;

/// Numeric and topological fingerprint of one solid, used for tolerant
/// comparison. Treat as a read-only snapshot once extracted.
#[derive(Debug, Clone)]
pub struct SolidSignature {
    /// Enclosed volume.
    pub volume: f64,
    /// Total surface area.
    pub area: f64,
    /// Volume centroid; only used to derive `edge_start_distances`.
    pub centroid: Point3,
    /// Number of boundary edges.
    pub edge_count: usize,
    /// Sum of all boundary edge lengths.
    pub total_edge_length: f64,
    /// Distance from each boundary edge's start point to the centroid, in
    /// edge-enumeration order. Always `edge_count` entries.
    pub edge_start_distances: Vec<f64>,
}

/// Numeric and topological fingerprint of one mesh.
///
/// Meshes carry no edge-distance data: beyond volume and area, only face and
/// vertex counts discriminate. A deliberate gap, not an oversight to extend.
#[derive(Debug, Clone)]
pub struct MeshSignature {
    /// Enclosed volume.
    pub volume: f64,
    /// Total surface area.
    pub area: f64,
    /// Volume centroid.
    pub centroid: Point3,
    /// Number of faces.
    pub face_count: usize,
    /// Number of vertices.
    pub vertex_count: usize,
}

/// Derived fingerprint of one geometric object, tagged by shape kind.
///
/// Signatures of different kinds are never comparable; the comparator rejects
/// such a pairing as a programming error rather than reporting a non-match.
#[derive(Debug, Clone)]
pub enum Signature {
    /// Signature of a boundary-representation solid.
    Solid(SolidSignature),
    /// Signature of a triangle mesh.
    Mesh(MeshSignature),
}

impl Signature {
    /// Returns the kind of shape this signature was extracted from.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Solid(_) => ShapeKind::Solid,
            Self::Mesh(_) => ShapeKind::Mesh,
        }
    }

    /// Returns the enclosed volume.
    #[must_use]
    pub fn volume(&self) -> f64 {
        match self {
            Self::Solid(solid) => solid.volume,
            Self::Mesh(mesh) => mesh.volume,
        }
    }

    /// Returns the total surface area.
    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Self::Solid(solid) => solid.area,
            Self::Mesh(mesh) => mesh.area,
        }
    }
}

/// Extracts the [`Signature`] of one shape through a [`GeometryAdapter`].
///
/// The declared kind comes from the caller (it is a property of how the shape
/// is stored, not something this operation infers). Extraction issues only
/// read-only adapter queries and does not take a tolerance.
pub struct ExtractSignature<H> {
    shape: H,
    kind: ShapeKind,
}

impl<H: Copy> ExtractSignature<H> {
    /// Creates a new `ExtractSignature` operation.
    #[must_use]
    pub fn new(shape: H, kind: ShapeKind) -> Self {
        Self { shape, kind }
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionFailure`] when a mass-property query reports no
    /// result (degenerate or non-manifold geometry). Callers treat this as
    /// "not a candidate", never as a fatal error.
    pub fn execute<A>(&self, adapter: &A) -> Result<Signature, ExtractionFailure>
    where
        A: GeometryAdapter<Handle = H>,
    {
        let (volume, centroid) = adapter
            .volume_and_centroid(self.shape)
            .ok_or(ExtractionFailure::Volume)?;
        let area = adapter.area(self.shape).ok_or(ExtractionFailure::Area)?;

        match self.kind {
            ShapeKind::Solid => {
                let edges = adapter.boundary_edges(self.shape);
                let total_edge_length = edges.iter().map(|edge| edge.length).sum();
                let edge_start_distances = edges
                    .iter()
                    .map(|edge| (edge.start - centroid).norm())
                    .collect::<Vec<_>>();

                Ok(Signature::Solid(SolidSignature {
                    volume,
                    area,
                    centroid,
                    edge_count: edges.len(),
                    total_edge_length,
                    edge_start_distances,
                }))
            }
            ShapeKind::Mesh => Ok(Signature::Mesh(MeshSignature {
                volume,
                area,
                centroid,
                face_count: adapter.face_count(self.shape),
                vertex_count: adapter.vertex_count(self.shape),
            })),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::{MakeBox, MakeMesh, MakeMeshBox};
    use crate::topology::{ModelStore, Shape};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn unit_cube_signature() {
        let mut store = ModelStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        let signature = ExtractSignature::new(Shape::Solid(solid), ShapeKind::Solid)
            .execute(&store)
            .unwrap();
        let Signature::Solid(solid) = signature else {
            panic!("expected a solid signature");
        };

        assert_relative_eq!(solid.volume, 1.0, epsilon = 1e-9);
        assert_relative_eq!(solid.area, 6.0, epsilon = 1e-9);
        assert_eq!(solid.edge_count, 12);
        assert_eq!(solid.edge_start_distances.len(), 12);
        assert_relative_eq!(solid.total_edge_length, 12.0, epsilon = 1e-9);
        // Each corner sits sqrt(3)/2 from the cube center.
        for &distance in &solid.edge_start_distances {
            assert_relative_eq!(distance, 0.75_f64.sqrt(), epsilon = 1e-9);
        }
    }

    #[test]
    fn mesh_box_signature() {
        let mut store = ModelStore::new();
        let mesh = MakeMeshBox::new(p(0.0, 0.0, 0.0), p(1.0, 2.0, 3.0))
            .execute(&mut store)
            .unwrap();

        let signature = ExtractSignature::new(Shape::Mesh(mesh), ShapeKind::Mesh)
            .execute(&store)
            .unwrap();
        let Signature::Mesh(mesh) = signature else {
            panic!("expected a mesh signature");
        };

        assert_relative_eq!(mesh.volume, 6.0, epsilon = 1e-9);
        assert_relative_eq!(mesh.area, 22.0, epsilon = 1e-9);
        assert_eq!(mesh.face_count, 12);
        assert_eq!(mesh.vertex_count, 8);
    }

    #[test]
    fn degenerate_mesh_fails_extraction() {
        let mut store = ModelStore::new();
        let mesh = MakeMesh::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)],
            vec![[0, 1, 2], [0, 2, 1]],
        )
        .execute(&mut store)
        .unwrap();

        let result = ExtractSignature::new(Shape::Mesh(mesh), ShapeKind::Mesh).execute(&store);
        assert_eq!(result.unwrap_err(), ExtractionFailure::Volume);
    }
}
