use crate::error::Result;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::{ModelStore, Shape};

use super::triangles::shape_triangles;

/// Volume mass properties of a shape.
#[derive(Debug, Clone, Copy)]
pub struct VolumeProperties {
    /// Enclosed volume (absolute value).
    pub volume: f64,
    /// Centroid of the enclosed volume.
    pub centroid: Point3,
}

/// Computes the volume and volume centroid of a solid or mesh.
///
/// Uses the signed tetrahedron method: for each boundary triangle, the signed
/// volume of the tetrahedron it spans with the origin is `v0 . (v1 x v2) / 6`,
/// and the tetrahedron's centroid is the mean of its four corners. Summing
/// signed contributions makes the result independent of where the shape sits
/// relative to the origin, provided windings are consistent.
pub struct MassProperties {
    shape: Shape,
}

impl MassProperties {
    /// Creates a new `MassProperties` query.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Executes the query. Returns `None` for degenerate geometry (no volume
    /// to speak of, or a non-finite accumulation).
    ///
    /// # Errors
    ///
    /// Returns an error if the shape references missing or malformed entities.
    pub fn execute(&self, store: &ModelStore) -> Result<Option<VolumeProperties>> {
        let triangles = shape_triangles(store, self.shape)?;

        let mut volume = 0.0;
        let mut moment = Vector3::zeros();
        for [v0, v1, v2] in &triangles {
            let signed = v0.coords.dot(&v1.coords.cross(&v2.coords)) / 6.0;
            volume += signed;
            moment += (v0.coords + v1.coords + v2.coords) * (signed / 4.0);
        }

        if !volume.is_finite() || volume.abs() < TOLERANCE {
            return Ok(None);
        }

        Ok(Some(VolumeProperties {
            volume: volume.abs(),
            centroid: Point3::from(moment / volume),
        }))
    }
}
