use crate::error::Result;
use crate::math::TOLERANCE;
use crate::topology::{ModelStore, Shape};

use super::triangles::shape_triangles;

/// Computes the total surface area of a solid or mesh by summing the areas of
/// its boundary triangles.
pub struct SurfaceArea {
    shape: Shape,
}

impl SurfaceArea {
    /// Creates a new `SurfaceArea` query.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Executes the query. Returns `None` for degenerate geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape references missing or malformed entities.
    pub fn execute(&self, store: &ModelStore) -> Result<Option<f64>> {
        let triangles = shape_triangles(store, self.shape)?;

        let mut total = 0.0;
        for [v0, v1, v2] in &triangles {
            total += (v1 - v0).cross(&(v2 - v0)).norm() * 0.5;
        }

        if !total.is_finite() || total < TOLERANCE {
            return Ok(None);
        }
        Ok(Some(total))
    }
}
