use nalgebra::{Rotation3, Unit};

use crate::error::{OperationError, Result};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};
use crate::topology::{ModelStore, Shape};

use super::GeneralTransform;

/// Rotates a shape around an axis.
pub struct Rotate {
    shape: Shape,
    axis_origin: Point3,
    axis_direction: Vector3,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(shape: Shape, axis_origin: Point3, axis_direction: Vector3, angle: f64) -> Self {
        Self {
            shape,
            axis_origin,
            axis_direction,
            angle,
        }
    }

    /// Executes the rotation, modifying the shape in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis direction is zero-length.
    pub fn execute(&self, store: &mut ModelStore) -> Result<()> {
        if self.axis_direction.norm() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("rotation axis must be non-zero".into()).into(),
            );
        }
        let axis = Unit::new_normalize(self.axis_direction);

        // Translate to the axis origin, rotate, translate back.
        let t_neg = Matrix4::new_translation(&(-self.axis_origin.coords));
        let rot = Rotation3::from_axis_angle(&axis, self.angle).to_homogeneous();
        let t_pos = Matrix4::new_translation(&self.axis_origin.coords);

        GeneralTransform::new(self.shape, t_pos * rot * t_neg).execute(store)
    }
}
