use crate::error::Result;
use crate::math::{Matrix4, Vector3};
use crate::topology::{ModelStore, Shape};

use super::GeneralTransform;

/// Translates a shape by a displacement vector.
pub struct Translate {
    shape: Shape,
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(shape: Shape, displacement: Vector3) -> Self {
        Self {
            shape,
            displacement,
        }
    }

    /// Executes the translation, modifying the shape in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced entity is missing from the store.
    pub fn execute(&self, store: &mut ModelStore) -> Result<()> {
        GeneralTransform::new(self.shape, Matrix4::new_translation(&self.displacement))
            .execute(store)
    }
}
