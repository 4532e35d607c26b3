use std::collections::HashMap;

use crate::error::Result;
use crate::topology::{MeshId, ModelStore, Shape, SolidId};

/// Tests whether a shape is a closed (watertight) boundary.
///
/// A solid is closed when every edge of its shell is used by exactly two face
/// boundaries; a mesh is closed when every undirected vertex pair spanned by a
/// triangle side is shared by exactly two triangles. A shape with no faces is
/// not closed.
pub struct IsClosed {
    shape: Shape,
}

impl IsClosed {
    /// Creates a new `IsClosed` query.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape references missing entities.
    pub fn execute(&self, store: &ModelStore) -> Result<bool> {
        match self.shape {
            Shape::Solid(id) => solid_is_closed(store, id),
            Shape::Mesh(id) => mesh_is_closed(store, id),
        }
    }
}

fn solid_is_closed(store: &ModelStore, id: SolidId) -> Result<bool> {
    let shell = store.shell(store.solid(id)?.shell)?;

    let mut uses = HashMap::new();
    for &face_id in &shell.faces {
        for oriented in &store.face(face_id)?.boundary {
            *uses.entry(oriented.edge).or_insert(0_usize) += 1;
        }
    }
    Ok(!uses.is_empty() && uses.values().all(|&count| count == 2))
}

fn mesh_is_closed(store: &ModelStore, id: MeshId) -> Result<bool> {
    let mesh = store.mesh(id)?;

    let mut uses = HashMap::new();
    for face in &mesh.faces {
        for i in 0..3 {
            let a = face[i];
            let b = face[(i + 1) % 3];
            let side = if a < b { (a, b) } else { (b, a) };
            *uses.entry(side).or_insert(0_usize) += 1;
        }
    }
    Ok(!uses.is_empty() && uses.values().all(|&count| count == 2))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::{MakeBox, MakeMeshBox};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn box_is_closed() {
        let mut store = ModelStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        assert!(IsClosed::new(Shape::Solid(solid)).execute(&store).unwrap());
    }

    #[test]
    fn box_with_removed_face_is_open() {
        let mut store = ModelStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let shell_id = store.solid(solid).unwrap().shell;
        store.shell_mut(shell_id).unwrap().faces.pop();

        assert!(!IsClosed::new(Shape::Solid(solid)).execute(&store).unwrap());
    }

    #[test]
    fn mesh_box_is_closed() {
        let mut store = ModelStore::new();
        let mesh = MakeMeshBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        assert!(IsClosed::new(Shape::Mesh(mesh)).execute(&store).unwrap());
    }

    #[test]
    fn mesh_with_dropped_triangle_is_open() {
        let mut store = ModelStore::new();
        let mesh = MakeMeshBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        store.mesh_mut(mesh).unwrap().faces.pop();

        assert!(!IsClosed::new(Shape::Mesh(mesh)).execute(&store).unwrap());
    }

    #[test]
    fn empty_mesh_is_not_closed() {
        let mut store = ModelStore::new();
        let mesh = store.add_mesh(crate::topology::MeshData::default());

        assert!(!IsClosed::new(Shape::Mesh(mesh)).execute(&store).unwrap());
    }
}
