use crate::error::{Result, TopologyError};
use crate::math::Point3;
use crate::topology::{MeshId, ModelStore, Shape, SolidId};

/// Collects the triangles of a shape's boundary as point triples.
///
/// Solid faces are planar polygons and are fan-triangulated about their first
/// boundary vertex; mesh faces are used as stored. Windings are preserved, so
/// consistently outward-wound input yields consistently outward triangles.
pub(super) fn shape_triangles(store: &ModelStore, shape: Shape) -> Result<Vec<[Point3; 3]>> {
    match shape {
        Shape::Solid(id) => solid_triangles(store, id),
        Shape::Mesh(id) => mesh_triangles(store, id),
    }
}

fn solid_triangles(store: &ModelStore, id: SolidId) -> Result<Vec<[Point3; 3]>> {
    let shell = store.shell(store.solid(id)?.shell)?;

    let mut triangles = Vec::new();
    for &face_id in &shell.faces {
        let boundary = &store.face(face_id)?.boundary;
        if boundary.len() < 3 {
            return Err(TopologyError::InvalidTopology(
                "face boundary has fewer than 3 edges".into(),
            )
            .into());
        }

        // The loop's i-th corner is the start of its i-th oriented edge.
        let mut corners = Vec::with_capacity(boundary.len());
        for oriented in boundary {
            let edge = store.edge(oriented.edge)?;
            let vertex = if oriented.forward { edge.start } else { edge.end };
            corners.push(store.vertex(vertex)?.point);
        }

        for i in 1..corners.len() - 1 {
            triangles.push([corners[0], corners[i], corners[i + 1]]);
        }
    }
    Ok(triangles)
}

fn mesh_triangles(store: &ModelStore, id: MeshId) -> Result<Vec<[Point3; 3]>> {
    let mesh = store.mesh(id)?;

    let mut triangles = Vec::with_capacity(mesh.faces.len());
    for face in &mesh.faces {
        let mut corners = [Point3::origin(); 3];
        for (corner, &index) in corners.iter_mut().zip(face) {
            *corner = *mesh.vertices.get(index as usize).ok_or_else(|| {
                TopologyError::InvalidTopology("mesh face index out of range".into())
            })?;
        }
        triangles.push(corners);
    }
    Ok(triangles)
}
