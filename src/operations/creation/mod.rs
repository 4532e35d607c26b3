mod make_box;
mod make_mesh;
mod make_mesh_box;

pub use make_box::MakeBox;
pub use make_mesh::MakeMesh;
pub use make_mesh_box::MakeMeshBox;
