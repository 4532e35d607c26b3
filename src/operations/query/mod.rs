mod area;
mod boundary_edges;
mod is_closed;
mod mass_properties;
mod triangles;

pub use area::SurfaceArea;
pub use boundary_edges::BoundaryEdges;
pub use is_closed::IsClosed;
pub use mass_properties::{MassProperties, VolumeProperties};
