/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Internal tolerance for degeneracy checks in the model layer.
///
/// This is not the matching tolerance: the comparator and scanner take their
/// tolerance explicitly from the caller and never read this constant.
pub const TOLERANCE: f64 = 1e-10;
