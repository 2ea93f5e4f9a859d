//! Conversion between rigid-body poses and homogeneous matrices.
//!
//! A pose ([`Isometry3`]) and a 4×4 homogeneous transformation matrix are
//! equivalent representations of the same rigid-body transform; downstream
//! forward-kinematics code consumes the matrix form. The conversions are
//! mutually inverse up to floating-point rounding and have no failure modes.

use nalgebra::{Isometry3, Matrix4, Rotation3, Translation3, UnitQuaternion};

/// Convert a pose into a 4×4 homogeneous transformation matrix.
///
/// The matrix starts from the identity, so the bottom row is `[0, 0, 0, 1]`
/// before the rotation block (top-left 3×3) and translation (column 3,
/// rows 0–2) are written in.
pub fn pose_to_matrix(pose: &Isometry3<f64>) -> Matrix4<f64> {
    let mut matrix = Matrix4::identity();
    matrix
        .fixed_view_mut::<3, 3>(0, 0)
        .copy_from(pose.rotation.to_rotation_matrix().matrix());
    matrix
        .fixed_view_mut::<3, 1>(0, 3)
        .copy_from(&pose.translation.vector);
    matrix
}

/// Extract the pose encoded in a 4×4 homogeneous transformation matrix.
pub fn matrix_to_pose(matrix: &Matrix4<f64>) -> Isometry3<f64> {
    let rotation = Rotation3::from_matrix_unchecked(matrix.fixed_view::<3, 3>(0, 0).into_owned());
    let translation = Translation3::from(matrix.fixed_view::<3, 1>(0, 3).into_owned());
    Isometry3::from_parts(translation, UnitQuaternion::from_rotation_matrix(&rotation))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
