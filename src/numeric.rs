/*

    Declare numeric types used throughout this crate.

    Everything here runs on the per-frame path next to the GPU,
    so computations are single precision. If you switch to f64,
    update Float together with the vector and matrix aliases:
    pub type Float = f64;
    pub type Vector3 = DVec3;

    @date: 2 Oct, 2025
    @author: Bartu
*/

use bevy_math::{Mat4, Quat, Vec2, Vec3, Vec4};
pub type Float = f32; // WARNING: If you want to change it to f64, don't forget to update the vector and matrix types
pub type Vector2 = Vec2;
pub type Vector3 = Vec3;
pub type Vector4 = Vec4;
pub type Matrix4 = Mat4;
pub type Quaternion = Quat;

pub fn approx_zero(x: Float) -> bool {
    x.abs() < 1e-6
}

/// Relative comparison, handy for pixel values that are in the hundreds
pub fn approx_eq(a: Float, b: Float, tolerance: Float) -> bool {
    (a - b).abs() <= tolerance * (1.0 as Float).max(a.abs()).max(b.abs())
}

pub fn transform_point(mat: &Matrix4, v: &Vector3) -> Vector3 {
    let v4 = Vector4::new(v.x, v.y, v.z, 1.0);
    let r = *mat * v4;
    Vector3::new(r.x, r.y, r.z)
}

/// Same result as transform_point for affine matrices, but skips the
/// fourth row: world = col0 * x + col1 * y + col2 * z + col3
#[inline]
pub fn transform_point_affine(mat: &Matrix4, v: &Vector3) -> Vector3 {
    let col0 = mat.x_axis.truncate(); // X basis vector
    let col1 = mat.y_axis.truncate(); // Y basis vector
    let col2 = mat.z_axis.truncate(); // Z basis vector
    let col3 = mat.w_axis.truncate(); // Translation
    col0 * v.x + col1 * v.y + col2 * v.z + col3
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affine_transform_matches_homogeneous() {
        let mat = Matrix4::from_scale_rotation_translation(
            Vector3::new(2.0, 0.5, 3.0),
            Quaternion::from_axis_angle(Vector3::new(1.0, 1.0, 0.0).normalize(), 0.7),
            Vector3::new(-4.0, 1.5, 10.0),
        );
        let p = Vector3::new(0.3, -1.2, 2.5);

        let full = transform_point(&mat, &p);
        let fast = transform_point_affine(&mat, &p);
        assert!((full - fast).length() < 1e-5, "{full} vs {fast}");
    }

    #[test]
    fn relative_tolerance() {
        assert!(approx_eq(400.0, 400.01, 1e-4));
        assert!(!approx_eq(400.0, 401.0, 1e-4));
        assert!(approx_zero(1e-8));
    }
}
