/*

    Local to world transforms.

    ModelTransform is the only thing the sizer needs from an
    object's transform: its 4x4 model matrix. Transform is a
    plain translation / rotation / scaling triple that can be
    read from JSON, composed in T * R * S order.

    @date: 13 Oct, 2025
    @author: Bartu
*/

use crate::prelude::*;

pub trait ModelTransform {
    fn model_matrix(&self) -> Matrix4;
}

impl ModelTransform for Matrix4 {
    fn model_matrix(&self) -> Matrix4 {
        *self
    }
}

impl<T: ModelTransform + ?Sized> ModelTransform for &T {
    fn model_matrix(&self) -> Matrix4 {
        (**self).model_matrix()
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[derive(SmartDefault)]
#[serde(default)]
pub struct Transform {
    #[default(Vector3::ZERO)]
    #[serde(rename = "Translation", deserialize_with = "deser_vec3")]
    pub translation: Vector3,

    // Given as "<angle in degrees> <axis x> <axis y> <axis z>" in JSON
    #[default(Quaternion::IDENTITY)]
    #[serde(rename = "Rotation", deserialize_with = "deser_rotation")]
    pub rotation: Quaternion,

    #[default(Vector3::ONE)]
    #[serde(rename = "Scaling", deserialize_with = "deser_vec3")]
    pub scaling: Vector3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vector3::ZERO,
        rotation: Quaternion::IDENTITY,
        scaling: Vector3::ONE,
    };

    pub fn from_translation(translation: Vector3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    pub fn with_scaling(mut self, scaling: Vector3) -> Self {
        self.scaling = scaling;
        self
    }

    /// Rotate by `angle_deg` degrees around `axis`. A zero axis
    /// leaves the rotation untouched.
    pub fn with_rotation(mut self, angle_deg: Float, axis: Vector3) -> Self {
        let axis = axis.normalize_or_zero();
        if axis == Vector3::ZERO {
            warn!("Rotation axis is zero, ignoring rotation of {angle_deg} degrees");
            return self;
        }
        self.rotation = Quaternion::from_axis_angle(axis, angle_deg.to_radians());
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl ModelTransform for Transform {
    fn model_matrix(&self) -> Matrix4 {
        Matrix4::from_scale_rotation_translation(self.scaling, self.rotation, self.translation)
    }
}
