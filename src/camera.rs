/*

    Declare the Camera capability consumed by the sizer,
    and a look-at perspective camera that provides it.

    The sizer only ever asks a camera for its view and
    projection matrices, so anything implementing Camera
    (an engine camera, a fixed matrix pair in tests) works.

    @date: Oct, 2025
    @author: bartu
*/


use crate::prelude::*;

pub trait Camera {
    fn view_matrix(&self) -> Matrix4;
    fn projection_matrix(&self) -> Matrix4;

    /// projection * view, i.e. world space to clip space
    fn view_projection(&self) -> Matrix4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl<C: Camera + ?Sized> Camera for &C {
    fn view_matrix(&self) -> Matrix4 {
        (**self).view_matrix()
    }

    fn projection_matrix(&self) -> Matrix4 {
        (**self).projection_matrix()
    }
}

/// Right handed camera looking from `position` towards `gaze_point`,
/// with an OpenGL style projection (NDC z in [-1, 1]).
#[derive(Debug, Deserialize, Clone)]
#[derive(SmartDefault)]
#[serde(default)]
pub struct PerspectiveCamera {
    #[default(Vector3::new(0.0, 0.0, 1.0))]
    #[serde(rename = "Position", deserialize_with = "deser_vec3")]
    pub position: Vector3,

    #[default(Vector3::ZERO)]
    #[serde(rename = "GazePoint", deserialize_with = "deser_vec3")]
    pub gaze_point: Vector3,

    #[default(Vector3::Y)]
    #[serde(rename = "Up", deserialize_with = "deser_vec3")]
    pub up: Vector3,

    // Vertical field of view in degrees
    #[default = 60.0]
    #[serde(rename = "FovY", deserialize_with = "deser_float")]
    pub fovy: Float,

    #[default = 0.1]
    #[serde(rename = "NearDistance", deserialize_with = "deser_float")]
    pub near_distance: Float,

    #[default = 1000.0]
    #[serde(rename = "FarDistance", deserialize_with = "deser_float")]
    pub far_distance: Float,

    // None until known; the scene fills it from the image resolution
    #[serde(rename = "Aspect", deserialize_with = "deser_opt_float")]
    pub aspect: Option<Float>,
}

impl PerspectiveCamera {
    pub fn new(position: Vector3, gaze_point: Vector3, up: Vector3, fovy: Float, near_distance: Float, far_distance: Float) -> Self {
        let cam = Self {
            position,
            gaze_point,
            up,
            fovy,
            near_distance,
            far_distance,
            aspect: None,
        };
        debug_assert!(cam.validate(), "Invalid camera {cam:?}");
        cam
    }

    pub fn with_aspect(mut self, aspect: Float) -> Self {
        self.aspect = Some(aspect);
        self
    }

    pub fn aspect(&self) -> Float {
        self.aspect.unwrap_or(1.0)
    }

    pub fn gaze_dir(&self) -> Vector3 {
        (self.gaze_point - self.position).normalize_or_zero()
    }

    /// False if the camera cannot produce a usable view/projection pair
    pub fn validate(&self) -> bool {
        let gaze = self.gaze_dir();
        gaze != Vector3::ZERO
            && !approx_zero(gaze.cross(self.up).length())
            && self.fovy > 0.0 && self.fovy < 180.0
            && self.near_distance > 0.0
            && self.far_distance > self.near_distance
    }
}

impl Camera for PerspectiveCamera {
    fn view_matrix(&self) -> Matrix4 {
        Matrix4::look_at_rh(self.position, self.gaze_point, self.up)
    }

    fn projection_matrix(&self) -> Matrix4 {
        Matrix4::perspective_rh_gl(self.fovy.to_radians(), self.aspect(), self.near_distance, self.far_distance)
    }
}

/// A camera that is nothing but a fixed pair of matrices
#[derive(Debug, Clone, Copy)]
pub struct MatrixCamera {
    pub view: Matrix4,
    pub projection: Matrix4,
}

impl Camera for MatrixCamera {
    fn view_matrix(&self) -> Matrix4 {
        self.view
    }

    fn projection_matrix(&self) -> Matrix4 {
        self.projection
    }
}
