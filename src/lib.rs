
pub mod aabb;
pub mod camera;
pub mod interval;
pub mod json_parser;
pub mod mesh;
pub mod numeric;
pub mod pixel;
pub mod quad;
pub mod scene;
pub mod size;
pub mod sizer;
pub mod transform;
pub mod viewport;

pub mod prelude;
