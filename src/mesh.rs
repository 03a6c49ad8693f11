/*


@date: Oct-Nov 2025
@author: Bartu

*/

use crate::aabb::{AxisAlignedBoundingBox, BBoxable};
use crate::prelude::*;
use crate::quad::Renderable;
use crate::transform::Transform;


/// Named list of local-space positions placed in the world by a transform.
/// Connectivity does not matter for sizing, so faces are not kept.
#[derive(Debug, Deserialize, Clone)]
#[derive(SmartDefault)]
#[serde(default)]
pub struct Mesh {
    #[default = "unnamed"]
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Positions", deserialize_with = "deser_vecvec3")]
    pub positions: Vec<Vector3>,

    #[serde(rename = "Transform")]
    pub transform: Transform,
}

impl Mesh {
    pub fn new(name: impl Into<String>, positions: Vec<Vector3>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            positions,
            transform,
        }
    }
}

impl BBoxable for Mesh {
    fn get_bbox(&self) -> AxisAlignedBoundingBox {
        AxisAlignedBoundingBox::from_positions(&self.positions)
    }
}

impl Renderable for Mesh {
    type Transform = Transform;

    fn xyz_positions(&self) -> &[Vector3] {
        &self.positions
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_flat_position_string() {
        let json = r#"{
            "Name": "tri",
            "Positions": "0 0 0  1 0 0  0 1 0",
            "Transform": { "Translation": "0 0 -3" }
        }"#;
        let mesh: Mesh = serde_json::from_str(json).unwrap();
        assert_eq!(mesh.name, "tri");
        assert_eq!(mesh.positions.len(), 3);
        assert_eq!(mesh.positions[1], Vector3::X);
        assert_eq!(mesh.transform.translation, Vector3::new(0.0, 0.0, -3.0));

        let bbox = mesh.get_bbox();
        assert_eq!(bbox.min, Vector3::ZERO);
        assert_eq!(bbox.max, Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn deserializes_position_arrays() {
        let json = r#"{ "Positions": [[0, 0, 0], ["1", "2", "3"]] }"#;
        let mesh: Mesh = serde_json::from_str(json).unwrap();
        assert_eq!(mesh.name, "unnamed");
        assert_eq!(mesh.positions, vec![Vector3::ZERO, Vector3::new(1.0, 2.0, 3.0)]);
        assert!(mesh.transform.is_identity());
    }

    #[test]
    fn rejects_incomplete_triplet() {
        let json = r#"{ "Positions": "0 0 0 1 1" }"#;
        assert!(serde_json::from_str::<Mesh>(json).is_err());
    }
}
