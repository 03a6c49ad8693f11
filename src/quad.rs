/*

    Output of the screen-space quad builder and the capability
    it needs from its input.

    @date: Nov, 2025
    @author: bartu
*/

use crate::prelude::*;
use crate::transform::{ModelTransform, Transform};

/// Anything with local-space xyz positions and a transform
pub trait Renderable {
    type Transform: ModelTransform;

    fn xyz_positions(&self) -> &[Vector3];
    fn transform(&self) -> &Self::Transform;
}

/// Two triangles, counter clockwise
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Indexed positions with the transform they are expressed under.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedVertexPositions {
    pub xyz_positions: Vec<Vector3>,
    pub indices: Vec<u32>,
    pub transform: Transform,
}

impl IndexedVertexPositions {
    /// Axis aligned rectangle at z = 0 already in its target space, so
    /// the transform is identity and must not be applied again.
    /// Vertex order: bottom-left, bottom-right, top-right, top-left.
    pub fn quad(min: Vector2, max: Vector2) -> Self {
        Self {
            xyz_positions: vec![
                Vector3::new(min.x, min.y, 0.0),
                Vector3::new(max.x, min.y, 0.0),
                Vector3::new(max.x, max.y, 0.0),
                Vector3::new(min.x, max.y, 0.0),
            ],
            indices: QUAD_INDICES.to_vec(),
            transform: Transform::IDENTITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.xyz_positions.is_empty()
    }
}

impl Renderable for IndexedVertexPositions {
    type Transform = Transform;

    fn xyz_positions(&self) -> &[Vector3] {
        &self.xyz_positions
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_layout() {
        let q = IndexedVertexPositions::quad(Vector2::new(-0.5, -0.25), Vector2::new(0.5, 0.75));
        assert_eq!(q.xyz_positions.len(), 4);
        assert_eq!(q.indices, vec![0, 1, 2, 2, 3, 0]);
        assert_eq!(q.xyz_positions[0], Vector3::new(-0.5, -0.25, 0.0));
        assert_eq!(q.xyz_positions[2], Vector3::new(0.5, 0.75, 0.0));
        assert!(q.transform.is_identity());
        assert!(!q.is_empty());
    }

    #[test]
    fn default_is_empty() {
        let q = IndexedVertexPositions::default();
        assert!(q.is_empty());
        assert!(q.indices.is_empty());
    }
}
