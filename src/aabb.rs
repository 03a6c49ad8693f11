/*

    Axis Aligned Bounding Box in object-local space.

    Corner order is fixed and relied upon by callers:
    corner i takes max.x if bit 0 of i is set (min.x otherwise),
    max.y if bit 1 is set and max.z if bit 2 is set.

          6 ------- 7
         /|        /|
        2 ------- 3 |        y
        | 4 ------| 5        |
        |/        |/         o -- x
        0 ------- 1         /
                           z

    @author: bartu
    @date: 9 Nov, 2025
*/

use crate::interval::{Interval};
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignedBoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

impl Default for AxisAlignedBoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl AxisAlignedBoundingBox {

    /// Contains nothing, min = +inf and max = -inf on every axis
    pub const EMPTY: Self = Self {
        min: Vector3::splat(Float::INFINITY),
        max: Vector3::splat(Float::NEG_INFINITY),
    };

    pub fn new(min: Vector3, max: Vector3) -> Self {
        debug_assert!(min.cmple(max).all(), "Invalid box, found max < min");
        Self { min, max }
    }

    pub fn new_from(xint: &Interval, yint: &Interval, zint: &Interval) -> Self {
        Self::new(
            Vector3::new(xint.min, yint.min, zint.min),
            Vector3::new(xint.max, yint.max, zint.max),
        )
    }

    /// Tightest box around the given positions. No positions gives
    /// an empty box rather than a box at the origin.
    pub fn from_positions(positions: &[Vector3]) -> Self {
        positions.iter().fold(Self::EMPTY, |bbox, p| Self {
            min: bbox.min.min(*p),
            max: bbox.max.max(*p),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// Width, height and depth of the box
    pub fn size(&self) -> Vector3 {
        (self.max - self.min).max(Vector3::ZERO)
    }

    pub fn corners(&self) -> [Vector3; 8] {
        std::array::from_fn(|i| {
            Vector3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }

    /// Corners pushed through the model matrix, using only its
    /// basis columns and translation column.
    pub fn corners_world(&self, model: &Matrix4) -> [Vector3; 8] {
        self.corners().map(|c| transform_point_affine(model, &c))
    }
}

pub trait BBoxable {
    fn get_bbox(&self) -> AxisAlignedBoundingBox;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_positions_is_tight() {
        let positions = [
            Vector3::new(1.0, -2.0, 0.5),
            Vector3::new(-1.0, 3.0, 0.0),
            Vector3::new(0.0, 0.0, -4.0),
        ];
        let bbox = AxisAlignedBoundingBox::from_positions(&positions);
        assert_eq!(bbox.min, Vector3::new(-1.0, -2.0, -4.0));
        assert_eq!(bbox.max, Vector3::new(1.0, 3.0, 0.5));
        assert_eq!(bbox.size(), Vector3::new(2.0, 5.0, 4.5));
        assert!(!bbox.is_empty());
    }

    #[test]
    fn no_positions_gives_empty_box() {
        let bbox = AxisAlignedBoundingBox::from_positions(&[]);
        assert!(bbox.is_empty());
        assert_eq!(bbox, AxisAlignedBoundingBox::default());
        assert_eq!(bbox.size(), Vector3::ZERO);
    }

    #[test]
    fn corner_order() {
        let bbox = AxisAlignedBoundingBox::new(Vector3::ZERO, Vector3::ONE);
        let corners = bbox.corners();
        assert_eq!(corners[0], Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(corners[1], Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(corners[2], Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(corners[3], Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(corners[4], Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(corners[7], Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn corners_world_matches_full_transform() {
        let bbox = AxisAlignedBoundingBox::new_from(
            &Interval::new(-1.0, 1.0),
            &Interval::new(-0.5, 0.5),
            &Interval::new(0.0, 2.0),
        );
        let model = Matrix4::from_scale_rotation_translation(
            Vector3::splat(1.5),
            Quaternion::from_rotation_y(0.4),
            Vector3::new(3.0, 0.0, -7.0),
        );

        let world = bbox.corners_world(&model);
        for (local, w) in bbox.corners().iter().zip(world.iter()) {
            let expected = transform_point(&model, local);
            assert!((expected - *w).length() < 1e-5);
        }
    }
}
