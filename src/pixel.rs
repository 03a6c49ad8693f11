
use crate::interval::Interval;
use crate::prelude::*;

/// Screen footprint of an object in pixels, origin at the top-left.
/// Produced already clamped to the viewport, so a box that is fully
/// off-screen has zero area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBoundingBox {
    pub min: Vector2,
    pub max: Vector2,
}

impl PixelBoundingBox {

    pub const ZERO: Self = Self {
        min: Vector2::ZERO,
        max: Vector2::ZERO,
    };

    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    pub fn from_intervals(x: &Interval, y: &Interval) -> Self {
        Self {
            min: Vector2::new(x.min, y.min),
            max: Vector2::new(x.max, y.max),
        }
    }

    // Clamping can leave max < min, never report a negative extent
    pub fn width(&self) -> Float {
        (self.max.x - self.min.x).max(0.0)
    }

    pub fn height(&self) -> Float {
        (self.max.y - self.min.y).max(0.0)
    }

    pub fn area(&self) -> Float {
        self.width() * self.height()
    }

    pub fn min_dimension(&self) -> Float {
        self.width().min(self.height())
    }

    pub fn max_dimension(&self) -> Float {
        self.width().max(self.height())
    }

    pub fn center(&self) -> Vector2 {
        (self.min + self.max) * 0.5
    }

    /// Zero area means not visible
    pub fn is_empty(&self) -> bool {
        self.area() <= 0.0
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions() {
        let bb = PixelBoundingBox::new(Vector2::new(10.0, 20.0), Vector2::new(110.0, 25.0));
        assert_eq!(bb.width(), 100.0);
        assert_eq!(bb.height(), 5.0);
        assert_eq!(bb.area(), 500.0);
        assert_eq!(bb.min_dimension(), 5.0);
        assert_eq!(bb.max_dimension(), 100.0);
        assert_eq!(bb.center(), Vector2::new(60.0, 22.5));
        assert!(!bb.is_empty());
    }

    #[test]
    fn inverted_box_is_zero_not_negative() {
        let bb = PixelBoundingBox::new(Vector2::new(50.0, 50.0), Vector2::new(40.0, 10.0));
        assert_eq!(bb.width(), 0.0);
        assert_eq!(bb.height(), 0.0);
        assert_eq!(bb.area(), 0.0);
        assert!(bb.is_empty());
        assert!(PixelBoundingBox::ZERO.is_empty());
    }
}
