/*

    Viewport dimensions in pixels.

    The viewport belongs to whoever owns the window and can be
    resized at any time. SharedViewport is the handle the owner
    and every sizer hold on to; readers take a snapshot per query.

    @date: Oct, 2025
    @author: bartu
*/

use std::sync::{PoisonError, RwLock};

use crate::interval::Interval;
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn from_resolution(resolution: [u32; 2]) -> Self {
        Self::new(resolution[0], resolution[1])
    }

    pub fn width_px(&self) -> Float {
        self.width as Float
    }

    pub fn height_px(&self) -> Float {
        self.height as Float
    }

    /// Zero width or height, nothing can be seen through it
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// width / height, only meaningful for a non-empty viewport
    pub fn aspect(&self) -> Float {
        self.width_px() / self.height_px()
    }

    pub fn area(&self) -> Float {
        self.width_px() * self.height_px()
    }

    /// [0, width]
    pub fn x_range(&self) -> Interval {
        Interval::new(0.0, self.width_px())
    }

    /// [0, height]
    pub fn y_range(&self) -> Interval {
        Interval::new(0.0, self.height_px())
    }

    /// NDC x,y to pixel coordinates with the origin at the top-left corner
    #[inline]
    pub fn ndc_to_pixel(&self, ndc: Vector2) -> Vector2 {
        let x = (ndc.x * 0.5 + 0.5) * self.width_px();
        let y = (1.0 - (ndc.y * 0.5 + 0.5)) * self.height_px(); // NDC y points up, pixel y points down
        Vector2::new(x, y)
    }
}

/// Cloneable handle to viewport dimensions owned elsewhere
#[derive(Debug, Clone, Default)]
pub struct SharedViewport(Arc<RwLock<Viewport>>);

impl SharedViewport {
    pub fn new(viewport: Viewport) -> Self {
        Self(Arc::new(RwLock::new(viewport)))
    }

    /// Current dimensions. A writer that panicked cannot leave a
    /// half-written pair of u32s behind, so poisoning is ignored.
    pub fn get(&self) -> Viewport {
        *self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn resize(&self, width: u32, height: u32) {
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        debug!("Resizing viewport from {}x{} to {}x{}", guard.width, guard.height, width, height);
        *guard = Viewport::new(width, height);
    }
}

impl From<Viewport> for SharedViewport {
    fn from(viewport: Viewport) -> Self {
        Self::new(viewport)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners_map_to_pixel_corners() {
        let vp = Viewport::new(800, 600);
        assert_eq!(vp.ndc_to_pixel(Vector2::new(-1.0, 1.0)), Vector2::new(0.0, 0.0));
        assert_eq!(vp.ndc_to_pixel(Vector2::new(1.0, -1.0)), Vector2::new(800.0, 600.0));
        assert_eq!(vp.ndc_to_pixel(Vector2::ZERO), Vector2::new(400.0, 300.0));
    }

    #[test]
    fn shared_handle_sees_resize() {
        let owner = SharedViewport::new(Viewport::new(800, 800));
        let reader = owner.clone();
        owner.resize(1920, 1080);
        assert_eq!(reader.get(), Viewport::new(1920, 1080));
    }

    #[test]
    fn empty_viewport() {
        assert!(Viewport::default().is_empty());
        assert!(Viewport::new(0, 10).is_empty());
        assert!(!Viewport::from_resolution([4, 2]).is_empty());
        assert_eq!(Viewport::new(4, 2).aspect(), 2.0);
    }
}
