/*

    Measure how large an object appears on screen.

    Given an object's local bounding box and its transform, the
    sizer moves the box corners to world space, projects them
    with the camera and measures the pixel footprint clamped to
    the viewport. Size classes, the sub-pixel test and the
    screen-space quad are all derived from that footprint.

    None of the queries fail: degenerate input gives a zero-size
    box, Small, or an empty quad.

    @date: Nov, 2025
    @author: bartu
*/

use crate::aabb::AxisAlignedBoundingBox;
use crate::camera::Camera;
use crate::interval::Interval;
use crate::pixel::PixelBoundingBox;
use crate::prelude::*;
use crate::quad::{IndexedVertexPositions, Renderable};
use crate::size::{ScreenSize, SizeThresholds};
use crate::transform::ModelTransform;
use crate::viewport::{SharedViewport, Viewport};

/// Borrows the camera for its whole life and reads the viewport
/// anew on every query.
#[derive(Debug, Clone)]
pub struct ScreenSpaceSizer<'a, C: Camera + ?Sized> {
    camera: &'a C,
    viewport: SharedViewport,
    thresholds: SizeThresholds,
}

impl<'a, C: Camera + ?Sized> ScreenSpaceSizer<'a, C> {

    pub fn new(camera: &'a C, viewport: SharedViewport) -> Self {
        Self {
            camera,
            viewport,
            thresholds: SizeThresholds::DEFAULT,
        }
    }

    pub fn with_thresholds(mut self, thresholds: SizeThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn thresholds(&self) -> SizeThresholds {
        self.thresholds
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    /// Classify by the narrower side of the pixel footprint, so a long
    /// thin object is as small as its thin side.
    pub fn classify<T: ModelTransform + ?Sized>(&self, aabb: &AxisAlignedBoundingBox, transform: &T) -> ScreenSize {
        let pixel_bounding_box = self.pixel_bounding_box(aabb, transform);
        let size = self.thresholds.classify(pixel_bounding_box.min_dimension());
        trace!("Classified {:?} as {size}", pixel_bounding_box);
        size
    }

    pub fn screen_size<T: ModelTransform + ?Sized>(&self, aabb: &AxisAlignedBoundingBox, transform: &T) -> ScreenSize {
        self.classify(aabb, transform)
    }

    /// True if the footprint is narrower than one pixel on some axis
    pub fn is_sub_pixel<T: ModelTransform + ?Sized>(&self, aabb: &AxisAlignedBoundingBox, transform: &T) -> bool {
        self.pixel_bounding_box(aabb, transform).min_dimension() < 1.0
    }

    pub fn is_sub_pixel_positions<T: ModelTransform + ?Sized>(&self, xyz_positions: &[Vector3], transform: &T) -> bool {
        let local_aabb = AxisAlignedBoundingBox::from_positions(xyz_positions);
        self.is_sub_pixel(&local_aabb, transform)
    }

    pub fn screen_pixel_area<T: ModelTransform + ?Sized>(&self, aabb: &AxisAlignedBoundingBox, transform: &T) -> Float {
        self.pixel_bounding_box(aabb, transform).area()
    }

    /// Share of the viewport covered by the footprint, in [0, 100]
    pub fn screen_pixel_area_percentage<T: ModelTransform + ?Sized>(&self, aabb: &AxisAlignedBoundingBox, transform: &T) -> Float {
        let viewport = self.viewport.get();
        if viewport.is_empty() {
            return 0.0;
        }
        let bb = self.pixel_bounding_box_in(&viewport, aabb, transform);
        (bb.area() / viewport.area()) * 100.0
    }

    pub fn aabb_corners_world<T: ModelTransform + ?Sized>(&self, aabb: &AxisAlignedBoundingBox, transform: &T) -> [Vector3; 8] {
        aabb.corners_world(&transform.model_matrix())
    }

    /// Pixel footprint of the box, clamped to the current viewport.
    pub fn pixel_bounding_box<T: ModelTransform + ?Sized>(&self, aabb: &AxisAlignedBoundingBox, transform: &T) -> PixelBoundingBox {
        let viewport = self.viewport.get();
        self.pixel_bounding_box_in(&viewport, aabb, transform)
    }

    fn pixel_bounding_box_in<T: ModelTransform + ?Sized>(&self, viewport: &Viewport, aabb: &AxisAlignedBoundingBox, transform: &T) -> PixelBoundingBox {
        // Infinite corners of an empty box would smear across the screen
        if aabb.is_empty() {
            return PixelBoundingBox::ZERO;
        }
        let view_proj = self.camera.view_projection();

        let mut xint = Interval::EMPTY;
        let mut yint = Interval::EMPTY;
        for corner in self.aabb_corners_world(aabb, transform).iter() {
            let screen = world_to_screen(&view_proj, viewport, corner);
            xint.expand(screen.x);
            yint.expand(screen.y);
        }

        // Clamp once at the end. Clamping every corner would shrink a
        // box that straddles the viewport edge.
        let xint = xint.clamped_to(&viewport.x_range());
        let yint = yint.clamped_to(&viewport.y_range());
        PixelBoundingBox::from_intervals(&xint, &yint)
    }

    /// NDC x,y of a world position. A clip w of exactly zero gives
    /// (0, 0), which callers must read as "no position".
    pub fn project_to_ndc(&self, world_pos: &Vector3) -> Vector2 {
        world_to_ndc(&self.camera.view_projection(), world_pos).unwrap_or(Vector2::ZERO)
    }

    /// Pixel position of a world position, origin at the top-left.
    /// Unlike project_to_ndc there is no guard against w = 0 here.
    pub fn project_to_screen(&self, world_pos: &Vector3) -> Vector2 {
        world_to_screen(&self.camera.view_projection(), &self.viewport.get(), world_pos)
    }

    /// Quad in aspect-corrected NDC (x in [-aspect, aspect], y in [-1, 1])
    /// covering the object's on-screen footprint. Corners with w = 0 or
    /// a non-finite projection do not count towards the bound.
    pub fn build_screen_space_quad<R: Renderable + ?Sized>(&self, obj: &R) -> IndexedVertexPositions {
        let positions = obj.xyz_positions();
        if positions.is_empty() {
            return IndexedVertexPositions::default();
        }

        let viewport = self.viewport.get();
        if viewport.is_empty() {
            debug!("Viewport {}x{} has no area, no screen-space quad", viewport.width, viewport.height);
            return IndexedVertexPositions::default();
        }
        let aspect = viewport.aspect();

        let aabb = AxisAlignedBoundingBox::from_positions(positions);
        let view_proj = self.camera.view_projection();

        let mut xint = Interval::EMPTY;
        let mut yint = Interval::EMPTY;
        for corner in self.aabb_corners_world(&aabb, obj.transform()).iter() {
            let Some(mut ndc) = world_to_ndc(&view_proj, corner) else {
                continue;
            };
            ndc.x *= aspect; // correct horizontal scaling

            if !ndc.is_finite() {
                continue;
            }
            xint.expand(ndc.x);
            yint.expand(ndc.y);
        }

        if !xint.validate() || !yint.validate() {
            debug!("No corner of {:?} projected to a finite position", aabb);
            return IndexedVertexPositions::default();
        }

        let xint = xint.clamped_to(&Interval::symmetric(aspect));
        let yint = yint.clamped_to(&Interval::UNIT);
        IndexedVertexPositions::quad(Vector2::new(xint.min, yint.min), Vector2::new(xint.max, yint.max))
    }
}

/// None when clip w is exactly zero
#[inline]
fn world_to_ndc(view_proj: &Matrix4, world_pos: &Vector3) -> Option<Vector2> {
    let clip = *view_proj * world_pos.extend(1.0);
    if clip.w == 0.0 {
        return None; // avoid divide by zero
    }
    Some(Vector2::new(clip.x, clip.y) / clip.w)
}

#[inline]
fn world_to_screen(view_proj: &Matrix4, viewport: &Viewport, world_pos: &Vector3) -> Vector2 {
    let clip = *view_proj * world_pos.extend(1.0);
    let ndc = Vector2::new(clip.x, clip.y) / clip.w; // perspective divide
    viewport.ndc_to_pixel(ndc)
}
