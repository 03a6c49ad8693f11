/*

    Scene description consumed by the screen-sizer binary:
    one camera, the image resolution, the size thresholds
    and a list of objects to measure.

    @date: Oct, 2025
    @author: bartu
*/

use rayon::prelude::*;

use crate::aabb::BBoxable;
use crate::camera::PerspectiveCamera;
use crate::mesh::Mesh;
use crate::pixel::PixelBoundingBox;
use crate::prelude::*;
use crate::quad::IndexedVertexPositions;
use crate::size::{ScreenSize, SizeThresholds};
use crate::sizer::ScreenSpaceSizer;
use crate::viewport::{SharedViewport, Viewport};

#[derive(Debug, Deserialize, Clone)]
#[derive(SmartDefault)]
#[serde(default)]
pub struct SizerScene {
    #[serde(rename = "Camera")]
    pub camera: PerspectiveCamera,

    #[default([800, 800])]
    #[serde(rename = "ImageResolution", deserialize_with = "deser_pair")]
    pub image_resolution: [u32; 2],

    #[serde(rename = "SizeThresholds")]
    pub thresholds: SizeThresholds,

    #[serde(rename = "Objects")]
    pub objects: Vec<Mesh>,
}

/// Everything the sizer can tell about one object
#[derive(Debug, Clone)]
pub struct ObjectReport {
    pub name: String,
    pub size: ScreenSize,
    pub sub_pixel: bool,
    pub pixel_box: PixelBoundingBox,
    pub quad: IndexedVertexPositions,
}

impl SizerScene {

    /// Fill in what the JSON may leave out
    pub fn setup_after_json(&mut self) {
        if self.camera.aspect.is_none() {
            let viewport = self.viewport();
            if viewport.is_empty() {
                warn!("Image resolution {:?} has no area, keeping camera aspect 1", self.image_resolution);
            } else {
                debug!("No camera aspect given, using image aspect {}", viewport.aspect());
                self.camera.aspect = Some(viewport.aspect());
            }
        }
        if !self.camera.validate() {
            warn!("Camera {:?} looks degenerate, sizes will be meaningless", self.camera);
        }
        if !self.thresholds.validate() {
            warn!("Size thresholds {:?} leave no room for Medium", self.thresholds);
        }
        info!("Scene has {} objects at {}x{}", self.objects.len(), self.image_resolution[0], self.image_resolution[1]);
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::from_resolution(self.image_resolution)
    }

    pub fn sizer(&self, viewport: SharedViewport) -> ScreenSpaceSizer<'_, PerspectiveCamera> {
        ScreenSpaceSizer::new(&self.camera, viewport).with_thresholds(self.thresholds)
    }

    /// Measure every object, in parallel
    pub fn measure_all(&self) -> Vec<ObjectReport> {
        let span = tracing::span!(tracing::Level::INFO, "measure_all");
        let _enter = span.enter();

        let sizer = self.sizer(SharedViewport::new(self.viewport()));
        self.objects
            .par_iter()
            .map(|mesh| measure(&sizer, mesh))
            .collect()
    }
}

fn measure(sizer: &ScreenSpaceSizer<'_, PerspectiveCamera>, mesh: &Mesh) -> ObjectReport {
    let aabb = mesh.get_bbox();
    let pixel_box = sizer.pixel_bounding_box(&aabb, &mesh.transform);
    let report = ObjectReport {
        name: mesh.name.clone(),
        size: sizer.classify(&aabb, &mesh.transform),
        sub_pixel: sizer.is_sub_pixel(&aabb, &mesh.transform),
        pixel_box,
        quad: sizer.build_screen_space_quad(mesh),
    };
    debug!("Measured '{}': {:?}", report.name, report.pixel_box);
    report
}
