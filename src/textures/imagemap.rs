// std
use std::sync::Arc;
// pbrt
use crate::core::geometry::Point2f;
use crate::core::image::HdrImage;
use crate::core::pbrt::{Float, Spectrum};

/// Looks up the color of a surface point in an HDR image. The image
/// is shared, several pigments may reference the same texture.
#[derive(Debug, Clone)]
pub struct ImagePigment {
    pub image: Arc<HdrImage>,
}

impl ImagePigment {
    pub fn new(image: Arc<HdrImage>) -> Self {
        ImagePigment { image }
    }
    /// Coordinates outside of [0, 1] are clamped to the image border.
    /// An image without pixels is black.
    pub fn get_color(&self, uv: &Point2f) -> Spectrum {
        if self.image.pixels.is_empty() {
            return Spectrum::default();
        }
        let width = self.image.width;
        let height = self.image.height;
        let col = texel_index(uv.x, width);
        let row = texel_index(uv.y, height);
        self.image.get_pixel(col, row)
    }
}

fn texel_index(coord: Float, size: usize) -> usize {
    let scaled = coord * size as Float;
    if scaled <= 0.0 as Float || scaled.is_nan() {
        0
    } else {
        (scaled as usize).min(size - 1)
    }
}
