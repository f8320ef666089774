// pbrt
use crate::core::geometry::Point2f;
use crate::core::pbrt::Spectrum;

/// The same color everywhere.
#[derive(Debug, Default, Copy, Clone)]
pub struct UniformPigment {
    pub color: Spectrum,
}

impl UniformPigment {
    pub fn new(color: Spectrum) -> Self {
        UniformPigment { color }
    }
    pub fn get_color(&self, _uv: &Point2f) -> Spectrum {
        self.color
    }
}
