//! A **Pigment** maps a 2D surface coordinate to a color. Pigments
//! are used for the reflectance of a BRDF as well as for the light
//! emitted by a surface.

// pbrt
use crate::core::geometry::Point2f;
use crate::core::pbrt::Spectrum;
use crate::textures::checkerboard::CheckeredPigment;
use crate::textures::imagemap::ImagePigment;
use crate::textures::uniform::UniformPigment;

#[derive(Debug, Clone)]
pub enum Pigment {
    Uniform(UniformPigment),
    Checkered(CheckeredPigment),
    Image(ImagePigment),
}

impl Pigment {
    pub fn get_color(&self, uv: &Point2f) -> Spectrum {
        match self {
            Pigment::Uniform(pigment) => pigment.get_color(uv),
            Pigment::Checkered(pigment) => pigment.get_color(uv),
            Pigment::Image(pigment) => pigment.get_color(uv),
        }
    }
}

impl Default for Pigment {
    fn default() -> Self {
        Pigment::Uniform(UniformPigment::default())
    }
}

impl From<Spectrum> for Pigment {
    fn from(color: Spectrum) -> Self {
        Pigment::Uniform(UniformPigment::new(color))
    }
}
