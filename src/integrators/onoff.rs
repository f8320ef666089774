// pbrt
use crate::core::geometry::Ray;
use crate::core::pbrt::Spectrum;
use crate::core::world::World;

/// Debugging aid: every pixel covered by a shape gets the same color.
#[derive(Debug, Copy, Clone)]
pub struct OnOffIntegrator {
    pub background_color: Spectrum,
    pub color: Spectrum,
}

impl Default for OnOffIntegrator {
    fn default() -> Self {
        OnOffIntegrator {
            background_color: Spectrum::default(),
            color: Spectrum::new(1.0),
        }
    }
}

impl OnOffIntegrator {
    pub fn new(background_color: Spectrum, color: Spectrum) -> Self {
        OnOffIntegrator {
            background_color,
            color,
        }
    }
    pub fn li(&self, ray: &Ray, world: &World) -> Spectrum {
        if world.intersect_p(ray) {
            self.color
        } else {
            self.background_color
        }
    }
}
