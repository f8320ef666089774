//! Rendering an image of the scene is handled by an **Integrator**.
//! It computes the radiance arriving along a single camera ray; the
//! [`ImageTracer`](crate::core::tracer::ImageTracer) decides which
//! rays to shoot and averages the results per pixel.
//!
//! - OnOffIntegrator
//! - FlatIntegrator
//! - PointLightIntegrator
//! - PathIntegrator

// pbrt
use crate::core::geometry::Ray;
use crate::core::pbrt::Spectrum;
use crate::core::rng::Rng;
use crate::core::world::World;
use crate::integrators::flat::FlatIntegrator;
use crate::integrators::onoff::OnOffIntegrator;
use crate::integrators::path::PathIntegrator;
use crate::integrators::pointlight::PointLightIntegrator;

#[derive(Debug, Clone)]
pub enum Integrator {
    OnOff(OnOffIntegrator),
    Flat(FlatIntegrator),
    PointLight(PointLightIntegrator),
    Path(PathIntegrator),
}

impl Integrator {
    /// Returns the incident radiance at the origin of a given ray.
    /// Only the path tracer draws random numbers from *rng*.
    pub fn li(&self, ray: &Ray, world: &World, rng: &mut Rng) -> Spectrum {
        match self {
            Integrator::OnOff(integrator) => integrator.li(ray, world),
            Integrator::Flat(integrator) => integrator.li(ray, world),
            Integrator::PointLight(integrator) => integrator.li(ray, world),
            Integrator::Path(integrator) => integrator.li(ray, world, rng),
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Integrator::OnOff(_) => "onoff",
            Integrator::Flat(_) => "flat",
            Integrator::PointLight(_) => "pointlight",
            Integrator::Path(_) => "pathtracer",
        }
    }
}

impl From<OnOffIntegrator> for Integrator {
    fn from(integrator: OnOffIntegrator) -> Self {
        Integrator::OnOff(integrator)
    }
}

impl From<FlatIntegrator> for Integrator {
    fn from(integrator: FlatIntegrator) -> Self {
        Integrator::Flat(integrator)
    }
}

impl From<PointLightIntegrator> for Integrator {
    fn from(integrator: PointLightIntegrator) -> Self {
        Integrator::PointLight(integrator)
    }
}

impl From<PathIntegrator> for Integrator {
    fn from(integrator: PathIntegrator) -> Self {
        Integrator::Path(integrator)
    }
}
