// others
use num::Zero;
// pbrt
use crate::core::error::ConfigError;
use crate::core::geometry::Ray;
use crate::core::material::Material;
use crate::core::pbrt::{Float, Spectrum};
use crate::core::rng::Rng;
use crate::core::world::World;

/// Lower bound of the termination probability used by Russian
/// roulette.
pub const MIN_TERMINATION_PROBABILITY: Float = 0.05;

/// Path Tracing (Global Illumination)
///
/// At every hit *num_of_rays* new rays are scattered by the BRDF and
/// traced recursively. The estimator relies on the BRDFs sampling
/// their outgoing directions proportionally to `f * cos(theta)`, so
/// the recursive radiance is only weighted by the surface color.
///
/// Once a path reaches *russian_roulette_limit* bounces it survives
/// with a probability proportional to the surface color, paths longer
/// than *max_depth* are cut off.
#[derive(Debug, Copy, Clone)]
pub struct PathIntegrator {
    pub background_color: Spectrum,
    pub num_of_rays: u32,
    pub max_depth: u32,
    pub russian_roulette_limit: u32,
}

impl Default for PathIntegrator {
    fn default() -> Self {
        PathIntegrator {
            background_color: Spectrum::default(),
            num_of_rays: 10,
            max_depth: 2,
            russian_roulette_limit: 3,
        }
    }
}

impl PathIntegrator {
    pub fn new(
        background_color: Spectrum,
        num_of_rays: u32,
        max_depth: u32,
        russian_roulette_limit: u32,
    ) -> Result<Self, ConfigError> {
        if num_of_rays == 0 {
            return Err(ConfigError::ZeroRays);
        }
        Ok(PathIntegrator {
            background_color,
            num_of_rays,
            max_depth,
            russian_roulette_limit,
        })
    }
    pub fn li(&self, ray: &Ray, world: &World, rng: &mut Rng) -> Spectrum {
        if ray.depth > self.max_depth {
            return Spectrum::zero();
        }
        let hit = match world.intersect(ray) {
            Some(hit) => hit,
            None => return self.background_color,
        };
        let material: &Material = world.material(hit.material);
        let mut hit_color: Spectrum = material.brdf.pigment().get_color(&hit.uv);
        let emitted_radiance: Spectrum = material.emitted_radiance.get_color(&hit.uv);
        let hit_color_lum: Float = hit_color.max_component_value();
        // Russian roulette
        if ray.depth >= self.russian_roulette_limit {
            let q: Float = (1.0 as Float - hit_color_lum).max(MIN_TERMINATION_PROBABILITY);
            if rng.uniform_float() > q {
                // keep the estimate unbiased
                hit_color = hit_color / (1.0 as Float - q);
            } else {
                return emitted_radiance;
            }
        }
        let mut cum_radiance: Spectrum = Spectrum::zero();
        if hit_color_lum > 0.0 as Float {
            for _ in 0..self.num_of_rays {
                let new_ray: Ray =
                    material
                        .brdf
                        .scatter_ray(rng, &hit.ray.d, &hit.p, &hit.n, ray.depth + 1);
                let new_radiance: Spectrum = self.li(&new_ray, world, rng);
                cum_radiance += hit_color * new_radiance;
            }
        }
        emitted_radiance + cum_radiance / self.num_of_rays as Float
    }
}
