// pbrt
use crate::core::geometry::Ray;
use crate::core::material::Material;
use crate::core::pbrt::Spectrum;
use crate::core::world::World;

/// Shows the surface color plus the emitted radiance of the first
/// hit, no light transport at all.
#[derive(Debug, Default, Copy, Clone)]
pub struct FlatIntegrator {
    pub background_color: Spectrum,
}

impl FlatIntegrator {
    pub fn new(background_color: Spectrum) -> Self {
        FlatIntegrator { background_color }
    }
    pub fn li(&self, ray: &Ray, world: &World) -> Spectrum {
        match world.intersect(ray) {
            Some(hit) => {
                let material: &Material = world.material(hit.material);
                material.brdf.pigment().get_color(&hit.uv)
                    + material.emitted_radiance.get_color(&hit.uv)
            }
            None => self.background_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::{Point3f, Vector3f};
    use crate::core::material::Brdf;
    use crate::core::pbrt::EPSILON;
    use crate::core::texture::Pigment;
    use crate::core::transform::Transform;
    use crate::materials::matte::DiffuseBrdf;
    use crate::shapes::plane::Plane;

    #[test]
    fn pigment_plus_emission() {
        let mut world = World::new();
        let material = world.add_material(Material::new(
            Brdf::Diffuse(DiffuseBrdf::new(Pigment::from(Spectrum::rgb(0.1, 0.2, 0.3)))),
            Pigment::from(Spectrum::rgb(1.0, 0.0, 0.5)),
        ));
        world.add_shape(Plane::new(Transform::default(), material));
        let integrator = FlatIntegrator::new(Spectrum::rgb(0.0, 0.0, 1.0));
        let down = Ray::new(Point3f::new(0.0, 0.0, 1.0), Vector3f::new(0.0, 0.0, -1.0));
        assert!(integrator
            .li(&down, &world)
            .is_close(&Spectrum::rgb(1.1, 0.2, 0.8), EPSILON));
        let up = Ray::new(Point3f::new(0.0, 0.0, 1.0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(integrator.li(&up, &world), Spectrum::rgb(0.0, 0.0, 1.0));
    }
}
