// pbrt
use crate::core::geometry::{nrm_dot_vec3f, Ray, Vector3f};
use crate::core::material::Material;
use crate::core::pbrt::{Float, Spectrum};
use crate::core::world::World;

pub const DEFAULT_AMBIENT: Float = 0.1;

/// Direct lighting from the point lights of the world, without any
/// indirect illumination.
#[derive(Debug, Copy, Clone)]
pub struct PointLightIntegrator {
    pub background_color: Spectrum,
    /// added to every hit, lit or not
    pub ambient_color: Spectrum,
}

impl Default for PointLightIntegrator {
    fn default() -> Self {
        PointLightIntegrator {
            background_color: Spectrum::default(),
            ambient_color: Spectrum::new(DEFAULT_AMBIENT),
        }
    }
}

impl PointLightIntegrator {
    pub fn new(background_color: Spectrum, ambient_color: Spectrum) -> Self {
        PointLightIntegrator {
            background_color,
            ambient_color,
        }
    }
    pub fn li(&self, ray: &Ray, world: &World) -> Spectrum {
        let hit = match world.intersect(ray) {
            Some(hit) => hit,
            None => return self.background_color,
        };
        let material: &Material = world.material(hit.material);
        let emitted: Spectrum = material.emitted_radiance.get_color(&hit.uv);
        let out_dir: Vector3f = -ray.d.normalize();
        let mut l: Spectrum = self.ambient_color;
        for light in &world.lights {
            if !world.is_point_visible(&light.p_light, &hit.p) {
                continue;
            }
            let distance_vec: Vector3f = light.to_point(&hit.p);
            let distance: Float = distance_vec.length();
            let in_dir: Vector3f = distance_vec / distance;
            let cos_theta: Float = nrm_dot_vec3f(&hit.n, &out_dir).max(0.0 as Float);
            let f: Spectrum = material.brdf.eval(&hit.n, &in_dir, &out_dir, &hit.uv);
            l += (emitted + f) * light.color * (cos_theta * light.falloff(distance));
        }
        l
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Point3f;
    use crate::core::material::Brdf;
    use crate::core::pbrt::{EPSILON, INV_PI};
    use crate::core::texture::Pigment;
    use crate::core::transform::Transform;
    use crate::lights::point::PointLight;
    use crate::materials::matte::DiffuseBrdf;
    use crate::shapes::plane::Plane;
    use crate::shapes::sphere::Sphere;

    fn lit_plane() -> World {
        let mut world = World::new();
        let material = world.add_material(Material::new(
            Brdf::Diffuse(DiffuseBrdf::new(Pigment::from(Spectrum::new(1.0)))),
            Pigment::default(),
        ));
        world.add_shape(Plane::new(Transform::default(), material));
        world.add_light(PointLight::new(
            Point3f::new(0.0, 0.0, 2.0),
            Spectrum::new(1.0),
            0.0,
        ));
        world
    }

    #[test]
    fn lit_from_above() {
        let world = lit_plane();
        let integrator = PointLightIntegrator::default();
        let ray = Ray::new(Point3f::new(0.0, 0.0, 1.0), Vector3f::new(0.0, 0.0, -1.0));
        let expected = Spectrum::new(DEFAULT_AMBIENT + INV_PI);
        assert!(integrator.li(&ray, &world).is_close(&expected, EPSILON));
    }

    #[test]
    fn shadowed_points_get_ambient_light_only() {
        let mut world = lit_plane();
        let blocker = world.add_material(Material::default());
        world.add_shape(Sphere::new(
            Transform::translate(&Vector3f::new(0.0, 0.0, 1.0)) * Transform::scale(0.2, 0.2, 0.2),
            blocker,
        ));
        let integrator = PointLightIntegrator::default();
        let ray = Ray::new(Point3f::new(1.0, 0.0, 0.5), Vector3f::new(-1.0, 0.0, -0.5));
        assert!(integrator
            .li(&ray, &world)
            .is_close(&Spectrum::new(DEFAULT_AMBIENT), EPSILON));
    }

    #[test]
    fn miss_returns_background() {
        let world = lit_plane();
        let integrator = PointLightIntegrator::new(Spectrum::rgb(0.2, 0.3, 0.4), Spectrum::new(0.1));
        let ray = Ray::new(Point3f::new(0.0, 0.0, 1.0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(integrator.li(&ray, &world), Spectrum::rgb(0.2, 0.3, 0.4));
    }
}
