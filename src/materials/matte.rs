// std
use std::f32::consts::PI;
// pbrt
use crate::core::geometry::create_onb_from_z;
use crate::core::geometry::{Normal3f, Point2f, Point3f, Ray, Vector3f};
use crate::core::pbrt::{Float, Spectrum, INV_PI};
use crate::core::rng::Rng;
use crate::core::texture::Pigment;

/// Scattered diffuse rays start a little away from the surface.
pub const DIFFUSE_T_MIN: Float = 1e-3;

/// Describes a purely diffuse (Lambertian) surface.
#[derive(Debug, Clone)]
pub struct DiffuseBrdf {
    pub pigment: Pigment,
}

impl Default for DiffuseBrdf {
    fn default() -> Self {
        DiffuseBrdf {
            pigment: Pigment::from(Spectrum::new(1.0)),
        }
    }
}

impl DiffuseBrdf {
    pub fn new(pigment: Pigment) -> Self {
        DiffuseBrdf { pigment }
    }
    pub fn eval(
        &self,
        _normal: &Normal3f,
        _in_dir: &Vector3f,
        _out_dir: &Vector3f,
        uv: &Point2f,
    ) -> Spectrum {
        self.pigment.get_color(uv) * INV_PI
    }
    /// Cosine weighted sampling of the hemisphere around *normal*.
    pub fn scatter_ray(
        &self,
        rng: &mut Rng,
        _incoming_dir: &Vector3f,
        interaction_point: &Point3f,
        normal: &Normal3f,
        depth: u32,
    ) -> Ray {
        let (e1, e2, e3) = create_onb_from_z(normal);
        let cos_theta_sq: Float = rng.uniform_float();
        let cos_theta: Float = cos_theta_sq.sqrt();
        let sin_theta: Float = (1.0 as Float - cos_theta_sq).sqrt();
        let phi: Float = 2.0 as Float * PI * rng.uniform_float();
        Ray {
            o: *interaction_point,
            d: e1 * (phi.cos() * sin_theta) + e2 * (phi.sin() * sin_theta) + e3 * cos_theta,
            t_min: DIFFUSE_T_MIN,
            t_max: Float::INFINITY,
            depth,
        }
    }
}
