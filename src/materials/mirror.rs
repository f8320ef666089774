// std
use std::f32::consts::PI;
// pbrt
use crate::core::geometry::{nrm_dot_vec3f, vec3_dot_vec3f};
use crate::core::geometry::{Normal3f, Point2f, Point3f, Ray, Vector3f};
use crate::core::pbrt::{clamp_t, Float, Spectrum};
use crate::core::rng::Rng;
use crate::core::texture::Pigment;

/// Maximum angular difference (in radians) between incoming and
/// outgoing direction, a tenth of a degree.
pub const DEFAULT_THRESHOLD_ANGLE_RAD: Float = PI / 1800.0;

/// A perfect mirror.
#[derive(Debug, Clone)]
pub struct SpecularBrdf {
    pub pigment: Pigment,
    pub threshold_angle_rad: Float,
}

impl Default for SpecularBrdf {
    fn default() -> Self {
        SpecularBrdf {
            pigment: Pigment::from(Spectrum::new(1.0)),
            threshold_angle_rad: DEFAULT_THRESHOLD_ANGLE_RAD,
        }
    }
}

impl SpecularBrdf {
    pub fn new(pigment: Pigment) -> Self {
        SpecularBrdf {
            pigment,
            threshold_angle_rad: DEFAULT_THRESHOLD_ANGLE_RAD,
        }
    }
    pub fn eval(
        &self,
        normal: &Normal3f,
        in_dir: &Vector3f,
        out_dir: &Vector3f,
        uv: &Point2f,
    ) -> Spectrum {
        let theta_in: Float = clamp_t(nrm_dot_vec3f(normal, in_dir), -1.0, 1.0).acos();
        let theta_out: Float = clamp_t(nrm_dot_vec3f(normal, out_dir), -1.0, 1.0).acos();
        if (theta_in - theta_out).abs() < self.threshold_angle_rad {
            self.pigment.get_color(uv)
        } else {
            Spectrum::default()
        }
    }
    /// The reflected direction is fully determined, *rng* is unused.
    pub fn scatter_ray(
        &self,
        _rng: &mut Rng,
        incoming_dir: &Vector3f,
        interaction_point: &Point3f,
        normal: &Normal3f,
        depth: u32,
    ) -> Ray {
        let ray_dir: Vector3f = incoming_dir.normalize();
        let normal: Vector3f = Vector3f::from(normal.normalize());
        let dot: Float = vec3_dot_vec3f(&normal, &ray_dir);
        Ray {
            o: *interaction_point,
            d: ray_dir - normal * (2.0 as Float * dot),
            t_min: 1e-5,
            t_max: Float::INFINITY,
            depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pbrt::EPSILON;

    #[test]
    fn reflects_about_the_normal() {
        let brdf = SpecularBrdf::default();
        let mut rng = Rng::new();
        let n = Normal3f::new(0.0, 0.0, 1.0);
        let p = Point3f::new(0.0, 0.0, 0.0);
        let ray = brdf.scatter_ray(&mut rng, &Vector3f::new(1.0, 0.0, -1.0), &p, &n, 1);
        let expected = Vector3f::new(1.0, 0.0, 1.0).normalize();
        assert!(ray.d.is_close(&expected, EPSILON));
        assert_eq!(ray.depth, 1);
    }

    #[test]
    fn only_mirror_directions_reflect() {
        let brdf = SpecularBrdf::new(Pigment::from(Spectrum::rgb(0.5, 0.5, 0.5)));
        let n = Normal3f::new(0.0, 0.0, 1.0);
        let uv = Point2f::default();
        let a = Vector3f::new(1.0, 0.0, 1.0).normalize();
        let b = Vector3f::new(-1.0, 0.0, 1.0).normalize();
        let c = Vector3f::new(0.0, 0.0, 1.0);
        assert!(brdf
            .eval(&n, &a, &b, &uv)
            .is_close(&Spectrum::new(0.5), EPSILON));
        assert!(brdf.eval(&n, &a, &c, &uv).is_black());
    }
}
