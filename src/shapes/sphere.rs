// std
use std::f32::consts::PI;
// pbrt
use crate::core::geometry::{vec3_dot_vec3f, Normal3f, Point2f, Point3f, Ray, Vector3f};
use crate::core::interaction::HitRecord;
use crate::core::material::MaterialId;
use crate::core::pbrt::{clamp_t, quadratic, Float};
use crate::core::transform::Transform;

/// A unit sphere centered on the origin. Use a transformation to
/// move or deform it.
#[derive(Debug, Default, Copy, Clone)]
pub struct Sphere {
    pub object_to_world: Transform,
    pub material: MaterialId,
}

impl Sphere {
    pub fn new(object_to_world: Transform, material: MaterialId) -> Self {
        Sphere {
            object_to_world,
            material,
        }
    }
    /// Solve |o + td|^2 = 1 in object space and pick the closest root
    /// inside the ray's parametric range.
    fn nearest_t(ray: &Ray) -> Option<Float> {
        let origin: Vector3f = Vector3f::from(ray.o);
        let a: Float = ray.d.length_squared();
        let b: Float = 2.0 as Float * vec3_dot_vec3f(&origin, &ray.d);
        let c: Float = origin.length_squared() - 1.0 as Float;
        let mut t0: Float = 0.0;
        let mut t1: Float = 0.0;
        if !quadratic(a, b, c, &mut t0, &mut t1) {
            return None;
        }
        if ray.in_range(t0) {
            Some(t0)
        } else if ray.in_range(t1) {
            Some(t1)
        } else {
            None
        }
    }
    pub fn intersect(&self, r: &Ray) -> Option<HitRecord> {
        // transform _Ray_ to object space
        let world_to_object = Transform::inverse(&self.object_to_world);
        let ray: Ray = world_to_object.transform_ray(r);
        let t_hit: Float = Sphere::nearest_t(&ray)?;
        let p_hit: Point3f = ray.position(t_hit);
        Some(HitRecord {
            p: self.object_to_world.transform_point(&p_hit),
            n: self
                .object_to_world
                .transform_normal(&sphere_normal(&p_hit, &ray.d)),
            uv: sphere_point_to_uv(&p_hit),
            t: t_hit,
            ray: *r,
            material: self.material,
        })
    }
    pub fn intersect_p(&self, r: &Ray) -> bool {
        let world_to_object = Transform::inverse(&self.object_to_world);
        Sphere::nearest_t(&world_to_object.transform_ray(r)).is_some()
    }
}

/// The outward normal of the unit sphere is the point itself, it is
/// flipped when the ray arrives from inside.
fn sphere_normal(p: &Point3f, ray_dir: &Vector3f) -> Normal3f {
    let n = Normal3f::new(p.x, p.y, p.z);
    if vec3_dot_vec3f(&Vector3f::from(*p), ray_dir) < 0.0 as Float {
        n
    } else {
        -n
    }
}

fn sphere_point_to_uv(p: &Point3f) -> Point2f {
    let mut u: Float = p.y.atan2(p.x) / (2.0 as Float * PI);
    if u < 0.0 as Float {
        u += 1.0 as Float;
    }
    Point2f {
        x: u,
        y: clamp_t(p.z, -1.0, 1.0).acos() / PI,
    }
}
