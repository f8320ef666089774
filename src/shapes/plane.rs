// pbrt
use crate::core::geometry::{Normal3f, Point2f, Point3f, Ray};
use crate::core::interaction::HitRecord;
use crate::core::material::MaterialId;
use crate::core::pbrt::Float;
use crate::core::transform::Transform;

/// Rays whose direction has a smaller z component (in object space)
/// are considered parallel to the plane.
pub const PARALLEL_EPSILON: Float = 1e-5;

/// The infinite xy-plane through the origin.
#[derive(Debug, Default, Copy, Clone)]
pub struct Plane {
    pub object_to_world: Transform,
    pub material: MaterialId,
}

impl Plane {
    pub fn new(object_to_world: Transform, material: MaterialId) -> Self {
        Plane {
            object_to_world,
            material,
        }
    }
    fn hit_t(ray: &Ray) -> Option<Float> {
        if ray.d.z.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t: Float = -ray.o.z / ray.d.z;
        if ray.in_range(t) {
            Some(t)
        } else {
            None
        }
    }
    pub fn intersect(&self, r: &Ray) -> Option<HitRecord> {
        // transform _Ray_ to object space
        let world_to_object = Transform::inverse(&self.object_to_world);
        let ray: Ray = world_to_object.transform_ray(r);
        let t_hit: Float = Plane::hit_t(&ray)?;
        let p_hit: Point3f = ray.position(t_hit);
        let n = Normal3f {
            x: 0.0,
            y: 0.0,
            z: if ray.d.z < 0.0 as Float { 1.0 } else { -1.0 },
        };
        Some(HitRecord {
            p: self.object_to_world.transform_point(&p_hit),
            n: self.object_to_world.transform_normal(&n),
            uv: Point2f {
                x: p_hit.x - p_hit.x.floor(),
                y: p_hit.y - p_hit.y.floor(),
            },
            t: t_hit,
            ray: *r,
            material: self.material,
        })
    }
    pub fn intersect_p(&self, r: &Ray) -> bool {
        let world_to_object = Transform::inverse(&self.object_to_world);
        Plane::hit_t(&world_to_object.transform_ray(r)).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Vector3f;
    use crate::core::pbrt::EPSILON;

    fn ray(o: (Float, Float, Float), d: (Float, Float, Float)) -> Ray {
        Ray::new(Point3f::new(o.0, o.1, o.2), Vector3f::new(d.0, d.1, d.2))
    }

    #[test]
    fn hits_from_both_sides() {
        let plane = Plane::default();
        let hit = plane.intersect(&ray((0.0, 0.0, 1.0), (0.0, 0.0, -1.0))).unwrap();
        assert!(hit.p.is_close(&Point3f::new(0.0, 0.0, 0.0), EPSILON));
        assert!(hit.n.is_close(&Normal3f::new(0.0, 0.0, 1.0), EPSILON));
        assert!((hit.t - 1.0).abs() < EPSILON);
        let hit = plane.intersect(&ray((0.0, 0.0, -2.0), (0.0, 0.0, 1.0))).unwrap();
        assert!(hit.n.is_close(&Normal3f::new(0.0, 0.0, -1.0), EPSILON));
        assert!((hit.t - 2.0).abs() < EPSILON);
    }

    #[test]
    fn parallel_and_receding_rays_miss() {
        let plane = Plane::default();
        assert!(plane.intersect(&ray((0.0, 0.0, 1.0), (1.0, 0.0, 0.0))).is_none());
        assert!(!plane.intersect_p(&ray((0.0, 0.0, 1.0), (1.0, 0.0, 0.0))));
        assert!(!plane.intersect_p(&ray((0.0, 0.0, 1.0), (0.0, 0.0, 1.0))));
        assert!(!plane.intersect_p(&ray((0.0, 0.0, 1.0), (1.0, 0.0, 1e-6))));
        assert!(plane.intersect_p(&ray((0.0, 0.0, 1.0), (1.0, 0.0, -1.0))));
    }

    #[test]
    fn rotated_plane() {
        let plane = Plane::new(Transform::rotate_y(90.0).unwrap(), MaterialId(0));
        let hit = plane.intersect(&ray((1.0, 0.0, 0.0), (-1.0, 0.0, 0.0))).unwrap();
        assert!(hit.p.is_close(&Point3f::new(0.0, 0.0, 0.0), 1e-4));
        assert!(hit.n.is_close(&Normal3f::new(1.0, 0.0, 0.0), 1e-4));
        assert!((hit.t - 1.0).abs() < 1e-4);
        assert!(!plane.intersect_p(&ray((0.0, 0.0, 1.0), (0.0, 0.0, 1.0))));
    }

    #[test]
    fn surface_coordinates_tile() {
        let plane = Plane::default();
        let cases: [((Float, Float), (Float, Float)); 3] = [
            ((0.0, 0.0), (0.0, 0.0)),
            ((0.25, 0.75), (0.25, 0.75)),
            ((4.25, -3.75), (0.25, 0.25)),
        ];
        for ((x, y), (u, v)) in cases.iter() {
            let hit = plane.intersect(&ray((*x, *y, 1.0), (0.0, 0.0, -1.0))).unwrap();
            assert!(hit.uv.is_close(&Point2f::new(*u, *v), EPSILON));
        }
    }
}
