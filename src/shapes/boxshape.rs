// others
use strum::IntoEnumIterator;
// pbrt
use crate::core::geometry::{Normal3f, Point2f, Point3f, Ray, XYZEnum};
use crate::core::interaction::HitRecord;
use crate::core::material::MaterialId;
use crate::core::pbrt::Float;
use crate::core::transform::Transform;

/// Direction components smaller than this are treated as parallel
/// to a pair of slabs.
pub const SLAB_EPSILON: Float = 1e-8;

#[derive(Debug, Copy, Clone, PartialEq)]
enum Face {
    Min(XYZEnum),
    Max(XYZEnum),
}

/// An axis-aligned box spanned by two opposite corners (in object
/// space), by default the unit cube [0, 1]^3.
#[derive(Debug, Copy, Clone)]
pub struct AxisAlignedBox {
    pub p_min: Point3f,
    pub p_max: Point3f,
    pub object_to_world: Transform,
    pub material: MaterialId,
}

impl Default for AxisAlignedBox {
    fn default() -> Self {
        AxisAlignedBox {
            p_min: Point3f::new(0.0, 0.0, 0.0),
            p_max: Point3f::new(1.0, 1.0, 1.0),
            object_to_world: Transform::default(),
            material: MaterialId::default(),
        }
    }
}

impl AxisAlignedBox {
    /// The corners may be given in any order.
    pub fn new(
        p1: Point3f,
        p2: Point3f,
        object_to_world: Transform,
        material: MaterialId,
    ) -> Self {
        AxisAlignedBox {
            p_min: Point3f::new(p1.x.min(p2.x), p1.y.min(p2.y), p1.z.min(p2.z)),
            p_max: Point3f::new(p1.x.max(p2.x), p1.y.max(p2.y), p1.z.max(p2.z)),
            object_to_world,
            material,
        }
    }
    /// Slab method, returns the hit distance and the face hit.
    fn hit_t(&self, ray: &Ray) -> Option<(Float, Face)> {
        let mut t_near: Float = Float::NEG_INFINITY;
        let mut t_far: Float = Float::INFINITY;
        let mut near_face = Face::Min(XYZEnum::X);
        let mut far_face = Face::Max(XYZEnum::X);
        for axis in XYZEnum::iter() {
            let o: Float = ray.o[axis];
            let d: Float = ray.d[axis];
            let lo: Float = self.p_min[axis];
            let hi: Float = self.p_max[axis];
            if d.abs() < SLAB_EPSILON {
                // parallel to both slabs, the origin has to lie between them
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let mut t0: Float = (lo - o) / d;
            let mut t1: Float = (hi - o) / d;
            let mut face0 = Face::Min(axis);
            let mut face1 = Face::Max(axis);
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
                std::mem::swap(&mut face0, &mut face1);
            }
            if t0 > t_near {
                t_near = t0;
                near_face = face0;
            }
            if t1 < t_far {
                t_far = t1;
                far_face = face1;
            }
            if t_near > t_far {
                return None;
            }
        }
        if ray.in_range(t_near) {
            Some((t_near, near_face))
        } else if ray.in_range(t_far) {
            Some((t_far, far_face))
        } else {
            None
        }
    }
    /// All six faces are unfolded into a 4x3 cross:
    ///
    /// ```text
    ///      +z
    ///  -x  +y  +x  -y
    ///      -z
    /// ```
    fn face_to_uv(&self, p: &Point3f, face: Face) -> Point2f {
        let px: Float = (p.x - self.p_min.x) / (self.p_max.x - self.p_min.x);
        let py: Float = (p.y - self.p_min.y) / (self.p_max.y - self.p_min.y);
        let pz: Float = (p.z - self.p_min.z) / (self.p_max.z - self.p_min.z);
        let (col, row, s, t): (Float, Float, Float, Float) = match face {
            Face::Min(XYZEnum::X) => (0.0, 1.0, py, pz),
            Face::Max(XYZEnum::Y) => (1.0, 1.0, px, pz),
            Face::Max(XYZEnum::X) => (2.0, 1.0, 1.0 - py, pz),
            Face::Min(XYZEnum::Y) => (3.0, 1.0, 1.0 - px, pz),
            Face::Max(XYZEnum::Z) => (1.0, 2.0, px, py),
            Face::Min(XYZEnum::Z) => (1.0, 0.0, px, 1.0 - py),
        };
        Point2f {
            x: (col + s) / 4.0,
            y: (row + t) / 3.0,
        }
    }
    pub fn intersect(&self, r: &Ray) -> Option<HitRecord> {
        // transform _Ray_ to object space
        let world_to_object = Transform::inverse(&self.object_to_world);
        let ray: Ray = world_to_object.transform_ray(r);
        let (t_hit, face) = self.hit_t(&ray)?;
        let p_hit: Point3f = ray.position(t_hit);
        let axis = match face {
            Face::Min(axis) | Face::Max(axis) => axis,
        };
        // the normal opposes the ray
        let sign: Float = if ray.d[axis] > 0.0 as Float {
            -1.0
        } else {
            1.0
        };
        let n = match axis {
            XYZEnum::X => Normal3f::new(sign, 0.0, 0.0),
            XYZEnum::Y => Normal3f::new(0.0, sign, 0.0),
            XYZEnum::Z => Normal3f::new(0.0, 0.0, sign),
        };
        Some(HitRecord {
            p: self.object_to_world.transform_point(&p_hit),
            n: self.object_to_world.transform_normal(&n),
            uv: self.face_to_uv(&p_hit, face),
            t: t_hit,
            ray: *r,
            material: self.material,
        })
    }
    pub fn intersect_p(&self, r: &Ray) -> bool {
        let world_to_object = Transform::inverse(&self.object_to_world);
        self.hit_t(&world_to_object.transform_ray(r)).is_some()
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
    fn hit_from_above() {
        let unit_box = AxisAlignedBox::default();
        let hit = unit_box
            .intersect(&ray((0.5, 0.5, 2.0), (0.0, 0.0, -1.0)))
            .unwrap();
        assert!((hit.t - 1.0).abs() < EPSILON);
        assert!(hit.p.is_close(&Point3f::new(0.5, 0.5, 1.0), EPSILON));
        assert!(hit.n.is_close(&Normal3f::new(0.0, 0.0, 1.0), EPSILON));
        assert!(hit
            .uv
            .is_close(&Point2f::new(1.5 / 4.0, 2.5 / 3.0), EPSILON));
    }

    #[test]
    fn every_face_from_outside() {
        let unit_box = AxisAlignedBox::default();
        let cases: [((Float, Float, Float), (Float, Float, Float), Normal3f); 6] = [
            ((-1.0, 0.5, 0.5), (1.0, 0.0, 0.0), Normal3f::new(-1.0, 0.0, 0.0)),
            ((2.0, 0.5, 0.5), (-1.0, 0.0, 0.0), Normal3f::new(1.0, 0.0, 0.0)),
            ((0.5, -1.0, 0.5), (0.0, 1.0, 0.0), Normal3f::new(0.0, -1.0, 0.0)),
            ((0.5, 2.0, 0.5), (0.0, -1.0, 0.0), Normal3f::new(0.0, 1.0, 0.0)),
            ((0.5, 0.5, -1.0), (0.0, 0.0, 1.0), Normal3f::new(0.0, 0.0, -1.0)),
            ((0.5, 0.5, 2.0), (0.0, 0.0, -1.0), Normal3f::new(0.0, 0.0, 1.0)),
        ];
        for (o, d, n) in cases.iter() {
            let hit = unit_box.intersect(&ray(*o, *d)).unwrap();
            assert!((hit.t - 1.0).abs() < EPSILON);
            assert!(hit.n.is_close(n, EPSILON));
            assert!((0.0..=1.0).contains(&hit.uv.x));
            assert!((0.0..=1.0).contains(&hit.uv.y));
        }
    }

    #[test]
    fn hit_from_inside_uses_exit_face() {
        let unit_box = AxisAlignedBox::default();
        let hit = unit_box
            .intersect(&ray((0.5, 0.5, 0.5), (1.0, 0.0, 0.0)))
            .unwrap();
        assert!((hit.t - 0.5).abs() < EPSILON);
        assert!(hit.p.is_close(&Point3f::new(1.0, 0.5, 0.5), EPSILON));
        assert!(hit.n.is_close(&Normal3f::new(-1.0, 0.0, 0.0), EPSILON));
        assert!(hit
            .uv
            .is_close(&Point2f::new(2.5 / 4.0, 1.5 / 3.0), EPSILON));
    }

    #[test]
    fn misses() {
        let unit_box = AxisAlignedBox::default();
        // parallel to the x slabs but outside of them
        assert!(!unit_box.intersect_p(&ray((2.0, 0.5, 2.0), (0.0, 0.0, -1.0))));
        // passes diagonally beside the box
        assert!(!unit_box.intersect_p(&ray((2.0, -1.0, 0.5), (1.0, 1.0, 0.0))));
        // box is behind the ray
        assert!(!unit_box.intersect_p(&ray((0.5, 0.5, 2.0), (0.0, 0.0, 1.0))));
        assert!(unit_box.intersect_p(&ray((0.5, 0.5, 2.0), (0.1, 0.1, -1.0))));
    }

    #[test]
    fn custom_corners_and_transformation() {
        let b = AxisAlignedBox::new(
            Point3f::new(1.0, 1.0, 1.0),
            Point3f::new(-1.0, -1.0, -1.0),
            Transform::translate(&Vector3f::new(0.0, 0.0, 5.0)),
            MaterialId(2),
        );
        assert_eq!(b.p_min, Point3f::new(-1.0, -1.0, -1.0));
        let hit = b.intersect(&ray((0.0, 0.0, 10.0), (0.0, 0.0, -1.0))).unwrap();
        assert!((hit.t - 4.0).abs() < EPSILON);
        assert!(hit.p.is_close(&Point3f::new(0.0, 0.0, 6.0), EPSILON));
        assert!(hit.n.is_close(&Normal3f::new(0.0, 0.0, 1.0), EPSILON));
        assert_eq!(hit.material, MaterialId(2));
    }
}
