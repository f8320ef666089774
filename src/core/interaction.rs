//! The geometry of a particular point on a surface is represented by
//! a **HitRecord**. Having this abstraction lets the renderers work
//! with points on surfaces without needing to consider the particular
//! type of geometric shape the points lie on.
//!
//! A missed ray is expressed as `None` by the intersection routines,
//! a `HitRecord` therefore always describes a valid hit.

// pbrt
use crate::core::geometry::{Normal3f, Point2f, Point3f, Ray};
use crate::core::material::MaterialId;
use crate::core::pbrt::Float;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HitRecord {
    /// hit point in world space
    pub p: Point3f,
    /// surface normal in world space, facing against the ray
    pub n: Normal3f,
    /// surface coordinates
    pub uv: Point2f,
    pub t: Float,
    /// the ray which produced this hit
    pub ray: Ray,
    pub material: MaterialId,
}

impl HitRecord {
    pub fn is_close(&self, rhs: &HitRecord, epsilon: Float) -> bool {
        self.p.is_close(&rhs.p, epsilon)
            && self.n.is_close(&rhs.n, epsilon)
            && self.uv.is_close(&rhs.uv, epsilon)
            && (self.t - rhs.t).abs() < epsilon
            && self.ray.is_close(&rhs.ray, epsilon)
    }
}
