//! Careful abstraction of geometric shapes in a ray tracer is a key
//! component of a clean system design. Every shape is defined in a
//! fixed canonical form (unit sphere, xy-plane, axis-aligned box)
//! and placed in the world by its transformation. Intersection tests
//! transform the incoming ray into object space, solve the
//! intersection there and transform the results back.

// pbrt
use crate::core::geometry::Ray;
use crate::core::interaction::HitRecord;
use crate::core::material::MaterialId;
use crate::core::transform::Transform;
use crate::shapes::boxshape::AxisAlignedBox;
use crate::shapes::plane::Plane;
use crate::shapes::sphere::Sphere;

#[derive(Debug, Clone)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Box(AxisAlignedBox),
}

impl Shape {
    /// Full intersection query, `None` if the ray misses.
    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        match self {
            Shape::Sphere(shape) => shape.intersect(ray),
            Shape::Plane(shape) => shape.intersect(ray),
            Shape::Box(shape) => shape.intersect(ray),
        }
    }
    /// Does the ray hit the shape at all? Cheaper than
    /// [`Shape::intersect`], no surface data is computed.
    pub fn intersect_p(&self, ray: &Ray) -> bool {
        match self {
            Shape::Sphere(shape) => shape.intersect_p(ray),
            Shape::Plane(shape) => shape.intersect_p(ray),
            Shape::Box(shape) => shape.intersect_p(ray),
        }
    }
    pub fn get_object_to_world(&self) -> &Transform {
        match self {
            Shape::Sphere(shape) => &shape.object_to_world,
            Shape::Plane(shape) => &shape.object_to_world,
            Shape::Box(shape) => &shape.object_to_world,
        }
    }
    pub fn get_material(&self) -> MaterialId {
        match self {
            Shape::Sphere(shape) => shape.material,
            Shape::Plane(shape) => shape.material,
            Shape::Box(shape) => shape.material,
        }
    }
}

impl From<Sphere> for Shape {
    fn from(shape: Sphere) -> Self {
        Shape::Sphere(shape)
    }
}

impl From<Plane> for Shape {
    fn from(shape: Plane) -> Self {
        Shape::Plane(shape)
    }
}

impl From<AxisAlignedBox> for Shape {
    fn from(shape: AxisAlignedBox) -> Self {
        Shape::Box(shape)
    }
}
