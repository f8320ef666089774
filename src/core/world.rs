//! # World
//!
//! As the scene file is parsed, objects are created that represent
//! the lights and geometric shapes in the scene. These are all stored
//! in the **World** object, together with the materials the shapes
//! refer to. Once rendering starts the world is only read.
//!
//! Every query is a linear scan over all shapes.

// pbrt
use crate::core::geometry::{Point3f, Ray, Vector3f};
use crate::core::interaction::HitRecord;
use crate::core::material::{Material, MaterialId};
use crate::core::pbrt::Float;
use crate::core::shape::Shape;
use crate::lights::point::PointLight;

#[derive(Debug, Clone, Default)]
pub struct World {
    pub shapes: Vec<Shape>,
    pub lights: Vec<PointLight>,
    pub materials: Vec<Material>,
}

impl World {
    pub fn new() -> Self {
        World::default()
    }
    pub fn add_shape<S: Into<Shape>>(&mut self, shape: S) {
        self.shapes.push(shape.into());
    }
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }
    /// Store a material and return the id shapes use to refer to it.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }
    /// Closest hit along the ray, its normal has unit length.
    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        assert_ne!(ray.d, Vector3f::default());
        let mut closest: Option<HitRecord> = None;
        for shape in &self.shapes {
            if let Some(hit) = shape.intersect(ray) {
                match closest {
                    Some(ref best) if best.t <= hit.t => {}
                    _ => closest = Some(hit),
                }
            }
        }
        closest.map(|mut hit| {
            hit.n = hit.n.normalize();
            hit
        })
    }
    /// Does any shape block the ray?
    pub fn intersect_p(&self, ray: &Ray) -> bool {
        self.shapes.iter().any(|shape| shape.intersect_p(ray))
    }
    /// Can *observer* see *point*? Shapes closer than a small offset
    /// to the observer and the point itself do not count as blockers.
    pub fn is_point_visible(&self, point: &Point3f, observer: &Point3f) -> bool {
        let direction: Vector3f = *point - *observer;
        let distance: Float = direction.length();
        let ray = Ray {
            o: *observer,
            d: direction,
            t_min: 1e-2 as Float / distance,
            t_max: 1.0,
            depth: 0,
        };
        !self.intersect_p(&ray)
    }
}
