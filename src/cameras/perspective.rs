// pbrt
use crate::core::error::ConfigError;
use crate::core::geometry::{Point3f, Ray, Vector3f};
use crate::core::pbrt::{degrees, Float};
use crate::core::transform::Transform;

/// A pinhole camera at (-distance, 0, 0) looking along +x through a
/// screen in the plane x = 0.
#[derive(Debug, Copy, Clone)]
pub struct PerspectiveCamera {
    pub distance: Float,
    pub aspect_ratio: Float,
    pub camera_to_world: Transform,
}

impl PerspectiveCamera {
    pub fn new(
        distance: Float,
        aspect_ratio: Float,
        camera_to_world: Transform,
    ) -> Result<Self, ConfigError> {
        if !(aspect_ratio > 0.0 as Float)
            || !(distance > 0.0 as Float)
            || !aspect_ratio.is_finite()
            || !distance.is_finite()
        {
            return Err(ConfigError::DegenerateCamera {
                aspect_ratio,
                distance,
            });
        }
        Ok(PerspectiveCamera {
            distance,
            aspect_ratio,
            camera_to_world,
        })
    }
    pub fn fire_ray(&self, u: Float, v: Float) -> Ray {
        let ray = Ray::new(
            Point3f {
                x: -self.distance,
                y: 0.0,
                z: 0.0,
            },
            Vector3f {
                x: self.distance,
                y: (1.0 - 2.0 * u) * self.aspect_ratio,
                z: 2.0 * v - 1.0,
            },
        );
        self.camera_to_world.transform_ray(&ray)
    }
    /// Horizontal field of view in degrees.
    pub fn aperture_deg(&self) -> Float {
        2.0 as Float * degrees((self.aspect_ratio / self.distance).atan())
    }
}
