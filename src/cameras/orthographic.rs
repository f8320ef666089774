// pbrt
use crate::core::error::ConfigError;
use crate::core::geometry::{Point3f, Ray, Vector3f};
use crate::core::pbrt::Float;
use crate::core::transform::Transform;

/// All rays are parallel to the x axis. The screen lies in the plane
/// x = -1, it is `2 * aspect_ratio` wide and 2 high.
#[derive(Debug, Copy, Clone)]
pub struct OrthographicCamera {
    pub aspect_ratio: Float,
    pub camera_to_world: Transform,
}

impl OrthographicCamera {
    pub fn new(aspect_ratio: Float, camera_to_world: Transform) -> Result<Self, ConfigError> {
        if !(aspect_ratio > 0.0 as Float) || !aspect_ratio.is_finite() {
            return Err(ConfigError::DegenerateCamera {
                aspect_ratio,
                distance: 1.0,
            });
        }
        Ok(OrthographicCamera {
            aspect_ratio,
            camera_to_world,
        })
    }
    pub fn fire_ray(&self, u: Float, v: Float) -> Ray {
        let ray = Ray::new(
            Point3f {
                x: -1.0,
                y: (1.0 - 2.0 * u) * self.aspect_ratio,
                z: 2.0 * v - 1.0,
            },
            Vector3f {
                x: 1.0,
                y: 0.0,
                z: 0.0,
            },
        );
        self.camera_to_world.transform_ray(&ray)
    }
}
