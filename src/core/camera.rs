//! A **Camera** maps normalized screen coordinates to rays in world
//! space. The screen coordinates (u, v) both run from 0 to 1, (0, 0)
//! is the bottom left and (1, 1) the top right corner of the image.

// pbrt
use crate::cameras::orthographic::OrthographicCamera;
use crate::cameras::perspective::PerspectiveCamera;
use crate::core::geometry::Ray;
use crate::core::pbrt::Float;
use crate::core::transform::Transform;

#[derive(Debug, Copy, Clone)]
pub enum Camera {
    Orthogonal(OrthographicCamera),
    Perspective(PerspectiveCamera),
}

impl Camera {
    pub fn fire_ray(&self, u: Float, v: Float) -> Ray {
        match self {
            Camera::Orthogonal(camera) => camera.fire_ray(u, v),
            Camera::Perspective(camera) => camera.fire_ray(u, v),
        }
    }
    pub fn get_camera_to_world(&self) -> &Transform {
        match self {
            Camera::Orthogonal(camera) => &camera.camera_to_world,
            Camera::Perspective(camera) => &camera.camera_to_world,
        }
    }
    pub fn get_aspect_ratio(&self) -> Float {
        match self {
            Camera::Orthogonal(camera) => camera.aspect_ratio,
            Camera::Perspective(camera) => camera.aspect_ratio,
        }
    }
    /// Apply an additional transformation after the camera's own one.
    pub fn transformed(&self, world: &Transform) -> Camera {
        match self {
            Camera::Orthogonal(camera) => {
                let mut camera = *camera;
                camera.camera_to_world = *world * camera.camera_to_world;
                Camera::Orthogonal(camera)
            }
            Camera::Perspective(camera) => {
                let mut camera = *camera;
                camera.camera_to_world = *world * camera.camera_to_world;
                Camera::Perspective(camera)
            }
        }
    }
}

impl From<OrthographicCamera> for Camera {
    fn from(camera: OrthographicCamera) -> Self {
        Camera::Orthogonal(camera)
    }
}

impl From<PerspectiveCamera> for Camera {
    fn from(camera: PerspectiveCamera) -> Self {
        Camera::Perspective(camera)
    }
}
