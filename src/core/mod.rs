//! The core of the renderer: math, geometry, the scene description
//! shared by all renderers and the image handling.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod image;
pub mod integrator;
pub mod interaction;
pub mod material;
pub mod pbrt;
pub mod pfm;
pub mod rng;
pub mod shape;
pub mod spectrum;
pub mod texture;
pub mod tracer;
pub mod transform;
pub mod world;
