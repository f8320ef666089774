//! # rs_tracer
//!
//! A small offline ray tracer. A scene file describes shapes
//! (spheres, planes, boxes), materials, point lights and a camera;
//! the scene is rendered into a high dynamic range image by one of
//! four renderers:
//!
//! 1. [on/off][onoff] shows which pixels are covered by a shape
//! 2. [flat][flat] shows the surface colors without light transport
//! 3. [point light][pointlight] computes direct lighting only
//! 4. [path tracer][path] solves the rendering equation by Monte Carlo
//!    integration with Russian roulette
//!
//! The main render loop can be found [here].
//!
//! [onoff]: integrators/onoff/struct.OnOffIntegrator.html
//! [flat]: integrators/flat/struct.FlatIntegrator.html
//! [pointlight]: integrators/pointlight/struct.PointLightIntegrator.html
//! [path]: integrators/path/struct.PathIntegrator.html
//! [here]: core/tracer/struct.ImageTracer.html#method.fire_all_rays_parallel

#[macro_use]
extern crate impl_ops;

pub mod blockqueue;
pub mod cameras;
pub mod core;
pub mod integrators;
pub mod lights;
pub mod materials;
pub mod parser;
pub mod samplers;
pub mod shapes;
pub mod textures;
