//! The renderers compute the radiance along a single ray:
//!
//! - OnOffIntegrator
//! - FlatIntegrator
//! - PointLightIntegrator
//! - PathIntegrator
//!
//! ## On/Off
//!
//! Shows which pixels are covered by any shape at all. Useful to
//! check camera placement in a new scene.
//!
//! ## Flat
//!
//! Returns the surface color plus the emitted radiance of the first
//! hit and ignores all light transport, a fast preview of the
//! materials.
//!
//! ## Point Light
//!
//! Accounts only for direct lighting from the point lights of the
//! scene, light that has traveled directly from a light source to
//! the point being shaded, plus a constant ambient term.
//!
//! ## Path Tracing
//!
//! Path tracing recursively generates paths of scattering events
//! starting at the camera. Emissive surfaces act as light sources, the
//! point lights of the scene are ignored.

pub mod flat;
pub mod onoff;
pub mod path;
pub mod pointlight;
