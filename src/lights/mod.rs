//! In order for objects in a scene to be visible, there must be a
//! source of illumination so that some light is reflected from them
//! to the camera sensor. Besides emissive materials the only light
//! source is the
//!
//! - PointLight

pub mod point;
