//! The three canonical shapes:
//!
//! - Sphere (unit sphere at the origin)
//! - Plane (the xy-plane)
//! - AxisAlignedBox (the unit cube unless other corners are given)

pub mod boxshape;
pub mod plane;
pub mod sphere;
