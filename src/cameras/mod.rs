//! The two camera models:
//!
//! - OrthographicCamera
//! - PerspectiveCamera

pub mod orthographic;
pub mod perspective;
