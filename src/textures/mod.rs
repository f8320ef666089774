//! A **Pigment** is one of a small, fixed set of color patterns:
//!
//! - UniformPigment
//! - CheckeredPigment
//! - ImagePigment

pub mod checkerboard;
pub mod imagemap;
pub mod uniform;
