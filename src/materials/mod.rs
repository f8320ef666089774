//! # Materials
//!
//! The two BRDFs a **Material** can use:
//!
//! - DiffuseBrdf (matte surfaces)
//! - SpecularBrdf (perfect mirrors)

pub mod matte;
pub mod mirror;
