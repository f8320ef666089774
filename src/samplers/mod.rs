//! Sample placement inside a pixel:
//!
//! - StratifiedSampler

pub mod stratified;
