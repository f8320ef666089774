//! Error taxonomy of the renderer.
//!
//! Malformed image files surface as [`PfmError`], invalid render
//! parameters as [`ConfigError`] and problems found while reading a
//! scene description as [`GrammarError`]. Geometric degeneracies
//! (rays parallel to a plane, tangent rays, ...) are not errors at
//! all, shapes simply report no intersection.

// others
use thiserror::Error;
// pbrt
use crate::core::pbrt::Float;

/// Problems while decoding a PFM file.
#[derive(Error, Debug)]
pub enum PfmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid magic in PFM file, expected \"PF\"")]
    InvalidMagic,
    #[error("invalid image size specification: {0:?}")]
    InvalidSize(String),
    #[error("invalid endianness specification: {0:?}")]
    InvalidEndianness(String),
    #[error("not enough pixel data in PFM file")]
    MissingData,
}

/// Render parameters which can not be used as given.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("rotation angle {0} is out of range, at most 360 degrees are allowed")]
    RotationOutOfRange(Float),
    #[error("samples per pixel ({0}) must be zero or a perfect square")]
    NonSquareSamples(u32),
    #[error("degenerate camera: aspect ratio {aspect_ratio}, screen distance {distance}")]
    DegenerateCamera { aspect_ratio: Float, distance: Float },
    #[error("the path tracer needs at least one ray per bounce")]
    ZeroRays,
}

/// An error located somewhere in a scene description.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{line}:{col}: {message}")]
pub struct GrammarError {
    pub line: usize,
    pub col: usize,
    pub message: String,
}

impl GrammarError {
    pub fn new(line: usize, col: usize, message: impl Into<String>) -> Self {
        GrammarError {
            line,
            col,
            message: message.into(),
        }
    }
}
