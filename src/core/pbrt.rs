//! Type definitions of Float and Spectrum, otherwise constants and
//! functions which can be used almost everywhere else in the code.

// std
use std::f32::consts::PI;
// pbrt
use crate::core::spectrum::RGBSpectrum;

pub type Spectrum = RGBSpectrum;

pub type Float = f32;

pub const INV_PI: Float = 0.318_309_886_183_790_671_54;
pub const INV_2_PI: Float = 0.159_154_943_091_895_335_77;

/// Tolerance used when comparing floating point results.
pub const EPSILON: Float = 1.0e-5;

/// Clamp the given value *val* to lie between the values *low* and *high*.
pub fn clamp_t<T>(val: T, low: T, high: T) -> T
where
    T: PartialOrd,
{
    let r: T;
    if val < low {
        r = low;
    } else if val > high {
        r = high;
    } else {
        r = val;
    }
    r
}

/// Convert from angles expressed in degrees to radians.
pub fn radians(deg: Float) -> Float {
    (PI / 180.0) * deg
}

/// Convert from angles expressed in radians to degrees.
pub fn degrees(rad: Float) -> Float {
    (180.0 / PI) * rad
}

/// Compare two floats with a given absolute tolerance.
pub fn is_close(a: Float, b: Float, epsilon: Float) -> bool {
    (a - b).abs() < epsilon
}

/// Find solution(s) of the quadratic equation at<sup>2</sup> + bt +
/// c = 0. A zero (or negative) discriminant is reported as no
/// solution, tangent rays do not count as hits.
pub fn quadratic(a: Float, b: Float, c: Float, t0: &mut Float, t1: &mut Float) -> bool {
    // find quadratic discriminant
    let discrim: f64 = (b as f64) * (b as f64) - 4.0 * (a as f64) * (c as f64);
    if discrim <= 0.0 {
        false
    } else {
        let root_discrim: f64 = discrim.sqrt();
        // compute quadratic _t_ values
        let q = if b < 0.0 {
            -0.5 * (b as f64 - root_discrim)
        } else {
            -0.5 * (b as f64 + root_discrim)
        };
        *t0 = (q / a as f64) as Float;
        *t1 = (c as f64 / q) as Float;
        if *t0 > *t1 {
            std::mem::swap(&mut (*t0), &mut (*t1))
        }
        true
    }
}
