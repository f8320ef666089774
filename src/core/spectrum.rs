//! Colors are stored as linear RGB triples. There is no spectral
//! sampling, every light transport computation works on the three
//! channels independently.

// std
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Sub};
// others
use num::Zero;
// pbrt
use crate::core::pbrt::clamp_t;
use crate::core::pbrt::Float;

#[derive(Debug, Default, Copy, Clone)]
pub struct RGBSpectrum {
    pub c: [Float; 3],
}

impl RGBSpectrum {
    pub fn new(v: Float) -> Self {
        RGBSpectrum { c: [v, v, v] }
    }
    pub fn rgb(r: Float, g: Float, b: Float) -> RGBSpectrum {
        RGBSpectrum { c: [r, g, b] }
    }
    pub fn r(&self) -> Float {
        self.c[0]
    }
    pub fn g(&self) -> Float {
        self.c[1]
    }
    pub fn b(&self) -> Float {
        self.c[2]
    }
    /// Brightness of a pixel, used by tone mapping. Defined as the
    /// mean of the brightest and the darkest channel.
    pub fn luminosity(&self) -> Float {
        (self.max_component_value() + self.min_component_value()) * 0.5 as Float
    }
    pub fn y(&self) -> Float {
        let y_weight: [Float; 3] = [0.212_671, 0.715_160, 0.072_169];
        y_weight[0] * self.c[0] + y_weight[1] * self.c[1] + y_weight[2] * self.c[2]
    }
    pub fn is_black(&self) -> bool {
        self.c.iter().all(|v| *v == 0.0 as Float)
    }
    pub fn clamp(&self, low: Float, high: Float) -> RGBSpectrum {
        RGBSpectrum {
            c: [
                clamp_t(self.c[0], low, high),
                clamp_t(self.c[1], low, high),
                clamp_t(self.c[2], low, high),
            ],
        }
    }
    pub fn max_component_value(&self) -> Float {
        self.c[0].max(self.c[1].max(self.c[2]))
    }
    pub fn min_component_value(&self) -> Float {
        self.c[0].min(self.c[1].min(self.c[2]))
    }
    pub fn has_nans(&self) -> bool {
        self.c.iter().any(|v| v.is_nan())
    }
    /// Compare channel by channel with an absolute tolerance.
    pub fn is_close(&self, rhs: &RGBSpectrum, epsilon: Float) -> bool {
        (0..3).all(|i| (self.c[i] - rhs.c[i]).abs() < epsilon)
    }
}

impl PartialEq for RGBSpectrum {
    fn eq(&self, rhs: &RGBSpectrum) -> bool {
        self.c == rhs.c
    }
}

impl Add for RGBSpectrum {
    type Output = RGBSpectrum;
    fn add(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum {
            c: [
                self.c[0] + rhs.c[0],
                self.c[1] + rhs.c[1],
                self.c[2] + rhs.c[2],
            ],
        }
    }
}

impl AddAssign for RGBSpectrum {
    fn add_assign(&mut self, rhs: RGBSpectrum) {
        self.c[0] += rhs.c[0];
        self.c[1] += rhs.c[1];
        self.c[2] += rhs.c[2];
    }
}

impl Mul for RGBSpectrum {
    type Output = RGBSpectrum;
    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum {
            c: [
                self.c[0] * rhs.c[0],
                self.c[1] * rhs.c[1],
                self.c[2] * rhs.c[2],
            ],
        }
    }
}

impl Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    fn mul(self, rhs: Float) -> RGBSpectrum {
        RGBSpectrum {
            c: [self.c[0] * rhs, self.c[1] * rhs, self.c[2] * rhs],
        }
    }
}

impl MulAssign for RGBSpectrum {
    fn mul_assign(&mut self, rhs: RGBSpectrum) {
        self.c[0] *= rhs.c[0];
        self.c[1] *= rhs.c[1];
        self.c[2] *= rhs.c[2];
    }
}

impl MulAssign<Float> for RGBSpectrum {
    fn mul_assign(&mut self, rhs: Float) {
        self.c[0] *= rhs;
        self.c[1] *= rhs;
        self.c[2] *= rhs;
    }
}

impl Sub for RGBSpectrum {
    type Output = RGBSpectrum;
    fn sub(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum {
            c: [
                self.c[0] - rhs.c[0],
                self.c[1] - rhs.c[1],
                self.c[2] - rhs.c[2],
            ],
        }
    }
}

impl Div<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    fn div(self, rhs: Float) -> RGBSpectrum {
        assert_ne!(rhs, 0.0 as Float);
        assert!(!rhs.is_nan(), "rhs is NaN");
        let inv: Float = 1.0 as Float / rhs;
        RGBSpectrum {
            c: [self.c[0] * inv, self.c[1] * inv, self.c[2] * inv],
        }
    }
}

impl Zero for RGBSpectrum {
    fn zero() -> RGBSpectrum {
        RGBSpectrum::new(0.0 as Float)
    }

    fn is_zero(&self) -> bool {
        self.is_black()
    }
}

impl Index<usize> for RGBSpectrum {
    type Output = Float;
    fn index(&self, index: usize) -> &Float {
        match index {
            0 => &self.c[0],
            1 => &self.c[1],
            2 => &self.c[2],
            _ => panic!("Check failed: i >= 0 && i <= 2"),
        }
    }
}

impl IndexMut<usize> for RGBSpectrum {
    fn index_mut(&mut self, index: usize) -> &mut Float {
        match index {
            0 => &mut self.c[0],
            1 => &mut self.c[1],
            2 => &mut self.c[2],
            _ => panic!("Check failed: i >= 0 && i <= 2"),
        }
    }
}

impl From<Float> for RGBSpectrum {
    fn from(f: Float) -> Self {
        RGBSpectrum::new(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pbrt::{Spectrum, EPSILON};

    #[test]
    fn channel_arithmetic() {
        let c1 = Spectrum::rgb(1.0, 2.0, 3.0);
        let c2 = Spectrum::rgb(5.0, 6.0, 7.0);
        assert!((c1 + c2).is_close(&Spectrum::rgb(6.0, 8.0, 10.0), EPSILON));
        assert!((c2 - c1).is_close(&Spectrum::rgb(4.0, 4.0, 4.0), EPSILON));
        assert!((c1 * c2).is_close(&Spectrum::rgb(5.0, 12.0, 21.0), EPSILON));
        assert!((c1 * 2.0).is_close(&Spectrum::rgb(2.0, 4.0, 6.0), EPSILON));
        assert!(!(c1 + c2).is_close(&Spectrum::rgb(6.0, 8.0, 11.0), EPSILON));
    }

    #[test]
    fn luminosity_is_mean_of_extremes() {
        assert!((Spectrum::rgb(1.0, 2.0, 3.0).luminosity() - 2.0).abs() < EPSILON);
        assert!((Spectrum::rgb(9.0, 5.0, 7.0).luminosity() - 7.0).abs() < EPSILON);
    }

    #[test]
    fn zero_is_black() {
        assert!(Spectrum::zero().is_black());
        assert!(!Spectrum::rgb(0.0, 0.1, 0.0).is_zero());
        let half = Spectrum::new(2.0) / 4.0;
        assert!(half.is_close(&Spectrum::new(0.5), EPSILON));
    }
}
