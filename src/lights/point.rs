// pbrt
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::pbrt::{Float, Spectrum};

/// An isotropic point light source.
#[derive(Debug, Copy, Clone)]
pub struct PointLight {
    pub p_light: Point3f,
    pub color: Spectrum,
    /// Distance at which the light has its nominal intensity. Zero
    /// disables the inverse square falloff.
    pub linear_radius: Float,
}

impl PointLight {
    pub fn new(p_light: Point3f, color: Spectrum, linear_radius: Float) -> Self {
        PointLight {
            p_light,
            color,
            linear_radius,
        }
    }
    /// Intensity scale for a point at distance *distance*.
    pub fn falloff(&self, distance: Float) -> Float {
        if self.linear_radius > 0.0 as Float {
            let ratio: Float = self.linear_radius / distance;
            ratio * ratio
        } else {
            1.0 as Float
        }
    }
    /// Vector from the light towards *p*.
    pub fn to_point(&self, p: &Point3f) -> Vector3f {
        *p - self.p_light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pbrt::EPSILON;

    #[test]
    fn inverse_square_falloff() {
        let light = PointLight::new(Point3f::default(), Spectrum::new(1.0), 2.0);
        assert!((light.falloff(2.0) - 1.0).abs() < EPSILON);
        assert!((light.falloff(4.0) - 0.25).abs() < EPSILON);
        let no_falloff = PointLight::new(Point3f::default(), Spectrum::new(1.0), 0.0);
        assert!((no_falloff.falloff(100.0) - 1.0).abs() < EPSILON);
    }
}
