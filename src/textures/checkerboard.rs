// pbrt
use crate::core::geometry::Point2f;
use crate::core::pbrt::Spectrum;

pub const DEFAULT_STEPS: u32 = 10;

/// A checkerboard with `num_of_steps` squares along each of the two
/// surface directions.
#[derive(Debug, Copy, Clone)]
pub struct CheckeredPigment {
    pub color1: Spectrum,
    pub color2: Spectrum,
    pub num_of_steps: u32,
}

impl CheckeredPigment {
    pub fn new(color1: Spectrum, color2: Spectrum, num_of_steps: u32) -> Self {
        CheckeredPigment {
            color1,
            color2,
            num_of_steps,
        }
    }
    pub fn get_color(&self, uv: &Point2f) -> Spectrum {
        let steps = self.num_of_steps as f64;
        let int_u: i64 = (uv.x as f64 * steps).floor() as i64;
        let int_v: i64 = (uv.y as f64 * steps).floor() as i64;
        if int_u.rem_euclid(2) == int_v.rem_euclid(2) {
            self.color1
        } else {
            self.color2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pbrt::EPSILON;

    #[test]
    fn alternates_colors() {
        let color1 = Spectrum::rgb(1.0, 2.0, 3.0);
        let color2 = Spectrum::rgb(10.0, 20.0, 30.0);
        let pigment = CheckeredPigment::new(color1, color2, 2);
        // with two steps the pattern is
        //   c1 c2
        //   c2 c1
        assert!(pigment
            .get_color(&Point2f::new(0.25, 0.25))
            .is_close(&color1, EPSILON));
        assert!(pigment
            .get_color(&Point2f::new(0.75, 0.25))
            .is_close(&color2, EPSILON));
        assert!(pigment
            .get_color(&Point2f::new(0.25, 0.75))
            .is_close(&color2, EPSILON));
        assert!(pigment
            .get_color(&Point2f::new(0.75, 0.75))
            .is_close(&color1, EPSILON));
    }

    #[test]
    fn negative_coordinates_keep_alternating() {
        let white = Spectrum::new(1.0);
        let black = Spectrum::new(0.0);
        let pigment = CheckeredPigment::new(white, black, DEFAULT_STEPS);
        assert!(pigment.get_color(&Point2f::new(-0.05, 0.05)).is_black());
        assert!(!pigment.get_color(&Point2f::new(-0.05, -0.05)).is_black());
    }
}
