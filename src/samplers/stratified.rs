// pbrt
use crate::core::error::ConfigError;
use crate::core::geometry::Point2f;
use crate::core::pbrt::Float;
use crate::core::rng::Rng;

/// Splits a pixel into `samples_per_side` x `samples_per_side` cells
/// and places one jittered sample in each of them. With zero samples
/// per side only the pixel center is used.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct StratifiedSampler {
    pub samples_per_side: u32,
}

impl StratifiedSampler {
    pub fn new(samples_per_side: u32) -> Self {
        StratifiedSampler { samples_per_side }
    }
    /// Build a sampler for a total sample count, which has to be zero
    /// or a perfect square.
    pub fn from_samples_per_pixel(samples_per_pixel: u32) -> Result<Self, ConfigError> {
        let samples_per_side = (samples_per_pixel as f64).sqrt().round() as u32;
        if samples_per_side * samples_per_side != samples_per_pixel {
            return Err(ConfigError::NonSquareSamples(samples_per_pixel));
        }
        Ok(StratifiedSampler { samples_per_side })
    }
    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_side.max(1) * self.samples_per_side.max(1)
    }
    /// Sample offsets inside the pixel, both coordinates in [0, 1).
    pub fn get_pixel_samples(&self, rng: &mut Rng) -> Vec<Point2f> {
        if self.samples_per_side == 0 {
            return vec![Point2f { x: 0.5, y: 0.5 }];
        }
        let n = self.samples_per_side;
        let inv_n: Float = 1.0 as Float / n as Float;
        let mut samples: Vec<Point2f> = Vec::with_capacity((n * n) as usize);
        for inter_pixel_row in 0..n {
            for inter_pixel_col in 0..n {
                let u: Float = (inter_pixel_col as Float + rng.uniform_float()) * inv_n;
                let v: Float = (inter_pixel_row as Float + rng.uniform_float()) * inv_n;
                samples.push(Point2f { x: u, y: v });
            }
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_sample_per_cell() {
        let sampler = StratifiedSampler::new(4);
        let mut rng = Rng::new_with(42, 54);
        let samples = sampler.get_pixel_samples(&mut rng);
        assert_eq!(samples.len(), 16);
        let mut cells: Vec<(u32, u32)> = samples
            .iter()
            .map(|p| ((p.x * 4.0) as u32, (p.y * 4.0) as u32))
            .collect();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), 16);
    }

    #[test]
    fn pixel_center_without_supersampling() {
        let sampler = StratifiedSampler::default();
        let mut rng = Rng::new();
        assert_eq!(
            sampler.get_pixel_samples(&mut rng),
            vec![Point2f::new(0.5, 0.5)]
        );
        assert_eq!(sampler.samples_per_pixel(), 1);
    }

    #[test]
    fn sample_count_must_be_square() {
        assert_eq!(
            StratifiedSampler::from_samples_per_pixel(9).unwrap(),
            StratifiedSampler::new(3)
        );
        assert_eq!(
            StratifiedSampler::from_samples_per_pixel(0).unwrap(),
            StratifiedSampler::new(0)
        );
        assert_eq!(
            StratifiedSampler::from_samples_per_pixel(8).unwrap_err(),
            ConfigError::NonSquareSamples(8)
        );
    }
}
