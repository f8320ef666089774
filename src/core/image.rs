//! High dynamic range images.
//!
//! An **HdrImage** stores one linear RGB color per pixel. Before it
//! can be written to a regular (8 bit per channel) image file it has
//! to be tone mapped:
//!
//! 1. [`HdrImage::normalize_image`] scales all pixels so that the
//!    average luminosity matches a given factor,
//! 2. [`HdrImage::clamp_image`] maps every channel into [0, 1),
//! 3. [`HdrImage::write_ldr_image`] applies gamma correction and
//!    writes the result with the `image` crate.

// std
use std::path::Path;
// others
use log::info;
// pbrt
use crate::core::pbrt::{clamp_t, Float, Spectrum};

/// Added to every luminosity to keep the logarithm finite for black
/// pixels.
pub const DEFAULT_DELTA: Float = 1e-10;

#[derive(Debug, Clone, PartialEq)]
pub struct HdrImage {
    pub width: usize,
    pub height: usize,
    /// row-major, row 0 is the top of the image
    pub pixels: Vec<Spectrum>,
}

impl HdrImage {
    /// A black image.
    pub fn new(width: usize, height: usize) -> Self {
        HdrImage {
            width,
            height,
            pixels: vec![Spectrum::default(); width * height],
        }
    }
    pub fn valid_coordinates(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }
    fn pixel_offset(&self, x: usize, y: usize) -> usize {
        assert!(
            self.valid_coordinates(x, y),
            "pixel ({}, {}) outside of {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }
    pub fn get_pixel(&self, x: usize, y: usize) -> Spectrum {
        self.pixels[self.pixel_offset(x, y)]
    }
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Spectrum) {
        let offset = self.pixel_offset(x, y);
        self.pixels[offset] = color;
    }
    /// Logarithmic average of the pixel luminosities.
    pub fn average_luminosity(&self, delta: Float) -> Float {
        if self.pixels.is_empty() {
            return delta;
        }
        let mut cumsum: f64 = 0.0;
        for pixel in &self.pixels {
            cumsum += ((delta + pixel.luminosity()) as f64).log10();
        }
        (10.0 as f64).powf(cumsum / self.pixels.len() as f64) as Float
    }
    /// Multiply every pixel by `factor / luminosity`. Without an
    /// explicit luminosity the average luminosity of the image is
    /// used.
    pub fn normalize_image(&mut self, factor: Float, luminosity: Option<Float>) {
        let luminosity: Float =
            luminosity.unwrap_or_else(|| self.average_luminosity(DEFAULT_DELTA));
        let scale: Float = factor / luminosity;
        for pixel in self.pixels.iter_mut() {
            *pixel *= scale;
        }
    }
    /// Map every channel x to x / (1 + x).
    pub fn clamp_image(&mut self) {
        for pixel in self.pixels.iter_mut() {
            for i in 0..3 {
                pixel.c[i] = clamp_channel(pixel.c[i]);
            }
        }
    }
    /// Convert to 8 bit RGB, the channels are expected to lie in
    /// [0, 1] already (see [`HdrImage::clamp_image`]).
    pub fn to_ldr(&self, gamma: Float) -> Vec<u8> {
        let mut buffer: Vec<u8> = Vec::with_capacity(self.pixels.len() * 3);
        let inv_gamma: Float = 1.0 as Float / gamma;
        for pixel in &self.pixels {
            for i in 0..3 {
                let value: Float = 255.0 as Float * pixel.c[i].max(0.0).powf(inv_gamma);
                buffer.push(clamp_t(value, 0.0, 255.0) as u8);
            }
        }
        buffer
    }
    /// Write an 8 bit image, the format is derived from the file
    /// extension.
    pub fn write_ldr_image<P: AsRef<Path>>(
        &self,
        path: P,
        gamma: Float,
    ) -> image::ImageResult<()> {
        let buffer = self.to_ldr(gamma);
        image::save_buffer(
            path.as_ref(),
            &buffer,
            self.width as u32,
            self.height as u32,
            image::ColorType::Rgb8,
        )?;
        info!("Wrote LDR image to {:?}", path.as_ref());
        Ok(())
    }
}

fn clamp_channel(x: Float) -> Float {
    x / (1.0 as Float + x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pbrt::EPSILON;

    #[test]
    fn image_creation() {
        let img = HdrImage::new(7, 4);
        assert_eq!(img.width, 7);
        assert_eq!(img.height, 4);
        assert_eq!(img.pixels.len(), 28);
        assert!(img.valid_coordinates(0, 0));
        assert!(img.valid_coordinates(6, 3));
        assert!(!img.valid_coordinates(7, 0));
        assert!(!img.valid_coordinates(0, 4));
    }

    #[test]
    fn pixel_access() {
        let mut img = HdrImage::new(7, 4);
        let color = Spectrum::rgb(1.0, 2.0, 3.0);
        img.set_pixel(3, 2, color);
        assert!(img.get_pixel(3, 2).is_close(&color, EPSILON));
        assert_eq!(img.pixel_offset(3, 2), 17);
        assert_eq!(img.pixel_offset(6, 3), 27);
    }

    #[test]
    #[should_panic]
    fn pixel_access_out_of_bounds() {
        let img = HdrImage::new(7, 4);
        img.get_pixel(7, 0);
    }

    #[test]
    fn average_luminosity() {
        let mut img = HdrImage::new(2, 1);
        img.set_pixel(0, 0, Spectrum::rgb(5.0, 10.0, 15.0));
        img.set_pixel(1, 0, Spectrum::rgb(500.0, 1000.0, 1500.0));
        assert!((img.average_luminosity(0.0) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn normalization() {
        let mut img = HdrImage::new(2, 1);
        img.set_pixel(0, 0, Spectrum::rgb(5.0, 10.0, 15.0));
        img.set_pixel(1, 0, Spectrum::rgb(500.0, 1000.0, 1500.0));
        img.normalize_image(1000.0, Some(100.0));
        assert!(img
            .get_pixel(0, 0)
            .is_close(&Spectrum::rgb(0.5e2, 1.0e2, 1.5e2), 1e-3));
        assert!(img
            .get_pixel(1, 0)
            .is_close(&Spectrum::rgb(0.5e4, 1.0e4, 1.5e4), 1e-1));
    }

    #[test]
    fn clamping() {
        let mut img = HdrImage::new(2, 1);
        img.set_pixel(0, 0, Spectrum::rgb(0.5e1, 1.0e1, 1.5e1));
        img.set_pixel(1, 0, Spectrum::rgb(0.5e3, 1.0e3, 1.5e3));
        img.clamp_image();
        for pixel in &img.pixels {
            for i in 0..3 {
                assert!(pixel.c[i] >= 0.0 && pixel.c[i] <= 1.0);
            }
        }
    }

    #[test]
    fn ldr_conversion() {
        let mut img = HdrImage::new(2, 1);
        img.set_pixel(0, 0, Spectrum::rgb(0.0, 0.5, 1.0));
        img.set_pixel(1, 0, Spectrum::rgb(0.25, 2.0, -1.0));
        assert_eq!(img.to_ldr(1.0), vec![0, 127, 255, 63, 255, 0]);
        assert_eq!(img.to_ldr(2.0)[3], 127);
    }
}
