//! The **ImageTracer** fires rays through every pixel of an image and
//! stores the color a renderer computes for them.
//!
//! Two render loops are provided:
//!
//! 1. [`ImageTracer::fire_all_rays`] visits the pixels one after the
//!    other on the calling thread,
//! 2. [`ImageTracer::fire_all_rays_parallel`] splits the image into
//!    tiles which are rendered by a pool of worker threads.
//!
//! In the parallel loop every tile owns a random number generator
//! seeded from its position, so the image does not depend on the
//! number of threads.

// others
use log::{info, warn};
use num::Zero;
// pbrt
use crate::blockqueue::BlockQueue;
use crate::core::camera::Camera;
use crate::core::geometry::{Point2f, Ray};
use crate::core::image::HdrImage;
use crate::core::pbrt::{Float, Spectrum};
use crate::core::rng::Rng;
use crate::samplers::stratified::StratifiedSampler;

pub const TILE_SIZE: u32 = 16;

/// Replace radiance values which can not be stored in an image by
/// black.
fn sanitize_radiance(l: Spectrum, col: usize, row: usize) -> Spectrum {
    let y: Float = l.y();
    if l.has_nans() {
        warn!(
            "Not-a-number radiance value returned for pixel ({:?}, {:?}). Setting to black.",
            col, row
        );
        Spectrum::default()
    } else if y < -10.0e-5 as Float {
        warn!(
            "Negative luminance value, {:?}, returned for pixel ({:?}, {:?}). Setting to black.",
            y, col, row
        );
        Spectrum::default()
    } else if y.is_infinite() {
        warn!(
            "Infinite luminance value returned for pixel ({:?}, {:?}). Setting to black.",
            col, row
        );
        Spectrum::default()
    } else {
        l
    }
}

struct RenderedTile {
    x0: usize,
    y0: usize,
    width: usize,
    pixels: Vec<Spectrum>,
}

pub struct ImageTracer {
    pub image: HdrImage,
    pub camera: Camera,
    pub sampler: StratifiedSampler,
    /// jitter source of the serial render loop
    pub rng: Rng,
}

impl ImageTracer {
    pub fn new(image: HdrImage, camera: Camera) -> Self {
        ImageTracer {
            image,
            camera,
            sampler: StratifiedSampler::default(),
            rng: Rng::new(),
        }
    }
    pub fn with_sampler(mut self, sampler: StratifiedSampler, rng: Rng) -> Self {
        self.sampler = sampler;
        self.rng = rng;
        self
    }
    /// Ray through the point (u_pixel, v_pixel) of pixel (col, row),
    /// where (0, 0) is the top left corner of the pixel.
    pub fn fire_ray(&self, col: usize, row: usize, u_pixel: Float, v_pixel: Float) -> Ray {
        fire_pixel_ray(
            &self.camera,
            (self.image.width, self.image.height),
            col,
            row,
            &Point2f::new(u_pixel, v_pixel),
        )
    }
    /// Render all pixels on the calling thread.
    pub fn fire_all_rays<F>(&mut self, mut func: F)
    where
        F: FnMut(&Ray) -> Spectrum,
    {
        for row in 0..self.image.height {
            for col in 0..self.image.width {
                let samples = self.sampler.get_pixel_samples(&mut self.rng);
                let mut cum_color = Spectrum::zero();
                for sample in &samples {
                    let ray = fire_pixel_ray(
                        &self.camera,
                        (self.image.width, self.image.height),
                        col,
                        row,
                        sample,
                    );
                    cum_color += func(&ray);
                }
                let color = cum_color / samples.len() as Float;
                self.image
                    .set_pixel(col, row, sanitize_radiance(color, col, row));
            }
        }
    }
    /// Render all pixels with *num_threads* worker threads (all cores
    /// for zero). Tile *i* (row-major) uses the random number
    /// generator `Rng::new_with(init_state, init_seq + i)` for its
    /// jitter and for *func*.
    pub fn fire_all_rays_parallel<F>(
        &mut self,
        func: F,
        num_threads: usize,
        init_state: u64,
        init_seq: u64,
    ) where
        F: Fn(&Ray, &mut Rng) -> Spectrum + Sync,
    {
        let num_cores: usize = if num_threads == 0 {
            num_cpus::get()
        } else {
            num_threads
        };
        info!("Rendering with {:?} thread(s) ...", num_cores);
        let width = self.image.width;
        let height = self.image.height;
        let block_queue = BlockQueue::new((width as u32, height as u32), (TILE_SIZE, TILE_SIZE));
        let bq = &block_queue;
        let func = &func;
        let camera = &self.camera;
        let sampler = &self.sampler;
        let image = &mut self.image;
        let result = crossbeam::scope(|scope| {
            let (pixel_tx, pixel_rx) = crossbeam_channel::bounded(num_cores);
            // spawn worker threads
            for _ in 0..num_cores {
                let pixel_tx = pixel_tx.clone();
                scope.spawn(move |_| {
                    for (tx, ty) in bq.iter() {
                        let mut rng = Rng::new_with(init_state, init_seq + bq.block_index((tx, ty)));
                        let x0: usize = (tx * TILE_SIZE) as usize;
                        let x1: usize = std::cmp::min(x0 + TILE_SIZE as usize, width);
                        let y0: usize = (ty * TILE_SIZE) as usize;
                        let y1: usize = std::cmp::min(y0 + TILE_SIZE as usize, height);
                        let mut pixels: Vec<Spectrum> = Vec::with_capacity((x1 - x0) * (y1 - y0));
                        for row in y0..y1 {
                            for col in x0..x1 {
                                let samples = sampler.get_pixel_samples(&mut rng);
                                let mut cum_color = Spectrum::zero();
                                for sample in &samples {
                                    let ray = fire_pixel_ray(camera, (width, height), col, row, sample);
                                    cum_color += func(&ray, &mut rng);
                                }
                                let color = cum_color / samples.len() as Float;
                                pixels.push(sanitize_radiance(color, col, row));
                            }
                        }
                        let tile = RenderedTile {
                            x0,
                            y0,
                            width: x1 - x0,
                            pixels,
                        };
                        // send the tile through the channel to the collector
                        if pixel_tx.send(tile).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(pixel_tx);
            // spawn thread to collect tiles into the image
            scope.spawn(move |_| {
                for _ in pbr::PbIter::new(0..bq.len()) {
                    let tile: RenderedTile = match pixel_rx.recv() {
                        Ok(tile) => tile,
                        Err(_) => break,
                    };
                    for (i, color) in tile.pixels.iter().enumerate() {
                        image.set_pixel(tile.x0 + i % tile.width, tile.y0 + i / tile.width, *color);
                    }
                }
            });
        });
        if let Err(panic) = result {
            std::panic::resume_unwind(panic);
        }
    }
}

/// Image plane coordinates run from (0, 0) at the bottom left to
/// (1, 1) at the top right corner, rows are counted from the top.
fn fire_pixel_ray(
    camera: &Camera,
    image_size: (usize, usize),
    col: usize,
    row: usize,
    pixel_sample: &Point2f,
) -> Ray {
    let u: Float = (col as Float + pixel_sample.x) / image_size.0 as Float;
    let v: Float = 1.0 as Float - (row as Float + pixel_sample.y) / image_size.1 as Float;
    camera.fire_ray(u, v)
}
