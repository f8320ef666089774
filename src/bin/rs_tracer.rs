//! Command line front end: render a scene file or convert a PFM image
//! into a regular 8 bit image.

// std
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
// others
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};
// pbrt
use rs_tracer::cameras::perspective::PerspectiveCamera;
use rs_tracer::core::camera::Camera;
use rs_tracer::core::geometry::Vector3f;
use rs_tracer::core::image::HdrImage;
use rs_tracer::core::integrator::Integrator;
use rs_tracer::core::pbrt::{Float, Spectrum};
use rs_tracer::core::pfm::{load_pfm, save_pfm, Endianness};
use rs_tracer::core::rng::Rng;
use rs_tracer::core::tracer::ImageTracer;
use rs_tracer::core::transform::Transform;
use rs_tracer::integrators::flat::FlatIntegrator;
use rs_tracer::integrators::onoff::OnOffIntegrator;
use rs_tracer::integrators::path::PathIntegrator;
use rs_tracer::integrators::pointlight::PointLightIntegrator;
use rs_tracer::parser::parse_scene;
use rs_tracer::samplers::stratified::StratifiedSampler;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Copy, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Algorithm {
    #[value(name = "onoff")]
    OnOff,
    #[value(name = "flat")]
    Flat,
    #[value(name = "pointlight")]
    PointLight,
    #[value(name = "pathtracer")]
    PathTracer,
}

/// Render scene files with a small ray tracer.
#[derive(Parser)]
#[command(name = "rs_tracer", version = VERSION)]
struct Cli {
    /// Set the logging level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a scene file into a PFM and an LDR image
    Render(RenderArgs),
    /// Tone map a PFM file into an LDR image (PNG, JPEG, ...)
    Pfm2ldr(Pfm2LdrArgs),
}

#[derive(clap::Args)]
struct RenderArgs {
    /// The scene file to render
    scene: PathBuf,
    /// Width of the image
    #[arg(long, default_value_t = 640)]
    width: usize,
    /// Height of the image
    #[arg(long, default_value_t = 480)]
    height: usize,
    /// Rendering algorithm
    #[arg(long, value_enum, default_value_t = Algorithm::PathTracer)]
    algorithm: Algorithm,
    /// Additional rotation of the camera around the z axis (degrees)
    #[arg(long, default_value_t = 0.0)]
    angle_deg: Float,
    /// Samples per pixel, zero or a perfect square (0 shoots through the pixel centers)
    #[arg(long, default_value_t = 0)]
    samples_per_pixel: u32,
    /// Number of rays scattered at every bounce (path tracer)
    #[arg(long, default_value_t = 10)]
    num_of_rays: u32,
    /// Maximum path length (path tracer)
    #[arg(long, default_value_t = 3)]
    max_depth: u32,
    /// Path length at which Russian roulette starts (path tracer)
    #[arg(long, default_value_t = 3)]
    russian_roulette_limit: u32,
    /// Initial state of the random number generator
    #[arg(long, default_value_t = 42)]
    init_state: u64,
    /// Sequence of the random number generator
    #[arg(long, default_value_t = 54)]
    init_seq: u64,
    /// Declare a float variable, overriding the scene file (NAME:VALUE)
    #[arg(long = "declare-float", value_name = "NAME:VALUE")]
    declare_float: Vec<String>,
    /// Name of the HDR output file
    #[arg(long, default_value = "output.pfm")]
    pfm_output: PathBuf,
    /// Name of the LDR output file
    #[arg(long, default_value = "output.png")]
    png_output: PathBuf,
    /// Average luminosity of the tone mapped image
    #[arg(long, default_value_t = 0.2)]
    luminosity_factor: Float,
    /// Gamma correction of the LDR image
    #[arg(long, default_value_t = 1.0)]
    gamma: Float,
    /// Use specified number of threads for rendering (0 = all cores)
    #[arg(long, default_value_t = 0)]
    nthreads: usize,
}

#[derive(clap::Args)]
struct Pfm2LdrArgs {
    /// The PFM file to read
    input: PathBuf,
    /// The LDR file to write
    output: PathBuf,
    /// Average luminosity of the tone mapped image
    #[arg(long, default_value_t = 0.2)]
    factor: Float,
    /// Gamma correction of the LDR image
    #[arg(long, default_value_t = 1.0)]
    gamma: Float,
}

fn parse_declared_floats(declarations: &[String]) -> Result<HashMap<String, Float>> {
    let mut variables: HashMap<String, Float> = HashMap::new();
    for declaration in declarations {
        let mut parts = declaration.splitn(2, ':');
        let name = parts.next().unwrap_or("").trim();
        let value = match parts.next() {
            Some(value) => value.trim(),
            None => bail!("invalid float declaration {:?}, expected NAME:VALUE", declaration),
        };
        if name.is_empty() {
            bail!("missing variable name in {:?}", declaration);
        }
        let value: Float = value
            .parse()
            .with_context(|| format!("invalid value for variable {:?}", name))?;
        variables.insert(name.to_string(), value);
    }
    Ok(variables)
}

fn tone_map(image: &mut HdrImage, factor: Float, gamma: Float, output: &Path) -> Result<()> {
    image.normalize_image(factor, None);
    image.clamp_image();
    image
        .write_ldr_image(output, gamma)
        .with_context(|| format!("can not write {:?}", output))?;
    Ok(())
}

fn render(args: RenderArgs) -> Result<()> {
    if args.width == 0 || args.height == 0 {
        bail!("image size {}x{} is empty", args.width, args.height);
    }
    let variables = parse_declared_floats(&args.declare_float)?;
    let sampler = StratifiedSampler::from_samples_per_pixel(args.samples_per_pixel)?;
    let input = fs::read_to_string(&args.scene)
        .with_context(|| format!("can not read scene file {:?}", args.scene))?;
    let scene = parse_scene(&input, &variables)
        .with_context(|| format!("invalid scene file {:?}", args.scene))?;
    let camera: Camera = match scene.camera {
        Some(camera) => camera,
        None => {
            info!("No camera in scene, using the default perspective camera");
            Camera::from(PerspectiveCamera::new(
                1.0,
                args.width as Float / args.height as Float,
                Transform::translate(&Vector3f::new(-1.0, 0.0, 1.0)),
            )?)
        }
    };
    let camera = camera.transformed(&Transform::rotate_z(args.angle_deg)?);
    let integrator: Integrator = match args.algorithm {
        Algorithm::OnOff => Integrator::from(OnOffIntegrator::default()),
        Algorithm::Flat => Integrator::from(FlatIntegrator::default()),
        Algorithm::PointLight => Integrator::from(PointLightIntegrator::default()),
        Algorithm::PathTracer => Integrator::from(PathIntegrator::new(
            Spectrum::default(),
            args.num_of_rays,
            args.max_depth,
            args.russian_roulette_limit,
        )?),
    };
    info!(
        "Rendering {:?} ({}x{}, {} sample(s) per pixel) with the {} renderer",
        args.scene,
        args.width,
        args.height,
        sampler.samples_per_pixel(),
        integrator.name()
    );
    let world = &scene.world;
    let mut tracer = ImageTracer::new(HdrImage::new(args.width, args.height), camera)
        .with_sampler(sampler, Rng::new_with(args.init_state, args.init_seq));
    let start = Instant::now();
    tracer.fire_all_rays_parallel(
        |ray, rng| integrator.li(ray, world, rng),
        args.nthreads,
        args.init_state,
        args.init_seq,
    );
    info!("Rendering took {:.3} s", start.elapsed().as_secs_f64());
    save_pfm(&tracer.image, &args.pfm_output, Endianness::Little)
        .with_context(|| format!("can not write {:?}", args.pfm_output))?;
    tone_map(
        &mut tracer.image,
        args.luminosity_factor,
        args.gamma,
        &args.png_output,
    )
}

fn pfm2ldr(args: Pfm2LdrArgs) -> Result<()> {
    let mut image =
        load_pfm(&args.input).with_context(|| format!("can not read {:?}", args.input))?;
    info!(
        "Read {:?} ({}x{})",
        args.input, image.width, image.height
    );
    tone_map(&mut image, args.factor, args.gamma, &args.output)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();
    info!(
        "rs_tracer version {} [Detected {} cores]",
        VERSION,
        num_cpus::get()
    );
    match args.command {
        Command::Render(render_args) => render(render_args),
        Command::Pfm2ldr(pfm_args) => pfm2ldr(pfm_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_floats() {
        let variables =
            parse_declared_floats(&["clock:150".to_string(), " x : -1.5 ".to_string()]).unwrap();
        assert_eq!(variables["clock"], 150.0);
        assert_eq!(variables["x"], -1.5);
        assert!(parse_declared_floats(&["clock".to_string()]).is_err());
        assert!(parse_declared_floats(&[":1".to_string()]).is_err());
        assert!(parse_declared_floats(&["a:b".to_string()]).is_err());
    }

    #[test]
    fn command_line() {
        let cli = Cli::try_parse_from(&[
            "rs_tracer",
            "render",
            "scene.txt",
            "--algorithm",
            "pointlight",
            "--samples-per-pixel",
            "9",
            "--declare-float",
            "clock:10",
        ])
        .unwrap();
        match cli.command {
            Command::Render(args) => {
                assert!(matches!(args.algorithm, Algorithm::PointLight));
                assert_eq!(args.samples_per_pixel, 9);
                assert_eq!(args.width, 640);
                assert_eq!(args.declare_float, vec!["clock:10".to_string()]);
            }
            _ => panic!("render expected"),
        }
        assert!(Cli::try_parse_from(&["rs_tracer", "pfm2ldr", "in.pfm", "out.png"]).is_ok());
    }
}
