//! Reading of scene descriptions.
//!
//! The grammar lives in `scene.pest`, a small example:
//!
//! ```text
//! # comments run to the end of the line
//! float clock(150)
//!
//! material sky_material(
//!     diffuse(uniform(<0, 0, 0>)),
//!     uniform(<0.7, 0.5, 1>)
//! )
//! material ground_material(
//!     diffuse(checkered(<0.3, 0.5, 0.1>, <0.1, 0.2, 0.5>, 4)),
//!     uniform(<0, 0, 0>)
//! )
//!
//! plane(sky_material, translation([0, 0, 100]) * rotation_y(clock))
//! plane(ground_material, identity)
//! sphere(ground_material, translation([0, 0, 1]))
//! point_light([-30, 30, 30], <1, 1, 1>, 0)
//!
//! camera(perspective, rotation_z(30) * translation([-4, 0, 1]), 1.0, 2.0)
//! ```
//!
//! Numbers can be given literally or by the name of a float variable.
//! Variables passed in from the command line win over the scene file:
//! their declarations in the file are skipped, every other variable
//! may only be declared once.

// std
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
// others
use log::debug;
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;
// pbrt
use crate::cameras::orthographic::OrthographicCamera;
use crate::cameras::perspective::PerspectiveCamera;
use crate::core::camera::Camera;
use crate::core::error::GrammarError;
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::image::HdrImage;
use crate::core::material::{Brdf, Material, MaterialId};
use crate::core::pbrt::{Float, Spectrum};
use crate::core::pfm::load_pfm;
use crate::core::texture::Pigment;
use crate::core::transform::Transform;
use crate::core::world::World;
use crate::lights::point::PointLight;
use crate::materials::matte::DiffuseBrdf;
use crate::materials::mirror::SpecularBrdf;
use crate::shapes::boxshape::AxisAlignedBox;
use crate::shapes::plane::Plane;
use crate::shapes::sphere::Sphere;
use crate::textures::checkerboard::CheckeredPigment;
use crate::textures::imagemap::ImagePigment;
use crate::textures::uniform::UniformPigment;

#[derive(Parser)]
#[grammar = "parser/scene.pest"]
struct SceneParser;

/// Everything read from a scene description.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub materials: HashMap<String, MaterialId>,
    pub world: World,
    pub camera: Option<Camera>,
    pub float_variables: HashMap<String, Float>,
    /// variables set from the outside, declarations in the scene
    /// file do not change them
    pub overridden_variables: HashSet<String>,
}

impl Scene {
    /// An empty scene with some variables already set.
    pub fn with_variables(variables: &HashMap<String, Float>) -> Self {
        Scene {
            float_variables: variables.clone(),
            overridden_variables: variables.keys().cloned().collect(),
            ..Scene::default()
        }
    }
}

fn error_at(pair: &Pair<Rule>, message: impl Into<String>) -> GrammarError {
    let (line, col) = pair.as_span().start_pos().line_col();
    GrammarError::new(line, col, message)
}

fn from_pest_error(err: pest::error::Error<Rule>) -> GrammarError {
    let (line, col) = match err.line_col {
        pest::error::LineColLocation::Pos(pos) => pos,
        pest::error::LineColLocation::Span(start, _) => start,
    };
    GrammarError::new(line, col, err.variant.message().to_string())
}

/// Next child of *parent*, the grammar guarantees its presence.
fn next_inner<'a>(
    pairs: &mut Pairs<'a, Rule>,
    parent: &Pair<'a, Rule>,
) -> Result<Pair<'a, Rule>, GrammarError> {
    pairs
        .next()
        .ok_or_else(|| error_at(parent, format!("incomplete {:?}", parent.as_rule())))
}

struct SceneBuilder {
    scene: Scene,
    /// every image file is only loaded once
    images: HashMap<String, Arc<HdrImage>>,
}

impl SceneBuilder {
    fn number(&self, pair: Pair<Rule>) -> Result<Float, GrammarError> {
        let outer = pair.clone();
        let inner = next_inner(&mut pair.into_inner(), &outer)?;
        match inner.as_rule() {
            Rule::literal_number => inner
                .as_str()
                .parse::<Float>()
                .map_err(|_| error_at(&inner, format!("invalid number {:?}", inner.as_str()))),
            Rule::identifier => {
                let name = inner.as_str();
                self.scene
                    .float_variables
                    .get(name)
                    .copied()
                    .ok_or_else(|| error_at(&inner, format!("variable \"{}\" is unknown", name)))
            }
            _ => unreachable!(),
        }
    }
    fn triple(&self, pair: Pair<Rule>) -> Result<(Float, Float, Float), GrammarError> {
        let outer = pair.clone();
        let mut pairs = pair.into_inner();
        let x = self.number(next_inner(&mut pairs, &outer)?)?;
        let y = self.number(next_inner(&mut pairs, &outer)?)?;
        let z = self.number(next_inner(&mut pairs, &outer)?)?;
        Ok((x, y, z))
    }
    fn vector(&self, pair: Pair<Rule>) -> Result<Vector3f, GrammarError> {
        let (x, y, z) = self.triple(pair)?;
        Ok(Vector3f::new(x, y, z))
    }
    fn color(&self, pair: Pair<Rule>) -> Result<Spectrum, GrammarError> {
        let (r, g, b) = self.triple(pair)?;
        Ok(Spectrum::rgb(r, g, b))
    }
    fn pigment(&mut self, pair: Pair<Rule>) -> Result<Pigment, GrammarError> {
        let outer = pair.clone();
        let inner = next_inner(&mut pair.into_inner(), &outer)?;
        let parent = inner.clone();
        let mut pairs = inner.into_inner();
        match parent.as_rule() {
            Rule::uniform => {
                let color = self.color(next_inner(&mut pairs, &parent)?)?;
                Ok(Pigment::Uniform(UniformPigment::new(color)))
            }
            Rule::checkered => {
                let color1 = self.color(next_inner(&mut pairs, &parent)?)?;
                let color2 = self.color(next_inner(&mut pairs, &parent)?)?;
                let steps_pair = next_inner(&mut pairs, &parent)?;
                let steps = self.number(steps_pair.clone())?;
                if steps < 1.0 as Float || steps.fract() != 0.0 as Float {
                    return Err(error_at(
                        &steps_pair,
                        format!("number of steps must be a positive integer, got {}", steps),
                    ));
                }
                Ok(Pigment::Checkered(CheckeredPigment::new(
                    color1,
                    color2,
                    steps as u32,
                )))
            }
            Rule::image => {
                let string = next_inner(&mut pairs, &parent)?;
                let file_name: &str = string.clone().into_inner().as_str();
                let image: Arc<HdrImage> = match self.images.get(file_name) {
                    Some(image) => image.clone(),
                    None => {
                        let image = load_pfm(file_name).map_err(|err| {
                            error_at(
                                &string,
                                format!("can not read image \"{}\": {}", file_name, err),
                            )
                        })?;
                        if image.pixels.is_empty() {
                            return Err(error_at(
                                &string,
                                format!("image \"{}\" has no pixels", file_name),
                            ));
                        }
                        debug!(
                            "Loaded texture {:?} ({}x{})",
                            file_name, image.width, image.height
                        );
                        let image = Arc::new(image);
                        self.images.insert(file_name.to_string(), image.clone());
                        image
                    }
                };
                Ok(Pigment::Image(ImagePigment::new(image)))
            }
            _ => unreachable!(),
        }
    }
    fn brdf(&mut self, pair: Pair<Rule>) -> Result<Brdf, GrammarError> {
        let outer = pair.clone();
        let inner = next_inner(&mut pair.into_inner(), &outer)?;
        let parent = inner.clone();
        let pigment = self.pigment(next_inner(&mut inner.into_inner(), &parent)?)?;
        match parent.as_rule() {
            Rule::diffuse => Ok(Brdf::Diffuse(DiffuseBrdf::new(pigment))),
            Rule::specular => Ok(Brdf::Specular(SpecularBrdf::new(pigment))),
            _ => unreachable!(),
        }
    }
    fn transformation(&self, pair: Pair<Rule>) -> Result<Transform, GrammarError> {
        let mut result = Transform::default();
        for basic in pair.into_inner() {
            let parent = basic.clone();
            let mut pairs = basic.into_inner();
            let t: Transform = match parent.as_rule() {
                Rule::identity => Transform::default(),
                Rule::translation => {
                    Transform::translate(&self.vector(next_inner(&mut pairs, &parent)?)?)
                }
                Rule::scaling => {
                    let v = self.vector(next_inner(&mut pairs, &parent)?)?;
                    Transform::scale(v.x, v.y, v.z)
                }
                Rule::rotation_x | Rule::rotation_y | Rule::rotation_z => {
                    let angle = self.number(next_inner(&mut pairs, &parent)?)?;
                    let rotation = match parent.as_rule() {
                        Rule::rotation_x => Transform::rotate_x(angle),
                        Rule::rotation_y => Transform::rotate_y(angle),
                        _ => Transform::rotate_z(angle),
                    };
                    rotation.map_err(|err| error_at(&parent, err.to_string()))?
                }
                _ => unreachable!(),
            };
            result = result * t;
        }
        Ok(result)
    }
    fn material_id(&self, pair: Pair<Rule>) -> Result<MaterialId, GrammarError> {
        let name = pair.as_str();
        self.scene
            .materials
            .get(name)
            .copied()
            .ok_or_else(|| error_at(&pair, format!("unknown material \"{}\"", name)))
    }
    fn float_decl(&mut self, pair: Pair<Rule>) -> Result<(), GrammarError> {
        let parent = pair.clone();
        let mut pairs = pair.into_inner();
        let name_pair = next_inner(&mut pairs, &parent)?;
        let value = self.number(next_inner(&mut pairs, &parent)?)?;
        let name = name_pair.as_str();
        if self.scene.overridden_variables.contains(name) {
            debug!("Variable {:?} is set from the command line", name);
            return Ok(());
        }
        if self.scene.float_variables.contains_key(name) {
            return Err(error_at(
                &name_pair,
                format!("variable \"{}\" cannot be redefined", name),
            ));
        }
        self.scene.float_variables.insert(name.to_string(), value);
        Ok(())
    }
    fn material_decl(&mut self, pair: Pair<Rule>) -> Result<(), GrammarError> {
        let parent = pair.clone();
        let mut pairs = pair.into_inner();
        let name_pair = next_inner(&mut pairs, &parent)?;
        let name = name_pair.as_str();
        if self.scene.materials.contains_key(name) {
            return Err(error_at(
                &name_pair,
                format!("material \"{}\" is already defined", name),
            ));
        }
        let brdf = self.brdf(next_inner(&mut pairs, &parent)?)?;
        let emitted_radiance = self.pigment(next_inner(&mut pairs, &parent)?)?;
        let id = self
            .scene
            .world
            .add_material(Material::new(brdf, emitted_radiance));
        self.scene.materials.insert(name.to_string(), id);
        Ok(())
    }
    fn camera(&mut self, pair: Pair<Rule>) -> Result<(), GrammarError> {
        if self.scene.camera.is_some() {
            return Err(error_at(&pair, "the camera can only be defined once"));
        }
        let parent = pair.clone();
        let mut pairs = pair.into_inner();
        let camera_type = next_inner(&mut pairs, &parent)?;
        let transformation = self.transformation(next_inner(&mut pairs, &parent)?)?;
        let aspect_ratio = self.number(next_inner(&mut pairs, &parent)?)?;
        let distance = self.number(next_inner(&mut pairs, &parent)?)?;
        let camera: Camera = match camera_type.as_rule() {
            Rule::perspective => PerspectiveCamera::new(distance, aspect_ratio, transformation)
                .map(Camera::from),
            Rule::orthogonal => {
                OrthographicCamera::new(aspect_ratio, transformation).map(Camera::from)
            }
            _ => unreachable!(),
        }
        .map_err(|err| error_at(&parent, err.to_string()))?;
        self.scene.camera = Some(camera);
        Ok(())
    }
    fn statement(&mut self, pair: Pair<Rule>) -> Result<(), GrammarError> {
        let parent = pair.clone();
        match parent.as_rule() {
            Rule::float_decl => self.float_decl(pair),
            Rule::material_decl => self.material_decl(pair),
            Rule::sphere | Rule::plane => {
                let mut pairs = pair.into_inner();
                let material = self.material_id(next_inner(&mut pairs, &parent)?)?;
                let transformation = self.transformation(next_inner(&mut pairs, &parent)?)?;
                if parent.as_rule() == Rule::sphere {
                    self.scene
                        .world
                        .add_shape(Sphere::new(transformation, material));
                } else {
                    self.scene
                        .world
                        .add_shape(Plane::new(transformation, material));
                }
                Ok(())
            }
            Rule::box_decl => {
                let mut pairs = pair.into_inner();
                let p1 = Point3f::from(self.vector(next_inner(&mut pairs, &parent)?)?);
                let p2 = Point3f::from(self.vector(next_inner(&mut pairs, &parent)?)?);
                let material = self.material_id(next_inner(&mut pairs, &parent)?)?;
                let transformation = self.transformation(next_inner(&mut pairs, &parent)?)?;
                self.scene
                    .world
                    .add_shape(AxisAlignedBox::new(p1, p2, transformation, material));
                Ok(())
            }
            Rule::point_light => {
                let mut pairs = pair.into_inner();
                let position = Point3f::from(self.vector(next_inner(&mut pairs, &parent)?)?);
                let color = self.color(next_inner(&mut pairs, &parent)?)?;
                let linear_radius = self.number(next_inner(&mut pairs, &parent)?)?;
                self.scene
                    .world
                    .add_light(PointLight::new(position, color, linear_radius));
                Ok(())
            }
            Rule::camera => self.camera(pair),
            Rule::EOI => Ok(()),
            _ => unreachable!(),
        }
    }
}

/// Parse a scene description. *variables* are float variables set
/// from the outside, they override declarations in the scene.
pub fn parse_scene(input: &str, variables: &HashMap<String, Float>) -> Result<Scene, GrammarError> {
    let mut pairs = SceneParser::parse(Rule::scene, input).map_err(from_pest_error)?;
    let mut builder = SceneBuilder {
        scene: Scene::with_variables(variables),
        images: HashMap::new(),
    };
    if let Some(scene_pair) = pairs.next() {
        for statement in scene_pair.into_inner() {
            builder.statement(statement)?;
        }
    }
    let scene = builder.scene;
    debug!(
        "Scene with {} shape(s), {} light(s) and {} material(s)",
        scene.world.shapes.len(),
        scene.world.lights.len(),
        scene.world.materials.len()
    );
    Ok(scene)
}
