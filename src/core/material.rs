//! # Materials
//!
//! A **Material** combines a BRDF, describing how light arriving at
//! a surface is reflected, with a pigment describing the light the
//! surface emits on its own.
//!
//! Materials are stored once per scene (see
//! [`World::add_material`](crate::core::world::World::add_material))
//! and referenced by shapes through a [`MaterialId`].

// pbrt
use crate::core::geometry::{Normal3f, Point2f, Point3f, Ray, Vector3f};
use crate::core::pbrt::Spectrum;
use crate::core::rng::Rng;
use crate::core::texture::Pigment;
use crate::materials::matte::DiffuseBrdf;
use crate::materials::mirror::SpecularBrdf;

/// Index of a material inside the material arena of a world.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);

#[derive(Debug, Clone)]
pub enum Brdf {
    Diffuse(DiffuseBrdf),
    Specular(SpecularBrdf),
}

impl Brdf {
    /// Fraction of the light coming from *in_dir* which leaves
    /// towards *out_dir*.
    pub fn eval(
        &self,
        normal: &Normal3f,
        in_dir: &Vector3f,
        out_dir: &Vector3f,
        uv: &Point2f,
    ) -> Spectrum {
        match self {
            Brdf::Diffuse(brdf) => brdf.eval(normal, in_dir, out_dir, uv),
            Brdf::Specular(brdf) => brdf.eval(normal, in_dir, out_dir, uv),
        }
    }
    /// Continue a path hitting the surface at *interaction_point*
    /// along *incoming_dir*.
    pub fn scatter_ray(
        &self,
        rng: &mut Rng,
        incoming_dir: &Vector3f,
        interaction_point: &Point3f,
        normal: &Normal3f,
        depth: u32,
    ) -> Ray {
        match self {
            Brdf::Diffuse(brdf) => {
                brdf.scatter_ray(rng, incoming_dir, interaction_point, normal, depth)
            }
            Brdf::Specular(brdf) => {
                brdf.scatter_ray(rng, incoming_dir, interaction_point, normal, depth)
            }
        }
    }
    pub fn pigment(&self) -> &Pigment {
        match self {
            Brdf::Diffuse(brdf) => &brdf.pigment,
            Brdf::Specular(brdf) => &brdf.pigment,
        }
    }
}

impl Default for Brdf {
    fn default() -> Self {
        Brdf::Diffuse(DiffuseBrdf::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Material {
    pub brdf: Brdf,
    pub emitted_radiance: Pigment,
}

impl Material {
    pub fn new(brdf: Brdf, emitted_radiance: Pigment) -> Self {
        Material {
            brdf,
            emitted_radiance,
        }
    }
}
