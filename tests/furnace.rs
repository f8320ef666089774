use rs_tracer::core::geometry::{Point3f, Ray, Vector3f};
use rs_tracer::core::material::{Brdf, Material};
use rs_tracer::core::pbrt::Spectrum;
use rs_tracer::core::rng::Rng;
use rs_tracer::core::texture::Pigment;
use rs_tracer::core::transform::Transform;
use rs_tracer::core::world::World;
use rs_tracer::integrators::path::PathIntegrator;
use rs_tracer::materials::matte::DiffuseBrdf;
use rs_tracer::shapes::sphere::Sphere;

#[test]
fn furnace() {
    let mut rng = Rng::new();
    // run the test several times with random parameters
    for _ in 0..5 {
        let emitted_radiance = rng.uniform_float();
        let reflectance = rng.uniform_float() * 0.9;
        let mut world = World::new();
        let material = world.add_material(Material::new(
            Brdf::Diffuse(DiffuseBrdf::new(Pigment::from(Spectrum::new(reflectance)))),
            Pigment::from(Spectrum::new(emitted_radiance)),
        ));
        world.add_shape(Sphere::new(Transform::default(), material));
        // Russian roulette never kicks in
        let integrator = PathIntegrator::new(Spectrum::default(), 1, 100, 101).unwrap();
        let ray = Ray::new(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(1.0, 0.0, 0.0));
        let color = integrator.li(&ray, &world, &mut rng);
        let expected = emitted_radiance / (1.0 - reflectance);
        assert!(
            (expected - color.r()).abs() < 1e-3,
            "expected {}, got {:?}",
            expected,
            color
        );
        assert!((expected - color.g()).abs() < 1e-3);
        assert!((expected - color.b()).abs() < 1e-3);
    }
}
