//! Almost all nontrivial graphics programs are built on a foundation
//! of geometric classes. These classes represent mathematical
//! constructs like points, vectors, and rays.
//!
//! # Points
//!
//! A **point** is a zero-dimensional location in 3D space. Although
//! the same representation is used for vectors, the fact that a point
//! represents a position whereas a vector represents a direction
//! leads to a number of important differences in how they are
//! treated.
//!
//! ```rust
//! use rs_tracer::core::geometry::Point3f;
//!
//!     let origin = Point3f {
//!         x: 0.0,
//!         y: 0.0,
//!         z: 0.0,
//!     };
//!
//!     println!("origin {:?}", origin);
//! ```
//!
//! # Vectors
//!
//! A **vector** is a direction with a length. Translations do not
//! affect vectors.
//!
//! # Normals
//!
//! A **surface normal** (or just normal) is a vector that is
//! perpendicular to a surface at a particular position. Normals
//! transform with the inverse transpose of a matrix, which is why
//! they get their own type.
//!
//! # Rays
//!
//! A **ray** is a semi-infinite line specified by its origin and
//! direction, restricted to the parametric interval `[t_min,
//! t_max)`. Every ray also remembers how many bounces led to it.
//!
//! ```rust
//! use rs_tracer::core::geometry::{Point3f, Ray, Vector3f};
//!
//!     let origin = Point3f {
//!         x: -5.5,
//!         y: 2.75,
//!         z: 0.0,
//!     };
//!     let direction = Vector3f {
//!         x: 1.0,
//!         y: -8.75,
//!         z: 2.25,
//!     };
//!     let ray = Ray::new(origin, direction);
//!     let p = ray.position(2.0);
//!     assert_eq!(p.x, -3.5);
//! ```

// std
use std::ops;
use std::ops::{Index, IndexMut};
// others
use strum_macros::EnumIter;
// pbrt
use crate::core::pbrt::Float;

#[derive(EnumIter, Debug, Copy, Clone, PartialEq)]
#[repr(u8)]
pub enum XYZEnum {
    X = 0,
    Y = 1,
    Z = 2,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Vector3f { x, y, z }
    }
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
    pub fn abs(&self) -> Vector3f {
        Vector3f {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    /// Compute a new vector pointing in the same direction but with unit
    /// length.
    pub fn normalize(&self) -> Vector3f {
        *self / self.length()
    }
    pub fn is_close(&self, rhs: &Vector3f, epsilon: Float) -> bool {
        (self.x - rhs.x).abs() < epsilon
            && (self.y - rhs.y).abs() < epsilon
            && (self.z - rhs.z).abs() < epsilon
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Point3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Point3f { x, y, z }
    }
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
    pub fn is_close(&self, rhs: &Point3f, epsilon: Float) -> bool {
        (self.x - rhs.x).abs() < epsilon
            && (self.y - rhs.y).abs() < epsilon
            && (self.z - rhs.z).abs() < epsilon
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Normal3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Normal3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Normal3f { x, y, z }
    }
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    /// Compute a new normal pointing in the same direction but with unit
    /// length.
    pub fn normalize(&self) -> Normal3f {
        *self / self.length()
    }
    pub fn is_close(&self, rhs: &Normal3f, epsilon: Float) -> bool {
        (self.x - rhs.x).abs() < epsilon
            && (self.y - rhs.y).abs() < epsilon
            && (self.z - rhs.z).abs() < epsilon
    }
}

/// A 2D surface coordinate, usually called (u, v).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point2f {
    pub x: Float,
    pub y: Float,
}

impl Point2f {
    pub fn new(x: Float, y: Float) -> Self {
        Point2f { x, y }
    }
    pub fn is_close(&self, rhs: &Point2f, epsilon: Float) -> bool {
        (self.x - rhs.x).abs() < epsilon && (self.y - rhs.y).abs() < epsilon
    }
}

impl_op!(-|a: Vector3f| -> Vector3f {
    Vector3f {
        x: -a.x,
        y: -a.y,
        z: -a.z,
    }
});

impl_op!(-|a: Normal3f| -> Normal3f {
    Normal3f {
        x: -a.x,
        y: -a.y,
        z: -a.z,
    }
});

impl_op_ex!(+|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(-|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(+|a: &Normal3f, b: &Normal3f| -> Normal3f {
    Normal3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(+|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(-|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(-|a: &Point3f, b: &Point3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(*|a: &Vector3f, b: Float| -> Vector3f {
    Vector3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});

impl_op_ex!(*|a: &Normal3f, b: Float| -> Normal3f {
    Normal3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});

impl_op_ex!(/|a: &Vector3f, b: Float| -> Vector3f {
    assert_ne!(b, 0.0 as Float);
    let inv: Float = 1.0 as Float / b;
    Vector3f {
        x: a.x * inv,
        y: a.y * inv,
        z: a.z * inv,
    }
});

impl_op_ex!(/|a: &Normal3f, b: Float| -> Normal3f {
    assert_ne!(b, 0.0 as Float);
    let inv: Float = 1.0 as Float / b;
    Normal3f {
        x: a.x * inv,
        y: a.y * inv,
        z: a.z * inv,
    }
});

impl_op!(+= |a: &mut Vector3f, b: Vector3f| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_op!(*= |a: &mut Vector3f, b: Float| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl Index<XYZEnum> for Vector3f {
    type Output = Float;
    fn index(&self, index: XYZEnum) -> &Float {
        match index {
            XYZEnum::X => &self.x,
            XYZEnum::Y => &self.y,
            _ => &self.z,
        }
    }
}

impl Index<XYZEnum> for Point3f {
    type Output = Float;
    fn index(&self, index: XYZEnum) -> &Float {
        match index {
            XYZEnum::X => &self.x,
            XYZEnum::Y => &self.y,
            _ => &self.z,
        }
    }
}

impl IndexMut<XYZEnum> for Point3f {
    fn index_mut(&mut self, index: XYZEnum) -> &mut Float {
        match index {
            XYZEnum::X => &mut self.x,
            XYZEnum::Y => &mut self.y,
            _ => &mut self.z,
        }
    }
}

impl From<Point3f> for Vector3f {
    fn from(p: Point3f) -> Self {
        Vector3f {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl From<Normal3f> for Vector3f {
    fn from(n: Normal3f) -> Self {
        Vector3f {
            x: n.x,
            y: n.y,
            z: n.z,
        }
    }
}

impl From<Vector3f> for Point3f {
    fn from(v: Vector3f) -> Self {
        Point3f {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Vector3f> for Normal3f {
    fn from(v: Vector3f) -> Self {
        Normal3f {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Product of the Euclidean magnitudes of the two vectors and the
/// cosine of the angle between them. A return value of zero means
/// both vectors are orthogonal, a value if one means they are
/// codirectional.
pub fn vec3_dot_vec3f(v1: &Vector3f, v2: &Vector3f) -> Float {
    v1.x * v2.x + v1.y * v2.y + v1.z * v2.z
}

/// Given two vectors in 3D, the cross product is a vector that is
/// perpendicular to both of them.
pub fn vec3_cross_vec3(v1: &Vector3f, v2: &Vector3f) -> Vector3f {
    let v1x: f64 = v1.x as f64;
    let v1y: f64 = v1.y as f64;
    let v1z: f64 = v1.z as f64;
    let v2x: f64 = v2.x as f64;
    let v2y: f64 = v2.y as f64;
    let v2z: f64 = v2.z as f64;
    Vector3f {
        x: ((v1y * v2z) - (v1z * v2y)) as Float,
        y: ((v1z * v2x) - (v1x * v2z)) as Float,
        z: ((v1x * v2y) - (v1y * v2x)) as Float,
    }
}

pub fn nrm_dot_vec3f(n1: &Normal3f, v2: &Vector3f) -> Float {
    n1.x * v2.x + n1.y * v2.y + n1.z * v2.z
}

pub fn nrm_dot_nrmf(n1: &Normal3f, n2: &Normal3f) -> Float {
    n1.x * n2.x + n1.y * n2.y + n1.z * n2.z
}

/// Flip a surface normal so that it points against the given
/// direction.
pub fn nrm_oppose_vec3(n: &Normal3f, v: &Vector3f) -> Normal3f {
    if nrm_dot_vec3f(n, v) < 0.0 as Float {
        *n
    } else {
        -(*n)
    }
}

/// Construct an orthonormal basis whose third axis is the given unit
/// normal (Duff et al., "Building an Orthonormal Basis, Revisited").
pub fn create_onb_from_z(normal: &Normal3f) -> (Vector3f, Vector3f, Vector3f) {
    assert!(
        (normal.length_squared() - 1.0 as Float).abs() < 1e-3 as Float,
        "normal must have unit length: {:?}",
        normal
    );
    let sign: Float = (1.0 as Float).copysign(normal.z);
    let a: Float = -1.0 as Float / (sign + normal.z);
    let b: Float = normal.x * normal.y * a;
    let e1 = Vector3f {
        x: 1.0 as Float + sign * normal.x * normal.x * a,
        y: sign * b,
        z: -sign * normal.x,
    };
    let e2 = Vector3f {
        x: b,
        y: sign + normal.y * normal.y * a,
        z: -normal.y,
    };
    (e1, e2, Vector3f::from(*normal))
}

/// Rays start slightly off the surface they leave by default.
pub const DEFAULT_T_MIN: Float = 1e-5;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// origin
    pub o: Point3f,
    /// direction
    pub d: Vector3f,
    /// limits the ray to a segment along its infinite extent
    pub t_min: Float,
    pub t_max: Float,
    /// number of bounces which led to this ray
    pub depth: u32,
}

impl Ray {
    pub fn new(o: Point3f, d: Vector3f) -> Self {
        Ray {
            o,
            d,
            t_min: DEFAULT_T_MIN,
            t_max: Float::INFINITY,
            depth: 0,
        }
    }
    pub fn position(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }
    /// Is *t* inside the open interval (t_min, t_max)?
    pub fn in_range(&self, t: Float) -> bool {
        t > self.t_min && t < self.t_max
    }
    pub fn is_close(&self, rhs: &Ray, epsilon: Float) -> bool {
        self.o.is_close(&rhs.o, epsilon) && self.d.is_close(&rhs.d, epsilon)
    }
}
