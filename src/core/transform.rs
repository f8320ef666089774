//! In general, transformations make it possible to work in the most
//! convenient coordinate space.
//!
//! ## 4 x 4 Matrices
//!
//! The **Matrix4x4** structure provides a low-level representation of
//! 4 x 4 matrices. It is an integral part of the **Transform** class.
//!
//! ## Transformations
//!
//! In general a transformation is a mapping from points to points and
//! from vectors to vectors. When a new **Transform** is created, it
//! defaults to the *identity transformation* - the transformation
//! that maps each point and each vector to itself.
//!
//! Every **Transform** stores its matrix together with the inverse
//! matrix, so inverting a transformation is a swap and never needs
//! Gauss-Jordan elimination.
//!
//! ### Translations
//!
//! One of the simplest transformations is the translation
//! transformation. Translations only affect points, leaving vectors
//! unchanged.
//!
//! ### Scaling
//!
//! Another basic transformations is the scale transformation. We can
//! differentiate between **uniform** scaling, where all three scale
//! factors have the same value, and **nonuniform** scaling, where
//! they may have different values.
//!
//! ### X, Y, And Z Axis Rotations
//!
//! Rotation angles are given in degrees. Angles above 360 degrees (or
//! NaN) are rejected with a [`ConfigError`].
//!
//! ```rust
//! use rs_tracer::core::geometry::{Point3f, Vector3f};
//! use rs_tracer::core::transform::Transform;
//!
//!     let t = Transform::translate(&Vector3f { x: 1.0, y: 2.0, z: 3.0 })
//!         * Transform::rotate_z(90.0).unwrap();
//!     assert!(t.is_consistent());
//!     let p = t.transform_point(&Point3f { x: 1.0, y: 0.0, z: 0.0 });
//!     assert!(p.is_close(&Point3f { x: 1.0, y: 3.0, z: 3.0 }, 1e-5));
//! ```

// std
use std::ops::Mul;
// pbrt
use crate::core::error::ConfigError;
use crate::core::geometry::{Normal3f, Point3f, Ray, Vector3f};
use crate::core::pbrt::radians;
use crate::core::pbrt::Float;

/// Tolerance used by [`Transform::is_consistent`].
pub const CONSISTENCY_EPSILON: Float = 1e-4;

#[derive(Debug, Copy, Clone)]
pub struct Matrix4x4 {
    pub m: [[Float; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}

impl Matrix4x4 {
    pub fn new(m: [[Float; 4]; 4]) -> Self {
        Matrix4x4 { m }
    }
    pub fn transpose(m: &Matrix4x4) -> Matrix4x4 {
        Matrix4x4 {
            m: [
                [m.m[0][0], m.m[1][0], m.m[2][0], m.m[3][0]],
                [m.m[0][1], m.m[1][1], m.m[2][1], m.m[3][1]],
                [m.m[0][2], m.m[1][2], m.m[2][2], m.m[3][2]],
                [m.m[0][3], m.m[1][3], m.m[2][3], m.m[3][3]],
            ],
        }
    }
    /// Gauss-Jordan elimination with full pivoting. Only used to build
    /// a [`Transform`] from an arbitrary matrix, the basic
    /// transformations know their inverse in closed form. Returns
    /// `None` for singular matrices.
    pub fn inverse(m: &Matrix4x4) -> Option<Matrix4x4> {
        let mut indxc = [0_usize; 4];
        let mut indxr = [0_usize; 4];
        let mut ipiv = [0_u8; 4];
        let mut minv: Matrix4x4 = *m;
        for i in 0..4 {
            let mut irow = 0;
            let mut icol = 0;
            let mut big: Float = 0.0;
            // choose pivot
            for j in 0..4 {
                if ipiv[j] != 1 {
                    for (k, item) in ipiv.iter().enumerate() {
                        if *item == 0 {
                            let abs: Float = (minv.m[j][k]).abs();
                            if abs >= big {
                                big = abs;
                                irow = j;
                                icol = k;
                            }
                        } else if *item > 1 {
                            return None;
                        }
                    }
                }
            }
            ipiv[icol] += 1;
            // swap rows _irow_ and _icol_ for pivot
            if irow != icol {
                minv.m.swap(irow, icol);
            }
            indxr[i] = irow;
            indxc[i] = icol;
            if minv.m[icol][icol] == 0.0 {
                return None;
            }
            // set $m[icol][icol]$ to one by scaling row _icol_ appropriately
            let pivinv: Float = 1.0 / minv.m[icol][icol];
            minv.m[icol][icol] = 1.0;
            for j in 0..4 {
                minv.m[icol][j] *= pivinv;
            }
            // subtract this row from others to zero out their columns
            for j in 0..4 {
                if j != icol {
                    let save: Float = minv.m[j][icol];
                    minv.m[j][icol] = 0.0;
                    for k in 0..4 {
                        minv.m[j][k] -= minv.m[icol][k] * save;
                    }
                }
            }
        }
        // swap columns to reflect permutation
        for i in 0..4 {
            let j = 3 - i;
            if indxr[j] != indxc[j] {
                for k in 0..4 {
                    minv.m[k].swap(indxr[j], indxc[j])
                }
            }
        }
        Some(minv)
    }
    /// Elementwise comparison with an absolute tolerance.
    pub fn is_close(&self, rhs: &Matrix4x4, epsilon: Float) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if (self.m[i][j] - rhs.m[i][j]).abs() >= epsilon {
                    return false;
                }
            }
        }
        true
    }
}

impl PartialEq for Matrix4x4 {
    fn eq(&self, rhs: &Matrix4x4) -> bool {
        self.m == rhs.m
    }
}

/// The product of two matrices.
pub fn mtx_mul(m1: &Matrix4x4, m2: &Matrix4x4) -> Matrix4x4 {
    let mut r: Matrix4x4 = Matrix4x4::default();
    for i in 0..4 {
        for j in 0..4 {
            r.m[i][j] = m1.m[i][0] * m2.m[0][j]
                + m1.m[i][1] * m2.m[1][j]
                + m1.m[i][2] * m2.m[2][j]
                + m1.m[i][3] * m2.m[3][j];
        }
    }
    r
}

fn check_rotation(theta: Float) -> Result<Float, ConfigError> {
    if theta.is_nan() || theta > 360.0 as Float {
        Err(ConfigError::RotationOutOfRange(theta))
    } else {
        Ok(theta)
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Transform {
    pub m: Matrix4x4,
    pub m_inv: Matrix4x4,
}

impl Transform {
    /// Build a transformation from a matrix, computing its inverse.
    /// Returns `None` if the matrix is singular.
    pub fn new(m: Matrix4x4) -> Option<Transform> {
        Matrix4x4::inverse(&m).map(|m_inv| Transform { m, m_inv })
    }
    /// Build a transformation from a matrix and its known inverse.
    pub fn from_pair(m: Matrix4x4, m_inv: Matrix4x4) -> Transform {
        Transform { m, m_inv }
    }
    pub fn inverse(t: &Transform) -> Transform {
        Transform {
            m: t.m_inv,
            m_inv: t.m,
        }
    }
    pub fn is_identity(&self) -> bool {
        self.m == Matrix4x4::default()
    }
    /// Does `m * m_inv` reproduce the identity matrix?
    pub fn is_consistent(&self) -> bool {
        mtx_mul(&self.m, &self.m_inv).is_close(&Matrix4x4::default(), CONSISTENCY_EPSILON)
    }
    pub fn is_close(&self, rhs: &Transform, epsilon: Float) -> bool {
        self.m.is_close(&rhs.m, epsilon) && self.m_inv.is_close(&rhs.m_inv, epsilon)
    }
    pub fn translate(delta: &Vector3f) -> Transform {
        Transform {
            m: Matrix4x4::new([
                [1.0, 0.0, 0.0, delta.x],
                [0.0, 1.0, 0.0, delta.y],
                [0.0, 0.0, 1.0, delta.z],
                [0.0, 0.0, 0.0, 1.0],
            ]),
            m_inv: Matrix4x4::new([
                [1.0, 0.0, 0.0, -delta.x],
                [0.0, 1.0, 0.0, -delta.y],
                [0.0, 0.0, 1.0, -delta.z],
                [0.0, 0.0, 0.0, 1.0],
            ]),
        }
    }
    pub fn scale(x: Float, y: Float, z: Float) -> Transform {
        Transform {
            m: Matrix4x4::new([
                [x, 0.0, 0.0, 0.0],
                [0.0, y, 0.0, 0.0],
                [0.0, 0.0, z, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
            m_inv: Matrix4x4::new([
                [1.0 / x, 0.0, 0.0, 0.0],
                [0.0, 1.0 / y, 0.0, 0.0],
                [0.0, 0.0, 1.0 / z, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
        }
    }
    pub fn rotate_x(theta: Float) -> Result<Transform, ConfigError> {
        let theta = check_rotation(theta)?;
        let sin_theta: Float = radians(theta).sin();
        let cos_theta: Float = radians(theta).cos();
        let m = Matrix4x4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos_theta, -sin_theta, 0.0],
            [0.0, sin_theta, cos_theta, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        Ok(Transform {
            m,
            m_inv: Matrix4x4::transpose(&m),
        })
    }
    pub fn rotate_y(theta: Float) -> Result<Transform, ConfigError> {
        let theta = check_rotation(theta)?;
        let sin_theta: Float = radians(theta).sin();
        let cos_theta: Float = radians(theta).cos();
        let m = Matrix4x4::new([
            [cos_theta, 0.0, sin_theta, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin_theta, 0.0, cos_theta, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        Ok(Transform {
            m,
            m_inv: Matrix4x4::transpose(&m),
        })
    }
    pub fn rotate_z(theta: Float) -> Result<Transform, ConfigError> {
        let theta = check_rotation(theta)?;
        let sin_theta: Float = radians(theta).sin();
        let cos_theta: Float = radians(theta).cos();
        let m = Matrix4x4::new([
            [cos_theta, -sin_theta, 0.0, 0.0],
            [sin_theta, cos_theta, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        Ok(Transform {
            m,
            m_inv: Matrix4x4::transpose(&m),
        })
    }
    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let x: Float = p.x;
        let y: Float = p.y;
        let z: Float = p.z;
        let xp: Float =
            self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z + self.m.m[0][3];
        let yp: Float =
            self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z + self.m.m[1][3];
        let zp: Float =
            self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z + self.m.m[2][3];
        let wp: Float =
            self.m.m[3][0] * x + self.m.m[3][1] * y + self.m.m[3][2] * z + self.m.m[3][3];
        assert!(wp != 0.0, "wp = {:?} != 0.0", wp);
        if wp == 1.0 as Float {
            Point3f {
                x: xp,
                y: yp,
                z: zp,
            }
        } else {
            let inv: Float = 1.0 as Float / wp;
            Point3f {
                x: inv * xp,
                y: inv * yp,
                z: inv * zp,
            }
        }
    }
    pub fn transform_vector(&self, v: &Vector3f) -> Vector3f {
        let x: Float = v.x;
        let y: Float = v.y;
        let z: Float = v.z;
        Vector3f {
            x: self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z,
            y: self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z,
            z: self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z,
        }
    }
    /// Normals are multiplied by the transpose of the inverse matrix.
    pub fn transform_normal(&self, n: &Normal3f) -> Normal3f {
        let x: Float = n.x;
        let y: Float = n.y;
        let z: Float = n.z;
        Normal3f {
            x: self.m_inv.m[0][0] * x + self.m_inv.m[1][0] * y + self.m_inv.m[2][0] * z,
            y: self.m_inv.m[0][1] * x + self.m_inv.m[1][1] * y + self.m_inv.m[2][1] * z,
            z: self.m_inv.m[0][2] * x + self.m_inv.m[1][2] * y + self.m_inv.m[2][2] * z,
        }
    }
    /// The parametric range and the depth of the ray are kept, so the
    /// same *t* refers to corresponding points in both spaces.
    pub fn transform_ray(&self, r: &Ray) -> Ray {
        Ray {
            o: self.transform_point(&r.o),
            d: self.transform_vector(&r.d),
            t_min: r.t_min,
            t_max: r.t_max,
            depth: r.depth,
        }
    }
}

impl PartialEq for Transform {
    fn eq(&self, rhs: &Transform) -> bool {
        rhs.m == self.m && rhs.m_inv == self.m_inv
    }
}

impl Mul for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            m: mtx_mul(&self.m, &rhs.m),
            m_inv: mtx_mul(&rhs.m_inv, &self.m_inv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pbrt::EPSILON;

    fn sample_transform() -> Transform {
        Transform::new(Matrix4x4::new([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 9.0, 8.0, 7.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
        .unwrap()
    }

    #[test]
    fn matrix_product() {
        let m1 = Matrix4x4::new([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 9.0, 8.0, 7.0],
            [6.0, 5.0, 4.0, 1.0],
        ]);
        let m2 = Matrix4x4::new([
            [3.0, 5.0, 2.0, 8.0],
            [4.0, 1.0, 0.0, 2.0],
            [6.0, 3.0, 1.0, 4.0],
            [5.0, 7.0, 9.0, 1.0],
        ]);
        let expected = Matrix4x4::new([
            [49.0, 44.0, 41.0, 28.0],
            [121.0, 108.0, 89.0, 88.0],
            [146.0, 127.0, 89.0, 129.0],
            [67.0, 54.0, 25.0, 75.0],
        ]);
        assert!(mtx_mul(&m1, &m2).is_close(&expected, EPSILON));
    }

    #[test]
    fn inverse_of_general_matrix() {
        let t = sample_transform();
        assert!(t.is_consistent());
        let singular = Matrix4x4::new([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert!(Transform::new(singular).is_none());
    }

    #[test]
    fn composition_keeps_inverse_consistent() {
        let a = Transform::translate(&Vector3f::new(1.0, -2.0, 3.0))
            * Transform::rotate_y(30.0).unwrap();
        let b = Transform::scale(2.0, 0.5, 4.0) * Transform::rotate_x(-75.0).unwrap();
        let ab = a * b;
        assert!(ab.is_consistent());
        assert!(ab
            .m_inv
            .is_close(&mtx_mul(&b.m_inv, &a.m_inv), CONSISTENCY_EPSILON));
        let identity = ab * Transform::inverse(&ab);
        assert!(identity.m.is_close(&Matrix4x4::default(), CONSISTENCY_EPSILON));
    }

    #[test]
    fn inverse_round_trips_points() {
        let t = sample_transform() * Transform::rotate_z(45.0).unwrap();
        let p = Point3f::new(1.0, 2.0, 3.0);
        let back = Transform::inverse(&t).transform_point(&t.transform_point(&p));
        assert!(back.is_close(&p, 1e-3));
    }

    #[test]
    fn points_vectors_and_normals() {
        let t = Transform::new(Matrix4x4::new([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 9.0, 8.0, 7.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
        .unwrap();
        let p = t.transform_point(&Point3f::new(1.0, 2.0, 3.0));
        assert!(p.is_close(&Point3f::new(18.0, 46.0, 58.0), 1e-3));
        let v = t.transform_vector(&Vector3f::new(1.0, 2.0, 3.0));
        assert!(v.is_close(&Vector3f::new(14.0, 38.0, 51.0), 1e-3));
        // a translation leaves vectors alone
        let shift = Transform::translate(&Vector3f::new(1.0, 2.0, 3.0));
        let v = Vector3f::new(4.0, 6.0, 8.0);
        assert!(shift.transform_vector(&v).is_close(&v, EPSILON));
    }

    #[test]
    fn normals_stay_perpendicular() {
        let t = Transform::scale(1.0, 4.0, 1.0) * Transform::rotate_z(30.0).unwrap();
        let n = Normal3f::new(1.0, 1.0, 0.0);
        let tangent = Vector3f::new(1.0, -1.0, 0.0);
        let n2 = t.transform_normal(&n);
        let t2 = t.transform_vector(&tangent);
        let dot = n2.x * t2.x + n2.y * t2.y + n2.z * t2.z;
        assert!(dot.abs() < 1e-4);
    }

    #[test]
    fn rotations() {
        let vx = Vector3f::new(1.0, 0.0, 0.0);
        let vy = Vector3f::new(0.0, 1.0, 0.0);
        let vz = Vector3f::new(0.0, 0.0, 1.0);
        let rx = Transform::rotate_x(90.0).unwrap();
        let ry = Transform::rotate_y(90.0).unwrap();
        let rz = Transform::rotate_z(90.0).unwrap();
        assert!(rx.is_consistent() && ry.is_consistent() && rz.is_consistent());
        assert!(rx.transform_vector(&vy).is_close(&vz, EPSILON));
        assert!(ry.transform_vector(&vz).is_close(&vx, EPSILON));
        assert!(rz.transform_vector(&vx).is_close(&vy, EPSILON));
    }

    #[test]
    fn rotation_range_is_validated() {
        assert!(Transform::rotate_x(360.0).is_ok());
        assert!(Transform::rotate_y(-720.0).is_ok());
        assert_eq!(
            Transform::rotate_z(360.5).unwrap_err(),
            ConfigError::RotationOutOfRange(360.5)
        );
        assert!(Transform::rotate_x(Float::NAN).is_err());
    }

    #[test]
    fn translation_and_scaling_compose() {
        let t = Transform::translate(&Vector3f::new(1.0, 2.0, 3.0))
            * Transform::translate(&Vector3f::new(4.0, 6.0, 8.0));
        assert!(t.is_close(
            &Transform::translate(&Vector3f::new(5.0, 8.0, 11.0)),
            EPSILON
        ));
        let s = Transform::scale(2.0, 5.0, 10.0) * Transform::scale(3.0, 2.0, 4.0);
        assert!(s.is_consistent());
        assert!(s.is_close(&Transform::scale(6.0, 10.0, 40.0), EPSILON));
        assert!(Transform::default().is_identity());
    }
}
