//! Fixed-dimension vectors.
//!
//! [`Vector<S, DIM>`] is a small `Copy` value holding exactly `DIM` scalars
//! contiguously. The aliases [`Vector2`] and [`Vector3`] cover the two
//! dimensions simulation code works in.
//!
//! Arithmetic is element-wise and never fails. Equality is exact component
//! comparison; callers wanting a tolerance compare [`Vector::norm`] of the
//! difference themselves.
//!
//! # Example
//!
//! ```
//! use physika_core::{Vector2, Vector3};
//!
//! let e0 = Vector2::new(1.0_f64, 0.0);
//! let e1 = Vector2::new(0.0_f64, 1.0);
//! assert_eq!(e0.dot(&e1), 0.0);
//! assert_eq!(e0.cross(&e1), 1.0);
//!
//! let mut v = Vector3::new(3.0_f32, 0.0, 4.0);
//! v.normalize();
//! assert_eq!(v, Vector3::new(0.6, 0.0, 0.8));
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use glam::{DVec2, DVec3, Vec2, Vec3};

use crate::scalar::Scalar;

/// A point or displacement in `DIM`-dimensional real space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<S, const DIM: usize> {
    data: [S; DIM],
}

/// Two-dimensional vector.
pub type Vector2<S> = Vector<S, 2>;

/// Three-dimensional vector.
pub type Vector3<S> = Vector<S, 3>;

impl<S: Scalar, const DIM: usize> Vector<S, DIM> {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn from_array(data: [S; DIM]) -> Self {
        Self { data }
    }

    /// Creates a vector with every component set to `value`.
    #[must_use]
    pub fn splat(value: S) -> Self {
        Self { data: [value; DIM] }
    }

    /// The zero vector.
    #[must_use]
    pub fn zeros() -> Self {
        Self::splat(S::zero())
    }

    /// Returns component `i`, or `None` when `i >= DIM`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<S> {
        self.data.get(i).copied()
    }

    /// Borrows the components.
    #[must_use]
    pub fn as_array(&self) -> &[S; DIM] {
        &self.data
    }

    /// Copies the components out.
    #[must_use]
    pub fn to_array(self) -> [S; DIM] {
        self.data
    }

    /// Iterates over the components.
    pub fn iter(&self) -> impl Iterator<Item = S> + '_ {
        self.data.iter().copied()
    }

    /// Applies `f` to every component.
    #[must_use]
    pub fn map(self, f: impl Fn(S) -> S) -> Self {
        Self {
            data: self.data.map(f),
        }
    }

    /// Combines two vectors component by component.
    #[must_use]
    pub fn zip_map(self, other: Self, f: impl Fn(S, S) -> S) -> Self {
        let mut data = self.data;
        for (lhs, rhs) in data.iter_mut().zip(other.data) {
            *lhs = f(*lhs, rhs);
        }
        Self { data }
    }

    /// Sum of component-wise products.
    #[must_use]
    pub fn dot(&self, other: &Self) -> S {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(S::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared Euclidean norm.
    #[must_use]
    pub fn norm_squared(&self) -> S {
        self.dot(self)
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> S {
        self.norm_squared().sqrt()
    }

    /// Scales `self` to unit length in place.
    ///
    /// A vector whose norm is exactly zero is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let norm = self.norm();
        if norm != S::zero() {
            *self /= norm;
        }
        self
    }

    /// By-value form of [`Vector::normalize`].
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

impl<S: Scalar> Vector<S, 2> {
    /// Creates a 2D vector.
    #[must_use]
    pub const fn new(x: S, y: S) -> Self {
        Self { data: [x, y] }
    }

    /// Returns component 0.
    #[must_use]
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Returns component 1.
    #[must_use]
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Scalar cross product `x0 * y1 - x1 * y0`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> S {
        self.data[0] * other.data[1] - self.data[1] * other.data[0]
    }
}

impl<S: Scalar> Vector<S, 3> {
    /// Creates a 3D vector.
    #[must_use]
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns component 0.
    #[must_use]
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Returns component 1.
    #[must_use]
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Returns component 2.
    #[must_use]
    pub fn z(&self) -> S {
        self.data[2]
    }

    /// Vector cross product.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        let [a0, a1, a2] = self.data;
        let [b0, b1, b2] = other.data;
        Self::new(a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0)
    }
}

impl<S: Scalar, const DIM: usize> Default for Vector<S, DIM> {
    /// The zero vector.
    fn default() -> Self {
        Self::zeros()
    }
}

impl<S: Scalar, const DIM: usize> From<[S; DIM]> for Vector<S, DIM> {
    fn from(data: [S; DIM]) -> Self {
        Self { data }
    }
}

impl<S: Scalar, const DIM: usize> From<Vector<S, DIM>> for [S; DIM] {
    fn from(v: Vector<S, DIM>) -> Self {
        v.data
    }
}

impl<S: Scalar, const DIM: usize> fmt::Display for Vector<S, DIM> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}

impl<S, const DIM: usize> Index<usize> for Vector<S, DIM> {
    type Output = S;

    fn index(&self, i: usize) -> &S {
        &self.data[i]
    }
}

impl<S, const DIM: usize> IndexMut<usize> for Vector<S, DIM> {
    fn index_mut(&mut self, i: usize) -> &mut S {
        &mut self.data[i]
    }
}

impl<S: Scalar, const DIM: usize> Add for Vector<S, DIM> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<S: Scalar, const DIM: usize> AddAssign for Vector<S, DIM> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar, const DIM: usize> Sub for Vector<S, DIM> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<S: Scalar, const DIM: usize> SubAssign for Vector<S, DIM> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar, const DIM: usize> Neg for Vector<S, DIM> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<S: Scalar, const DIM: usize> Mul<S> for Vector<S, DIM> {
    type Output = Self;

    fn mul(self, scale: S) -> Self {
        self.map(|c| c * scale)
    }
}

impl<S: Scalar, const DIM: usize> MulAssign<S> for Vector<S, DIM> {
    fn mul_assign(&mut self, scale: S) {
        *self = *self * scale;
    }
}

impl<S: Scalar, const DIM: usize> Div<S> for Vector<S, DIM> {
    type Output = Self;

    fn div(self, scale: S) -> Self {
        self.map(|c| c / scale)
    }
}

impl<S: Scalar, const DIM: usize> DivAssign<S> for Vector<S, DIM> {
    fn div_assign(&mut self, scale: S) {
        *self = *self / scale;
    }
}

impl<const DIM: usize> Mul<Vector<f32, DIM>> for f32 {
    type Output = Vector<f32, DIM>;

    fn mul(self, v: Vector<f32, DIM>) -> Vector<f32, DIM> {
        v * self
    }
}

impl<const DIM: usize> Mul<Vector<f64, DIM>> for f64 {
    type Output = Vector<f64, DIM>;

    fn mul(self, v: Vector<f64, DIM>) -> Vector<f64, DIM> {
        v * self
    }
}

impl<S: Scalar, const DIM: usize> Sum for Vector<S, DIM> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zeros(), Add::add)
    }
}

// glam interop, used at the boundary with rendering code.

impl From<Vector2<f32>> for Vec2 {
    fn from(v: Vector2<f32>) -> Self {
        Vec2::from_array(v.data)
    }
}

impl From<Vec2> for Vector2<f32> {
    fn from(v: Vec2) -> Self {
        Self::from_array(v.to_array())
    }
}

impl From<Vector3<f32>> for Vec3 {
    fn from(v: Vector3<f32>) -> Self {
        Vec3::from_array(v.data)
    }
}

impl From<Vec3> for Vector3<f32> {
    fn from(v: Vec3) -> Self {
        Self::from_array(v.to_array())
    }
}

impl From<Vector2<f64>> for DVec2 {
    fn from(v: Vector2<f64>) -> Self {
        DVec2::from_array(v.data)
    }
}

impl From<DVec2> for Vector2<f64> {
    fn from(v: DVec2) -> Self {
        Self::from_array(v.to_array())
    }
}

impl From<Vector3<f64>> for DVec3 {
    fn from(v: Vector3<f64>) -> Self {
        DVec3::from_array(v.data)
    }
}

impl From<DVec3> for Vector3<f64> {
    fn from(v: DVec3) -> Self {
        Self::from_array(v.to_array())
    }
}
