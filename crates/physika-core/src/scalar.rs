//! Scalar trait shared by vectors and meshes.

use std::fmt::{Debug, Display};

use num_traits::Float;

/// A floating-point scalar usable as a vector component.
///
/// Implemented for `f32` and `f64` (every `num_traits::Float` that is also
/// printable and thread-safe).
pub trait Scalar: Float + Default + Debug + Display + Send + Sync + 'static {}

impl<T> Scalar for T where T: Float + Default + Debug + Display + Send + Sync + 'static {}
