//! Core math types for physika-rs.
//!
//! This crate provides the leaf types every simulation component builds on:
//! - [`Scalar`] trait covering `f32` and `f64`
//! - [`Vector`] fixed-dimension vectors, with [`Vector2`] and [`Vector3`] aliases
//! - [`PhysikaError`] and the crate-wide [`Result`] alias
//! - [`MeshOptions`] configuration

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Exact float comparison is the documented equality semantics for vectors
#![allow(clippy::float_cmp)]

pub mod error;
pub mod options;
pub mod scalar;
pub mod vector;

pub use error::{check_index, IndexKind, PhysikaError, Result};
pub use options::{MeshOptions, OffsetLookup};
pub use scalar::Scalar;
pub use vector::{Vector, Vector2, Vector3};

// Re-export glam types for convenience
pub use glam::{DVec2, DVec3, Vec2, Vec3};
