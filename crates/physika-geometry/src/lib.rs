//! Volumetric mesh storage and query contract for physika-rs.
//!
//! - [`MeshStorage`] owns flat vertex and connectivity buffers for uniform or
//!   ragged (mixed-shape) meshes and answers every index-based query
//! - [`VolumetricMesh`] is the trait concrete element-shape meshes implement
//! - [`ElementShape`] tags the linear element shapes

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod mesh;
pub mod shape;
pub mod storage;

pub use mesh::VolumetricMesh;
pub use shape::ElementShape;
pub use storage::{ElementArity, MeshStorage};
