//! physika-rs: geometric substrate for physics simulation.
//!
//! This crate bundles the fixed-dimension [`Vector`] types and the
//! [`VolumetricMesh`] abstraction that simulation components (FEM solvers,
//! dynamics, collision, rendering) are built on.
//!
//! # Quick Start
//!
//! ```
//! use physika_rs::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     // Two triangles covering the unit square
//!     let vertices = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];
//!     let elements = [0, 1, 2, 1, 3, 2];
//!     let mesh = MeshStorage::<f64, 2>::uniform(4, &vertices, 2, &elements, 3)?;
//!
//!     assert_eq!(mesh.element_vertex_position(1, 2)?, Vector2::new(0.0, 1.0));
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`MeshStorage`] owns the vertex and connectivity buffers and answers all
//!   index queries. Every index is bounds checked and reports
//!   [`PhysikaError::IndexOutOfRange`] instead of clamping.
//! - [`VolumetricMesh`] is implemented by concrete element-shape meshes,
//!   which add volume, containment and interpolation on top of the storage.
//! - [`draw_geometry`] flattens a mesh into `glam` positions for rendering
//!   front ends.

mod draw;

// Re-export core types
pub use physika_core::{
    check_index,
    error::{IndexKind, PhysikaError, Result},
    options::{MeshOptions, OffsetLookup},
    Scalar, Vector, Vector2, Vector3,
};

// Re-export geometry types
pub use physika_geometry::{ElementArity, ElementShape, MeshStorage, VolumetricMesh};

pub use draw::{draw_geometry, DrawGeometry};

// Re-export glam types for convenience
pub use glam::{DVec2, DVec3, Vec2, Vec3};

/// Initializes `env_logger` from the `RUST_LOG` environment variable.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
