//! Draw-geometry extraction for rendering front ends.
//!
//! Renderers only read from meshes. This module copies a mesh into the
//! single-precision `glam` layout they consume; 2D meshes are placed in the
//! `z = 0` plane.

use glam::Vec3;

use physika_core::{Result, Scalar, Vector};
use physika_geometry::MeshStorage;

/// Renderable copy of a mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawGeometry {
    /// One position per mesh vertex, in vertex order.
    pub positions: Vec<Vec3>,
    /// Global vertex indices of each element, in element order.
    pub elements: Vec<Vec<usize>>,
}

impl DrawGeometry {
    /// Returns the number of elements.
    #[must_use]
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if there are neither positions nor elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.elements.is_empty()
    }
}

/// Copies `mesh` into a [`DrawGeometry`].
pub fn draw_geometry<S: Scalar, const DIM: usize>(
    mesh: &MeshStorage<S, DIM>,
) -> Result<DrawGeometry> {
    let positions = mesh.vertex_positions().map(to_vec3).collect();
    let elements = (0..mesh.element_count())
        .map(|element| mesh.element_vertex_indices(element))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "extracted draw geometry: {} vertices, {} elements",
        mesh.vertex_count(),
        elements.len()
    );

    Ok(DrawGeometry {
        positions,
        elements,
    })
}

fn to_vec3<S: Scalar, const DIM: usize>(v: Vector<S, DIM>) -> Vec3 {
    let mut out = Vec3::ZERO;
    for (i, c) in v.iter().take(3).enumerate() {
        out[i] = c.to_f32().unwrap_or(f32::NAN);
    }
    out
}
