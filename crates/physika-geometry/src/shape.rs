//! Element shape tags.

use std::fmt;

/// The linear element shapes volumetric meshes are built from.
///
/// This is a tag only. The volume, containment and interpolation formulas
/// belong to the concrete mesh types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementShape {
    /// Triangle (3 vertices, 2D)
    Triangle,
    /// Quadrilateral (4 vertices, 2D)
    Quad,
    /// Tetrahedron (4 vertices, 3D)
    Tetrahedron,
    /// Hexahedron (8 vertices, 3D)
    Hexahedron,
}

impl ElementShape {
    /// Number of vertices of this shape.
    #[must_use]
    pub const fn vertex_count(self) -> usize {
        match self {
            Self::Triangle => 3,
            Self::Quad | Self::Tetrahedron => 4,
            Self::Hexahedron => 8,
        }
    }

    /// Spatial dimension this shape lives in.
    #[must_use]
    pub const fn dimension(self) -> usize {
        match self {
            Self::Triangle | Self::Quad => 2,
            Self::Tetrahedron | Self::Hexahedron => 3,
        }
    }

    /// Infers the shape from a dimension and a vertex count.
    ///
    /// Four vertices are a quad in 2D and a tetrahedron in 3D. Returns `None`
    /// for combinations with no linear shape.
    #[must_use]
    pub const fn infer(dimension: usize, vertex_count: usize) -> Option<Self> {
        match (dimension, vertex_count) {
            (2, 3) => Some(Self::Triangle),
            (2, 4) => Some(Self::Quad),
            (3, 4) => Some(Self::Tetrahedron),
            (3, 8) => Some(Self::Hexahedron),
            _ => None,
        }
    }
}

impl fmt::Display for ElementShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Triangle => "triangle",
            Self::Quad => "quad",
            Self::Tetrahedron => "tetrahedron",
            Self::Hexahedron => "hexahedron",
        };
        f.write_str(name)
    }
}
