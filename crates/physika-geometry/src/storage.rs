//! Owned vertex and connectivity buffers shared by every volumetric mesh.
//!
//! # Layout
//!
//! Vertex coordinates live in one flat buffer of `vertex_count * DIM`
//! scalars; vertex `v` occupies `[DIM * v, DIM * v + DIM)`.
//!
//! Connectivity is one flat buffer of global vertex indices. Each element's
//! list is stored in element order, so element `e` starts at the prefix sum
//! of the vertex counts of elements `0..e`. When every element has the same
//! count `k` this is just `e * k`.
//!
//! For ragged meshes the prefix sums are, by default, tabulated once at
//! construction (see [`OffsetLookup`]). The table is never filled lazily, so
//! a built [`MeshStorage`] can be read from many threads at once.
//!
//! # Example
//!
//! ```
//! use physika_core::Vector2;
//! use physika_geometry::MeshStorage;
//!
//! // A triangle followed by a quad
//! let vertices = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 0.0];
//! let elements = [0, 1, 2, 1, 4, 3, 2];
//! let mesh = MeshStorage::<f64, 2>::ragged(5, &vertices, 2, &elements, &[3, 4]).unwrap();
//!
//! assert_eq!(mesh.element_vertex_count(1).unwrap(), 4);
//! assert_eq!(mesh.element_vertex_position(1, 1).unwrap(), Vector2::new(2.0, 0.0));
//! ```

use physika_core::{
    check_index, IndexKind, MeshOptions, OffsetLookup, PhysikaError, Result, Scalar, Vector,
};

/// Vertices per element: one shared count, or one count per element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementArity {
    /// Every element has this many vertices.
    Uniform(usize),
    /// Element `e` has `counts[e]` vertices.
    Ragged(Vec<usize>),
}

/// Flat, exclusively owned storage for a volumetric mesh.
///
/// A default-constructed storage is uninitialized: it has no vertices, no
/// elements and reports a non-uniform element type. The constructors produce
/// an initialized storage, and there is no way back.
#[derive(Debug, Clone)]
pub struct MeshStorage<S, const DIM: usize> {
    vertex_count: usize,
    vertices: Vec<S>,
    element_count: usize,
    elements: Vec<usize>,
    /// `None` until initialized.
    arity: Option<ElementArity>,
    /// Start offset of each element, ragged meshes with a prefix table only.
    offsets: Option<Vec<usize>>,
}

impl<S: Scalar, const DIM: usize> Default for MeshStorage<S, DIM> {
    fn default() -> Self {
        let () = Self::SUPPORTED_DIM;
        Self {
            vertex_count: 0,
            vertices: Vec::new(),
            element_count: 0,
            elements: Vec::new(),
            arity: None,
            offsets: None,
        }
    }
}

impl<S: Scalar, const DIM: usize> MeshStorage<S, DIM> {
    const SUPPORTED_DIM: () = assert!(DIM == 2 || DIM == 3, "meshes must be 2D or 3D");

    /// Builds a mesh whose elements all have `vertices_per_element` vertices.
    ///
    /// # Arguments
    /// * `vertex_count` - Number of vertices
    /// * `vertices` - At least `vertex_count * DIM` coordinates, vertex-major
    /// * `element_count` - Number of elements
    /// * `elements` - At least `element_count * vertices_per_element` vertex indices
    /// * `vertices_per_element` - Shared vertex count of every element
    pub fn uniform(
        vertex_count: usize,
        vertices: &[S],
        element_count: usize,
        elements: &[usize],
        vertices_per_element: usize,
    ) -> Result<Self> {
        Self::uniform_with_options(
            vertex_count,
            vertices,
            element_count,
            elements,
            vertices_per_element,
            &MeshOptions::default(),
        )
    }

    /// Like [`MeshStorage::uniform`], with explicit options.
    pub fn uniform_with_options(
        vertex_count: usize,
        vertices: &[S],
        element_count: usize,
        elements: &[usize],
        vertices_per_element: usize,
        options: &MeshOptions,
    ) -> Result<Self> {
        Self::init(
            vertex_count,
            vertices,
            element_count,
            elements,
            ElementArity::Uniform(vertices_per_element),
            options,
        )
    }

    /// Builds a mesh where element `e` has `vertices_per_element[e]` vertices.
    ///
    /// Only the first `element_count` counts are read.
    pub fn ragged(
        vertex_count: usize,
        vertices: &[S],
        element_count: usize,
        elements: &[usize],
        vertices_per_element: &[usize],
    ) -> Result<Self> {
        Self::ragged_with_options(
            vertex_count,
            vertices,
            element_count,
            elements,
            vertices_per_element,
            &MeshOptions::default(),
        )
    }

    /// Like [`MeshStorage::ragged`], with explicit options.
    pub fn ragged_with_options(
        vertex_count: usize,
        vertices: &[S],
        element_count: usize,
        elements: &[usize],
        vertices_per_element: &[usize],
        options: &MeshOptions,
    ) -> Result<Self> {
        let counts = vertices_per_element
            .get(..element_count)
            .ok_or(PhysikaError::SizeMismatch {
                expected: element_count,
                actual: vertices_per_element.len(),
            })?;
        Self::init(
            vertex_count,
            vertices,
            element_count,
            elements,
            ElementArity::Ragged(counts.to_vec()),
            options,
        )
    }

    /// Copies the inputs into owned buffers sized exactly to the computed totals.
    ///
    /// Short inputs are rejected. Totals saturate at `usize::MAX`, so counts
    /// too large to address are rejected the same way. Index values and counts
    /// are not validated otherwise; a dangling index is reported when it is
    /// queried.
    fn init(
        vertex_count: usize,
        vertices: &[S],
        element_count: usize,
        elements: &[usize],
        arity: ElementArity,
        options: &MeshOptions,
    ) -> Result<Self> {
        let () = Self::SUPPORTED_DIM;

        let coordinate_count = vertex_count.saturating_mul(DIM);
        let vertices = vertices
            .get(..coordinate_count)
            .ok_or(PhysikaError::SizeMismatch {
                expected: coordinate_count,
                actual: vertices.len(),
            })?
            .to_vec();

        let connectivity_len = match &arity {
            ElementArity::Uniform(k) => element_count.saturating_mul(*k),
            ElementArity::Ragged(counts) => counts
                .iter()
                .fold(0usize, |total, &count| total.saturating_add(count)),
        };
        let elements = elements
            .get(..connectivity_len)
            .ok_or(PhysikaError::SizeMismatch {
                expected: connectivity_len,
                actual: elements.len(),
            })?
            .to_vec();

        let offsets = match (&arity, options.offset_lookup) {
            (ElementArity::Ragged(counts), OffsetLookup::PrefixTable) => Some(
                counts
                    .iter()
                    .scan(0, |start, &count| {
                        let offset = *start;
                        *start += count;
                        Some(offset)
                    })
                    .collect(),
            ),
            _ => None,
        };

        log::debug!(
            "built {}D {} mesh: {} vertices, {} elements, {} connectivity entries",
            DIM,
            if matches!(arity, ElementArity::Uniform(_)) {
                "uniform"
            } else {
                "ragged"
            },
            vertex_count,
            element_count,
            connectivity_len
        );

        Ok(Self {
            vertex_count,
            vertices,
            element_count,
            elements,
            arity: Some(arity),
            offsets,
        })
    }

    /// Returns true once the storage has been built from input arrays.
    pub fn is_initialized(&self) -> bool {
        self.arity.is_some()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of elements.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Returns true if every element has the same vertex count.
    pub fn is_uniform_element_type(&self) -> bool {
        matches!(self.arity, Some(ElementArity::Uniform(_)))
    }

    /// Returns the per-element vertex counts, if initialized.
    pub fn arity(&self) -> Option<&ElementArity> {
        self.arity.as_ref()
    }

    /// Returns the total length of the connectivity buffer.
    pub fn total_connectivity_len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of vertices of `element`.
    ///
    /// For uniform meshes this is the shared count and `element` is not
    /// checked.
    pub fn element_vertex_count(&self, element: usize) -> Result<usize> {
        match &self.arity {
            Some(ElementArity::Uniform(k)) => Ok(*k),
            Some(ElementArity::Ragged(counts)) => {
                check_index(IndexKind::Element, element, self.element_count)?;
                Ok(counts[element])
            }
            None => Err(PhysikaError::out_of_range(IndexKind::Element, element, 0)),
        }
    }

    /// Returns the position of vertex `vertex`.
    pub fn vertex_position(&self, vertex: usize) -> Result<Vector<S, DIM>> {
        check_index(IndexKind::Vertex, vertex, self.vertex_count)?;
        let start = DIM * vertex;
        Ok(Vector::from_array(std::array::from_fn(|i| {
            self.vertices[start + i]
        })))
    }

    /// Returns the global index of local vertex `local` of `element`.
    pub fn element_vertex_index(&self, element: usize, local: usize) -> Result<usize> {
        check_index(IndexKind::Element, element, self.element_count)?;
        let start = self.element_start(element);
        check_index(
            IndexKind::LocalVertex,
            local,
            self.element_vertex_count(element)?,
        )?;
        Ok(self.elements[start + local])
    }

    /// Returns the position of local vertex `local` of `element`.
    pub fn element_vertex_position(&self, element: usize, local: usize) -> Result<Vector<S, DIM>> {
        self.vertex_position(self.element_vertex_index(element, local)?)
    }

    /// Returns a copy of the global vertex indices of `element`.
    pub fn element_vertex_indices(&self, element: usize) -> Result<Vec<usize>> {
        check_index(IndexKind::Element, element, self.element_count)?;
        let start = self.element_start(element);
        let count = self.element_vertex_count(element)?;
        Ok(self.elements[start..start + count].to_vec())
    }

    /// Returns the positions of all vertices of `element`, in local order.
    pub fn element_vertex_positions(&self, element: usize) -> Result<Vec<Vector<S, DIM>>> {
        self.element_vertex_indices(element)?
            .into_iter()
            .map(|vertex| self.vertex_position(vertex))
            .collect()
    }

    /// Iterates over all vertex positions in index order.
    pub fn vertex_positions(&self) -> impl Iterator<Item = Vector<S, DIM>> + '_ {
        self.vertices
            .chunks_exact(DIM)
            .map(|c| Vector::from_array(std::array::from_fn(|i| c[i])))
    }

    /// Returns the axis-aligned bounding box `(min, max)` of the vertices.
    ///
    /// Returns `None` if the mesh has no vertices.
    pub fn bounding_box(&self) -> Option<(Vector<S, DIM>, Vector<S, DIM>)> {
        let mut positions = self.vertex_positions();
        let first = positions.next()?;
        Some(positions.fold((first, first), |(min, max), p| {
            (min.zip_map(p, S::min), max.zip_map(p, S::max))
        }))
    }

    /// Start of `element` in the connectivity buffer. `element` must be in range.
    fn element_start(&self, element: usize) -> usize {
        match (&self.arity, &self.offsets) {
            (Some(ElementArity::Uniform(k)), _) => element * k,
            (Some(ElementArity::Ragged(_)), Some(offsets)) => offsets[element],
            (Some(ElementArity::Ragged(counts)), None) => counts[..element].iter().sum(),
            (None, _) => 0,
        }
    }
}
