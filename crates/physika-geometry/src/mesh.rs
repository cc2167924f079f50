//! The volumetric mesh contract.
//!
//! A [`VolumetricMesh`] is the geometric domain of a simulation. Vertex and
//! element bookkeeping is shared and lives in [`MeshStorage`]; everything that
//! depends on the element shape (volume, point containment, interpolation
//! weights) is supplied by the implementing type.
//!
//! Implementers provide [`VolumetricMesh::storage`] and the four
//! shape-specific methods. All index queries are forwarded to the storage and
//! come for free. The trait is object safe, so mixed collections of meshes
//! can be held as `Box<dyn VolumetricMesh<S, DIM>>`.

use physika_core::{PhysikaError, Result, Scalar, Vector};

use crate::shape::ElementShape;
use crate::storage::MeshStorage;

/// A mesh of elements over `DIM`-dimensional vertices.
pub trait VolumetricMesh<S: Scalar, const DIM: usize>: Send + Sync {
    /// Returns the shared vertex and connectivity storage.
    fn storage(&self) -> &MeshStorage<S, DIM>;

    /// Returns the volume (area in 2D) of `element`.
    fn element_volume(&self, element: usize) -> Result<S>;

    /// Returns whether `position` lies inside `element`.
    fn contains_vertex(&self, element: usize, position: &Vector<S, DIM>) -> Result<bool>;

    /// Writes the interpolation weights of `position` within `element`.
    ///
    /// `weights` must hold exactly one entry per element vertex, in local
    /// vertex order. Use [`VolumetricMesh::check_weight_buffer`] to validate it.
    fn interpolation_weights(
        &self,
        element: usize,
        position: &Vector<S, DIM>,
        weights: &mut [S],
    ) -> Result<()>;

    /// Logs a description of the mesh.
    fn print_info(&self);

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize {
        self.storage().vertex_count()
    }

    /// Returns the number of elements.
    fn element_count(&self) -> usize {
        self.storage().element_count()
    }

    /// Returns true if every element has the same vertex count.
    fn is_uniform_element_type(&self) -> bool {
        self.storage().is_uniform_element_type()
    }

    /// Returns the number of vertices of `element`.
    fn element_vertex_count(&self, element: usize) -> Result<usize> {
        self.storage().element_vertex_count(element)
    }

    /// Returns the position of vertex `vertex`.
    fn vertex_position(&self, vertex: usize) -> Result<Vector<S, DIM>> {
        self.storage().vertex_position(vertex)
    }

    /// Returns the position of local vertex `local` of `element`.
    fn element_vertex_position(&self, element: usize, local: usize) -> Result<Vector<S, DIM>> {
        self.storage().element_vertex_position(element, local)
    }

    /// Returns the shape of `element` inferred from its vertex count.
    fn element_shape(&self, element: usize) -> Result<Option<ElementShape>> {
        let count = self.storage().element_vertex_count(element)?;
        Ok(ElementShape::infer(DIM, count))
    }

    /// Checks that `weights` has one slot per vertex of `element`.
    fn check_weight_buffer(&self, element: usize, weights: &[S]) -> Result<()> {
        let expected = self.element_vertex_count(element)?;
        if weights.len() == expected {
            Ok(())
        } else {
            Err(PhysikaError::SizeMismatch {
                expected,
                actual: weights.len(),
            })
        }
    }

    /// Sum of all element volumes.
    fn total_volume(&self) -> Result<S> {
        (0..self.element_count()).try_fold(S::zero(), |total, element| {
            Ok(total + self.element_volume(element)?)
        })
    }

    /// Returns the first element containing `position`, if any.
    fn locate_vertex(&self, position: &Vector<S, DIM>) -> Result<Option<usize>> {
        for element in 0..self.element_count() {
            if self.contains_vertex(element, position)? {
                return Ok(Some(element));
            }
        }
        Ok(None)
    }
}
