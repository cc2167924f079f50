//! Integration tests for the mesh query surface.
//!
//! A small linear-triangle mesh is defined here to exercise the
//! `VolumetricMesh` contract end to end.

use physika_rs::*;

/// Linear triangles in the plane.
struct TriangleMesh {
    storage: MeshStorage<f64, 2>,
}

impl TriangleMesh {
    fn new(vertices: &[f64], elements: &[usize]) -> Result<Self> {
        let storage =
            MeshStorage::uniform(vertices.len() / 2, vertices, elements.len() / 3, elements, 3)?;
        Ok(Self { storage })
    }

    fn corners(&self, element: usize) -> Result<[Vector2<f64>; 3]> {
        Ok([
            self.element_vertex_position(element, 0)?,
            self.element_vertex_position(element, 1)?,
            self.element_vertex_position(element, 2)?,
        ])
    }

    fn barycentric(&self, element: usize, p: &Vector2<f64>) -> Result<[f64; 3]> {
        let [a, b, c] = self.corners(element)?;
        let area = (b - a).cross(&(c - a));
        let w1 = (*p - a).cross(&(c - a)) / area;
        let w2 = (b - a).cross(&(*p - a)) / area;
        Ok([1.0 - w1 - w2, w1, w2])
    }
}

impl VolumetricMesh<f64, 2> for TriangleMesh {
    fn storage(&self) -> &MeshStorage<f64, 2> {
        &self.storage
    }

    fn element_volume(&self, element: usize) -> Result<f64> {
        let [a, b, c] = self.corners(element)?;
        Ok(0.5 * (b - a).cross(&(c - a)).abs())
    }

    fn contains_vertex(&self, element: usize, position: &Vector2<f64>) -> Result<bool> {
        Ok(self
            .barycentric(element, position)?
            .iter()
            .all(|&w| w >= 0.0))
    }

    fn interpolation_weights(
        &self,
        element: usize,
        position: &Vector2<f64>,
        weights: &mut [f64],
    ) -> Result<()> {
        self.check_weight_buffer(element, weights)?;
        weights.copy_from_slice(&self.barycentric(element, position)?);
        Ok(())
    }

    fn print_info(&self) {
        log::info!(
            "triangle mesh: {} vertices, {} triangles",
            self.vertex_count(),
            self.element_count()
        );
    }
}

const SQUARE_VERTICES: [f64; 8] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];
const SQUARE_ELEMENTS: [usize; 6] = [0, 1, 2, 1, 3, 2];

#[test]
fn test_two_triangle_scenario() {
    init_logging();
    let mesh = TriangleMesh::new(&SQUARE_VERTICES, &SQUARE_ELEMENTS).unwrap();
    mesh.print_info();

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.element_count(), 2);
    assert_eq!(mesh.element_vertex_count(0).unwrap(), 3);
    assert_eq!(
        mesh.element_vertex_position(1, 2).unwrap(),
        Vector2::new(0.0, 1.0)
    );
    assert_eq!(mesh.element_shape(0).unwrap(), Some(ElementShape::Triangle));
}

#[test]
fn test_vertex_round_trip() {
    let mesh = TriangleMesh::new(&SQUARE_VERTICES, &SQUARE_ELEMENTS).unwrap();
    for v in 0..mesh.vertex_count() {
        let p = mesh.vertex_position(v).unwrap();
        assert_eq!(p.to_array(), [SQUARE_VERTICES[2 * v], SQUARE_VERTICES[2 * v + 1]]);
    }
}

#[test]
fn test_element_round_trip() {
    let mesh = TriangleMesh::new(&SQUARE_VERTICES, &SQUARE_ELEMENTS).unwrap();
    for e in 0..mesh.element_count() {
        for local in 0..3 {
            let global = SQUARE_ELEMENTS[3 * e + local];
            assert_eq!(
                mesh.element_vertex_position(e, local).unwrap(),
                mesh.vertex_position(global).unwrap()
            );
        }
    }
}

#[test]
fn test_bounds_enforcement() {
    let mesh = TriangleMesh::new(&SQUARE_VERTICES, &SQUARE_ELEMENTS).unwrap();

    let err = mesh.vertex_position(mesh.vertex_count()).unwrap_err();
    assert!(err.is_out_of_range());

    let err = mesh
        .element_vertex_position(mesh.element_count(), 0)
        .unwrap_err();
    assert!(matches!(
        err,
        PhysikaError::IndexOutOfRange {
            kind: IndexKind::Element,
            index: 2,
            bound: 2
        }
    ));

    let local = mesh.element_vertex_count(0).unwrap();
    let err = mesh.element_vertex_position(0, local).unwrap_err();
    assert!(matches!(
        err,
        PhysikaError::IndexOutOfRange {
            kind: IndexKind::LocalVertex,
            index: 3,
            bound: 3
        }
    ));
}

#[test]
fn test_shape_queries() {
    let mesh = TriangleMesh::new(&SQUARE_VERTICES, &SQUARE_ELEMENTS).unwrap();

    assert_eq!(mesh.element_volume(0).unwrap(), 0.5);
    assert_eq!(mesh.total_volume().unwrap(), 1.0);

    let inside_first = Vector2::new(0.25, 0.25);
    let inside_second = Vector2::new(0.75, 0.75);
    assert!(mesh.contains_vertex(0, &inside_first).unwrap());
    assert!(!mesh.contains_vertex(1, &inside_first).unwrap());
    assert_eq!(mesh.locate_vertex(&inside_second).unwrap(), Some(1));
    assert_eq!(mesh.locate_vertex(&Vector2::new(2.0, 2.0)).unwrap(), None);
}

#[test]
fn test_interpolation_weights() {
    let mesh = TriangleMesh::new(&SQUARE_VERTICES, &SQUARE_ELEMENTS).unwrap();

    let mut weights = [0.0; 3];
    mesh.interpolation_weights(0, &Vector2::new(1.0, 0.0), &mut weights)
        .unwrap();
    assert_eq!(weights, [0.0, 1.0, 0.0]);

    // Weights reproduce the position they were computed for
    let p = Vector2::new(0.2, 0.3);
    mesh.interpolation_weights(0, &p, &mut weights).unwrap();
    let rebuilt: Vector2<f64> = (0..3)
        .map(|local| mesh.element_vertex_position(0, local).unwrap() * weights[local])
        .sum();
    assert!((rebuilt - p).norm() < 1e-12);

    let mut too_long = [0.0; 4];
    let err = mesh
        .interpolation_weights(0, &p, &mut too_long)
        .unwrap_err();
    assert!(matches!(
        err,
        PhysikaError::SizeMismatch {
            expected: 3,
            actual: 4
        }
    ));
}

#[test]
fn test_ragged_scenario_reads_after_first_element() {
    // Triangle [0, 1, 2] then quad [1, 4, 5, 3]
    let vertices = [
        0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 0.0, 2.0, 1.0,
    ];
    let elements = [0, 1, 2, 1, 4, 5, 3];
    let mesh = MeshStorage::<f64, 2>::ragged(6, &vertices, 2, &elements, &[3, 4]).unwrap();

    assert_eq!(mesh.total_connectivity_len(), 7);
    // Offset 3 holds vertex 1; offset 4 would have been vertex 4
    assert_eq!(
        mesh.element_vertex_position(1, 0).unwrap(),
        Vector2::new(1.0, 0.0)
    );
    assert_eq!(mesh.element_count(), 2);
}

#[test]
fn test_options_from_json_drive_construction() {
    let options = MeshOptions::from_json(r#"{ "offset_lookup": "linear_scan" }"#).unwrap();
    let vertices = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    let elements = [0, 1, 2, 1, 3, 2];
    let mesh =
        MeshStorage::<f64, 2>::ragged_with_options(4, &vertices, 2, &elements, &[3, 3], &options)
            .unwrap();
    assert_eq!(
        mesh.element_vertex_position(1, 1).unwrap(),
        Vector2::new(1.0, 1.0)
    );
}

#[test]
fn test_concurrent_reads() {
    let mesh = TriangleMesh::new(&SQUARE_VERTICES, &SQUARE_ELEMENTS).unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for e in 0..mesh.element_count() {
                    assert_eq!(mesh.element_volume(e).unwrap(), 0.5);
                }
            });
        }
    });
}
