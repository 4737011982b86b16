use ahash::AHashSet;
// tests/test_triangulation.rs
use cellwalk::dual::graph::{DualEdge, DualGraph};
use cellwalk::dual::triangulation::TriangulationStore;

const INF: usize = 6;

/// Same fixture as the adaptor tests: a degree-5 interior vertex with the
/// outer region closed through the infinite vertex.
fn pentagon_star() -> TriangulationStore {
    TriangulationStore::from_cells(
        7,
        INF,
        &[
            [0, 1, 2],
            [0, 2, 3],
            [0, 3, 4],
            [0, 4, 5],
            [0, 5, 1],
            [2, 1, INF],
            [3, 2, INF],
            [4, 3, INF],
            [5, 4, INF],
            [1, 5, INF],
        ],
    )
}

#[test]
fn test_from_cells_basic_shape() {
    let t = pentagon_star();
    assert_eq!(t.cell_count(), 10);
    assert_eq!(t.vertex_count(), 7);
    assert_eq!(t.infinite_vertex(), INF);
    assert!(t.is_infinite_vertex(INF));
    assert!(!t.is_infinite_vertex(0));
}

#[test]
fn test_rotation_enumerates_full_ring() {
    let t = pentagon_star();

    assert_eq!(t.degree(0), 5);
    let ring: AHashSet<usize> = t.incident_vertices(0).into_iter().collect();
    assert_eq!(ring, AHashSet::from_iter([1, 2, 3, 4, 5]));

    // Hull vertices see the infinite vertex.
    let ring1: AHashSet<usize> = t.incident_vertices(1).into_iter().collect();
    assert_eq!(t.degree(1), 4);
    assert!(ring1.contains(&INF));
}

#[test]
fn test_incident_edges_target_the_queried_vertex() {
    let t = pentagon_star();
    for v in 0..7 {
        let edges = t.incident_edges(v);
        assert_eq!(edges.len(), t.degree(v));
        let mut sources = AHashSet::new();
        for &e in &edges {
            assert_eq!(t.edge_target(e), v);
            assert!(sources.insert(t.edge_source(e)), "edge visited twice");
        }
    }
}

#[test]
fn test_mirror_is_an_involution_that_swaps_endpoints() {
    let t = pentagon_star();
    for c in 0..t.cell_count() {
        for i in 0..3 {
            let e = DualEdge::new(c, i);
            let m = t.mirror(e);
            assert_ne!(m.cell, e.cell);
            assert_eq!(t.mirror(m), e);
            assert_eq!(t.edge_source(m), t.edge_target(e));
            assert_eq!(t.edge_target(m), t.edge_source(e));
        }
    }
}

#[test]
fn test_infinite_edges() {
    let t = pentagon_star();
    for c in 0..t.cell_count() {
        for i in 0..3 {
            let e = DualEdge::new(c, i);
            let touches_inf =
                t.edge_source(e) == INF || t.edge_target(e) == INF;
            assert_eq!(t.is_infinite_edge(e), touches_inf);
        }
    }
}

#[test]
fn test_interior_edges_of_the_fan_are_finite() {
    let t = pentagon_star();
    for e in t.incident_edges(0) {
        assert!(!t.is_infinite_edge(e));
    }
}
