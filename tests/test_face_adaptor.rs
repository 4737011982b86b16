use ahash::AHashSet;
// tests/test_face_adaptor.rs
use cellwalk::adaptor::{context::AdaptorContext, face::Face};
use cellwalk::dual::graph::DualGraph;
use cellwalk::dual::predicates::{NoDegeneracy, TaggedDegeneracy};
use cellwalk::dual::triangulation::TriangulationStore;

const INF: usize = 6;

/// Pentagon star: vertex 0 surrounded by the ring 1..=5, outer region
/// triangulated through the infinite vertex 6.
///
///        3 ---- 2
///       /  \  /  \
///      4 --- 0 --- 1
///       \   / \   /
///        \ /   \ /
///         5 --- +      (+ = ring closes 5-1; 6 is the infinite vertex)
///
/// Vertex 0 has degree 5, all edges finite; every ring vertex has the
/// infinite vertex among its neighbors.
fn pentagon_star() -> TriangulationStore {
    TriangulationStore::from_cells(
        7,
        INF,
        &[
            // interior fan around vertex 0
            [0, 1, 2],
            [0, 2, 3],
            [0, 3, 4],
            [0, 4, 5],
            [0, 5, 1],
            // infinite cells closing the hull
            [2, 1, INF],
            [3, 2, INF],
            [4, 3, INF],
            [5, 4, INF],
            [1, 5, INF],
        ],
    )
}

#[test]
fn test_degree_five_walk_returns_to_start() {
    let dual = pentagon_star();
    let ctx = AdaptorContext::new(&dual, NoDegeneracy);
    let face = ctx.face(0);

    assert!(!face.is_unbounded());

    let walk: Vec<_> = face.outer_ccb().collect();
    assert_eq!(walk.len(), 5);
    assert_eq!(walk.len(), dual.degree(0));

    // Every arc bounds this face and is visited exactly once.
    let mut seen = AHashSet::new();
    for h in &walk {
        assert!(h.face() == face);
        assert!(seen.insert(h.dual_edge()));
    }

    // Positioned at the entry halfedge.
    assert!(walk[0] == face.halfedge());
}

#[test]
fn test_halfedge_recovers_face_for_every_vertex() {
    let dual = pentagon_star();
    let ctx = AdaptorContext::new(&dual, NoDegeneracy);

    for v in 0..6 {
        let face = ctx.face(v);
        assert!(face.halfedge().face() == face, "face {} not recovered", v);
        assert!(face.halfedge_on_outer_ccb() == face.halfedge());
    }
}

#[test]
fn test_unbounded_faces() {
    let dual = pentagon_star();
    let ctx = AdaptorContext::new(&dual, NoDegeneracy);

    assert!(!ctx.face(0).is_unbounded());
    for v in 1..6 {
        assert!(ctx.face(v).is_unbounded(), "face {} should be unbounded", v);
    }
}

#[test]
fn test_degenerate_edge_is_skipped() {
    let dual = pentagon_star();
    let mut preds = TaggedDegeneracy::new();
    preds.tag_edge(0, 2);
    let ctx = AdaptorContext::new(&dual, preds);

    // degree(0) == 5, one incident edge degenerate.
    let face = ctx.face(0);
    let walk: Vec<_> = face.outer_ccb().collect();
    assert_eq!(walk.len(), 4);
    for h in &walk {
        assert!(!ctx.is_degenerate_edge(h.dual_edge()));
    }
    assert!(face.is_valid());

    // The same undirected edge is skipped from the other side too.
    let face2 = ctx.face(2);
    assert_eq!(face2.outer_ccb().count(), dual.degree(2) - 1);
    assert!(face2.is_valid());
}

#[test]
fn test_no_inner_ccbs_and_no_holes() {
    let dual = pentagon_star();
    let ctx = AdaptorContext::new(&dual, NoDegeneracy);
    let face = ctx.face(0);

    for h in face.outer_ccb() {
        assert!(!face.is_halfedge_on_inner_ccb(&h));
        assert!(face.is_halfedge_on_outer_ccb(&h));
    }

    let mut holes = face.holes();
    assert_eq!(holes.len(), 0);
    assert!(holes.next().is_none());
}

#[test]
fn test_halfedge_of_other_face_not_on_ccb() {
    let dual = pentagon_star();
    let ctx = AdaptorContext::new(&dual, NoDegeneracy);

    let h3 = ctx.face(3).halfedge();
    assert!(!ctx.face(0).is_halfedge_on_outer_ccb(&h3));
}

#[test]
fn test_opposite_crosses_to_neighbor_face() {
    let dual = pentagon_star();
    let ctx = AdaptorContext::new(&dual, NoDegeneracy);
    let face = ctx.face(0);

    for h in face.outer_ccb() {
        let opp = h.opposite();
        assert!(opp.opposite() == h);
        let neighbor = opp.face().dual_vertex();
        assert_ne!(neighbor, 0);
        assert!((1..6).contains(&neighbor));
    }
}

#[test]
fn test_walk_is_restartable() {
    let dual = pentagon_star();
    let ctx = AdaptorContext::new(&dual, NoDegeneracy);

    let mut ccb = ctx.face(0).outer_ccb();
    let first: Vec<_> = ccb.by_ref().collect();
    assert!(ccb.next().is_none());

    ccb.restart();
    let second: Vec<_> = ccb.collect();
    assert_eq!(first.len(), second.len());
    assert!(first.iter().zip(&second).all(|(a, b)| a == b));
}

#[test]
fn test_is_valid_all_faces() {
    let dual = pentagon_star();
    let ctx = AdaptorContext::new(&dual, NoDegeneracy);

    for v in 0..6 {
        assert!(ctx.face(v).is_valid(), "face {} invalid", v);
    }
}

#[test]
fn test_face_equality_and_null_face() {
    let dual = pentagon_star();
    let ctx = AdaptorContext::new(&dual, NoDegeneracy);

    assert!(ctx.face(0) == ctx.face(0));
    assert!(ctx.face(0) != ctx.face(1));

    type F<'a> = Face<'a, TriangulationStore, NoDegeneracy>;
    let null_a = F::null();
    let null_b = F::default();
    assert!(null_a == null_b);
    assert!(null_a.is_null());
    assert!(ctx.face(0) != null_a);
    assert!(null_a.is_valid());
}
