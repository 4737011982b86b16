// tests/test_border.rs
use cellwalk::mesh::border::{
    border_halfedges, border_halfedges_by_parity, border_halfedges_indexed,
    mesh_border_halfedges,
};
use cellwalk::mesh::core::HalfedgeMesh;
use cellwalk::mesh::graph::{FaceGraph, IdentityFaceIndex};

/// Canonical undirected representative, for comparing borders across
/// orientation conventions.
fn canonical(mesh: &HalfedgeMesh, h: usize) -> usize {
    h.min(mesh.opposite(h))
}

fn canonical_set(mesh: &HalfedgeMesh, hs: &[usize]) -> Vec<usize> {
    let mut keys: Vec<usize> = hs.iter().map(|&h| canonical(mesh, h)).collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

fn sorted(mut v: Vec<usize>) -> Vec<usize> {
    v.sort_unstable();
    v
}

fn make_single_triangle() -> HalfedgeMesh {
    let mut m = HalfedgeMesh::new();
    let v0 = m.add_vertex();
    let v1 = m.add_vertex();
    let v2 = m.add_vertex();
    m.add_triangle(v0, v1, v2);
    m
}

/// Square split into two CCW triangles:
///  v3 ---- v2
///   |  \    |
///   |   \   |
///  v0 ---- v1
///
/// Tris: f0 = (v0,v1,v2) and f1 = (v0,v2,v3), sharing the diagonal v0-v2.
fn make_two_tris_square() -> HalfedgeMesh {
    let mut m = HalfedgeMesh::new();
    for _ in 0..4 {
        m.add_vertex();
    }
    let f0 = m.add_triangle(0, 1, 2);
    let f1 = m.add_triangle(0, 2, 3);
    assert_eq!((f0, f1), (0, 1));
    m
}

/// Closed tetrahedron: four triangles, no intrinsic border anywhere.
fn make_tetrahedron() -> HalfedgeMesh {
    let mut m = HalfedgeMesh::new();
    for _ in 0..4 {
        m.add_vertex();
    }
    m.add_triangle(0, 2, 1);
    m.add_triangle(0, 1, 3);
    m.add_triangle(1, 2, 3);
    m.add_triangle(0, 3, 2);
    m
}

/// Cylindrical band of four quads, each split into a lower and an upper
/// triangle. Vertices 0..4 form the bottom ring, 4..8 the top ring; the
/// two rings are the intrinsic mesh border. Faces: quad i contributes
/// face 2i (lower) and 2i+1 (upper).
fn make_band() -> HalfedgeMesh {
    let mut m = HalfedgeMesh::new();
    for _ in 0..8 {
        m.add_vertex();
    }
    for i in 0..4 {
        let j = (i + 1) % 4;
        let (bi, bj) = (i, j);
        let (ti, tj) = (4 + i, 4 + j);
        m.add_triangle(bi, bj, tj); // lower
        m.add_triangle(bi, tj, ti); // upper
    }
    assert_eq!(m.face_count(), 8);
    m
}

#[test]
fn test_single_triangle_patch() {
    let m = make_single_triangle();
    let patch = [0];

    let border = border_halfedges_by_parity(&patch, &m);
    assert_eq!(border.len(), 3);
    for &h in &border {
        assert_eq!(m.face_of(h), Some(0), "border must be seen from inside");
    }
}

#[test]
fn test_quad_single_face_patch_includes_shared_edge() {
    let m = make_two_tris_square();
    let patch = [0];

    let border = border_halfedges_by_parity(&patch, &m);
    assert_eq!(border.len(), 3);
    for &h in &border {
        assert_eq!(m.face_of(h), Some(0));
    }

    // The diagonal is on the border of {f0}: its f0-side halfedge runs
    // v2 -> v0.
    let diagonal = m.halfedge_between(2, 0).unwrap();
    assert!(border.contains(&diagonal));
}

#[test]
fn test_quad_full_patch_matches_whole_mesh_scan() {
    let m = make_two_tris_square();
    let patch = [0, 1];

    let by_parity = border_halfedges_by_parity(&patch, &m);
    assert_eq!(by_parity.len(), 4); // the outer square; diagonal cancelled
    for &h in &by_parity {
        assert!(patch.contains(&m.face_of(h).unwrap()));
    }

    let whole_mesh = mesh_border_halfedges(&m);
    assert_eq!(
        canonical_set(&m, &by_parity),
        canonical_set(&m, &whole_mesh)
    );
}

#[test]
fn test_empty_patch_yields_empty_border() {
    let m = make_two_tris_square();
    let patch: [usize; 0] = [];

    assert!(border_halfedges_by_parity(&patch, &m).is_empty());
    assert!(border_halfedges_indexed(&patch, &m, &IdentityFaceIndex).is_empty());
}

#[test]
fn test_closed_patch_yields_empty_border() {
    let m = make_tetrahedron();
    let patch = [0, 1, 2, 3];

    assert!(border_halfedges_by_parity(&patch, &m).is_empty());
    assert!(border_halfedges_indexed(&patch, &m, &IdentityFaceIndex).is_empty());
    assert!(mesh_border_halfedges(&m).is_empty());
}

#[test]
fn test_algorithms_agree_single_triangle() {
    let m = make_single_triangle();
    let patch = [0];

    let a = border_halfedges_by_parity(&patch, &m);
    let b = border_halfedges_indexed(&patch, &m, &IdentityFaceIndex);
    assert_eq!(a, sorted(b));
}

#[test]
fn test_algorithms_agree_split_quad() {
    let m = make_two_tris_square();
    for patch in [vec![0], vec![1], vec![0, 1]] {
        let a = border_halfedges_by_parity(&patch, &m);
        let b = border_halfedges_indexed(&patch, &m, &IdentityFaceIndex);
        assert_eq!(a, sorted(b), "patch {:?}", patch);
    }
}

#[test]
fn test_algorithms_agree_band_half_patch() {
    let m = make_band();
    // Two adjacent quads out of four.
    let patch = [0, 1, 2, 3];

    let a = border_halfedges_by_parity(&patch, &m);
    let b = border_halfedges_indexed(&patch, &m, &IdentityFaceIndex);
    assert_eq!(a, sorted(b));

    // 2 bottom + 2 top border arcs, plus the 2 verticals facing the other
    // half of the band; the 3 patch-interior edges cancel.
    assert_eq!(a.len(), 6);
    for &h in &a {
        assert!(patch.contains(&m.face_of(h).unwrap()));
    }
}

#[test]
fn test_band_full_patch_matches_whole_mesh_scan() {
    let m = make_band();
    let patch: Vec<usize> = (0..m.face_count()).collect();

    let a = border_halfedges_by_parity(&patch, &m);
    let c = mesh_border_halfedges(&m);

    // Both boundary rings, 8 arcs total.
    assert_eq!(a.len(), 8);
    assert_eq!(canonical_set(&m, &a), canonical_set(&m, &c));

    // Opposite conventions: parity reports the inside, the whole-mesh scan
    // the intrinsic border side.
    for &h in &a {
        assert!(m.face_of(h).is_some());
    }
    for &h in &c {
        assert!(m.is_border(h));
    }
}

#[test]
fn test_entry_point_dispatches_on_index_map() {
    let m = make_band();
    let patch = [2, 3, 4, 5];

    let without_map = border_halfedges::<_, IdentityFaceIndex>(&patch, &m, None);
    let with_map = border_halfedges(&patch, &m, Some(&IdentityFaceIndex));

    assert_eq!(without_map, border_halfedges_by_parity(&patch, &m));
    assert_eq!(
        with_map,
        border_halfedges_indexed(&patch, &m, &IdentityFaceIndex)
    );
    assert_eq!(sorted(with_map), without_map);
}
