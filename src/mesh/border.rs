// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Boundary extraction for face patches of a halfedge mesh.
//!
//! A halfedge lies on the border of a patch iff its face is in the patch
//! and its opposite is either an intrinsic mesh border or incident to a
//! face outside the patch. Both patch algorithms emit the halfedge seen
//! from inside the patch (the one whose face is a patch member). An empty
//! result is a valid outcome (empty patch, or a closed patch with no
//! border), never an error.

use ahash::AHashMap;

use crate::mesh::graph::{FaceGraph, FaceIndexMap};

/// Collects the border of `patch`, dispatching on the availability of a
/// face index map: with one, the table-driven scan
/// ([`border_halfedges_indexed`]); without, the parity toggle
/// ([`border_halfedges_by_parity`]).
pub fn border_halfedges<M, F>(patch: &[usize], mesh: &M, index_map: Option<&F>) -> Vec<usize>
where
    M: FaceGraph,
    F: FaceIndexMap,
{
    match index_map {
        Some(fmap) => border_halfedges_indexed(patch, mesh, fmap),
        None => border_halfedges_by_parity(patch, mesh),
    }
}

/// Index-free extraction by parity counting.
///
/// Every halfedge around every patch face toggles its undirected edge in
/// and out of a map keyed by the canonical representative
/// `min(h, opposite(h))`. Interior edges of the patch are enumerated
/// exactly twice (once per side) and cancel; edges left in the map were
/// seen exactly once and form the border. The canonical key makes the
/// toggle independent of traversal order and orientation.
///
/// The stored value is the sighting itself, so survivors are already
/// oriented from inside the patch. Output is sorted by halfedge id.
///
/// Caller contract: `patch` is duplicate-free, otherwise the parity count
/// is corrupted. Checked in debug builds only.
pub fn border_halfedges_by_parity<M: FaceGraph>(patch: &[usize], mesh: &M) -> Vec<usize> {
    #[cfg(debug_assertions)]
    {
        let mut uniq = ahash::AHashSet::with_capacity(patch.len());
        for &f in patch {
            debug_assert!(uniq.insert(f), "patch contains face {} twice", f);
        }
    }

    // canonical undirected key -> the halfedge that sighted it first
    let mut border: AHashMap<usize, usize> = AHashMap::new();
    for &f in patch {
        for h in mesh.face_halfedges(f) {
            let key = h.min(mesh.opposite(h));
            if border.remove(&key).is_none() {
                border.insert(key, h); // odd number of appearances
            }
            // even number of appearances: interior edge, cancelled
        }
    }

    let mut out: Vec<usize> = border.into_iter().map(|(_, h)| h).collect();
    out.sort_unstable();
    out
}

/// Table-driven extraction over a dense face index.
///
/// Marks patch members in a boolean presence table, then tests the
/// opposite of every halfedge around every patch face: intrinsic border or
/// absent face means `h` is on the patch border. Duplicate patch entries
/// do not corrupt the table (flag-setting is idempotent), but the patch is
/// still expected to be duplicate-free. Output follows patch traversal
/// order.
pub fn border_halfedges_indexed<M, F>(patch: &[usize], mesh: &M, fmap: &F) -> Vec<usize>
where
    M: FaceGraph,
    F: FaceIndexMap,
{
    let mut present = vec![false; mesh.face_count()];
    for &f in patch {
        present[fmap.face_index(f)] = true;
    }

    let mut out = Vec::new();
    for &f in patch {
        for h in mesh.face_halfedges(f) {
            let opp = mesh.opposite(h);
            let outside = match mesh.face_of(opp) {
                None => true,
                Some(g) => !present[fmap.face_index(g)],
            };
            if outside {
                out.push(h);
            }
        }
    }
    out
}

/// Whole-mesh shortcut: when the patch is all faces, the border is exactly
/// the set of intrinsic border halfedges. Single scan, no membership
/// logic. Note these are the outward halfedges by definition (an inside
/// orientation does not exist for them).
pub fn mesh_border_halfedges<M: FaceGraph>(mesh: &M) -> Vec<usize> {
    (0..mesh.halfedge_count())
        .filter(|&h| mesh.is_border(h))
        .collect()
}
