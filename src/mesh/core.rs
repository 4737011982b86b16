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

use ahash::AHashMap;

use crate::mesh::{face::Face, graph::FaceGraph, half_edge::HalfEdge};

/// Purely combinatorial halfedge mesh: the stock [`FaceGraph`] model.
///
/// Vertices are bare indices; positions live with the caller. Directed
/// edges are deduplicated through `edge_map`, and every interior halfedge
/// gets a twin — an intrinsic border halfedge (`face == None`) if the
/// other side has no face yet. Border halfedges are reached only across
/// `twin`; they are not linked into boundary loops.
#[derive(Debug, Clone, Default)]
pub struct HalfedgeMesh {
    vertex_count: usize,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,
    edge_map: AHashMap<(usize, usize), usize>,
}

impl HalfedgeMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self) -> usize {
        let idx = self.vertex_count;
        self.vertex_count += 1;
        idx
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Directed halfedge from `u` to `v`, if present.
    pub fn halfedge_between(&self, u: usize, v: usize) -> Option<usize> {
        self.edge_map.get(&(u, v)).copied()
    }

    /// Adds a triangle face given three vertex indices (in CCW order).
    /// Outside halfedges get `face = None` instead of a ghost face.
    /// Returns the index of the newly created face.
    pub fn add_triangle(&mut self, v0: usize, v1: usize, v2: usize) -> usize {
        let edge_vertices = [(v0, v1), (v1, v2), (v2, v0)];

        // Reserve the face slot now so the index stays stable.
        let face_idx = self.faces.len();
        self.faces.push(Face::new(usize::MAX));

        let mut edge_indices = [usize::MAX; 3];

        for (i, &(from, to)) in edge_vertices.iter().enumerate() {
            if let Some(&he_idx) = self.edge_map.get(&(from, to)) {
                // Directed edge already exists (as a border of an earlier
                // triangle). Claim whichever side is still free.
                let twin = self.half_edges[he_idx].twin;

                if self.half_edges[he_idx].face.is_none() {
                    self.half_edges[he_idx].face = Some(face_idx);
                    edge_indices[i] = he_idx;
                } else if self.half_edges[twin].face.is_none() {
                    self.half_edges[twin].face = Some(face_idx);
                    edge_indices[i] = twin;
                } else {
                    debug_assert!(
                        false,
                        "add_triangle: non-manifold edge ({},{}) — both directions already bound to faces",
                        from, to
                    );
                    edge_indices[i] = he_idx;
                }

                // Keep twin linkage symmetric.
                let t = self.half_edges[edge_indices[i]].twin;
                self.half_edges[t].twin = edge_indices[i];
            } else {
                // Brand-new interior halfedge for this triangle.
                let he_idx = self.half_edges.len();
                let mut he = HalfEdge::new(to);
                he.face = Some(face_idx);
                self.half_edges.push(he);
                self.edge_map.insert((from, to), he_idx);
                edge_indices[i] = he_idx;

                if let Some(&rev_idx) = self.edge_map.get(&(to, from)) {
                    self.half_edges[he_idx].twin = rev_idx;
                    self.half_edges[rev_idx].twin = he_idx;
                } else {
                    // Border halfedge (to -> from), face stays None.
                    let border_idx = self.half_edges.len();
                    let mut bhe = HalfEdge::new(from);
                    bhe.twin = he_idx;
                    bhe.next = border_idx;
                    bhe.prev = border_idx;
                    self.half_edges.push(bhe);
                    self.edge_map.insert((to, from), border_idx);

                    self.half_edges[he_idx].twin = border_idx;
                }
            }
        }

        // Link the triangle ring.
        let [e0, e1, e2] = edge_indices;
        self.half_edges[e0].next = e1;
        self.half_edges[e0].prev = e2;
        self.half_edges[e1].next = e2;
        self.half_edges[e1].prev = e0;
        self.half_edges[e2].next = e0;
        self.half_edges[e2].prev = e1;

        self.faces[face_idx].half_edge = e0;

        face_idx
    }
}

impl FaceGraph for HalfedgeMesh {
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn halfedge_count(&self) -> usize {
        self.half_edges.len()
    }

    fn face_halfedge(&self, f: usize) -> usize {
        self.faces[f].half_edge
    }

    fn next(&self, h: usize) -> usize {
        self.half_edges[h].next
    }

    fn opposite(&self, h: usize) -> usize {
        self.half_edges[h].twin
    }

    fn face_of(&self, h: usize) -> Option<usize> {
        self.half_edges[h].face
    }
}
