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

use smallvec::SmallVec;

/// Next corner index counter-clockwise within a triangle cell.
#[inline(always)]
pub fn ccw(i: usize) -> usize {
    (i + 1) % 3
}

/// Next corner index clockwise within a triangle cell.
#[inline(always)]
pub fn cw(i: usize) -> usize {
    (i + 2) % 3
}

/// One edge of the dual graph: the edge of triangle `cell` opposite the
/// corner `index`, joining the corners `ccw(index)` and `cw(index)`.
///
/// Transient: identifies the same undirected edge as its mirror in the
/// neighboring cell, but from the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DualEdge {
    pub cell: usize,
    pub index: usize,
}

impl DualEdge {
    pub fn new(cell: usize, index: usize) -> Self {
        debug_assert!(index < 3, "dual edge index out of range: {}", index);
        Self { cell, index }
    }
}

/// Capability interface of the triangulation that plays the role of the
/// subdivision's dual graph.
///
/// Vertices are stable `usize` handles owned by the implementor. Incident
/// enumeration returns one-ring snapshots in CCW order; every edge of the
/// snapshot has the queried vertex as its target (`edge_target`). Every
/// edge must have a cell on both sides, so `mirror` is total; a
/// triangulation satisfies this by carrying cells through its infinite
/// vertex.
pub trait DualGraph {
    /// Number of edges (equivalently, neighbor vertices) around `v`.
    fn degree(&self, v: usize) -> usize {
        self.incident_vertices(v).len()
    }

    /// CCW snapshot of the neighbor vertices of `v`.
    fn incident_vertices(&self, v: usize) -> SmallVec<[usize; 8]>;

    /// CCW snapshot of the edges around `v`, each with `v` as its target.
    fn incident_edges(&self, v: usize) -> SmallVec<[DualEdge; 8]>;

    /// Vertex at corner `ccw(index)` of the edge's cell.
    fn edge_source(&self, e: DualEdge) -> usize;

    /// Vertex at corner `cw(index)` of the edge's cell.
    fn edge_target(&self, e: DualEdge) -> usize;

    fn is_infinite_vertex(&self, v: usize) -> bool;

    fn is_infinite_edge(&self, e: DualEdge) -> bool {
        self.is_infinite_vertex(self.edge_source(e))
            || self.is_infinite_vertex(self.edge_target(e))
    }

    /// The same undirected edge seen from the neighboring cell. With
    /// consistent cell orientation, `edge_source(mirror(e)) ==
    /// edge_target(e)` and vice versa.
    fn mirror(&self, e: DualEdge) -> DualEdge;
}
