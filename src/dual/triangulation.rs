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
use smallvec::SmallVec;

use crate::dual::graph::{DualEdge, DualGraph, ccw, cw};

#[derive(Debug, Clone)]
struct Cell {
    vertices: [usize; 3],
    neighbors: [usize; 3],
}

/// Neighbor-linked triangle store: a concrete [`DualGraph`] over plain
/// index handles.
///
/// The store models a complete triangulation: every edge has a cell on both
/// sides. Planar inputs achieve this by triangulating the outer region
/// through a designated infinite vertex. Cells must be consistently
/// oriented, i.e. each undirected edge is traversed in opposite directions
/// by its two incident cells.
#[derive(Debug, Clone)]
pub struct TriangulationStore {
    cells: Vec<Cell>,
    /// One incident cell per vertex, the rotation anchor.
    vertex_cell: Vec<usize>,
    infinite_vertex: usize,
}

impl TriangulationStore {
    /// Builds the store from a cell list, deriving neighbor links by
    /// matching each directed edge with its reverse in the adjacent cell.
    ///
    /// `vertex_count` includes the infinite vertex. Panics if a directed
    /// edge occurs twice (non-manifold or flipped cell) or if an edge has
    /// no matching reverse (incomplete triangulation).
    pub fn from_cells(
        vertex_count: usize,
        infinite_vertex: usize,
        cells: &[[usize; 3]],
    ) -> Self {
        debug_assert!(infinite_vertex < vertex_count);

        // Directed edge (source, target) -> owning cell. Edge i of a cell
        // runs ccw(i) -> cw(i) along the cell boundary.
        let mut directed: AHashMap<(usize, usize), usize> = AHashMap::new();
        for (ci, cell) in cells.iter().enumerate() {
            for i in 0..3 {
                let s = cell[ccw(i)];
                let t = cell[cw(i)];
                let prior = directed.insert((s, t), ci);
                assert!(
                    prior.is_none(),
                    "directed edge ({}, {}) occurs in two cells; cells are not consistently oriented",
                    s,
                    t
                );
            }
        }

        let mut built = Vec::with_capacity(cells.len());
        let mut vertex_cell = vec![usize::MAX; vertex_count];
        for (ci, cell) in cells.iter().enumerate() {
            let mut neighbors = [usize::MAX; 3];
            for i in 0..3 {
                let s = cell[ccw(i)];
                let t = cell[cw(i)];
                neighbors[i] = *directed
                    .get(&(t, s))
                    .expect("edge without a cell on the other side; triangulation is incomplete");
            }
            for &v in cell {
                debug_assert!(v < vertex_count, "cell vertex {} out of range", v);
                if vertex_cell[v] == usize::MAX {
                    vertex_cell[v] = ci;
                }
            }
            built.push(Cell {
                vertices: *cell,
                neighbors,
            });
        }

        Self {
            cells: built,
            vertex_cell,
            infinite_vertex,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_cell.len()
    }

    pub fn infinite_vertex(&self) -> usize {
        self.infinite_vertex
    }

    pub fn cell_vertices(&self, c: usize) -> [usize; 3] {
        self.cells[c].vertices
    }

    fn corner_of(&self, c: usize, v: usize) -> usize {
        self.cells[c]
            .vertices
            .iter()
            .position(|&w| w == v)
            .expect("rotation anchor cell does not contain its vertex")
    }

    /// Visits the cells around `v`, yielding the corner of `v` in each.
    fn rotate<F: FnMut(usize, usize)>(&self, v: usize, mut visit: F) {
        let start = self.vertex_cell[v];
        assert!(start != usize::MAX, "vertex {} has no incident cell", v);

        let mut c = start;
        let mut steps = 0usize;
        loop {
            let a = self.corner_of(c, v);
            visit(c, a);

            // Cross the edge of `c` incident to `v` on the ccw side.
            c = self.cells[c].neighbors[ccw(a)];

            steps += 1;
            assert!(
                steps <= self.cells.len(),
                "rotation around vertex {} did not close; neighbor links are broken",
                v
            );
            if c == start {
                break;
            }
        }
    }
}

impl DualGraph for TriangulationStore {
    fn incident_vertices(&self, v: usize) -> SmallVec<[usize; 8]> {
        let mut ring = SmallVec::new();
        self.rotate(v, |c, a| ring.push(self.cells[c].vertices[cw(a)]));
        ring
    }

    fn incident_edges(&self, v: usize) -> SmallVec<[DualEdge; 8]> {
        let mut ring = SmallVec::new();
        // Edge ccw(a) joins corners cw(ccw(a)) = a and ccw(ccw(a)) = cw(a),
        // so `v` is its target.
        self.rotate(v, |c, a| ring.push(DualEdge::new(c, ccw(a))));
        ring
    }

    fn edge_source(&self, e: DualEdge) -> usize {
        self.cells[e.cell].vertices[ccw(e.index)]
    }

    fn edge_target(&self, e: DualEdge) -> usize {
        self.cells[e.cell].vertices[cw(e.index)]
    }

    fn is_infinite_vertex(&self, v: usize) -> bool {
        v == self.infinite_vertex
    }

    fn mirror(&self, e: DualEdge) -> DualEdge {
        let n = self.cells[e.cell].neighbors[e.index];
        let s = self.edge_source(e);
        let t = self.edge_target(e);
        // The mirrored edge sits opposite the corner of `n` that is not an
        // endpoint of the shared edge.
        let j = (0..3)
            .find(|&j| {
                let w = self.cells[n].vertices[j];
                w != s && w != t
            })
            .expect("neighbor cell does not share the mirrored edge");
        DualEdge::new(n, j)
    }
}
