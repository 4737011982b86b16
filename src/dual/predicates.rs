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

use ahash::AHashSet;

use crate::dual::graph::{DualEdge, DualGraph};

/// Marks dual-graph elements that do not correspond to genuine subdivision
/// features (e.g. collapsed edges from cocircular sites) so traversal can
/// skip them.
///
/// `is_degenerate_edge` must answer identically for an edge and its mirror:
/// both name the same undirected edge.
pub trait DegeneracyPredicates<D: DualGraph> {
    fn is_degenerate_vertex(&self, dual: &D, v: usize) -> bool;
    fn is_degenerate_edge(&self, dual: &D, e: DualEdge) -> bool;
}

/// Every element is genuine. The right choice for diagrams of sites in
/// general position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDegeneracy;

impl<D: DualGraph> DegeneracyPredicates<D> for NoDegeneracy {
    fn is_degenerate_vertex(&self, _dual: &D, _v: usize) -> bool {
        false
    }

    fn is_degenerate_edge(&self, _dual: &D, _e: DualEdge) -> bool {
        false
    }
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

/// Explicit tag sets of degenerate elements. Edges are keyed by their
/// ordered endpoint pair, so an edge and its mirror always agree.
#[derive(Debug, Clone, Default)]
pub struct TaggedDegeneracy {
    vertices: AHashSet<usize>,
    edges: AHashSet<(usize, usize)>,
}

impl TaggedDegeneracy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag_vertex(&mut self, v: usize) {
        self.vertices.insert(v);
    }

    pub fn tag_edge(&mut self, u: usize, v: usize) {
        self.edges.insert(ordered(u, v));
    }
}

impl<D: DualGraph> DegeneracyPredicates<D> for TaggedDegeneracy {
    fn is_degenerate_vertex(&self, _dual: &D, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    fn is_degenerate_edge(&self, dual: &D, e: DualEdge) -> bool {
        let key = ordered(dual.edge_source(e), dual.edge_target(e));
        self.edges.contains(&key)
    }
}
