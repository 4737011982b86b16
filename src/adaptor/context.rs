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

use crate::{
    adaptor::face::Face,
    dual::{
        graph::{DualEdge, DualGraph},
        predicates::DegeneracyPredicates,
    },
};

/// Shared state of one adapted subdivision: the dual graph plus the two
/// degeneracy predicates.
///
/// Faces, halfedges and boundary walks borrow the context; the borrow
/// checker enforces that it outlives every view derived from it. The
/// context never mutates the dual graph.
#[derive(Debug)]
pub struct AdaptorContext<'d, D, P> {
    dual: &'d D,
    predicates: P,
}

impl<'d, D: DualGraph, P: DegeneracyPredicates<D>> AdaptorContext<'d, D, P> {
    pub fn new(dual: &'d D, predicates: P) -> Self {
        Self { dual, predicates }
    }

    pub fn dual(&self) -> &D {
        self.dual
    }

    pub fn is_degenerate_vertex(&self, v: usize) -> bool {
        self.predicates.is_degenerate_vertex(self.dual, v)
    }

    pub fn is_degenerate_edge(&self, e: DualEdge) -> bool {
        self.predicates.is_degenerate_edge(self.dual, e)
    }

    /// An edge survives if it is neither degenerate nor incident to the
    /// infinite element; only survivors become subdivision halfedges.
    pub(crate) fn edge_survives(&self, e: DualEdge) -> bool {
        !self.is_degenerate_edge(e) && !self.dual.is_infinite_edge(e)
    }

    /// The subdivision face seeded by dual vertex `v`.
    pub fn face(&self, v: usize) -> Face<'_, D, P> {
        Face::new(self, v)
    }
}
