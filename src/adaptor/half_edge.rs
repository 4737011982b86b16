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

use std::ptr;

use crate::{
    adaptor::{context::AdaptorContext, face::Face},
    dual::{
        graph::{DualEdge, DualGraph},
        predicates::DegeneracyPredicates,
    },
};

/// One directed boundary arc of a subdivision face.
///
/// Holds the mirror image of a surviving dual edge, chosen so that the
/// source corner of the underlying edge is the seed vertex of the
/// originating face; [`face`](Halfedge::face) recovers it without extra
/// state. The underlying edge is never degenerate and never incident to
/// the infinite element.
#[derive(Debug)]
pub struct Halfedge<'a, D, P> {
    ctx: &'a AdaptorContext<'a, D, P>,
    edge: DualEdge,
}

impl<'a, D, P> Clone for Halfedge<'a, D, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, D, P> Copy for Halfedge<'a, D, P> {}

impl<'a, D: DualGraph, P: DegeneracyPredicates<D>> Halfedge<'a, D, P> {
    pub(crate) fn new(ctx: &'a AdaptorContext<'a, D, P>, edge: DualEdge) -> Self {
        debug_assert!(
            ctx.edge_survives(edge),
            "halfedge built over a degenerate or infinite dual edge"
        );
        Self { ctx, edge }
    }

    /// The dual edge this arc was derived from.
    pub fn dual_edge(&self) -> DualEdge {
        self.edge
    }

    /// The face this arc bounds.
    pub fn face(&self) -> Face<'a, D, P> {
        Face::new(self.ctx, self.ctx.dual().edge_source(self.edge))
    }

    /// The same arc seen from the adjacent face.
    pub fn opposite(&self) -> Halfedge<'a, D, P> {
        Halfedge::new(self.ctx, self.ctx.dual().mirror(self.edge))
    }
}

impl<'a, D, P> PartialEq for Halfedge<'a, D, P> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.ctx, other.ctx) && self.edge == other.edge
    }
}

impl<'a, D, P> Eq for Halfedge<'a, D, P> {}
