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
    adaptor::{
        ccb::{CcbHalfedgeCirculator, NoHoles},
        context::AdaptorContext,
        half_edge::Halfedge,
    },
    dual::{graph::DualGraph, predicates::DegeneracyPredicates},
};

/// One face of the adapted subdivision: the Voronoi cell of one dual-graph
/// vertex.
///
/// A face is a `(context, seed vertex)` pair; every query recomputes from
/// the dual graph, so the view never holds stale state. The default face
/// is the detached "null" face, equal only to other null faces.
#[derive(Debug)]
pub struct Face<'a, D, P> {
    ctx: Option<&'a AdaptorContext<'a, D, P>>,
    v: usize,
}

impl<'a, D, P> Clone for Face<'a, D, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, D, P> Copy for Face<'a, D, P> {}

impl<'a, D, P> Default for Face<'a, D, P> {
    fn default() -> Self {
        Self { ctx: None, v: usize::MAX }
    }
}

impl<'a, D: DualGraph, P: DegeneracyPredicates<D>> Face<'a, D, P> {
    /// Wraps dual vertex `v` as a subdivision face.
    ///
    /// Caller contract: `v` denotes a non-degenerate dual-graph vertex.
    /// Checked in debug builds only.
    pub fn new(ctx: &'a AdaptorContext<'a, D, P>, v: usize) -> Self {
        debug_assert!(
            !ctx.is_degenerate_vertex(v),
            "face seeded on degenerate dual vertex {}",
            v
        );
        Self { ctx: Some(ctx), v }
    }

    /// The detached null face.
    pub fn null() -> Self {
        Self::default()
    }

    pub fn is_null(&self) -> bool {
        self.ctx.is_none()
    }

    /// The dual-graph vertex this face is seeded on.
    pub fn dual_vertex(&self) -> usize {
        self.v
    }

    fn context(&self) -> &'a AdaptorContext<'a, D, P> {
        self.ctx.expect("operation on the null face")
    }

    /// True iff some dual neighbor of the seed vertex is the infinite
    /// element. Rescans the one-ring on every call; nothing is cached, so
    /// the answer stays correct if the dual graph is later recomputed.
    pub fn is_unbounded(&self) -> bool {
        let ctx = self.context();
        ctx.dual()
            .incident_vertices(self.v)
            .iter()
            .any(|&u| ctx.dual().is_infinite_vertex(u))
    }

    /// The face's entry halfedge: the first surviving edge around the seed
    /// vertex, mapped through the mirror operation.
    ///
    /// Panics if no edge survives the cyclic scan (inconsistent dual
    /// graph).
    pub fn halfedge(&self) -> Halfedge<'a, D, P> {
        let h = self.outer_ccb().current();
        debug_assert!(h.face() == *self, "entry halfedge does not recover its face");
        h
    }

    /// Alias of [`halfedge`](Self::halfedge); the outer CCB is the only
    /// boundary component a face has.
    pub fn halfedge_on_outer_ccb(&self) -> Halfedge<'a, D, P> {
        self.halfedge()
    }

    /// Boundary walk positioned at [`halfedge`](Self::halfedge).
    pub fn outer_ccb(&self) -> CcbHalfedgeCirculator<'a, D, P> {
        CcbHalfedgeCirculator::new(self.context(), self.v)
    }

    /// Linear scan of the outer CCB.
    pub fn is_halfedge_on_outer_ccb(&self, h: &Halfedge<'a, D, P>) -> bool {
        self.outer_ccb().any(|x| x == *h)
    }

    /// Always false: faces of this adaptor have no inner CCBs, by
    /// construction rather than by observation.
    pub fn is_halfedge_on_inner_ccb(&self, _h: &Halfedge<'a, D, P>) -> bool {
        false
    }

    /// The (always empty) hole set of the face.
    pub fn holes(&self) -> NoHoles<'a, D, P> {
        NoHoles::new()
    }

    /// Re-derives every face invariant over the full boundary: the seed is
    /// non-degenerate, and each boundary arc survives the predicates,
    /// avoids the infinite element and recovers this face. O(boundary
    /// size); meant for assertions and tests.
    pub fn is_valid(&self) -> bool {
        let Some(ctx) = self.ctx else {
            return true;
        };

        let mut valid = !ctx.is_degenerate_vertex(self.v);
        valid = valid && !ctx.is_degenerate_edge(self.halfedge().dual_edge());

        for h in self.outer_ccb() {
            valid = valid && h.face() == *self;
            valid = valid && ctx.edge_survives(h.dual_edge());
        }
        valid
    }
}

impl<'a, D, P> PartialEq for Face<'a, D, P> {
    fn eq(&self, other: &Self) -> bool {
        match (self.ctx, other.ctx) {
            (None, None) => true,
            (Some(a), Some(b)) => ptr::eq(a, b) && self.v == other.v,
            _ => false,
        }
    }
}

impl<'a, D, P> Eq for Face<'a, D, P> {}
