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

use std::marker::PhantomData;

use smallvec::SmallVec;

use crate::{
    adaptor::{context::AdaptorContext, half_edge::Halfedge},
    dual::{
        graph::{DualEdge, DualGraph},
        predicates::DegeneracyPredicates,
    },
};

/// Walk over the single connected boundary component (CCB) of a face.
///
/// The walk is a projection of the cyclic edge ring around the face's seed
/// vertex: each surviving dual edge, mapped through the mirror operation,
/// is one boundary arc. Iteration yields exactly one full cycle starting
/// at the face's entry halfedge; [`restart`](Self::restart) rewinds for
/// another pass.
#[derive(Debug)]
pub struct CcbHalfedgeCirculator<'a, D, P> {
    ctx: &'a AdaptorContext<'a, D, P>,
    ring: SmallVec<[DualEdge; 8]>,
    start: usize,
    pos: usize,
    done: bool,
}

impl<'a, D, P> Clone for CcbHalfedgeCirculator<'a, D, P> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx,
            ring: self.ring.clone(),
            start: self.start,
            pos: self.pos,
            done: self.done,
        }
    }
}

impl<'a, D: DualGraph, P: DegeneracyPredicates<D>> CcbHalfedgeCirculator<'a, D, P> {
    /// Positions the walk at the first surviving edge around `v`.
    ///
    /// Panics if the scan exhausts the full cycle without finding one: a
    /// non-degenerate face with no boundary is a consistency violation of
    /// the dual graph, not a recoverable condition.
    pub(crate) fn new(ctx: &'a AdaptorContext<'a, D, P>, v: usize) -> Self {
        let ring = ctx.dual().incident_edges(v);
        let start = ring
            .iter()
            .position(|&e| ctx.edge_survives(e))
            .unwrap_or_else(|| {
                panic!(
                    "every dual edge around vertex {} is degenerate or infinite; \
                     the dual graph is inconsistent",
                    v
                )
            });
        Self {
            ctx,
            ring,
            start,
            pos: start,
            done: false,
        }
    }

    /// The halfedge the walk is currently positioned at.
    pub fn current(&self) -> Halfedge<'a, D, P> {
        let e = self.ring[self.pos];
        Halfedge::new(self.ctx, self.ctx.dual().mirror(e))
    }

    /// Rewinds to the entry halfedge.
    pub fn restart(&mut self) {
        self.pos = self.start;
        self.done = false;
    }

    fn next_surviving(&self, from: usize) -> usize {
        let n = self.ring.len();
        let mut s = (from + 1) % n;
        // Terminates: at least the start slot survives.
        while !self.ctx.edge_survives(self.ring[s]) {
            debug_assert!(s != from, "surviving edge vanished mid-walk");
            s = (s + 1) % n;
        }
        s
    }
}

impl<'a, D: DualGraph, P: DegeneracyPredicates<D>> Iterator for CcbHalfedgeCirculator<'a, D, P> {
    type Item = Halfedge<'a, D, P>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let h = self.current();
        self.pos = self.next_surviving(self.pos);
        if self.pos == self.start {
            self.done = true;
        }
        Some(h)
    }
}

/// Typed "no holes" sentinel: the hole iterator of a face.
///
/// Faces derived from a triangulation's dual graph never carry inner
/// boundary components, so this iterator is empty by construction. It is a
/// plain value; no shared state backs it.
#[derive(Debug)]
pub struct NoHoles<'a, D, P>(PhantomData<&'a AdaptorContext<'a, D, P>>);

impl<'a, D, P> NoHoles<'a, D, P> {
    pub(crate) fn new() -> Self {
        Self(PhantomData)
    }
}

impl<'a, D, P> Clone for NoHoles<'a, D, P> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<'a, D, P> Copy for NoHoles<'a, D, P> {}

impl<'a, D, P> Default for NoHoles<'a, D, P> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<'a, D: DualGraph, P: DegeneracyPredicates<D>> Iterator for NoHoles<'a, D, P> {
    type Item = CcbHalfedgeCirculator<'a, D, P>;

    fn next(&mut self) -> Option<Self::Item> {
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<'a, D: DualGraph, P: DegeneracyPredicates<D>> ExactSizeIterator for NoHoles<'a, D, P> {}
