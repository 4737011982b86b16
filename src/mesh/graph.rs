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

/// Capability interface of a halfedge surface mesh, as consumed by border
/// extraction. Deliberately separate from the dual-graph interface: the two
/// collaborators share nothing.
///
/// Faces and halfedges are `usize` handles. Every halfedge has an opposite;
/// a halfedge with no incident face (`face_of == None`) is an intrinsic
/// border of the mesh.
pub trait FaceGraph {
    fn face_count(&self) -> usize;

    fn halfedge_count(&self) -> usize;

    /// Entry halfedge of face `f`.
    fn face_halfedge(&self, f: usize) -> usize;

    /// Successor of `h` around its face.
    fn next(&self, h: usize) -> usize;

    fn opposite(&self, h: usize) -> usize;

    /// Incident face of `h`, or `None` on the intrinsic mesh border.
    fn face_of(&self, h: usize) -> Option<usize>;

    fn is_border(&self, h: usize) -> bool {
        self.face_of(h).is_none()
    }

    /// The halfedges bounding face `f`, starting at its entry halfedge.
    fn face_halfedges(&self, f: usize) -> FaceHalfedges<'_, Self> {
        FaceHalfedges::new(self, self.face_halfedge(f))
    }
}

/// One full loop around a face.
#[derive(Debug, Clone)]
pub struct FaceHalfedges<'a, M: ?Sized> {
    mesh: &'a M,
    start: usize,
    cur: usize,
    done: bool,
}

impl<'a, M: FaceGraph + ?Sized> FaceHalfedges<'a, M> {
    fn new(mesh: &'a M, start: usize) -> Self {
        Self {
            mesh,
            start,
            cur: start,
            done: false,
        }
    }
}

impl<'a, M: FaceGraph + ?Sized> Iterator for FaceHalfedges<'a, M> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }
        let h = self.cur;
        self.cur = self.mesh.next(h);
        if self.cur == self.start {
            self.done = true;
        }
        Some(h)
    }
}

/// Maps face handles to dense indices in `0..face_count`, enabling the
/// table-driven border extraction path.
pub trait FaceIndexMap {
    fn face_index(&self, f: usize) -> usize;
}

/// The trivial map for meshes whose face handles are already dense indices.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFaceIndex;

impl FaceIndexMap for IdentityFaceIndex {
    fn face_index(&self, f: usize) -> usize {
        f
    }
}
