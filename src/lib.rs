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

//! Combinatorial boundary structure for planar subdivisions and surface
//! mesh patches.
//!
//! Two independent primitives built on half-edge oriented graphs:
//!
//! - [`adaptor`]: views a triangulation's dual graph as a Voronoi-style
//!   subdivision, exposing faces, boundary halfedges and full cyclic
//!   boundary walks with degenerate-element skipping.
//! - [`mesh::border`]: extracts the oriented boundary of an arbitrary face
//!   subset of a half-edge surface mesh.
//!
//! Both operate read-only over externally owned graphs reached through the
//! capability traits in [`dual`] and [`mesh`].

pub mod adaptor;
pub mod dual;
pub mod mesh;
