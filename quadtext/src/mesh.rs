// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-agnostic triangle mesh output.

use alloc::vec;
use alloc::vec::Vec;

use glam::{Vec2, Vec3};
use peniko::Color;

/// Vertices per glyph quad.
pub const QUAD_VERTICES: usize = 4;
/// Indices per glyph quad (two triangles).
pub const QUAD_INDICES: usize = 6;

/// Triangle mesh produced by a layout pass.
///
/// Each rendered glyph contributes four vertices in the order top-left, top-right,
/// bottom-right, bottom-left and two triangles `(0, 1, 2)` and `(0, 2, 3)` appended to the
/// index list of the material slot active when the glyph was placed.
#[derive(Clone, Default, Debug)]
pub struct GeometryBuffer {
    /// Vertex positions, Y up.
    pub positions: Vec<Vec3>,
    /// Atlas texture coordinates, parallel to `positions`.
    pub uvs: Vec<Vec2>,
    /// Secondary texture coordinates, present for textured fill modes only.
    pub uvs2: Option<Vec<Vec2>>,
    /// Vertex colors, present for color fill modes only.
    pub colors: Option<Vec<Color>>,
    /// Vertex normals, present when normal generation is enabled.
    pub normals: Option<Vec<Vec3>>,
    /// One index list per material slot.
    pub submeshes: Vec<Vec<u32>>,
}

impl GeometryBuffer {
    pub(crate) fn new(submesh_count: usize, textured: bool) -> Self {
        Self {
            positions: Vec::new(),
            uvs: Vec::new(),
            uvs2: textured.then(Vec::new),
            colors: (!textured).then(Vec::new),
            normals: None,
            submeshes: vec![Vec::new(); submesh_count],
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of glyph quads.
    pub fn quad_count(&self) -> usize {
        self.positions.len() / QUAD_VERTICES
    }

    /// Returns the total number of indices across all submeshes.
    pub fn index_count(&self) -> usize {
        self.submeshes.iter().map(Vec::len).sum()
    }

    /// Returns the index list of one material slot.
    pub fn submesh(&self, material: usize) -> Option<&[u32]> {
        self.submeshes.get(material).map(Vec::as_slice)
    }

    /// Returns `true` if no glyph was emitted.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the axis-aligned bounds of all vertex positions as `(min, max)`.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
        )
    }

    /// Appends one quad's vertices and returns the index of its first vertex.
    pub(crate) fn push_quad(&mut self, positions: [Vec3; 4], uvs: [Vec2; 4]) -> usize {
        let first = self.positions.len();
        self.positions.extend(positions);
        self.uvs.extend(uvs);
        first
    }

    pub(crate) fn push_colors(&mut self, colors: [Color; 4]) {
        if let Some(out) = &mut self.colors {
            out.extend(colors);
        }
    }

    pub(crate) fn push_uvs2(&mut self, uvs: [Vec2; 4]) {
        if let Some(out) = &mut self.uvs2 {
            out.extend(uvs);
        }
    }

    pub(crate) fn push_triangles(&mut self, material: usize, first: usize) {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "meshes beyond u32::MAX vertices are not supported by any renderer"
        )]
        let first = first as u32;
        let indices: [u32; QUAD_INDICES] =
            [first, first + 1, first + 2, first, first + 2, first + 3];
        self.submeshes[material].extend(indices);
    }

    /// Shifts the x coordinate of every vertex of the quads starting at `quads`.
    pub(crate) fn offset_quads_x(&mut self, quads: &[usize], dx: f32) {
        for &first in quads {
            for position in &mut self.positions[first..first + QUAD_VERTICES] {
                position.x += dx;
            }
        }
    }

    pub(crate) fn finish(&mut self, generate_normals: bool) {
        if generate_normals {
            self.normals = Some(vec![Vec3::NEG_Z; self.positions.len()]);
        }
    }
}
