// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::bounds::GlyphBoundsTable;
use crate::mesh::GeometryBuffer;
use crate::style::Alignment;

/// Horizontal shift that aligns a row of `width` laid out from zero.
pub(crate) fn row_offset(alignment: Alignment, width: f32) -> f32 {
    match alignment {
        Alignment::Left => 0.0,
        Alignment::Center => -width * 0.5,
        Alignment::Right => -width,
    }
}

/// Quads and click boxes placed on the current row and not yet aligned.
///
/// When wrapping, a row's final width is only known once the wrapper decides to start the
/// next one, so alignment is applied to everything recorded here at that point.
#[derive(Default, Debug)]
pub(crate) struct PendingRow {
    quads: SmallVec<[usize; 32]>,
    bounds: SmallVec<[usize; 32]>,
}

impl PendingRow {
    pub(crate) fn push_quad(&mut self, first_vertex: usize) {
        self.quads.push(first_vertex);
    }

    pub(crate) fn push_bounds(&mut self, index: usize) {
        self.bounds.push(index);
    }

    /// Shifts everything on the row by the alignment offset and clears it.
    pub(crate) fn flush(
        &mut self,
        alignment: Alignment,
        width: f32,
        geometry: &mut GeometryBuffer,
        bounds: &mut GlyphBoundsTable,
    ) {
        let dx = row_offset(alignment, width);
        if dx != 0.0 {
            geometry.offset_quads_x(&self.quads, dx);
            for &index in &self.bounds {
                bounds.entry_mut(index).offset_x(dx);
            }
        }
        self.clear();
    }

    /// Forgets the row without moving anything, for rows aligned before placement.
    pub(crate) fn clear(&mut self) {
        self.quads.clear();
        self.bounds.clear();
    }
}
