// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

/// Rectangle of a glyph within the atlas, in aspect-corrected texture space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphRect {
    /// Left edge.
    pub x: f32,
    /// Top edge, measured downwards from the top of the atlas.
    pub y: f32,
    /// Width of the glyph bitmap.
    pub width: f32,
    /// Height of the glyph bitmap.
    pub height: f32,
}

impl GlyphRect {
    /// Creates a new rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Metrics for a single character of an atlas font.
///
/// All values are normalized against the atlas dimensions and the table's aspect factors,
/// so multiplying by a character size yields layout units directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Glyph {
    /// Source rectangle within the atlas.
    pub rect: GlyphRect,
    /// Horizontal offset from the pen position to the left edge of the bitmap.
    pub x_offset: f32,
    /// Vertical offset from the top of the line to the top edge of the bitmap.
    pub y_offset: f32,
    /// Distance the pen moves after this glyph.
    pub x_advance: f32,
    /// Extra advance applied when this glyph is followed by the keyed character code.
    kerning: HashMap<u32, f32>,
}

impl Glyph {
    /// Creates a glyph without any kerning pairs.
    pub fn new(rect: GlyphRect, x_offset: f32, y_offset: f32, x_advance: f32) -> Self {
        Self {
            rect,
            x_offset,
            y_offset,
            x_advance,
            kerning: HashMap::new(),
        }
    }

    /// Returns the kerning adjustment to apply when this glyph is followed by `next`.
    ///
    /// Returns `0.0` when the font has no pair for the two characters.
    pub fn kerning(&self, next: u32) -> f32 {
        self.kerning.get(&next).copied().unwrap_or(0.0)
    }

    /// Returns the number of kerning pairs starting with this glyph.
    pub fn kerning_pairs(&self) -> usize {
        self.kerning.len()
    }

    pub(crate) fn set_kerning(&mut self, next: u32, amount: f32) {
        self.kerning.insert(next, amount);
    }
}
