// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::{Error, Glyph};

/// Pixel dimensions of an atlas texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AtlasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl AtlasSize {
    /// Creates a new atlas size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the aspect correction for this atlas.
    ///
    /// The longer side is scaled up relative to the shorter one, so that normalized
    /// coordinates keep the texture's pixel aspect ratio.
    pub fn aspect_scale(self) -> AspectScale {
        let (width, height) = (self.width as f32, self.height as f32);
        if self.width > self.height {
            AspectScale {
                horizontal: width / height,
                vertical: 1.0,
            }
        } else if self.height > self.width {
            AspectScale {
                horizontal: 1.0,
                vertical: height / width,
            }
        } else {
            AspectScale::IDENTITY
        }
    }

    pub(crate) fn validate(self) -> Result<Self, Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidAtlasSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Horizontal and vertical aspect correction factors of an atlas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectScale {
    /// Factor applied to horizontal measurements.
    pub horizontal: f32,
    /// Factor applied to vertical measurements.
    pub vertical: f32,
}

impl AspectScale {
    /// No correction, used for square atlases.
    pub const IDENTITY: Self = Self {
        horizontal: 1.0,
        vertical: 1.0,
    };
}

impl Default for AspectScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Immutable glyph metrics and kerning for one atlas font.
#[derive(Clone, Debug, PartialEq)]
pub struct FontTable {
    glyphs: HashMap<u32, Glyph>,
    base_size: f32,
    line_height: f32,
    scale: AspectScale,
    kerning_pairs: usize,
}

impl FontTable {
    /// Returns a builder for a table with the given base size and normalized line height.
    pub fn builder(base_size: f32, line_height: f32) -> FontTableBuilder {
        FontTableBuilder::new(base_size, line_height)
    }

    /// Returns the glyph for a character code.
    pub fn get(&self, code: u32) -> Option<&Glyph> {
        self.glyphs.get(&code)
    }

    /// Returns the glyph for a character.
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.get(ch as u32)
    }

    /// Returns `true` if the font has a glyph for `ch`.
    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&(ch as u32))
    }

    /// Returns an iterator over all character codes and their glyphs, in no particular order.
    pub fn glyphs(&self) -> impl Iterator<Item = (u32, &Glyph)> + '_ {
        self.glyphs.iter().map(|(code, glyph)| (*code, glyph))
    }

    /// Returns the number of glyphs in the table.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns `true` if the table holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Returns the point size the atlas was rendered at.
    pub fn base_size(&self) -> f32 {
        self.base_size
    }

    /// Returns the normalized distance between two baselines.
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Returns the aspect correction applied to every measurement in this table.
    pub fn scale(&self) -> AspectScale {
        self.scale
    }

    /// Returns the number of kerning pairs that were loaded.
    pub fn kerning_pairs(&self) -> usize {
        self.kerning_pairs
    }
}

/// Builder for a [`FontTable`].
///
/// Values passed to the builder are stored as-is: callers providing pixel data should go
/// through [`FontDescription::build`](crate::FontDescription::build) instead, which normalizes
/// before inserting.
#[derive(Clone, Debug)]
pub struct FontTableBuilder {
    table: FontTable,
}

impl FontTableBuilder {
    /// Creates a builder for a table with the given base size and normalized line height.
    pub fn new(base_size: f32, line_height: f32) -> Self {
        Self {
            table: FontTable {
                glyphs: HashMap::new(),
                base_size,
                line_height,
                scale: AspectScale::IDENTITY,
                kerning_pairs: 0,
            },
        }
    }

    /// Sets the aspect correction the glyph values were scaled by.
    pub fn scale(mut self, scale: AspectScale) -> Self {
        self.table.scale = scale;
        self
    }

    /// Adds or replaces the glyph for a character code.
    pub fn glyph(mut self, code: u32, glyph: Glyph) -> Self {
        self.push_glyph(code, glyph);
        self
    }

    /// Adds a kerning pair. Pairs whose first character has no glyph are dropped.
    pub fn kerning(mut self, first: u32, second: u32, amount: f32) -> Self {
        self.push_kerning(first, second, amount);
        self
    }

    pub(crate) fn push_glyph(&mut self, code: u32, glyph: Glyph) {
        self.table.glyphs.insert(code, glyph);
    }

    pub(crate) fn push_kerning(&mut self, first: u32, second: u32, amount: f32) {
        match self.table.glyphs.get_mut(&first) {
            Some(glyph) => {
                glyph.set_kerning(second, amount);
                self.table.kerning_pairs += 1;
            }
            None => log::warn!("kerning pair ({first}, {second}) refers to a missing glyph"),
        }
    }

    /// Finishes the table.
    pub fn build(self) -> FontTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::{AspectScale, AtlasSize, FontTable};
    use crate::{Glyph, GlyphRect};

    #[test]
    fn wide_atlas_scales_horizontally() {
        let scale = AtlasSize::new(512, 256).aspect_scale();
        assert_eq!(scale.horizontal, 2.0);
        assert_eq!(scale.vertical, 1.0);
    }

    #[test]
    fn tall_atlas_scales_vertically() {
        let scale = AtlasSize::new(256, 1024).aspect_scale();
        assert_eq!(scale.horizontal, 1.0);
        assert_eq!(scale.vertical, 4.0);
    }

    #[test]
    fn square_atlas_is_identity() {
        assert_eq!(AtlasSize::new(64, 64).aspect_scale(), AspectScale::IDENTITY);
    }

    #[test]
    fn zero_sized_atlas_is_rejected() {
        assert!(AtlasSize::new(0, 64).validate().is_err());
        assert!(AtlasSize::new(64, 0).validate().is_err());
    }

    #[test]
    fn glyph_lookup_and_iteration_agree() {
        let rect = GlyphRect::new(0.0, 0.0, 0.5, 0.5);
        let table = FontTable::builder(16.0, 1.0)
            .glyph('a' as u32, Glyph::new(rect, 0.0, 0.0, 0.5))
            .glyph('b' as u32, Glyph::new(rect, 0.0, 0.0, 0.75))
            .glyph('a' as u32, Glyph::new(rect, 0.0, 0.0, 0.25))
            .build();

        assert!(table.contains('a'));
        assert!(table.contains('b'));
        assert!(!table.contains('c'));

        let mut glyphs: Vec<_> = table
            .glyphs()
            .map(|(code, glyph)| (code, glyph.x_advance))
            .collect();
        glyphs.sort_by_key(|(code, _)| *code);
        // Re-adding a code replaces its glyph.
        assert_eq!(glyphs, [('a' as u32, 0.25), ('b' as u32, 0.75)]);
        assert_eq!(glyphs.len(), table.len());
    }

    #[test]
    fn orphaned_kerning_is_dropped() {
        let table = FontTable::builder(16.0, 1.0)
            .glyph(65, Glyph::new(GlyphRect::default(), 0.0, 0.0, 1.0))
            .kerning(65, 86, -0.1)
            .kerning(90, 65, -0.2)
            .build();

        assert_eq!(table.kerning_pairs(), 1);
        assert_eq!(table.get(65).unwrap().kerning(86), -0.1);
        assert!(table.get(90).is_none());
    }
}
