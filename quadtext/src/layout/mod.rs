// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph placement.

mod alignment;
mod measure;
pub(crate) mod wrap;

use atlas_font::{FontTable, Glyph};
use glam::{Vec2, Vec3};

use crate::bounds::{GlyphBounds, GlyphBoundsTable};
use crate::escape::{tokens, Token};
use crate::mesh::GeometryBuffer;
use crate::style::{FillMode, TextStyle};

use self::alignment::{row_offset, PendingRow};

pub use measure::measure_width;
pub use wrap::wrapped_text;

/// Output of a layout pass.
#[derive(Clone, Default, Debug)]
pub struct TextLayout {
    /// The triangle mesh.
    pub geometry: GeometryBuffer,
    /// Hit-test boxes, one per input character.
    pub bounds: GlyphBoundsTable,
    /// Widest row.
    pub width: f32,
    /// Distance from the top of the first row to the bottom of the last.
    pub height: f32,
    /// Number of rows, counting wrapped sub-lines.
    pub rows: usize,
}

impl TextLayout {
    /// Returns `true` if the pass emitted no glyphs.
    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
    }
}

/// Lays out `text` with `font` and `style`.
///
/// Lines are split at `\n` and `\r\n`. Without a font nothing is produced. Text that is empty
/// or only whitespace produces no geometry and zero extents, but still records one placeholder
/// bounds entry per character.
pub fn layout(font: Option<&FontTable>, text: &str, style: &TextStyle) -> TextLayout {
    let Some(font) = font else {
        return TextLayout::default();
    };
    let mut pass = LayoutPass::new(font, style);
    if text.trim().is_empty() {
        for _ in text.chars() {
            pass.placeholder();
        }
        return pass.finish();
    }
    for (line, terminator) in lines(text) {
        if style.wraps() {
            pass.wrapped_line(line);
        } else {
            pass.line(line);
        }
        for _ in 0..terminator {
            pass.placeholder();
        }
    }
    let layout = pass.finish();
    log::trace!(
        "laid out {} quads in {} rows ({} x {})",
        layout.geometry.quad_count(),
        layout.rows,
        layout.width,
        layout.height
    );
    layout
}

/// Splits text into lines, yielding each line with the number of characters in its
/// terminator (`0` for the last line, `1` for `\n`, `2` for `\r\n`).
pub(crate) fn lines(text: &str) -> impl Iterator<Item = (&str, usize)> + '_ {
    let mut rest = Some(text);
    core::iter::from_fn(move || {
        let current = rest?;
        match current.find('\n') {
            Some(end) => {
                rest = Some(&current[end + 1..]);
                let line = &current[..end];
                Some(match line.strip_suffix('\r') {
                    Some(line) => (line, 2),
                    None => (line, 1),
                })
            }
            None => {
                rest = None;
                Some((current, 0))
            }
        }
    })
}

struct LayoutPass<'a> {
    font: &'a FontTable,
    style: &'a TextStyle,
    material: usize,
    geometry: GeometryBuffer,
    bounds: GlyphBoundsTable,
    row: PendingRow,
    /// Top of the current row, growing downwards.
    y: f32,
    last_row_y: Option<f32>,
    rows: usize,
    width: f32,
}

impl<'a> LayoutPass<'a> {
    fn new(font: &'a FontTable, style: &'a TextStyle) -> Self {
        Self {
            font,
            style,
            material: 0,
            geometry: GeometryBuffer::new(style.submesh_count(), style.fill_mode.is_textured()),
            bounds: GlyphBoundsTable::default(),
            row: PendingRow::default(),
            y: 0.0,
            last_row_y: None,
            rows: 0,
            width: 0.0,
        }
    }

    fn line_advance(&self) -> f32 {
        self.font.line_height() * self.style.size
    }

    /// Places an unwrapped line, aligned up front from its measured width.
    fn line(&mut self, line: &str) {
        let line_width = measure_width(self.font, line, self.style);
        let start = row_offset(self.style.alignment, line_width);
        let end = self.place(line, start);
        self.width = self.width.max(end - start);
        self.row.clear();
        self.end_row(true);
    }

    /// Places a line word by word, starting a new row whenever the next word would cross
    /// the wrap width. A word wider than the wrap width gets a row of its own.
    fn wrapped_line(&mut self, line: &str) {
        let mut x = 0.0;
        let mut row_started = false;
        for segment in wrap::segments(line, self.style.alignment) {
            let width = measure_width(self.font, segment, self.style);
            if row_started && x + width > self.style.wrap_width {
                self.flush_row(x);
                self.end_row(false);
                x = 0.0;
            }
            x = self.place(segment, x);
            row_started = true;
        }
        self.flush_row(x);
        self.end_row(true);
    }

    fn flush_row(&mut self, width: f32) {
        self.width = self.width.max(width);
        self.row.flush(
            self.style.alignment,
            width,
            &mut self.geometry,
            &mut self.bounds,
        );
    }

    fn end_row(&mut self, paragraph: bool) {
        self.last_row_y = Some(self.y);
        self.rows += 1;
        self.y += self.line_advance() + self.style.leading;
        if paragraph {
            self.y += self.style.paragraph_spacing;
        }
    }

    /// Places a run of text on the current row starting at `x` and returns the pen position
    /// after its last character.
    fn place(&mut self, text: &str, mut x: f32) -> f32 {
        let font = self.font;
        let size = self.style.size;
        let tracking = self.style.tracking;
        let mut prev: Option<&Glyph> = None;
        for token in tokens(text) {
            let ch = match token {
                Token::Char(ch) => ch,
                Token::Escape => {
                    self.placeholder();
                    continue;
                }
                Token::SelectMaterial(material) => {
                    self.select_material(material);
                    self.placeholder();
                    continue;
                }
            };
            let Some(glyph) = font.glyph(ch) else {
                self.placeholder();
                continue;
            };
            if ch == ' ' {
                self.placeholder();
                x += glyph.x_advance * size + tracking;
                prev = None;
                continue;
            }
            let kerning = prev.map_or(0.0, |prev| prev.kerning(ch as u32) * size);
            self.glyph(glyph, x + kerning);
            x += glyph.x_advance * size + tracking + kerning;
            prev = Some(glyph);
        }
        x
    }

    fn select_material(&mut self, material: u8) {
        let material = usize::from(material);
        let count = self.style.submesh_count();
        if material < count {
            self.material = material;
        } else {
            log::warn!("requested material {material} out of range, {count} configured");
        }
    }

    fn placeholder(&mut self) {
        if self.style.click_bounds {
            self.bounds.push_placeholder();
        }
    }

    /// Emits the quad for `glyph` with its pen position at `x`.
    fn glyph(&mut self, glyph: &Glyph, x: f32) {
        let size = self.style.size;
        let rect = glyph.rect;
        let left = x + glyph.x_offset * size;
        let top = self.y + glyph.y_offset * size;
        let width = rect.width * size;
        let height = rect.height * size;

        // Layout space grows downwards, render space upwards.
        let positions = [
            Vec3::new(left, -top, 0.0),
            Vec3::new(left + width, -top, 0.0),
            Vec3::new(left + width, -top - height, 0.0),
            Vec3::new(left, -top - height, 0.0),
        ];
        let scale = self.font.scale();
        let u0 = rect.x / scale.horizontal;
        let u1 = (rect.x + rect.width) / scale.horizontal;
        let v0 = 1.0 - rect.y / scale.vertical;
        let v1 = 1.0 - (rect.y + rect.height) / scale.vertical;
        let uvs = [
            Vec2::new(u0, v0),
            Vec2::new(u1, v0),
            Vec2::new(u1, v1),
            Vec2::new(u0, v1),
        ];

        let first = self.geometry.push_quad(positions, uvs);
        match self.style.fill_mode {
            FillMode::StretchedTexture => self.geometry.push_uvs2([
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 0.0),
            ]),
            FillMode::ProjectedTexture => {
                let line_height = self.font.line_height();
                let h = rect.height / line_height;
                let w = rect.width / line_height;
                let (xo, yo) = (glyph.x_offset, glyph.y_offset);
                self.geometry.push_uvs2([
                    Vec2::new(xo, h - yo),
                    Vec2::new(w - xo, h - yo),
                    Vec2::new(w - xo, yo),
                    Vec2::new(xo, yo),
                ]);
            }
            mode => self.geometry.push_colors(self.style.colors.quad(mode)),
        }
        self.geometry.push_triangles(self.material, first);
        self.row.push_quad(first);

        if self.style.click_bounds {
            // Boxes span the advance, not the bitmap.
            let advance = glyph.x_advance * size;
            let bottom = -top - height;
            let index = self.bounds.push(GlyphBounds::new(
                Vec3::new(left + advance * 0.5, bottom + height * 0.5, 0.0),
                Vec3::new(advance, height, height),
            ));
            self.row.push_bounds(index);
        }
    }

    fn finish(mut self) -> TextLayout {
        self.geometry.finish(self.style.generate_normals);
        let height = self
            .last_row_y
            .map_or(0.0, |y| y + self.line_advance());
        TextLayout {
            geometry: self.geometry,
            bounds: self.bounds,
            width: self.width,
            height,
            rows: self.rows,
        }
    }
}
