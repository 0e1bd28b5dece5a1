// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use atlas_font::{FontTable, Glyph};

use crate::escape::{tokens, Token};
use crate::style::TextStyle;

/// Returns the horizontal advance `text` would take up on a single row.
///
/// Follows the placement rules exactly (escape codes, spaces, tracking and kerning) but
/// produces no geometry. Line breaks are not interpreted.
pub fn measure_width(font: &FontTable, text: &str, style: &TextStyle) -> f32 {
    let size = style.size;
    let mut width = 0.0;
    let mut prev: Option<&Glyph> = None;
    for token in tokens(text) {
        let Token::Char(ch) = token else {
            continue;
        };
        let Some(glyph) = font.glyph(ch) else {
            continue;
        };
        if ch == ' ' {
            width += glyph.x_advance * size + style.tracking;
            prev = None;
            continue;
        }
        let kerning = prev.map_or(0.0, |prev| prev.kerning(ch as u32) * size);
        width += glyph.x_advance * size + style.tracking + kerning;
        prev = Some(glyph);
    }
    width
}
