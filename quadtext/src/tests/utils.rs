// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use atlas_font::{FontTable, Glyph, GlyphRect};

use crate::TextStyle;

/// Kerning between `A` and `V`, in font units.
pub(crate) const AV_KERNING: f32 = -0.25;

/// A monospaced font where every glyph is a unit square advancing by one.
///
/// Covers ASCII letters, digits, the space and `-`. The space has an empty bitmap.
pub(crate) fn mono_font() -> FontTable {
    let mut builder = FontTable::builder(1.0, 1.0);
    for (i, ch) in ('a'..='z').chain('A'..='Z').chain('0'..='9').chain(['-']).enumerate() {
        let column = (i % 8) as f32;
        let row = (i / 8) as f32;
        let rect = GlyphRect::new(column * 0.125, row * 0.125, 0.125, 0.125);
        builder = builder.glyph(ch as u32, Glyph::new(rect, 0.0, 0.0, 1.0));
    }
    builder
        .glyph(
            ' ' as u32,
            Glyph::new(GlyphRect::new(0.0, 0.0, 0.0, 0.0), 0.0, 0.0, 1.0),
        )
        .kerning('A' as u32, 'V' as u32, AV_KERNING)
        .build()
}

/// A font whose glyph quads are exactly one unit in size, for checking positions.
pub(crate) fn square_font() -> FontTable {
    FontTable::builder(1.0, 1.0)
        .glyph(
            'A' as u32,
            Glyph::new(GlyphRect::new(0.0, 0.0, 1.0, 1.0), 0.0, 0.0, 1.0),
        )
        .glyph(
            'B' as u32,
            Glyph::new(GlyphRect::new(0.0, 0.0, 1.0, 1.0), 0.0, 0.0, 1.0),
        )
        .glyph(
            ' ' as u32,
            Glyph::new(GlyphRect::new(0.0, 0.0, 0.0, 0.0), 0.0, 0.0, 1.0),
        )
        .build()
}

/// The default style at unit size.
pub(crate) fn unit_style() -> TextStyle {
    TextStyle {
        size: 1.0,
        ..TextStyle::default()
    }
}

pub(crate) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}
