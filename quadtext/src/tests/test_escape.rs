// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use atlas_font::{FontTable, Glyph, GlyphRect};

use crate::{layout, measure_width, StyleProperty};

use super::utils::{mono_font, unit_style};

#[test]
fn escape_selects_material() {
    let font = mono_font();
    let style = unit_style().with(StyleProperty::MaterialCount(2));
    let layout = layout(Some(&font), "\\1Hello", &style);

    assert_eq!(layout.geometry.submeshes.len(), 2);
    assert_eq!(layout.geometry.submesh(0).map(<[u32]>::len), Some(0));
    assert_eq!(layout.geometry.submesh(1).map(<[u32]>::len), Some(5 * 6));
    assert_eq!(layout.bounds.len(), 7);
    assert!(layout.bounds.get(0).is_some_and(|b| b.is_placeholder()));
    assert!(layout.bounds.get(1).is_some_and(|b| b.is_placeholder()));
    assert!(layout.bounds.get(2).is_some_and(|b| !b.is_placeholder()));
    assert_eq!(layout.width, 5.0);
}

#[test]
fn escape_switches_mid_line() {
    let font = mono_font();
    let style = unit_style().with(StyleProperty::MaterialCount(3));
    let layout = layout(Some(&font), "ab\\2cd\\0e", &style);

    assert_eq!(layout.geometry.submesh(0).map(<[u32]>::len), Some(3 * 6));
    assert_eq!(layout.geometry.submesh(1).map(<[u32]>::len), Some(0));
    assert_eq!(layout.geometry.submesh(2).map(<[u32]>::len), Some(2 * 6));
    // Material 2 starts at the third quad.
    assert_eq!(layout.geometry.submesh(2).unwrap()[0], 8);
}

#[test]
fn escape_out_of_range_is_ignored() {
    let font = mono_font();
    let style = unit_style().with(StyleProperty::MaterialCount(2));
    let layout = layout(Some(&font), "\\5AB", &style);
    assert_eq!(layout.geometry.submesh(0).map(<[u32]>::len), Some(2 * 6));
    assert_eq!(layout.geometry.submesh(1).map(<[u32]>::len), Some(0));
}

#[test]
fn escape_zero_materials_means_one() {
    let font = mono_font();
    let style = unit_style().with(StyleProperty::MaterialCount(0));
    let layout = layout(Some(&font), "AB", &style);
    assert_eq!(layout.geometry.submeshes.len(), 1);
    assert_eq!(layout.geometry.index_count(), 12);
}

#[test]
fn escape_material_carries_across_lines() {
    let font = mono_font();
    let style = unit_style().with(StyleProperty::MaterialCount(2));
    let layout = layout(Some(&font), "\\1A\nB", &style);
    assert_eq!(layout.geometry.submesh(1).map(<[u32]>::len), Some(2 * 6));
}

#[test]
fn escape_material_resets_between_passes() {
    let font = mono_font();
    let style = unit_style().with(StyleProperty::MaterialCount(2));
    let _ = layout(Some(&font), "\\1A", &style);
    let second = layout(Some(&font), "A", &style);
    assert_eq!(second.geometry.submesh(0).map(<[u32]>::len), Some(6));
}

#[test]
fn escape_codes_take_no_width() {
    let font = mono_font();
    let style = unit_style().with(StyleProperty::MaterialCount(2));
    assert_eq!(
        measure_width(&font, "\\1ab", &style),
        measure_width(&font, "ab", &style)
    );
}

#[test]
fn escape_double_backslash_renders_one() {
    let font = FontTable::builder(1.0, 1.0)
        .glyph(
            '\\' as u32,
            Glyph::new(GlyphRect::new(0.0, 0.0, 0.5, 1.0), 0.0, 0.0, 0.5),
        )
        .build();
    let style = unit_style();
    let layout = layout(Some(&font), "\\\\", &style);
    assert_eq!(layout.geometry.quad_count(), 1);
    assert_eq!(layout.width, 0.5);
    assert_eq!(layout.bounds.len(), 2);
    assert!(layout.bounds.get(0).is_some_and(|b| b.is_placeholder()));
}

#[test]
fn escape_before_letter_only_hides_backslash() {
    let font = mono_font();
    let layout = layout(Some(&font), "\\ab", &unit_style());
    assert_eq!(layout.geometry.quad_count(), 2);
    assert_eq!(layout.width, 2.0);
}
