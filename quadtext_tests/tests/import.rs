// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::error::Error as _;

use atlas_font::{Asset, AtlasSize, Error, FontDescription, FontSource};
use quadtext::layout;

use crate::util::{assert_close, cell_style, grid_font, GRID_ATLAS, GRID_XML};

#[test]
fn import_normalizes_against_atlas() {
    let font = grid_font();
    assert_eq!(font.len(), 9);
    assert_eq!(font.base_size(), 16.0);
    assert_close(font.line_height(), 0.25);
    assert_eq!(font.kerning_pairs(), 2);

    let h = font.glyph('H').unwrap();
    assert_close(h.rect.x, 0.25);
    assert_close(h.rect.width, 0.25);
    assert_close(h.x_advance, 0.25);

    let i = font.glyph('i').unwrap();
    assert_close(i.rect.y, 0.25);
    assert_close(i.x_offset, 0.0625);

    let a = font.glyph('A').unwrap();
    assert_close(a.kerning('V' as u32), -0.0625);
    assert_eq!(a.kerning('H' as u32), 0.0);
}

#[test]
fn import_lists_every_described_glyph() {
    let font = grid_font();
    let mut codes: Vec<u32> = font.glyphs().map(|(code, _)| code).collect();
    codes.sort_unstable();
    assert_eq!(codes, [32, 65, 72, 86, 101, 105, 108, 111, 119]);

    for ch in " AHVeilow".chars() {
        assert!(font.contains(ch), "{ch:?} missing");
    }
    assert!(!font.contains('Z'));
}

#[test]
fn import_wide_atlas_keeps_aspect() {
    let wide = FontSource::new(AtlasSize::new(128, 64), GRID_XML)
        .build()
        .unwrap();
    let square = grid_font();

    assert_eq!(wide.scale().horizontal, 2.0);
    assert_eq!(wide.scale().vertical, 1.0);
    // Metrics agree, only texture coordinates differ.
    let style = cell_style();
    let wide_layout = layout(Some(&wide), "Hello", &style);
    let square_layout = layout(Some(&square), "Hello", &style);
    assert_eq!(wide_layout.geometry.positions, square_layout.geometry.positions);
    assert_close(wide_layout.geometry.uvs[0].x, 0.125);
    assert_close(square_layout.geometry.uvs[0].x, 0.25);
}

#[test]
fn import_missing_assets() {
    let mut source = FontSource::default();
    assert!(matches!(
        source.build(),
        Err(Error::MissingAsset(Asset::Atlas))
    ));

    source.atlas = Some(GRID_ATLAS);
    assert!(matches!(
        source.build(),
        Err(Error::MissingAsset(Asset::Description))
    ));

    source.description = Some(GRID_XML.to_owned());
    assert!(source.build().is_ok());
}

#[test]
fn import_rejects_empty_atlas() {
    let err = FontSource::new(AtlasSize::new(0, 64), GRID_XML)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidAtlasSize {
            width: 0,
            height: 64
        }
    ));
    assert_eq!(err.to_string(), "invalid atlas size 0x64");
}

#[test]
fn import_rejects_foreign_documents() {
    let err = FontDescription::parse_xml("<glyphs/>").unwrap_err();
    assert!(matches!(&err, Error::InvalidFontDescription { root } if root == "glyphs"));

    let err = FontDescription::parse_xml("<font><chars>").unwrap_err();
    assert!(matches!(err, Error::Xml(_)));
    assert!(err.source().is_some());
}

#[test]
fn import_reports_bad_attribute() {
    let xml = r#"<font><chars><char id="65" x="0" y="0" width="a" height="1" xoffset="0" yoffset="0" xadvance="1"/></chars></font>"#;
    let err = FontDescription::parse_xml(xml).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidAttribute {
            element: "char",
            attribute: "width"
        }
    ));
}

#[test]
fn import_then_layout() {
    let font = grid_font();
    let layout = layout(Some(&font), "Hello", &cell_style());
    assert_eq!(layout.geometry.quad_count(), 5);
    assert_close(layout.width, 5.0);
    assert_close(layout.height, 1.0);
}
