// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlas font description documents.

use alloc::borrow::ToOwned;
use alloc::vec::Vec;
use core::str::FromStr;

use roxmltree::Node;

use crate::{AtlasSize, Error, FontTable, FontTableBuilder, Glyph, GlyphRect};

/// A single character record, in atlas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CharEntry {
    /// Character code.
    pub id: u32,
    /// Left edge of the bitmap in the atlas.
    pub x: f32,
    /// Top edge of the bitmap in the atlas.
    pub y: f32,
    /// Bitmap width.
    pub width: f32,
    /// Bitmap height.
    pub height: f32,
    /// Horizontal offset from the pen position.
    pub x_offset: f32,
    /// Vertical offset from the top of the line.
    pub y_offset: f32,
    /// Pen advance.
    pub x_advance: f32,
}

/// A kerning pair, in atlas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KerningEntry {
    /// Code of the leading character.
    pub first: u32,
    /// Code of the following character.
    pub second: u32,
    /// Extra advance between the two.
    pub amount: f32,
}

/// The un-normalized contents of an atlas font description.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescription {
    /// Point size the atlas was rendered at.
    pub size: f32,
    /// Distance between baselines, in pixels.
    ///
    /// `None` when the document has no `common` element. The built table then uses a line
    /// height of `1.0` as is, without normalizing it against the atlas.
    pub line_height: Option<f32>,
    /// Character records.
    pub chars: Vec<CharEntry>,
    /// Kerning pairs.
    pub kernings: Vec<KerningEntry>,
}

impl Default for FontDescription {
    fn default() -> Self {
        Self {
            size: 1.0,
            line_height: None,
            chars: Vec::new(),
            kernings: Vec::new(),
        }
    }
}

impl FontDescription {
    /// Parses the XML form of a description.
    ///
    /// The root element must be `font`. Its `info`, `common`, `chars` and `kernings` children
    /// are read; anything else is ignored.
    pub fn parse_xml(text: &str) -> Result<Self, Error> {
        let doc = roxmltree::Document::parse(text)?;
        let root = doc.root_element();
        if root.tag_name().name() != "font" {
            return Err(Error::InvalidFontDescription {
                root: root.tag_name().name().to_owned(),
            });
        }
        let mut description = Self::default();
        for child in root.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "info" => description.size = attribute(child, "info", "size")?,
                "common" => {
                    description.line_height = Some(attribute(child, "common", "lineHeight")?);
                }
                "chars" => {
                    for node in child.children().filter(Node::is_element) {
                        description.chars.push(parse_char(node)?);
                    }
                }
                "kernings" => {
                    for node in child.children().filter(Node::is_element) {
                        description.kernings.push(parse_kerning(node)?);
                    }
                }
                _ => {}
            }
        }
        Ok(description)
    }

    /// Normalizes the description against an atlas and builds the font table.
    pub fn build(&self, atlas: AtlasSize) -> Result<FontTable, Error> {
        let atlas = atlas.validate()?;
        let scale = atlas.aspect_scale();
        let (width, height) = (atlas.width as f32, atlas.height as f32);
        let h = |value: f32| value / width * scale.horizontal;
        let v = |value: f32| value / height * scale.vertical;

        let line_height = self.line_height.map_or(1.0, v);
        let mut builder = FontTableBuilder::new(self.size, line_height).scale(scale);
        for ch in &self.chars {
            let rect = GlyphRect::new(h(ch.x), v(ch.y), h(ch.width), v(ch.height));
            builder.push_glyph(
                ch.id,
                Glyph::new(rect, h(ch.x_offset), v(ch.y_offset), h(ch.x_advance)),
            );
        }
        for pair in &self.kernings {
            builder.push_kerning(pair.first, pair.second, h(pair.amount));
        }
        let table = builder.build();
        log::debug!(
            "built font table: {} glyphs, {} kerning pairs, {}x{} atlas",
            table.len(),
            table.kerning_pairs(),
            atlas.width,
            atlas.height
        );
        Ok(table)
    }
}

fn parse_char(node: Node<'_, '_>) -> Result<CharEntry, Error> {
    Ok(CharEntry {
        id: attribute(node, "char", "id")?,
        x: attribute(node, "char", "x")?,
        y: attribute(node, "char", "y")?,
        width: attribute(node, "char", "width")?,
        height: attribute(node, "char", "height")?,
        x_offset: attribute(node, "char", "xoffset")?,
        y_offset: attribute(node, "char", "yoffset")?,
        x_advance: attribute(node, "char", "xadvance")?,
    })
}

fn parse_kerning(node: Node<'_, '_>) -> Result<KerningEntry, Error> {
    Ok(KerningEntry {
        first: attribute(node, "kerning", "first")?,
        second: attribute(node, "kerning", "second")?,
        amount: attribute(node, "kerning", "amount")?,
    })
}

fn attribute<T: FromStr>(
    node: Node<'_, '_>,
    element: &'static str,
    name: &'static str,
) -> Result<T, Error> {
    node.attribute(name)
        .and_then(|value| value.trim().parse().ok())
        .ok_or(Error::InvalidAttribute {
            element,
            attribute: name,
        })
}
