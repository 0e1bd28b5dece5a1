// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style configuration for a layout pass.

use core::hash::{Hash, Hasher};

use peniko::Color;

/// Horizontal alignment of each line.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Alignment {
    /// Lines start at the origin and grow to the right.
    #[default]
    Left,
    /// Lines are centered on the origin.
    Center,
    /// Lines end at the origin.
    Right,
}

/// How per-vertex attributes are populated for each glyph quad.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum FillMode {
    /// Every vertex gets [`CornerColors::top_left`].
    #[default]
    Solid,
    /// Top edge [`CornerColors::top_left`], bottom edge [`CornerColors::bottom_left`].
    VerticalGradient,
    /// Left edge [`CornerColors::top_left`], right edge [`CornerColors::top_right`].
    HorizontalGradient,
    /// Each corner gets its own color.
    QuadGradient,
    /// A secondary UV channel maps a whole texture onto every glyph quad.
    StretchedTexture,
    /// A secondary UV channel projects a texture continuously across the string.
    ProjectedTexture,
}

impl FillMode {
    /// Returns `true` for the modes that emit a secondary UV channel instead of colors.
    pub fn is_textured(self) -> bool {
        matches!(self, Self::StretchedTexture | Self::ProjectedTexture)
    }
}

/// The four colors used by the color fill modes.
#[derive(Copy, Clone, Debug)]
pub struct CornerColors {
    /// Top-left corner, and the only color used by [`FillMode::Solid`].
    pub top_left: Color,
    /// Top-right corner.
    pub top_right: Color,
    /// Bottom-left corner.
    pub bottom_left: Color,
    /// Bottom-right corner.
    pub bottom_right: Color,
}

impl CornerColors {
    /// All four corners set to the same color.
    pub const fn uniform(color: Color) -> Self {
        Self {
            top_left: color,
            top_right: color,
            bottom_left: color,
            bottom_right: color,
        }
    }

    /// Returns the colors for a quad's vertices in emission order (TL, TR, BR, BL).
    pub(crate) fn quad(&self, mode: FillMode) -> [Color; 4] {
        let Self {
            top_left: tl,
            top_right: tr,
            bottom_left: bl,
            bottom_right: br,
        } = *self;
        match mode {
            FillMode::VerticalGradient => [tl, tl, bl, bl],
            FillMode::HorizontalGradient => [tl, tr, tr, tl],
            FillMode::QuadGradient => [tl, tr, br, bl],
            _ => [tl; 4],
        }
    }

    fn corners(&self) -> [Color; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }
}

impl Default for CornerColors {
    fn default() -> Self {
        Self::uniform(Color::WHITE)
    }
}

impl PartialEq for CornerColors {
    fn eq(&self, other: &Self) -> bool {
        self.corners()
            .iter()
            .zip(other.corners().iter())
            .all(|(a, b)| a.components == b.components)
    }
}

impl Hash for CornerColors {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for color in self.corners() {
            for component in color.components {
                component.to_bits().hash(state);
            }
        }
    }
}

/// Style configuration for a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Character size; multiplies every normalized glyph measurement.
    pub size: f32,
    /// Extra horizontal advance after every glyph and space.
    pub tracking: f32,
    /// Extra vertical advance after every row.
    pub leading: f32,
    /// Extra vertical advance after every source line.
    pub paragraph_spacing: f32,
    /// Maximum row width before words are moved to a new row, or `0.0` to disable wrapping.
    pub wrap_width: f32,
    /// Horizontal alignment of each row.
    pub alignment: Alignment,
    /// How vertex colors or secondary UVs are produced.
    pub fill_mode: FillMode,
    /// Colors for the color fill modes.
    pub colors: CornerColors,
    /// Whether to emit a normal per vertex.
    pub generate_normals: bool,
    /// Number of material slots (submeshes) the escape codes can select from.
    pub material_count: usize,
    /// Whether to record per-character bounds for hit-testing.
    pub click_bounds: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            tracking: 0.0,
            leading: 0.0,
            paragraph_spacing: 0.0,
            wrap_width: 0.0,
            alignment: Alignment::Left,
            fill_mode: FillMode::Solid,
            colors: CornerColors::default(),
            generate_normals: true,
            material_count: 1,
            click_bounds: true,
        }
    }
}

impl TextStyle {
    /// Applies a single property.
    pub fn apply(&mut self, property: StyleProperty) {
        match property {
            StyleProperty::Size(size) => self.size = size,
            StyleProperty::Tracking(tracking) => self.tracking = tracking,
            StyleProperty::Leading(leading) => self.leading = leading,
            StyleProperty::ParagraphSpacing(spacing) => self.paragraph_spacing = spacing,
            StyleProperty::WrapWidth(width) => self.wrap_width = width,
            StyleProperty::Alignment(alignment) => self.alignment = alignment,
            StyleProperty::FillMode(mode) => self.fill_mode = mode,
            StyleProperty::Colors(colors) => self.colors = colors,
            StyleProperty::GenerateNormals(enabled) => self.generate_normals = enabled,
            StyleProperty::MaterialCount(count) => self.material_count = count,
            StyleProperty::ClickBounds(enabled) => self.click_bounds = enabled,
        }
    }

    /// Returns a copy of this style with `property` applied.
    pub fn with(mut self, property: StyleProperty) -> Self {
        self.apply(property);
        self
    }

    /// Returns `true` when the line wrapper is active.
    pub fn wraps(&self) -> bool {
        self.wrap_width > 0.0
    }

    /// Number of submeshes a pass produces. Never zero.
    pub fn submesh_count(&self) -> usize {
        self.material_count.max(1)
    }
}

impl Hash for TextStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in [
            self.size,
            self.tracking,
            self.leading,
            self.paragraph_spacing,
            self.wrap_width,
        ] {
            value.to_bits().hash(state);
        }
        self.alignment.hash(state);
        self.fill_mode.hash(state);
        self.colors.hash(state);
        self.generate_normals.hash(state);
        self.material_count.hash(state);
        self.click_bounds.hash(state);
    }
}

/// A single style property, for patching a [`TextStyle`] in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleProperty {
    /// Character size.
    Size(f32),
    /// Extra advance per glyph.
    Tracking(f32),
    /// Extra advance per row.
    Leading(f32),
    /// Extra advance per source line.
    ParagraphSpacing(f32),
    /// Wrap width, `0.0` disables wrapping.
    WrapWidth(f32),
    /// Row alignment.
    Alignment(Alignment),
    /// Vertex attribute fill mode.
    FillMode(FillMode),
    /// Corner colors.
    Colors(CornerColors),
    /// Normal generation.
    GenerateNormals(bool),
    /// Number of material slots.
    MaterialCount(usize),
    /// Hit-test bounds recording.
    ClickBounds(bool),
}
