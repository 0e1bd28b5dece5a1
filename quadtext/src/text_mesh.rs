// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained text block that rebuilds its mesh on demand.

use alloc::string::String;
use alloc::sync::Arc;

use atlas_font::FontTable;
use glam::Vec3;

use crate::bounds::{GlyphBoundsTable, Transform};
use crate::hit_test::{HitTestIndex, Motion};
use crate::layout::{layout, wrapped_text, TextLayout};
use crate::mesh::GeometryBuffer;
use crate::style::{StyleProperty, TextStyle};
use crate::words::{character_at, WordBoundaries};

/// A ray in world space, typically cast from the camera through the pointer.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Ray {
    /// Start of the ray.
    pub origin: Vec3,
    /// Direction of the ray; need not be normalized.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }
}

/// A character that was clicked.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GlyphClick {
    /// World-space point on the text plane that was hit.
    pub point: Vec3,
    /// Index of the character, counted in characters of the source text.
    pub index: usize,
}

/// A block of text with its style, font and most recent layout.
///
/// Every setter bumps a revision counter. [`update`](Self::update) compares it with the
/// revision of the last pass and rebuilds when they differ, which is all a per-frame driver
/// needs to call.
#[derive(Clone, Debug)]
pub struct TextMesh {
    text: String,
    style: TextStyle,
    font: Option<Arc<FontTable>>,
    transform: Transform,
    motion: Motion,
    /// Rebuild from [`update`](Self::update) when dirty.
    pub auto_rebuild: bool,
    revision: u64,
    applied: Option<u64>,
    layout: TextLayout,
    hit_test: Option<HitTestIndex>,
}

impl Default for TextMesh {
    fn default() -> Self {
        Self::new(None, "")
    }
}

impl TextMesh {
    /// Creates a text block with the default style.
    pub fn new(font: Option<Arc<FontTable>>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
            font,
            transform: Transform::IDENTITY,
            motion: Motion::Stationary,
            auto_rebuild: true,
            revision: 0,
            applied: None,
            layout: TextLayout::default(),
            hit_test: None,
        }
    }

    /// Returns the source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the style.
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Returns the font, if one is assigned.
    pub fn font(&self) -> Option<&Arc<FontTable>> {
        self.font.as_ref()
    }

    /// Returns the block's transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Returns the modification counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.touch();
    }

    /// Replaces the whole style.
    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
        self.touch();
    }

    /// Changes a single style property.
    pub fn set(&mut self, property: StyleProperty) {
        self.style.apply(property);
        self.touch();
    }

    /// Assigns or removes the font.
    pub fn set_font(&mut self, font: Option<Arc<FontTable>>) {
        self.font = font;
        self.touch();
    }

    /// Moves the block.
    ///
    /// Stationary blocks bake their transform into the hit-test boxes, so moving one marks
    /// it dirty; dynamic blocks pick the new transform up on the next query.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        if self.motion == Motion::Stationary {
            self.touch();
        }
    }

    /// Changes whether the block may move after layout.
    pub fn set_motion(&mut self, motion: Motion) {
        self.motion = motion;
        self.touch();
    }

    /// Returns `true` if anything changed since the last pass.
    pub fn is_dirty(&self) -> bool {
        self.applied != Some(self.revision)
    }

    /// Per-frame entry point: rebuilds if auto-rebuild is on and something changed.
    ///
    /// Returns `true` if a pass ran.
    pub fn update(&mut self) -> bool {
        if self.auto_rebuild && self.is_dirty() {
            self.rebuild()
        } else {
            false
        }
    }

    /// Lays the text out again and replaces the mesh and hit-test boxes.
    ///
    /// Without a font this does nothing and returns `false`; the block stays dirty so it
    /// is built as soon as a font is assigned.
    pub fn rebuild(&mut self) -> bool {
        let Some(font) = self.font.as_deref() else {
            return false;
        };
        self.layout = layout(Some(font), &self.text, &self.style);
        self.hit_test = self
            .style
            .click_bounds
            .then(|| HitTestIndex::new(&self.layout.bounds, &self.transform, self.motion));
        self.applied = Some(self.revision);
        log::debug!(
            "rebuilt text mesh revision {}: {} quads",
            self.revision,
            self.layout.geometry.quad_count()
        );
        true
    }

    /// Returns the last layout.
    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    /// Returns the mesh of the last layout.
    pub fn geometry(&self) -> &GeometryBuffer {
        &self.layout.geometry
    }

    /// Returns the hit-test boxes of the last layout, in local space.
    pub fn bounds(&self) -> &GlyphBoundsTable {
        &self.layout.bounds
    }

    /// Width of the last layout.
    pub fn width(&self) -> f32 {
        self.layout.width
    }

    /// Height of the last layout.
    pub fn height(&self) -> f32 {
        self.layout.height
    }

    /// Returns the index of the character under a world-space point.
    pub fn hit_test(&self, point: Vec3) -> Option<usize> {
        self.hit_test.as_ref()?.index_at(point, &self.transform)
    }

    /// Intersects `ray` with the text plane and returns the character it lands on.
    pub fn pick(&self, ray: &Ray) -> Option<GlyphClick> {
        self.hit_test.as_ref()?;
        let normal = self.transform.facing();
        let denom = ray.direction.dot(normal);
        if (-f32::EPSILON..=f32::EPSILON).contains(&denom) {
            return None;
        }
        let distance = (self.transform.translation - ray.origin).dot(normal) / denom;
        if distance < 0.0 {
            return None;
        }
        let point = ray.origin + ray.direction * distance;
        let index = self.hit_test(point)?;
        Some(GlyphClick { point, index })
    }

    /// Returns the text with `\n` inserted wherever the current style wraps it.
    pub fn wrapped_text(&self) -> String {
        match self.font.as_deref() {
            Some(font) => wrapped_text(font, &self.text, &self.style),
            None => self.text.clone(),
        }
    }

    /// Returns the character at `index`.
    pub fn character_at(&self, index: usize) -> Option<char> {
        character_at(&self.text, index)
    }

    /// Returns the word around the character at `index`.
    pub fn word_at(&self, index: usize, rules: &WordBoundaries) -> Option<String> {
        rules.word_at(&self.text, index)
    }
}
