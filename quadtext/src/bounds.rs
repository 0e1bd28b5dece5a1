// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-character hit-test boxes.

use alloc::vec::Vec;

use glam::{Quat, Vec3};

/// Position and orientation of a laid-out text block.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Transform {
    /// Translation applied after rotation.
    pub translation: Vec3,
    /// Orientation of the text plane.
    pub rotation: Quat,
}

impl Transform {
    /// The identity transform: local space equals world space.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Creates a transform from a translation and rotation.
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Creates a translation-only transform.
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::IDENTITY)
    }

    /// Maps a local-space point to world space.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }

    /// Maps a world-space point to local space.
    pub fn inverse_transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation.inverse() * (point - self.translation)
    }

    /// Direction the text faces, i.e. the rotated local −Z axis.
    pub fn facing(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// An axis-aligned box around one character.
///
/// Characters that produce no geometry (spaces, escape codes, line breaks, characters the
/// font lacks) are recorded as zero-size placeholders so that entry `i` always describes
/// the `i`-th character of the input.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct GlyphBounds {
    /// Center of the box.
    pub center: Vec3,
    /// Full extent of the box along each axis.
    pub size: Vec3,
}

impl GlyphBounds {
    /// A zero-size placeholder at the origin.
    pub const PLACEHOLDER: Self = Self {
        center: Vec3::ZERO,
        size: Vec3::ZERO,
    };

    /// Creates a box from its center and size.
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    /// Returns `true` for entries that can never be hit.
    pub fn is_placeholder(&self) -> bool {
        self.size == Vec3::ZERO
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        self.center - self.size * 0.5
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        self.center + self.size * 0.5
    }

    /// Returns `true` if `point` lies inside or on the surface of the box.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min()).all() && point.cmple(self.max()).all()
    }

    /// Moves the box by `dx` along the x axis.
    pub(crate) fn offset_x(&mut self, dx: f32) {
        self.center.x += dx;
    }

    /// Returns this box carried into world space by `transform`.
    ///
    /// The rotated extent is folded back to positive values on every axis.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            center: transform.transform_point(self.center),
            size: (transform.rotation * self.size).abs(),
        }
    }
}

/// One [`GlyphBounds`] per input character.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct GlyphBoundsTable {
    entries: Vec<GlyphBounds>,
}

impl GlyphBoundsTable {
    /// Returns all entries in input order.
    pub fn entries(&self) -> &[GlyphBounds] {
        &self.entries
    }

    /// Returns the entry for the character at `index`.
    pub fn get(&self, index: usize) -> Option<&GlyphBounds> {
        self.entries.get(index)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> core::slice::Iter<'_, GlyphBounds> {
        self.entries.iter()
    }

    pub(crate) fn push(&mut self, bounds: GlyphBounds) -> usize {
        self.entries.push(bounds);
        self.entries.len() - 1
    }

    pub(crate) fn push_placeholder(&mut self) {
        self.entries.push(GlyphBounds::PLACEHOLDER);
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> &mut GlyphBounds {
        &mut self.entries[index]
    }
}

impl<'a> IntoIterator for &'a GlyphBoundsTable {
    type Item = &'a GlyphBounds;
    type IntoIter = core::slice::Iter<'a, GlyphBounds>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
