// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bitmap-font text layout into quad meshes.
//!
//! Quadtext takes a string, a [`TextStyle`] and an [`atlas_font::FontTable`] and produces a
//! [`GeometryBuffer`]: one textured quad per visible glyph, with vertex colors or secondary
//! texture coordinates depending on the [`FillMode`], split into one index list per material.
//! Alongside the mesh it records a [`GlyphBounds`] box for every input character so that a
//! point or ray can be mapped back to a character index.
//!
//! The layout is deliberately simple. Lines break at `\n` and `\r\n`, and optionally at spaces
//! once a row would exceed the wrap width. Pairwise kerning from the font is applied between
//! adjacent glyphs, never across spaces. The sequence `\N` with a decimal digit `N` selects
//! material `N` for the glyphs that follow, and `\\` produces a literal backslash.
//!
//! Coordinates are in font units scaled by [`TextStyle::size`]. The pen starts at the origin,
//! rows advance down the negative Y axis, and quads face the negative Z axis.
//!
//! For retained text that should only be rebuilt when something changed, see [`TextMesh`].
//!
//! ## Example
//!
//! ```
//! use atlas_font::{FontTable, Glyph, GlyphRect};
//! use quadtext::{layout, TextStyle};
//!
//! let font = FontTable::builder(1.0, 1.0)
//!     .glyph('A' as u32, Glyph::new(GlyphRect::new(0.0, 0.0, 1.0, 1.0), 0.0, 0.0, 1.0))
//!     .build();
//!
//! let style = TextStyle {
//!     size: 10.0,
//!     ..TextStyle::default()
//! };
//! let layout = layout(Some(&font), "A", &style);
//!
//! assert_eq!(layout.geometry.vertex_count(), 4);
//! assert_eq!(layout.geometry.index_count(), 6);
//! assert_eq!(layout.width, 10.0);
//! assert_eq!(layout.height, 10.0);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("quadtext requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use atlas_font;
pub use glam;
pub use peniko;

mod bounds;
mod change;
mod escape;
mod mesh;
mod style;
mod text_mesh;
mod words;

pub mod layout;

#[cfg(test)]
mod tests;

pub use bounds::{GlyphBounds, GlyphBoundsTable, Transform};
pub use change::{ChangeDetector, Fingerprint};
pub use hit_test::{HitTestIndex, Motion};
pub use layout::{layout, measure_width, wrapped_text, TextLayout};
pub use mesh::{GeometryBuffer, QUAD_INDICES, QUAD_VERTICES};
pub use style::{Alignment, CornerColors, FillMode, StyleProperty, TextStyle};
pub use text_mesh::{GlyphClick, Ray, TextMesh};
pub use words::{character_at, WordBoundaries};
