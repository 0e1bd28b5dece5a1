// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph metrics and kerning tables for bitmap atlas fonts.
//!
//! An atlas font is a single texture packing many glyph bitmaps, together with a description
//! document listing where each glyph lives in the texture and how far the pen moves after
//! drawing it. This crate turns that description into a [`FontTable`]: an immutable map from
//! character code to [`Glyph`] in which every measurement has already been normalized against
//! the atlas dimensions, so that layout code never needs to know the texture resolution.
//!
//! ## Example
//!
//! ```
//! use atlas_font::{AtlasSize, FontDescription};
//!
//! let xml = r#"<?xml version="1.0"?>
//! <font>
//!   <info size="32"/>
//!   <common lineHeight="32"/>
//!   <chars count="1">
//!     <char id="65" x="0" y="0" width="16" height="32" xoffset="0" yoffset="0" xadvance="16"/>
//!   </chars>
//! </font>"#;
//!
//! let description = FontDescription::parse_xml(xml).unwrap();
//! let table = description.build(AtlasSize::new(128, 128)).unwrap();
//!
//! let glyph = table.glyph('A').unwrap();
//! assert_eq!(glyph.x_advance, 0.125);
//! assert_eq!(table.line_height(), 0.25);
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

extern crate alloc;

mod description;
mod error;
mod glyph;
mod source;
mod table;

pub use description::{CharEntry, FontDescription, KerningEntry};
pub use error::{Asset, Error};
pub use glyph::{Glyph, GlyphRect};
pub use source::FontSource;
pub use table::{AspectScale, AtlasSize, FontTable, FontTableBuilder};
