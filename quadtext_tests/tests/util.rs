// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use atlas_font::{AtlasSize, FontSource, FontTable};
use quadtext::TextStyle;

/// Description of a 64x64 atlas laid out as a grid of 16 pixel cells.
pub(crate) const GRID_XML: &str = include_str!("assets/grid.xml");

pub(crate) const GRID_ATLAS: AtlasSize = AtlasSize::new(64, 64);

/// Builds the grid font the same way a host importing assets would.
pub(crate) fn grid_font() -> Arc<FontTable> {
    let table = FontSource::new(GRID_ATLAS, GRID_XML)
        .build()
        .expect("grid fixture is valid");
    Arc::new(table)
}

/// A style at which one grid cell is exactly one unit wide.
pub(crate) fn cell_style() -> TextStyle {
    TextStyle {
        size: 4.0,
        ..TextStyle::default()
    }
}

pub(crate) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
