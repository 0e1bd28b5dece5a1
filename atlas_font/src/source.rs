// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::{Asset, AtlasSize, Error, FontDescription, FontTable};

/// The assets a font table is imported from.
///
/// Either input may be absent while a host is still assigning them; [`build`](Self::build)
/// reports which one is missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontSource {
    /// Pixel dimensions of the atlas texture.
    pub atlas: Option<AtlasSize>,
    /// The XML description document.
    pub description: Option<String>,
}

impl FontSource {
    /// Creates a source with both assets present.
    pub fn new(atlas: AtlasSize, description: impl Into<String>) -> Self {
        Self {
            atlas: Some(atlas),
            description: Some(description.into()),
        }
    }

    /// Parses the description and builds a normalized font table.
    pub fn build(&self) -> Result<FontTable, Error> {
        let atlas = self.atlas.ok_or(Error::MissingAsset(Asset::Atlas))?;
        let description = self
            .description
            .as_deref()
            .ok_or(Error::MissingAsset(Asset::Description))?;
        FontDescription::parse_xml(description)?.build(atlas)
    }
}
