// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// The two inputs required to build a font table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    /// The atlas texture (only its pixel dimensions are used).
    Atlas,
    /// The font description document.
    Description,
}

/// Error returned when building a [`FontTable`](crate::FontTable).
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// One of the inputs is absent.
    MissingAsset(Asset),
    /// The atlas has a zero dimension, so glyph rectangles cannot be normalized.
    InvalidAtlasSize {
        /// Atlas width in pixels.
        width: u32,
        /// Atlas height in pixels.
        height: u32,
    },
    /// The document root is not a `font` element.
    InvalidFontDescription {
        /// Name of the root element that was found instead.
        root: String,
    },
    /// The document is not well-formed XML.
    Xml(roxmltree::Error),
    /// A required numeric attribute is missing or malformed.
    InvalidAttribute {
        /// Element carrying the attribute.
        element: &'static str,
        /// Name of the offending attribute.
        attribute: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAsset(Asset::Atlas) => f.write_str("missing atlas texture"),
            Self::MissingAsset(Asset::Description) => f.write_str("missing font description"),
            Self::InvalidAtlasSize { width, height } => {
                write!(f, "invalid atlas size {width}x{height}")
            }
            Self::InvalidFontDescription { root } => {
                write!(f, "invalid font description: expected `font` root, found `{root}`")
            }
            Self::Xml(err) => write!(f, "malformed font description: {err}"),
            Self::InvalidAttribute { element, attribute } => {
                write!(f, "missing or invalid `{attribute}` attribute on `{element}`")
            }
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            #[cfg(feature = "std")]
            Self::Xml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Self::Xml(err)
    }
}
