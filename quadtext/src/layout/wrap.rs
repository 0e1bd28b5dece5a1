// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word wrapping.

use alloc::borrow::ToOwned;
use alloc::string::String;

use atlas_font::FontTable;
use smallvec::SmallVec;

use super::{lines, measure_width};
use crate::style::{Alignment, TextStyle};

/// Splits a line into words that keep their delimiting space.
///
/// Right-aligned text keeps the space in front of each word so that rows end flush with
/// the last glyph; other alignments keep it behind. Concatenating the segments always yields
/// the original line.
pub(crate) fn segments(line: &str, alignment: Alignment) -> SmallVec<[&str; 16]> {
    match alignment {
        Alignment::Right => {
            let mut out = SmallVec::new();
            let mut start = 0;
            for (i, _) in line.match_indices(' ') {
                if i > start {
                    out.push(&line[start..i]);
                    start = i;
                }
            }
            if start < line.len() {
                out.push(&line[start..]);
            }
            out
        }
        Alignment::Left | Alignment::Center => line.split_inclusive(' ').collect(),
    }
}

/// Returns `text` with the spaces at which rows would wrap replaced by `\n`.
///
/// Uses the same measurements as [`layout`](crate::layout), so the result lays out
/// without further wrapping. Source line breaks are normalized to `\n`. When wrapping is
/// disabled the text is returned unchanged.
pub fn wrapped_text(font: &FontTable, text: &str, style: &TextStyle) -> String {
    if !style.wraps() {
        return text.to_owned();
    }
    let mut out = String::with_capacity(text.len());
    for (i, (line, _)) in lines(text).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let mut x = 0.0;
        let mut row_started = false;
        for segment in segments(line, style.alignment) {
            let width = measure_width(font, segment, style);
            if row_started && x + width > style.wrap_width {
                x = 0.0;
                match segment.strip_prefix(' ') {
                    Some(rest) if style.alignment == Alignment::Right => {
                        out.push('\n');
                        out.push_str(rest);
                        x += width;
                        continue;
                    }
                    _ => {
                        if out.ends_with(' ') {
                            out.pop();
                        }
                        out.push('\n');
                    }
                }
            }
            out.push_str(segment);
            x += width;
            row_started = true;
        }
    }
    out
}
