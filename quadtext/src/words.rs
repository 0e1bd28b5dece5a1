// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word lookup for clicked characters.

use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::escape;

/// Rules for finding the word around a character index.
///
/// Word characters are alphanumerics, the configured non-breaking punctuation and the
/// backslash that introduces escape codes. Escape codes are removed from the returned word
/// only after its boundaries are found, so a word with an embedded code is still one word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBoundaries {
    /// Punctuation that does not end a word.
    pub non_breaking: String,
}

impl Default for WordBoundaries {
    fn default() -> Self {
        Self {
            non_breaking: "-'".to_owned(),
        }
    }
}

impl WordBoundaries {
    /// Creates rules with the given non-breaking punctuation.
    pub fn new(non_breaking: impl Into<String>) -> Self {
        Self {
            non_breaking: non_breaking.into(),
        }
    }

    fn is_word_char(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '\\' || self.non_breaking.contains(ch)
    }

    /// Returns the word containing the character at `index`.
    ///
    /// If that character is not a word character it is returned on its own. Returns `None`
    /// when `index` is past the end of `text`.
    pub fn word_at(&self, text: &str, index: usize) -> Option<String> {
        let chars: Vec<char> = text.chars().collect();
        let &ch = chars.get(index)?;
        if !self.is_word_char(ch) {
            return Some(ch.to_string());
        }
        let mut start = index;
        while start > 0 && self.is_word_char(chars[start - 1]) {
            start -= 1;
        }
        let mut end = index;
        while end + 1 < chars.len() && self.is_word_char(chars[end + 1]) {
            end += 1;
        }
        let word: String = chars[start..=end].iter().collect();
        Some(escape::strip(&word))
    }
}

/// Returns the character at `index`, counted in characters.
pub fn character_at(text: &str, index: usize) -> Option<char> {
    text.chars().nth(index)
}
