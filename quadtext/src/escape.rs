// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline material escape codes.
//!
//! A backslash followed by an ASCII digit selects the material slot used for the glyphs that
//! follow. Both characters are consumed without producing geometry. A backslash followed by
//! anything else only swallows the backslash; the following character is processed normally,
//! so `\\` renders a single literal backslash.

use alloc::string::String;

/// State of the escape automaton between two characters.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub(crate) enum EscapeState {
    #[default]
    Normal,
    PendingEscape,
}

/// What the automaton decided for one character.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Token {
    /// A character to place (or measure).
    Char(char),
    /// An escape introducer, consumed without output.
    Escape,
    /// The digit of a complete escape sequence.
    SelectMaterial(u8),
}

impl EscapeState {
    /// Feeds one character and returns how it should be treated.
    pub(crate) fn step(&mut self, ch: char) -> Token {
        match *self {
            Self::PendingEscape => {
                *self = Self::Normal;
                let Some(digit) = ch.to_digit(10) else {
                    return Token::Char(ch);
                };
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "decimal digits fit in a u8"
                )]
                let digit = digit as u8;
                Token::SelectMaterial(digit)
            }
            Self::Normal if ch == '\\' => {
                *self = Self::PendingEscape;
                Token::Escape
            }
            Self::Normal => Token::Char(ch),
        }
    }
}

/// Iterates the automaton's decisions over a string.
pub(crate) fn tokens(text: &str) -> impl Iterator<Item = Token> + '_ {
    let mut state = EscapeState::default();
    text.chars().map(move |ch| state.step(ch))
}

/// Returns the characters layout would render for `text`, dropping every escape introducer
/// and material code.
///
/// `\\1` therefore becomes `\1`, and a trailing lone backslash disappears.
pub(crate) fn strip(text: &str) -> String {
    tokens(text)
        .filter_map(|token| match token {
            Token::Char(ch) => Some(ch),
            Token::Escape | Token::SelectMaterial(_) => None,
        })
        .collect()
}
