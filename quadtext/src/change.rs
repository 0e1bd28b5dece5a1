// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change detection between layout passes.

use core::hash::{BuildHasher, Hash};

use foldhash::fast::FixedState;

use crate::style::TextStyle;

const SEED: u64 = 0x7175_6164_7465_7874;

/// Fingerprint of everything that affects a layout pass.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Computes the fingerprint of `text` laid out with `style`.
    pub fn new(text: &str, style: &TextStyle) -> Self {
        Self(FixedState::with_seed(SEED).hash_one((text, style)))
    }
}

/// Decides whether text or style changed since the last applied pass.
///
/// Intended for drivers that do not own the text and style and therefore cannot count
/// modifications themselves.
#[derive(Clone, Default, Debug)]
pub struct ChangeDetector {
    applied: Option<Fingerprint>,
}

impl ChangeDetector {
    /// Creates a detector that reports everything as dirty until the first pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `text` and `style` differ from the last applied snapshot.
    pub fn is_dirty(&self, text: &str, style: &TextStyle) -> bool {
        self.applied != Some(Fingerprint::new(text, style))
    }

    /// Records `text` and `style` as the applied snapshot.
    pub fn mark_applied(&mut self, text: &str, style: &TextStyle) {
        self.applied = Some(Fingerprint::new(text, style));
    }

    /// Forgets the applied snapshot, forcing the next check to report a change.
    pub fn invalidate(&mut self) {
        self.applied = None;
    }
}
