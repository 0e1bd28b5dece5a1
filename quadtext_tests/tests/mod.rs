// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `quadtext` and `atlas_font`.
//!
//! - The `util` module loads the shared font fixture from `assets/`.
//! - Everything runs from this `mod.rs` entry point instead of the default harness, so that
//!   the fixture helpers can be shared between topics.
//! - Put the topic of a test at the start of its name (`import_`, `layout_`, `pick_`).

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod import;
mod pick;
mod util;
