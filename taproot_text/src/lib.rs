// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text primitives shared by the Taproot crates.
//!
//! This crate defines the small value types the rest of the workspace talks
//! in: [`TextRange`] (byte offsets into a string), [`Attachment`] (an inline
//! non-text token carrying an opaque payload), and [`AnnotatedText`] (the
//! owning model of a displayable string plus its attachments).
//!
//! It is deliberately free of pattern matching, hit testing, and any UI
//! toolkit types — those live in `taproot_detect`, `taproot_hit`, and
//! `taproot_label` respectively. A host text widget typically owns one
//! [`AnnotatedText`] and hands out `&str` slices and attachment ranges to
//! the other layers.
//!
//! ## Range containment
//!
//! [`TextRange`] carries two containment tests: the conventional half-open
//! [`TextRange::contains`], and [`TextRange::contains_inclusive`], which
//! treats the range as closed at *both* ends. The tap hit resolver uses the
//! inclusive form; see its docs for why both exist.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod range;
mod text;

pub use range::TextRange;
pub use text::{AnnotatedText, Attachment};
