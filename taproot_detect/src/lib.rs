// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pattern detection over plain text: mentions, hashtags, URLs, and
//! caller-supplied custom patterns.
//!
//! ## Overview
//!
//! This crate is the pattern registry and range extractor of the Taproot
//! stack. Given a block of text it produces, per detector category, the
//! ordered byte ranges that matched ([`MatchSet`]). It knows nothing about
//! layout, pointers, or highlighting — resolution of a pointer position to
//! one of these ranges happens in `taproot_hit`.
//!
//! Extraction is pure and idempotent: the same text always yields the same
//! ranges, and ranges are recomputed from scratch on every call. There is no
//! caching — text reassignment is rare next to render and pointer traffic,
//! so correctness wins over micro-optimization.
//!
//! ## Detectors
//!
//! The fixed detectors are applied case-insensitively over the whole text:
//!
//! - **Mention** — `@` followed by letters, digits, `.`, `_`, `-`; preceded
//!   by start-of-text or whitespace.
//! - **HashTag** — `#` followed by letters, digits, `_`; preceded by
//!   start-of-text or whitespace.
//! - **Url** — an `http://`, `https://`, `www.` or `pic.` prefix followed by
//!   URL-safe characters, ending on a word, `/` or `#` character, optionally
//!   with trailing `()`.
//! - **Custom** — any caller-supplied pattern, compiled case-insensitively;
//!   all non-overlapping matches are reported.
//!
//! The [`regex`] engine has neither lookbehind nor lookahead, so leading
//! boundaries are expressed as consumed prefix groups and the reported range
//! is the token capture group — a match on `"hi @john"` covers `@john`, not
//! `" @john"`.
//!
//! ## Failure behavior
//!
//! A malformed custom pattern is a [`PatternError`] at the registration
//! boundary and a logged no-op during extraction. Matching never panics and
//! a bad custom detector never disturbs the ranges of the other detectors.
//!
//! ## Example
//!
//! ```
//! use taproot_detect::PatternSet;
//!
//! let patterns = PatternSet::new();
//! let matches = patterns.extract("hello @john check #swift http://example.com");
//! assert_eq!(matches.mentions().len(), 1);
//! assert_eq!(matches.hashtags().len(), 1);
//! assert_eq!(matches.urls().len(), 1);
//! ```

mod detector;
mod extract;

pub use detector::{DetectorKind, DetectorSet, PatternError};
pub use extract::{CustomMatches, MatchSet, PatternSet, extract_matches};
