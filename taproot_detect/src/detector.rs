// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detector kinds, their patterns, and the enabled-category set.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Mention token: `@` plus letters/digits/`.`/`_`/`-`, after start or whitespace.
pub(crate) const MENTION_PATTERN: &str = r"(?:^|\s)(@[\p{L}0-9._-]+)";

/// Hashtag token: `#` plus letters/digits/`_`, after start or whitespace.
pub(crate) const HASHTAG_PATTERN: &str = r"(?:^|\s)(#[\p{L}0-9_]+)";

/// URL token: scheme or `www.`/`pic.` prefix, URL-safe body, word/`/`/`#`
/// terminal character, optional trailing `()`.
pub(crate) const URL_PATTERN: &str =
    r"(?:^|[\s.:;?\-\]<(])((?:https?://|www\.|pic\.)[-\w;/?:@&=+$|_.!~*'()\[\]%#,]+[\w/#](?:\(\))?)";

/// A detector category and the pattern it owns.
///
/// The three fixed kinds carry built-in patterns; `Custom` carries the
/// caller's pattern string. Kinds are configured once on a
/// [`PatternSet`](crate::PatternSet) and are immutable thereafter.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum DetectorKind {
    /// `@name` mention.
    Mention,
    /// `#topic` hashtag.
    HashTag,
    /// `http(s)://`, `www.` or `pic.` URL.
    Url,
    /// Caller-supplied pattern, matched with the same semantics as the
    /// fixed kinds (case-insensitive, all non-overlapping matches).
    Custom(String),
}

impl DetectorKind {
    /// The regular expression this kind matches with.
    pub fn pattern(&self) -> &str {
        match self {
            Self::Mention => MENTION_PATTERN,
            Self::HashTag => HASHTAG_PATTERN,
            Self::Url => URL_PATTERN,
            Self::Custom(pattern) => pattern,
        }
    }

    /// Whether the reported range should be the token capture group rather
    /// than the whole match. True for the fixed kinds, whose patterns consume
    /// a one-character boundary prefix; custom patterns report full matches.
    pub(crate) fn uses_token_group(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

bitflags::bitflags! {
    /// The set of fixed detector categories a [`PatternSet`](crate::PatternSet) runs.
    ///
    /// Custom detectors are registered individually and are not part of this
    /// set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DetectorSet: u8 {
        /// Run the mention detector.
        const MENTION = 0b0000_0001;
        /// Run the hashtag detector.
        const HASHTAG = 0b0000_0010;
        /// Run the URL detector.
        const URL     = 0b0000_0100;
    }
}

impl Default for DetectorSet {
    fn default() -> Self {
        Self::all()
    }
}

/// A detector pattern that failed to compile.
///
/// Surfaced on explicit registration so the caller can report it; during
/// extraction the failing detector is logged and contributes zero matches
/// instead (matching must never take the host down).
#[derive(Debug, Error)]
#[error("invalid detector pattern `{pattern}`: {source}")]
pub struct PatternError {
    /// The pattern that failed to compile.
    pub pattern: String,
    /// The underlying regex error.
    #[source]
    pub source: regex::Error,
}

/// Compile a pattern with the shared matching options (case-insensitive).
pub(crate) fn compile(pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_patterns_compile() {
        for kind in [DetectorKind::Mention, DetectorKind::HashTag, DetectorKind::Url] {
            assert!(compile(kind.pattern()).is_ok(), "pattern for {kind:?}");
        }
    }

    #[test]
    fn custom_kind_owns_its_pattern() {
        let kind = DetectorKind::Custom(r"\bfoo\b".to_string());
        assert_eq!(kind.pattern(), r"\bfoo\b");
        assert!(!kind.uses_token_group());
    }

    #[test]
    fn malformed_pattern_reports_error() {
        let err = compile("([unclosed").unwrap_err();
        assert_eq!(err.pattern, "([unclosed");
        assert!(err.to_string().contains("invalid detector pattern"));
    }

    #[test]
    fn detector_set_defaults_to_all_fixed_kinds() {
        let set = DetectorSet::default();
        assert!(set.contains(DetectorSet::MENTION | DetectorSet::HASHTAG | DetectorSet::URL));
    }
}
