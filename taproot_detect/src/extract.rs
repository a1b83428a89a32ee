// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range extraction: run the registered detectors over a text.

use regex::Regex;
use smallvec::SmallVec;
use taproot_text::TextRange;

use crate::detector::{
    DetectorKind, DetectorSet, HASHTAG_PATTERN, MENTION_PATTERN, PatternError, URL_PATTERN,
    compile,
};

/// Ranges are tiny for social-post-length text; four inline slots cover the
/// common case without touching the heap.
type Ranges = SmallVec<[TextRange; 4]>;

/// Matches produced by one registered custom detector.
#[derive(Clone, Debug)]
pub struct CustomMatches {
    pattern: String,
    ranges: Ranges,
}

impl CustomMatches {
    /// The pattern string the detector was registered with.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The matched ranges, in text order.
    pub fn ranges(&self) -> &[TextRange] {
        &self.ranges
    }
}

/// The per-category match ranges extracted from one text.
///
/// A `MatchSet` is derived data for exactly one text; it is recomputed in
/// full whenever the text changes and must never be consulted against a
/// different string.
#[derive(Clone, Debug, Default)]
pub struct MatchSet {
    mentions: Ranges,
    hashtags: Ranges,
    urls: Ranges,
    customs: Vec<CustomMatches>,
}

impl MatchSet {
    /// Mention ranges, in text order.
    pub fn mentions(&self) -> &[TextRange] {
        &self.mentions
    }

    /// Hashtag ranges, in text order.
    pub fn hashtags(&self) -> &[TextRange] {
        &self.hashtags
    }

    /// URL ranges, in text order.
    pub fn urls(&self) -> &[TextRange] {
        &self.urls
    }

    /// Results of the registered custom detectors, in registration order.
    pub fn customs(&self) -> &[CustomMatches] {
        &self.customs
    }

    /// The ranges a given kind produced. For `Custom`, the pattern string
    /// selects the detector; an unregistered pattern yields no ranges.
    pub fn ranges_for(&self, kind: &DetectorKind) -> &[TextRange] {
        match kind {
            DetectorKind::Mention => &self.mentions,
            DetectorKind::HashTag => &self.hashtags,
            DetectorKind::Url => &self.urls,
            DetectorKind::Custom(pattern) => self
                .customs
                .iter()
                .find(|c| c.pattern == *pattern)
                .map(|c| c.ranges.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// Whether no detector matched anything.
    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
            && self.hashtags.is_empty()
            && self.urls.is_empty()
            && self.customs.iter().all(|c| c.ranges.is_empty())
    }
}

struct CustomDetector {
    pattern: String,
    re: Regex,
}

/// The pattern registry: pre-compiled fixed detectors plus any registered
/// custom detectors.
///
/// Fixed patterns are compiled once at construction. Which fixed categories
/// run is fixed at configuration time via [`DetectorSet`]; custom detectors
/// are appended with [`PatternSet::add_custom`] and run after the fixed ones.
pub struct PatternSet {
    enabled: DetectorSet,
    mention: Regex,
    hashtag: Regex,
    url: Regex,
    customs: Vec<CustomDetector>,
}

impl core::fmt::Debug for PatternSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PatternSet")
            .field("enabled", &self.enabled)
            .field("customs", &self.customs.len())
            .finish_non_exhaustive()
    }
}

impl PatternSet {
    /// Create a registry with all fixed detectors enabled.
    pub fn new() -> Self {
        Self::with_detectors(DetectorSet::all())
    }

    /// Create a registry running only the given fixed categories.
    pub fn with_detectors(enabled: DetectorSet) -> Self {
        Self {
            enabled,
            mention: compile(MENTION_PATTERN).expect("mention pattern is valid"),
            hashtag: compile(HASHTAG_PATTERN).expect("hashtag pattern is valid"),
            url: compile(URL_PATTERN).expect("url pattern is valid"),
            customs: Vec::new(),
        }
    }

    /// The enabled fixed categories.
    pub fn enabled(&self) -> DetectorSet {
        self.enabled
    }

    /// Register a custom detector.
    ///
    /// The pattern is compiled eagerly; a malformed pattern is returned to
    /// the caller *and* logged, and the detector is not registered, so later
    /// extraction runs are unaffected by it.
    pub fn add_custom(&mut self, pattern: impl Into<String>) -> Result<(), PatternError> {
        let pattern = pattern.into();
        match compile(&pattern) {
            Ok(re) => {
                self.customs.push(CustomDetector { pattern, re });
                Ok(())
            }
            Err(err) => {
                log::warn!("dropping custom detector: {err}");
                Err(err)
            }
        }
    }

    /// Number of registered custom detectors.
    pub fn custom_count(&self) -> usize {
        self.customs.len()
    }

    /// Run every enabled detector over `text`.
    ///
    /// Categories are recomputed in a fixed order (mention, hashtag, URL,
    /// then customs in registration order). Empty text yields an empty set.
    pub fn extract(&self, text: &str) -> MatchSet {
        let mut out = MatchSet::default();
        if text.is_empty() {
            // Still record the registered customs so `ranges_for` stays total.
            for c in &self.customs {
                out.customs.push(CustomMatches {
                    pattern: c.pattern.clone(),
                    ranges: Ranges::new(),
                });
            }
            return out;
        }
        if self.enabled.contains(DetectorSet::MENTION) {
            out.mentions = token_ranges(&self.mention, text);
        }
        if self.enabled.contains(DetectorSet::HASHTAG) {
            out.hashtags = token_ranges(&self.hashtag, text);
        }
        if self.enabled.contains(DetectorSet::URL) {
            out.urls = token_ranges(&self.url, text);
        }
        for c in &self.customs {
            out.customs.push(CustomMatches {
                pattern: c.pattern.clone(),
                ranges: match_ranges(&c.re, text),
            });
        }
        out
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the ranges one detector kind matches in `text`.
///
/// This is the single-kind contract: empty text yields an empty sequence,
/// and a malformed `Custom` pattern is logged and treated as zero matches
/// rather than propagated. Prefer [`PatternSet`] when extracting repeatedly;
/// this function compiles the pattern on every call.
pub fn extract_matches(text: &str, kind: &DetectorKind) -> Vec<TextRange> {
    if text.is_empty() {
        return Vec::new();
    }
    match compile(kind.pattern()) {
        Ok(re) => {
            let ranges = if kind.uses_token_group() {
                token_ranges(&re, text)
            } else {
                match_ranges(&re, text)
            };
            ranges.into_vec()
        }
        Err(err) => {
            log::warn!("extract_matches: {err}");
            Vec::new()
        }
    }
}

/// Ranges of capture group 1 across all matches. The fixed patterns consume
/// their leading boundary character, so the token group is the range callers
/// actually want (`@john`, not `" @john"`).
fn token_ranges(re: &Regex, text: &str) -> Ranges {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| TextRange::new(m.start(), m.len()))
        .collect()
}

/// Full-match ranges across all non-overlapping matches.
fn match_ranges(re: &Regex, text: &str) -> Ranges {
    re.find_iter(text)
        .map(|m| TextRange::new(m.start(), m.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "hello @john check #swift http://example.com";

    fn substrings<'t>(text: &'t str, ranges: &[TextRange]) -> Vec<&'t str> {
        ranges.iter().map(|r| &text[r.start..r.end()]).collect()
    }

    #[test]
    fn sample_text_yields_one_range_per_category() {
        let set = PatternSet::new().extract(SAMPLE);
        assert_eq!(substrings(SAMPLE, set.mentions()), ["@john"]);
        assert_eq!(substrings(SAMPLE, set.hashtags()), ["#swift"]);
        assert_eq!(substrings(SAMPLE, set.urls()), ["http://example.com"]);
    }

    #[test]
    fn ranges_exclude_the_leading_boundary() {
        let set = PatternSet::new().extract(SAMPLE);
        assert_eq!(set.mentions(), [TextRange::new(6, 5)]);
        assert_eq!(set.hashtags(), [TextRange::new(18, 6)]);
        assert_eq!(set.urls(), [TextRange::new(25, 18)]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let patterns = PatternSet::new();
        let a = patterns.extract(SAMPLE);
        let b = patterns.extract(SAMPLE);
        assert_eq!(a.mentions(), b.mentions());
        assert_eq!(a.hashtags(), b.hashtags());
        assert_eq!(a.urls(), b.urls());
    }

    #[test]
    fn hashtag_at_text_start_begins_at_offset_zero() {
        let text = "#swift is nice";
        let set = PatternSet::new().extract(text);
        assert_eq!(set.hashtags(), [TextRange::new(0, 6)]);
        assert_eq!(substrings(text, set.hashtags()), ["#swift"]);
    }

    #[test]
    fn empty_text_yields_empty_sets() {
        let set = PatternSet::new().extract("");
        assert!(set.is_empty());
        assert!(extract_matches("", &DetectorKind::Mention).is_empty());
    }

    #[test]
    fn mention_requires_leading_whitespace_or_start() {
        let set = PatternSet::new().extract("mail me at user@example.com");
        // The `@` inside an email-ish token is not a mention.
        assert!(set.mentions().is_empty());
        let set = PatternSet::new().extract("@lead and co");
        assert_eq!(set.mentions(), [TextRange::new(0, 5)]);
    }

    #[test]
    fn mention_allows_dots_underscores_dashes() {
        let text = "ping @a.b_c-d now";
        let set = PatternSet::new().extract(text);
        assert_eq!(substrings(text, set.mentions()), ["@a.b_c-d"]);
    }

    #[test]
    fn hashtag_stops_at_dash() {
        let text = "so #tag-name";
        let set = PatternSet::new().extract(text);
        assert_eq!(substrings(text, set.hashtags()), ["#tag"]);
    }

    #[test]
    fn unicode_letters_match() {
        let text = "hola @josé y #café";
        let set = PatternSet::new().extract(text);
        assert_eq!(substrings(text, set.mentions()), ["@josé"]);
        assert_eq!(substrings(text, set.hashtags()), ["#café"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let text = "see WWW.Example.COM and HTTPS://Rust-Lang.org";
        let set = PatternSet::new().extract(text);
        assert_eq!(
            substrings(text, set.urls()),
            ["WWW.Example.COM", "HTTPS://Rust-Lang.org"]
        );
    }

    #[test]
    fn url_prefixes_and_trailing_parens() {
        let text = "pic.twitter.com/x and http://foo.com/bar()";
        let set = PatternSet::new().extract(text);
        assert_eq!(
            substrings(text, set.urls()),
            ["pic.twitter.com/x", "http://foo.com/bar()"]
        );
    }

    #[test]
    fn url_after_punctuation_boundary() {
        let text = "(www.example.org)";
        let set = PatternSet::new().extract(text);
        assert_eq!(substrings(text, set.urls()), ["www.example.org"]);
    }

    #[test]
    fn adjacent_tokens_each_match() {
        let text = "@a @b #x #y";
        let set = PatternSet::new().extract(text);
        assert_eq!(substrings(text, set.mentions()), ["@a", "@b"]);
        assert_eq!(substrings(text, set.hashtags()), ["#x", "#y"]);
    }

    #[test]
    fn custom_detector_reports_full_matches() {
        let mut patterns = PatternSet::new();
        patterns.add_custom(r"\bRUST-\d+\b").unwrap();
        let text = "fixes rust-42 and RUST-7";
        let set = patterns.extract(text);
        assert_eq!(set.customs().len(), 1);
        // Case-insensitive like the fixed detectors.
        assert_eq!(substrings(text, set.customs()[0].ranges()), ["rust-42", "RUST-7"]);
        let kind = DetectorKind::Custom(r"\bRUST-\d+\b".to_string());
        assert_eq!(set.ranges_for(&kind), set.customs()[0].ranges());
    }

    #[test]
    fn malformed_custom_pattern_is_contained() {
        let mut patterns = PatternSet::new();
        assert!(patterns.add_custom("([unclosed").is_err());
        assert_eq!(patterns.custom_count(), 0);
        // Other detectors are unaffected.
        let set = patterns.extract(SAMPLE);
        assert_eq!(set.mentions().len(), 1);
        assert_eq!(set.hashtags().len(), 1);
        assert_eq!(set.urls().len(), 1);
        // The single-kind contract degrades to zero matches, not a panic.
        let bad = DetectorKind::Custom("([unclosed".to_string());
        assert!(extract_matches(SAMPLE, &bad).is_empty());
    }

    #[test]
    fn disabled_categories_do_not_run() {
        let patterns = PatternSet::with_detectors(DetectorSet::HASHTAG);
        let set = patterns.extract(SAMPLE);
        assert!(set.mentions().is_empty());
        assert!(set.urls().is_empty());
        assert_eq!(set.hashtags().len(), 1);
    }

    #[test]
    fn single_kind_contract_matches_registry_output() {
        let set = PatternSet::new().extract(SAMPLE);
        assert_eq!(
            extract_matches(SAMPLE, &DetectorKind::Mention),
            set.mentions().to_vec()
        );
        assert_eq!(
            extract_matches(SAMPLE, &DetectorKind::Url),
            set.urls().to_vec()
        );
    }
}
