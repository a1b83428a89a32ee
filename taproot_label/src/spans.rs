// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-text style spans for host-side rich rendering.

use taproot_detect::PatternSet;
use taproot_text::TextRange;

/// Styling category of one span.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpanKind {
    /// Plain text between matches.
    Default,
    /// A mention token.
    Mention,
    /// A hashtag token.
    HashTag,
    /// A URL token.
    Url,
}

/// One contiguous run of text sharing a styling category.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StyleSpan {
    /// The bytes the span covers.
    pub range: TextRange,
    /// How to style them.
    pub kind: SpanKind,
}

/// Cover `text` with styling spans.
///
/// Runs the registry's fixed detectors and returns spans that are contiguous,
/// non-overlapping, and concatenate to exactly the full text: matched tokens
/// get their category, the gaps get [`SpanKind::Default`]. Where matches
/// overlap, the earlier-starting span wins; on equal starts the category
/// priority (mention, then hashtag, then URL) applies. Custom detectors are
/// not styled — hosts that want them styled have the ranges in the
/// [`MatchSet`](taproot_detect::MatchSet).
pub fn style_spans(text: &str, patterns: &PatternSet) -> Vec<StyleSpan> {
    if text.is_empty() {
        return Vec::new();
    }
    let matches = patterns.extract(text);
    let mut marked: Vec<StyleSpan> = Vec::new();
    // Insertion order is the tie-break: a stable sort by start keeps
    // mentions ahead of hashtags ahead of URLs on equal starts.
    for (ranges, kind) in [
        (matches.mentions(), SpanKind::Mention),
        (matches.hashtags(), SpanKind::HashTag),
        (matches.urls(), SpanKind::Url),
    ] {
        marked.extend(ranges.iter().map(|&range| StyleSpan { range, kind }));
    }
    marked.sort_by_key(|s| s.range.start);

    let mut spans = Vec::with_capacity(marked.len() * 2 + 1);
    let mut cursor = 0;
    for span in marked {
        if span.range.start < cursor {
            // Overlapped by the previous winner.
            continue;
        }
        if span.range.start > cursor {
            spans.push(StyleSpan {
                range: TextRange::new(cursor, span.range.start - cursor),
                kind: SpanKind::Default,
            });
        }
        spans.push(span);
        cursor = span.range.end();
    }
    if cursor < text.len() {
        spans.push(StyleSpan {
            range: TextRange::new(cursor, text.len() - cursor),
            kind: SpanKind::Default,
        });
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_texts<'t>(text: &'t str, spans: &[StyleSpan]) -> Vec<(SpanKind, &'t str)> {
        spans
            .iter()
            .map(|s| (s.kind, &text[s.range.start..s.range.end()]))
            .collect()
    }

    #[test]
    fn spans_cover_the_whole_text() {
        let text = "hello @john check #swift http://example.com";
        let spans = style_spans(text, &PatternSet::new());
        let mut cursor = 0;
        for s in &spans {
            assert_eq!(s.range.start, cursor, "spans must be contiguous");
            cursor = s.range.end();
        }
        assert_eq!(cursor, text.len(), "spans must reach the end");
    }

    #[test]
    fn tokens_get_their_categories() {
        let text = "hello @john check #swift http://example.com";
        let spans = style_spans(text, &PatternSet::new());
        assert_eq!(
            kinds_and_texts(text, &spans),
            [
                (SpanKind::Default, "hello "),
                (SpanKind::Mention, "@john"),
                (SpanKind::Default, " check "),
                (SpanKind::HashTag, "#swift"),
                (SpanKind::Default, " "),
                (SpanKind::Url, "http://example.com"),
            ]
        );
    }

    #[test]
    fn all_plain_text_is_one_default_span() {
        let text = "nothing to see";
        let spans = style_spans(text, &PatternSet::new());
        assert_eq!(kinds_and_texts(text, &spans), [(SpanKind::Default, text)]);
    }

    #[test]
    fn empty_text_yields_no_spans() {
        assert!(style_spans("", &PatternSet::new()).is_empty());
    }

    #[test]
    fn token_at_start_and_end_needs_no_default_padding() {
        let text = "#lead tail @end";
        let spans = style_spans(text, &PatternSet::new());
        assert_eq!(
            kinds_and_texts(text, &spans),
            [
                (SpanKind::HashTag, "#lead"),
                (SpanKind::Default, " tail "),
                (SpanKind::Mention, "@end"),
            ]
        );
    }
}
