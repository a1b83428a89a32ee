// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The component: text ownership, pointer handling, listener dispatch.

use kurbo::Point;
use smallvec::SmallVec;
use taproot_detect::{DetectorKind, MatchSet, PatternSet};
use taproot_event_state::tap::{Emphasis, PointerPhase, TapState};
use taproot_hit::{Hit, TextLayout, resolve_index};
use taproot_text::{AnnotatedText, TextRange};

use crate::types::{MatchKind, SourceId, TapListener, TapPayload};

/// A tap-detecting annotated text component.
///
/// Owns the current text, the range sets derived from it, and the single
/// active tap session. The host owns layout and painting; this type owns
/// deciding *what* was tapped and *which* range is highlighted.
///
/// All methods are main-thread, synchronous, and non-blocking. Time enters
/// only as caller-supplied millisecond timestamps.
pub struct TapLabel {
    source: SourceId,
    patterns: PatternSet,
    text: AnnotatedText,
    matches: MatchSet,
    attachment_ranges: SmallVec<[TextRange; 2]>,
    taps: TapState,
}

impl core::fmt::Debug for TapLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TapLabel")
            .field("source", &self.source)
            .field("text_len", &self.text.len())
            .field("highlighted", &self.taps.is_highlighted())
            .finish_non_exhaustive()
    }
}

impl TapLabel {
    /// Create a label with the default detectors and empty text.
    pub fn new(source: SourceId) -> Self {
        Self::with_patterns(source, PatternSet::new())
    }

    /// Create a label with an explicit pattern registry.
    pub fn with_patterns(source: SourceId, patterns: PatternSet) -> Self {
        Self {
            source,
            patterns,
            text: AnnotatedText::default(),
            matches: MatchSet::default(),
            attachment_ranges: SmallVec::new(),
            taps: TapState::new(),
        }
    }

    /// The handle this label reports taps under.
    pub fn source(&self) -> SourceId {
        self.source
    }

    /// The current text.
    pub fn text(&self) -> &AnnotatedText {
        &self.text
    }

    /// The pattern registry.
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Replace the pattern registry and re-extract against the current text.
    pub fn set_patterns(&mut self, patterns: PatternSet) {
        self.patterns = patterns;
        self.matches = self.patterns.extract(self.text.text());
    }

    /// The match ranges derived from the current text.
    pub fn matches(&self) -> &MatchSet {
        &self.matches
    }

    /// Assign new text and recompute every derived range set in full.
    ///
    /// Pattern categories are re-extracted in their fixed order and the
    /// attachment ranges are re-scanned from the text's structural
    /// attachments. Any active tap session is discarded — ranges from the
    /// previous text are never consulted again.
    pub fn set_text(&mut self, text: AnnotatedText) {
        self.matches = self.patterns.extract(text.text());
        self.attachment_ranges = text.attachments().iter().map(|a| a.range).collect();
        self.text = text;
        self.taps = TapState::new();
    }

    /// The currently highlighted range and its emphasis, if any.
    pub fn active_highlight(&self) -> Option<(TextRange, Emphasis)> {
        self.taps.active().map(|h| (h.range, h.emphasis))
    }

    /// Expire due un-highlight deadlines. Returns `true` when the highlight
    /// reverted, i.e. the host should repaint.
    pub fn poll(&mut self, now: u64) -> bool {
        self.taps.poll(now).is_some()
    }

    /// Earliest pending un-highlight deadline, for hosts that schedule a
    /// wake-up instead of polling every frame.
    pub fn next_deadline(&self) -> Option<u64> {
        self.taps.next_deadline()
    }

    /// Feed one pointer event.
    ///
    /// Returns whether the event was intercepted (the point lies inside the
    /// laid-out glyph box), which hosts use to suppress their default text
    /// handling. Listener dispatch happens only on [`PointerPhase::Up`]:
    /// with the matched payload, or with `None` for a tap in empty text.
    /// Cancelled and stationary phases revert the highlight immediately and
    /// notify nobody.
    pub fn on_pointer<L, T>(
        &mut self,
        phase: PointerPhase,
        point: Point,
        now: u64,
        layout: &L,
        listener: &mut T,
    ) -> bool
    where
        L: TextLayout + ?Sized,
        T: TapListener + ?Sized,
    {
        let inside = layout.glyph_bounds().contains(point);
        let hit = if inside {
            layout
                .char_index_at(point)
                .and_then(|idx| self.resolve_hit(idx))
        } else {
            None
        };

        match phase {
            PointerPhase::Down | PointerPhase::Moved => {
                if let Some(hit) = hit {
                    self.taps.begin(hit.range, hit.kind.emphasis());
                }
                inside
            }
            PointerPhase::Up => {
                let payload = hit.and_then(|h| self.payload_for(h));
                listener.on_tap(self.source, payload);
                self.taps.release(now);
                inside
            }
            PointerPhase::Cancelled | PointerPhase::Stationary => {
                self.taps.cancel();
                false
            }
        }
    }

    /// Resolve a character index against the range sets in priority order.
    fn resolve_hit(&self, idx: usize) -> Option<Hit<MatchKind>> {
        resolve_index(
            idx,
            [
                (MatchKind::Mention, self.matches.mentions()),
                (MatchKind::HashTag, self.matches.hashtags()),
                (MatchKind::Url, self.matches.urls()),
                (MatchKind::Attachment, self.attachment_ranges.as_slice()),
            ],
        )
    }

    /// Build the listener payload for a resolved hit.
    ///
    /// A range that no longer maps to a substring or attachment (which would
    /// take a host mutating text behind our back) degrades to `None` — an
    /// empty-area tap — rather than panicking.
    fn payload_for(&self, hit: Hit<MatchKind>) -> Option<TapPayload<'_>> {
        let payload = match hit.kind {
            MatchKind::Mention => self.text.substring(hit.range).map(|text| TapPayload::Text {
                kind: DetectorKind::Mention,
                text,
            }),
            MatchKind::HashTag => self.text.substring(hit.range).map(|text| TapPayload::Text {
                kind: DetectorKind::HashTag,
                text,
            }),
            MatchKind::Url => self.text.substring(hit.range).map(|text| TapPayload::Text {
                kind: DetectorKind::Url,
                text,
            }),
            MatchKind::Attachment => self
                .text
                .attachments()
                .iter()
                .find(|a| a.range == hit.range)
                .map(|a| TapPayload::Attachment {
                    payload: &a.payload,
                }),
        };
        if payload.is_none() {
            log::warn!(
                "resolved hit at {:?} has no backing content; reporting empty-area tap",
                hit.range
            );
        }
        payload
    }
}
