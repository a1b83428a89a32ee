// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tap-detecting annotated text component.
//!
//! ## Overview
//!
//! [`TapLabel`] ties the Taproot layers together for a hosting text widget:
//! it owns the current [`AnnotatedText`](taproot_text::AnnotatedText), the
//! match ranges derived from it, and the single tap-session highlight. The
//! host feeds it two things — text assignments and pointer events — and gets
//! back tap notifications on one [`TapListener`] plus a highlight to paint.
//!
//! ## Data flow
//!
//! 1. [`TapLabel::set_text`] recomputes every category's ranges in full
//!    (mention, hashtag, URL by pattern; attachments structurally). Nothing
//!    is patched incrementally, so stale ranges can never be consulted.
//! 2. Each pointer event is resolved through the host's
//!    [`TextLayout`](taproot_hit::TextLayout) and the range sets, in the
//!    fixed priority order **Mention → HashTag → Url → Attachment**.
//! 3. Down/moved inside a match highlights it; up dispatches exactly one
//!    [`TapListener::on_tap`] — with the matched payload, or with `None` for
//!    a tap in empty text, which is an event in its own right, not an error.
//!
//! Custom detectors registered on the [`PatternSet`](taproot_detect::PatternSet)
//! are extracted and exposed via [`TapLabel::matches`] for host-side use
//! (styling, counting), but do not participate in tap resolution; the
//! priority order above is closed.
//!
//! ## Listener shape
//!
//! One capability trait with a discriminated payload replaces per-caller-type
//! delegate methods: the listener receives the originating [`SourceId`] and a
//! [`TapPayload`], and multiplexes however it likes.
//!
//! ## Styling
//!
//! [`style_spans`] produces a whole-text covering of
//! [`StyleSpan`]s (default/mention/hashtag/url) so a host can build its
//! styled representation in one pass; the active tap highlight is exposed
//! separately via [`TapLabel::active_highlight`].

mod label;
mod spans;
mod types;

pub use label::TapLabel;
pub use spans::{SpanKind, StyleSpan, style_spans};
pub use types::{MatchKind, SourceId, TapListener, TapPayload};

pub use taproot_event_state::tap::{Emphasis, PointerPhase};
