// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener-facing types: source handles, match categories, payloads.

use taproot_detect::DetectorKind;
use taproot_event_state::tap::Emphasis;

/// Opaque handle identifying the component a tap came from.
///
/// Hosts that embed many labels (list cells, headers) give each one a
/// distinct id and multiplex in the listener; hosts with a single label can
/// ignore it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct SourceId(pub u64);

/// The categories tap resolution can land on, in priority order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchKind {
    /// `@name` mention.
    Mention,
    /// `#topic` hashtag.
    HashTag,
    /// URL.
    Url,
    /// Inline attachment token.
    Attachment,
}

impl MatchKind {
    /// The highlight emphasis this category gets while pressed.
    pub fn emphasis(self) -> Emphasis {
        match self {
            Self::Mention => Emphasis::Mention,
            Self::HashTag | Self::Url | Self::Attachment => Emphasis::Other,
        }
    }
}

/// What a completed tap landed on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TapPayload<'a> {
    /// A pattern-matched token; `text` is the exact matched substring
    /// (sigil included) and `kind` the detector that produced it.
    Text {
        /// The detector category.
        kind: DetectorKind,
        /// The matched substring.
        text: &'a str,
    },
    /// An inline attachment; `payload` is the opaque string the host stored
    /// on it, not display text.
    Attachment {
        /// The attachment's opaque payload.
        payload: &'a str,
    },
}

/// Receiver of completed taps.
///
/// Invoked exactly once per completed (up) gesture and never for
/// down/moved/cancelled/stationary phases. `None` means the tap landed in
/// empty text — callers must treat that as an explicit event, not an error.
/// The listener is borrowed for the duration of one event; the label never
/// owns it.
pub trait TapListener {
    /// A completed tap on `source`.
    fn on_tap(&mut self, source: SourceId, payload: Option<TapPayload<'_>>);
}
