// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owning annotated-text model.

use alloc::string::String;
use smallvec::SmallVec;

use crate::TextRange;

/// An inline non-text token embedded in the text (for example a user chip).
///
/// Attachments are structural: they come from whoever assembled the text,
/// never from pattern matching. The `payload` is opaque to Taproot — a user
/// identifier, a URL, whatever the host wants handed back on tap.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attachment {
    /// The byte range the token occupies in the text.
    pub range: TextRange,
    /// Opaque payload reported to the listener instead of matched text.
    pub payload: String,
}

/// A displayable string plus its inline attachments.
///
/// The hosting component owns exactly one of these at a time. All derived
/// data (match ranges, attachment ranges) is recomputed from scratch when a
/// new `AnnotatedText` is assigned, so nothing here tracks edits.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AnnotatedText {
    text: String,
    attachments: SmallVec<[Attachment; 2]>,
}

impl AnnotatedText {
    /// Create an annotated text with no attachments.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachments: SmallVec::new(),
        }
    }

    /// Append an inline attachment.
    ///
    /// Ranges that fall outside the text or off a UTF-8 boundary are kept as
    /// given; they simply never produce a substring and never win a hit, so
    /// a sloppy host degrades to "no match" rather than a panic.
    pub fn push_attachment(&mut self, range: TextRange, payload: impl Into<String>) {
        self.attachments.push(Attachment {
            range,
            payload: payload.into(),
        });
    }

    /// Builder-style variant of [`AnnotatedText::push_attachment`].
    #[must_use]
    pub fn with_attachment(mut self, range: TextRange, payload: impl Into<String>) -> Self {
        self.push_attachment(range, payload);
        self
    }

    /// The plain text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The inline attachments, in insertion order.
    #[inline]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// The substring a range denotes, or `None` if the range is out of
    /// bounds or not on UTF-8 boundaries.
    pub fn substring(&self, range: TextRange) -> Option<&str> {
        self.text.get(range.start..range.end())
    }

    /// The payload of the first attachment whose range contains `idx`
    /// (closed-interval, matching the hit resolver's containment).
    pub fn attachment_payload_at(&self, idx: usize) -> Option<&str> {
        self.attachments
            .iter()
            .find(|a| a.range.contains_inclusive(idx))
            .map(|a| a.payload.as_str())
    }
}
