// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolve a pointer position to the matched text range whose action should
//! fire.
//!
//! This crate does no text layout and no pattern matching. It takes the two
//! facts the host's layout engine can supply — the union bounding box of the
//! laid-out glyphs and a point→character-index mapping — plus the per-category
//! range sets computed by `taproot_detect`, and answers "which range, if any,
//! is under this point".
//!
//! ## Algorithm
//!
//! 1. Cheap reject: a point outside [`TextLayout::glyph_bounds`] never
//!    matches, regardless of ranges.
//! 2. Resolve the point to a character index via
//!    [`TextLayout::char_index_at`].
//! 3. Test the index against each category's ranges in the caller-supplied
//!    priority order; the first containing range wins.
//!
//! Containment is the closed interval `[start, start + len]` — both ends
//! inclusive ([`TextRange::contains_inclusive`]). The component this stack
//! was derived from accepted the glyph just past a match as a hit on it, and
//! that trailing-edge tolerance is preserved rather than silently corrected
//! to a half-open test.
//!
//! ## Priority order
//!
//! Callers pass categories in the order ties should resolve. The tap label
//! passes **Mention → HashTag → Url → Attachment**; nothing in this crate
//! hard-codes that, so tests and other hosts can exercise any order.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use taproot_hit::{TextLayout, resolve};
//! use taproot_text::TextRange;
//!
//! // A toy layout: one line of 10px-advance glyphs.
//! struct Mono(usize);
//! impl TextLayout for Mono {
//!     fn glyph_bounds(&self) -> Rect {
//!         Rect::new(0.0, 0.0, self.0 as f64 * 10.0, 16.0)
//!     }
//!     fn char_index_at(&self, pt: Point) -> Option<usize> {
//!         self.glyph_bounds().contains(pt).then(|| (pt.x / 10.0) as usize)
//!     }
//! }
//!
//! let mentions = [TextRange::new(0, 5)];
//! let hit = resolve(
//!     &Mono(11),
//!     Point::new(25.0, 8.0),
//!     [("mention", &mentions[..])],
//! );
//! assert_eq!(hit.unwrap().range, TextRange::new(0, 5));
//! ```
//!
//! This crate is `no_std` capable; enable the `std` or `libm` feature for
//! the corresponding [`kurbo`] float support.

#![no_std]

use kurbo::{Point, Rect};
use taproot_text::TextRange;

/// The layout facts a host text engine supplies for hit resolution.
///
/// Implemented by whatever owns the laid-out glyphs — a label widget, a test
/// stub, an editor view. Substring extraction for a resolved range lives on
/// `taproot_text::AnnotatedText`, not here.
pub trait TextLayout {
    /// Union bounding box of all laid-out glyphs, in the same coordinate
    /// space as the pointer events.
    fn glyph_bounds(&self) -> Rect;

    /// The character index under `pt`, or `None` when the layout cannot
    /// resolve one (e.g. no glyphs).
    fn char_index_at(&self, pt: Point) -> Option<usize>;
}

/// A resolved hit: the winning category and the range that contained the
/// index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hit<K> {
    /// The category the winning range belongs to.
    pub kind: K,
    /// The containing range.
    pub range: TextRange,
}

/// Resolve `pt` to a character index, applying the cheap bounding-box
/// reject first.
///
/// Returns `None` for points outside [`TextLayout::glyph_bounds`] without
/// consulting the layout's index mapping.
pub fn index_at<L: TextLayout + ?Sized>(layout: &L, pt: Point) -> Option<usize> {
    if !layout.glyph_bounds().contains(pt) {
        return None;
    }
    layout.char_index_at(pt)
}

/// Test a character index against categories in priority order.
///
/// The first range (scanning categories first, then ranges within a
/// category in order) whose closed interval contains `idx` wins.
pub fn resolve_index<'r, K>(
    idx: usize,
    categories: impl IntoIterator<Item = (K, &'r [TextRange])>,
) -> Option<Hit<K>> {
    for (kind, ranges) in categories {
        for range in ranges {
            if range.contains_inclusive(idx) {
                return Some(Hit {
                    kind,
                    range: *range,
                });
            }
        }
    }
    None
}

/// Resolve a pointer position against categories in priority order.
///
/// Composes [`index_at`] and [`resolve_index`]; "no match" covers both a
/// point outside the glyph box and an index no range contains.
pub fn resolve<'r, K, L: TextLayout + ?Sized>(
    layout: &L,
    pt: Point,
    categories: impl IntoIterator<Item = (K, &'r [TextRange])>,
) -> Option<Hit<K>> {
    let idx = index_at(layout, pt)?;
    resolve_index(idx, categories)
}
