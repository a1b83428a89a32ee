// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted tap session against a `TapLabel`.
//!
//! This example shows how to combine:
//! - `taproot_detect` for mention/hashtag/URL extraction,
//! - `taproot_hit` for pointer-to-range resolution via a host layout,
//! - `taproot_label` for listener dispatch and highlight state.
//!
//! The "layout engine" here is a fixed-advance stub standing in for a real
//! text stack; a production host would back [`TextLayout`] with its shaping
//! and line-breaking machinery.
//!
//! Run:
//! - `cargo run -p taproot_demos --example label_tap`

use kurbo::{Point, Rect};
use taproot_hit::TextLayout;
use taproot_label::{
    PointerPhase, SourceId, TapLabel, TapListener, TapPayload, style_spans,
};
use taproot_text::{AnnotatedText, TextRange};

/// Fixed-advance single-line layout: byte `i` spans x = 8i..8(i+1).
struct MonoLayout {
    bytes: usize,
}

impl TextLayout for MonoLayout {
    fn glyph_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.bytes as f64 * 8.0, 16.0)
    }

    fn char_index_at(&self, pt: Point) -> Option<usize> {
        self.glyph_bounds()
            .contains(pt)
            .then(|| (pt.x / 8.0) as usize)
    }
}

/// Listener that narrates every completed tap.
struct Narrator;

impl TapListener for Narrator {
    fn on_tap(&mut self, source: SourceId, payload: Option<TapPayload<'_>>) {
        match payload {
            Some(TapPayload::Text { kind, text }) => {
                println!("  tap on {source:?}: {kind:?} {text:?}");
            }
            Some(TapPayload::Attachment { payload }) => {
                println!("  tap on {source:?}: attachment payload {payload:?}");
            }
            None => println!("  tap on {source:?}: empty area"),
        }
    }
}

fn main() {
    let text = "hello @john check #swift http://example.com \u{fffc}";
    let mut label = TapLabel::new(SourceId(1));
    label.set_text(
        AnnotatedText::new(text)
            // The object-replacement character at the end is a user chip.
            .with_attachment(TextRange::new(44, 3), "user:42"),
    );
    let layout = MonoLayout { bytes: text.len() };

    println!("text: {text:?}\n");

    println!("style spans:");
    for span in style_spans(text, label.patterns()) {
        let slice = &text[span.range.start..span.range.end()];
        println!("  {:?}  {slice:?}", span.kind);
    }

    // Center of byte index `i` in layout space.
    let at = |idx: usize| Point::new(idx as f64 * 8.0 + 4.0, 8.0);
    let mut listener = Narrator;
    let mut now = 0;

    let script: &[(&str, PointerPhase, Point)] = &[
        ("press the mention", PointerPhase::Down, at(8)),
        ("release on it", PointerPhase::Up, at(8)),
        ("press the url", PointerPhase::Down, at(30)),
        ("gesture cancelled", PointerPhase::Cancelled, at(30)),
        ("tap the user chip", PointerPhase::Up, at(45)),
        ("tap plain text", PointerPhase::Up, at(2)),
    ];

    println!("\npointer session:");
    for (what, phase, pt) in script {
        now += 100;
        println!("{what} ({phase:?} @ x={:.0}, t={now}ms)", pt.x);
        let intercepted = label.on_pointer(*phase, *pt, now, &layout, &mut listener);
        match label.active_highlight() {
            Some((range, emphasis)) => {
                println!("  intercepted={intercepted} highlight={range:?} ({emphasis:?})");
            }
            None => println!("  intercepted={intercepted} no highlight"),
        }
        // A real host would schedule this off `label.next_deadline()`.
        if label.poll(now + 300) {
            println!("  highlight reverted after delay");
        }
    }
}
