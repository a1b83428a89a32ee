// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range extraction on its own: run the detectors over a few posts.
//!
//! Shows the `taproot_detect` layer without any layout or pointer plumbing,
//! including a registered custom detector and the contained failure mode for
//! a malformed one.
//!
//! Run:
//! - `cargo run -p taproot_demos --example detect_report`

use taproot_detect::{DetectorKind, MatchSet, PatternSet, extract_matches};

fn report(text: &str, matches: &MatchSet) {
    println!("\n== {text:?}");
    for (name, ranges) in [
        ("mention", matches.mentions()),
        ("hashtag", matches.hashtags()),
        ("url", matches.urls()),
    ] {
        for r in ranges {
            println!("  {name:8} {:2}..{:<2} {:?}", r.start, r.end(), &text[r.start..r.end()]);
        }
    }
    for custom in matches.customs() {
        for r in custom.ranges() {
            println!(
                "  custom   {:2}..{:<2} {:?} (pattern {:?})",
                r.start,
                r.end(),
                &text[r.start..r.end()],
                custom.pattern()
            );
        }
    }
}

fn main() {
    let mut patterns = PatternSet::new();
    patterns
        .add_custom(r"\bISSUE-\d+\b")
        .expect("issue pattern is valid");

    // A malformed custom detector is reported and dropped; extraction below
    // is unaffected.
    if let Err(err) = patterns.add_custom("([unclosed") {
        println!("rejected: {err}");
    }

    for text in [
        "hello @john check #swift http://example.com",
        "release notes: fixes ISSUE-12 and issue-7, see www.example.org (thanks @maria!)",
        "#lead tag, trailing mention @end",
        "",
    ] {
        report(text, &patterns.extract(text));
    }

    // The single-kind contract compiles on the fly; handy for one-off scans.
    let one_off = extract_matches("ping @ada", &DetectorKind::Mention);
    println!("\none-off mention ranges: {one_off:?}");
}
