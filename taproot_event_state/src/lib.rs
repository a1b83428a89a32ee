// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event-state helpers for tap interactions on annotated text.
//!
//! The [`tap`] module tracks the transient highlight between finger-down and
//! finger-up: which range is emphasized, and when a released highlight should
//! revert. Like the rest of Taproot, it owns no clock and no thread — the
//! host passes timestamps in and polls deadlines out.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod tap;
