// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how events get their numbers.
//!
//! Two deliberately different policies live here. `core` is the 0-100
//! similarity used by live suggestions, where every event's best single field
//! wins. `ranking` is the tiered full-search policy, where the kind of name
//! match dominates and location, tier and number only break in when no name
//! matched. They serve different surfaces and must stay separate.

mod core;
pub mod ranking;

pub use core::*;
