// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for strata.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomTarget`]: commits to an `HtmlElement`'s inline style and waits on
//!   its `transitionend` event

#![no_std]

extern crate alloc;

mod dom;

pub use dom::DomTarget;
pub use strata_core::target::RenderTarget;
