// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack-based 3D transform compositing with transition-aware commits.
//!
//! `strata_core` lets a caller accumulate rotations, scales and translations
//! against a stack of matrices, then write the composed result to a visual
//! element in one atomic *commit*, together with an optional opacity and an
//! animated transition. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   rotate / scale / translate ──► MatrixStack (current frame)
//!                                       │
//!                                       ▼  cumulative = f0 · f1 · … · fn
//!   TransitionOptions ──► TransformStack::commit() ──► RenderTarget
//!                                │                        │
//!                                ▼                        ▼
//!                         Tracer (CommitEvent)     transition-end signal
//!                                                         │
//!                                                         ▼
//!                                                    on_finish()
//! ```
//!
//! **[`transform`]**: Column-major 4×4 [`Transform3d`](transform::Transform3d)
//! with CSS `matrix(...)` / `matrix3d(...)` serialization.
//!
//! **[`axes`]**: [`Axes`](axes::Axes) argument normalization: one scalar for
//! all three axes, or an explicit triple.
//!
//! **[`stack`]**: [`MatrixStack`](stack::MatrixStack) with an auto-vivifying
//! current frame and pure cumulative queries.
//!
//! **[`compositor`]**: [`TransformStack`](compositor::TransformStack), the
//! per-element host, and the commit protocol.
//!
//! **[`options`]**: Persisted [`TransitionOptions`](options::TransitionOptions)
//! and the keyed option surface.
//!
//! **[`timing`]**: CSS timing functions.
//!
//! **[`target`]**: The [`RenderTarget`](target::RenderTarget) trait that
//! platform backends implement.
//!
//! **[`headless`]**: In-memory target for tests and non-visual hosts.
//!
//! **[`transformable`]**: Chaining methods for element wrappers.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and commit events,
//! with zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! **[`error`]**: Errors raised at the configuration boundary.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `serde` (disabled by default): `Deserialize` for the option types.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod axes;
pub mod compositor;
pub mod error;
pub mod headless;
pub mod options;
pub mod stack;
pub mod target;
pub mod timing;
pub mod trace;
pub mod transform;
pub mod transformable;
