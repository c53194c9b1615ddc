//! `toggle_core` is a common library to build toggle SDKs for different languages. If you're
//! looking to evaluate feature toggles in an application, you probably want one of the SDKs built
//! on top of it.
//!
//! # Overview
//!
//! `toggle_core` is organized as a set of building blocks that help to build toggle SDKs. The
//! network layer (fetching toggle definitions, metrics, registration) lives in the SDKs; this
//! crate is the deterministic heart they all share, so that independent clients evaluating the
//! same rollout for the same identity reach the same decision.
//!
//! [`Context`] describes the subject a toggle decision is made for: user id, session id, IP
//! address, environment, and arbitrary custom string properties. Hostname is stored as a custom
//! property under a reserved key, so it shares the lookup path of other custom attributes.
//!
//! [`ContextResolver`] turns a field name into the single string value that strategies key
//! on. Resolution is total: every field name yields either a value or "absent", never an
//! error. Ambient fallbacks (the process session id, the peer address, the machine hostname) come
//! from an injected [`Ambient`](ambient::Ambient) accessor, so resolution stays testable with
//! fixed values.
//!
//! [`stickiness`] computes the bucket an identity falls into for a rollout group. The hash scheme
//! (MurmurHash3 x86 32-bit, seed 0, over `groupId:identity`) is a cross-implementation contract
//! and must not change.
//!
//! [`eval`] builds the two standard decisions on top of bucketing: gradual rollout enablement and
//! weighted variant selection.
//!
//! Because all of these are pure functions over in-memory data, nothing here blocks, performs
//! I/O, or needs synchronization beyond what callers impose on a shared mutable [`Context`].
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum. Only the fail-fast custom-property accessors can
//! fail; resolution and bucketing are total, so "field not supplied" is a normal branch for
//! strategy code, not an exceptional one.
//!
//! # Logging
//!
//! The crate uses the [`log`](https://docs.rs/log/latest/log/) crate and traces rollout and
//! variant decisions under the `toggle` target. Consider integrating a `log`-compatible logger
//! implementation for better visibility into SDK operations.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

pub mod ambient;
pub mod eval;
pub mod stickiness;

mod context;
mod error;
mod resolver;

pub use context::Context;
pub use error::{Error, Result};
pub use resolver::{context_field, ContextResolver};
