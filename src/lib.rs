// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Small fast bit-mixing random number engines and standard normal
//! samplers.
//!
//! # Engines
//!
//! - [`Sfc16`], [`Sfc32`], [`Sfc64`]: Chris Doty-Humphrey's small fast
//!   counting generators. A counter in the state guarantees a minimum
//!   period. Recommended for general use.
//! - [`Jsf64`]: Bob Jenkins' small fast generator.
//! - [`Xorshift1024Star`]: Sebastiano Vigna's xorshift1024* with 1024 bits
//!   of state.
//!
//! None of these are cryptographically secure: their output can be predicted
//! from a few observed samples.
//!
//! Every engine is an [`Engine`] wrapping an [`EngineCore`], and offers the
//! same interface: construction from a default seed, a single word or a
//! [`SeedSequence`]; [`generate`](Engine::generate) and
//! [`discard`](Engine::discard); equality; a text form through `Display` and
//! `FromStr`; and the [`RngCore`] and [`SeedableRng`] traits, so engines work
//! with everything in the `rand` ecosystem.
//!
//! Generation is a deterministic function of state: identically seeded
//! engines produce identical sequences on every platform.
//!
//! # Seeding
//!
//! [`SeedSeq`] is the standard multi-word seed sequence, bit-compatible with
//! the C++ `std::seed_seq`. [`seed_state`] fills state words of any unsigned
//! width from a seed sequence.
//!
//! ```
//! use rand_mix::{SeedSeq, Sfc32, Xorshift1024Star};
//!
//! let a = Sfc32::with_seed(42);
//! let b = Xorshift1024Star::from_seed_sequence(&mut SeedSeq::new(&[1, 2, 3]));
//! # let _ = (a, b);
//! ```
//!
//! # Normal samplers
//!
//! - [`generate_normal`]: ratio-of-uniforms with quadratic squeeze, for
//!   `f32` or `f64`.
//! - [`ZigguratNormal`]: 128-layer ziggurat, a [`Distribution`] over `f32`
//!   and `f64`.
//!
//! Both work with any [`RngCore`].
//!
//! # Crate features
//!
//! - `serde1`: `Serialize`/`Deserialize` for all engines.
//! - `log`: trace seeding through the `log` crate.
//!
//! [`RngCore`]: rand_core::RngCore
//! [`SeedableRng`]: rand_core::SeedableRng
//! [`Distribution`]: rand::distributions::Distribution

#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
       html_favicon_url = "https://www.rust-lang.org/favicon.ico",
       html_root_url = "https://docs.rs/rand_mix/0.1.0")]

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::unreadable_literal, clippy::excessive_precision)]

#[macro_use]
mod log_macros;

pub mod engine;
mod error;
mod jsf;
mod normal;
pub mod seed;
mod sfc;
mod utils;
mod xorshift;
mod ziggurat;
mod ziggurat_tables;

pub use rand_core;

pub use engine::{Engine, EngineCore};
pub use error::ParseStateError;
pub use jsf::{Jsf64, Jsf64Core};
pub use normal::generate_normal;
pub use seed::{seed_state, SeedSeq, SeedSequence, Word};
pub use sfc::{Sfc16, Sfc16Core, Sfc32, Sfc32Core, Sfc64, Sfc64Core};
pub use utils::Float;
pub use xorshift::{Xorshift1024Star, Xorshift1024StarCore};
pub use ziggurat::ZigguratNormal;
