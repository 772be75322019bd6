// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `EngineCore` trait and the generic [`Engine`] wrapper.
//!
//! An engine is split in two parts. The *core* implements only what differs
//! between algorithms: how state is filled from a seed, the single mixing
//! step, and the field order of its state. [`Engine`] wraps any core and
//! provides everything else uniformly: construction and reseeding, `discard`,
//! comparison, text serialization, and the [`RngCore`] and [`SeedableRng`]
//! interfaces.
//!
//! # Example
//!
//! ```
//! use rand_mix::{SeedSeq, Sfc64};
//!
//! let mut rng = Sfc64::new();
//! assert_eq!(rng.generate(), 6361293506195189846);
//!
//! let mut copy = rng.clone();
//! copy.discard(10);
//! assert_ne!(rng, copy);
//!
//! let mut seq = SeedSeq::new(&[1, 2, 3]);
//! rng.reseed_with(&mut seq);
//! let restored: Sfc64 = rng.to_string().parse().unwrap();
//! assert_eq!(rng, restored);
//! ```

use crate::error::ParseStateError;
use crate::seed::{SeedSeq, SeedSequence, Word};
use core::fmt;
use core::str::FromStr;
use rand_core::{impls, le, Error, RngCore, SeedableRng};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// The algorithm-specific part of an engine.
///
/// See the [module][crate::engine] documentation for details.
pub trait EngineCore: Clone + Eq {
    /// State and output word.
    type Word: Word;

    /// Seed used by [`Engine::new`] and [`Engine::seed`].
    const DEFAULT_SEED: Self::Word;

    /// Human-readable algorithm name, used in log messages.
    const NAME: &'static str;

    /// Number of words in the serialized state.
    const STATE_WORDS: usize;

    /// Build a fresh state from a seed sequence.
    ///
    /// Implementations may run warm-up rounds after filling the state.
    fn from_sequence<S: SeedSequence + ?Sized>(seq: &mut S) -> Self;

    /// Build a fresh state from a single word.
    ///
    /// The default wraps `seed` in the one-element [`SeedSeq::from_word`],
    /// so seeding by value and by that sequence give the same state.
    fn from_word(seed: Self::Word) -> Self {
        Self::from_sequence(&mut SeedSeq::from_word(seed))
    }

    /// Advance the state by one step and return the new output.
    fn step(&mut self) -> Self::Word;

    /// The complete state, `STATE_WORDS` long, in serialization order.
    fn state(&self) -> Vec<Self::Word>;

    /// Restore a state previously returned by [`EngineCore::state`].
    ///
    /// `words` always holds exactly `STATE_WORDS` words.
    fn from_state(words: &[Self::Word]) -> Result<Self, ParseStateError>;
}

/// A random number engine built from an [`EngineCore`].
///
/// Two engines compare equal iff their cores hold identical state, including
/// indices and counters. The text form written by `Display` lists the state
/// words in decimal, separated by spaces, and is read back by `FromStr`.
///
/// Engines are not cryptographically secure.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Engine<C> {
    core: C,
}

impl<C: EngineCore + fmt::Debug> fmt::Debug for Engine<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Engine").field("core", &self.core).finish()
    }
}

impl<C: EngineCore> Engine<C> {
    /// Smallest value returned by [`Engine::generate`].
    pub const MIN: C::Word = <C::Word as Word>::ZERO;

    /// Largest value returned by [`Engine::generate`].
    pub const MAX: C::Word = <C::Word as Word>::MAX;

    /// Create an engine seeded with the core's default seed.
    pub fn new() -> Self {
        Self::with_seed(C::DEFAULT_SEED)
    }

    /// Create an engine seeded with a single word.
    pub fn with_seed(seed: C::Word) -> Self {
        trace!("seeding {} from word {}", C::NAME, seed);
        Engine { core: C::from_word(seed) }
    }

    /// Create an engine seeded from a seed sequence.
    pub fn from_seed_sequence<S: SeedSequence + ?Sized>(seq: &mut S) -> Self {
        trace!("seeding {} from seed sequence", C::NAME);
        Engine { core: C::from_sequence(seq) }
    }

    /// Wrap an existing core.
    pub fn from_core(core: C) -> Self {
        Engine { core }
    }

    /// Reset to the default seed.
    pub fn seed(&mut self) {
        *self = Self::new();
    }

    /// Replace the whole state by one seeded from `seed`.
    pub fn reseed(&mut self, seed: C::Word) {
        *self = Self::with_seed(seed);
    }

    /// Replace the whole state by one seeded from `seq`.
    pub fn reseed_with<S: SeedSequence + ?Sized>(&mut self, seq: &mut S) {
        *self = Self::from_seed_sequence(seq);
    }

    /// Advance by one step and return the output word.
    #[inline]
    pub fn generate(&mut self) -> C::Word {
        self.core.step()
    }

    /// Advance by `n` steps, dropping the outputs.
    ///
    /// Equivalent to calling [`Engine::generate`] `n` times.
    pub fn discard(&mut self, n: u64) {
        for _ in 0..n {
            self.core.step();
        }
    }

    /// Smallest possible output, always zero.
    #[inline]
    pub fn min() -> C::Word {
        Self::MIN
    }

    /// Largest possible output, the all-ones word.
    #[inline]
    pub fn max() -> C::Word {
        Self::MAX
    }

    /// The wrapped core.
    pub fn core(&self) -> &C {
        &self.core
    }

    /// Collect at least `bits` output bits, least significant word first.
    #[inline(always)]
    fn next_bits(&mut self, bits: u32) -> u64 {
        let width = <C::Word as Word>::BITS;
        if width >= bits {
            return self.core.step().widen();
        }
        let mut x = 0;
        let mut shift = 0;
        while shift < bits {
            x |= self.core.step().widen() << shift;
            shift += width;
        }
        x
    }
}

impl<C: EngineCore> Default for Engine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: EngineCore> RngCore for Engine<C> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_bits(32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_bits(64)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<C: EngineCore> SeedableRng for Engine<C> {
    type Seed = [u8; 32];

    /// The seed is read as eight little-endian `u32` words which become the
    /// entropy of a [`SeedSeq`].
    fn from_seed(seed: Self::Seed) -> Self {
        let mut entropy = [0u32; 8];
        le::read_u32_into(&seed, &mut entropy);
        Self::from_seed_sequence(&mut SeedSeq::new(&entropy))
    }

    /// Seed from the [`SeedSeq`] holding the low and high halves of `state`.
    fn seed_from_u64(state: u64) -> Self {
        let halves = [state as u32, (state >> 32) as u32];
        Self::from_seed_sequence(&mut SeedSeq::new(&halves))
    }
}

impl<C: EngineCore> fmt::Display for Engine<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = self.core.state();
        let mut words = state.iter();
        if let Some(first) = words.next() {
            write!(f, "{}", first)?;
        }
        for word in words {
            write!(f, " {}", word)?;
        }
        Ok(())
    }
}

impl<C: EngineCore> FromStr for Engine<C> {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let mut words = Vec::with_capacity(C::STATE_WORDS);
        for index in 0..C::STATE_WORDS {
            let token = tokens.next().ok_or(ParseStateError::MissingWord {
                expected: C::STATE_WORDS,
                found: index,
            })?;
            let word = token
                .parse::<C::Word>()
                .map_err(|_| ParseStateError::InvalidWord { index })?;
            words.push(word);
        }
        if tokens.next().is_some() {
            return Err(ParseStateError::TrailingInput);
        }
        C::from_state(&words).map(Engine::from_core)
    }
}
