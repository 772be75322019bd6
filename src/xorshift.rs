// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Xorshift1024* generator

use crate::engine::{Engine, EngineCore};
use crate::error::ParseStateError;
use crate::seed::{seed_state, SeedSequence};
#[cfg(feature = "serde1")]
use serde::{de, Deserialize, Deserializer, Serialize};

const MULTIPLIER: u64 = 1181783497276652981;

/// Substituted for the first word if a seed sequence yields all zeros.
const FALLBACK_WORD: u64 = 0x9e37_79b9_7f4a_7c15;

/// Core of the xorshift1024* generator.
///
/// Sixteen 64-bit words used as a circular buffer, with the index `p` of the
/// most recently written word. Output is scrambled by a multiplication.
///
/// The algorithm is from Sebastiano Vigna, [*An experimental exploration of
/// Marsaglia's xorshift generators, scrambled*](
/// https://arxiv.org/abs/1402.6246), ACM TOMS 42(4), 2016.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize))]
pub struct Xorshift1024StarCore {
    s: [u64; 16],
    p: usize,
}

impl EngineCore for Xorshift1024StarCore {
    type Word = u64;
    const DEFAULT_SEED: u64 = 0;
    const NAME: &'static str = "xorshift1024*";
    const STATE_WORDS: usize = 17;

    fn from_sequence<S: SeedSequence + ?Sized>(seq: &mut S) -> Self {
        let mut s = [0u64; 16];
        seed_state(seq, &mut s);
        // Xorshift cannot leave the all-zero state, and seeding cannot fail.
        if s.iter().all(|&x| x == 0) {
            warn!("xorshift1024*: seed sequence produced zero state, using fallback");
            s[0] = FALLBACK_WORD;
        }
        Xorshift1024StarCore { s, p: 0 }
    }

    #[inline]
    fn step(&mut self) -> u64 {
        let s0 = self.s[self.p];
        self.p = (self.p + 1) & 15;
        let mut s1 = self.s[self.p];
        s1 ^= s1 << 31;
        self.s[self.p] = s1 ^ s0 ^ (s1 >> 11) ^ (s0 >> 30);
        self.s[self.p].wrapping_mul(MULTIPLIER)
    }

    fn state(&self) -> Vec<u64> {
        let mut words = self.s.to_vec();
        words.push(self.p as u64);
        words
    }

    fn from_state(words: &[u64]) -> Result<Self, ParseStateError> {
        let p = words[16];
        if p >= 16 {
            return Err(ParseStateError::InvalidState("xorshift1024* index out of range"));
        }
        let mut s = [0u64; 16];
        s.copy_from_slice(&words[..16]);
        if s.iter().all(|&x| x == 0) {
            return Err(ParseStateError::InvalidState("xorshift1024* state is all zero"));
        }
        Ok(Xorshift1024StarCore { s, p: p as usize })
    }
}

// Rejects an out-of-range index and the all-zero state, like `FromStr`.
#[cfg(feature = "serde1")]
impl<'de> Deserialize<'de> for Xorshift1024StarCore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "Xorshift1024StarCore")]
        struct Fields {
            s: [u64; 16],
            p: usize,
        }

        let f = Fields::deserialize(deserializer)?;
        let mut words = f.s.to_vec();
        words.push(f.p as u64);
        Xorshift1024StarCore::from_state(&words).map_err(de::Error::custom)
    }
}

/// The xorshift1024* random number engine.
///
/// Not suitable for cryptographic purposes.
pub type Xorshift1024Star = Engine<Xorshift1024StarCore>;
