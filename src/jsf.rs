// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bob Jenkins' small fast generator, 64-bit variant.

use crate::engine::{Engine, EngineCore};
use crate::error::ParseStateError;
use crate::seed::{seed_state, SeedSequence};
#[cfg(feature = "serde1")]
use serde::{de, Deserialize, Deserializer, Serialize};

/// Fixed initial value of the first state word.
const SEED_CONSTANT: u64 = 0xf1ea5eed;

/// Steps discarded after seeding.
const WARM_UP_ROUNDS: usize = 20;

/// Core of the jsf64 generator: four 64-bit words mixed by rotations, one
/// subtraction and three additions per step.
///
/// The first word always starts at `0xf1ea5eed`, so a seeded state is never
/// all zero.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize))]
pub struct Jsf64Core {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
}

impl EngineCore for Jsf64Core {
    type Word = u64;
    const DEFAULT_SEED: u64 = 0;
    const NAME: &'static str = "jsf64";
    const STATE_WORDS: usize = 4;

    fn from_sequence<S: SeedSequence + ?Sized>(seq: &mut S) -> Self {
        let mut state = [0u64; 3];
        seed_state(seq, &mut state);
        let mut core = Jsf64Core {
            a: SEED_CONSTANT,
            b: state[0],
            c: state[1],
            d: state[2],
        };
        for _ in 0..WARM_UP_ROUNDS {
            core.step();
        }
        core
    }

    #[inline]
    fn step(&mut self) -> u64 {
        let e = self.a.wrapping_sub(self.b.rotate_left(7));
        self.a = self.b ^ self.c.rotate_left(13);
        self.b = self.c.wrapping_add(self.d.rotate_left(37));
        self.c = self.d.wrapping_add(e);
        self.d = e.wrapping_add(self.a);
        self.d
    }

    fn state(&self) -> Vec<u64> {
        vec![self.a, self.b, self.c, self.d]
    }

    fn from_state(words: &[u64]) -> Result<Self, ParseStateError> {
        if words.iter().all(|&w| w == 0) {
            return Err(ParseStateError::InvalidState("jsf64 state is all zero"));
        }
        Ok(Jsf64Core { a: words[0], b: words[1], c: words[2], d: words[3] })
    }
}

// Deserialized states go through the same checks as the text form.
#[cfg(feature = "serde1")]
impl<'de> Deserialize<'de> for Jsf64Core {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "Jsf64Core")]
        struct Fields {
            a: u64,
            b: u64,
            c: u64,
            d: u64,
        }

        let f = Fields::deserialize(deserializer)?;
        Jsf64Core::from_state(&[f.a, f.b, f.c, f.d]).map_err(de::Error::custom)
    }
}

/// The jsf64 random number engine.
///
/// Not suitable for cryptographic purposes.
pub type Jsf64 = Engine<Jsf64Core>;
