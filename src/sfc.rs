// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Small fast counting (sfc, version 4) engines by Chris Doty-Humphrey.

use crate::engine::{Engine, EngineCore};
use crate::error::ParseStateError;
use crate::seed::{seed_state, SeedSequence};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Steps discarded after every seeding.
const WARM_UP_ROUNDS: usize = 12;

macro_rules! sfc_core {
    (
        $(#[$meta:meta])*
        $Core:ident, $Rng:ident, $word:ty, $name:expr,
        rotate = $rot:expr, rshift = $rshift:expr, lshift = $lshift:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        #[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
        pub struct $Core {
            a: $word,
            b: $word,
            c: $word,
            counter: $word,
        }

        impl $Core {
            fn warmed_up(a: $word, b: $word, c: $word) -> Self {
                let mut core = $Core { a, b, c, counter: 1 };
                for _ in 0..WARM_UP_ROUNDS {
                    core.step();
                }
                core
            }
        }

        impl EngineCore for $Core {
            type Word = $word;
            const DEFAULT_SEED: $word = 0;
            const NAME: &'static str = $name;
            const STATE_WORDS: usize = 4;

            fn from_sequence<S: SeedSequence + ?Sized>(seq: &mut S) -> Self {
                let mut state: [$word; 3] = [0; 3];
                seed_state(seq, &mut state);
                Self::warmed_up(state[0], state[1], state[2])
            }

            /// All three mixing words start out as `seed`.
            fn from_word(seed: $word) -> Self {
                Self::warmed_up(seed, seed, seed)
            }

            #[inline]
            fn step(&mut self) -> $word {
                let tmp = self.a.wrapping_add(self.b).wrapping_add(self.counter);
                self.counter = self.counter.wrapping_add(1);
                self.a = self.b ^ (self.b >> $rshift);
                self.b = self.c.wrapping_add(self.c << $lshift);
                self.c = self.c.rotate_left($rot).wrapping_add(tmp);
                tmp
            }

            fn state(&self) -> Vec<$word> {
                vec![self.a, self.b, self.c, self.counter]
            }

            fn from_state(words: &[$word]) -> Result<Self, ParseStateError> {
                Ok($Core { a: words[0], b: words[1], c: words[2], counter: words[3] })
            }
        }

        $(#[$meta])*
        pub type $Rng = Engine<$Core>;
    };
}

sfc_core!(
    /// The 16-bit small fast counting generator.
    ///
    /// Three mixing words and a counter guaranteeing a period of at least
    /// 2^16. Not suitable for cryptographic purposes.
    Sfc16Core, Sfc16, u16, "sfc16",
    rotate = 7, rshift = 3, lshift = 2
);

sfc_core!(
    /// The 32-bit small fast counting generator.
    ///
    /// Three mixing words and a counter guaranteeing a period of at least
    /// 2^32. Not suitable for cryptographic purposes.
    Sfc32Core, Sfc32, u32, "sfc32",
    rotate = 25, rshift = 8, lshift = 3
);

sfc_core!(
    /// The 64-bit small fast counting generator.
    ///
    /// Three mixing words and a counter guaranteeing a period of at least
    /// 2^64. Not suitable for cryptographic purposes.
    Sfc64Core, Sfc64, u64, "sfc64",
    rotate = 25, rshift = 12, lshift = 3
);
