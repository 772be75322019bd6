// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Seed sequences and the routine filling engine state from them.
//!
//! A [`SeedSequence`] expands a small amount of entropy into an arbitrarily
//! long stream of `u32` words. [`seed_state`] turns such a stream into state
//! words of any unsigned width, which is how every engine in this crate is
//! seeded.
//!
//! [`SeedSeq`] is the standard multi-word sequence. Its output is identical
//! to that of the C++ `std::seed_seq`, so engine states seeded here can be
//! reproduced by other implementations of the same algorithms.

use core::{cmp, fmt};
use core::str::FromStr;

mod private {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An unsigned integer usable as an engine state or output word.
///
/// This trait is sealed: state words are always one of `u8`, `u16`, `u32`
/// or `u64`. Seeding signed or floating-point state is rejected at compile
/// time.
pub trait Word:
    Copy + Eq + Default + fmt::Debug + fmt::Display + FromStr + private::Sealed
{
    /// Width of the word in bits.
    const BITS: u32;
    /// The zero word, also the smallest value.
    const ZERO: Self;
    /// The all-ones word.
    const MAX: Self;

    /// Keep the low `BITS` bits of `x`.
    fn truncate(x: u64) -> Self;

    /// Zero-extend to `u64`.
    fn widen(self) -> u64;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {$(
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;
            const MAX: Self = <$ty>::MAX;

            #[inline(always)]
            fn truncate(x: u64) -> Self {
                x as $ty
            }

            #[inline(always)]
            fn widen(self) -> u64 {
                u64::from(self)
            }
        }
    )*}
}

impl_word!(u8, u16, u32, u64);

/// Number of 32-bit blocks combined into one word of type `W`.
#[inline]
pub(crate) fn blocks_per_word<W: Word>() -> usize {
    ((W::BITS + 31) / 32) as usize
}

/// A source of seed material.
///
/// Implementors expand whatever entropy they were constructed from into
/// `dest.len()` words. The output must be a pure function of the sequence's
/// construction arguments and the requested length.
pub trait SeedSequence {
    /// Fill `dest` with 32-bit seed words.
    fn generate(&mut self, dest: &mut [u32]);
}

impl<S: SeedSequence + ?Sized> SeedSequence for &mut S {
    #[inline]
    fn generate(&mut self, dest: &mut [u32]) {
        (**self).generate(dest)
    }
}

const INITIAL_FILL: u32 = 0x8b8b_8b8b;
const MULTIPLIER_1: u32 = 1_664_525;
const MULTIPLIER_2: u32 = 1_566_083_941;

#[inline(always)]
fn mix(x: u32) -> u32 {
    x ^ (x >> 27)
}

/// The standard multi-word seed sequence.
///
/// Stores the entropy words it is given and spreads them over any number of
/// output words. Output is bit-identical to the C++ `std::seed_seq`.
///
/// ```
/// use rand_mix::{SeedSeq, SeedSequence};
///
/// let mut seq = SeedSeq::new(&[1, 2, 3]);
/// let mut words = [0u32; 4];
/// seq.generate(&mut words);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSeq {
    v: Vec<u32>,
}

impl SeedSeq {
    /// Create a sequence from the given entropy words.
    pub fn new(entropy: &[u32]) -> SeedSeq {
        SeedSeq { v: entropy.to_vec() }
    }

    /// Create the one-element sequence used for seeding with the single word
    /// `seed`.
    ///
    /// Entropy words are 32 bits wide, so only the low 32 bits of a `u64`
    /// seed are kept, exactly as a C++ `std::seed_seq{s}` does.
    pub fn from_word<W: Word>(seed: W) -> SeedSeq {
        SeedSeq { v: vec![seed.widen() as u32] }
    }

    /// Number of stored entropy words.
    pub fn len(&self) -> usize {
        self.v.len()
    }

    /// Whether the sequence was created without entropy.
    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }

    /// The stored entropy words.
    pub fn param(&self) -> &[u32] {
        &self.v
    }
}

impl From<&[u32]> for SeedSeq {
    fn from(entropy: &[u32]) -> SeedSeq {
        SeedSeq::new(entropy)
    }
}

impl FromIterator<u32> for SeedSeq {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> SeedSeq {
        SeedSeq { v: iter.into_iter().collect() }
    }
}

impl SeedSequence for SeedSeq {
    fn generate(&mut self, dest: &mut [u32]) {
        let n = dest.len();
        if n == 0 {
            return;
        }
        dest.fill(INITIAL_FILL);

        let s = self.v.len();
        let t = if n >= 623 {
            11
        } else if n >= 68 {
            7
        } else if n >= 39 {
            5
        } else if n >= 7 {
            3
        } else {
            (n - 1) / 2
        };
        let p = (n - t) / 2;
        let q = p + t;
        let m = cmp::max(s + 1, n);

        for k in 0..m {
            let r1 = MULTIPLIER_1
                .wrapping_mul(mix(dest[k % n] ^ dest[(k + p) % n] ^ dest[(k + n - 1) % n]));
            let r2 = if k == 0 {
                r1.wrapping_add(s as u32)
            } else if k <= s {
                r1.wrapping_add((k % n) as u32).wrapping_add(self.v[k - 1])
            } else {
                r1.wrapping_add((k % n) as u32)
            };
            dest[(k + p) % n] = dest[(k + p) % n].wrapping_add(r1);
            dest[(k + q) % n] = dest[(k + q) % n].wrapping_add(r2);
            dest[k % n] = r2;
        }

        for k in m..m + n {
            let sum = dest[k % n]
                .wrapping_add(dest[(k + p) % n])
                .wrapping_add(dest[(k + n - 1) % n]);
            let r3 = MULTIPLIER_2.wrapping_mul(mix(sum));
            let r4 = r3.wrapping_sub((k % n) as u32);
            dest[(k + p) % n] ^= r3;
            dest[(k + q) % n] ^= r4;
            dest[k % n] = r4;
        }
    }
}

/// Fill `state` with words drawn from `seq`.
///
/// Words wider than 32 bits are assembled from consecutive 32-bit blocks,
/// the first block being the most significant. Words narrower than 32 bits
/// keep the low bits of their block. All blocks are requested from `seq` in
/// a single call.
///
/// ```
/// use rand_mix::{seed_state, SeedSeq};
///
/// let mut state = [0u64; 4];
/// seed_state(&mut SeedSeq::default(), &mut state);
/// assert!(state.iter().all(|&w| w > u64::from(u32::MAX)));
/// ```
pub fn seed_state<S, W>(seq: &mut S, state: &mut [W])
where
    S: SeedSequence + ?Sized,
    W: Word,
{
    let per_word = blocks_per_word::<W>();
    let shift = cmp::min(W::BITS, 32);

    let mut seeds = vec![0u32; state.len() * per_word];
    seq.generate(&mut seeds);

    for (word, blocks) in state.iter_mut().zip(seeds.chunks_exact(per_word)) {
        *word = blocks.iter().fold(W::ZERO, |acc, &block| {
            W::truncate((acc.widen() << shift) | u64::from(block))
        });
    }
}
