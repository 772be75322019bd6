// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rand::Rng;
use rand_mix::rand_core::{RngCore, SeedableRng};
use rand_mix::{Jsf64, SeedSeq, Sfc16, Sfc32, Sfc64, Xorshift1024Star};

// Exercise the whole engine interface on one engine type.
macro_rules! engine_interface {
    ($name:ident, $Rng:ident) => {
        mod $name {
            use super::*;

            #[test]
            fn construction() {
                let _ = $Rng::new();
                let _ = $Rng::with_seed(0);
                let _ = $Rng::from_seed_sequence(&mut SeedSeq::default());
                assert_eq!($Rng::default(), $Rng::new());
            }

            #[test]
            fn seeding() {
                let mut rng = $Rng::with_seed(1234);
                rng.seed();
                assert_eq!(rng, $Rng::new());
                rng.reseed(1234);
                assert_eq!(rng, $Rng::with_seed(1234));
                rng.reseed_with(&mut SeedSeq::new(&[5, 6]));
                assert_eq!(rng, $Rng::from_seed_sequence(&mut SeedSeq::new(&[5, 6])));
            }

            #[test]
            fn determinism() {
                let mut a = $Rng::with_seed(77);
                let mut b = $Rng::with_seed(77);
                for _ in 0..100 {
                    assert_eq!(a.generate(), b.generate());
                }

                let mut a = $Rng::from_seed_sequence(&mut SeedSeq::new(&[9, 8, 7]));
                let mut b = $Rng::from_seed_sequence(&mut SeedSeq::new(&[9, 8, 7]));
                for _ in 0..100 {
                    assert_eq!(a.next_u64(), b.next_u64());
                }
            }

            #[test]
            fn different_seeds_differ() {
                assert_ne!($Rng::with_seed(1), $Rng::with_seed(2));
                assert_ne!(
                    $Rng::from_seed_sequence(&mut SeedSeq::new(&[1])),
                    $Rng::from_seed_sequence(&mut SeedSeq::new(&[2]))
                );
            }

            #[test]
            fn copy_independence() {
                let mut rng = $Rng::with_seed(3);
                let reference: Vec<u64> = rng
                    .clone()
                    .sample_iter(rand::distributions::Standard)
                    .take(10)
                    .collect();
                let mut copy = rng.clone();
                copy.discard(50);
                let drawn: Vec<u64> = (0..10).map(|_| rng.gen()).collect();
                assert_eq!(drawn, reference);
            }

            #[test]
            fn comparison() {
                let mut rng = $Rng::new();
                rng.discard(10);
                let mut other = rng.clone();
                other.discard(10);
                assert_eq!(rng, rng.clone());
                assert_ne!(rng, other);
                assert_ne!(other, rng);

                rng.discard(10);
                assert_eq!(rng, other);
            }

            #[test]
            fn text_round_trip() {
                let mut src = $Rng::with_seed(1234);
                src.discard(7);
                let mut dst = $Rng::new();
                assert_ne!(src, dst);

                dst = src.to_string().parse().unwrap();
                assert_eq!(src, dst);
                for _ in 0..32 {
                    assert_eq!(src.generate(), dst.generate());
                }
            }

            #[test]
            fn bounds() {
                assert_eq!($Rng::min(), 0);
                assert_eq!($Rng::min(), $Rng::MIN);
                assert_eq!($Rng::max(), $Rng::MAX);
            }

            #[test]
            fn seedable_rng() {
                let a = $Rng::seed_from_u64(42);
                let b = $Rng::seed_from_u64(42);
                assert_eq!(a, b);
                assert_ne!(a, $Rng::seed_from_u64(43));

                let mut master = Sfc64::new();
                let c = $Rng::from_rng(&mut master).unwrap();
                let d = $Rng::from_rng(Sfc64::new()).unwrap();
                assert_eq!(c, d);
            }
        }
    };
}

engine_interface!(sfc16, Sfc16);
engine_interface!(sfc32, Sfc32);
engine_interface!(sfc64, Sfc64);
engine_interface!(jsf64, Jsf64);
engine_interface!(xorshift1024star, Xorshift1024Star);

#[test]
fn max_per_width() {
    assert_eq!(Sfc16::max(), u16::MAX);
    assert_eq!(Sfc32::max(), u32::MAX);
    assert_eq!(Sfc64::max(), u64::MAX);
    assert_eq!(Jsf64::max(), u64::MAX);
    assert_eq!(Xorshift1024Star::max(), 0xffff_ffff_ffff_ffff);
}

#[test]
fn word_seed_matches_sequence() {
    // Engines without their own single-word scheme seed through the
    // one-element sequence holding the low 32 bits of the word.
    let seed = 0xdead_beef_0000_0001u64;
    let seq = SeedSeq::new(&[1]);
    assert_eq!(SeedSeq::from_word(seed), seq);
    assert_eq!(Jsf64::with_seed(seed), Jsf64::from_seed_sequence(&mut seq.clone()));
    assert_eq!(
        Xorshift1024Star::with_seed(seed),
        Xorshift1024Star::from_seed_sequence(&mut seq.clone())
    );
    assert_eq!(Jsf64::new(), Jsf64::from_seed_sequence(&mut SeedSeq::new(&[0])));
    assert_eq!(
        Xorshift1024Star::new(),
        Xorshift1024Star::from_seed_sequence(&mut SeedSeq::new(&[0]))
    );
}

#[test]
fn narrow_engine_feeds_wide_requests() {
    let mut a = Sfc16::with_seed(9);
    let mut b = a.clone();
    let wide = a.next_u64();
    let mut expected = 0u64;
    for i in 0..4 {
        expected |= u64::from(b.generate()) << (16 * i);
    }
    assert_eq!(wide, expected);
}

#[test]
fn wide_engine_truncates() {
    let mut a = Sfc64::with_seed(9);
    let mut b = a.clone();
    assert_eq!(a.next_u32(), b.generate() as u32);
    assert_eq!(a, b);
}
