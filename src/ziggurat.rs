// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The standard normal distribution via a 128-layer ziggurat.

use crate::utils::Float;
use crate::ziggurat_tables::{TAIL_START, XS, YS};
use rand::distributions::{Distribution, Open01};
use rand::Rng;

/// Scale mapping the top 56 bits of a `u64` to `[0, 1)`.
const FRACTION_SCALE: f64 = 1.0 / (1u64 << 56) as f64;

/// Samples floating-point numbers according to the standard normal
/// distribution `N(0, 1)` using the ziggurat method[^1].
///
/// The right half of the density is covered by 128 layers of equal area and
/// a tail beyond `x = 3.442619855899`. A single `u64` draw selects the layer
/// (low 7 bits), the sign (bit 7) and a 56-bit fraction; about 98% of draws
/// are accepted on this fast path. The remaining ones go through a wedge
/// rejection test or, in the bottom layer, the exponential tail sampler of
/// Marsaglia.
///
/// The distribution holds no state and all instances are equal.
///
/// [^1]: George Marsaglia and Wai Wan Tsang (2000). [*The Ziggurat Method
///       for Generating Random Variables*](
///       https://www.jstatsoft.org/v05/i08). Journal of Statistical
///       Software 5(8).
///
/// # Example
/// ```
/// use rand::distributions::Distribution;
/// use rand_mix::{Sfc64, ZigguratNormal};
///
/// let mut rng = Sfc64::new();
/// let x: f64 = ZigguratNormal.sample(&mut rng);
/// assert!(x.is_finite());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZigguratNormal;

impl ZigguratNormal {
    /// Construct the distribution.
    pub fn new() -> ZigguratNormal {
        ZigguratNormal
    }

    /// Lower bound of the support in the sample type, negative infinity.
    pub fn min<F: Float>(&self) -> F {
        F::neg_infinity()
    }

    /// Upper bound of the support in the sample type, positive infinity.
    pub fn max<F: Float>(&self) -> F {
        F::infinity()
    }
}

#[inline]
fn pdf(x: f64) -> f64 {
    (-x * x / 2.0).exp()
}

/// Sample the tail beyond `TAIL_START` by exponential rejection.
fn sample_tail<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let s: f64 = rng.sample(Open01);
        let t: f64 = rng.sample(Open01);
        let x = -s.ln() / TAIL_START;
        let y = -t.ln();
        if 2.0 * y >= x * x {
            return TAIL_START + x;
        }
    }
}

impl Distribution<f64> for ZigguratNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        loop {
            let bits = rng.next_u64();
            let layer = (bits & 0x7f) as usize;
            let sign = if bits & 0x80 != 0 { 1.0 } else { -1.0 };
            let u = (bits >> 8) as f64 * FRACTION_SCALE;
            let x = u * XS[layer];

            if x < XS[layer + 1] {
                return sign * x;
            }
            if layer == 0 {
                return sign * sample_tail(rng);
            }

            // Wedge between XS[layer + 1] and XS[layer].
            let y = YS[layer - 1] + (YS[layer] - YS[layer - 1]) * rng.gen::<f64>();
            if y < pdf(x) {
                return sign * x;
            }
        }
    }
}

impl Distribution<f32> for ZigguratNormal {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let x: f64 = self.sample(rng);
        x as f32
    }
}
