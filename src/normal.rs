// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Standard normal deviates by the ratio-of-uniforms method.

use crate::utils::Float;
use rand::distributions::{Distribution, Open01};
use rand::Rng;

/// Draw one sample from the standard normal distribution `N(0, 1)`.
///
/// Uses the ratio-of-uniforms method with the quadratic bounds of Leva[^1]:
/// a pair `(u, v)` is accepted or rejected by two cheap quadratic tests in
/// most cases, and the logarithm is evaluated only between the bounds. Both
/// uniforms are drawn in the precision of `F` from the open interval
/// `(0, 1)`.
///
/// Rejected pairs are redrawn until one is accepted.
///
/// [^1]: Joseph L. Leva (1992). *A fast normal random number generator*.
///       ACM Transactions on Mathematical Software 18(4).
///
/// # Example
/// ```
/// use rand_mix::{generate_normal, Sfc64};
///
/// let mut rng = Sfc64::new();
/// let x: f64 = generate_normal(&mut rng);
/// assert!(x.is_finite());
/// ```
pub fn generate_normal<F, R>(rng: &mut R) -> F
where
    F: Float,
    R: Rng + ?Sized,
    Open01: Distribution<F>,
{
    let v_scale = F::cast((2.0 / core::f64::consts::E).sqrt() * 2.0);
    let half = F::cast(0.5);

    loop {
        let u: F = rng.sample(Open01);
        let v: F = rng.sample(Open01);
        let v = v_scale * (v - half);

        let x = u - F::cast(0.449871);
        let y = v.abs() + F::cast(0.386595);
        let q = x * x + y * (F::cast(0.19600) * y - F::cast(0.25472) * x);

        // Inside the inner bound: accept without the logarithm.
        if q <= F::cast(0.27597) {
            return v / u;
        }
        if q > F::cast(0.27846) {
            continue;
        }
        if v * v <= F::cast(-4.0) * (u * u) * u.ln() {
            return v / u;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sfc::Sfc32;

    #[test]
    fn finite_and_signed() {
        let mut rng = Sfc32::with_seed(7);
        let mut positive = 0;
        for _ in 0..1000 {
            let x: f64 = generate_normal(&mut rng);
            assert!(x.is_finite());
            if x > 0.0 {
                positive += 1;
            }
        }
        assert!(positive > 400 && positive < 600);
    }

    #[test]
    fn deterministic() {
        let mut a = Sfc32::with_seed(3);
        let mut b = Sfc32::with_seed(3);
        for _ in 0..100 {
            let x: f32 = generate_normal(&mut a);
            let y: f32 = generate_normal(&mut b);
            assert_eq!(x.to_bits(), y.to_bits());
        }
        assert_eq!(a, b);
    }
}
