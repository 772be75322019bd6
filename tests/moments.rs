// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Raw moments of the normal samplers against those of `N(0, 1)`.
//!
//! Each moment is estimated from a fixed number of draws and compared to the
//! exact value with a tolerance of two standard errors.

use rand::distributions::Distribution;
use rand_mix::{generate_normal, Sfc64, ZigguratNormal};

const SAMPLES: usize = 1_000_000;
const MAX_ORDER: usize = 8;

// E[X^k] for X ~ N(0, 1).
const MOMENTS: [f64; MAX_ORDER + 1] = [1.0, 0.0, 1.0, 0.0, 3.0, 0.0, 15.0, 0.0, 105.0];

// Var[X^k] = E[X^2k] - E[X^k]^2.
const VARIANCES: [f64; MAX_ORDER + 1] = [
    0.0, 1.0, 2.0, 15.0, 96.0, 945.0, 10170.0, 135135.0, 2016000.0,
];

fn estimate_moment<F: FnMut(&mut Sfc64) -> f64>(order: usize, mut sample: F) -> f64 {
    let mut rng = Sfc64::new();
    let mut sum = 0.0;
    for _ in 0..SAMPLES {
        sum += sample(&mut rng).powi(order as i32);
    }
    sum / SAMPLES as f64
}

fn check_moments<F: FnMut(&mut Sfc64) -> f64>(mut sample: F) {
    for order in 1..=MAX_ORDER {
        let estimate = estimate_moment(order, &mut sample);
        let tolerance = 2.0 * (VARIANCES[order] / SAMPLES as f64).sqrt();
        assert!(
            (estimate - MOMENTS[order]).abs() <= tolerance,
            "order {}: estimate {} expected {} +/- {}",
            order, estimate, MOMENTS[order], tolerance
        );
    }
}

#[test]
fn ratio_of_uniforms_f64() {
    check_moments(|rng| generate_normal::<f64, _>(rng));
}

#[test]
fn ratio_of_uniforms_f32() {
    check_moments(|rng| f64::from(generate_normal::<f32, _>(rng)));
}

#[test]
fn ziggurat_f64() {
    let normal = ZigguratNormal::new();
    check_moments(|rng| Distribution::<f64>::sample(&normal, rng));
}

#[test]
fn ziggurat_f32() {
    let normal = ZigguratNormal::new();
    check_moments(|rng| f64::from(Distribution::<f32>::sample(&normal, rng)));
}
