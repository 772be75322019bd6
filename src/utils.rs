// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Math helper functions

/// Trait for floating-point scalar types
///
/// This allows the normal samplers to work with `f32` or `f64`. Arithmetic
/// and transcendental functions come from [`num_traits::Float`]; this trait
/// only adds exact conversion of `f64` literals.
pub trait Float: num_traits::Float {
    /// Support approximate representation of a f64 value
    fn cast(x: f64) -> Self;
}

impl Float for f32 {
    #[inline]
    fn cast(x: f64) -> Self {
        x as f32
    }
}

impl Float for f64 {
    #[inline]
    fn cast(x: f64) -> Self {
        x
    }
}
