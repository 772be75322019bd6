// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Logging shims. With the `log` feature these forward to the `log` crate,
//! otherwise the arguments are type-checked and dropped.

#![allow(unused)]

macro_rules! trace { ($($x:tt)*) => (
    #[cfg(feature = "log")]
    log::trace!(target: "rand_mix", $($x)*);

    #[cfg(not(feature = "log"))]
    let _ = || { let _ = format_args!($($x)*); };
) }

macro_rules! warn { ($($x:tt)*) => (
    #[cfg(feature = "log")]
    log::warn!(target: "rand_mix", $($x)*);

    #[cfg(not(feature = "log"))]
    let _ = || { let _ = format_args!($($x)*); };
) }
