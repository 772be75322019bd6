// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use std::{error, fmt};

/// Error type returned when restoring an engine from its text form.
///
/// Generation and seeding never fail; only reading a previously written
/// state can.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseStateError {
    /// The input ended before all state words were read.
    MissingWord {
        /// Number of words the engine state consists of.
        expected: usize,
        /// Number of words found.
        found: usize,
    },
    /// The word at `index` is not a decimal integer of the state's width.
    InvalidWord {
        /// Position of the offending word.
        index: usize,
    },
    /// More words followed the complete state.
    TrailingInput,
    /// The words parse, but do not form a valid state for this engine.
    InvalidState(&'static str),
}

impl fmt::Display for ParseStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParseStateError::MissingWord { expected, found } => write!(
                f,
                "engine state truncated: expected {} words, found {}",
                expected, found
            ),
            ParseStateError::InvalidWord { index } => {
                write!(f, "engine state word {} is not a valid integer", index)
            }
            ParseStateError::TrailingInput => f.write_str("unexpected input after engine state"),
            ParseStateError::InvalidState(msg) => write!(f, "invalid engine state: {}", msg),
        }
    }
}

impl error::Error for ParseStateError {}
