// Copyright (c) Kanari Network
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Recoverable failures surfaced by path walking, proof extraction, and
/// proof deserialisation. Structural violations on construction (a
/// malformed branch) remain `assert!`/`panic!` sites, matching the
/// treatment of programmer error elsewhere in this crate.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum TreeError {
    /// `walk`/`prove` invoked against an `Empty` tree.
    #[error("no value in empty tree")]
    EmptyTree,

    /// A node's own prefix is not a prefix of the remaining path.
    #[error("non-matching prefix: node expects {expected}, remaining path is {remaining}")]
    PrefixMismatch { expected: String, remaining: String },

    /// A branch has no child at the nibble the path dispatches on.
    #[error("no child at nibble {nibble:x}, remaining path {remaining}")]
    NoSuchChild { nibble: u8, remaining: String },

    /// `from_list`/`try_from_list_with_config` exceeded `BuilderConfig::max_values`.
    #[error("{actual} values exceed the configured maximum of {max}")]
    TooManyValues { max: usize, actual: usize },

    /// A single value exceeded `BuilderConfig::max_value_len`.
    #[error("value at index {index} is {actual} bytes, exceeding the configured maximum of {max}")]
    ValueTooLarge {
        index: usize,
        max: usize,
        actual: usize,
    },

    /// A serialised proof did not match the wire format of the spec.
    #[error("invalid proof encoding: {0}")]
    InvalidProof(String),
}

#[cfg(test)]
mod error_test;
