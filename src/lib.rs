// Copyright (c) Kanari Network
// SPDX-License-Identifier: Apache-2.0

//! An authenticated set over a radix-16 Merkle Patricia Tree.
//!
//! Membership is always keyed by content: a value's position in the
//! tree is `path_of(value)`, the hex-digit path of its own digest, so
//! there is no notion of inserting a value at a caller-chosen key.
//! [`Tree::from_list`] builds the canonical tree for a set of values
//! in one pass; [`Tree::prove`] walks it down to a value's leaf,
//! recording a [`Proof`] that [`Proof::verify`] can later replay
//! against a trusted root hash with no access to the tree itself,
//! either as an inclusion proof (`with_element = true`) or a deletion
//! witness (`with_element = false`) for the tree that would remain
//! without it.

pub mod builder;
pub mod error;
pub mod hash;
pub mod nibble;
pub mod node;
pub mod proof;

pub use builder::BuilderConfig;
pub use error::TreeError;
pub use hash::{digest, Hash};
pub use nibble::{path_of, Nibble};
pub use node::Tree;
pub use proof::{Proof, Step};
