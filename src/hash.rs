// Copyright (c) Kanari Network
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use blake2::Blake2b;
use digest::consts::U32;
use digest::Digest;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TreeError;

type Blake2b256 = Blake2b<U32>;

/// A 32-byte Blake2b digest, used for every hash this crate produces:
/// leaf hashes, branch hashes, and the all-zero empty-tree placeholder.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash([u8; 32]);

impl Hash {
    /// The hash of the empty tree: 32 zero bytes, never the output of
    /// `digest`.
    pub const ZERO: Hash = Hash([0u8; 32]);

    pub fn from_slice(bytes: &[u8]) -> Result<Self, TreeError> {
        if bytes.len() != 32 {
            return Err(TreeError::InvalidProof(format!(
                "hash must be 32 bytes, got {}",
                bytes.len()
            )));
        }
        let mut buf = [0u8; 32];
        buf.copy_from_slice(bytes);
        Ok(Hash(buf))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(D::Error::custom)?;
        Hash::from_slice(&bytes).map_err(D::Error::custom)
    }
}

/// Blake2b-256 over `bytes`: unkeyed, unsalted, no personalization.
pub fn digest(bytes: &[u8]) -> Hash {
    let mut hasher = Blake2b256::new();
    hasher.update(bytes);
    let out = hasher.finalize();
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&out);
    Hash(buf)
}

#[cfg(test)]
mod hash_test;
