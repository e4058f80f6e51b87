// Copyright (c) Kanari Network
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use tracing::debug;

use crate::error::TreeError;
use crate::hash::digest;
use crate::nibble::{bytes_to_nibbles, common_prefix_len, Nibble};
use crate::node::Tree;

/// Construction-time bounds on the input list. `Tree::from_list` uses
/// `BuilderConfig::default()`, which accepts any input; a caller who
/// wants to reject oversized input before it is hashed and built
/// should go through `Tree::try_from_list_with_config`.
#[derive(Clone, Debug, Default)]
pub struct BuilderConfig {
    pub max_values: Option<usize>,
    pub max_value_len: Option<usize>,
}

impl Tree {
    /// Builds the authenticated set containing exactly the distinct
    /// values in `values`. Unbounded: equivalent to
    /// `try_from_list_with_config` with a default `BuilderConfig`,
    /// which never rejects input, so this never fails.
    pub fn from_list<I, V>(values: I) -> Tree
    where
        I: IntoIterator<Item = V>,
        V: Into<Vec<u8>>,
    {
        build_checked(values, &BuilderConfig::default())
            .expect("a default BuilderConfig never rejects input")
    }

    /// As `from_list`, but checked against `config` before any hashing
    /// or tree construction happens.
    pub fn try_from_list_with_config<I, V>(
        values: I,
        config: &BuilderConfig,
    ) -> anyhow::Result<Tree>
    where
        I: IntoIterator<Item = V>,
        V: Into<Vec<u8>>,
    {
        Ok(build_checked(values, config)?)
    }
}

fn build_checked<I, V>(values: I, config: &BuilderConfig) -> Result<Tree, TreeError>
where
    I: IntoIterator<Item = V>,
    V: Into<Vec<u8>>,
{
    let values: Vec<Vec<u8>> = values.into_iter().map(Into::into).collect();

    if let Some(max) = config.max_values {
        if values.len() > max {
            return Err(TreeError::TooManyValues {
                max,
                actual: values.len(),
            });
        }
    }
    if let Some(max_len) = config.max_value_len {
        for (index, value) in values.iter().enumerate() {
            if value.len() > max_len {
                return Err(TreeError::ValueTooLarge {
                    index,
                    max: max_len,
                    actual: value.len(),
                });
            }
        }
    }

    let mut seen = HashSet::with_capacity(values.len());
    let mut pairs = Vec::with_capacity(values.len());
    for value in values {
        let key_hash = digest(&value);
        if !seen.insert(key_hash) {
            continue;
        }
        pairs.push((bytes_to_nibbles(key_hash.as_bytes()), value));
    }

    let tree = build(pairs);
    debug!(
        root = %tree.hash().to_hex(),
        size = tree.size(),
        "built tree from value list"
    );
    Ok(tree)
}

type Pair = (Vec<Nibble>, Vec<u8>);

/// The canonical, order-independent construction of §4.3: extract the
/// longest shared nibble prefix of every remaining key, then bucket by
/// the next nibble and recurse. A single remaining pair collapses to a
/// leaf directly, never a branch of one.
fn build(pairs: Vec<Pair>) -> Tree {
    if pairs.is_empty() {
        return Tree::empty();
    }
    if pairs.len() == 1 {
        let (key, value) = pairs.into_iter().next().expect("checked len == 1");
        return Tree::new_leaf(key, value);
    }

    let prefix = common_prefix(&pairs);
    let plen = prefix.len();

    let mut buckets: [Vec<Pair>; 16] = std::array::from_fn(|_| Vec::new());
    for (key, value) in pairs {
        let nibble = key[plen];
        let rest = key[plen + 1..].to_vec();
        buckets[nibble as usize].push((rest, value));
    }

    let mut children: [Option<Box<Tree>>; 16] = std::array::from_fn(|_| None);
    for (slot, bucket) in buckets.into_iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        let subtree = build(bucket);
        if !subtree.is_empty() {
            children[slot] = Some(Box::new(subtree));
        }
    }

    Tree::new_branch(prefix, children)
}

fn common_prefix(pairs: &[Pair]) -> Vec<Nibble> {
    let mut prefix = pairs[0].0.clone();
    for (key, _) in &pairs[1..] {
        let len = common_prefix_len(&prefix, key);
        prefix.truncate(len);
    }
    prefix
}

#[cfg(test)]
mod builder_test;
