// Copyright (c) Kanari Network
// SPDX-License-Identifier: Apache-2.0

use crate::hash::{digest, Hash};
use crate::nibble::{nibbles_to_bytes, Nibble};

/// A node of the tree. Hashes are computed eagerly on construction and
/// stored alongside the node rather than recomputed on demand, the
/// same trade this crate's teacher makes for its internal and leaf
/// nodes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Tree {
    /// The empty set. Its hash is 32 zero bytes, never reachable by
    /// hashing any value.
    Empty,
    /// A single value. `prefix` is the remaining nibble path from this
    /// node to the 64-nibble key of `value`; it takes no part in the
    /// hash, which is just `digest(value)`.
    Leaf {
        prefix: Vec<Nibble>,
        value: Vec<u8>,
        hash: Hash,
    },
    /// A fork with at least two present children. `prefix` is the
    /// shared nibble path consumed before branching; `children[n]` is
    /// the subtree reached by the nibble `n`, or `None` if no key
    /// passes through that slot.
    Branch {
        prefix: Vec<Nibble>,
        children: Box<[Option<Box<Tree>>; 16]>,
        hash: Hash,
        size: usize,
    },
}

impl Tree {
    pub fn empty() -> Self {
        Tree::Empty
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Empty)
    }

    pub fn hash(&self) -> Hash {
        match self {
            Tree::Empty => Hash::ZERO,
            Tree::Leaf { hash, .. } => *hash,
            Tree::Branch { hash, .. } => *hash,
        }
    }

    /// Number of values reachable from this node.
    pub fn size(&self) -> usize {
        match self {
            Tree::Empty => 0,
            Tree::Leaf { .. } => 1,
            Tree::Branch { size, .. } => *size,
        }
    }

    pub fn prefix(&self) -> &[Nibble] {
        match self {
            Tree::Empty => &[],
            Tree::Leaf { prefix, .. } => prefix,
            Tree::Branch { prefix, .. } => prefix,
        }
    }

    pub(crate) fn new_leaf(prefix: Vec<Nibble>, value: Vec<u8>) -> Self {
        let hash = leaf_hash(&value);
        Tree::Leaf {
            prefix,
            value,
            hash,
        }
    }

    /// Builds a branch over `children`, computing its hash from the
    /// present children's hashes in ascending slot order. Panics if
    /// fewer than two children are present, or if a present slot holds
    /// an `Empty` subtree: both are structural violations a correct
    /// builder never produces.
    pub(crate) fn new_branch(prefix: Vec<Nibble>, children: [Option<Box<Tree>>; 16]) -> Self {
        let mut present = 0usize;
        let mut size = 0usize;
        let mut child_hashes = Vec::with_capacity(16);
        for child in children.iter().flatten() {
            assert!(!child.is_empty(), "branch child must not be Empty");
            present += 1;
            size += child.size();
            child_hashes.push(child.hash());
        }
        assert!(
            present >= 2,
            "branch must have at least two children, got {present}"
        );
        let hash = branch_hash(&prefix, &child_hashes);
        Tree::Branch {
            prefix,
            children: Box::new(children),
            hash,
            size,
        }
    }

    /// Walks `path` one nibble at a time from this node, consuming a
    /// node's own prefix before dispatching on the next nibble at a
    /// branch. Returns the deepest node reached, or `None` as soon as a
    /// step has no matching prefix or no child to descend into.
    pub fn child_at(&self, path: &[Nibble]) -> Option<&Tree> {
        if path.is_empty() {
            return Some(self);
        }
        match self {
            Tree::Empty => None,
            Tree::Leaf { .. } => None,
            Tree::Branch {
                prefix, children, ..
            } => {
                let rest = path.strip_prefix(prefix.as_slice())?;
                let (nibble, rest) = rest.split_first()?;
                children[*nibble as usize]
                    .as_deref()?
                    .child_at(rest)
            }
        }
    }
}

pub(crate) fn leaf_hash(value: &[u8]) -> Hash {
    digest(value)
}

pub(crate) fn branch_hash(prefix: &[Nibble], child_hashes: &[Hash]) -> Hash {
    let mut buf = nibbles_to_bytes(prefix);
    for h in child_hashes {
        buf.extend_from_slice(h.as_bytes());
    }
    digest(&buf)
}

#[cfg(test)]
mod node_test;
