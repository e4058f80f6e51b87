// Copyright (c) Kanari Network
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::TreeError;
use crate::hash::{digest, Hash};
use crate::nibble::{nibbles_to_hex, path_of, Nibble};
use crate::node::{branch_hash, Tree};

/// One branch crossed between the root and a leaf. `skip` is the
/// length of the branch's own prefix (consumed nibbles that carry no
/// branching information); `neighbors` is every other present
/// child's `(slot, hash)`, in ascending slot order, with the slot on
/// the proven path itself omitted — the verifier recovers that slot
/// from the value's own key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Step {
    pub skip: usize,
    pub neighbors: Vec<(Nibble, Hash)>,
}

/// A proof that `value` is reachable (or, read against a smaller
/// tree's root, was reachable before a deletion) at the end of a path
/// of `steps` from some root. Verification never touches the tree
/// itself; it only replays hashing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proof {
    pub value: Vec<u8>,
    pub steps: Vec<Step>,
}

impl Tree {
    /// Walks `path` from this node to the leaf it names, recording a
    /// `Step` at every branch crossed. Fails as soon as the tree
    /// cannot possibly contain a value whose key is `path`: an empty
    /// tree, a leaf whose remaining prefix does not match, or a
    /// branch with no child at the next nibble.
    pub fn walk(&self, path: &[Nibble]) -> anyhow::Result<Proof> {
        Ok(self.walk_checked(path)?)
    }

    fn walk_checked(&self, path: &[Nibble]) -> Result<Proof, TreeError> {
        match self {
            Tree::Empty => Err(TreeError::EmptyTree),
            Tree::Leaf { prefix, value, .. } => {
                if path == prefix.as_slice() {
                    Ok(Proof {
                        value: value.clone(),
                        steps: Vec::new(),
                    })
                } else {
                    Err(TreeError::PrefixMismatch {
                        expected: nibbles_to_hex(prefix),
                        remaining: nibbles_to_hex(path),
                    })
                }
            }
            Tree::Branch {
                prefix, children, ..
            } => {
                let rest = path.strip_prefix(prefix.as_slice()).ok_or_else(|| {
                    TreeError::PrefixMismatch {
                        expected: nibbles_to_hex(prefix),
                        remaining: nibbles_to_hex(path),
                    }
                })?;
                let (nibble, rest) = rest.split_first().ok_or_else(|| TreeError::PrefixMismatch {
                    expected: nibbles_to_hex(prefix),
                    remaining: nibbles_to_hex(rest),
                })?;
                let bi = *nibble as usize;
                let child = children[bi].as_deref().ok_or_else(|| TreeError::NoSuchChild {
                    nibble: *nibble,
                    remaining: nibbles_to_hex(rest),
                })?;

                trace!(skip = prefix.len(), nibble = %nibble, "descending branch");
                let mut proof = child.walk_checked(rest)?;

                let neighbors = children
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != bi)
                    .filter_map(|(i, c)| c.as_deref().map(|c| (i as Nibble, c.hash())))
                    .collect();
                proof.steps.insert(
                    0,
                    Step {
                        skip: prefix.len(),
                        neighbors,
                    },
                );
                Ok(proof)
            }
        }
    }

    /// Produces a proof for `value`'s own key, i.e. `walk(path_of(value))`.
    pub fn prove(&self, value: &[u8]) -> anyhow::Result<Proof> {
        let path = path_of(value);
        match self.walk_checked(&path) {
            Ok(proof) => Ok(proof),
            Err(err) => {
                tracing::debug!(remaining = %nibbles_to_hex(&path), error = %err, "no proof for value");
                Err(err.into())
            }
        }
    }
}

impl Proof {
    /// Recomputes the root hash this proof folds up to.
    ///
    /// With `with_element = true`, the leaf itself participates: this
    /// is an inclusion proof, and the result should equal a tree's
    /// known root hash when `value` is a member.
    ///
    /// With `with_element = false`, the leaf is omitted: this is a
    /// deletion witness, and the result should equal the root hash of
    /// the tree with `value` removed. An empty `steps` list has no
    /// well-defined "root without the element" (there is no branch to
    /// fold away), so that combination is rejected rather than
    /// silently treated as the empty tree.
    ///
    /// Every step's `skip` is checked against the 64-nibble path width
    /// before any slicing happens, so a malformed or adversarial proof
    /// is rejected rather than panicking.
    pub fn verify(&self, with_element: bool) -> Result<Hash, TreeError> {
        if self.steps.is_empty() && !with_element {
            return Err(TreeError::InvalidProof(
                "deletion witness requires at least one step".to_string(),
            ));
        }

        let path = path_of(&self.value);
        let total: usize = self.steps.iter().map(|s| 1 + s.skip).sum();
        if total > path.len() {
            return Err(TreeError::InvalidProof(format!(
                "proof depth {total} exceeds the {}-nibble path width",
                path.len()
            )));
        }

        let mut cursor = total;
        let mut acc: Option<Hash> = with_element.then(|| digest(&self.value));

        for step in self.steps.iter().rev() {
            cursor -= 1 + step.skip;
            let prefix = &path[cursor..cursor + step.skip];
            let nibble = path[cursor + step.skip];

            acc = Some(match acc {
                None if step.neighbors.len() == 1 => step.neighbors[0].1,
                _ => {
                    let mut slots = step.neighbors.clone();
                    if let Some(hash) = acc {
                        slots.push((nibble, hash));
                        slots.sort_by_key(|(slot, _)| *slot);
                    }
                    let hashes: Vec<Hash> = slots.into_iter().map(|(_, h)| h).collect();
                    branch_hash(prefix, &hashes)
                }
            });
        }

        Ok(acc.unwrap_or(Hash::ZERO))
    }
}

// --- wire format (serde_json) -------------------------------------------

#[derive(Serialize, Deserialize)]
struct WireStep {
    skip: u64,
    /// Hex-encoded concatenation of neighbor hashes, in ascending slot
    /// order (the same order `Step::neighbors` stores them in).
    neighbors: String,
    /// One entry per branch slot (0..16): the index into `neighbors`
    /// holding that slot's hash, or `255` if the slot is absent from
    /// this step (either the proven path's own slot, or a slot with no
    /// child at all).
    lookup: Vec<u8>,
}

#[derive(Serialize, Deserialize)]
struct WireProof {
    /// Hex-encoded value bytes.
    value: String,
    steps: Vec<WireStep>,
}

const LOOKUP_ABSENT: u8 = 0xff;

impl Proof {
    /// Serialises this proof as the JSON transcript described in the
    /// wire format: one object per step, each carrying enough
    /// information (`lookup`) to recover slot positions without a
    /// per-branch presence bitmap.
    pub fn serialise(&self) -> Result<Vec<u8>, TreeError> {
        let steps = self
            .steps
            .iter()
            .map(|step| {
                let mut lookup = vec![LOOKUP_ABSENT; 16];
                let mut neighbor_bytes = Vec::with_capacity(step.neighbors.len() * 32);
                for (idx, (slot, hash)) in step.neighbors.iter().enumerate() {
                    lookup[*slot as usize] = idx as u8;
                    neighbor_bytes.extend_from_slice(hash.as_bytes());
                }
                WireStep {
                    skip: step.skip as u64,
                    neighbors: hex::encode(neighbor_bytes),
                    lookup,
                }
            })
            .collect();
        let wire = WireProof {
            value: hex::encode(&self.value),
            steps,
        };
        serde_json::to_vec(&wire)
            .map_err(|e| TreeError::InvalidProof(format!("failed to serialise proof: {e}")))
    }

    /// Parses a proof from the JSON transcript `serialise` produces.
    pub fn deserialise(bytes: &[u8]) -> Result<Proof, TreeError> {
        let wire: WireProof = serde_json::from_slice(bytes)
            .map_err(|e| TreeError::InvalidProof(format!("malformed proof JSON: {e}")))?;
        let value = hex::decode(&wire.value)
            .map_err(|e| TreeError::InvalidProof(format!("malformed value hex: {e}")))?;

        let mut steps = Vec::with_capacity(wire.steps.len());
        for wire_step in &wire.steps {
            if wire_step.lookup.len() != 16 {
                return Err(TreeError::InvalidProof(format!(
                    "lookup table must have 16 entries, got {}",
                    wire_step.lookup.len()
                )));
            }
            let neighbor_bytes = hex::decode(&wire_step.neighbors)
                .map_err(|e| TreeError::InvalidProof(format!("malformed neighbor hex: {e}")))?;
            if neighbor_bytes.len() % 32 != 0 {
                return Err(TreeError::InvalidProof(
                    "neighbor byte string is not a multiple of 32 bytes".to_string(),
                ));
            }
            let hashes: Vec<Hash> = neighbor_bytes
                .chunks_exact(32)
                .map(Hash::from_slice)
                .collect::<Result<_, _>>()?;

            let mut slots: Vec<(Nibble, usize)> = wire_step
                .lookup
                .iter()
                .enumerate()
                .filter(|(_, &idx)| idx != LOOKUP_ABSENT)
                .map(|(slot, &idx)| (slot as Nibble, idx as usize))
                .collect();
            slots.sort_by_key(|(_, idx)| *idx);

            let mut neighbors = Vec::with_capacity(slots.len());
            for (slot, idx) in slots {
                let hash = *hashes.get(idx).ok_or_else(|| {
                    TreeError::InvalidProof(format!("lookup index {idx} out of range"))
                })?;
                neighbors.push((slot, hash));
            }
            neighbors.sort_by_key(|(slot, _)| *slot);

            steps.push(Step {
                skip: wire_step.skip as usize,
                neighbors,
            });
        }

        Ok(Proof { value, steps })
    }
}

#[cfg(test)]
mod proof_test;
