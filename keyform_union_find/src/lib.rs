// Copyright 2026 the Keyform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyform Union-Find: an integer-indexed disjoint-set forest.
//!
//! Elements are the indices `0..len`. The structure knows nothing about what
//! those indices stand for; callers keep their own side tables (for example a
//! slice of keys) and use the forest only to record "these two belong
//! together" relations and to read back the resulting partition.
//!
//! - [`UnionFind::find`] uses path compression.
//! - [`UnionFind::union`] uses union by rank.
//! - [`UnionFind::groups`] returns the partition in a deterministic order:
//!   groups sorted by their lowest member, members ascending.
//!
//! # Example
//!
//! ```rust
//! use keyform_union_find::UnionFind;
//!
//! let mut uf = UnionFind::new(5);
//! uf.union(0, 3);
//! uf.union(3, 4);
//!
//! assert!(uf.connected(0, 4));
//! assert!(!uf.connected(0, 1));
//! assert_eq!(uf.set_count(), 3);
//! assert_eq!(uf.groups(), vec![vec![0, 3, 4], vec![1], vec![2]]);
//! ```
//!
//! Indices outside `0..len` are a caller bug and panic.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Disjoint-set forest over the indices `0..len`.
#[derive(Clone, Debug, Default)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// Create a forest of `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    /// Number of elements tracked by the forest.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the forest tracks no elements at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently present.
    #[inline]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Return the representative of the set containing `x`.
    ///
    /// Every node visited on the way to the root is re-parented directly onto
    /// the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `true` if two distinct sets were merged, `false` if `a` and `b`
    /// were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
        self.sets -= 1;
        true
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// The current partition.
    ///
    /// Groups appear in order of their lowest member and list members in
    /// ascending order, so the result only depends on which elements were
    /// joined, not on the order the unions happened in.
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let len = self.len();
        // Root index -> slot in `out`, filled lazily while walking 0..len.
        let mut slot_of_root: Vec<Option<usize>> = vec![None; len];
        let mut out: Vec<Vec<usize>> = Vec::with_capacity(self.sets);
        for i in 0..len {
            let root = self.find(i);
            let slot = *slot_of_root[root].get_or_insert_with(|| {
                out.push(Vec::new());
                out.len() - 1
            });
            out[slot].push(i);
        }
        out
    }
}
