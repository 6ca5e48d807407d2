//! Public ordered-container wrapper over the arena and free functions.

use std::fmt::Debug;

use crate::insert;
use crate::node::RbNode;
use crate::print;
use crate::remove;
use crate::traverse::{find, first, last, next};
use crate::verify::{self, InvariantError};

fn natural_order<K: Ord>(a: &K, b: &K) -> i32 {
    match a.cmp(b) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

/// Ordered key container (multiset) backed by a red-black tree.
///
/// Nodes live in a `Vec` arena; links are `u32` indices. Slots freed by
/// [`RbTree::remove`] are kept on a free list and reused by later inserts.
///
/// The comparator must define a strict total order; supplying one that
/// does not is a precondition violation with undefined structural results.
/// Duplicate keys are permitted and are ordered after equal keys already
/// present.
pub struct RbTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<RbNode<K>>,
    free: Vec<u32>,
    root: Option<u32>,
    len: usize,
    comparator: C,
}

impl<K: Ord> RbTree<K> {
    /// Empty tree using the key type's natural order.
    pub fn new() -> Self {
        Self::with_comparator(natural_order::<K>)
    }
}

impl<K: Ord> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for RbTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, C> Extend<K> for RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Empty tree ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
            comparator,
        }
    }

    /// Inserts `key`. Always succeeds; duplicates land after equal keys
    /// already present.
    pub fn insert(&mut self, key: K) {
        let idx = self.alloc(key);
        self.root = insert::insert(&mut self.arena, self.root, idx, &self.comparator);
        self.len += 1;
    }

    /// Removes one occurrence of `key`. Returns `false` (not an error)
    /// when the key is absent.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(node) = find(&self.arena, self.root, key, &self.comparator) else {
            return false;
        };
        let (root, freed) = remove::remove(&mut self.arena, self.root, node);
        self.root = root;
        self.free.push(freed);
        self.len -= 1;
        true
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        find(&self.arena, self.root, key, &self.comparator).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops all keys and releases the arena.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Minimum key.
    pub fn first(&self) -> Option<&K> {
        first(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    /// Maximum key.
    pub fn last(&self) -> Option<&K> {
        last(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    /// In-order iteration over the keys.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        let mut curr = first(&self.arena, self.root);
        std::iter::from_fn(move || {
            let i = curr?;
            curr = next(&self.arena, i);
            Some(&self.arena[i as usize].k)
        })
    }

    /// Full current membership in sorted order. Empty for an empty tree.
    pub fn to_sorted_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Re-checks every structural invariant.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        verify::check(&self.arena, self.root, &self.comparator)
    }

    /// Indented dump of the tree structure with per-node colors.
    pub fn dump(&self) -> String
    where
        K: Debug,
    {
        print::print(&self.arena, self.root, "")
    }

    fn alloc(&mut self, key: K) -> u32 {
        match self.free.pop() {
            Some(i) => {
                self.arena[i as usize] = RbNode::new(key);
                i
            }
            None => {
                self.arena.push(RbNode::new(key));
                (self.arena.len() - 1) as u32
            }
        }
    }
}
