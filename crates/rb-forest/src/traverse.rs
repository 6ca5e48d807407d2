//! Read-only tree walks: extremes, in-order succession, and key lookup.

use crate::node::RbNode;

/// Leftmost node under `root` (the minimum).
pub fn first<K>(arena: &[RbNode<K>], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        match arena[i as usize].l {
            Some(l) => curr = Some(l),
            None => return Some(i),
        }
    }
    curr
}

/// Rightmost node under `root` (the maximum).
pub fn last<K>(arena: &[RbNode<K>], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        match arena[i as usize].r {
            Some(r) => curr = Some(r),
            None => return Some(i),
        }
    }
    curr
}

/// In-order successor of `node`, walking parent links when there is no
/// right subtree.
pub fn next<K>(arena: &[RbNode<K>], node: u32) -> Option<u32> {
    if let Some(r) = arena[node as usize].r {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = arena[node as usize].p;
    while let Some(pi) = p {
        if arena[pi as usize].r == Some(curr) {
            curr = pi;
            p = arena[pi as usize].p;
        } else {
            return Some(pi);
        }
    }
    None
}

/// Standard BST descent for `key`. Returns the first match encountered on
/// the root-to-leaf path, or `None`. Never mutates.
pub fn find<K, C>(arena: &[RbNode<K>], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, &arena[i as usize].k);
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            arena[i as usize].l
        } else {
            arena[i as usize].r
        };
    }
    None
}
