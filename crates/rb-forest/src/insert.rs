//! Insertion: BST attach followed by the recoloring/rotation fixup.
//!
//! The fixup is driven by [`InsertCase`], computed once per step from the
//! uncle's color and the parent/child shape, and runs as an iterative loop
//! over parent links, so its depth is bounded by the tree height.

use crate::node::{child, is_black, is_red, side_of, Color, RbNode, Side};
use crate::rotate::rotate_toward;

/// Fixup case for a red node `n` whose parent exists.
///
/// The `Side` carried by the shape cases is the parent's side under the
/// grandparent; `Inner` is the zig-zag shape (`n` on the opposite side),
/// `Outer` the zig-zig shape (`n` on the same side).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertCase {
    /// Parent is black: nothing is violated.
    ParentBlack,
    /// Parent and uncle are both red: recolor and continue at the
    /// grandparent.
    UncleRed,
    /// Uncle black, zig-zag: one rotation converts this into `Outer`.
    Inner(Side),
    /// Uncle black, zig-zig: recolor plus one rotation terminates.
    Outer(Side),
}

/// Computes the fixup case for `n`.
///
/// `n` must be red and have a parent. When the parent is red it cannot be
/// the root, so the grandparent exists and is black.
pub fn insert_case<K>(arena: &[RbNode<K>], n: u32) -> InsertCase {
    let p = arena[n as usize].p.expect("insert_case requires a parent");
    if is_black(arena, Some(p)) {
        return InsertCase::ParentBlack;
    }
    let g = arena[p as usize]
        .p
        .expect("red parent cannot be the root");
    let parent_side = side_of(arena, p).expect("parent of red node has a parent");
    let uncle = child(arena, g, parent_side.opposite());
    if is_red(arena, uncle) {
        return InsertCase::UncleRed;
    }
    if side_of(arena, n) == Some(parent_side) {
        InsertCase::Outer(parent_side)
    } else {
        InsertCase::Inner(parent_side)
    }
}

/// Inserts the detached red node `node` into the tree rooted at `root` and
/// restores the invariants. Returns the new root.
///
/// Duplicate keys follow the structural tie-break: not-less-than descends
/// right, so an equal key lands after the equal keys already present.
pub fn insert<K, C>(
    arena: &mut [RbNode<K>],
    root: Option<u32>,
    node: u32,
    comparator: &C,
) -> Option<u32>
where
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        arena[node as usize].color = Color::Black;
        return Some(node);
    };

    loop {
        let cmp = comparator(&arena[node as usize].k, &arena[curr as usize].k);
        let next = if cmp < 0 {
            arena[curr as usize].l
        } else {
            arena[curr as usize].r
        };
        match next {
            Some(next) => curr = next,
            None => {
                if cmp < 0 {
                    arena[curr as usize].l = Some(node);
                } else {
                    arena[curr as usize].r = Some(node);
                }
                arena[node as usize].p = Some(curr);
                break;
            }
        }
    }

    fixup(arena, root, node)
}

fn fixup<K>(arena: &mut [RbNode<K>], mut root: Option<u32>, node: u32) -> Option<u32> {
    let mut n = node;
    loop {
        if arena[n as usize].p.is_none() {
            arena[n as usize].color = Color::Black;
            return Some(n);
        }
        match insert_case(arena, n) {
            InsertCase::ParentBlack => return root,
            InsertCase::UncleRed => {
                let p = arena[n as usize].p.expect("parent exists");
                let g = arena[p as usize].p.expect("grandparent exists");
                let parent_side = side_of(arena, p).expect("parent is not the root");
                let u = child(arena, g, parent_side.opposite()).expect("uncle is red");
                arena[p as usize].color = Color::Black;
                arena[u as usize].color = Color::Black;
                arena[g as usize].color = Color::Red;
                n = g;
            }
            InsertCase::Inner(parent_side) => {
                let p = arena[n as usize].p.expect("parent exists");
                rotate_toward(arena, p, parent_side);
                n = p;
            }
            InsertCase::Outer(parent_side) => {
                let p = arena[n as usize].p.expect("parent exists");
                let g = arena[p as usize].p.expect("grandparent exists");
                arena[p as usize].color = Color::Black;
                arena[g as usize].color = Color::Red;
                let top = rotate_toward(arena, g, parent_side.opposite());
                if arena[top as usize].p.is_none() {
                    root = Some(top);
                }
                return root;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RbNode;

    fn red(k: i32) -> RbNode<i32> {
        RbNode::new(k)
    }

    fn black(k: i32) -> RbNode<i32> {
        let mut n = RbNode::new(k);
        n.color = Color::Black;
        n
    }

    fn link<K>(arena: &mut [RbNode<K>], p: u32, l: Option<u32>, r: Option<u32>) {
        arena[p as usize].l = l;
        arena[p as usize].r = r;
        if let Some(l) = l {
            arena[l as usize].p = Some(p);
        }
        if let Some(r) = r {
            arena[r as usize].p = Some(p);
        }
    }

    #[test]
    fn black_parent_needs_no_repair() {
        let mut arena = vec![black(10), red(5)];
        link(&mut arena, 0, Some(1), None);
        assert_eq!(insert_case(&arena, 1), InsertCase::ParentBlack);
    }

    #[test]
    fn red_uncle_dispatches_to_recolor() {
        // 0 black root, 1/2 red children, 3 the new red node under 1.
        let mut arena = vec![black(10), red(5), red(20), red(3)];
        link(&mut arena, 0, Some(1), Some(2));
        link(&mut arena, 1, Some(3), None);
        assert_eq!(insert_case(&arena, 3), InsertCase::UncleRed);
    }

    #[test]
    fn zig_zag_and_zig_zig_shapes() {
        // Left-side parent, no uncle.
        let mut arena = vec![black(10), red(5), red(7), red(3)];
        link(&mut arena, 0, Some(1), None);
        link(&mut arena, 1, Some(3), Some(2));
        assert_eq!(insert_case(&arena, 2), InsertCase::Inner(Side::Left));
        assert_eq!(insert_case(&arena, 3), InsertCase::Outer(Side::Left));

        // Mirrored on the right side.
        let mut arena = vec![black(10), red(20), red(15), red(25)];
        link(&mut arena, 0, None, Some(1));
        link(&mut arena, 1, Some(2), Some(3));
        assert_eq!(insert_case(&arena, 2), InsertCase::Inner(Side::Right));
        assert_eq!(insert_case(&arena, 3), InsertCase::Outer(Side::Right));
    }

    #[test]
    fn first_insert_becomes_black_root() {
        let mut arena = vec![red(7)];
        let root = insert(&mut arena, None, 0, &|a: &i32, b: &i32| a - b);
        assert_eq!(root, Some(0));
        assert_eq!(arena[0].color, Color::Black);
    }

    #[test]
    fn equal_keys_descend_right() {
        let cmp = |a: &i32, b: &i32| a - b;
        let mut arena = vec![red(7)];
        let mut root = insert(&mut arena, None, 0, &cmp);
        arena.push(red(7));
        root = insert(&mut arena, root, 1, &cmp);
        assert_eq!(root, Some(0));
        assert_eq!(arena[0].r, Some(1));
        assert_eq!(arena[0].l, None);
    }
}
