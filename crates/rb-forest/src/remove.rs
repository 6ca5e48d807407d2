//! Deletion: reduction to an at-most-one-child node, then the five-case
//! double-black fixup.
//!
//! A two-child node swaps keys with its in-order successor and the
//! successor is the node physically unlinked. A one-child node splices its
//! (necessarily red) child up and recolors it black. A red leaf unlinks
//! directly. A black leaf leaves a double-black deficiency that the
//! black-leaf fixup resolves; the deficient leaf stays linked while the
//! fixup runs, because case dispatch reads the structure around its
//! position, and a terminating case unlinks it.

use std::mem;

use crate::node::{child, is_red, set_child, sibling, side_of, Color, RbNode};
use crate::rotate::rotate_toward;
use crate::traverse::first;

/// Fixup case for a double-black deficiency at a node with a parent.
///
/// Near/far nephews are the sibling's children on the deficient side and
/// the side away from it; absent nodes count as black, so dispatch is
/// purely on color, never on child existence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoubleBlackCase {
    /// Red sibling: one color swap plus rotation exposes a black sibling.
    SiblingRed,
    /// Black sibling, red far nephew: terminal recolor-and-rotate.
    FarNephewRed,
    /// Black sibling, red near nephew only: rotate the sibling to turn the
    /// near nephew into a far one.
    NearNephewRed,
    /// Black sibling, black nephews, red parent: terminal color swap.
    ParentRed,
    /// Everything black: recolor the sibling and push the deficiency up.
    AllBlack,
}

/// Computes the fixup case for the deficient node `n`.
///
/// `n` must have a parent; the sibling always exists because the other
/// side of the parent carries at least one black unit.
pub fn double_black_case<K>(arena: &[RbNode<K>], n: u32) -> DoubleBlackCase {
    let p = arena[n as usize]
        .p
        .expect("double_black_case requires a parent");
    let side = side_of(arena, n).expect("node has a parent");
    let s = sibling(arena, n).expect("deficient node has a sibling");
    if is_red(arena, Some(s)) {
        return DoubleBlackCase::SiblingRed;
    }
    if is_red(arena, child(arena, s, side.opposite())) {
        DoubleBlackCase::FarNephewRed
    } else if is_red(arena, child(arena, s, side)) {
        DoubleBlackCase::NearNephewRed
    } else if is_red(arena, Some(p)) {
        DoubleBlackCase::ParentRed
    } else {
        DoubleBlackCase::AllBlack
    }
}

/// Removes `node` from the tree rooted at `root`.
///
/// Returns the new root and the index of the physically unlinked node
/// (the in-order successor when `node` had two children), whose slot the
/// caller reclaims. The unlinked node's links are cleared.
pub fn remove<K>(arena: &mut [RbNode<K>], root: Option<u32>, node: u32) -> (Option<u32>, u32) {
    let mut root = root;
    let mut n = node;

    if arena[n as usize].l.is_some() && arena[n as usize].r.is_some() {
        let s = first(arena, arena[n as usize].r).expect("right subtree is non-empty");
        swap_keys(arena, n, s);
        n = s;
    }

    let l = arena[n as usize].l;
    let r = arena[n as usize].r;
    if let Some(c) = l.or(r) {
        // Single child: the node is black and the child red, so splicing
        // the child up and recoloring it black restores the lost black
        // unit directly.
        let p = arena[n as usize].p;
        arena[c as usize].p = p;
        match p {
            Some(p) => {
                let side = side_of(arena, n).expect("node has a parent");
                set_child(arena, p, side, Some(c));
            }
            None => root = Some(c),
        }
        arena[c as usize].color = Color::Black;
    } else if arena[n as usize].p.is_none() {
        root = None;
    } else if is_red(arena, Some(n)) {
        // A red leaf carries no black height; unlink it.
        unlink_leaf(arena, n);
    } else {
        root = fix_double_black(arena, root, n);
    }

    arena[n as usize].p = None;
    arena[n as usize].l = None;
    arena[n as usize].r = None;
    (root, n)
}

/// Resolves the double-black deficiency left by removing the black leaf
/// `leaf`. Iterative; each step either terminates or moves the deficient
/// position one level up, so at most `O(log n)` steps run.
fn fix_double_black<K>(arena: &mut [RbNode<K>], mut root: Option<u32>, leaf: u32) -> Option<u32> {
    let mut n = leaf;
    loop {
        let p = arena[n as usize].p.expect("deficient node has a parent");
        let side = side_of(arena, n).expect("node has a parent");
        let s = sibling(arena, n).expect("deficient node has a sibling");
        match double_black_case(arena, n) {
            DoubleBlackCase::SiblingRed => {
                // The parent is black. Swapping colors and rotating toward
                // the deficient side gives n a black sibling; re-dispatch
                // on the same node.
                arena[p as usize].color = Color::Red;
                arena[s as usize].color = Color::Black;
                let top = rotate_toward(arena, p, side);
                if arena[top as usize].p.is_none() {
                    root = Some(top);
                }
            }
            DoubleBlackCase::FarNephewRed => {
                let far = child(arena, s, side.opposite()).expect("far nephew is red");
                arena[s as usize].color = arena[p as usize].color;
                arena[p as usize].color = Color::Black;
                arena[far as usize].color = Color::Black;
                let top = rotate_toward(arena, p, side);
                if arena[top as usize].p.is_none() {
                    root = Some(top);
                }
                if n == leaf {
                    unlink_leaf(arena, leaf);
                }
                return root;
            }
            DoubleBlackCase::NearNephewRed => {
                // Swap sibling/near-nephew colors and rotate the sibling
                // away from the deficient side; the next dispatch sees a
                // red far nephew.
                let near = child(arena, s, side).expect("near nephew is red");
                arena[s as usize].color = Color::Red;
                arena[near as usize].color = Color::Black;
                rotate_toward(arena, s, side.opposite());
            }
            DoubleBlackCase::ParentRed => {
                arena[p as usize].color = Color::Black;
                arena[s as usize].color = Color::Red;
                if n == leaf {
                    unlink_leaf(arena, leaf);
                }
                return root;
            }
            DoubleBlackCase::AllBlack => {
                // Both subtrees of the parent lose one black unit; the
                // parent's position becomes the deficient one.
                arena[s as usize].color = Color::Red;
                if n == leaf {
                    unlink_leaf(arena, leaf);
                }
                if arena[p as usize].p.is_none() {
                    return root;
                }
                n = p;
            }
        }
    }
}

fn unlink_leaf<K>(arena: &mut [RbNode<K>], leaf: u32) {
    let p = arena[leaf as usize].p.expect("leaf has a parent");
    let side = side_of(arena, leaf).expect("leaf has a parent");
    set_child(arena, p, side, None);
}

fn swap_keys<K>(arena: &mut [RbNode<K>], a: u32, b: u32) {
    debug_assert_ne!(a, b);
    let (lo, hi) = (a.min(b) as usize, a.max(b) as usize);
    let (head, tail) = arena.split_at_mut(hi);
    mem::swap(&mut head[lo].k, &mut tail[0].k);
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
    fn red_sibling_dispatch() {
        // 0 black parent, 1 deficient black leaf, 2 red sibling with two
        // black children.
        let mut arena = vec![black(10), black(5), red(20), black(15), black(25)];
        link(&mut arena, 0, Some(1), Some(2));
        link(&mut arena, 2, Some(3), Some(4));
        assert_eq!(double_black_case(&arena, 1), DoubleBlackCase::SiblingRed);
    }

    #[test]
    fn far_and_near_nephew_dispatch() {
        // Deficient on the left: far nephew is the sibling's right child.
        let mut arena = vec![black(10), black(5), black(20), red(25)];
        link(&mut arena, 0, Some(1), Some(2));
        link(&mut arena, 2, None, Some(3));
        assert_eq!(double_black_case(&arena, 1), DoubleBlackCase::FarNephewRed);

        let mut arena = vec![black(10), black(5), black(20), red(15)];
        link(&mut arena, 0, Some(1), Some(2));
        link(&mut arena, 2, Some(3), None);
        assert_eq!(double_black_case(&arena, 1), DoubleBlackCase::NearNephewRed);

        // Mirrored: deficient on the right, far nephew is the left child.
        let mut arena = vec![black(10), black(20), black(5), red(3)];
        link(&mut arena, 0, Some(2), Some(1));
        link(&mut arena, 2, Some(3), None);
        assert_eq!(double_black_case(&arena, 1), DoubleBlackCase::FarNephewRed);
    }

    #[test]
    fn red_far_nephew_wins_over_red_near_nephew() {
        let mut arena = vec![black(10), black(5), black(20), red(15), red(25)];
        link(&mut arena, 0, Some(1), Some(2));
        link(&mut arena, 2, Some(3), Some(4));
        assert_eq!(double_black_case(&arena, 1), DoubleBlackCase::FarNephewRed);
    }

    #[test]
    fn parent_color_decides_the_all_black_split() {
        let mut arena = vec![red(10), black(5), black(20)];
        link(&mut arena, 0, Some(1), Some(2));
        assert_eq!(double_black_case(&arena, 1), DoubleBlackCase::ParentRed);

        let mut arena = vec![black(10), black(5), black(20)];
        link(&mut arena, 0, Some(1), Some(2));
        assert_eq!(double_black_case(&arena, 1), DoubleBlackCase::AllBlack);
    }

    #[test]
    fn black_nephews_do_not_count_as_present() {
        // Sibling has two black children; dispatch must fall through to
        // the parent-color split, not treat them as nephews to rotate to.
        let mut arena = vec![black(10), black(5), black(20), black(15), black(25)];
        link(&mut arena, 0, Some(1), Some(2));
        link(&mut arena, 2, Some(3), Some(4));
        assert_eq!(double_black_case(&arena, 1), DoubleBlackCase::AllBlack);
    }

    #[test]
    fn removing_the_sole_root_empties_the_tree() {
        let mut arena = vec![black(7)];
        let (root, freed) = remove(&mut arena, Some(0), 0);
        assert_eq!(root, None);
        assert_eq!(freed, 0);
    }

    #[test]
    fn one_child_splice_recolors_the_child_black() {
        let mut arena = vec![black(10), red(5)];
        link(&mut arena, 0, Some(1), None);
        let (root, freed) = remove(&mut arena, Some(0), 0);
        assert_eq!(root, Some(1));
        assert_eq!(freed, 0);
        assert_eq!(arena[1].color, Color::Black);
        assert_eq!(arena[1].p, None);
    }

    #[test]
    fn two_child_removal_unlinks_the_successor() {
        //    10
        //   /  \
        //  5    20
        let mut arena = vec![black(10), black(5), black(20)];
        link(&mut arena, 0, Some(1), Some(2));
        let (root, freed) = remove(&mut arena, Some(0), 0);
        // Successor 20's key moved into the root slot.
        assert_eq!(root, Some(0));
        assert_eq!(freed, 2);
        assert_eq!(arena[0].k, 20);
        assert_eq!(arena[0].r, None);
        assert_eq!(arena[0].l, Some(1));
    }
}
