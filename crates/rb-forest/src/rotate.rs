//! Rotation primitives.
//!
//! A rotation restructures three nodes (the pivot, the child that replaces
//! it, and the subtree that moves between them) while preserving the
//! in-order sequence. Parent back-references are updated on all three, and
//! the former parent's child link is redirected to the new subtree top.
//! Rotations never touch colors; callers recolor before or after.

use crate::node::{RbNode, Side};

/// Left-rotates `node`: its right child takes its position, `node` becomes
/// that child's left child, and the child's former left subtree becomes
/// `node`'s new right subtree. Returns the new subtree top.
pub fn rotate_left<K>(arena: &mut [RbNode<K>], node: u32) -> u32 {
    let x = arena[node as usize]
        .r
        .expect("rotate_left requires a right child");
    let xl = arena[x as usize].l;
    arena[node as usize].r = xl;
    if let Some(xl) = xl {
        arena[xl as usize].p = Some(node);
    }

    arena[x as usize].l = Some(node);
    let node_p = arena[node as usize].p;
    arena[x as usize].p = node_p;
    arena[node as usize].p = Some(x);

    if let Some(p) = node_p {
        if arena[p as usize].l == Some(node) {
            arena[p as usize].l = Some(x);
        } else {
            arena[p as usize].r = Some(x);
        }
    }

    x
}

/// Mirror of [`rotate_left`].
pub fn rotate_right<K>(arena: &mut [RbNode<K>], node: u32) -> u32 {
    let x = arena[node as usize]
        .l
        .expect("rotate_right requires a left child");
    let xr = arena[x as usize].r;
    arena[node as usize].l = xr;
    if let Some(xr) = xr {
        arena[xr as usize].p = Some(node);
    }

    arena[x as usize].r = Some(node);
    let node_p = arena[node as usize].p;
    arena[x as usize].p = node_p;
    arena[node as usize].p = Some(x);

    if let Some(p) = node_p {
        if arena[p as usize].l == Some(node) {
            arena[p as usize].l = Some(x);
        } else {
            arena[p as usize].r = Some(x);
        }
    }

    x
}

/// Rotates `node` toward `side`: the child on the opposite side comes up.
///
/// "Rotate the parent toward the deficient side" in the deletion fixup and
/// the zig-zag step of the insertion fixup are both expressed through this.
pub fn rotate_toward<K>(arena: &mut [RbNode<K>], node: u32, side: Side) -> u32 {
    match side {
        Side::Left => rotate_left(arena, node),
        Side::Right => rotate_right(arena, node),
    }
}
