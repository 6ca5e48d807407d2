//! Structural invariant checker.
//!
//! Walks the whole tree and verifies the red-black invariants: black root,
//! consistent parent links, no red node with a red child, equal black
//! height on every root-to-nil path, and non-decreasing in-order key
//! order. Used by tests after every mutation and available to callers for
//! debugging.

use thiserror::Error;

use crate::node::{Color, RbNode};
use crate::traverse::{first, next};

/// A violated red-black invariant, with the offending arena indices.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root node {0} has a parent link")]
    RootHasParent(u32),
    #[error("root node {0} is red")]
    RedRoot(u32),
    #[error("child {child} does not link back to parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("red node {parent} has red child {child}")]
    RedRedViolation { parent: u32, child: u32 },
    #[error("black-height mismatch under node {node}: left {left}, right {right}")]
    BlackHeightMismatch { node: u32, left: usize, right: usize },
    #[error("keys out of order between nodes {0} and {1}")]
    OrderViolation(u32, u32),
}

/// Checks every invariant of the tree rooted at `root`. An empty tree is
/// trivially valid.
pub fn check<K, C>(
    arena: &[RbNode<K>],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), InvariantError>
where
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p.is_some() {
        return Err(InvariantError::RootHasParent(root));
    }
    if arena[root as usize].color == Color::Red {
        return Err(InvariantError::RedRoot(root));
    }

    black_height(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if comparator(&arena[prev as usize].k, &arena[i as usize].k) > 0 {
                return Err(InvariantError::OrderViolation(prev, i));
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

fn black_height<K>(arena: &[RbNode<K>], node: Option<u32>) -> Result<usize, InvariantError> {
    let Some(node) = node else {
        return Ok(0);
    };

    let l = arena[node as usize].l;
    let r = arena[node as usize].r;

    for c in [l, r].into_iter().flatten() {
        if arena[c as usize].p != Some(node) {
            return Err(InvariantError::BrokenParentLink {
                parent: node,
                child: c,
            });
        }
        if arena[node as usize].color == Color::Red && arena[c as usize].color == Color::Red {
            return Err(InvariantError::RedRedViolation {
                parent: node,
                child: c,
            });
        }
    }

    let lh = black_height(arena, l)?;
    let rh = black_height(arena, r)?;
    if lh != rh {
        return Err(InvariantError::BlackHeightMismatch {
            node,
            left: lh,
            right: rh,
        });
    }

    Ok(lh
        + if arena[node as usize].color == Color::Black {
            1
        } else {
            0
        })
}
