//! Node type and link/color helpers.
//!
//! All "pointers" are `Option<u32>` indices into a `Vec<RbNode<K>>` arena
//! owned by the tree. The parent index is a non-owning back-reference used
//! only for upward traversal during fixup; ownership flows strictly through
//! the `l` / `r` child links.

/// Node color. Absent children (`None` links) count as [`Color::Black`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Which child slot a node occupies under its parent.
///
/// Rotation directions and the near/far nephew distinction in the deletion
/// fixup are always expressed relative to a `Side`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Red-black tree node holding a single key.
#[derive(Clone, Debug)]
pub struct RbNode<K> {
    pub k: K,
    pub color: Color,
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
}

impl<K> RbNode<K> {
    /// New detached node. Nodes start red; the insertion path recolors the
    /// sole root black.
    pub fn new(k: K) -> Self {
        Self {
            k,
            color: Color::Red,
            p: None,
            l: None,
            r: None,
        }
    }
}

/// Whether `node` is red. `None` is black.
#[inline]
pub fn is_red<K>(arena: &[RbNode<K>], node: Option<u32>) -> bool {
    node.map(|i| arena[i as usize].color == Color::Red)
        .unwrap_or(false)
}

/// Whether `node` is black. `None` is black.
#[inline]
pub fn is_black<K>(arena: &[RbNode<K>], node: Option<u32>) -> bool {
    !is_red(arena, node)
}

/// Child of `node` on the given side.
#[inline]
pub fn child<K>(arena: &[RbNode<K>], node: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => arena[node as usize].l,
        Side::Right => arena[node as usize].r,
    }
}

/// Sets the child link of `node` on the given side.
#[inline]
pub fn set_child<K>(arena: &mut [RbNode<K>], node: u32, side: Side, v: Option<u32>) {
    match side {
        Side::Left => arena[node as usize].l = v,
        Side::Right => arena[node as usize].r = v,
    }
}

/// Which side of its parent `node` sits on, or `None` for the root.
#[inline]
pub fn side_of<K>(arena: &[RbNode<K>], node: u32) -> Option<Side> {
    let p = arena[node as usize].p?;
    if arena[p as usize].l == Some(node) {
        Some(Side::Left)
    } else {
        Some(Side::Right)
    }
}

/// The other child of `node`'s parent, or `None` for the root.
#[inline]
pub fn sibling<K>(arena: &[RbNode<K>], node: u32) -> Option<u32> {
    let p = arena[node as usize].p?;
    let side = if arena[p as usize].l == Some(node) {
        Side::Right
    } else {
        Side::Left
    };
    child(arena, p, side)
}
