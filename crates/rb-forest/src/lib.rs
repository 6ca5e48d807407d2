//! Arena-based red-black tree ordered key container.
//!
//! An ordered multiset with worst-case `O(log n)` search, insertion, and
//! deletion, balanced by node coloring. Instead of raw pointers, all
//! "pointers" are `Option<u32>` indices into a `Vec`-backed arena owned by
//! the tree; parent links are non-owning back-references used only during
//! fixup.
//!
//! The high-level entry point is [`RbTree`]. The underlying free functions
//! operate on `(arena, root)` pairs and are public for callers that manage
//! their own arenas.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`node`] | [`RbNode`], [`Color`], [`Side`], link/color helpers |
//! [`rotate`] | `rotate_left` / `rotate_right` primitives |
//! [`insert`] | BST attach + [`InsertCase`] fixup state machine |
//! [`remove`] | deletion reduction + [`DoubleBlackCase`] fixup |
//! [`traverse`] | `first`, `last`, `next`, `find` |
//! [`verify`] | invariant checker, [`InvariantError`] |
//! [`print`] | recursive debug printer |
//! [`tree`] | [`RbTree`] wrapper (arena + free list + comparator) |
//!
//! The structure is a pure single-threaded data type: callers needing
//! shared access serialize whole operations with their own lock.

pub mod insert;
pub mod node;
pub mod print;
pub mod remove;
pub mod rotate;
pub mod traverse;
pub mod tree;
pub mod verify;

pub use insert::{insert, InsertCase};
pub use node::{Color, RbNode, Side};
pub use remove::{remove, DoubleBlackCase};
pub use rotate::{rotate_left, rotate_right};
pub use traverse::{find, first, last, next};
pub use tree::RbTree;
pub use verify::{check, InvariantError};
