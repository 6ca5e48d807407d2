//! Recursive debug printer.

use std::fmt::Debug;

use crate::node::{Color, RbNode};

/// Renders the subtree under `node`, one node per line with its arena
/// index and color. `tab` is the current indentation prefix.
pub fn print<K: Debug>(arena: &[RbNode<K>], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let color = match n.color {
                Color::Black => "black",
                Color::Red => "red",
            };
            let left = print(arena, n.l, &format!("{tab}  "));
            let right = print(arena, n.r, &format!("{tab}  "));
            format!("Node[{i}] {color} {{ {:?} }}\n{tab}L={left}\n{tab}R={right}", n.k)
        }
    }
}
