//! Index arithmetic for a list laid out as a complete binary tree.
//!
//! Node `i` has children `2i + 1` and `2i + 2`, so levels fill left to right:
//!
//! ```text
//!            0
//!      1           2
//!   3     4     5     6
//! ```

use std::ops::Range;

pub fn children(index: usize) -> [usize; 2] {
    [2 * index + 1, 2 * index + 2]
}

pub fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// `floor(log2(index + 1))`: the root is on level 0.
pub fn level(index: usize) -> usize {
    (usize::BITS - 1 - (index + 1).leading_zeros()) as usize
}

/// Number of levels needed for `node_count` nodes, `ceil(log2(node_count + 1))`.
pub fn depth(node_count: usize) -> usize {
    (usize::BITS - node_count.leading_zeros()) as usize
}

/// Indices of every node on `level`, whether or not they exist in a given tree.
pub fn level_range(level: usize) -> Range<usize> {
    let start = (1usize << level) - 1;
    start..(2 * start + 1)
}

/// Horizontal centre of `index` on a canvas `width` cells wide. Each level is
/// split into `2^level` equal columns and the node sits in the middle of its
/// own column.
pub fn slot_x(index: usize, width: u16) -> u16 {
    let level = level(index);
    let position = (index - level_range(level).start) as u128;
    let columns = 1u128 << level;
    let x = (2 * position + 1) * u128::from(width) / (2 * columns);
    x as u16
}
