//! Height-aware join and the split built on top of it.
//!
//! Both run in time proportional to tree height. A split descends once, parking every subtree it
//! steps past together with the node it stepped over, then joins the parked fragments deepest
//! first so each join only pays for the height difference it absorbs.

use alloc::boxed::Box;
use core::cmp::Ordering;

use smallvec::SmallVec;

use super::PATH_CAPACITY;
use super::node::{self, Link, Node};
use super::rebalance;
use crate::Balance;

/// A detached subtree together with the bookkeeping a join needs.
pub(crate) struct Subtree {
    pub(crate) root: Link,
    pub(crate) height: isize,
    pub(crate) len: usize,
}

impl Subtree {
    pub(crate) const EMPTY: Self = Self {
        root: None,
        height: -1,
        len: 0,
    };

    /// Wraps a balanced subtree whose length is already known.
    pub(crate) fn new(root: Link, len: usize) -> Self {
        let height = node::height(root.as_deref());
        Self { root, height, len }
    }
}

/// Joins `left`, `mid` and `right` into one balanced subtree whose in-order sequence is `left`,
/// then `mid`, then `right`.
///
/// `mid` is relinked as-is; its previous children, rank and balance are overwritten.
pub(crate) fn join(left: Subtree, mid: Box<Node>, right: Subtree, rotations: &mut usize) -> Subtree {
    let len = left.len + 1 + right.len;
    if left.height > right.height + 1 {
        let height = left.height;
        let mut root = left.root.expect("`join()` - taller side is empty!");
        let grew = join_right(&mut root, height, left.len, mid, right, rotations);
        Subtree {
            root: Some(root),
            height: height + isize::from(grew),
            len,
        }
    } else if right.height > left.height + 1 {
        let height = right.height;
        let mut root = right.root.expect("`join()` - taller side is empty!");
        let grew = join_left(&mut root, height, mid, left, rotations);
        Subtree {
            root: Some(root),
            height: height + isize::from(grew),
            len,
        }
    } else {
        attach(left, mid, right)
    }
}

/// Makes `mid` the root over two subtrees whose heights differ by at most one.
fn attach(left: Subtree, mut mid: Box<Node>, right: Subtree) -> Subtree {
    mid.rank = left.len;
    mid.balance = Balance::from_heights(left.height, right.height);
    mid.left = left.root;
    mid.right = right.root;
    Subtree {
        root: Some(mid),
        height: left.height.max(right.height) + 1,
        len: left.len + 1 + right.len,
    }
}

/// Walks down the right spine of the taller left tree until the subtree there is at most one
/// level taller than `right`, attaches `mid` there and rebalances on the way back up.
///
/// Returns whether the subtree in `slot` grew.
fn join_right(
    slot: &mut Box<Node>,
    height: isize,
    len: usize,
    mid: Box<Node>,
    right: Subtree,
    rotations: &mut usize,
) -> bool {
    let (_, child_height) = slot.child_heights(height);
    let child_len = len - slot.rank - 1;
    if child_height <= right.height + 1 {
        let child = Subtree {
            root: slot.right.take(),
            height: child_height,
            len: child_len,
        };
        slot.right = attach(child, mid, right).root;
        // `attach` always yields a subtree one level taller than the one it replaced.
        return rebalance::right_grew(slot, rotations);
    }

    let child = slot.right.as_mut().expect("`join_right()` - spine ended early!");
    join_right(child, child_height, child_len, mid, right, rotations) && rebalance::right_grew(slot, rotations)
}

/// Mirror of [`join_right`] down the left spine of the taller right tree. Every node on the
/// spine gains `left.len + 1` nodes on its left.
fn join_left(
    slot: &mut Box<Node>,
    height: isize,
    mid: Box<Node>,
    left: Subtree,
    rotations: &mut usize,
) -> bool {
    let (child_height, _) = slot.child_heights(height);
    let child_len = slot.rank;
    slot.rank += left.len + 1;
    if child_height <= left.height + 1 {
        let child = Subtree {
            root: slot.left.take(),
            height: child_height,
            len: child_len,
        };
        slot.left = attach(left, mid, child).root;
        return rebalance::left_grew(slot, rotations);
    }

    let child = slot.left.as_mut().expect("`join_left()` - spine ended early!");
    join_left(child, child_height, mid, left, rotations) && rebalance::left_grew(slot, rotations)
}

/// Splits `tree` into the first `pos` elements and the rest.
pub(crate) fn split(tree: Subtree, mut pos: usize, rotations: &mut usize) -> (Subtree, Subtree) {
    // Fragments that end up left of the split point, each with the node that follows it.
    let mut lefts: SmallVec<[(Subtree, Box<Node>); PATH_CAPACITY]> = SmallVec::new();
    // Fragments that end up right of the split point, each with the node that precedes it.
    let mut rights: SmallVec<[(Box<Node>, Subtree); PATH_CAPACITY]> = SmallVec::new();
    let mut left_seed = Subtree::EMPTY;

    let mut current = tree;
    while let Some(mut node) = current.root.take() {
        let (left_height, right_height) = node.child_heights(current.height);
        let left = Subtree {
            root: node.left.take(),
            height: left_height,
            len: node.rank,
        };
        let right = Subtree {
            root: node.right.take(),
            height: right_height,
            len: current.len - node.rank - 1,
        };

        match pos.cmp(&left.len) {
            Ordering::Less => {
                rights.push((node, right));
                current = left;
            }
            Ordering::Equal => {
                rights.push((node, right));
                left_seed = left;
                break;
            }
            Ordering::Greater => {
                pos -= left.len + 1;
                lefts.push((left, node));
                current = right;
            }
        }
    }

    let mut left = left_seed;
    while let Some((fragment, node)) = lefts.pop() {
        left = join(fragment, node, left, rotations);
    }

    let mut right = Subtree::EMPTY;
    while let Some((node, fragment)) = rights.pop() {
        right = join(right, node, fragment, rotations);
    }

    (left, right)
}
